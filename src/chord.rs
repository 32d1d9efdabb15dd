//! # Chord Grammar
//!
//! This module decides which tokens are chords and splits them into parts.
//!
//! ## Token Shape
//! A chord token is `root + quality + optional "/" + bass`:
//! - **root**: a note letter, optionally followed by `b` or `#`
//! - **quality**: a suffix from a closed vocabulary (`m7`, `sus4`, `maj9`, ...)
//! - **bass**: a note name after a single slash (`D/F#`)
//!
//! ## The Overloaded `b`
//! `b` is both an accidental and the start of the altered-fifth qualities
//! `b5#9`/`b5b9`. `Gb5#9` is a G chord with quality `b5#9`; `Gbb5#9` is a
//! Gb chord with the same quality. Root extraction resolves this by the
//! position of the altered-fifth suffix before it ever looks at the
//! accidental, see [`root_of`].
//!
//! ## Totality
//! Every predicate here accepts arbitrary strings and answers with a bool
//! or `None`: the empty string, punctuation runs, and multi-slash tokens
//! are all just "not a chord". Invalid tokens are the caller's cue to pass
//! text through untouched.

use crate::note;

/// Recognized chord-quality spellings, sorted for binary search.
///
/// Matching is case-insensitive: suffixes are normalized before lookup,
/// so `M7` and `maj7` both land here.
const QUALITIES: &[&str] = &[
    "#5#9", "#5b9", "11", "13", "13#11", "13sus", "13sus2", "13sus4", "2", "5", "6", "6/9", "7",
    "7#11", "7#5", "7#9", "7b5", "7b5#9", "7b5(#9)", "7b9", "7sus", "7sus2", "7sus4", "9", "9sus",
    "9sus2", "9sus4", "add9", "aug", "aug7#9", "aug9", "b5", "b5#9", "b5b9", "dim", "dim7", "m",
    "m(add9)", "m(maj7)", "m11", "m13", "m6", "m6/9", "m7", "m7b5", "m7b9", "m9", "m9(maj7)",
    "m9b5", "m9m7", "m9maj7", "madd9", "maj", "maj13", "maj7", "maj7#11", "maj9", "major", "mb6",
    "min", "minor", "mm7", "mmaj7", "sus", "sus2", "sus4",
];

/// The altered-fifth suffixes that begin with an accidental character and
/// so collide with a flat or sharp root. Checked in this order, first
/// match wins, case-sensitive.
const ALTERED_FIFTH_SUFFIXES: [&str; 4] = ["b5#9", "b5b9", "#5b9", "#5#9"];

/// A chord token decomposed once into its parts.
///
/// `quality` is the raw text between root and slash (or end of token) and
/// is copied verbatim into any rewritten form; only `root` and `bass`
/// are ever renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordToken<'a> {
    pub root: &'a str,
    pub quality: &'a str,
    pub bass: Option<&'a str>,
}

impl<'a> ChordToken<'a> {
    /// Decompose a token, or `None` when it is not a valid chord.
    ///
    /// Priority follows the grammar: a bare note name is a major chord;
    /// then a slash chord; then root + quality.
    pub fn parse(token: &'a str) -> Option<Self> {
        if note::is_valid_note(token) {
            return Some(Self {
                root: token,
                quality: "",
                bass: None,
            });
        }
        if is_valid_slash_chord(token) {
            let slash = token.find('/')?;
            let chord = &token[..slash];
            let root = root_of(chord);
            return Some(Self {
                root,
                quality: &chord[root.len()..],
                bass: Some(&token[slash + 1..]),
            });
        }
        let root = root_of(token);
        if root.is_empty() || !note::is_valid_note(root) {
            return None;
        }
        let quality = &token[root.len()..];
        if quality.is_empty() || is_valid_quality(quality) {
            Some(Self {
                root,
                quality,
                bass: None,
            })
        } else {
            None
        }
    }
}

/// Byte position of the first altered-fifth suffix in the token, if any.
fn altered_fifth_position(token: &str) -> Option<usize> {
    ALTERED_FIFTH_SUFFIXES
        .iter()
        .find_map(|suffix| token.find(suffix))
}

/// The root portion of a token that may or may not be a chord.
///
/// In priority order:
/// 1. An altered-fifth suffix at index 2 means a two-character root
///    (`Gbb5#9` roots as `Gb`); at any other index the root is a single
///    character (`Gb5#9` roots as `G`, its `b` belongs to the suffix).
/// 2. Otherwise an accidental at position 1 makes a two-character root.
/// 3. Otherwise the root is the first character.
///
/// The returned slice is not checked for validity.
pub fn root_of(token: &str) -> &str {
    if let Some(position) = altered_fifth_position(token) {
        if position == 2 {
            return &token[..2];
        }
    } else if matches!(token.as_bytes().get(1), Some(&b'b') | Some(&b'#')) {
        // byte 1 being ASCII guarantees a char boundary at 2
        return &token[..2];
    }
    match token.chars().next() {
        Some(first) => &token[..first.len_utf8()],
        None => "",
    }
}

/// True when the suffix, normalized, is a recognized chord quality.
pub fn is_valid_quality(suffix: &str) -> bool {
    QUALITIES
        .binary_search(&note::normalize(suffix).as_str())
        .is_ok()
}

/// True for `<chord>/<bass>`: exactly one slash, not in last position,
/// with a valid chord before it and a valid note after it.
pub fn is_valid_slash_chord(token: &str) -> bool {
    let slash = match token.find('/') {
        Some(position) => position,
        None => return false,
    };
    if token[slash + 1..].contains('/') {
        return false;
    }
    if slash + 1 == token.len() {
        return false;
    }
    is_valid_chord(&token[..slash]) && note::is_valid_note(&token[slash + 1..])
}

/// Whether a token is a valid chord. Total over all strings.
pub fn is_valid_chord(token: &str) -> bool {
    ChordToken::parse(token).is_some()
}
