//! # Tab Transposer
//!
//! Line-oriented driver: classify each line as a chord line or not, and
//! rewrite only the chord tokens on chord lines. Lyrics, blank lines, and
//! section labels come through byte-identical.
//!
//! ## Classification
//! A line is a chord line iff its first two whitespace-delimited tokens
//! are each valid chords on their own. The two-token lookahead keeps prose
//! out: "A Movie Script Ending" starts with a perfectly valid A chord, but
//! "Movie" fails, so the line is left alone. Lines with zero or one token
//! are never chord lines.
//!
//! ## Rewriting
//! Chord lines are rescanned token by token. Each valid chord is replaced
//! at its first occurrence at or after a running cursor, and the cursor
//! then moves past the end of the replacement, so repeated identical chords
//! replace left to right without ever re-matching an earlier one, and the
//! whitespace between tokens is untouched.

use crate::chord;
use crate::key::Key;
use crate::transpose;

/// Whether a line of text is made of chords.
pub fn is_chord_line(line: &str) -> bool {
    let mut words = line.split_whitespace();
    match (words.next(), words.next()) {
        (Some(first), Some(second)) => {
            chord::is_valid_chord(first) && chord::is_valid_chord(second)
        }
        _ => false,
    }
}

/// Rewrite every valid chord token on a single chord line.
fn transpose_line(line: &str, old: &Key, new: &Key) -> String {
    let mut rewritten = line.to_string();
    let mut cursor = 0;
    for word in line.split_whitespace() {
        if !chord::is_valid_chord(word) {
            continue;
        }
        let found = match rewritten[cursor..].find(word) {
            Some(offset) => cursor + offset,
            None => continue,
        };
        let replacement = transpose::transpose_chord(word, old, new);
        rewritten.replace_range(found..found + word.len(), &replacement);
        cursor = found + replacement.len();
    }
    rewritten
}

/// Transpose a whole tab, line by line.
///
/// Non-chord lines pass through unmodified. Every line, including the
/// last, is emitted with a trailing newline.
pub fn transpose_tab(source: &str, old: &Key, new: &Key) -> String {
    let mut output = String::with_capacity(source.len() + 1);
    for line in source.lines() {
        if is_chord_line(line) {
            output.push_str(&transpose_line(line, old, new));
        } else {
            output.push_str(line);
        }
        output.push('\n');
    }
    output
}
