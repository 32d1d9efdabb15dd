//! Interval arithmetic and note/chord renaming.

use crate::chord::ChordToken;
use crate::key::Key;
use crate::note::{self, Spelling};

/// Semitones from `old` up to `new`, always in `[0, 12)`.
pub fn interval(old: &Key, new: &Key) -> usize {
    (12 + new.index() - old.index()) % 12
}

/// Rename a note by `interval` semitones.
///
/// The source index comes from whichever table the name belongs to; the
/// result is read out of the table selected by `spelling`, the
/// destination key's preference, not the source note's.
pub fn transpose_note(name: &str, interval: usize, spelling: Spelling) -> &'static str {
    spelling.name_of(note::pitch_class(name) + interval)
}

/// Rewrite a chord token for a new key.
///
/// The root and the slash bass (if any) are renamed and capitalized; the
/// quality text is copied verbatim between them. Tokens that fail to
/// decompose come back unchanged, so this is safe to call on anything.
pub fn transpose_chord(token: &str, old: &Key, new: &Key) -> String {
    let parsed = match ChordToken::parse(token) {
        Some(parsed) => parsed,
        None => return token.to_string(),
    };
    let semitones = interval(old, new);
    let spelling = new.spelling();
    let root = note::capitalize(transpose_note(parsed.root, semitones, spelling));
    match parsed.bass {
        Some(bass) => {
            let bass = note::capitalize(transpose_note(bass, semitones, spelling));
            format!("{}{}/{}", root, parsed.quality, bass)
        }
        None => format!("{}{}", root, parsed.quality),
    }
}
