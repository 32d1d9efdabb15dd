//! Transposition keys.

use std::fmt;

use crate::error::TabError;
use crate::note::{self, Spelling};

/// A validated tonic: its name, chromatic index, and spelling table.
///
/// Built once per transposition session and immutable afterwards. The
/// spelling table is the natural one unless the name is one of the five
/// sharp-preferring spellings (`g#`, `a#`, `c#`, `d#`, `gb`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    name: String,
    index: usize,
    spelling: Spelling,
}

impl Key {
    /// Parse a tonic name like `"A"`, `"bb"`, or `" F# "`.
    ///
    /// The name is normalized (trimmed, lowercased) before lookup.
    pub fn parse(name: &str) -> Result<Self, TabError> {
        let normalized = note::normalize(name);
        if !note::is_valid_note(&normalized) {
            return Err(TabError::InvalidNote {
                name: name.trim().to_string(),
            });
        }
        let spelling = note::spelling_of(&normalized);
        let index = spelling.index_of(&normalized);
        Ok(Self {
            name: normalized,
            index,
            spelling,
        })
    }

    /// Chromatic index of the tonic, in `[0, 12)`.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Spelling table this key writes transposed notes in.
    pub fn spelling(&self) -> Spelling {
        self.spelling
    }

    /// The normalized tonic name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Key {
    // Capitalized root plus numeric id, e.g. "F#, 10". Debug/testing form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", note::capitalize(&self.name), self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_any_case_and_padding() {
        let key = Key::parse("  bB ").unwrap();
        assert_eq!(key.name(), "bb");
        assert_eq!(key.index(), 2);
        assert_eq!(key.spelling(), Spelling::Natural);
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert!(matches!(
            Key::parse("H"),
            Err(TabError::InvalidNote { name }) if name == "H"
        ));
        assert!(Key::parse("").is_err());
    }

    #[test]
    fn alternate_spellings_use_the_sharp_table() {
        let key = Key::parse("C#").unwrap();
        assert_eq!(key.index(), 5);
        assert_eq!(key.spelling(), Spelling::Sharp);

        // f# is spelled in the natural table despite the sharp.
        let key = Key::parse("F#").unwrap();
        assert_eq!(key.index(), 10);
        assert_eq!(key.spelling(), Spelling::Natural);
    }

    #[test]
    fn display_is_capitalized_name_and_index() {
        assert_eq!(Key::parse("a").unwrap().to_string(), "A, 1");
        assert_eq!(Key::parse("f#").unwrap().to_string(), "F#, 10");
    }
}
