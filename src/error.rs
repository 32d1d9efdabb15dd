//! # Error Types
//!
//! Boundary errors for the tab transposer.
//!
//! The chord grammar itself is total: a token or line that doesn't parse
//! is passed through unchanged, never rejected. Errors exist only where a
//! caller hands us something that must be valid: a tonic name for a key,
//! or a frontmatter block.
//!
//! ## Usage
//! ```rust
//! use tabshift::{transpose, TabError};
//!
//! match transpose("C  G\n", "c", "q") {
//!     Err(TabError::InvalidNote { name }) => assert_eq!(name, "q"),
//!     other => panic!("expected an invalid-note error, got {:?}", other),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabError {
    /// A tonic name found in neither spelling table.
    ///
    /// # Example
    /// ```
    /// # use tabshift::TabError;
    /// let err = TabError::InvalidNote { name: "H".to_string() };
    /// assert_eq!(err.to_string(), "Invalid note name: H");
    /// ```
    #[error("Invalid note name: {name}")]
    InvalidNote { name: String },

    /// Frontmatter that is not valid YAML, or declares an invalid key.
    #[error("Invalid metadata: {0}")]
    MetadataError(String),

    /// Document-mode transposition with no source key to work from.
    #[error("No source key: pass one explicitly or declare `key:` in the frontmatter")]
    MissingSourceKey,
}
