pub mod chord;
pub mod error;
pub mod key;
pub mod metadata;
pub mod note;
pub mod tab;
pub mod transpose;

pub use chord::{is_valid_chord, ChordToken};
pub use error::TabError;
pub use key::Key;
pub use metadata::Metadata;
pub use note::{is_valid_note, Spelling};
pub use tab::{is_chord_line, transpose_tab};
pub use transpose::{interval, transpose_chord, transpose_note};

/// Transpose a tab from one key to another.
/// This is the main entry point for the library.
pub fn transpose(source: &str, from: &str, to: &str) -> Result<String, TabError> {
    let old = Key::parse(from)?;
    let new = Key::parse(to)?;
    Ok(tab::transpose_tab(source, &old, &new))
}

/// Transpose a document that may open with YAML frontmatter.
///
/// The source key is the explicit `from` argument when given, else the
/// frontmatter's `key:` field. The frontmatter is reproduced with its
/// `key:` value rewritten to the destination tonic; the body is
/// transposed as by [`transpose`].
pub fn transpose_document(
    source: &str,
    from: Option<&str>,
    to: &str,
) -> Result<String, TabError> {
    let new = Key::parse(to)?;
    match metadata::split_frontmatter(source) {
        Some((yaml, body)) => {
            let meta = metadata::parse_metadata(yaml)?;
            let old = match from.or(meta.key.as_deref()) {
                Some(name) => Key::parse(name)?,
                None => return Err(TabError::MissingSourceKey),
            };
            let head = metadata::rewrite_key(yaml, &note::capitalize(new.name()));
            let body = tab::transpose_tab(body, &old, &new);
            Ok(format!("---\n{}---\n{}", head, body))
        }
        None => {
            let old = match from {
                Some(name) => Key::parse(name)?,
                None => return Err(TabError::MissingSourceKey),
            };
            Ok(tab::transpose_tab(source, &old, &new))
        }
    }
}
