//! Optional YAML frontmatter on tab documents.
//!
//! A tab may open with a `---` fenced block declaring title, artist, and
//! the key the chart is written in:
//!
//! ```text
//! ---
//! title: Wish You Were Here
//! artist: Pink Floyd
//! key: G
//! ---
//! ```
//!
//! The block is split off before any line classification runs, so a
//! frontmatter line is never mistaken for a chord line. On output the
//! block is reproduced verbatim except the `key:` value, which is
//! rewritten to the destination tonic.

use serde::Deserialize;

use crate::error::TabError;
use crate::note;

/// Document metadata from the frontmatter block. All fields optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Metadata {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub key: Option<String>,
}

/// Split a document into its raw frontmatter text and body.
///
/// The frontmatter is everything between a leading `---` line and the
/// next `---` line, newlines included; the body is everything after the
/// closing fence. Returns `None` when the document doesn't start with a
/// fence or the fence never closes; the whole input is body then.
pub fn split_frontmatter(source: &str) -> Option<(&str, &str)> {
    let mut offset = 0;
    let mut yaml_start = None;
    for line in source.split_inclusive('\n') {
        let start = offset;
        offset += line.len();
        let trimmed = line.trim_end_matches('\n').trim_end_matches('\r');
        match yaml_start {
            None => {
                if trimmed != "---" {
                    return None;
                }
                yaml_start = Some(offset);
            }
            Some(yaml_start) => {
                if trimmed == "---" {
                    return Some((&source[yaml_start..start], &source[offset..]));
                }
            }
        }
    }
    None
}

/// Deserialize a frontmatter block, validating any declared key.
pub fn parse_metadata(yaml: &str) -> Result<Metadata, TabError> {
    let metadata: Metadata =
        serde_yaml::from_str(yaml).map_err(|e| TabError::MetadataError(e.to_string()))?;
    if let Some(key) = &metadata.key {
        if !note::is_valid_note(key) {
            return Err(TabError::MetadataError(format!("Invalid key: {}", key)));
        }
    }
    Ok(metadata)
}

/// Reproduce a frontmatter block with the `key:` value replaced.
pub fn rewrite_key(yaml: &str, tonic: &str) -> String {
    let mut output = String::with_capacity(yaml.len());
    for line in yaml.lines() {
        if line.trim_start().starts_with("key:") {
            output.push_str("key: ");
            output.push_str(tonic);
        } else {
            output.push_str(line);
        }
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_fenced_frontmatter() {
        let source = "---\ntitle: Song\nkey: G\n---\nC  G\nwords\n";
        let (yaml, body) = split_frontmatter(source).unwrap();
        assert_eq!(yaml, "title: Song\nkey: G\n");
        assert_eq!(body, "C  G\nwords\n");
    }

    #[test]
    fn no_fence_means_no_frontmatter() {
        assert!(split_frontmatter("C  G\n").is_none());
        assert!(split_frontmatter("").is_none());
        // an unterminated fence is not frontmatter either
        assert!(split_frontmatter("---\ntitle: Song\n").is_none());
    }

    #[test]
    fn parses_known_fields() {
        let metadata = parse_metadata("title: Song\nartist: Band\nkey: Bb\n").unwrap();
        assert_eq!(metadata.title.as_deref(), Some("Song"));
        assert_eq!(metadata.artist.as_deref(), Some("Band"));
        assert_eq!(metadata.key.as_deref(), Some("Bb"));
    }

    #[test]
    fn rejects_invalid_declared_keys() {
        let err = parse_metadata("key: H\n").unwrap_err();
        assert_eq!(err.to_string(), "Invalid metadata: Invalid key: H");
    }

    #[test]
    fn rejects_malformed_yaml() {
        assert!(matches!(
            parse_metadata("title: [unclosed\n"),
            Err(TabError::MetadataError(_))
        ));
    }

    #[test]
    fn rewrites_only_the_key_line() {
        let yaml = "title: Song\nkey: G\nartist: Band\n";
        assert_eq!(
            rewrite_key(yaml, "Bb"),
            "title: Song\nkey: Bb\nartist: Band\n"
        );
        // no key line, nothing to rewrite
        assert_eq!(rewrite_key("title: Song\n", "Bb"), "title: Song\n");
    }
}
