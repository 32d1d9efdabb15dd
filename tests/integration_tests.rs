//! Integration tests for the tab transposer
//!
//! Tests the full pipeline from raw tab text to transposed output.

use tabshift::{transpose, transpose_document, TabError};

#[test]
fn test_transpose_a_to_c() {
    let tab = "\
A        D/F#     Am7
Standing on the bridge
";
    let result = transpose(tab, "A", "C").unwrap();
    assert_eq!(
        result,
        "\
C        F/A     Cm7
Standing on the bridge
"
    );
}

#[test]
fn test_layout_is_preserved_outside_chords() {
    let tab = "Intro:\n\n  C         F   G7   \nSo, so you think you can tell\n";
    let result = transpose(tab, "a", "c").unwrap();
    assert_eq!(
        result,
        "Intro:\n\n  Eb         Ab   Bb7   \nSo, so you think you can tell\n"
    );
}

#[test]
fn test_prose_starting_with_a_note_name_is_untouched() {
    // "A" is a valid chord, "Movie" is not: the two-token check keeps
    // titles and lyrics out.
    let tab = "A Movie Script Ending\n";
    let result = transpose(tab, "a", "c").unwrap();
    assert_eq!(result, tab);
}

#[test]
fn test_structure_tags_pass_through() {
    let tab = "Chorus:\nC  G  Am  F\n";
    let result = transpose(tab, "c", "d").unwrap();
    assert_eq!(result, "Chorus:\nD  A  Bm  G\n");
}

#[test]
fn test_destination_key_picks_the_spelling_table() {
    // C# prefers the sharp table, which respells F a semitone up as Gb.
    let result = transpose("C  F  Bb\n", "c", "c#").unwrap();
    assert_eq!(result, "C#  Gb  B\n");
}

#[test]
fn test_altered_fifth_chords_transpose_by_the_right_root() {
    // Gb5#9 is a G chord with quality b5#9; Gbb5#9 is a Gb chord.
    let result = transpose("Gb5#9  Gbb5#9\n", "g", "a").unwrap();
    assert_eq!(result, "Ab5#9  Abb5#9\n");
}

#[test]
fn test_slash_chord_with_altered_quality_reassembles_cleanly() {
    // Quality text between root and slash is copied verbatim; the bass
    // is renamed separately.
    let result = transpose("Bbmaj7#11/A  Eb\n", "a", "f").unwrap();
    assert_eq!(result, "F#maj7#11/F  B\n");
}

#[test]
fn test_capital_m_major_chords_are_accepted() {
    // The quality vocabulary is matched case-insensitively, so AM parses
    // as an A chord with quality M. More permissive than charts that only
    // recognize lowercase m.
    let result = transpose("AM  DM\n", "a", "c").unwrap();
    assert_eq!(result, "CM  FM\n");
}

#[test]
fn test_invalid_keys_are_rejected() {
    assert!(matches!(
        transpose("C  G\n", "H", "c"),
        Err(TabError::InvalidNote { .. })
    ));
    assert!(matches!(
        transpose("C  G\n", "c", ""),
        Err(TabError::InvalidNote { .. })
    ));
}

#[test]
fn test_round_trip_restores_the_tab() {
    let tab = "C  G7  Am\nwords words words\nD/F#  G\n";
    let there = transpose(tab, "c", "e").unwrap();
    let back = transpose(&there, "e", "c").unwrap();
    assert_eq!(back, tab);
}

#[test]
fn test_document_takes_key_from_frontmatter() {
    let source = "\
---
title: Wish You Were Here
artist: Pink Floyd
key: G
---
Em7  G  Em7  G
";
    let result = transpose_document(source, None, "A").unwrap();
    assert_eq!(
        result,
        "\
---
title: Wish You Were Here
artist: Pink Floyd
key: A
---
F#m7  A  F#m7  A
"
    );
}

#[test]
fn test_explicit_key_overrides_frontmatter() {
    let source = "---\nkey: G\n---\nC  G\n";
    let result = transpose_document(source, Some("c"), "d").unwrap();
    assert_eq!(result, "---\nkey: D\n---\nD  A\n");
}

#[test]
fn test_document_without_frontmatter_needs_a_source_key() {
    let source = "C  G\n";
    assert!(matches!(
        transpose_document(source, None, "d"),
        Err(TabError::MissingSourceKey)
    ));
    let result = transpose_document(source, Some("c"), "d").unwrap();
    assert_eq!(result, "D  A\n");
}

#[test]
fn test_frontmatter_with_bad_key_is_an_error() {
    let source = "---\nkey: X\n---\nC  G\n";
    assert!(matches!(
        transpose_document(source, None, "d"),
        Err(TabError::MetadataError(_))
    ));
}
