use super::extract_headings;
use crate::formats::markdown::MarkdownFormat;

#[test]
fn test_extracts_levels_in_document_order() {
    let source = "# One\n\nbody\n\n## Two\n\n### Three\n";

    let headings = extract_headings(source, &MarkdownFormat).unwrap();

    assert_eq!(headings.len(), 3);
    assert_eq!(headings[0].title.trim(), "One");
    assert_eq!(headings[0].level, 1);
    assert_eq!(headings[0].source_line, 0);
    assert_eq!(headings[1].title.trim(), "Two");
    assert_eq!(headings[1].level, 2);
    assert_eq!(headings[1].source_line, 4);
    assert_eq!(headings[2].level, 3);
    assert_eq!(headings[2].source_line, 6);
}

#[test]
fn test_level_jumps_come_back_as_declared() {
    let source = "# Top\n\n#### Deep\n";

    let headings = extract_headings(source, &MarkdownFormat).unwrap();

    assert_eq!(headings.len(), 2);
    assert_eq!(headings[1].level, 4);
}

#[test]
fn test_ignores_headings_inside_code_fences() {
    let source = "# Real\n\n```\n# not a heading\n```\n";

    let headings = extract_headings(source, &MarkdownFormat).unwrap();

    assert_eq!(headings.len(), 1);
    assert_eq!(headings[0].title.trim(), "Real");
}

#[test]
fn test_no_headings_yields_empty_sequence() {
    let headings = extract_headings("just prose\n\nmore prose\n", &MarkdownFormat).unwrap();

    assert!(headings.is_empty());
}

#[test]
fn test_ids_start_unassigned() {
    let headings = extract_headings("# One\n", &MarkdownFormat).unwrap();

    assert_eq!(headings[0].id, None);
}
