use super::{atx_level, wrap_line, Renderer};
use crate::heading::Heading;

fn heading(id: &str, level: usize, order: usize, source_line: usize) -> Heading {
    Heading {
        id: id.to_string(),
        text: id.to_string(),
        level,
        order,
        source_line,
    }
}

#[test]
fn test_extents_track_source_rows() {
    let source = "# A\n\ntext\n## B\n";
    let headings = vec![heading("a", 1, 0, 0), heading("b", 2, 1, 3)];

    let doc = Renderer::new(80, "base16-ocean.dark").render(source, &headings);

    assert_eq!(doc.lines.len(), 4);
    assert_eq!(doc.extents[0].row, 0);
    assert_eq!(doc.extents[0].height, 1);
    assert_eq!(doc.extents[1].row, 3);
    assert_eq!(doc.extents[1].height, 1);
}

#[test]
fn test_wrap_shifts_following_extents() {
    let source = "# A\nalpha beta gamma\n## B\n";
    let headings = vec![heading("a", 1, 0, 0), heading("b", 2, 1, 2)];

    let doc = Renderer::new(10, "base16-ocean.dark").render(source, &headings);

    // The paragraph wraps to two rows, pushing B down by one.
    assert_eq!(doc.lines.len(), 4);
    assert_eq!(doc.extents[0].row, 0);
    assert_eq!(doc.extents[1].row, 3);
}

#[test]
fn test_wrapped_heading_grows_its_extent() {
    let source = "# Alpha beta gamma delta\nafter\n";
    let headings = vec![heading("alpha", 1, 0, 0)];

    let doc = Renderer::new(10, "base16-ocean.dark").render(source, &headings);

    assert_eq!(doc.extents[0].row, 0);
    assert_eq!(doc.extents[0].height, 3);
    assert_eq!(doc.lines.len(), 4);
}

#[test]
fn test_fence_lines_are_kept_verbatim() {
    let source = "```rust\nlet x = 1;\n```\nafter\n";

    let doc = Renderer::new(80, "base16-ocean.dark").render(source, &[]);

    assert_eq!(doc.lines.len(), 4);
    assert!(doc.extents.is_empty());
}

#[test]
fn test_atx_level_detection() {
    assert_eq!(atx_level("# One"), Some(1));
    assert_eq!(atx_level("  ## Indented"), Some(2));
    assert_eq!(atx_level("###### Six"), Some(6));
    assert_eq!(atx_level("####### Seven"), None);
    assert_eq!(atx_level("#nospace"), None);
    assert_eq!(atx_level("plain"), None);
    assert_eq!(atx_level("##"), Some(2));
}

#[test]
fn test_wrap_preserves_short_lines() {
    assert_eq!(wrap_line("short", 80), vec!["short".to_string()]);
    assert_eq!(wrap_line("", 80), vec![String::new()]);
}

#[test]
fn test_wrap_breaks_at_word_boundaries() {
    assert_eq!(
        wrap_line("alpha beta gamma", 10),
        vec!["alpha beta".to_string(), "gamma".to_string()]
    );
}

#[test]
fn test_wrap_hard_splits_long_words() {
    assert_eq!(
        wrap_line("aaaaaaaaaaaa", 5),
        vec!["aaaaa".to_string(), "aaaaa".to_string(), "aa".to_string()]
    );
}

#[test]
fn test_wrap_keeps_indentation_on_continuations() {
    assert_eq!(
        wrap_line("  alpha beta gamma", 12),
        vec!["  alpha beta".to_string(), "  gamma".to_string()]
    );
}
