use super::collect;
use crate::heading::RawHeading;

fn raw(title: &str, level: usize, line: usize, id: Option<&str>) -> RawHeading {
    RawHeading {
        title: title.to_string(),
        level,
        source_line: line,
        id: id.map(ToString::to_string),
    }
}

#[test]
fn test_skips_heading_without_anchor() {
    let headings = collect(vec![
        raw("Kept", 1, 0, Some("kept")),
        raw("Dropped", 2, 2, None),
    ]);

    assert_eq!(headings.len(), 1);
    assert_eq!(headings[0].id, "kept");
}

#[test]
fn test_skips_heading_with_empty_title() {
    let headings = collect(vec![raw("   ", 1, 0, Some("blank"))]);

    assert!(headings.is_empty());
}

#[test]
fn test_orders_are_contiguous_after_skips() {
    let headings = collect(vec![
        raw("First", 1, 0, Some("first")),
        raw("", 2, 2, Some("gone")),
        raw("Second", 2, 4, Some("second")),
    ]);

    let orders: Vec<usize> = headings.iter().map(|h| h.order).collect();
    assert_eq!(orders, vec![0, 1], "order must stay contiguous after skips");
    assert_eq!(headings[1].source_line, 4);
}

#[test]
fn test_trims_title_text() {
    let headings = collect(vec![raw("  Padded  ", 3, 0, Some("padded"))]);

    assert_eq!(headings[0].text, "Padded");
    assert_eq!(headings[0].level, 3);
}
