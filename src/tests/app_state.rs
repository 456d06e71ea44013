use super::{Pane, ReaderState};
use crate::formats::markdown::MarkdownFormat;
use crate::layout::LayoutMode;
use crate::render::Renderer;
use crate::scrollspy::SpyConfig;
use crate::{anchor, collector, extract, layout, outline};

/// Run the full setup pipeline the binary performs, against a source string.
fn reader(source: &str, sidebar_width: u16) -> ReaderState {
    let mut raw = extract::extract_headings(source, &MarkdownFormat).unwrap();
    anchor::assign_anchors(&mut raw, true);
    let headings = collector::collect(raw);
    let mode = layout::decide(&headings, sidebar_width);
    let doc = Renderer::new(80, "base16-ocean.dark").render(source, &headings);
    let rows = match mode {
        LayoutMode::Split => outline::flatten(&outline::build(&headings), &headings),
        LayoutMode::FullWidth => Vec::new(),
    };
    ReaderState::new(
        "doc.md".to_string(),
        doc,
        headings,
        rows,
        mode,
        sidebar_width,
        SpyConfig {
            read_offset: 2,
            slack_divisor: 3,
        },
    )
}

/// Guide document with headings on rows 0, 3, 6 and 9, plus a long tail.
fn guide() -> String {
    let mut source = String::from(
        "# Intro\nintro text\n\n## Setup\nsetup text\n\n## Usage\nusage text\n\n### CLI\n",
    );
    for _ in 0..30 {
        source.push_str("tail text\n");
    }
    source
}

fn active_target(app: &ReaderState) -> Option<String> {
    app.active_row
        .and_then(|i| app.rows.get(i))
        .and_then(|row| row.target.clone())
}

#[test]
fn test_degrades_without_headings() {
    let app = reader("plain text\nmore text\n", 32);

    assert_eq!(app.layout, LayoutMode::FullWidth);
    assert!(app.rows.is_empty(), "no sidebar rows may be created");
    assert_eq!(app.active_row, None);
}

#[test]
fn test_degrades_when_sidebar_is_suppressed() {
    let app = reader(&guide(), 0);

    assert_eq!(app.layout, LayoutMode::FullWidth);
    assert!(app.rows.is_empty());
}

#[test]
fn test_scrolling_degraded_reader_does_not_track() {
    let mut app = reader("plain text\nmore text\nlast line\n", 32);
    app.viewport_rows = 2;

    app.scroll_down(1);

    assert_eq!(app.scroll_top, 1);
    assert_eq!(app.active_row, None);
}

#[test]
fn test_initial_highlight_is_first_heading() {
    let app = reader(&guide(), 32);

    assert_eq!(app.layout, LayoutMode::Split);
    assert_eq!(active_target(&app).as_deref(), Some("intro"));
}

#[test]
fn test_scrolling_to_usage_activates_it() {
    let mut app = reader(&guide(), 32);
    app.viewport_rows = 10;

    // Setup's row (3) enters the read band first.
    app.scroll_to(1);
    assert_eq!(active_target(&app).as_deref(), Some("setup"));

    // Usage's row (6) reaches the band; setup is no longer highlighted.
    app.scroll_to(4);
    assert_eq!(active_target(&app).as_deref(), Some("usage"));
    let highlighted = app
        .rows
        .iter()
        .enumerate()
        .filter(|&(i, _)| Some(i) == app.active_row)
        .count();
    assert_eq!(highlighted, 1, "only one row may hold the highlight");
}

#[test]
fn test_scroll_position_unchanged_is_a_noop() {
    let mut app = reader(&guide(), 32);
    app.viewport_rows = 10;
    app.scroll_to(4);
    let before = app.active_row;

    app.scroll_to(4);

    assert_eq!(app.active_row, before);
}

#[test]
fn test_tail_keeps_last_heading_active() {
    let mut app = reader(&guide(), 32);
    app.viewport_rows = 10;

    app.to_bottom();

    assert_eq!(active_target(&app).as_deref(), Some("cli"));

    // Nudging around the tail keeps the final section highlighted.
    app.scroll_up(1);
    assert_eq!(active_target(&app).as_deref(), Some("cli"));
}

#[test]
fn test_return_to_top_restores_first_heading() {
    let mut app = reader(&guide(), 32);
    app.viewport_rows = 10;
    app.to_bottom();

    app.to_top();

    assert_eq!(app.scroll_top, 0);
    assert_eq!(active_target(&app).as_deref(), Some("intro"));
}

#[test]
fn test_jump_from_sidebar_activates_target() {
    let mut app = reader(&guide(), 32);
    app.viewport_rows = 10;

    app.focus_sidebar();
    assert_eq!(app.focus, Pane::Sidebar);
    assert_eq!(app.cursor, 0, "cursor starts on the highlighted row");

    app.cursor_down();
    app.cursor_down();
    app.cursor_down();
    assert_eq!(app.rows[app.cursor].target.as_deref(), Some("cli"));

    app.jump_to_cursor();

    // CLI's heading row (9) lands on the read line (offset 2).
    assert_eq!(app.scroll_top, 7);
    assert_eq!(active_target(&app).as_deref(), Some("cli"));
}

#[test]
fn test_focus_sidebar_is_a_noop_when_degraded() {
    let mut app = reader("plain text\nmore\n", 32);

    app.focus_sidebar();

    assert_eq!(app.focus, Pane::Content);
}
