//! The UI projects the reader state onto the terminal.
//!
//! The draw function splits the frame into the content pane, the sidebar
//! (unless the layout degraded to full width), and a help bar. The sidebar
//! renders one list item per TOC row: the highlighted row is styled as
//! active, placeholder rows are dimmed, and the cursor is reversed while
//! the sidebar has focus.

use crate::app_state::{Pane, ReaderState};
use crate::layout::LayoutMode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the reader.
pub fn draw(f: &mut Frame, app: &mut ReaderState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    match app.layout {
        LayoutMode::FullWidth => draw_content(f, app, chunks[0]),
        LayoutMode::Split => {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(0), Constraint::Length(app.sidebar_width)])
                .split(chunks[0]);
            draw_content(f, app, columns[0]);
            draw_sidebar(f, app, columns[1]);
        }
    }

    draw_help(f, app, chunks[1]);
}

fn draw_content(f: &mut Frame, app: &mut ReaderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(app.title.clone());
    app.viewport_rows = block.inner(area).height;

    let scroll = u16::try_from(app.scroll_top).unwrap_or(u16::MAX);
    let text = Paragraph::new(app.doc.lines.clone())
        .block(block)
        .scroll((scroll, 0));
    f.render_widget(text, area);
}

fn draw_sidebar(f: &mut Frame, app: &mut ReaderState, area: Rect) {
    let items: Vec<ListItem> = app
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let indent = "  ".repeat(row.depth.saturating_sub(1));
            let line = if row.navigable {
                Line::from(vec![Span::raw(indent), Span::raw(row.text.clone())])
            } else {
                Line::from(vec![Span::raw(indent), Span::raw("·".to_string())])
            };
            let style = if Some(i) == app.active_row {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else if row.navigable {
                Style::default()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            ListItem::new(line).style(style)
        })
        .collect();

    // Selection doubles as scroll-into-view: the cursor while the sidebar
    // has focus, the active row otherwise.
    let selected = match app.focus {
        Pane::Sidebar => Some(app.cursor),
        Pane::Content => app.active_row,
    };
    app.sidebar_list.select(selected);

    let highlight = match app.focus {
        Pane::Sidebar => Style::default().add_modifier(Modifier::REVERSED),
        Pane::Content => Style::default(),
    };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Contents"))
        .highlight_style(highlight);
    f.render_stateful_widget(list, area, &mut app.sidebar_list);
}

fn draw_help(f: &mut Frame, app: &ReaderState, area: Rect) {
    let help = match (app.layout, app.focus) {
        (LayoutMode::FullWidth, _) => "↑/↓/PgUp/PgDn: Scroll | Home/End: Top/Bottom | q: Quit",
        (LayoutMode::Split, Pane::Content) => {
            "↑/↓/PgUp/PgDn: Scroll | Home/End: Top/Bottom | Tab: Contents | q: Quit"
        }
        (LayoutMode::Split, Pane::Sidebar) => {
            "↑/↓: Select | Enter: Jump | Tab/Esc: Back to text | q: Quit"
        }
    };
    let help_widget = Paragraph::new(help).block(Block::default().borders(Borders::ALL));
    f.render_widget(help_widget, area);
}
