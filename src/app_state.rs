//! The core state machine bridging the rendered document and the sidebar.
//!
//! A reader needs a single source of truth that every scroll event and every
//! draw can interrogate: the rendered lines, the heading sequence, the
//! sidebar rows, the scroll offset, and the tracker that decides which row
//! holds the highlight. All mutation happens here; the UI module only
//! projects this state onto the terminal.

use crate::heading::Heading;
use crate::layout::LayoutMode;
use crate::outline::TocRow;
use crate::render::RenderedDocument;
use crate::scrollspy::{HeadingBox, ScrollSpy, SpyConfig, SpyOutcome, ViewportSample};
use ratatui::widgets::ListState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Which pane receives key input.
pub enum Pane {
    /// The document pane: keys scroll the text.
    Content,
    /// The sidebar: keys move the cursor between rows.
    Sidebar,
}

/// Bridges the rendered document and the sidebar, maintaining session state.
pub struct ReaderState {
    /// Document name shown on the content pane.
    pub title: String,
    /// Rendered display lines and heading extents.
    pub doc: RenderedDocument,
    /// Collected heading sequence, immutable after setup.
    pub headings: Vec<Heading>,
    /// Rendered sidebar rows, empty on the degraded path.
    pub rows: Vec<TocRow>,
    /// Column layout decided once at setup.
    pub layout: LayoutMode,
    /// Sidebar column width in terminal cells.
    pub sidebar_width: u16,
    /// First visible display row of the content pane.
    pub scroll_top: i64,
    /// Content pane height in rows, refreshed on every draw.
    pub viewport_rows: u16,
    /// Pane currently receiving key input.
    pub focus: Pane,
    /// Sidebar cursor position.
    pub cursor: usize,
    /// Sidebar row currently holding the highlight.
    pub active_row: Option<usize>,
    /// List widget state keeping the relevant sidebar row visible.
    pub sidebar_list: ListState,
    read_offset: i64,
    spy: Option<ScrollSpy>,
}

impl ReaderState {
    /// Assemble the reader and run the initial highlight evaluation.
    ///
    /// On the degraded path no tracker is constructed; scrolling then only
    /// moves the text.
    #[must_use]
    pub fn new(
        title: String,
        doc: RenderedDocument,
        headings: Vec<Heading>,
        rows: Vec<TocRow>,
        layout: LayoutMode,
        sidebar_width: u16,
        spy_config: SpyConfig,
    ) -> Self {
        let spy = match layout {
            LayoutMode::Split => Some(ScrollSpy::new(&headings, spy_config)),
            LayoutMode::FullWidth => None,
        };
        let mut state = Self {
            title,
            doc,
            headings,
            rows,
            layout,
            sidebar_width,
            scroll_top: 0,
            viewport_rows: 0,
            focus: Pane::Content,
            cursor: 0,
            active_row: None,
            sidebar_list: ListState::default(),
            read_offset: spy_config.read_offset,
            spy,
        };
        state.sync_highlight();
        state
    }

    /// Snapshot the live geometry: the scroll offset plus one
    /// viewport-relative box per heading.
    #[must_use]
    pub fn viewport_sample(&self) -> ViewportSample {
        let boxes = self
            .doc
            .extents
            .iter()
            .map(|extent| {
                let top = i64::try_from(extent.row).unwrap_or(i64::MAX) - self.scroll_top;
                let height = i64::try_from(extent.height.max(1)).unwrap_or(1);
                HeadingBox {
                    top,
                    bottom: top + height,
                }
            })
            .collect();
        ViewportSample {
            scroll_top: self.scroll_top,
            boxes,
        }
    }

    /// Re-evaluate the tracker and move the sidebar highlight if it changed.
    pub fn sync_highlight(&mut self) {
        let sample = self.viewport_sample();
        let rows = &self.rows;
        let Some(spy) = self.spy.as_mut() else {
            return;
        };
        let outcome = spy.evaluate(&sample, |id| {
            rows.iter().any(|row| row.target.as_deref() == Some(id))
        });
        if let SpyOutcome::Moved { current, .. } = outcome {
            self.active_row = self
                .rows
                .iter()
                .position(|row| row.target.as_deref() == Some(current.as_str()));
        }
    }

    /// Largest scroll offset that still fills the viewport.
    #[must_use]
    pub fn max_scroll(&self) -> i64 {
        let total = i64::try_from(self.doc.lines.len()).unwrap_or(i64::MAX);
        (total - i64::from(self.viewport_rows)).max(0)
    }

    /// Scroll to an absolute offset, clamped to the document, and
    /// re-evaluate the highlight when the position actually changed.
    pub fn scroll_to(&mut self, target: i64) {
        let clamped = target.clamp(0, self.max_scroll());
        if clamped != self.scroll_top {
            self.scroll_top = clamped;
            self.sync_highlight();
        }
    }

    /// Scroll up by `rows`.
    pub fn scroll_up(&mut self, rows: i64) {
        self.scroll_to(self.scroll_top - rows);
    }

    /// Scroll down by `rows`.
    pub fn scroll_down(&mut self, rows: i64) {
        self.scroll_to(self.scroll_top + rows);
    }

    /// Scroll up by one viewport, keeping a row of overlap.
    pub fn page_up(&mut self) {
        self.scroll_up(i64::from(self.viewport_rows.saturating_sub(1)).max(1));
    }

    /// Scroll down by one viewport, keeping a row of overlap.
    pub fn page_down(&mut self) {
        self.scroll_down(i64::from(self.viewport_rows.saturating_sub(1)).max(1));
    }

    /// Jump to the document top.
    pub fn to_top(&mut self) {
        self.scroll_to(0);
    }

    /// Jump to the document bottom.
    pub fn to_bottom(&mut self) {
        self.scroll_to(self.max_scroll());
    }

    /// Move input focus to the sidebar, placing the cursor on the
    /// highlighted row. No-op on the degraded path.
    pub fn focus_sidebar(&mut self) {
        if self.layout != LayoutMode::Split || self.rows.is_empty() {
            return;
        }
        self.focus = Pane::Sidebar;
        self.cursor = self.nearest_navigable(self.active_row.unwrap_or(0));
    }

    /// Move input focus back to the content pane.
    pub fn focus_content(&mut self) {
        self.focus = Pane::Content;
    }

    /// Move the sidebar cursor up to the previous navigable row.
    pub fn cursor_up(&mut self) {
        let mut index = self.cursor;
        while index > 0 {
            index -= 1;
            if self.rows[index].navigable {
                self.cursor = index;
                return;
            }
        }
    }

    /// Move the sidebar cursor down to the next navigable row.
    pub fn cursor_down(&mut self) {
        let mut index = self.cursor;
        while index + 1 < self.rows.len() {
            index += 1;
            if self.rows[index].navigable {
                self.cursor = index;
                return;
            }
        }
    }

    /// Scroll the content pane so the cursor's heading sits on the read
    /// line, then let the evaluation move the highlight to it.
    pub fn jump_to_cursor(&mut self) {
        let Some(target) = self
            .rows
            .get(self.cursor)
            .and_then(|row| row.target.clone())
        else {
            return;
        };
        let Some(heading) = self.headings.iter().find(|h| h.id == target) else {
            return;
        };
        let extent = self.doc.extents[heading.order];
        let row = i64::try_from(extent.row).unwrap_or(i64::MAX);
        self.scroll_to(row - self.read_offset);
    }

    /// The navigable row at or nearest to `start`.
    fn nearest_navigable(&self, start: usize) -> usize {
        if self.rows.get(start).is_some_and(|row| row.navigable) {
            return start;
        }
        for index in start + 1..self.rows.len() {
            if self.rows[index].navigable {
                return index;
            }
        }
        for index in (0..start).rev() {
            if self.rows[index].navigable {
                return index;
            }
        }
        start.min(self.rows.len().saturating_sub(1))
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
