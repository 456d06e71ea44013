//! Degradation guard for the sidebar feature.
//!
//! Decided once at setup, before the outline builder or the tracker run.
//! When the sidebar column is suppressed or no heading survived collection,
//! the whole feature is disabled: the sidebar is never drawn, the content
//! pane takes the full terminal width, and neither the builder nor the
//! tracker execute. This branch is terminal for the process lifetime.

use crate::heading::Heading;

/// How the reader lays out its columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    /// Content pane plus the table-of-contents sidebar.
    Split,
    /// Content pane only, spanning the full terminal width.
    FullWidth,
}

/// Decide the layout for this run.
///
/// `sidebar_width == 0` means the sidebar column is suppressed by
/// configuration, the structural-absence case.
#[must_use]
pub fn decide(headings: &[Heading], sidebar_width: u16) -> LayoutMode {
    if sidebar_width == 0 {
        log::info!("sidebar column suppressed, reading at full width");
        return LayoutMode::FullWidth;
    }
    if headings.is_empty() {
        log::info!("no eligible headings, reading at full width");
        return LayoutMode::FullWidth;
    }
    LayoutMode::Split
}
