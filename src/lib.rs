//! rubric: a scroll-synced table of contents for terminal document reading.
//!
//! rubric derives a hierarchical table of contents from a document's heading
//! structure, shows it in a sidebar column, and keeps the sidebar highlight
//! synchronized with the reading position as the content pane scrolls. When
//! the sidebar is suppressed or no heading is eligible, the feature degrades
//! and the content pane takes the full terminal width.

pub mod anchor;
pub mod app_state;
pub mod collector;
pub mod config;
pub mod error;
pub mod extract;
pub mod formats;
pub mod heading;
pub mod input;
pub mod layout;
pub mod outline;
pub mod render;
pub mod scrollspy;
pub mod ui;
