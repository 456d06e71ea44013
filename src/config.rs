//! Configuration to acknowledge reader preferences as well as set defaults.
//!
//! Specifically, we try to find a rubric.toml, and if present we load
//! settings from there. This provides the sidebar width, the read-line
//! offset, wrapping width, anchor behavior and the code highlight theme.

use facet::Facet;
use std::fs;

#[derive(Facet, Clone)]
/// User preferences loaded from rubric.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 32)]
    /// Sidebar column width in terminal cells; 0 suppresses the sidebar.
    pub sidebar_width: u16,
    #[facet(default = crate::scrollspy::DEFAULT_READ_OFFSET)]
    /// Rows between the viewport top and the read line.
    pub read_line_offset: i64,
    #[facet(default = 100)]
    /// Maximum line width for content text wrapping.
    pub wrap_width: usize,
    #[facet(default = true)]
    /// Derive anchor ids for headings that declare none.
    pub auto_anchor: bool,
    #[facet(default = "base16-ocean.dark".to_string())]
    /// Syntect theme for fenced code blocks.
    pub code_theme: String,
}

impl Config {
    #[must_use]
    /// Load configuration from rubric.toml if present.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load() -> Self {
        if let Ok(contents) = fs::read_to_string("rubric.toml") {
            if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
                return config;
            }
        }
        facet_toml::from_str::<Self>("").unwrap()
    }
}
