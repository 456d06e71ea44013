//! Format trait and implementations for different document types.
//!
//! The `Format` trait abstracts over document formats by providing a
//! tree-sitter language and a heading query, plus the mapping from the
//! grammar's marker node kinds to heading levels.

pub mod markdown;

/// A document format the heading scanner understands.
pub trait Format {
    /// The tree-sitter language to parse the document with.
    fn language(&self) -> tree_sitter::Language;
    /// Query capturing every heading node in document order.
    fn heading_query(&self) -> &'static str;
    /// Heading level for a marker node kind, `None` for non-marker kinds.
    fn marker_level(&self, kind: &str) -> Option<usize>;
    /// Node kind holding the heading's title text.
    fn title_kind(&self) -> &'static str;
}
