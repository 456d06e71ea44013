//! Heading representation for tree-sitter scanned documents.
//!
//! A heading is a titled section marker carrying a nesting level (1–6).
//! Headings are scanned once from the document snapshot at startup, pass
//! through anchor assignment and validation, and are immutable afterwards.

/// A heading as it comes out of the document scan, before anchor assignment
/// and validation.
#[derive(Clone, Debug)]
pub struct RawHeading {
    /// Heading text without markup symbols, untrimmed.
    pub title: String,
    /// Nesting level declared by the heading markers (1 for `#`).
    pub level: usize,
    /// Zero-based source line the heading sits on.
    pub source_line: usize,
    /// Anchor id, filled in by the anchor pass. `None` means the heading
    /// declared no id and auto-anchoring did not supply one.
    pub id: Option<String>,
}

/// A validated heading participating in the table of contents and scrollspy.
///
/// Invariants: `id` is non-empty and unique within the document, `text` is
/// trimmed and non-empty, `order` is contiguous over the collected sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Heading {
    /// Unique anchor id, the key sidebar rows and the tracker resolve by.
    pub id: String,
    /// Trimmed heading text.
    pub text: String,
    /// Nesting level, 1 through 6.
    pub level: usize,
    /// Position in document order, zero-based and contiguous.
    pub order: usize,
    /// Zero-based source line, used to locate the heading's box in the
    /// rendered viewport.
    pub source_line: usize,
}
