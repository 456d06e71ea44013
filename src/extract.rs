//! Heading scan over the document's syntax tree.
//!
//! The scan walks every heading the format's query captures, in document
//! order, and records the raw title, level and source line. It is a pure
//! read of the document snapshot; validation and anchor assignment happen
//! in later stages.

use crate::error::DocumentError;
use crate::formats::Format;
use crate::heading::RawHeading;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Parser, Query, QueryCursor};

/// Scan `source` for headings in document order.
///
/// Headings come back untrimmed and without ids; a heading whose grammar
/// node carries no title text yields an empty `title` and is weeded out by
/// the collector.
///
/// # Errors
///
/// Returns an error if the grammar, query, or parse fails. These indicate a
/// broken format definition, not a malformed document.
pub fn extract_headings(
    source: &str,
    format: &dyn Format,
) -> Result<Vec<RawHeading>, DocumentError> {
    let language = format.language();
    let mut parser = Parser::new();
    parser.set_language(&language)?;
    let tree = parser.parse(source, None).ok_or(DocumentError::Parse)?;

    let query = Query::new(&language, format.heading_query())?;
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, tree.root_node(), source.as_bytes());

    let mut headings = Vec::new();
    while let Some(matched) = matches.next() {
        for capture in matched.captures {
            let node = capture.node;
            let mut level = None;
            let mut title = String::new();

            let mut children = node.walk();
            for child in node.children(&mut children) {
                if let Some(marker_level) = format.marker_level(child.kind()) {
                    level = Some(marker_level);
                } else if child.kind() == format.title_kind() {
                    title = source[child.byte_range()].to_string();
                }
            }

            let Some(level) = level else {
                continue;
            };
            headings.push(RawHeading {
                title,
                level,
                source_line: node.start_position().row,
                id: None,
            });
        }
    }
    Ok(headings)
}

#[cfg(test)]
#[path = "tests/extract.rs"]
mod tests;
