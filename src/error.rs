//! Error types for document loading and heading extraction.
//!
//! Everything here can only surface during startup, before the terminal is
//! put into raw mode. Once the reader is running, every failure path
//! degrades silently (no table of contents, or no highlight change).

use thiserror::Error;

/// Failures while loading or scanning a document.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The document file could not be read.
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),
    /// The document file contains nothing to display.
    #[error("document is empty: {0}")]
    Empty(String),
    /// The tree-sitter grammar is incompatible with the linked runtime.
    #[error("grammar rejected by tree-sitter runtime: {0}")]
    Language(#[from] tree_sitter::LanguageError),
    /// The format's heading query does not compile against its grammar.
    #[error("malformed heading query: {0}")]
    Query(#[from] tree_sitter::QueryError),
    /// The parser produced no syntax tree for the document.
    #[error("parser produced no syntax tree")]
    Parse,
}
