//! Document loading.
//!
//! Reads the document into memory once at startup. Line endings are
//! normalized so that every later stage (tree-sitter rows, rendered display
//! rows, scrollspy boxes) agrees on line numbering.

use crate::error::DocumentError;
use std::fs;
use std::path::Path;

/// Read a document from disk, normalizing CRLF line endings.
///
/// # Errors
///
/// Returns an error if the file cannot be read or holds no visible content.
pub fn read_document(path: &Path) -> Result<String, DocumentError> {
    let raw = fs::read_to_string(path)?;
    let text = raw.replace("\r\n", "\n");
    if text.trim().is_empty() {
        return Err(DocumentError::Empty(path.display().to_string()));
    }
    Ok(text)
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
