use super::read_document;
use crate::error::DocumentError;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[test]
fn test_normalizes_crlf_line_endings() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "# Title\r\n\r\nbody\r\n").unwrap();

    let text = read_document(file.path()).unwrap();

    assert_eq!(text, "# Title\n\nbody\n");
}

#[test]
fn test_plain_documents_pass_through() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "# Title\n\nbody\n").unwrap();

    let text = read_document(file.path()).unwrap();

    assert_eq!(text, "# Title\n\nbody\n");
}

#[test]
fn test_empty_document_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "   \n\n").unwrap();

    let result = read_document(file.path());

    assert!(matches!(result, Err(DocumentError::Empty(_))));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let result = read_document(Path::new("/definitely/not/here.md"));

    assert!(matches!(result, Err(DocumentError::Io(_))));
}
