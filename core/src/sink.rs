#![deny(missing_docs)]

//! # Output Sink
//!
//! Writes the rendered document to disk.

use crate::error::AppResult;
use std::fs;
use std::path::Path;

/// Writes `text` to `path`, replacing any existing file.
///
/// Missing parent directories are created.
pub fn write_document(path: &Path, text: &str) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_document_creates_parents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("docs/api/apidoc.json");

        write_document(&path, "{}").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_write_document_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("apidoc.json");
        fs::write(&path, "previous content that is longer").unwrap();

        write_document(&path, "{}").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }
}
