//! Markdown source files.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Raw lines of one Markdown file, read once and never modified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceDocument {
    path: Option<PathBuf>,
    lines: Vec<String>,
}

impl SourceDocument {
    /// Read a UTF-8 Markdown file.
    ///
    /// Returns [`Error::MissingInput`] when the path does not exist.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::MissingInput(path.to_path_buf()));
        }

        let text = fs::read_to_string(path)?;
        let mut doc = Self::from_text(&text);
        doc.path = Some(path.to_path_buf());
        Ok(doc)
    }

    /// Split Markdown text into source lines.
    pub fn from_text(text: &str) -> Self {
        Self {
            path: None,
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    /// Path the document was read from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Iterate over the raw lines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Read a Markdown file, returning an empty string when it is missing or unreadable.
pub fn load_markdown<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    if !path.exists() {
        log::error!("Markdown file not found: {}", path.display());
        return String::new();
    }
    match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            log::error!("failed to read {}: {}", path.display(), e);
            String::new()
        }
    }
}

/// Write Markdown text to a file. Returns `false` and logs on failure.
pub fn save_markdown<P: AsRef<Path>>(path: P, content: &str) -> bool {
    let path = path.as_ref();
    match fs::write(path, content) {
        Ok(()) => {
            log::info!("Markdown saved to {}", path.display());
            true
        }
        Err(e) => {
            log::error!("failed to save {}: {}", path.display(), e);
            false
        }
    }
}

/// Check that a file exists and is not empty.
pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    fs::metadata(path)
        .map(|meta| meta.is_file() && meta.len() > 0)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = SourceDocument::read(dir.path().join("absent.md")).unwrap_err();
        assert!(err.is_missing_input());
    }

    #[test]
    fn test_read_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.md");
        fs::write(&path, "# Plan\n\n- item\n").unwrap();

        let doc = SourceDocument::read(&path).unwrap();
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.lines().collect::<Vec<_>>(), vec!["# Plan", "", "- item"]);
        assert_eq!(doc.path(), Some(path.as_path()));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.md");

        assert!(save_markdown(&path, "## Summary\n"));
        assert_eq!(load_markdown(&path), "## Summary\n");
        assert!(file_exists(&path));
    }

    #[test]
    fn test_load_missing_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_markdown(dir.path().join("none.md")), "");
        assert!(!file_exists(dir.path().join("none.md")));
    }

    #[test]
    fn test_save_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!save_markdown(dir.path().join("no/such/dir.md"), "x"));
    }

    #[test]
    fn test_empty_file_does_not_exist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.md");
        fs::write(&path, "").unwrap();
        assert!(!file_exists(&path));
        assert!(!file_exists(dir.path()));
    }
}
