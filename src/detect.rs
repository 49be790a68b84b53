//! PDF signature detection for rendered output.

use crate::error::Result;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// PDF format information read from a file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfFormat {
    /// PDF version (e.g., "1.3", "1.7")
    pub version: String,
}

impl std::fmt::Display for PdfFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PDF {}", self.version)
    }
}

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const PDF_MAGIC_LEN: usize = 5;
const VERSION_LEN: usize = 3; // e.g., "1.7"

/// Detect the PDF format of a file.
///
/// Returns `Ok(None)` when the file is readable but not a PDF.
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<Option<PdfFormat>> {
    let mut header = Vec::with_capacity(16);
    File::open(path)?.take(16).read_to_end(&mut header)?;
    Ok(detect_format_from_bytes(&header))
}

/// Detect the PDF format from the first bytes of a file.
pub fn detect_format_from_bytes(data: &[u8]) -> Option<PdfFormat> {
    if data.len() < PDF_MAGIC_LEN + VERSION_LEN || !data.starts_with(PDF_MAGIC) {
        return None;
    }

    let version_bytes = &data[PDF_MAGIC_LEN..PDF_MAGIC_LEN + VERSION_LEN];
    let version = String::from_utf8_lossy(version_bytes).to_string();

    is_valid_version(&version).then_some(PdfFormat { version })
}

/// Check if a version string looks like `d.d`.
fn is_valid_version(version: &str) -> bool {
    let bytes = version.as_bytes();
    bytes.len() == 3 && bytes[0].is_ascii_digit() && bytes[1] == b'.' && bytes[2].is_ascii_digit()
}

/// Check if a file starts with a PDF header.
pub fn is_pdf<P: AsRef<Path>>(path: P) -> bool {
    matches!(detect_format_from_path(path), Ok(Some(_)))
}

/// Check if bytes start with a PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_some()
}
