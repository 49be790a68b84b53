//! Error types for mdreport library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mdreport operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while turning Markdown into a PDF report.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The source Markdown file does not exist.
    #[error("Markdown file not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// The font family could not be registered with the layout engine.
    #[error("Font registration failed for '{name}' in {}: {reason}", .dir.display())]
    Font {
        /// Directory searched for the font files
        dir: PathBuf,
        /// Font family name
        name: String,
        /// Underlying cause
        reason: String,
    },

    /// Error raised by the PDF layout engine while composing pages.
    #[error("Layout error: {0}")]
    Layout(#[from] genpdf::error::Error),

    /// Error decoding or re-encoding an image asset.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Invalid render configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Error reading or writing JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the error means the source document was never read.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Error::MissingInput(_))
    }
}
