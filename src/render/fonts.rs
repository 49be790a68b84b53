//! Font registration.

use crate::error::{Error, Result};
use genpdf::fonts::{FontData, FontFamily};
use std::path::{Path, PathBuf};

/// File-name suffixes of the four faces of a family.
pub const FACE_SUFFIXES: [&str; 4] = ["Regular", "Bold", "Italic", "BoldItalic"];

/// Paths of the four TrueType faces for `name` in `dir`.
pub fn font_files(dir: &Path, name: &str) -> Vec<PathBuf> {
    FACE_SUFFIXES
        .iter()
        .map(|face| dir.join(format!("{name}-{face}.ttf")))
        .collect()
}

/// Whether all four faces of a family are present.
pub fn has_font_family(dir: &Path, name: &str) -> bool {
    font_files(dir, name).iter().all(|path| path.is_file())
}

/// Load a font family for the layout engine.
pub fn load_font_family(dir: &Path, name: &str) -> Result<FontFamily<FontData>> {
    let font_error = |reason: String| Error::Font {
        dir: dir.to_path_buf(),
        name: name.to_string(),
        reason,
    };

    if let Some(missing) = font_files(dir, name).into_iter().find(|p| !p.is_file()) {
        return Err(font_error(format!("missing {}", missing.display())));
    }

    let family =
        genpdf::fonts::from_files(dir, name, None).map_err(|e| font_error(e.to_string()))?;
    log::debug!("registered font family {} from {}", name, dir.display());
    Ok(family)
}
