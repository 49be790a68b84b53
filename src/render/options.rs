//! Rendering options and configuration.

use super::styles::{pt, StyleSheet};
use crate::error::{Error, Result};
use crate::parser::DEFAULT_NOTICE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A4 width in points.
pub const A4_WIDTH_PT: f64 = 595.28;
/// A4 height in points.
pub const A4_HEIGHT_PT: f64 = 841.89;

/// Options for rendering a report.
///
/// Built once per render call and passed down explicitly; nothing here is
/// process-wide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Directory holding the TrueType font family
    pub fonts_dir: PathBuf,

    /// Font family name (files are `{name}-Regular.ttf`, `-Bold`, `-Italic`, `-BoldItalic`)
    pub font_name: String,

    /// Logo drawn in the header; skipped when the file is absent
    pub logo_path: Option<PathBuf>,

    /// Header title
    pub title: String,

    /// Label printed before the generation timestamp
    pub timestamp_label: String,

    /// Label printed before the page number
    pub page_label: String,

    /// Copyright text in the footer
    pub copyright: String,

    /// Notice appended after the body
    pub notice: String,

    /// Page margins
    pub margins: PageMargins,

    /// Block styles
    pub styles: StyleSheet,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let options: RenderOptions = serde_json::from_str(&text)?;
        options.validate()?;
        Ok(options)
    }

    /// Set the font directory.
    pub fn with_fonts_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fonts_dir = dir.into();
        self
    }

    /// Set the font family name.
    pub fn with_font_name(mut self, name: impl Into<String>) -> Self {
        self.font_name = name.into();
        self
    }

    /// Set the logo path.
    pub fn with_logo(mut self, path: impl Into<PathBuf>) -> Self {
        self.logo_path = Some(path.into());
        self
    }

    /// Render without a logo.
    pub fn without_logo(mut self) -> Self {
        self.logo_path = None;
        self
    }

    /// Set the header title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the footer copyright text.
    pub fn with_copyright(mut self, copyright: impl Into<String>) -> Self {
        self.copyright = copyright.into();
        self
    }

    /// Set the closing notice.
    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = notice.into();
        self
    }

    /// Set the page margins.
    pub fn with_margins(mut self, margins: PageMargins) -> Self {
        self.margins = margins;
        self
    }

    /// Set the style sheet.
    pub fn with_styles(mut self, styles: StyleSheet) -> Self {
        self.styles = styles;
        self
    }

    /// Check that the options describe a usable page.
    pub fn validate(&self) -> Result<()> {
        if self.font_name.trim().is_empty() {
            return Err(Error::Config("font name is empty".to_string()));
        }
        let m = &self.margins;
        if [m.top, m.right, m.bottom, m.left].iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(Error::Config("margins must be non-negative".to_string()));
        }
        if m.left + m.right >= A4_WIDTH_PT || m.top + m.bottom >= A4_HEIGHT_PT {
            return Err(Error::Config("margins leave no room for content".to_string()));
        }
        Ok(())
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            fonts_dir: PathBuf::from("fonts"),
            font_name: "LiberationSans".to_string(),
            logo_path: Some(PathBuf::from("Img").join("logoAI.png")),
            title: "AgentAI Biz - Business Plan".to_string(),
            timestamp_label: "Generated on:".to_string(),
            page_label: "Page".to_string(),
            copyright: "AgentAI Biz © 2025".to_string(),
            notice: DEFAULT_NOTICE.to_string(),
            margins: PageMargins::default(),
            styles: StyleSheet::default(),
        }
    }
}

/// Page margins in points.
///
/// Top and bottom are larger than the sides to leave room for the header and
/// footer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageMargins {
    /// Top margin
    pub top: f64,
    /// Right margin
    pub right: f64,
    /// Bottom margin
    pub bottom: f64,
    /// Left margin
    pub left: f64,
}

impl PageMargins {
    /// Margins for the layout engine.
    pub fn to_margins(self) -> genpdf::Margins {
        genpdf::Margins::trbl(pt(self.top), pt(self.right), pt(self.bottom), pt(self.left))
    }
}

impl Default for PageMargins {
    fn default() -> Self {
        Self {
            top: 80.0,
            right: 50.0,
            bottom: 60.0,
            left: 50.0,
        }
    }
}
