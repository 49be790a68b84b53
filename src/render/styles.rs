//! Block styles for the report layout.
//!
//! All sizes are in PostScript points; [`pt`] converts them to the
//! millimetres the layout engine works in.

use crate::model::{Block, HeadingLevel, ListDepth};
use genpdf::style::{Color, Style};
use genpdf::{Alignment, Mm};
use serde::{Deserialize, Serialize};

/// Convert points to millimetres.
pub fn pt(points: f64) -> Mm {
    Mm::from(pt_to_mm(points))
}

/// Convert points to a raw millimetre value.
pub fn pt_to_mm(points: f64) -> f64 {
    points * 25.4 / 72.0
}

/// RGB color, serialized as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Black text.
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    /// Mid gray used for footer and notice text.
    pub const GRAY: Rgb = Rgb(128, 128, 128);
    /// `#004085`, title and first-level headings.
    pub const NAVY: Rgb = Rgb(0x00, 0x40, 0x85);
    /// `#007bff`, second-level headings.
    pub const BLUE: Rgb = Rgb(0x00, 0x7b, 0xff);
    /// `#0d6efd`, third-level headings.
    pub const BRIGHT_BLUE: Rgb = Rgb(0x0d, 0x6e, 0xfd);

    fn to_color(self) -> Color {
        Color::Rgb(self.0, self.1, self.2)
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    /// Flush left
    #[default]
    Left,
    /// Centered
    Center,
    /// Flush right
    Right,
}

impl From<TextAlign> for Alignment {
    fn from(align: TextAlign) -> Self {
        match align {
            TextAlign::Left => Alignment::Left,
            TextAlign::Center => Alignment::Center,
            TextAlign::Right => Alignment::Right,
        }
    }
}

/// Visual style of one kind of block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockStyle {
    /// Font size in points
    pub font_size: u8,

    /// Baseline-to-baseline distance in points (None = font default)
    pub leading: Option<f64>,

    /// Text color
    pub color: Rgb,

    /// Render the whole block bold
    pub bold: bool,

    /// Render the whole block italic
    pub italic: bool,

    /// Vertical space before the block, in points
    pub space_before: f64,

    /// Vertical space after the block, in points
    pub space_after: f64,

    /// Left indent in points
    pub left_indent: f64,

    /// Alignment
    pub alignment: TextAlign,
}

impl BlockStyle {
    /// Plain body text at `font_size`.
    pub fn new(font_size: u8) -> Self {
        Self {
            font_size,
            ..Self::default()
        }
    }

    /// Set the leading.
    pub fn with_leading(mut self, leading: f64) -> Self {
        self.leading = Some(leading);
        self
    }

    /// Set the color.
    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    /// Make the block bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Make the block italic.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Set the space before.
    pub fn with_space_before(mut self, points: f64) -> Self {
        self.space_before = points;
        self
    }

    /// Set the space after.
    pub fn with_space_after(mut self, points: f64) -> Self {
        self.space_after = points;
        self
    }

    /// Set the left indent.
    pub fn with_indent(mut self, points: f64) -> Self {
        self.left_indent = points;
        self
    }

    /// Set the alignment.
    pub fn aligned(mut self, alignment: TextAlign) -> Self {
        self.alignment = alignment;
        self
    }

    /// Layout-engine style for a run inside this block.
    pub fn text_style(&self, bold: bool, italic: bool) -> Style {
        let mut style = Style::new()
            .with_font_size(self.font_size)
            .with_color(self.color.to_color());
        if let Some(leading) = self.leading {
            // genpdf scales its own line height; 1.2 × size is the unscaled leading.
            style.set_line_spacing(leading / (f64::from(self.font_size) * 1.2));
        }
        if self.bold || bold {
            style.set_bold();
        }
        if self.italic || italic {
            style.set_italic();
        }
        style
    }
}

impl Default for BlockStyle {
    fn default() -> Self {
        Self {
            font_size: 11,
            leading: None,
            color: Rgb::BLACK,
            bold: false,
            italic: false,
            space_before: 0.0,
            space_after: 0.0,
            left_indent: 0.0,
            alignment: TextAlign::Left,
        }
    }
}

/// Styles for every block kind plus the page furniture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSheet {
    /// `# ` headings
    pub heading1: BlockStyle,
    /// `## ` headings
    pub heading2: BlockStyle,
    /// `### ` headings
    pub heading3: BlockStyle,
    /// Body paragraphs
    pub paragraph: BlockStyle,
    /// Shallow list items
    pub bullet: BlockStyle,
    /// Deep list items
    pub sub_bullet: BlockStyle,
    /// Closing notice
    pub notice: BlockStyle,
    /// Header title
    pub header_title: BlockStyle,
    /// Header timestamp
    pub header_timestamp: BlockStyle,
    /// Footer line
    pub footer: BlockStyle,
    /// Height of a blank-line spacer, in points
    pub spacer_height: f64,
    /// Glyph prefixed to list items
    pub bullet_glyph: String,
}

impl StyleSheet {
    /// Style for a block, `None` for spacers.
    pub fn for_block(&self, block: &Block) -> Option<&BlockStyle> {
        match block {
            Block::Heading { level, .. } => Some(self.heading(*level)),
            Block::ListItem { depth, .. } => Some(self.list_item(*depth)),
            Block::Paragraph { .. } => Some(&self.paragraph),
            Block::Spacer => None,
        }
    }

    /// Style for a heading level.
    pub fn heading(&self, level: HeadingLevel) -> &BlockStyle {
        match level {
            HeadingLevel::H1 => &self.heading1,
            HeadingLevel::H2 => &self.heading2,
            HeadingLevel::H3 => &self.heading3,
        }
    }

    /// Style for a list depth.
    pub fn list_item(&self, depth: ListDepth) -> &BlockStyle {
        match depth {
            ListDepth::Shallow => &self.bullet,
            ListDepth::Deep => &self.sub_bullet,
        }
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            heading1: BlockStyle::new(18).bold().with_color(Rgb::NAVY).with_space_after(12.0),
            heading2: BlockStyle::new(14).bold().with_color(Rgb::BLUE).with_space_after(8.0),
            heading3: BlockStyle::new(12)
                .bold()
                .with_color(Rgb::BRIGHT_BLUE)
                .with_space_after(6.0),
            paragraph: BlockStyle::new(11).with_leading(16.0),
            bullet: BlockStyle::new(11).with_leading(14.0).with_indent(20.0),
            sub_bullet: BlockStyle::new(10).with_leading(13.0).with_indent(40.0),
            notice: BlockStyle::new(9)
                .with_color(Rgb::GRAY)
                .with_space_before(20.0)
                .aligned(TextAlign::Center),
            header_title: BlockStyle::new(12).bold().with_color(Rgb::NAVY),
            header_timestamp: BlockStyle::new(9).aligned(TextAlign::Right),
            footer: BlockStyle::new(8)
                .italic()
                .with_color(Rgb::GRAY)
                .aligned(TextAlign::Center),
            spacer_height: 8.0,
            bullet_glyph: "•".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_to_mm() {
        let inch = pt(72.0);
        assert!(inch > Mm::from(25.39) && inch < Mm::from(25.41));
        assert_eq!(pt(0.0), Mm::from(0.0));
    }

    #[test]
    fn test_style_lookup() {
        let sheet = StyleSheet::default();
        let h2 = Block::heading(HeadingLevel::H2, "x");
        assert_eq!(sheet.for_block(&h2).map(|s| s.font_size), Some(14));
        let deep = Block::list_item(ListDepth::Deep, "x");
        assert_eq!(sheet.for_block(&deep).map(|s| s.left_indent), Some(40.0));
        assert!(sheet.for_block(&Block::Spacer).is_none());
    }

    #[test]
    fn test_style_sheet_from_partial_json() {
        let sheet: StyleSheet = serde_json::from_str(r#"{"spacer_height": 12.0}"#).unwrap();
        assert_eq!(sheet.spacer_height, 12.0);
        assert_eq!(sheet.heading1, StyleSheet::default().heading1);
    }
}
