//! Block-level types.

use super::RichText;
use serde::{Deserialize, Serialize};

/// Heading level supported by the report dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// `# ` title
    H1,
    /// `## ` section
    H2,
    /// `### ` subsection
    H3,
}

/// Nesting tier of a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListDepth {
    /// Primary bullet (indent narrower than [`ListDepth::DEEP_INDENT`])
    Shallow,
    /// Sub-bullet
    Deep,
}

impl ListDepth {
    /// Leading whitespace width at which an item becomes a sub-bullet.
    pub const DEEP_INDENT: usize = 4;

    /// Depth for a marker preceded by `indent` whitespace characters.
    pub fn from_indent(indent: usize) -> Self {
        if indent < Self::DEEP_INDENT {
            ListDepth::Shallow
        } else {
            ListDepth::Deep
        }
    }
}

/// One structurally classified unit of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Heading with inline markup
    Heading {
        /// Heading level
        level: HeadingLevel,
        /// Text with inline markup
        text: String,
    },
    /// Bullet list entry
    ListItem {
        /// Nesting tier
        depth: ListDepth,
        /// Text with inline markup
        text: String,
    },
    /// Vertical gap produced by a blank source line
    Spacer,
    /// Body text
    Paragraph {
        /// Text with inline markup
        text: String,
    },
}

impl Block {
    /// Create a heading block.
    pub fn heading(level: HeadingLevel, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            text: text.into(),
        }
    }

    /// Create a list item block.
    pub fn list_item(depth: ListDepth, text: impl Into<String>) -> Self {
        Block::ListItem {
            depth,
            text: text.into(),
        }
    }

    /// Create a paragraph block.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }

    /// Marked-up text of the block, `None` for spacers.
    pub fn text(&self) -> Option<&str> {
        match self {
            Block::Heading { text, .. }
            | Block::ListItem { text, .. }
            | Block::Paragraph { text } => Some(text),
            Block::Spacer => None,
        }
    }

    /// Styled runs of the block's text.
    pub fn rich_text(&self) -> RichText {
        self.text().map(RichText::parse).unwrap_or_default()
    }

    /// Text with markup removed.
    pub fn plain_text(&self) -> String {
        self.rich_text().plain_text()
    }

    /// Check if this is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading { .. })
    }

    /// Check if this is a spacer.
    pub fn is_spacer(&self) -> bool {
        matches!(self, Block::Spacer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_threshold() {
        assert_eq!(ListDepth::from_indent(0), ListDepth::Shallow);
        assert_eq!(ListDepth::from_indent(3), ListDepth::Shallow);
        assert_eq!(ListDepth::from_indent(4), ListDepth::Deep);
        assert_eq!(ListDepth::from_indent(8), ListDepth::Deep);
    }

    #[test]
    fn test_block_text() {
        let block = Block::paragraph("Plain <b>bold</b> text");
        assert_eq!(block.text(), Some("Plain <b>bold</b> text"));
        assert_eq!(block.plain_text(), "Plain bold text");
        assert_eq!(Block::Spacer.text(), None);
        assert!(Block::Spacer.rich_text().is_empty());
    }

    #[test]
    fn test_block_serialization() {
        let block = Block::list_item(ListDepth::Deep, "nested");
        let json = serde_json::to_string(&block).unwrap();
        assert_eq!(json, r#"{"type":"list_item","depth":"Deep","text":"nested"}"#);
    }
}
