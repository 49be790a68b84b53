//! The document flow fed to pagination.

use super::{Block, ListDepth};
use serde::{Deserialize, Serialize};

/// Ordered block elements plus the trailing "generated by" notice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFlow {
    /// Blocks in source order, one per source line
    pub blocks: Vec<Block>,

    /// Fixed notice appended after the body
    pub notice: String,
}

impl DocumentFlow {
    /// Create an empty flow closing with `notice`.
    pub fn new(notice: impl Into<String>) -> Self {
        Self {
            blocks: Vec::new(),
            notice: notice.into(),
        }
    }

    /// Append a block.
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Number of body blocks (the notice is not counted).
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the body is empty.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over the body blocks.
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Count blocks by kind.
    pub fn stats(&self) -> FlowStats {
        let mut stats = FlowStats::default();
        for block in &self.blocks {
            match block {
                Block::Heading { .. } => stats.heading_count += 1,
                Block::ListItem {
                    depth: ListDepth::Shallow,
                    ..
                } => stats.bullet_count += 1,
                Block::ListItem {
                    depth: ListDepth::Deep,
                    ..
                } => stats.sub_bullet_count += 1,
                Block::Spacer => stats.spacer_count += 1,
                Block::Paragraph { .. } => stats.paragraph_count += 1,
            }
        }
        stats
    }
}

impl<'a> IntoIterator for &'a DocumentFlow {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

/// Block counts for one flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowStats {
    /// Headings of any level
    pub heading_count: u32,
    /// Shallow list items
    pub bullet_count: u32,
    /// Deep list items
    pub sub_bullet_count: u32,
    /// Spacers
    pub spacer_count: u32,
    /// Paragraphs
    pub paragraph_count: u32,
}
