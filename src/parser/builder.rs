//! Source lines to document flow.

use super::classify::classify_line;
use super::inline::normalize_emphasis;
use crate::model::{Block, DocumentFlow};
use crate::source::SourceDocument;

/// Notice appended after the body of every report.
pub const DEFAULT_NOTICE: &str = "Report generated automatically by AgentAI Biz";

/// Builds a [`DocumentFlow`] from Markdown source, one block per line.
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    notice: String,
}

impl DocumentBuilder {
    /// Create a builder with the default closing notice.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the closing notice.
    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = notice.into();
        self
    }

    /// Build the flow for a source document.
    pub fn build(&self, source: &SourceDocument) -> DocumentFlow {
        self.build_lines(source.lines())
    }

    /// Build the flow for Markdown text.
    pub fn build_str(&self, markdown: &str) -> DocumentFlow {
        self.build_lines(markdown.lines())
    }

    /// Build the flow for an ordered sequence of raw lines.
    pub fn build_lines<I, S>(&self, lines: I) -> DocumentFlow
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut flow = DocumentFlow::new(self.notice.clone());
        for line in lines {
            flow.push(parse_line(line.as_ref()));
        }
        log::debug!("built document flow with {} blocks", flow.len());
        flow
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self {
            notice: DEFAULT_NOTICE.to_string(),
        }
    }
}

/// Normalize and classify one raw source line.
pub fn parse_line(raw: &str) -> Block {
    classify_line(&normalize_emphasis(raw.trim_end()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HeadingLevel, ListDepth, Span};

    #[test]
    fn test_end_to_end_scenario() {
        let flow = DocumentBuilder::new().build_lines([
            "# Title",
            "",
            "- item one",
            "  - nested item",
            "Plain **bold** text",
        ]);

        assert_eq!(
            flow.blocks,
            vec![
                Block::heading(HeadingLevel::H1, "Title"),
                Block::Spacer,
                Block::list_item(ListDepth::Shallow, "item one"),
                Block::list_item(ListDepth::Shallow, "nested item"),
                Block::paragraph("Plain <b>bold</b> text"),
            ]
        );

        let rich = flow.blocks[4].rich_text();
        let bold: Vec<&Span> = rich.bold_spans().collect();
        assert_eq!(bold.len(), 1);
        assert_eq!(bold[0].text, "bold");
    }

    #[test]
    fn test_blank_lines_are_kept() {
        let flow = DocumentBuilder::new().build_str("a\n\n\n\nb\n");
        assert_eq!(flow.len(), 5);
        assert_eq!(flow.stats().spacer_count, 3);
        assert!(flow.blocks[1..4].iter().all(Block::is_spacer));
    }

    #[test]
    fn test_one_block_per_line() {
        let text = "# A\n## B\n### C\n- d\n    - e\n\nf \\times g\n**h**\n";
        let flow = DocumentBuilder::new().build_str(text);
        assert_eq!(flow.len(), text.lines().count());
    }

    #[test]
    fn test_emphasis_applies_to_every_block_kind() {
        let flow = DocumentBuilder::new().build_str("## **Key** _facts_\n- **Goal**\n");
        assert_eq!(
            flow.blocks[0],
            Block::heading(HeadingLevel::H2, "<b>Key</b> <i>facts</i>")
        );
        assert_eq!(
            flow.blocks[1],
            Block::list_item(ListDepth::Shallow, "<b>Goal</b>")
        );
    }

    #[test]
    fn test_trailing_whitespace_and_crlf() {
        let flow = DocumentBuilder::new().build_str("# Title   \r\n   \r\ntext\r\n");
        assert_eq!(
            flow.blocks,
            vec![
                Block::heading(HeadingLevel::H1, "Title"),
                Block::Spacer,
                Block::paragraph("text"),
            ]
        );
    }

    #[test]
    fn test_notice() {
        let flow = DocumentBuilder::new().with_notice("done").build_str("x");
        assert_eq!(flow.notice, "done");
        assert_eq!(DocumentBuilder::new().build_str("").notice, DEFAULT_NOTICE);
    }
}
