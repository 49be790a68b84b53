//! Line classification.

use super::latex::clean_latex;
use crate::model::{Block, HeadingLevel, ListDepth};
use once_cell::sync::Lazy;
use regex::Regex;

static LIST_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*[-*]\s+").unwrap());

/// Heading prefixes, longest first so `### ` is never read as `# `.
const HEADING_PREFIXES: [(&str, HeadingLevel); 3] = [
    ("### ", HeadingLevel::H3),
    ("## ", HeadingLevel::H2),
    ("# ", HeadingLevel::H1),
];

/// Classify one emphasis-normalized line.
///
/// Rules are tried in order and the first match wins: blank line, heading,
/// list item, paragraph. Only paragraphs go through the LaTeX cleanup.
pub fn classify_line(line: &str) -> Block {
    let line = line.trim_end();

    if line.is_empty() {
        return Block::Spacer;
    }

    if let Some(block) = classify_heading(line) {
        return block;
    }

    if let Some(block) = classify_list_item(line) {
        return block;
    }

    Block::paragraph(clean_latex(line))
}

fn classify_heading(line: &str) -> Option<Block> {
    HEADING_PREFIXES.iter().find_map(|(prefix, level)| {
        line.strip_prefix(prefix)
            .map(|rest| Block::heading(*level, rest))
    })
}

fn classify_list_item(line: &str) -> Option<Block> {
    if !LIST_MARKER.is_match(line) {
        return None;
    }

    let indent = line.chars().take_while(|c| c.is_whitespace()).count();
    let text = line.trim_matches(|c: char| c == '-' || c == '*' || c.is_whitespace());

    Some(Block::list_item(ListDepth::from_indent(indent), text))
}
