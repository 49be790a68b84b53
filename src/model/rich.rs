//! Rich-text runs parsed from the normalizer's inline markup.
//!
//! The inline normalizer rewrites `**bold**` and `_italic_` into `<b>…</b>`
//! and `<i>…</i>` tags. Those four tags are the only markup the layout stage
//! understands; anything else that looks like a tag is literal text.

use serde::{Deserialize, Serialize};

/// Opening tag for a bold span.
pub const BOLD_OPEN: &str = "<b>";
/// Closing tag for a bold span.
pub const BOLD_CLOSE: &str = "</b>";
/// Opening tag for an italic span.
pub const ITALIC_OPEN: &str = "<i>";
/// Closing tag for an italic span.
pub const ITALIC_CLOSE: &str = "</i>";

/// A run of text sharing one inline style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Text content
    pub text: String,
    /// Bold weight
    pub bold: bool,
    /// Italic slant
    pub italic: bool,
}

impl Span {
    /// Create an unstyled span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
        }
    }

    /// Mark the span bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Mark the span italic.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    fn same_style(&self, bold: bool, italic: bool) -> bool {
        self.bold == bold && self.italic == italic
    }
}

/// A line of styled text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichText {
    /// Styled runs in reading order
    pub spans: Vec<Span>,
}

#[derive(Clone, Copy)]
enum Tag {
    BoldOpen,
    BoldClose,
    ItalicOpen,
    ItalicClose,
}

impl Tag {
    fn at(s: &str) -> Option<(Tag, usize)> {
        [
            (BOLD_OPEN, Tag::BoldOpen),
            (BOLD_CLOSE, Tag::BoldClose),
            (ITALIC_OPEN, Tag::ItalicOpen),
            (ITALIC_CLOSE, Tag::ItalicClose),
        ]
        .into_iter()
        .find(|(literal, _)| s.starts_with(literal))
        .map(|(literal, tag)| (tag, literal.len()))
    }
}

impl RichText {
    /// Parse inline markup into styled runs.
    ///
    /// Unbalanced closing tags are dropped; an opening tag that is never
    /// closed styles the remainder of the line.
    pub fn parse(markup: &str) -> Self {
        let mut rich = RichText::default();
        let mut bold = 0u32;
        let mut italic = 0u32;
        let mut buf = String::new();
        let mut rest = markup;

        while let Some(pos) = rest.find('<') {
            let (before, from_lt) = rest.split_at(pos);
            buf.push_str(before);

            match Tag::at(from_lt) {
                Some((tag, len)) => {
                    rich.push_run(&mut buf, bold > 0, italic > 0);
                    match tag {
                        Tag::BoldOpen => bold += 1,
                        Tag::BoldClose => bold = bold.saturating_sub(1),
                        Tag::ItalicOpen => italic += 1,
                        Tag::ItalicClose => italic = italic.saturating_sub(1),
                    }
                    rest = &from_lt[len..];
                }
                None => {
                    buf.push('<');
                    rest = &from_lt[1..];
                }
            }
        }
        buf.push_str(rest);
        rich.push_run(&mut buf, bold > 0, italic > 0);

        rich
    }

    fn push_run(&mut self, buf: &mut String, bold: bool, italic: bool) {
        if buf.is_empty() {
            return;
        }
        match self.spans.last_mut() {
            Some(last) if last.same_style(bold, italic) => last.text.push_str(buf),
            _ => self.spans.push(Span {
                text: buf.clone(),
                bold,
                italic,
            }),
        }
        buf.clear();
    }

    /// Concatenated text without styling.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Whether there is no visible text.
    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(|s| s.text.is_empty())
    }

    /// Iterate over the bold runs.
    pub fn bold_spans(&self) -> impl Iterator<Item = &Span> {
        self.spans.iter().filter(|s| s.bold)
    }

    /// Iterate over the italic runs.
    pub fn italic_spans(&self) -> impl Iterator<Item = &Span> {
        self.spans.iter().filter(|s| s.italic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line() {
        let rich = RichText::parse("no markup here");
        assert_eq!(rich.spans, vec![Span::plain("no markup here")]);
    }

    #[test]
    fn test_bold_and_italic_runs() {
        let rich = RichText::parse("Plain <b>bold</b> and <i>slanted</i> text");
        assert_eq!(
            rich.spans,
            vec![
                Span::plain("Plain "),
                Span::plain("bold").bold(),
                Span::plain(" and "),
                Span::plain("slanted").italic(),
                Span::plain(" text"),
            ]
        );
        assert_eq!(rich.plain_text(), "Plain bold and slanted text");
    }

    #[test]
    fn test_nested_tags() {
        let rich = RichText::parse("<b><i>both</i> strong</b>");
        assert_eq!(
            rich.spans,
            vec![
                Span::plain("both").bold().italic(),
                Span::plain(" strong").bold()
            ]
        );
    }

    #[test]
    fn test_unknown_tags_are_literal() {
        let rich = RichText::parse("a < b <br> c");
        assert_eq!(rich.spans, vec![Span::plain("a < b <br> c")]);
    }

    #[test]
    fn test_unbalanced_tags() {
        let rich = RichText::parse("x</b>y<b>z");
        assert_eq!(
            rich.spans,
            vec![Span::plain("xy"), Span::plain("z").bold()]
        );
    }

    #[test]
    fn test_empty_bold_pair() {
        let rich = RichText::parse("<b></b>");
        assert!(rich.is_empty());
        assert!(rich.spans.is_empty());
    }
}
