//! Bold/italic normalization.
//!
//! `**text**` becomes `<b>text</b>` and `_text_` becomes `<i>text</i>`.
//! Markers pair non-greedily, left to right, on one line. Unpaired markers
//! are kept as literal characters.

use crate::model::{BOLD_CLOSE, BOLD_OPEN, ITALIC_CLOSE, ITALIC_OPEN};
use once_cell::sync::Lazy;
use regex::Regex;

static BOLD_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static BOLD_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"</?b>").unwrap());

/// Rewrite emphasis markers into inline markup.
///
/// Bold runs first. Italic markers then pair left to right, and a pair is
/// only taken when every bold span between them opens and closes inside it.
/// An `_` pair crossing a bold boundary stays literal.
pub fn normalize_emphasis(line: &str) -> String {
    let bold = BOLD_MARKER.replace_all(line, format!("{BOLD_OPEN}${{1}}{BOLD_CLOSE}").as_str());
    italicize(&bold)
}

fn italicize(line: &str) -> String {
    let markers: Vec<usize> = line.match_indices('_').map(|(i, _)| i).collect();
    let mut out = String::with_capacity(line.len() + 8);
    let mut last = 0;
    let mut k = 0;

    while k + 1 < markers.len() {
        let (open, close) = (markers[k], markers[k + 1]);
        let inner = &line[open + 1..close];
        if !bold_balanced(inner) {
            k += 1;
            continue;
        }
        out.push_str(&line[last..open]);
        out.push_str(ITALIC_OPEN);
        out.push_str(inner);
        out.push_str(ITALIC_CLOSE);
        last = close + 1;
        k += 2;
    }
    out.push_str(&line[last..]);

    out
}

fn bold_balanced(text: &str) -> bool {
    let mut depth = 0i32;
    for tag in BOLD_TAG.find_iter(text) {
        depth += if tag.as_str() == BOLD_OPEN { 1 } else { -1 };
        if depth < 0 {
            return false;
        }
    }
    depth == 0
}
