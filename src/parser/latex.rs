//! Cleanup of the pseudo-LaTeX that upstream agents leave in body text.
//!
//! Each step is a pure `&str -> String` rewrite. [`LATEX_STEPS`] lists them
//! in the order they must run: later steps match on text that earlier steps
//! have already stripped, and the final step deletes every backslash that is
//! left over.

use once_cell::sync::Lazy;
use regex::Regex;

static DISPLAY_MATH: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\\[|\\\]").unwrap());
static INLINE_MATH: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\\(|\\\)").unwrap());
static TEXT_WRAPPER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\text\{(.*?)\}").unwrap());
static FRACTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\frac\{(.*?)\}\{(.*?)\}").unwrap());

/// A single cleanup rewrite.
pub type LatexStep = fn(&str) -> String;

/// Cleanup steps in application order.
pub const LATEX_STEPS: [LatexStep; 6] = [
    strip_display_math,
    strip_inline_math,
    unwrap_text,
    replace_times,
    rewrite_fractions,
    strip_backslashes,
];

/// Run the full cleanup pipeline over one line.
pub fn clean_latex(line: &str) -> String {
    LATEX_STEPS
        .iter()
        .fold(line.to_string(), |text, step| step(&text))
}

/// Remove `\[` and `\]`, keeping the enclosed content.
pub fn strip_display_math(line: &str) -> String {
    DISPLAY_MATH.replace_all(line, "").into_owned()
}

/// Remove `\(` and `\)`, keeping the enclosed content.
pub fn strip_inline_math(line: &str) -> String {
    INLINE_MATH.replace_all(line, "").into_owned()
}

/// `\text{abc}` → `abc`.
pub fn unwrap_text(line: &str) -> String {
    TEXT_WRAPPER.replace_all(line, "${1}").into_owned()
}

/// `\times` → `×`.
pub fn replace_times(line: &str) -> String {
    line.replace(r"\times", "×")
}

/// `\frac{A}{B}` → `(A / B)`.
pub fn rewrite_fractions(line: &str) -> String {
    FRACTION.replace_all(line, "(${1} / ${2})").into_owned()
}

/// Delete any backslash still present.
pub fn strip_backslashes(line: &str) -> String {
    line.replace('\\', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction() {
        assert_eq!(clean_latex(r"Margin is \frac{2}{3} of revenue"), "Margin is (2 / 3) of revenue");
    }

    #[test]
    fn test_times() {
        assert_eq!(clean_latex(r"3 \times 4"), "3 × 4");
    }

    #[test]
    fn test_display_math_only_line() {
        assert_eq!(clean_latex(r"\[x=1\]"), "x=1");
    }

    #[test]
    fn test_inline_math_and_text() {
        assert_eq!(
            clean_latex(r"\( \text{ROI} = \frac{\text{gain}}{\text{cost}} \)"),
            " ROI = (gain / cost) "
        );
    }

    #[test]
    fn test_leftover_backslashes_removed() {
        assert_eq!(clean_latex(r"\textbf{x} \alpha"), "textbf{x} alpha");
    }

    #[test]
    fn test_step_order_matters() {
        // Unwrapping \text before the backslash sweep keeps the braces' content only.
        assert_eq!(clean_latex(r"\text{R$}"), "R$");
        assert_eq!(strip_backslashes(r"\text{R$}"), "text{R$}");
    }

    #[test]
    fn test_clean_text_is_unchanged() {
        for line in ["Revenue grew 20% in 2024.", "(2 / 3) × 4", "<b>bold</b>"] {
            assert_eq!(clean_latex(line), line);
        }
    }

    #[test]
    fn test_individual_steps() {
        assert_eq!(strip_display_math(r"\[a\]"), "a");
        assert_eq!(strip_inline_math(r"\(a\)"), "a");
        assert_eq!(unwrap_text(r"\text{a} \text{b}"), "a b");
        assert_eq!(replace_times(r"a\timesb"), "a×b");
        assert_eq!(rewrite_fractions(r"\frac{1}{2}+\frac{3}{4}"), "(1 / 2)+(3 / 4)");
    }
}
