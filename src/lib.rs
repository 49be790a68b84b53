//! # mdreport
//!
//! Markdown to PDF report rendering for generated business documents.
//!
//! Source Markdown is read line by line, normalized (emphasis markers and
//! leftover LaTeX), classified into headings, bullets, spacers and
//! paragraphs, and laid out on A4 pages carrying a branded header and a
//! numbered footer.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mdreport::{convert_md_to_pdf, RenderOptions};
//!
//! let options = RenderOptions::default().with_fonts_dir("fonts");
//! if !convert_md_to_pdf("business_plan.md", "business_plan.pdf", &options) {
//!     eprintln!("conversion failed, see log");
//! }
//! ```
//!
//! ## Features
//!
//! - **Line dialect**: `#`/`##`/`###` headings, two-level bullet lists, blank-line spacers
//! - **Inline cleanup**: `**bold**`, `_italic_` and stray LaTeX math
//! - **Page furniture**: logo, title and timestamp header; page number footer
//! - **Batch mode**: renders a directory of reports in parallel with Rayon
//! - **No partial output**: a failed render leaves no PDF behind

pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod source;

// Re-export commonly used types
pub use convert::{BatchConverter, BatchSummary, JobReport, JobStatus, ReportJob};
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_pdf, PdfFormat};
pub use error::{Error, Result};
pub use model::{Block, DocumentFlow, FlowStats, HeadingLevel, ListDepth, RichText, Span};
pub use parser::{parse_line, DocumentBuilder};
pub use render::{
    render_file, PageMargins, RenderOptions, RenderOutcome, RenderState, RenderStats,
    ReportRenderer, StyleSheet,
};
pub use source::{file_exists, load_markdown, save_markdown, SourceDocument};

use std::path::Path;

/// Convert a Markdown file to a PDF file.
///
/// Returns `true` when the PDF was written. Failures are logged and leave no
/// output file.
///
/// # Example
///
/// ```no_run
/// use mdreport::{convert_md_to_pdf, RenderOptions};
///
/// let ok = convert_md_to_pdf("pitch_deck.md", "pitch_deck.pdf", &RenderOptions::default());
/// ```
pub fn convert_md_to_pdf<P: AsRef<Path>, Q: AsRef<Path>>(
    md_path: P,
    pdf_path: Q,
    options: &RenderOptions,
) -> bool {
    render_file(md_path, pdf_path, options).is_success()
}

/// Parse Markdown text into a document flow with the default closing notice.
///
/// # Example
///
/// ```
/// use mdreport::{parse_markdown, Block};
///
/// let flow = parse_markdown("# Plan\n- first");
/// assert!(matches!(flow.blocks[0], Block::Heading { .. }));
/// ```
pub fn parse_markdown(text: &str) -> DocumentFlow {
    DocumentBuilder::new().build_str(text)
}

/// Read a Markdown file into a document flow.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<DocumentFlow> {
    let source = SourceDocument::read(path)?;
    Ok(DocumentBuilder::new().build(&source))
}
