//! PDF rendering of a document flow.
//!
//! The layout engine is `genpdf`: the flow becomes a list of padded
//! paragraphs and spacer gaps, and [`ReportDecorator`] draws the header and
//! footer on each page the engine starts.

mod decorator;
pub mod fonts;
mod logo;
mod options;
mod pdf;
mod report;
mod result;
pub mod styles;

pub use decorator::{format_timestamp, PageFurniture, ReportDecorator};
pub use logo::Logo;
pub use options::{PageMargins, RenderOptions, A4_HEIGHT_PT, A4_WIDTH_PT};
pub use pdf::{PdfComposer, RenderedPdf};
pub use report::{render_file, ReportRenderer};
pub use result::{RenderOutcome, RenderState, RenderStats};
pub use styles::{BlockStyle, Rgb, StyleSheet, TextAlign};
