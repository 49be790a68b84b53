//! Document model types for report content.
//!
//! This module defines the intermediate representation that bridges the
//! line-oriented Markdown parser and the PDF layout stage.

mod block;
mod flow;
mod rich;

pub use block::{Block, HeadingLevel, ListDepth};
pub use flow::{DocumentFlow, FlowStats};
pub use rich::{RichText, Span, BOLD_CLOSE, BOLD_OPEN, ITALIC_CLOSE, ITALIC_OPEN};
