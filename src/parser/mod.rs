//! Line-oriented parser for the report Markdown dialect.
//!
//! Every source line passes through the emphasis normalizer and is then
//! classified into exactly one [`Block`](crate::model::Block). There is no
//! backtracking and no cross-line state.

mod builder;
mod classify;
mod inline;
pub mod latex;

pub use builder::{parse_line, DocumentBuilder, DEFAULT_NOTICE};
pub use classify::classify_line;
pub use inline::normalize_emphasis;
pub use latex::clean_latex;
