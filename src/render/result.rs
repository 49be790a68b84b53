//! Render outcome, state and statistics.

use crate::model::FlowStats;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Lifecycle of one render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RenderState {
    /// Nothing attempted yet
    #[default]
    NotStarted,
    /// Converting and paginating a source document
    Rendering,
    /// PDF written
    Done,
    /// Render failed; no output guaranteed
    Failed,
}

/// Statistics collected for a successful render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Block counts of the document flow
    pub blocks: FlowStats,

    /// Pages laid out
    pub page_count: u32,

    /// Size of the written PDF in bytes
    pub byte_len: usize,
}

/// Result of rendering one Markdown file: success or failure plus an
/// optional diagnostic. Never carries an error object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOutcome {
    /// Final state ([`RenderState::Done`] or [`RenderState::Failed`])
    pub state: RenderState,

    /// Requested output path
    pub output: PathBuf,

    /// Human-readable reason for a failure
    pub diagnostic: Option<String>,

    /// Statistics, present on success
    pub stats: Option<RenderStats>,
}

impl RenderOutcome {
    /// Successful outcome.
    pub fn done(output: impl Into<PathBuf>, stats: RenderStats) -> Self {
        Self {
            state: RenderState::Done,
            output: output.into(),
            diagnostic: None,
            stats: Some(stats),
        }
    }

    /// Failed outcome with a diagnostic.
    pub fn failed(output: impl Into<PathBuf>, diagnostic: impl Into<String>) -> Self {
        Self {
            state: RenderState::Failed,
            output: output.into(),
            diagnostic: Some(diagnostic.into()),
            stats: None,
        }
    }

    /// Whether the PDF was written.
    pub fn is_success(&self) -> bool {
        self.state == RenderState::Done
    }

    /// Output path.
    pub fn output(&self) -> &Path {
        &self.output
    }
}

impl From<&RenderOutcome> for bool {
    fn from(outcome: &RenderOutcome) -> bool {
        outcome.is_success()
    }
}
