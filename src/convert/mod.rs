//! Batch conversion of report directories.
//!
//! The agent pipeline drops zero or more named Markdown files into an output
//! directory. [`BatchConverter`] renders each of them to a sibling PDF. Jobs
//! are independent: a missing or failing document is reported and the rest
//! carry on.
//!
//! # Example
//!
//! ```no_run
//! use mdreport::convert::{BatchConverter, expected_reports, DEFAULT_REPORTS};
//! use mdreport::RenderOptions;
//! use std::path::Path;
//!
//! let jobs = expected_reports(Path::new("biz_output"), &DEFAULT_REPORTS);
//! let reports = BatchConverter::new(RenderOptions::default()).convert(&jobs);
//! for report in &reports {
//!     println!("{}: {:?}", report.job.input.display(), report.status);
//! }
//! ```

use crate::error::Result;
use crate::render::{render_file, RenderOptions, RenderStats};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Markdown files the agent pipeline is expected to produce.
pub const DEFAULT_REPORTS: [&str; 3] = ["business_plan.md", "executive_summary.md", "pitch_deck.md"];

/// One Markdown → PDF conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportJob {
    /// Source Markdown
    pub input: PathBuf,
    /// Destination PDF
    pub output: PathBuf,
}

impl ReportJob {
    /// Create a job.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Job writing `<out_dir>/<stem>.pdf` for a Markdown file.
    pub fn for_markdown(input: impl Into<PathBuf>, out_dir: &Path) -> Self {
        let input = input.into();
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "report".to_string());
        let output = out_dir.join(format!("{stem}.pdf"));
        Self { input, output }
    }
}

/// What happened to one job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    /// PDF written
    Rendered(RenderStats),
    /// Source Markdown was never produced
    Missing,
    /// Render failed with a diagnostic
    Failed(String),
}

/// A job together with its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobReport {
    /// The job
    pub job: ReportJob,
    /// Its outcome
    pub status: JobStatus,
}

impl JobReport {
    /// Whether the PDF was written.
    pub fn is_rendered(&self) -> bool {
        matches!(self.status, JobStatus::Rendered(_))
    }
}

/// Counts over a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// PDFs written
    pub rendered: usize,
    /// Sources not found
    pub missing: usize,
    /// Renders that failed
    pub failed: usize,
}

impl BatchSummary {
    /// Summarize job reports.
    pub fn from_reports(reports: &[JobReport]) -> Self {
        reports
            .iter()
            .fold(BatchSummary::default(), |mut summary, report| {
                match report.status {
                    JobStatus::Rendered(_) => summary.rendered += 1,
                    JobStatus::Missing => summary.missing += 1,
                    JobStatus::Failed(_) => summary.failed += 1,
                }
                summary
            })
    }
}

/// Renders many reports with one set of options.
#[derive(Debug, Clone)]
pub struct BatchConverter {
    options: RenderOptions,
    parallel: bool,
}

impl BatchConverter {
    /// Create a converter that renders jobs in parallel.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            parallel: true,
        }
    }

    /// Enable or disable parallel rendering.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Render every job. Reports come back in job order.
    pub fn convert(&self, jobs: &[ReportJob]) -> Vec<JobReport> {
        if self.parallel {
            jobs.par_iter().map(|job| self.convert_one(job)).collect()
        } else {
            jobs.iter().map(|job| self.convert_one(job)).collect()
        }
    }

    /// Render every `*.md` file in `dir` into `out_dir`.
    pub fn convert_dir(&self, dir: &Path, out_dir: &Path) -> Result<Vec<JobReport>> {
        fs::create_dir_all(out_dir)?;
        let jobs: Vec<ReportJob> = markdown_files(dir)?
            .into_iter()
            .map(|input| ReportJob::for_markdown(input, out_dir))
            .collect();
        Ok(self.convert(&jobs))
    }

    fn convert_one(&self, job: &ReportJob) -> JobReport {
        if !job.input.exists() {
            log::warn!("{} was not generated", job.input.display());
            return JobReport {
                job: job.clone(),
                status: JobStatus::Missing,
            };
        }

        let outcome = render_file(&job.input, &job.output, &self.options);
        let status = match (outcome.is_success(), outcome.stats, outcome.diagnostic) {
            (true, Some(stats), _) => JobStatus::Rendered(stats),
            (_, _, diagnostic) => {
                JobStatus::Failed(diagnostic.unwrap_or_else(|| "unknown error".to_string()))
            }
        };
        JobReport {
            job: job.clone(),
            status,
        }
    }
}

/// Jobs for the named Markdown files in `dir`, each rendered next to its source.
pub fn expected_reports(dir: &Path, names: &[&str]) -> Vec<ReportJob> {
    names
        .iter()
        .map(|name| ReportJob::for_markdown(dir.join(name), dir))
        .collect()
}

/// `*.md` files directly inside `dir`, sorted by name.
pub fn markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_extension(&path, &["md"]) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Delete generated `.md` and `.pdf` files directly inside `dir`.
///
/// Returns the number of files removed.
pub fn clean_output_dir(dir: &Path) -> Result<usize> {
    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_extension(&path, &["md", "pdf"]) {
            fs::remove_file(&path)?;
            removed += 1;
        }
    }
    log::info!("removed {} report files from {}", removed, dir.display());
    Ok(removed)
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| extensions.contains(&ext.as_str()))
}
