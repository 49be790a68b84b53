//! Markdown file to PDF file.

use super::pdf::{PdfComposer, RenderedPdf};
use super::{RenderOptions, RenderOutcome, RenderState, RenderStats};
use crate::error::Result;
use crate::parser::DocumentBuilder;
use crate::source::SourceDocument;
use std::fs;
use std::path::Path;

/// Renders Markdown reports to PDF with one set of options.
///
/// Each call to [`ReportRenderer::render`] moves the renderer through
/// `NotStarted → Rendering → Done | Failed`. Internal faults are converted
/// into the returned [`RenderOutcome`] here and nowhere else.
#[derive(Debug, Clone)]
pub struct ReportRenderer {
    options: RenderOptions,
    state: RenderState,
}

impl ReportRenderer {
    /// Create a renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            state: RenderState::NotStarted,
        }
    }

    /// State after the most recent call.
    pub fn state(&self) -> RenderState {
        self.state
    }

    /// Options in use.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render `input` (Markdown) to `output` (PDF).
    ///
    /// On failure nothing is written: the PDF is composed in memory and only
    /// saved once complete.
    pub fn render(&mut self, input: &Path, output: &Path) -> RenderOutcome {
        self.state = RenderState::Rendering;
        log::info!("rendering {} -> {}", input.display(), output.display());

        match self.try_render(input, output) {
            Ok(stats) => {
                self.state = RenderState::Done;
                log::info!(
                    "PDF generated: {} ({} pages)",
                    output.display(),
                    stats.page_count
                );
                RenderOutcome::done(output, stats)
            }
            Err(e) => {
                self.state = RenderState::Failed;
                log::error!("failed to convert {} to PDF: {}", input.display(), e);
                RenderOutcome::failed(output, e.to_string())
            }
        }
    }

    /// Render Markdown text to PDF bytes without touching the filesystem
    /// (apart from fonts and logo).
    pub fn render_markdown(&self, markdown: &str) -> Result<RenderedPdf> {
        self.options.validate()?;
        let flow = self.builder().build_str(markdown);
        PdfComposer::new(&self.options).render(&flow)
    }

    fn try_render(&self, input: &Path, output: &Path) -> Result<RenderStats> {
        let source = SourceDocument::read(input)?;
        self.options.validate()?;

        let flow = self.builder().build(&source);
        let pdf = PdfComposer::new(&self.options).render(&flow)?;
        fs::write(output, &pdf.bytes)?;

        Ok(RenderStats {
            blocks: flow.stats(),
            page_count: pdf.page_count,
            byte_len: pdf.bytes.len(),
        })
    }

    fn builder(&self) -> DocumentBuilder {
        DocumentBuilder::new().with_notice(self.options.notice.clone())
    }
}

/// Render one Markdown file to PDF.
///
/// Never fails: the outcome reports success or failure with a diagnostic,
/// which is also logged.
pub fn render_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &RenderOptions,
) -> RenderOutcome {
    ReportRenderer::new(options.clone()).render(input.as_ref(), output.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_fails_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("plan.pdf");

        let mut renderer = ReportRenderer::new(RenderOptions::default());
        assert_eq!(renderer.state(), RenderState::NotStarted);

        let outcome = renderer.render(&dir.path().join("plan.md"), &output);
        assert!(!outcome.is_success());
        assert_eq!(renderer.state(), RenderState::Failed);
        assert!(outcome
            .diagnostic
            .as_deref()
            .unwrap()
            .contains("Markdown file not found"));
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_fonts_fail_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("plan.md");
        let output = dir.path().join("plan.pdf");
        fs::write(&input, "# Plan\n").unwrap();

        let options = RenderOptions::default()
            .with_fonts_dir(dir.path().join("no-fonts"))
            .without_logo();
        let outcome = render_file(&input, &output, &options);

        assert!(!outcome.is_success());
        assert!(outcome.diagnostic.unwrap().contains("Font registration failed"));
        assert!(!output.exists());
    }

    #[test]
    fn test_invalid_options_fail() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("plan.md");
        fs::write(&input, "text\n").unwrap();

        let options = RenderOptions::default().with_font_name("");
        let outcome = render_file(&input, dir.path().join("out.pdf"), &options);
        assert!(outcome.diagnostic.unwrap().contains("Invalid configuration"));
    }
}
