//! Document flow to PDF bytes.

use super::decorator::{PageFurniture, ReportDecorator};
use super::fonts::load_font_family;
use super::logo::Logo;
use super::options::RenderOptions;
use super::styles::{pt, BlockStyle};
use crate::error::Result;
use crate::model::{Block, DocumentFlow, RichText};
use chrono::{DateTime, Local, TimeZone};
use genpdf::elements::{PaddedElement, Paragraph};
use genpdf::render::Area;
use genpdf::style::Style;
use genpdf::{Context, Document, Element, Margins, Mm, PaperSize, RenderResult, Size};
use std::fmt;

/// A finished PDF held in memory.
#[derive(Debug, Clone)]
pub struct RenderedPdf {
    /// Encoded PDF
    pub bytes: Vec<u8>,
    /// Number of pages laid out
    pub page_count: u32,
}

/// Lays a [`DocumentFlow`] out on decorated A4 pages.
pub struct PdfComposer<'a> {
    options: &'a RenderOptions,
}

impl<'a> PdfComposer<'a> {
    /// Create a composer using `options`.
    pub fn new(options: &'a RenderOptions) -> Self {
        Self { options }
    }

    /// Render the flow to PDF bytes.
    ///
    /// Fonts are registered first, so a missing font family fails before any
    /// layout work. The logo is optional: an absent file is skipped quietly,
    /// an unreadable one with a warning.
    pub fn render(&self, flow: &DocumentFlow) -> Result<RenderedPdf> {
        self.render_at(flow, &Local::now())
    }

    /// Render the flow with the header stamped `generated_at`.
    pub fn render_at<Tz: TimeZone>(
        &self,
        flow: &DocumentFlow,
        generated_at: &DateTime<Tz>,
    ) -> Result<RenderedPdf>
    where
        Tz::Offset: fmt::Display,
    {
        let options = self.options;
        let family = load_font_family(&options.fonts_dir, &options.font_name)?;

        let furniture = PageFurniture::new(options, generated_at);
        let decorator = ReportDecorator::new(options, furniture, self.load_logo());
        let pages = decorator.page_count_handle();

        let mut doc = Document::new(family);
        doc.set_title(options.title.clone());
        doc.set_paper_size(PaperSize::A4);
        doc.set_font_size(options.styles.paragraph.font_size);
        doc.set_page_decorator(decorator);

        self.push_flow(&mut doc, flow);

        let mut bytes = Vec::new();
        doc.render(&mut bytes)?;
        log::debug!("laid out {} blocks on {} pages", flow.len(), pages.get());

        Ok(RenderedPdf {
            bytes,
            page_count: pages.get(),
        })
    }

    fn load_logo(&self) -> Option<Logo> {
        let path = self.options.logo_path.as_deref()?;
        match Logo::load(path) {
            Ok(logo) => logo,
            Err(e) => {
                log::warn!("ignoring logo {}: {}", path.display(), e);
                None
            }
        }
    }

    fn push_flow(&self, doc: &mut Document, flow: &DocumentFlow) {
        let styles = &self.options.styles;

        for block in flow {
            match block {
                Block::Spacer => doc.push(VerticalSpace::new(pt(styles.spacer_height))),
                Block::ListItem { depth, .. } => doc.push(block_paragraph(
                    &block.rich_text(),
                    styles.list_item(*depth),
                    Some(&styles.bullet_glyph),
                )),
                Block::Heading { .. } | Block::Paragraph { .. } => {
                    if let Some(style) = styles.for_block(block) {
                        doc.push(block_paragraph(&block.rich_text(), style, None));
                    }
                }
            }
        }

        let notice = RichText::parse(&flow.notice);
        doc.push(block_paragraph(&notice, &styles.notice, None));
    }
}

/// One block as a padded paragraph: indent on the left, spacing above and below.
fn block_paragraph(
    text: &RichText,
    style: &BlockStyle,
    bullet: Option<&str>,
) -> PaddedElement<Paragraph> {
    let mut paragraph = Paragraph::default();
    if let Some(glyph) = bullet {
        paragraph.push_styled(format!("{glyph} "), style.text_style(false, false));
    }
    for span in &text.spans {
        paragraph.push_styled(span.text.clone(), style.text_style(span.bold, span.italic));
    }

    paragraph.aligned(style.alignment.into()).padded(Margins::trbl(
        pt(style.space_before),
        pt(0.0),
        pt(style.space_after),
        pt(style.left_indent),
    ))
}

/// Fixed vertical gap. A gap that does not fit ends at the page bottom and
/// is not carried over.
struct VerticalSpace {
    height: Mm,
}

impl VerticalSpace {
    fn new(height: Mm) -> Self {
        Self { height }
    }
}

impl Element for VerticalSpace {
    fn render(
        &mut self,
        _context: &Context,
        area: Area<'_>,
        _style: Style,
    ) -> std::result::Result<RenderResult, genpdf::error::Error> {
        let available = area.size().height;
        let height = if self.height < available {
            self.height
        } else {
            available
        };

        let mut result = RenderResult::default();
        result.size = Size::new(Mm::from(0.0), height);
        Ok(result)
    }
}
