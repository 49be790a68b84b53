//! Header and footer drawn on every page.

use super::logo::Logo;
use super::options::{PageMargins, RenderOptions};
use super::styles::{pt, pt_to_mm, BlockStyle};
use chrono::{DateTime, TimeZone};
use genpdf::elements::Paragraph;
use genpdf::render::Area;
use genpdf::style::Style;
use genpdf::{Context, Element, Margins, Mm, PageDecorator, Position};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

// Page furniture positions, in points from the page edges.
const LOGO_LEFT: f64 = 40.0;
const LOGO_TOP: f64 = 10.0;
const LOGO_SIZE: f64 = 60.0;
const TITLE_LEFT: f64 = 120.0;
const TITLE_TOP: f64 = 29.0;
const TIMESTAMP_RIGHT: f64 = 50.0;
const TIMESTAMP_TOP: f64 = 32.0;
const FOOTER_FROM_BOTTOM: f64 = 37.0;

/// Format a generation timestamp as `dd/mm/YYYY - HH:MM`.
pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    at.format("%d/%m/%Y - %H:%M").to_string()
}

/// Text of the header and footer lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFurniture {
    /// Title at the top of the page
    pub title: String,
    /// Right-aligned generation stamp, label included
    pub timestamp: String,
    /// Label before the page number
    pub page_label: String,
    /// Copyright text after the page number
    pub copyright: String,
}

impl PageFurniture {
    /// Furniture for a report generated at `generated_at`.
    pub fn new<Tz: TimeZone>(options: &RenderOptions, generated_at: &DateTime<Tz>) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self {
            title: options.title.clone(),
            timestamp: format!("{} {}", options.timestamp_label, format_timestamp(generated_at)),
            page_label: options.page_label.clone(),
            copyright: options.copyright.clone(),
        }
    }

    /// Footer line for a 1-based page number.
    pub fn footer(&self, page: u32) -> String {
        format!("{} {} • {}", self.page_label, page, self.copyright)
    }
}

/// Draws the logo, title, timestamp and page footer, then hands the body
/// area (inside the page margins) back to the layout engine.
///
/// The engine calls [`PageDecorator::decorate_page`] once per new page; the
/// page counter is the only state kept between calls.
pub struct ReportDecorator {
    page: u32,
    pages: Rc<Cell<u32>>,
    margins: PageMargins,
    furniture: PageFurniture,
    logo: Option<Logo>,
    title_style: BlockStyle,
    timestamp_style: BlockStyle,
    footer_style: BlockStyle,
}

impl ReportDecorator {
    /// Create a decorator for one render.
    pub fn new(options: &RenderOptions, furniture: PageFurniture, logo: Option<Logo>) -> Self {
        Self {
            page: 0,
            pages: Rc::new(Cell::new(0)),
            margins: options.margins,
            furniture,
            logo,
            title_style: options.styles.header_title.clone(),
            timestamp_style: options.styles.header_timestamp.clone(),
            footer_style: options.styles.footer.clone(),
        }
    }

    /// Handle reporting how many pages have been decorated so far.
    pub fn page_count_handle(&self) -> Rc<Cell<u32>> {
        Rc::clone(&self.pages)
    }

    fn draw_logo(&self, context: &Context, area: &Area<'_>, style: Style) {
        let Some(logo) = &self.logo else {
            return;
        };
        let position = Position::new(pt(LOGO_LEFT), pt(LOGO_TOP));
        let drawn = logo
            .element(position, pt_to_mm(LOGO_SIZE))
            .and_then(|mut image| image.render(context, area.clone(), style));
        if let Err(e) = drawn {
            log::warn!("logo skipped on page {}: {}", self.page, e);
        }
    }

    fn draw_header(
        &self,
        context: &Context,
        area: &Area<'_>,
        style: Style,
    ) -> Result<(), genpdf::error::Error> {
        let title_region = Margins::trbl(pt(TITLE_TOP), pt(0.0), pt(0.0), pt(TITLE_LEFT));
        draw_line(context, area, title_region, &self.furniture.title, &self.title_style, style)?;

        let stamp_region = Margins::trbl(pt(TIMESTAMP_TOP), pt(TIMESTAMP_RIGHT), pt(0.0), pt(0.0));
        draw_line(
            context,
            area,
            stamp_region,
            &self.furniture.timestamp,
            &self.timestamp_style,
            style,
        )
    }

    fn draw_footer(
        &self,
        context: &Context,
        area: &Area<'_>,
        style: Style,
    ) -> Result<(), genpdf::error::Error> {
        let top: Mm = area.size().height - pt(FOOTER_FROM_BOTTOM);
        let region = Margins::trbl(top, pt(self.margins.right), pt(0.0), pt(self.margins.left));
        draw_line(
            context,
            area,
            region,
            &self.furniture.footer(self.page),
            &self.footer_style,
            style,
        )
    }
}

impl PageDecorator for ReportDecorator {
    fn decorate_page<'a>(
        &mut self,
        context: &Context,
        area: Area<'a>,
        style: Style,
    ) -> Result<Area<'a>, genpdf::error::Error> {
        self.page += 1;
        self.pages.set(self.page);

        self.draw_logo(context, &area, style);
        self.draw_header(context, &area, style)?;
        self.draw_footer(context, &area, style)?;

        let mut body = area;
        body.add_margins(self.margins.to_margins());
        Ok(body)
    }
}

fn draw_line(
    context: &Context,
    page: &Area<'_>,
    region: Margins,
    text: &str,
    block: &BlockStyle,
    style: Style,
) -> Result<(), genpdf::error::Error> {
    let mut area = page.clone();
    area.add_margins(region);

    let mut paragraph = Paragraph::default();
    paragraph.push_styled(text.to_string(), block.text_style(false, false));
    paragraph.aligned(block.alignment.into()).render(context, area, style)?;
    Ok(())
}
