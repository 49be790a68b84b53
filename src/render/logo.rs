//! Header logo asset.

use crate::error::Result;
use genpdf::elements::Image;
use genpdf::{Position, Scale};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use std::path::Path;

/// Resolution the layout engine assumes for images without an explicit DPI.
const ENGINE_DPI: f64 = 300.0;

/// A decoded logo, flattened onto white and re-encoded as PNG.
///
/// The layout engine rejects images with an alpha channel, so transparency
/// is composited away once when the asset is loaded.
#[derive(Debug, Clone)]
pub struct Logo {
    png: Vec<u8>,
    width_px: u32,
    height_px: u32,
}

impl Logo {
    /// Load the logo at `path`. An absent file yields `Ok(None)`.
    pub fn load(path: &Path) -> Result<Option<Logo>> {
        if !path.is_file() {
            log::debug!("no logo at {}", path.display());
            return Ok(None);
        }
        let decoded = image::open(path)?;
        Ok(Some(Logo::from_image(&decoded)?))
    }

    /// Flatten and encode an already decoded image.
    pub fn from_image(decoded: &DynamicImage) -> Result<Logo> {
        let rgba = decoded.to_rgba8();
        let flat = RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
            let [r, g, b, a] = rgba.get_pixel(x, y).0;
            Rgb([over_white(r, a), over_white(g, a), over_white(b, a)])
        });

        let mut png = Vec::new();
        DynamicImage::ImageRgb8(flat).write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

        Ok(Logo {
            png,
            width_px: rgba.width(),
            height_px: rgba.height(),
        })
    }

    /// Pixel dimensions.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width_px, self.height_px)
    }

    /// Layout element drawing the logo as a square `size_mm` wide with its
    /// top-left corner at `position`.
    pub fn element(
        &self,
        position: Position,
        size_mm: f64,
    ) -> std::result::Result<Image, genpdf::error::Error> {
        let image = Image::from_reader(Cursor::new(self.png.clone()))?;
        Ok(image
            .with_position(position)
            .with_scale(self.scale_for(size_mm)))
    }

    fn scale_for(&self, size_mm: f64) -> Scale {
        let natural_mm = |px: u32| f64::from(px.max(1)) * 25.4 / ENGINE_DPI;
        Scale::new(
            size_mm / natural_mm(self.width_px),
            size_mm / natural_mm(self.height_px),
        )
    }
}

fn over_white(channel: u8, alpha: u8) -> u8 {
    let (c, a) = (u16::from(channel), u16::from(alpha));
    ((c * a + 255 * (255 - a)) / 255) as u8
}
