//! Shared helpers for rendering tests.

#![allow(dead_code)]

use mdreport::render::fonts::FACE_SUFFIXES;
use mdreport::RenderOptions;
use once_cell::sync::Lazy;
use std::fs;
use std::path::{Path, PathBuf};

/// Family name the staged test fonts are registered under.
pub const FONT_NAME: &str = "TestSans";

/// Installed four-face families, as (directories, face files in
/// Regular/Bold/Italic/BoldItalic order).
const SYSTEM_FAMILIES: [(&[&str], [&str; 4]); 3] = [
    (
        &[
            "/usr/share/fonts/truetype/liberation",
            "/usr/share/fonts/truetype/liberation2",
            "/usr/share/fonts/liberation-sans",
            "/usr/share/fonts/liberation-sans-fonts",
        ],
        [
            "LiberationSans-Regular.ttf",
            "LiberationSans-Bold.ttf",
            "LiberationSans-Italic.ttf",
            "LiberationSans-BoldItalic.ttf",
        ],
    ),
    (
        &[
            "/usr/share/fonts/truetype/dejavu",
            "/usr/share/fonts/dejavu-sans-fonts",
            "/usr/share/fonts/dejavu",
            "/usr/share/fonts/TTF",
        ],
        [
            "DejaVuSans.ttf",
            "DejaVuSans-Bold.ttf",
            "DejaVuSans-Oblique.ttf",
            "DejaVuSans-BoldOblique.ttf",
        ],
    ),
    (
        &["/usr/share/fonts/truetype/freefont", "/usr/share/fonts/gnu-free"],
        [
            "FreeSans.ttf",
            "FreeSansBold.ttf",
            "FreeSansOblique.ttf",
            "FreeSansBoldOblique.ttf",
        ],
    ),
];

static STAGED_FONTS: Lazy<Result<PathBuf, String>> = Lazy::new(stage_fonts);

/// Four face files of the first usable family.
///
/// `MDREPORT_TEST_FONTS_DIR` (holding `LiberationSans-*.ttf`) takes
/// precedence over system locations.
fn find_family() -> Option<[PathBuf; 4]> {
    let from_env = std::env::var_os("MDREPORT_TEST_FONTS_DIR").map(|dir| {
        let dir = PathBuf::from(dir);
        FACE_SUFFIXES.map(|face| dir.join(format!("LiberationSans-{face}.ttf")))
    });

    let installed = SYSTEM_FAMILIES.iter().flat_map(|&(dirs, faces)| {
        dirs.iter()
            .map(move |dir| faces.map(|face| Path::new(dir).join(face)))
    });

    from_env
        .into_iter()
        .chain(installed)
        .find(|faces| faces.iter().all(|path| path.is_file()))
}

/// Copy the family into the test scratch directory under [`FONT_NAME`].
fn stage_fonts() -> Result<PathBuf, String> {
    let faces = find_family().ok_or_else(|| {
        "no TrueType family found: install Liberation Sans, DejaVu Sans or FreeSans, \
         or set MDREPORT_TEST_FONTS_DIR to a directory with LiberationSans-*.ttf"
            .to_string()
    })?;

    let dir = Path::new(env!("CARGO_TARGET_TMPDIR")).join("mdreport-fonts");
    fs::create_dir_all(&dir).map_err(|e| e.to_string())?;
    for (source, face) in faces.iter().zip(FACE_SUFFIXES) {
        let target = dir.join(format!("{FONT_NAME}-{face}.ttf"));
        fs::copy(source, &target).map_err(|e| format!("{}: {e}", source.display()))?;
    }
    Ok(dir)
}

/// Directory with the staged test family. Panics when no font is installed.
pub fn fonts_dir() -> &'static Path {
    match &*STAGED_FONTS {
        Ok(dir) => dir,
        Err(reason) => panic!("{reason}"),
    }
}

/// Render options using the staged fonts and no logo.
pub fn render_options() -> RenderOptions {
    RenderOptions::default()
        .with_fonts_dir(fonts_dir())
        .with_font_name(FONT_NAME)
        .without_logo()
}

/// Text-showing operations (`TJ`) of a rendered PDF, in content order.
///
/// Page content streams are written uncompressed, so the operators can be
/// read straight from the bytes.
pub fn text_operations(pdf: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(pdf)
        .lines()
        .filter(|line| line.ends_with(" TJ"))
        .map(str::to_string)
        .collect()
}

/// Number of page objects in a rendered PDF.
pub fn page_objects(pdf: &[u8]) -> usize {
    let text = String::from_utf8_lossy(pdf);
    text.match_indices("/Type/Page")
        .filter(|(at, name)| !text[at + name.len()..].starts_with('s'))
        .count()
}

/// Write a small RGBA PNG with a transparent border.
pub fn write_logo(path: &Path) {
    let logo = image::RgbaImage::from_fn(64, 64, |x, y| {
        let edge = x < 8 || y < 8 || x >= 56 || y >= 56;
        if edge {
            image::Rgba([0, 0, 0, 0])
        } else {
            image::Rgba([0, 64, 133, 255])
        }
    });
    logo.save(path).unwrap();
}

/// Sample report exercising every block kind.
pub const SAMPLE_REPORT: &str = "\
# Business Plan

## Market
The **market** grows _fast_.
- **Revenue**: subscriptions
    - year one: \\( \\frac{3}{4} \\) of target
* Margin of 20 \\times average

### Risks
\\[ ROI = \\text{profit} \\]
";
