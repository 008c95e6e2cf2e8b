//! # Raster Backend
//!
//! A [`Scene`] becomes a PNG by way of its SVG: the document from
//! [`write_svg`] is parsed by usvg and painted by resvg, then the pixmap is
//! un-premultiplied into an `RgbaImage` for encoding.
//!
//! Text is shaped by usvg from a font database holding the system fonts
//! plus the caller's face, if given. The caller's face also becomes the
//! `sans-serif` family, so it wins over whatever the system maps there.

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, Rgba, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg;

use super::svg::{write_svg, PRIMARY_FONT};
use super::Scene;
use crate::error::{Error, Result};
use crate::font::FontFace;

const SANS_SERIF: usvg::fontdb::Query<'static> = usvg::fontdb::Query {
    families: &[usvg::fontdb::Family::SansSerif],
    weight: usvg::fontdb::Weight::NORMAL,
    stretch: usvg::fontdb::Stretch::Normal,
    style: usvg::fontdb::Style::Normal,
};

/// Parse options with a font database for `font` and the host's fonts.
fn svg_options(font: Option<&FontFace>) -> usvg::Options<'static> {
    let mut opt = usvg::Options::default();
    opt.font_family = PRIMARY_FONT.to_string();

    let db = opt.fontdb_mut();
    #[cfg(not(target_arch = "wasm32"))]
    db.load_system_fonts();

    let mut family = None;
    if let Some(font) = font {
        db.load_font_data(font.data().to_vec());
        if let Some(name) = font.family() {
            db.set_sans_serif_family(name);
            family = Some(name.to_string());
        }
    }
    if db.len() == 0 {
        tracing::warn!("no fonts available; text left out of the raster export");
    } else if family.is_none() && db.query(&SANS_SERIF).is_none() {
        // The generic family points at a face this host lacks.
        let fallback = db
            .faces()
            .find_map(|face| face.families.first().map(|(name, _)| name.clone()));
        if let Some(name) = fallback {
            tracing::debug!(family = %name, "sans-serif fallback");
            db.set_sans_serif_family(name);
        }
    }
    if let Some(family) = family {
        opt.font_family = family;
    }
    opt
}

/// Paint `scene` into a bitmap of its own size.
pub fn rasterize(scene: &Scene, font: Option<&FontFace>) -> Result<RgbaImage> {
    let svg = write_svg(scene)?;
    let opt = svg_options(font);
    let tree = usvg::Tree::from_str(&svg, &opt).map_err(|e| Error::Render(e.to_string()))?;

    let size = tree.size().to_int_size();
    let mut pixmap = Pixmap::new(size.width(), size.height()).ok_or_else(|| {
        Error::Render(format!(
            "cannot allocate a {}x{} pixmap",
            size.width(),
            size.height()
        ))
    })?;
    resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());

    let mut image = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in image.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    Ok(image)
}

/// PNG-encode `image`. Encoder errors propagate unchanged.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ColorType::Rgba8,
    )?;
    Ok(bytes)
}
