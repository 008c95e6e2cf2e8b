use wasm_bindgen::prelude::*;

use crate::catalog::Catalog;
use crate::font::{ApproxMetrics, FontFace};
use crate::layout::Platform;
use crate::render::{self, ExportOptions};
use crate::style::ColorScheme;
use crate::tokenizer::{NameMatchResult, RandomSource, Tokenizer};

/// Placeholder choice backed by the host's `Math.random`.
struct JsRandom;

impl RandomSource for JsRandom {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let i = (js_sys::Math::random() * len as f64) as usize;
        i.min(len - 1)
    }
}

fn spell(name: &str) -> NameMatchResult {
    let catalog = Catalog::builtin();
    Tokenizer::new(&catalog).match_name(name, &mut JsRandom)
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub fn match_name(name: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&spell(name)).map_err(js_err)
}

/// PNG bytes for `name`. The browser has no font directory to scan, so
/// labels are only painted when `font` carries TTF/OTF bytes.
#[wasm_bindgen]
pub fn render_png(name: &str, platform: &str, font: Option<Vec<u8>>) -> Result<Vec<u8>, JsValue> {
    let platform: Platform = platform.parse().map_err(js_err)?;
    let font = font.map(FontFace::from_bytes).transpose().map_err(js_err)?;
    let scheme = ColorScheme::default();
    let mut options = ExportOptions::new(platform, &scheme);
    options.font = font.as_ref();
    render::export(&spell(name), &options).map_err(js_err)
}

#[wasm_bindgen]
pub fn render_svg(name: &str, platform: &str) -> Result<String, JsValue> {
    let platform: Platform = platform.parse().map_err(js_err)?;
    let scheme = ColorScheme::default();
    let scene = render::build_scene(
        &spell(name),
        platform,
        &scheme,
        &ApproxMetrics,
        Some(render::DEFAULT_BRANDING),
    );
    render::svg::write_svg(&scene).map_err(js_err)
}
