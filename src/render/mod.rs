//! # Share Image Rendering
//!
//! Export is split in two so the geometry can be checked without pixels:
//!
//! ```text
//! NameMatchResult + Platform
//!       ↓
//!   [layout]   positioned tiles, centered on the canvas
//!       ↓
//!   [scene]    background, tiles, labels, branding as draw commands
//!       ↓
//!   [raster] → PNG bytes        [svg] → SVG document
//! ```
//!
//! A scene is plain data. Backends only paint what it lists.

pub mod raster;
pub mod svg;

use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::font::{truncate_to_width, ApproxMetrics, FontFace, TextMeasure};
use crate::layout::{layout_export, LayoutProfile, Platform};
use crate::style::{Color, ColorScheme};
use crate::tokenizer::{MatchToken, NameMatchResult};

/// Text drawn along the bottom edge of every export.
pub const DEFAULT_BRANDING: &str = "periodicnames.com";

/// Stroke width of tile borders.
const BORDER_WIDTH: f64 = 2.0;
/// Dash and gap length of placeholder borders.
const PLACEHOLDER_DASH: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Which part of the text box sits on the anchor's y coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
    Bottom,
}

/// A rectangle, optionally with rounded corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub radius: f64,
}

/// One painting operation, in canvas pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Fill {
        rect: RoundedRect,
        color: Color,
    },
    Stroke {
        rect: RoundedRect,
        color: Color,
        width: f64,
        /// Dash length, with an equal gap. `None` for a solid line.
        dash: Option<f64>,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        size: f64,
        bold: bool,
        align: TextAlign,
        baseline: TextBaseline,
        color: Color,
    },
}

/// A fixed-size canvas and the commands that paint it, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub commands: Vec<DrawCommand>,
}

/// Output encodings for [`export`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Png,
    Svg,
}

impl ExportFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Svg => "image/svg+xml",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Svg => "svg",
        }
    }
}

/// Everything that shapes an export apart from the name itself.
#[derive(Debug, Clone, Copy)]
pub struct ExportOptions<'a> {
    pub platform: Platform,
    pub format: ExportFormat,
    pub scheme: &'a ColorScheme,
    /// Preferred label face for PNG output and the source of truncation
    /// widths. Without one, PNG text uses the host's fonts.
    pub font: Option<&'a FontFace>,
    /// `None` or an empty string leaves the branding off.
    pub branding: Option<&'a str>,
}

impl<'a> ExportOptions<'a> {
    pub fn new(platform: Platform, scheme: &'a ColorScheme) -> Self {
        Self {
            platform,
            format: ExportFormat::Png,
            scheme,
            font: None,
            branding: Some(DEFAULT_BRANDING),
        }
    }
}

fn white(alpha: f64) -> Color {
    Color::rgba(1.0, 1.0, 1.0, alpha)
}

/// Lay out `result` for `platform` and describe the finished image.
pub fn build_scene(
    result: &NameMatchResult,
    platform: Platform,
    scheme: &ColorScheme,
    measure: &dyn TextMeasure,
    branding: Option<&str>,
) -> Scene {
    let profile = LayoutProfile::for_platform(platform);
    let layout = layout_export(result.tokens(), &profile);
    let mut commands = Vec::with_capacity(1 + layout.items.len() * 5);

    commands.push(DrawCommand::Fill {
        rect: RoundedRect {
            x: 0.0,
            y: 0.0,
            width: profile.canvas_width,
            height: profile.canvas_height,
            radius: 0.0,
        },
        color: scheme.background,
    });

    let size = profile.tile_size;
    for item in layout.tiles() {
        let Some(kind) = item.tile else { continue };
        let paint = scheme.tile_paint(kind);
        let rect = RoundedRect {
            x: item.x,
            y: item.y,
            width: size,
            height: size,
            radius: size * 0.125,
        };
        commands.push(DrawCommand::Fill {
            rect,
            color: paint.fill,
        });
        commands.push(DrawCommand::Stroke {
            rect,
            color: paint.border,
            width: BORDER_WIDTH,
            dash: paint.dashed_border.then_some(PLACEHOLDER_DASH),
        });
        push_tile_labels(&mut commands, item.token, item.x, item.y, size, measure);
    }

    if let Some(text) = branding.filter(|b| !b.is_empty()) {
        commands.push(DrawCommand::Text {
            text: text.to_string(),
            x: profile.canvas_width / 2.0,
            y: profile.canvas_height - 20.0,
            size: 16.0,
            bold: true,
            align: TextAlign::Center,
            baseline: TextBaseline::Bottom,
            color: Color::from_rgba8(107, 114, 128, 0.8),
        });
    }

    Scene {
        width: profile.canvas_width as u32,
        height: profile.canvas_height as u32,
        commands,
    }
}

/// Atomic number (real elements only), symbol, and truncated name.
fn push_tile_labels(
    commands: &mut Vec<DrawCommand>,
    token: &MatchToken,
    x: f64,
    y: f64,
    size: f64,
    measure: &dyn TextMeasure,
) {
    if let Some(el) = token.as_element() {
        commands.push(DrawCommand::Text {
            text: el.atomic_number.to_string(),
            x: x + 4.0,
            y: y + 2.0,
            size: size * 0.15,
            bold: true,
            align: TextAlign::Left,
            baseline: TextBaseline::Top,
            color: white(0.8),
        });
    }

    commands.push(DrawCommand::Text {
        text: token.symbol(),
        x: x + size / 2.0,
        y: y + size / 2.0,
        size: size * 0.4,
        bold: true,
        align: TextAlign::Center,
        baseline: TextBaseline::Middle,
        color: Color::WHITE,
    });

    let name_size = size * 0.12;
    commands.push(DrawCommand::Text {
        text: truncate_to_width(token.name(), size - 8.0, name_size, measure),
        x: x + size / 2.0,
        y: y + size - 4.0,
        size: name_size,
        bold: false,
        align: TextAlign::Center,
        baseline: TextBaseline::Bottom,
        color: white(0.9),
    });
}

/// Render `result` to image bytes. Encoding failures are returned as-is.
pub fn export(result: &NameMatchResult, options: &ExportOptions<'_>) -> Result<Vec<u8>> {
    let measure: &dyn TextMeasure = match options.font {
        Some(font) => font,
        None => &ApproxMetrics,
    };
    let scene = build_scene(
        result,
        options.platform,
        options.scheme,
        measure,
        options.branding,
    );
    tracing::debug!(
        platform = %options.platform,
        format = options.format.extension(),
        commands = scene.commands.len(),
        "exporting"
    );
    match options.format {
        ExportFormat::Png => {
            let image = raster::rasterize(&scene, options.font)?;
            raster::encode_png(&image)
        }
        ExportFormat::Svg => Ok(svg::write_svg(&scene)?.into_bytes()),
    }
}

/// `data:` URI for embedding an export in HTML or a share payload.
pub fn to_data_uri(bytes: &[u8], format: ExportFormat) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{};base64,{}", format.mime_type(), encoded)
}

/// File name for saving an export, as `periodic-name-<slug>-<platform>.<ext>`.
pub fn suggested_filename(result: &NameMatchResult, options: &ExportOptions<'_>) -> String {
    let slug: String = result
        .original_name()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    let slug = if slug.is_empty() { "name".to_string() } else { slug };
    format!(
        "periodic-name-{}-{}.{}",
        slug,
        options.platform,
        options.format.extension()
    )
}
