//! # Tile Layout
//!
//! Turns a token sequence into positioned, typed render items. There are two
//! targets and one wrapping rule:
//!
//! - **Inline** display hands a flat, classified list to a container that
//!   wraps on its own. No coordinates are computed.
//! - **Export** places tiles on a fixed canvas. Tiles fill rows up to the
//!   platform's limit, the whole block is measured, then centered.
//!
//! Both export passes (measure, then place) walk the same [`RowCursor`], so
//! the bounding box and the positions can't disagree about where a row ends.
//!
//! Nothing in this module knows about colors. Items carry a [`TileKind`]
//! and the renderer asks a `ColorScheme` what that looks like.

mod rows;

pub use rows::{Placement, RowCursor};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Category;
use crate::error::Error;
use crate::tokenizer::MatchToken;

/// Horizontal advance of a space, in pixels (Tailwind `w-4`).
pub const SPACE_WIDTH: f64 = 16.0;
/// Gap between adjacent export tiles and between export rows.
pub const EXPORT_SPACING: f64 = 4.0;

/// Share targets, each with its own canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// 1200×675 landscape card.
    #[default]
    X,
    /// 1080×1080 square post.
    Instagram,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::X, Platform::Instagram];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::X => "x",
            Platform::Instagram => "instagram",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" | "twitter" => Ok(Platform::X),
            "instagram" | "ig" => Ok(Platform::Instagram),
            _ => Err(Error::UnknownPlatform(s.to_string())),
        }
    }
}

/// Every size the layout needs, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutProfile {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub tile_size: f64,
    pub spacing: f64,
    pub space_width: f64,
    pub max_tiles_per_row: usize,
}

impl LayoutProfile {
    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::X => Self {
                canvas_width: 1200.0,
                canvas_height: 675.0,
                tile_size: 80.0,
                spacing: EXPORT_SPACING,
                space_width: SPACE_WIDTH,
                max_tiles_per_row: 8,
            },
            Platform::Instagram => Self {
                canvas_width: 1080.0,
                canvas_height: 1080.0,
                tile_size: 100.0,
                spacing: EXPORT_SPACING,
                space_width: SPACE_WIDTH,
                max_tiles_per_row: 6,
            },
        }
    }

    /// On-screen tiles: 56px (`w-14`) with an 8px gap (`gap-2`). The
    /// container does the wrapping, so there is no canvas and no row limit.
    pub fn inline() -> Self {
        Self {
            canvas_width: 0.0,
            canvas_height: 0.0,
            tile_size: 56.0,
            spacing: 8.0,
            space_width: SPACE_WIDTH,
            max_tiles_per_row: usize::MAX,
        }
    }
}

/// Whether an item draws a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemKind {
    Element,
    Space,
}

/// What a tile stands for, for color lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TileKind {
    Real(Category),
    Placeholder,
}

impl TileKind {
    pub fn of(token: &MatchToken) -> Option<Self> {
        match token {
            MatchToken::Real(el) => Some(TileKind::Real(el.category)),
            MatchToken::Placeholder(_) => Some(TileKind::Placeholder),
            MatchToken::Space => None,
        }
    }
}

/// One token with its assigned place. Rebuilt on every layout pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderItem<'a> {
    /// Position in the token sequence.
    pub index: usize,
    pub kind: ItemKind,
    /// `None` for spaces.
    pub tile: Option<TileKind>,
    pub token: &'a MatchToken,
    pub row: usize,
    pub column: usize,
    /// Absolute top-left corner on the canvas (export only).
    pub x: f64,
    pub y: f64,
}

/// Bounding box of the tile block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockMetrics {
    pub total_width: f64,
    pub total_height: f64,
    pub rows: usize,
}

/// Everything the export renderer needs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportLayout<'a> {
    pub profile: LayoutProfile,
    pub metrics: BlockMetrics,
    /// Centering offset of the block on the canvas.
    pub start_x: f64,
    pub start_y: f64,
    pub items: Vec<RenderItem<'a>>,
}

impl<'a> ExportLayout<'a> {
    /// Items that draw a tile.
    pub fn tiles(&self) -> impl Iterator<Item = &RenderItem<'a>> {
        self.items.iter().filter(|item| item.kind == ItemKind::Element)
    }
}

fn classify(token: &MatchToken) -> (ItemKind, Option<TileKind>) {
    match TileKind::of(token) {
        Some(tile) => (ItemKind::Element, Some(tile)),
        None => (ItemKind::Space, None),
    }
}

/// Tiles for the on-screen display, laid out in one unbroken row.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineLayout<'a> {
    pub profile: LayoutProfile,
    /// Natural size of the row before the container wraps it.
    pub metrics: BlockMetrics,
    /// Offsets are relative to the row's left edge.
    pub items: Vec<RenderItem<'a>>,
}

/// Walk `tokens` with one cursor and offset every placement by the origin.
fn place<'a>(
    tokens: &'a [MatchToken],
    profile: &LayoutProfile,
    origin_x: f64,
    origin_y: f64,
) -> Vec<RenderItem<'a>> {
    let mut cursor = RowCursor::new(profile);
    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| {
            let (kind, tile) = classify(token);
            let at = match kind {
                ItemKind::Space => cursor.place_space(),
                ItemKind::Element => cursor.place_tile(),
            };
            RenderItem {
                index,
                kind,
                tile,
                token,
                row: at.row,
                column: at.column,
                x: origin_x + at.x,
                y: origin_y + at.y,
            }
        })
        .collect()
}

/// Classify and place tokens for the on-screen display under
/// [`LayoutProfile::inline`]. Order is preserved and nothing wraps.
pub fn layout_inline(tokens: &[MatchToken]) -> InlineLayout<'_> {
    let profile = LayoutProfile::inline();
    InlineLayout {
        profile,
        metrics: measure(tokens, &profile),
        items: place(tokens, &profile, 0.0, 0.0),
    }
}

/// Size of the tile block under `profile`, without placing anything.
pub fn measure(tokens: &[MatchToken], profile: &LayoutProfile) -> BlockMetrics {
    let mut cursor = RowCursor::new(profile);
    for token in tokens {
        if token.is_space() {
            cursor.place_space();
        } else {
            cursor.place_tile();
        }
    }
    BlockMetrics {
        total_width: cursor.total_width(),
        total_height: cursor.total_height(),
        rows: cursor.rows(),
    }
}

/// Measure, center, then place every token on the profile's canvas.
pub fn layout_export<'a>(tokens: &'a [MatchToken], profile: &LayoutProfile) -> ExportLayout<'a> {
    let metrics = measure(tokens, profile);
    let start_x = (profile.canvas_width - metrics.total_width) / 2.0;
    let start_y = (profile.canvas_height - metrics.total_height) / 2.0;

    let items = place(tokens, profile, start_x, start_y);

    tracing::debug!(
        tokens = tokens.len(),
        rows = metrics.rows,
        width = metrics.total_width,
        height = metrics.total_height,
        "export layout"
    );

    ExportLayout {
        profile: *profile,
        metrics,
        start_x,
        start_y,
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::tokenizer::{FirstCandidate, NameMatchResult, Tokenizer};

    fn spell(name: &str) -> NameMatchResult {
        let catalog = Catalog::builtin();
        Tokenizer::new(&catalog).match_name(name, &mut FirstCandidate)
    }

    #[test]
    fn test_profiles() {
        let x = LayoutProfile::for_platform(Platform::X);
        assert_eq!((x.canvas_width, x.canvas_height), (1200.0, 675.0));
        assert_eq!((x.tile_size, x.max_tiles_per_row), (80.0, 8));
        let ig = LayoutProfile::for_platform(Platform::Instagram);
        assert_eq!((ig.canvas_width, ig.canvas_height), (1080.0, 1080.0));
        assert_eq!((ig.tile_size, ig.max_tiles_per_row), (100.0, 6));
    }

    #[test]
    fn test_platform_parse() {
        assert_eq!("x".parse::<Platform>().unwrap(), Platform::X);
        assert_eq!("Instagram".parse::<Platform>().unwrap(), Platform::Instagram);
        assert!("myspace".parse::<Platform>().is_err());
    }

    #[test]
    fn test_inline_classification() {
        let r = spell("Fe A");
        let items = layout_inline(r.tokens()).items;
        let kinds: Vec<ItemKind> = items.iter().map(|i| i.kind).collect();
        assert_eq!(kinds, vec![ItemKind::Element, ItemKind::Space, ItemKind::Element]);
        assert_eq!(items[0].tile, Some(TileKind::Real(Category::Transition)));
        assert_eq!(items[1].tile, None);
        assert_eq!(items[2].tile, Some(TileKind::Placeholder));
        assert_eq!(items[2].index, 2);
    }

    #[test]
    fn test_inline_uses_screen_profile() {
        let r = spell("Al I");
        let inline = layout_inline(r.tokens());
        assert_eq!(inline.profile, LayoutProfile::inline());
        assert_eq!((inline.profile.tile_size, inline.profile.spacing), (56.0, 8.0));

        let xs: Vec<f64> = inline.items.iter().map(|i| i.x).collect();
        assert_eq!(xs, vec![0.0, 64.0, 80.0]);
        assert_eq!(inline.metrics.rows, 1);
        assert_eq!(inline.metrics.total_height, 56.0);
        assert_eq!(inline.metrics.total_width, 56.0 + 16.0 + 8.0 + 56.0);
    }

    #[test]
    fn test_inline_never_wraps() {
        let r = spell(&"H".repeat(30));
        let inline = layout_inline(r.tokens());
        assert_eq!(inline.metrics.rows, 1);
        assert!(inline.items.iter().all(|i| i.row == 0 && i.y == 0.0));
        assert_eq!(inline.items[29].column, 29);
    }

    #[test]
    fn test_nine_tiles_wrap_on_x() {
        let r = spell("HHHHHHHHH");
        assert_eq!(r.total_tokens(), 9);
        let profile = LayoutProfile::for_platform(Platform::X);
        let layout = layout_export(r.tokens(), &profile);

        assert_eq!(layout.metrics.rows, 2);
        assert!((layout.metrics.total_height - (2.0 * 80.0 + 4.0)).abs() < 1e-9);
        assert!((layout.metrics.total_width - (8.0 * 80.0 + 7.0 * 4.0)).abs() < 1e-9);
        assert!((layout.start_x - 266.0).abs() < 1e-9);
        assert!((layout.start_y - 255.5).abs() < 1e-9);

        let first_row = layout.tiles().filter(|t| t.row == 0).count();
        let second_row = layout.tiles().filter(|t| t.row == 1).count();
        assert_eq!((first_row, second_row), (8, 1));

        let last = &layout.items[8];
        assert!((last.x - 266.0).abs() < 1e-9);
        assert!((last.y - 339.5).abs() < 1e-9);
    }

    #[test]
    fn test_instagram_wraps_at_six() {
        let r = spell("HHHHHHH");
        let layout = layout_export(r.tokens(), &LayoutProfile::for_platform(Platform::Instagram));
        assert_eq!(layout.metrics.rows, 2);
        assert_eq!(layout.items[6].row, 1);
        assert!((layout.metrics.total_height - 204.0).abs() < 1e-9);
    }

    #[test]
    fn test_space_advances_without_tile() {
        let r = spell("H H");
        let profile = LayoutProfile::for_platform(Platform::X);
        let layout = layout_export(r.tokens(), &profile);
        assert_eq!(layout.tiles().count(), 2);
        assert!((layout.metrics.total_width - 180.0).abs() < 1e-9);
        let xs: Vec<f64> = layout.tiles().map(|t| t.x - layout.start_x).collect();
        assert!((xs[0]).abs() < 1e-9);
        assert!((xs[1] - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_layout_empty() {
        let layout = layout_export(&[], &LayoutProfile::for_platform(Platform::X));
        assert!(layout.items.is_empty());
        assert_eq!(layout.metrics.rows, 0);
        assert!((layout.start_x - 600.0).abs() < 1e-9);
        assert!((layout.start_y - 337.5).abs() < 1e-9);
    }

    #[test]
    fn test_tiles_stay_inside_canvas_for_short_names() {
        let r = spell("Marie Curie");
        for platform in Platform::ALL {
            let profile = LayoutProfile::for_platform(platform);
            let layout = layout_export(r.tokens(), &profile);
            for tile in layout.tiles() {
                assert!(tile.x >= 0.0 && tile.x + profile.tile_size <= profile.canvas_width);
                assert!(tile.y >= 0.0 && tile.y + profile.tile_size <= profile.canvas_height);
            }
        }
    }
}
