//! # Color Schemes
//!
//! Colors are presentation policy. The layout engine only says which
//! category (or placeholder status) a tile has; the scheme decides what
//! that looks like. Schemes are plain values so a renderer can be re-skinned
//! by passing a different one, or by loading one from a config file.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::catalog::Category;
use crate::error::{Error, Result};
use crate::layout::TileKind;

/// An RGBA color with components in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Build from 8-bit channels plus an alpha in 0.0..=1.0, the way CSS
    /// `rgba()` literals are written.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Parse `#rgb`, `#rrggbb`, or `#rrggbbaa`. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.is_ascii() {
            return Err(invalid_hex(hex));
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid_hex(hex));
        match digits.len() {
            3 => {
                let mut c = [0u8; 3];
                for (i, slot) in c.iter_mut().enumerate() {
                    let v = channel(&digits[i..i + 1])?;
                    *slot = v * 17;
                }
                Ok(Self::from_rgba8(c[0], c[1], c[2], 1.0))
            }
            6 | 8 => {
                let r = channel(&digits[0..2])?;
                let g = channel(&digits[2..4])?;
                let b = channel(&digits[4..6])?;
                let a = if digits.len() == 8 {
                    channel(&digits[6..8])? as f64 / 255.0
                } else {
                    1.0
                };
                Ok(Self::from_rgba8(r, g, b, a))
            }
            _ => Err(invalid_hex(hex)),
        }
    }

    /// `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }

    /// `#rrggbb` ignoring alpha. SVG wants opacity as a separate attribute.
    pub fn to_rgb_hex(&self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

fn invalid_hex(hex: &str) -> Error {
    Error::Catalog(format!("invalid hex color '{}'", hex))
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

fn hex(s: &str) -> Color {
    // Only used for the literal palette below.
    Color::from_hex(s).unwrap_or(Color::BLACK)
}

/// One color per element category, plus one for placeholder tiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryColors {
    pub alkali: Color,
    pub alkaline: Color,
    pub transition: Color,
    pub post_transition: Color,
    pub metalloid: Color,
    pub nonmetal: Color,
    pub noble: Color,
    pub lanthanide: Color,
    pub actinide: Color,
    pub fake: Color,
}

impl CategoryColors {
    pub fn get(&self, category: Category) -> Color {
        match category {
            Category::Alkali => self.alkali,
            Category::Alkaline => self.alkaline,
            Category::Transition => self.transition,
            Category::PostTransition => self.post_transition,
            Category::Metalloid => self.metalloid,
            Category::Nonmetal => self.nonmetal,
            Category::Noble => self.noble,
            Category::Lanthanide => self.lanthanide,
            Category::Actinide => self.actinide,
        }
    }
}

/// A complete palette: canvas background, tile fills, tile borders.
///
/// Deserializing fills every missing field from [`ColorScheme::default`],
/// so a config file only needs to list what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorScheme {
    pub name: String,
    pub background: Color,
    pub categories: CategoryColors,
    pub borders: CategoryColors,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            background: hex("#f9fafb"),
            categories: CategoryColors {
                alkali: hex("#ef4444"),
                alkaline: hex("#f97316"),
                transition: hex("#3b82f6"),
                post_transition: hex("#10b981"),
                metalloid: hex("#8b5cf6"),
                nonmetal: hex("#06b6d4"),
                noble: hex("#ec4899"),
                lanthanide: hex("#6366f1"),
                actinide: hex("#64748b"),
                fake: hex("#fbbf24"),
            },
            borders: CategoryColors {
                alkali: hex("#dc2626"),
                alkaline: hex("#ea580c"),
                transition: hex("#2563eb"),
                post_transition: hex("#059669"),
                metalloid: hex("#7c3aed"),
                nonmetal: hex("#0891b2"),
                noble: hex("#db2777"),
                lanthanide: hex("#4f46e5"),
                actinide: hex("#475569"),
                fake: hex("#f59e0b"),
            },
        }
    }
}

/// How a single tile is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePaint {
    pub fill: Color,
    pub border: Color,
    /// Placeholder tiles get a dashed border so they read as "not real".
    pub dashed_border: bool,
}

impl ColorScheme {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn tile_paint(&self, kind: TileKind) -> TilePaint {
        match kind {
            TileKind::Real(category) => TilePaint {
                fill: self.categories.get(category),
                border: self.borders.get(category),
                dashed_border: false,
            },
            TileKind::Placeholder => TilePaint {
                fill: self.categories.fake,
                border: self.borders.fake,
                dashed_border: true,
            },
        }
    }
}
