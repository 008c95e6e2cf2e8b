//! # Fonts
//!
//! Text measurement for name truncation. A loaded [`FontFace`] also hands
//! its bytes to the raster backend so PNG labels use the same face that
//! measured them. Without one, widths are approximated and the rasterizer
//! falls back to system fonts.

use std::collections::HashMap;
use std::path::Path;

use ttf_parser::{name_id, Face};

use crate::error::{Error, Result};

/// Anything that can tell how wide a run of text is.
pub trait TextMeasure {
    /// Advance width of `text` at `size` pixels.
    fn text_width(&self, text: &str, size: f64) -> f64;
}

/// Width estimate for a generic sans-serif, used when no font is loaded.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproxMetrics;

impl TextMeasure for ApproxMetrics {
    fn text_width(&self, text: &str, size: f64) -> f64 {
        text.chars()
            .map(|ch| match ch {
                ' ' => 0.28,
                'i' | 'l' | 'I' | 'j' | '.' | ',' | '\'' => 0.28,
                'm' | 'w' | 'M' | 'W' => 0.85,
                c if c.is_uppercase() => 0.68,
                _ => 0.56,
            })
            .sum::<f64>()
            * size
    }
}

/// A TrueType/OpenType face with its advance widths pre-read.
#[derive(Debug, Clone)]
pub struct FontFace {
    data: Vec<u8>,
    family: Option<String>,
    units_per_em: u16,
    advance_widths: HashMap<char, u16>,
    default_advance: u16,
}

impl FontFace {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)
            .map_err(|e| Error::Font(format!("Failed to read font '{}': {}", path.display(), e)))?;
        Self::from_bytes(data)
    }

    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let face = Face::parse(&data, 0)
            .map_err(|e| Error::Font(format!("Failed to parse font: {}", e)))?;
        let units_per_em = face.units_per_em();
        let family = face
            .names()
            .into_iter()
            .filter(|name| name.name_id == name_id::FAMILY && name.is_unicode())
            .find_map(|name| name.to_string());

        let mut advance_widths = HashMap::new();
        let mut default_advance = 0u16;
        for code in 32u32..=0xFFFF {
            if let Some(ch) = char::from_u32(code) {
                if let Some(glyph_id) = face.glyph_index(ch) {
                    let advance = face.glyph_hor_advance(glyph_id).unwrap_or(0);
                    advance_widths.insert(ch, advance);
                    if ch == ' ' {
                        default_advance = advance;
                    }
                }
            }
        }
        if default_advance == 0 {
            default_advance = units_per_em / 2;
        }

        tracing::debug!(
            family = family.as_deref().unwrap_or("?"),
            glyphs = advance_widths.len(),
            units_per_em,
            "loaded font"
        );

        Ok(Self {
            data,
            family,
            units_per_em,
            advance_widths,
            default_advance,
        })
    }

    fn scale(&self, size: f64) -> f64 {
        size / self.units_per_em.max(1) as f64
    }

    pub fn char_advance(&self, ch: char, size: f64) -> f64 {
        let w = self
            .advance_widths
            .get(&ch)
            .copied()
            .unwrap_or(self.default_advance);
        w as f64 * self.scale(size)
    }

    /// Raw font file bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Family name from the `name` table, if it has a Unicode entry.
    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }
}

impl TextMeasure for FontFace {
    fn text_width(&self, text: &str, size: f64) -> f64 {
        text.chars().map(|ch| self.char_advance(ch, size)).sum()
    }
}

/// Fit `name` into `max_width`. Characters come off the end until it fits;
/// if any were removed, the last survivor becomes an ellipsis.
pub fn truncate_to_width(
    name: &str,
    max_width: f64,
    size: f64,
    measure: &dyn TextMeasure,
) -> String {
    let mut chars: Vec<char> = name.chars().collect();
    let full_len = chars.len();
    while !chars.is_empty() && measure.text_width(&chars.iter().collect::<String>(), size) > max_width
    {
        chars.pop();
    }
    if chars.len() < full_len {
        chars.pop();
        chars.push('…');
    }
    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every character is exactly `size` wide.
    struct Mono;

    impl TextMeasure for Mono {
        fn text_width(&self, text: &str, size: f64) -> f64 {
            text.chars().count() as f64 * size
        }
    }

    #[test]
    fn test_truncate_fits_untouched() {
        assert_eq!(truncate_to_width("Iron", 40.0, 10.0, &Mono), "Iron");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        // Fits 6 of 12 characters; the sixth becomes the ellipsis.
        assert_eq!(truncate_to_width("Praseodymium", 60.0, 10.0, &Mono), "Prase…");
    }

    #[test]
    fn test_truncate_when_nothing_fits() {
        assert_eq!(truncate_to_width("Gold", 5.0, 10.0, &Mono), "…");
    }

    #[test]
    fn test_approx_metrics_scale_with_size() {
        let a = ApproxMetrics.text_width("Hydrogen", 10.0);
        let b = ApproxMetrics.text_width("Hydrogen", 20.0);
        assert!(a > 0.0);
        assert!((b - 2.0 * a).abs() < 1e-9);
    }

    #[test]
    fn test_bad_font_bytes() {
        let err = FontFace::from_bytes(vec![0, 1, 2, 3]).unwrap_err();
        assert!(matches!(err, Error::Font(_)));
    }
}
