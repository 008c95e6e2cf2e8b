//! # Element Catalogs
//!
//! Two read-only tables: the 118 real elements and the placeholder letters
//! used when no element symbol fits. A [`Catalog`] is built once, validated,
//! and then only ever borrowed. Nothing in here is global or mutable.

mod elements;
mod placeholders;

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::style::Color;
use crate::tokenizer::RandomSource;

/// Symbol carried by the space marker.
pub const SPACE_SYMBOL: char = ' ';
/// Display name carried by the space marker.
pub const SPACE_NAME: &str = "Space";
/// Flat color of the space marker.
pub const SPACE_COLOR: Color = Color::WHITE;

/// The nine element families used for tile coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Alkali,
    Alkaline,
    Transition,
    PostTransition,
    Metalloid,
    Nonmetal,
    Noble,
    Lanthanide,
    Actinide,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Alkali,
        Category::Alkaline,
        Category::Transition,
        Category::PostTransition,
        Category::Metalloid,
        Category::Nonmetal,
        Category::Noble,
        Category::Lanthanide,
        Category::Actinide,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Alkali => "alkali",
            Category::Alkaline => "alkaline",
            Category::Transition => "transition",
            Category::PostTransition => "postTransition",
            Category::Metalloid => "metalloid",
            Category::Nonmetal => "nonmetal",
            Category::Noble => "noble",
            Category::Lanthanide => "lanthanide",
            Category::Actinide => "actinide",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A real periodic-table entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// One or two letters, first uppercase ("H", "Fe").
    pub symbol: String,
    pub name: String,
    pub atomic_number: u8,
    pub atomic_mass: f64,
    pub category: Category,
}

/// A made-up entry for a single letter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderElement {
    /// A single uppercase letter A-Z.
    pub symbol: char,
    pub name: String,
    #[serde(default = "default_placeholder_color")]
    pub color: Color,
}

fn default_placeholder_color() -> Color {
    Color::from_hex(placeholders::PLACEHOLDER_COLOR).unwrap_or(Color::WHITE)
}

/// Both lookup tables plus their indices.
#[derive(Debug, Clone)]
pub struct Catalog {
    real: Vec<Element>,
    placeholders: Vec<PlaceholderElement>,
    /// Uppercased symbol -> position in `real`.
    real_index: HashMap<String, usize>,
    /// Letter -> positions in `placeholders`, in table order.
    placeholder_index: HashMap<char, Vec<usize>>,
}

impl Catalog {
    /// The built-in periodic table and placeholder letters.
    pub fn builtin() -> Self {
        let real = elements::ELEMENTS
            .iter()
            .map(|&(symbol, name, atomic_number, atomic_mass, category)| Element {
                symbol: symbol.to_string(),
                name: name.to_string(),
                atomic_number,
                atomic_mass,
                category,
            })
            .collect();
        Self::from_parts(real, builtin_placeholders())
    }

    /// Build a catalog from caller-supplied tables, validating both.
    pub fn new(real: Vec<Element>, placeholders: Vec<PlaceholderElement>) -> Result<Self> {
        validate_real(&real)?;
        validate_placeholders(&placeholders)?;
        Ok(Self::from_parts(real, placeholders))
    }

    /// Same periodic table, different placeholder letters.
    pub fn with_placeholders(self, placeholders: Vec<PlaceholderElement>) -> Result<Self> {
        validate_placeholders(&placeholders)?;
        Ok(Self::from_parts(self.real, placeholders))
    }

    fn from_parts(real: Vec<Element>, placeholders: Vec<PlaceholderElement>) -> Self {
        let real_index = real
            .iter()
            .enumerate()
            .map(|(i, el)| (el.symbol.to_uppercase(), i))
            .collect();
        let mut placeholder_index: HashMap<char, Vec<usize>> = HashMap::new();
        for (i, p) in placeholders.iter().enumerate() {
            placeholder_index
                .entry(p.symbol.to_ascii_uppercase())
                .or_default()
                .push(i);
        }
        Self {
            real,
            placeholders,
            real_index,
            placeholder_index,
        }
    }

    /// Case-insensitive exact symbol lookup.
    pub fn lookup_real(&self, symbol: &str) -> Option<&Element> {
        let key = symbol.to_uppercase();
        self.real_index.get(&key).map(|&i| &self.real[i])
    }

    /// Every placeholder registered for `letter`, in table order.
    pub fn placeholder_candidates(&self, letter: char) -> Vec<&PlaceholderElement> {
        self.placeholder_index
            .get(&letter.to_ascii_uppercase())
            .map(|idx| idx.iter().map(|&i| &self.placeholders[i]).collect())
            .unwrap_or_default()
    }

    /// Case-insensitive placeholder lookup. When a letter has several
    /// candidates, `rng` picks one.
    pub fn lookup_fake(
        &self,
        letter: char,
        rng: &mut dyn RandomSource,
    ) -> Option<&PlaceholderElement> {
        let idx = self.placeholder_index.get(&letter.to_ascii_uppercase())?;
        let choice = match idx.len() {
            0 => return None,
            1 => 0,
            n => rng.pick(n).min(n - 1),
        };
        Some(&self.placeholders[idx[choice]])
    }

    pub fn all_real(&self) -> &[Element] {
        &self.real
    }

    pub fn all_fake(&self) -> &[PlaceholderElement] {
        &self.placeholders
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_placeholders() -> Vec<PlaceholderElement> {
    let color = default_placeholder_color();
    placeholders::PLACEHOLDERS
        .iter()
        .map(|&(symbol, name)| PlaceholderElement {
            symbol,
            name: name.to_string(),
            color,
        })
        .collect()
}

fn validate_real(real: &[Element]) -> Result<()> {
    let mut symbols = HashMap::new();
    let mut numbers = HashMap::new();
    for el in real {
        let mut chars = el.symbol.chars();
        let well_formed = match (chars.next(), chars.next(), chars.next()) {
            (Some(a), None, None) => a.is_ascii_uppercase(),
            (Some(a), Some(b), None) => a.is_ascii_uppercase() && b.is_ascii_alphabetic(),
            _ => false,
        };
        if !well_formed {
            return Err(Error::Catalog(format!(
                "element symbol '{}' must be one or two letters starting uppercase",
                el.symbol
            )));
        }
        if el.atomic_number == 0 {
            return Err(Error::Catalog(format!(
                "element '{}' has atomic number 0",
                el.symbol
            )));
        }
        if el.atomic_mass.is_nan() || el.atomic_mass <= 0.0 {
            return Err(Error::Catalog(format!(
                "element '{}' has non-positive atomic mass",
                el.symbol
            )));
        }
        if let Some(prev) = symbols.insert(el.symbol.to_uppercase(), &el.name) {
            return Err(Error::Catalog(format!(
                "symbol '{}' used by both {} and {}",
                el.symbol, prev, el.name
            )));
        }
        if let Some(prev) = numbers.insert(el.atomic_number, &el.name) {
            return Err(Error::Catalog(format!(
                "atomic number {} used by both {} and {}",
                el.atomic_number, prev, el.name
            )));
        }
    }
    Ok(())
}

fn validate_placeholders(placeholders: &[PlaceholderElement]) -> Result<()> {
    for p in placeholders {
        if !p.symbol.is_ascii_uppercase() {
            return Err(Error::Catalog(format!(
                "placeholder '{}' must use a single letter A-Z, got '{}'",
                p.name, p.symbol
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::FirstCandidate;

    struct Last;

    impl RandomSource for Last {
        fn pick(&mut self, len: usize) -> usize {
            len - 1
        }
    }

    #[test]
    fn test_builtin_has_all_118() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.all_real().len(), 118);
        for (i, el) in catalog.all_real().iter().enumerate() {
            assert_eq!(el.atomic_number as usize, i + 1);
        }
        assert!(Catalog::new(catalog.all_real().to_vec(), catalog.all_fake().to_vec()).is_ok());
    }

    #[test]
    fn test_every_category_is_populated() {
        let catalog = Catalog::builtin();
        for category in Category::ALL {
            assert!(
                catalog.all_real().iter().any(|el| el.category == category),
                "no element in {:?}",
                category
            );
        }
    }

    #[test]
    fn test_lookup_real_case_insensitive() {
        let catalog = Catalog::builtin();
        let fe = catalog.lookup_real("fE").unwrap();
        assert_eq!(fe.name, "Iron");
        assert_eq!(fe.atomic_number, 26);
        assert_eq!(fe.category, Category::Transition);
        assert!(catalog.lookup_real("Xx").is_none());
        assert!(catalog.lookup_real("FEC").is_none());
    }

    #[test]
    fn test_lookup_fake_picks_among_duplicates() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.placeholder_candidates('a').len(), 2);
        assert_eq!(catalog.lookup_fake('a', &mut FirstCandidate).unwrap().name, "Arium");
        assert_eq!(catalog.lookup_fake('A', &mut Last).unwrap().name, "Aurorium");
        // Single-candidate letters never consult the random source.
        assert_eq!(catalog.lookup_fake('d', &mut Last).unwrap().name, "Dium");
    }

    #[test]
    fn test_lookup_fake_miss() {
        let catalog = Catalog::builtin();
        // B, C, F, H are single-letter elements and have no placeholder.
        assert!(catalog.lookup_fake('B', &mut FirstCandidate).is_none());
        assert!(catalog.lookup_fake('3', &mut FirstCandidate).is_none());
    }

    #[test]
    fn test_duplicate_symbol_rejected() {
        let mut real = Catalog::builtin().all_real().to_vec();
        real[1].symbol = "h".to_string();
        let err = Catalog::new(real, vec![]).unwrap_err();
        assert!(matches!(err, Error::Catalog(_)));
    }

    #[test]
    fn test_bad_symbol_shapes_rejected() {
        let mut real = Catalog::builtin().all_real().to_vec();
        real.truncate(1);
        real[0].symbol = "Uue".to_string();
        assert!(Catalog::new(real.clone(), vec![]).is_err());
        real[0].symbol = "h".to_string();
        assert!(Catalog::new(real, vec![]).is_err());
    }

    #[test]
    fn test_placeholder_must_be_letter() {
        let bad = vec![PlaceholderElement {
            symbol: '7',
            name: "Sevenium".to_string(),
            color: Color::WHITE,
        }];
        assert!(Catalog::builtin().with_placeholders(bad).is_err());
    }

    #[test]
    fn test_placeholder_color_defaults_from_json() {
        let p: PlaceholderElement =
            serde_json::from_str(r#"{ "symbol": "Q", "name": "Quasarium" }"#).unwrap();
        assert_eq!(p.color.to_hex(), "#e5e7eb");
    }
}
