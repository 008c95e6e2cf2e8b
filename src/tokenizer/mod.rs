//! # Name Tokenizer
//!
//! Spells a name with element symbols. The walk is greedy and never
//! backtracks:
//!
//! 1. Uppercase the input.
//! 2. A space becomes a [`MatchToken::Space`].
//! 3. Otherwise try the next 3, 2, then 1 characters against the periodic
//!    table. The first hit wins and consumes that many characters.
//! 4. No element? Try a placeholder for the single next letter.
//! 5. Still nothing (digits, punctuation, non-Latin letters)? Drop the
//!    character without a trace.
//!
//! No symbol is three letters long, so step 3 never matches at length 3.
//! The three-letter lookup is kept so the trial order stays 3, 2, 1.
//!
//! Choices are never revisited: "NBA" spells Nb + placeholder A, not N + Ba.

mod random;

pub use random::{FirstCandidate, RandomSource, RngSource};

use serde::Serialize;

use crate::catalog::{Catalog, Element, PlaceholderElement, SPACE_COLOR, SPACE_NAME, SPACE_SYMBOL};
use crate::style::Color;

/// Longest prefix probed against the periodic table.
const MAX_PROBE_LEN: usize = 3;

/// One unit of a spelled name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MatchToken {
    Real(Element),
    Placeholder(PlaceholderElement),
    Space,
}

impl MatchToken {
    pub fn symbol(&self) -> String {
        match self {
            MatchToken::Real(el) => el.symbol.clone(),
            MatchToken::Placeholder(p) => p.symbol.to_string(),
            MatchToken::Space => SPACE_SYMBOL.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            MatchToken::Real(el) => &el.name,
            MatchToken::Placeholder(p) => &p.name,
            MatchToken::Space => SPACE_NAME,
        }
    }

    pub fn is_real(&self) -> bool {
        matches!(self, MatchToken::Real(_))
    }

    pub fn is_space(&self) -> bool {
        matches!(self, MatchToken::Space)
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            MatchToken::Real(el) => Some(el),
            _ => None,
        }
    }
    /// Flat color carried by the token itself. Real elements have none;
    /// their tiles take the scheme's category color instead.
    pub fn color(&self) -> Option<Color> {
        match self {
            MatchToken::Real(_) => None,
            MatchToken::Placeholder(p) => Some(p.color),
            MatchToken::Space => Some(SPACE_COLOR),
        }
    }
}

/// The spelled name plus its counts.
///
/// Fields are private so the counts can't drift from the token list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameMatchResult {
    original_name: String,
    tokens: Vec<MatchToken>,
    total_tokens: usize,
    real_elements_count: usize,
}

impl NameMatchResult {
    pub fn new(original_name: impl Into<String>, tokens: Vec<MatchToken>) -> Self {
        let real_elements_count = tokens.iter().filter(|t| t.is_real()).count();
        Self {
            original_name: original_name.into(),
            total_tokens: tokens.len(),
            real_elements_count,
            tokens,
        }
    }

    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    pub fn tokens(&self) -> &[MatchToken] {
        &self.tokens
    }

    /// Every token, spaces included.
    pub fn total_tokens(&self) -> usize {
        self.total_tokens
    }

    pub fn real_elements_count(&self) -> usize {
        self.real_elements_count
    }

    pub fn placeholder_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| matches!(t, MatchToken::Placeholder(_)))
            .count()
    }

    /// Share of tiles (spaces excluded) that are real elements.
    pub fn coverage(&self) -> f64 {
        let tiles = self.tokens.iter().filter(|t| !t.is_space()).count();
        if tiles == 0 {
            0.0
        } else {
            self.real_elements_count as f64 / tiles as f64
        }
    }

    /// Symbols joined without separators, spaces kept: "Fe Co".
    pub fn spelled(&self) -> String {
        self.tokens.iter().map(|t| t.symbol()).collect()
    }
}

/// Spells names against a borrowed catalog.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'c> {
    catalog: &'c Catalog,
}

impl<'c> Tokenizer<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Tokenize `name`. Never fails; unmatched characters are dropped.
    pub fn match_name(&self, name: &str, rng: &mut dyn RandomSource) -> NameMatchResult {
        let upper: Vec<char> = name.to_uppercase().chars().collect();
        let mut tokens = Vec::with_capacity(upper.len());
        let mut dropped = 0usize;
        let mut pos = 0;
        let mut candidate = String::with_capacity(MAX_PROBE_LEN * 4);

        while pos < upper.len() {
            let rest = &upper[pos..];

            if rest[0] == SPACE_SYMBOL {
                tokens.push(MatchToken::Space);
                pos += 1;
                continue;
            }

            let longest = rest.len().min(MAX_PROBE_LEN);
            let real = (1..=longest).rev().find_map(|len| {
                candidate.clear();
                candidate.extend(&rest[..len]);
                self.catalog.lookup_real(&candidate).map(|el| (el, len))
            });
            if let Some((el, len)) = real {
                tokens.push(MatchToken::Real(el.clone()));
                pos += len;
                continue;
            }

            let ch = rest[0];
            if let Some(p) = self.catalog.lookup_fake(ch, rng) {
                tokens.push(MatchToken::Placeholder(p.clone()));
            } else {
                tracing::debug!(ch = %ch, offset = pos, "dropping unmatched character");
                dropped += 1;
            }
            pos += 1;
        }

        let result = NameMatchResult::new(name, tokens);
        tracing::trace!(
            name,
            tokens = result.total_tokens(),
            real = result.real_elements_count(),
            dropped,
            "matched name"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spell(name: &str) -> NameMatchResult {
        let catalog = Catalog::builtin();
        Tokenizer::new(&catalog).match_name(name, &mut FirstCandidate)
    }

    fn symbols(result: &NameMatchResult) -> Vec<String> {
        result.tokens().iter().map(|t| t.symbol()).collect()
    }

    #[test]
    fn test_real_symbols_only() {
        let r = spell("FeCoNi");
        assert_eq!(symbols(&r), vec!["Fe", "Co", "Ni"]);
        assert_eq!(r.real_elements_count(), 3);
        assert_eq!(r.total_tokens(), 3);
        assert_eq!(r.spelled(), "FeCoNi");
    }

    #[test]
    fn test_longest_match_wins() {
        let r = spell("CO");
        assert_eq!(symbols(&r), vec!["Co"]);
        assert_eq!(r.tokens()[0].name(), "Cobalt");
    }

    #[test]
    fn test_greedy_does_not_backtrack() {
        // Nb is taken first, which strands the A.
        let r = spell("nba");
        assert_eq!(symbols(&r), vec!["Nb", "A"]);
        assert_eq!(r.real_elements_count(), 1);
        assert_eq!(r.placeholder_count(), 1);
    }

    #[test]
    fn test_token_colors() {
        let r = spell("Fe A");
        let colors: Vec<Option<String>> =
            r.tokens().iter().map(|t| t.color().map(|c| c.to_hex())).collect();
        assert_eq!(
            colors,
            vec![None, Some("#ffffff".to_string()), Some("#e5e7eb".to_string())]
        );
    }

    #[test]
    fn test_space_preserved_in_place() {
        let r = spell("AL I");
        assert_eq!(symbols(&r), vec!["Al", " ", "I"]);
        assert!(r.tokens()[1].is_space());
        assert_eq!(r.tokens().iter().filter(|t| t.is_space()).count(), 1);
    }

    #[test]
    fn test_digits_dropped() {
        let r = spell("H3e");
        assert_eq!(symbols(&r), vec!["H", "E"]);
        assert!(r.tokens()[0].is_real());
        assert!(matches!(r.tokens()[1], MatchToken::Placeholder(ref p) if p.name == "Elium"));
        assert_eq!(r.total_tokens(), 2);
    }

    #[test]
    fn test_empty_input() {
        let r = spell("");
        assert!(r.tokens().is_empty());
        assert_eq!(r.total_tokens(), 0);
        assert_eq!(r.real_elements_count(), 0);
        assert_eq!(r.coverage(), 0.0);
    }

    #[test]
    fn test_only_unmatchable() {
        let r = spell("123 !?");
        assert_eq!(symbols(&r), vec![" "]);
        assert_eq!(r.real_elements_count(), 0);
    }

    #[test]
    fn test_non_latin_dropped_without_splitting() {
        let r = spell("Ño");
        // 'Ñ' has no symbol or placeholder; 'O' is oxygen.
        assert_eq!(symbols(&r), vec!["O"]);
    }

    #[test]
    fn test_original_name_kept_verbatim() {
        let r = spell("Marie Curie");
        assert_eq!(r.original_name(), "Marie Curie");
    }

    #[test]
    fn test_placeholder_choice_follows_source() {
        struct Script(Vec<usize>);
        impl RandomSource for Script {
            fn pick(&mut self, _len: usize) -> usize {
                self.0.remove(0)
            }
        }
        let catalog = Catalog::builtin();
        let tokenizer = Tokenizer::new(&catalog);
        let r = tokenizer.match_name("zz", &mut Script(vec![1, 0]));
        let names: Vec<&str> = r.tokens().iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["Zephyrium", "Zium"]);
    }

    #[test]
    fn test_real_only_input_is_repeatable() {
        let catalog = Catalog::builtin();
        let tokenizer = Tokenizer::new(&catalog);
        let a = tokenizer.match_name("Bohr", &mut RngSource::seeded(1));
        let b = tokenizer.match_name("Bohr", &mut RngSource::seeded(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_coverage() {
        let r = spell("Fe A");
        assert_eq!(r.real_elements_count(), 1);
        assert!((r.coverage() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(spell("He ")).unwrap();
        assert_eq!(value["originalName"], "He ");
        assert_eq!(value["totalTokens"], 2);
        assert_eq!(value["realElementsCount"], 1);
        assert_eq!(value["tokens"][0]["kind"], "real");
        assert_eq!(value["tokens"][0]["atomicNumber"], 2);
        assert_eq!(value["tokens"][1]["kind"], "space");
    }
}
