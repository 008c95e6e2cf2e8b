//! Property-based tests for matching and layout.
//!
//! Generated names check that:
//! 1. Counts always agree with the token list
//! 2. Spaces map one-to-one and split the name into independent words
//! 3. Runs of two-letter symbols spell back exactly
//! 4. Export rows wrap at the platform limit

use periodic_names::catalog::Catalog;
use periodic_names::layout::{layout_export, measure, LayoutProfile};
use periodic_names::tokenizer::{FirstCandidate, RngSource};
use periodic_names::{MatchToken, NameMatchResult, Platform, Tokenizer};
use proptest::prelude::*;

fn spell(catalog: &Catalog, name: &str) -> NameMatchResult {
    Tokenizer::new(catalog).match_name(name, &mut FirstCandidate)
}

/// Two-letter symbols only. With no three-letter symbols in the table, a
/// run of these is always consumed pair by pair.
fn two_letter_symbols() -> Vec<String> {
    Catalog::builtin()
        .all_real()
        .iter()
        .filter(|el| el.symbol.len() == 2)
        .map(|el| el.symbol.clone())
        .collect()
}

fn symbol_run_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::sample::select(two_letter_symbols()), 1..12)
}

proptest! {
    #[test]
    fn counts_match_tokens(name in "\\PC{0,40}", seed in any::<u64>()) {
        let catalog = Catalog::builtin();
        let r = Tokenizer::new(&catalog).match_name(&name, &mut RngSource::seeded(seed));
        prop_assert_eq!(r.total_tokens(), r.tokens().len());
        prop_assert_eq!(
            r.real_elements_count(),
            r.tokens().iter().filter(|t| t.is_real()).count()
        );
        prop_assert!(r.tokens().len() <= name.to_uppercase().chars().count());
    }

    #[test]
    fn spaces_split_words(name in "[A-Za-z0-9 ]{0,30}") {
        let catalog = Catalog::builtin();
        let whole = spell(&catalog, &name);

        let spaces = whole.tokens().iter().filter(|t| t.is_space()).count();
        prop_assert_eq!(spaces, name.matches(' ').count());

        let mut joined: Vec<MatchToken> = Vec::new();
        for (i, word) in name.split(' ').enumerate() {
            if i > 0 {
                joined.push(MatchToken::Space);
            }
            joined.extend(spell(&catalog, word).tokens().iter().cloned());
        }
        prop_assert_eq!(whole.tokens(), &joined[..]);
    }

    #[test]
    fn symbol_runs_spell_back(run in symbol_run_strategy(), lower in any::<bool>()) {
        let catalog = Catalog::builtin();
        let mut name: String = run.concat();
        if lower {
            name = name.to_lowercase();
        }
        let r = spell(&catalog, &name);
        let symbols: Vec<String> = r.tokens().iter().map(|t| t.symbol()).collect();
        prop_assert_eq!(&symbols, &run);
        prop_assert_eq!(r.real_elements_count(), r.total_tokens());

        // No placeholder is involved, so any random source gives the same answer.
        let again = Tokenizer::new(&catalog).match_name(&name, &mut RngSource::seeded(99));
        prop_assert_eq!(r, again);
    }

    #[test]
    fn rows_wrap_at_limit(tiles in 1usize..40, instagram in any::<bool>()) {
        let catalog = Catalog::builtin();
        let platform = if instagram { Platform::Instagram } else { Platform::X };
        let profile = LayoutProfile::for_platform(platform);
        let r = spell(&catalog, &"H".repeat(tiles));

        let per_row = profile.max_tiles_per_row;
        let rows = tiles.div_ceil(per_row);
        let widest = tiles.min(per_row) as f64;
        let metrics = measure(r.tokens(), &profile);
        prop_assert_eq!(metrics.rows, rows);
        prop_assert_eq!(
            metrics.total_height,
            rows as f64 * profile.tile_size + (rows - 1) as f64 * profile.spacing
        );
        prop_assert_eq!(
            metrics.total_width,
            widest * profile.tile_size + (widest - 1.0) * profile.spacing
        );

        let layout = layout_export(r.tokens(), &profile);
        for (i, item) in layout.items.iter().enumerate() {
            prop_assert_eq!(item.row, i / per_row);
            prop_assert_eq!(item.column, i % per_row);
        }
    }
}
