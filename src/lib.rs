//! # Periodic Names
//!
//! Spells a name with periodic-table element symbols and turns the result
//! into a shareable image.
//!
//! Letters that no element covers still get a tile: a made-up placeholder
//! element for that letter, drawn with a dashed border so it reads as not
//! quite real. Characters with neither (digits, punctuation) are dropped.
//!
//! ## Architecture
//!
//! ```text
//! Name (string)
//!       ↓
//!   [tokenizer]  greedy 3/2/1 lookup against the [catalog]
//!       ↓
//!   NameMatchResult
//!       ↓
//!   [layout]     inline row, or wrapped + centered export canvas
//!       ↓
//!   [render]     scene of draw commands, painted with a [style] scheme
//!       ↓
//!   PNG bytes / SVG document
//! ```
//!
//! Nothing here holds global state. A [`Catalog`] is built once and lent to
//! a [`Tokenizer`]; randomness comes in through a [`RandomSource`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod font;
pub mod layout;
pub mod render;
pub mod style;
pub mod tokenizer;

#[cfg(feature = "wasm")]
pub mod wasm;

use std::sync::Once;

pub use catalog::{Catalog, Category, Element, PlaceholderElement};
pub use config::Config;
pub use error::{Error, Result};
pub use layout::{LayoutProfile, Platform};
pub use render::{ExportFormat, ExportOptions};
pub use style::{Color, ColorScheme};
pub use tokenizer::{MatchToken, NameMatchResult, RandomSource, RngSource, Tokenizer};

/// Spell `name` with the built-in catalog, picking placeholder variants at
/// random.
pub fn match_name(name: &str) -> NameMatchResult {
    let catalog = Catalog::builtin();
    Tokenizer::new(&catalog).match_name(name, &mut RngSource::from_entropy())
}

/// Spell `name` and render it as a PNG for `platform` with the default
/// palette and branding. Labels use `font` when given, else the host's
/// sans-serif face.
pub fn render_png(name: &str, platform: Platform, font: Option<&font::FontFace>) -> Result<Vec<u8>> {
    let scheme = ColorScheme::default();
    let mut options = ExportOptions::new(platform, &scheme);
    options.font = font;
    render::export(&match_name(name), &options)
}

/// Spell `name` and render it as an SVG document for `platform`.
pub fn render_svg(name: &str, platform: Platform) -> Result<String> {
    let scheme = ColorScheme::default();
    let options = ExportOptions::new(platform, &scheme);
    let scene = render::build_scene(
        &match_name(name),
        options.platform,
        options.scheme,
        &font::ApproxMetrics,
        options.branding,
    );
    render::svg::write_svg(&scene)
}

static TRACING_INIT: Once = Once::new();

/// Install a stderr subscriber for the crate's `tracing` output.
///
/// Does nothing unless `RUST_LOG` is set (`RUST_LOG=periodic_names=debug`).
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
