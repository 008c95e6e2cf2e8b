//! Structured error types for periodic-names.
//!
//! Matching and layout never fail: unmatched characters are dropped and
//! catalog misses are ordinary control flow. Errors only come from loading
//! configuration, catalogs, and fonts, and from the export step.

use thiserror::Error;

/// The unified error type returned by all fallible public functions.
#[derive(Debug, Error)]
pub enum Error {
    /// JSON input (config, color scheme, placeholder table) failed to parse.
    #[error("Failed to parse JSON: {source}{}", format_hint(.hint))]
    Parse {
        source: serde_json::Error,
        hint: String,
    },
    /// A catalog table broke one of its invariants.
    #[error("Catalog error: {0}")]
    Catalog(String),
    /// A font could not be read or parsed.
    #[error("Font error: {0}")]
    Font(String),
    /// Encoding the rendered bitmap failed.
    #[error("Export error: {0}")]
    Export(#[from] image::ImageError),
    /// The scene's SVG could not be parsed or painted into a bitmap.
    #[error("Render error: {0}")]
    Render(String),
    /// Writing the SVG document failed.
    #[error("SVG error: {0}")]
    Svg(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A platform tag other than `x` or `instagram`.
    #[error("Unknown platform '{0}' (expected 'x' or 'instagram')")]
    UnknownPlatform(String),
}

pub type Result<T> = std::result::Result<T, Error>;

fn format_hint(hint: &str) -> String {
    if hint.is_empty() {
        String::new()
    } else {
        format!("\n  Hint: {}", hint)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "Check for trailing commas, missing quotes, or unescaped characters.".to_string()
            }
            serde_json::error::Category::Data => {
                "The JSON is valid but doesn't match the expected schema. Check field names and types.".to_string()
            }
            serde_json::error::Category::Eof => {
                "Unexpected end of input. Is the JSON truncated?".to_string()
            }
            serde_json::error::Category::Io => String::new(),
        };
        Error::Parse { source: e, hint }
    }
}
