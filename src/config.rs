//! JSON configuration for the CLI and library callers.
//!
//! Every field is optional:
//!
//! ```json
//! {
//!   "platform": "instagram",
//!   "colorScheme": { "background": "#ffffff" },
//!   "placeholders": [{ "symbol": "Q", "name": "Quantium" }],
//!   "fontPath": "fonts/Inter-Bold.ttf",
//!   "branding": "",
//!   "format": "svg",
//!   "seed": 42
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, PlaceholderElement};
use crate::error::{Error, Result};
use crate::font::FontFace;
use crate::layout::Platform;
use crate::render::{ExportFormat, DEFAULT_BRANDING};
use crate::style::ColorScheme;
use crate::tokenizer::{RandomSource, RngSource};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub platform: Platform,
    pub color_scheme: ColorScheme,
    /// Replaces the built-in placeholder table when present.
    pub placeholders: Option<Vec<PlaceholderElement>>,
    pub font_path: Option<PathBuf>,
    /// `None` uses the default branding; an empty string turns it off.
    pub branding: Option<String>,
    pub format: ExportFormat,
    /// Fixed seed for placeholder selection. Unset means fresh entropy.
    pub seed: Option<u64>,
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), platform = %config.platform, "loaded config");
        Ok(config)
    }

    /// The built-in catalog with any placeholder override applied.
    pub fn catalog(&self) -> Result<Catalog> {
        let catalog = Catalog::builtin();
        match &self.placeholders {
            Some(table) => catalog.with_placeholders(table.clone()),
            None => Ok(catalog),
        }
    }

    pub fn random_source(&self) -> Box<dyn RandomSource> {
        match self.seed {
            Some(seed) => Box::new(RngSource::seeded(seed)),
            None => Box::new(RngSource::from_entropy()),
        }
    }

    pub fn load_font(&self) -> Result<Option<FontFace>> {
        self.font_path.as_ref().map(FontFace::load).transpose()
    }

    pub fn branding(&self) -> &str {
        self.branding.as_deref().unwrap_or(DEFAULT_BRANDING)
    }

    /// Check the parts that only fail once used, so a bad file is reported
    /// before any work starts.
    pub fn validate(&self) -> Result<()> {
        self.catalog()?;
        if let Some(path) = &self.font_path {
            if !path.exists() {
                return Err(Error::Font(format!(
                    "Font file '{}' does not exist",
                    path.display()
                )));
            }
        }
        Ok(())
    }
}
