//! Source catalog for Playdeck
//!
//! The catalog is an ordered sequence of selectable media sources supplied
//! by the hosting environment. It is read once, at selector-population
//! time, and never mutated afterwards.

use crate::utils::error::{IntoPlayerError, PlayerError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A selectable media source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaSource {
    /// Display title shown in the source selector
    pub title: String,

    /// Source URI handed to the media element
    #[serde(alias = "source")]
    pub uri: String,
}

/// Shape of a TOML catalog file
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(alias = "source")]
    sources: Vec<MediaSource>,
}

/// Built-in catalog used when the hosting environment supplies none
static DEMO_SOURCES: Lazy<Vec<MediaSource>> = Lazy::new(|| {
    vec![
        MediaSource {
            title: "Run The Gauntlet".to_string(),
            uri: "https://media.playdeck.dev/clips/gauntlet.mp4".to_string(),
        },
        MediaSource {
            title: "Shoreline at Dusk".to_string(),
            uri: "https://media.playdeck.dev/clips/shoreline.mp4".to_string(),
        },
        MediaSource {
            title: "City Timelapse".to_string(),
            uri: "https://media.playdeck.dev/clips/timelapse.mp4".to_string(),
        },
    ]
});

/// Ordered, immutable collection of media sources
#[derive(Debug, Clone)]
pub struct Catalog {
    sources: Vec<MediaSource>,
}

impl Catalog {
    /// Create a catalog from a list of sources
    ///
    /// An empty catalog is rejected: the selector would have nothing to
    /// load and the player would sit stalled from startup.
    pub fn new(sources: Vec<MediaSource>) -> Result<Self> {
        if sources.is_empty() {
            return Err(PlayerError::Catalog("catalog has no sources".to_string()));
        }
        Ok(Self { sources })
    }

    /// The built-in demo catalog
    pub fn builtin() -> Self {
        Self {
            sources: DEMO_SOURCES.clone(),
        }
    }

    /// Load a catalog from a TOML file with `[[sources]]` tables
    pub fn from_toml_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let file: CatalogFile =
            toml::from_str(&contents).catalog_err("Failed to parse catalog file")?;
        Self::new(file.sources)
    }

    /// Load a catalog from a JSON array of `{title, source}` records,
    /// the shape hosting pages ship their source list in
    pub fn from_json(text: &str) -> Result<Self> {
        let sources: Vec<MediaSource> =
            serde_json::from_str(text).catalog_err("Failed to parse catalog JSON")?;
        Self::new(sources)
    }

    /// Iterate sources in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &MediaSource> {
        self.sources.iter()
    }

    /// Number of sources
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether the catalog holds no sources
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Source at the given position
    pub fn get(&self, index: usize) -> Option<&MediaSource> {
        self.sources.get(index)
    }
}
