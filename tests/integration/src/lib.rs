//! Integration test utilities for Playdeck
//!
//! Provides a fixture that assembles a controller over the simulated
//! platform, with handles kept on the media element and windowing host so
//! tests can observe what the controller did to them.

use anyhow::Result;
use playdeck::catalog::{Catalog, MediaSource};
use playdeck::platform::{SimHost, SimMedia};
use playdeck::player::PlayerController;
use playdeck::surface::{ControlSurface, PageLayout};
use playdeck::utils::Config;
use std::sync::Arc;

/// A fully wired player over the simulated platform
pub struct PlayerFixture {
    pub controller: PlayerController,
    pub media: Arc<SimMedia>,
    pub host: Arc<SimHost>,
}

impl PlayerFixture {
    /// Player over the standard two-source test catalog
    pub fn new() -> Result<Self> {
        Self::with_parts(
            SimMedia::new()
                .with_source_duration("a.mp4", 100.0)
                .with_source_duration("b.mp4", 240.0),
            SimHost::new(),
            test_catalog(),
        )
    }

    /// Player over explicit platform parts and catalog
    pub fn with_parts(media: SimMedia, host: SimHost, catalog: Catalog) -> Result<Self> {
        let media = Arc::new(media);
        let host = Arc::new(host);
        let surface = ControlSurface::bind(&PageLayout::standard())?;
        let controller = PlayerController::new(
            media.clone(),
            host.clone(),
            surface,
            catalog,
            &Config::default(),
        );

        Ok(Self {
            controller,
            media,
            host,
        })
    }
}

/// The catalog used throughout the integration tests
pub fn test_catalog() -> Catalog {
    Catalog::new(vec![
        MediaSource {
            title: "A".to_string(),
            uri: "a.mp4".to_string(),
        },
        MediaSource {
            title: "B".to_string(),
            uri: "b.mp4".to_string(),
        },
    ])
    .expect("test catalog is non-empty")
}
