//! Integration tests for startup, binding, and the source catalog
//!
//! These tests cover the player's lifecycle around the interaction
//! contract: surface binding against incomplete pages, catalog loading
//! from files, selector population, and source switching.

use anyhow::Result;
use playdeck::catalog::Catalog;
use playdeck::platform::{MediaHandle, SimHost, SimMedia};
use playdeck::player::InputSignal;
use playdeck::surface::{ControlSurface, PageLayout};
use playdeck::utils::PlayerError;
use playdeck_integration_tests::{test_catalog, PlayerFixture};
use std::io::Write;

#[test]
fn startup_populates_selector_in_catalog_order() -> Result<()> {
    let mut fixture = PlayerFixture::new()?;
    fixture.controller.handle(InputSignal::Ready);

    let selector = &fixture.controller.surface().selector;
    assert_eq!(selector.len(), 2);
    assert_eq!(selector.options()[0].label, "A");
    assert_eq!(selector.options()[0].value, "a.mp4");
    assert_eq!(selector.options()[1].label, "B");
    assert_eq!(selector.options()[1].value, "b.mp4");

    Ok(())
}

#[test]
fn selecting_a_source_loads_it() -> Result<()> {
    let mut fixture = PlayerFixture::new()?;
    fixture.controller.handle(InputSignal::Ready);
    assert_eq!(fixture.media.loaded_source().as_deref(), Some("a.mp4"));

    fixture
        .controller
        .handle(InputSignal::SourceSelected { index: 1 });
    assert_eq!(fixture.media.loaded_source().as_deref(), Some("b.mp4"));
    assert_eq!(fixture.media.duration(), 240.0);

    // The switch resets the playback clock
    assert_eq!(fixture.media.current_time(), 0.0);
    assert!(fixture.media.is_paused());

    Ok(())
}

#[test]
fn repeated_startup_does_not_duplicate_options() -> Result<()> {
    let mut fixture = PlayerFixture::new()?;
    fixture.controller.handle(InputSignal::Ready);
    fixture.controller.handle(InputSignal::Ready);
    fixture.controller.handle(InputSignal::Ready);

    assert_eq!(fixture.controller.surface().selector.len(), 2);

    Ok(())
}

#[test]
fn binding_fails_without_required_elements() {
    for id in ["play-btn", "progress-range", "videos", "pip"] {
        let result = ControlSurface::bind(&PageLayout::without(id));
        match result {
            Err(PlayerError::MissingControl(missing)) => assert_eq!(missing, id),
            _ => panic!("binding must fail without {}", id),
        }
    }
}

#[test]
fn failed_load_leaves_previous_source_in_place() -> Result<()> {
    let media = SimMedia::new()
        .with_source_duration("a.mp4", 100.0)
        .with_failing_source("b.mp4");
    let mut fixture = PlayerFixture::with_parts(media, SimHost::new(), test_catalog())?;

    fixture.controller.handle(InputSignal::Ready);
    fixture
        .controller
        .handle(InputSignal::SourceSelected { index: 1 });

    // The failure was logged and swallowed; nothing replaced the old load
    assert_eq!(fixture.media.loaded_source().as_deref(), Some("a.mp4"));

    Ok(())
}

#[test]
fn catalog_round_trips_through_a_toml_file() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(
        file,
        "[[sources]]\ntitle = \"First\"\nuri = \"first.mp4\"\n\n\
         [[sources]]\ntitle = \"Second\"\nuri = \"second.mp4\"\n"
    )?;

    let catalog = Catalog::from_toml_path(file.path())?;
    let mut fixture = PlayerFixture::with_parts(
        SimMedia::new(),
        SimHost::new(),
        catalog,
    )?;

    fixture.controller.handle(InputSignal::Ready);
    let selector = &fixture.controller.surface().selector;
    assert_eq!(selector.len(), 2);
    assert_eq!(selector.options()[1].value, "second.mp4");
    assert_eq!(fixture.media.loaded_source().as_deref(), Some("first.mp4"));

    Ok(())
}

#[test]
fn progress_signals_before_metadata_do_not_panic() -> Result<()> {
    // A source that never announces metadata leaves duration NaN; every
    // progress path must degrade instead of crashing
    let mut fixture = PlayerFixture::with_parts(SimMedia::new(), SimHost::new(), test_catalog())?;

    fixture.controller.handle(InputSignal::CanPlay);
    fixture.controller.handle(InputSignal::TimeUpdate);
    fixture.controller.handle(InputSignal::ProgressClicked {
        offset_x: 10.0,
        track_width: 100.0,
    });

    assert_eq!(fixture.controller.surface().duration.text(), "0:00");
    assert_eq!(fixture.media.current_time(), 0.0);

    Ok(())
}
