//! Integration tests for the player control surface
//!
//! These tests drive the controller end-to-end with synthetic input
//! signals and verify the interaction contract:
//! - Play/pause toggling and end-of-media behavior
//! - Scrub and progress reporting
//! - Volume snapping, mute round-trips, and icon tiers
//! - Speed, picture-in-picture, and fullscreen control

use anyhow::Result;
use playdeck::platform::{FullscreenApi, MediaHandle, SimHost, SimMedia, WindowingHost};
use playdeck::player::InputSignal;
use playdeck::surface::{PlayGlyph, VolumeGlyph};
use playdeck_integration_tests::{test_catalog, PlayerFixture};

#[test]
fn playback_session_round_trip() -> Result<()> {
    let mut fixture = PlayerFixture::new()?;
    fixture.controller.handle(InputSignal::Ready);

    // Startup leaves the player paused on the first source
    assert!(fixture.media.is_paused());
    assert_eq!(fixture.media.loaded_source().as_deref(), Some("a.mp4"));

    fixture.controller.handle(InputSignal::PlayClicked);
    assert!(!fixture.media.is_paused());
    assert_eq!(fixture.controller.surface().play.glyph(), PlayGlyph::Pause);

    // Let the clock run and confirm the surface tracks it
    fixture.media.advance(50.0);
    fixture.controller.handle(InputSignal::TimeUpdate);
    assert_eq!(fixture.controller.surface().progress.percent(), 50.0);
    assert_eq!(fixture.controller.surface().elapsed.text(), "0:50 /");
    assert_eq!(fixture.controller.surface().duration.text(), "1:40");

    // Double toggle restores the original state
    fixture.controller.handle(InputSignal::PlayClicked);
    fixture.controller.handle(InputSignal::PlayClicked);
    assert!(!fixture.media.is_paused());
    assert_eq!(fixture.controller.surface().play.glyph(), PlayGlyph::Pause);

    Ok(())
}

#[test]
fn end_of_media_restores_play_affordance() -> Result<()> {
    let mut fixture = PlayerFixture::new()?;
    fixture.controller.handle(InputSignal::Ready);
    fixture.controller.handle(InputSignal::PlayClicked);

    // Run the media to its end; the platform pauses and the page relays
    // the ended signal
    fixture.media.advance(200.0);
    assert!(fixture.media.ended());
    fixture.controller.handle(InputSignal::Ended);

    assert_eq!(fixture.controller.surface().play.glyph(), PlayGlyph::Play);
    assert_eq!(fixture.controller.surface().play.title(), "Play");

    Ok(())
}

#[test]
fn scrub_seeks_optimistically() -> Result<()> {
    let mut fixture = PlayerFixture::new()?;
    fixture.controller.handle(InputSignal::Ready);

    fixture.controller.handle(InputSignal::ProgressClicked {
        offset_x: 120.0,
        track_width: 480.0,
    });

    // The fill updates immediately, before any TimeUpdate arrives
    assert_eq!(fixture.controller.surface().progress.percent(), 25.0);
    assert_eq!(fixture.media.current_time(), 25.0);

    Ok(())
}

#[test]
fn volume_track_snaps_extremes() -> Result<()> {
    let mut fixture = PlayerFixture::new()?;
    fixture.controller.handle(InputSignal::Ready);

    fixture.controller.handle(InputSignal::VolumeClicked {
        offset_x: 4.0,
        track_width: 100.0,
    });
    assert_eq!(fixture.media.volume(), 0.0);
    assert_eq!(
        fixture.controller.surface().volume_icon.glyph(),
        VolumeGlyph::Off
    );

    fixture.controller.handle(InputSignal::VolumeClicked {
        offset_x: 97.0,
        track_width: 100.0,
    });
    assert_eq!(fixture.media.volume(), 1.0);
    assert_eq!(
        fixture.controller.surface().volume_icon.glyph(),
        VolumeGlyph::Up
    );

    Ok(())
}

#[test]
fn mute_round_trip_restores_volume_and_tier() -> Result<()> {
    let mut fixture = PlayerFixture::new()?;
    fixture.controller.handle(InputSignal::Ready);

    fixture.controller.handle(InputSignal::VolumeClicked {
        offset_x: 35.0,
        track_width: 100.0,
    });
    assert_eq!(fixture.media.volume(), 0.35);

    fixture.controller.handle(InputSignal::MuteClicked);
    assert_eq!(fixture.media.volume(), 0.0);
    assert_eq!(
        fixture.controller.surface().volume_icon.glyph(),
        VolumeGlyph::Muted
    );
    assert_eq!(fixture.controller.surface().volume_icon.title(), "Unmute");

    fixture.controller.handle(InputSignal::MuteClicked);
    assert_eq!(fixture.media.volume(), 0.35);
    assert_eq!(fixture.controller.surface().volume_bar.percent(), 35.0);
    assert_eq!(
        fixture.controller.surface().volume_icon.glyph(),
        VolumeGlyph::Down
    );
    assert_eq!(fixture.controller.surface().volume_icon.title(), "Mute");

    Ok(())
}

#[test]
fn speed_presets_reach_the_media() -> Result<()> {
    let mut fixture = PlayerFixture::new()?;
    fixture.controller.handle(InputSignal::Ready);

    for rate in [0.5, 0.75, 1.0, 1.5, 2.0] {
        fixture.controller.handle(InputSignal::SpeedSelected { rate });
        assert_eq!(fixture.media.playback_rate(), rate);
    }

    Ok(())
}

#[test]
fn pip_is_silent_noop_on_incapable_host() -> Result<()> {
    let mut fixture = PlayerFixture::with_parts(
        SimMedia::new().with_source_duration("a.mp4", 100.0),
        SimHost::new().without_pip(),
        test_catalog(),
    )?;
    fixture.controller.handle(InputSignal::Ready);

    fixture.controller.handle(InputSignal::PipClicked);
    assert!(!fixture.host.pip_active());

    Ok(())
}

#[test]
fn fullscreen_uses_vendor_fallback_order() -> Result<()> {
    let mut fixture = PlayerFixture::with_parts(
        SimMedia::new().with_source_duration("a.mp4", 100.0),
        SimHost::new().with_fullscreen_apis(&[FullscreenApi::Webkit]),
        test_catalog(),
    )?;
    fixture.controller.handle(InputSignal::Ready);

    fixture.controller.handle(InputSignal::FullscreenClicked);
    assert!(fixture.host.fullscreen_active());
    assert_eq!(
        fixture.host.fullscreen_attempts(),
        vec![FullscreenApi::Standard, FullscreenApi::Webkit]
    );

    Ok(())
}

#[test]
fn fullscreen_and_pip_are_mutually_exclusive() -> Result<()> {
    let mut fixture = PlayerFixture::new()?;
    fixture.controller.handle(InputSignal::Ready);

    fixture.controller.handle(InputSignal::FullscreenClicked);
    assert!(fixture.controller.surface().pip.hidden());

    fixture.controller.handle(InputSignal::FullscreenClicked);
    assert!(!fixture.controller.surface().pip.hidden());

    Ok(())
}

#[test]
fn native_fullscreen_exit_is_reconciled() -> Result<()> {
    let mut fixture = PlayerFixture::new()?;
    fixture.controller.handle(InputSignal::Ready);

    fixture.controller.handle(InputSignal::FullscreenClicked);
    assert!(fixture.controller.is_fullscreen());

    // User presses Escape: the platform leaves fullscreen on its own and
    // the page relays the change
    fixture.host.native_fullscreen_exit();
    fixture
        .controller
        .handle(InputSignal::FullscreenChanged { active: false });

    assert!(!fixture.controller.is_fullscreen());
    assert!(!fixture.controller.surface().stage.fullscreen());
    assert!(!fixture.controller.surface().pip.hidden());

    // The flag stayed consistent, so the next toggle enters again
    fixture.controller.handle(InputSignal::FullscreenClicked);
    assert!(fixture.host.fullscreen_active());

    Ok(())
}
