//! Player controller module for Playdeck
//!
//! This module owns the interaction contract of the control surface: it
//! receives named input signals from the hosting page and the media handle,
//! and in response mutates playback state and the visual state of the
//! controls.

mod controller;
pub mod volume;

pub use controller::PlayerController;
pub use volume::{snap, VolumeTier};

/// Input signals the controller subscribes to
///
/// The finite set of user-interaction and media-lifecycle events the
/// hosting page forwards. One signal is processed at a time; there is no
/// preemption and no background work.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputSignal {
    /// Startup "page ready" event; triggers the initial source load
    Ready,

    /// Play/pause button clicked
    PlayClicked,

    /// The video stage itself clicked (same affordance as the button)
    StageClicked,

    /// Playback time advanced
    TimeUpdate,

    /// Media became ready to play
    CanPlay,

    /// Natural end of media
    Ended,

    /// Scrub track clicked at `offset_x` within a track of `track_width`
    ProgressClicked { offset_x: f64, track_width: f64 },

    /// Volume track clicked at `offset_x` within a track of `track_width`
    VolumeClicked { offset_x: f64, track_width: f64 },

    /// Volume icon clicked
    MuteClicked,

    /// A playback rate preset selected
    SpeedSelected { rate: f64 },

    /// Picture-in-picture button clicked
    PipClicked,

    /// Fullscreen button clicked
    FullscreenClicked,

    /// The platform's own fullscreen state changed (e.g. Escape pressed)
    FullscreenChanged { active: bool },

    /// A source selector option chosen
    SourceSelected { index: usize },
}
