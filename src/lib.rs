//! Playdeck - a video player control surface
//!
//! Playdeck wires a fixed set of player controls (play/pause button, scrub
//! bar, volume bar and icon, speed selector, picture-in-picture and
//! fullscreen buttons, source selector, time displays) to a playable media
//! handle. The hosting environment supplies the media handle and the
//! windowing capabilities; the controller owns the control-surface state and
//! reacts to a finite set of named input signals.

pub mod catalog;
pub mod platform;
pub mod player;
pub mod surface;
pub mod utils;

pub use catalog::{Catalog, MediaSource};
pub use platform::{FullscreenApi, MediaHandle, WindowingHost};
pub use player::{InputSignal, PlayerController};
pub use surface::{ControlSurface, PageLayout};
pub use utils::{Config, PlayerError, Result};
