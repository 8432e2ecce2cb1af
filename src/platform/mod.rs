//! Platform abstractions for Playdeck
//!
//! The hosting environment provides two capabilities the controller cannot
//! own itself: a playable media handle and a windowing host (fullscreen and
//! picture-in-picture). Both are modeled as traits so the controller can be
//! driven against a real backend or the simulated one in [`sim`].

pub mod sim;

pub use sim::{SimHost, SimMedia};

use crate::utils::error::Result;
use log::debug;

/// Handle to the playable media resource
///
/// Calls have request/async-completion semantics: the controller fires a
/// request and returns, and later signals (`TimeUpdate`, `CanPlay`) drive
/// any follow-up surface updates. Implementations use interior mutability;
/// only one signal is ever processed at a time.
pub trait MediaHandle: Send + Sync {
    /// Start or resume playback
    fn play(&self);

    /// Pause playback
    fn pause(&self);

    /// Whether playback is currently paused
    fn is_paused(&self) -> bool;

    /// Current playback position in seconds
    fn current_time(&self) -> f64;

    /// Seek to a position in seconds
    fn seek(&self, seconds: f64);

    /// Media duration in seconds; NaN until metadata is known
    fn duration(&self) -> f64;

    /// Current volume (0.0 to 1.0)
    fn volume(&self) -> f64;

    /// Set volume (0.0 to 1.0)
    fn set_volume(&self, volume: f64);

    /// Set the playback rate multiplier (1.0 = normal)
    fn set_playback_rate(&self, rate: f64);

    /// Point the media at a new source URI
    fn set_source(&self, uri: &str);

    /// Reload the media resource from the current source
    fn load(&self) -> Result<()>;
}

/// Fullscreen API variant
///
/// Standards-track hosts accept [`FullscreenApi::Standard`]; older WebKit
/// and Trident hosts only answer to their prefixed variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FullscreenApi {
    Standard,
    Webkit,
    Ms,
}

impl FullscreenApi {
    /// Fixed fallback order for fullscreen requests
    pub const FALLBACK_ORDER: [FullscreenApi; 3] =
        [FullscreenApi::Standard, FullscreenApi::Webkit, FullscreenApi::Ms];
}

/// Windowing capabilities of the hosting environment
pub trait WindowingHost: Send + Sync {
    /// Request fullscreen through one API variant; false when the host
    /// does not implement that variant
    fn enter_fullscreen(&self, api: FullscreenApi) -> bool;

    /// Request fullscreen exit through one API variant; false when the
    /// host does not implement that variant
    fn exit_fullscreen(&self, api: FullscreenApi) -> bool;

    /// Whether the host can enter picture-in-picture at all
    fn pip_supported(&self) -> bool;

    /// Whether an element is currently in picture-in-picture
    fn pip_active(&self) -> bool;

    /// Request picture-in-picture entry for the media element
    fn enter_pip(&self) -> bool;

    /// Request picture-in-picture exit
    fn exit_pip(&self);
}

/// Request fullscreen via the first API variant the host accepts
///
/// Returns the variant that succeeded, or None when the host implements
/// none of them.
pub fn request_fullscreen(host: &dyn WindowingHost) -> Option<FullscreenApi> {
    for api in FullscreenApi::FALLBACK_ORDER {
        if host.enter_fullscreen(api) {
            return Some(api);
        }
        debug!("fullscreen entry via {:?} not available", api);
    }
    None
}

/// Request fullscreen exit via the first API variant the host accepts
pub fn release_fullscreen(host: &dyn WindowingHost) -> Option<FullscreenApi> {
    for api in FullscreenApi::FALLBACK_ORDER {
        if host.exit_fullscreen(api) {
            return Some(api);
        }
        debug!("fullscreen exit via {:?} not available", api);
    }
    None
}
