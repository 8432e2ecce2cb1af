//! Volume snapping and icon tiers
//!
//! Pure decision logic for the volume track: near-extreme clicks snap to
//! the exact boundary so precise mute/max gestures are easy, and the
//! continuous volume maps onto a discrete icon tier.

use crate::surface::VolumeGlyph;

/// Volumes below this snap to 0
pub const SNAP_FLOOR: f64 = 0.1;

/// Volumes above this snap to 1
pub const SNAP_CEILING: f64 = 0.9;

/// Upper bound of the Low tier; exactly this value is still Low
pub const LOW_TIER_MAX: f64 = 0.7;

/// Snap a near-extreme volume to its boundary
pub fn snap(volume: f64) -> f64 {
    if volume < SNAP_FLOOR {
        0.0
    } else if volume > SNAP_CEILING {
        1.0
    } else {
        volume
    }
}

/// Discrete icon category derived from a continuous volume value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeTier {
    Muted,
    Low,
    High,
}

impl VolumeTier {
    /// Tier for a (snapped) volume value
    pub fn for_volume(volume: f64) -> Self {
        if volume <= 0.0 {
            VolumeTier::Muted
        } else if volume <= LOW_TIER_MAX {
            VolumeTier::Low
        } else {
            VolumeTier::High
        }
    }

    /// Glyph shown for this tier
    pub fn glyph(self) -> VolumeGlyph {
        match self {
            VolumeTier::Muted => VolumeGlyph::Off,
            VolumeTier::Low => VolumeGlyph::Down,
            VolumeTier::High => VolumeGlyph::Up,
        }
    }
}
