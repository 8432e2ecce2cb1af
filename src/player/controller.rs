//! Player controller implementation for Playdeck
//!
//! The controller holds the media handle, the windowing host, the bound
//! control surface, and the small amount of derived state the surface
//! needs (last non-zero volume, last volume tier, fullscreen flag). All
//! mutation happens in response to a named input signal.

use crate::catalog::Catalog;
use crate::platform::{self, MediaHandle, WindowingHost};
use crate::player::volume::{snap, VolumeTier};
use crate::player::InputSignal;
use crate::surface::{ControlSurface, PlayGlyph, SourceOption, VolumeGlyph};
use crate::utils::config::Config;
use crate::utils::format_clock;

use log::{debug, error, info, warn};
use std::sync::Arc;

/// Main player controller
pub struct PlayerController {
    media: Arc<dyn MediaHandle>,
    host: Arc<dyn WindowingHost>,
    surface: ControlSurface,
    catalog: Catalog,

    /// Volume restored on unmute
    last_volume: f64,

    /// Tier whose glyph is restored on unmute; tracks the last non-zero
    /// volume only
    last_tier: VolumeTier,

    /// Authoritative for the next fullscreen toggle direction; reconciled
    /// on `FullscreenChanged`
    fullscreen: bool,
}

impl PlayerController {
    /// Create a controller over a bound surface
    ///
    /// Applies the configured default volume to the media handle and
    /// mirrors it on the volume bar and icon so the surface starts
    /// consistent.
    pub fn new(
        media: Arc<dyn MediaHandle>,
        host: Arc<dyn WindowingHost>,
        surface: ControlSurface,
        catalog: Catalog,
        config: &Config,
    ) -> Self {
        let volume = config.player.default_volume.clamp(0.0, 1.0);
        let last_tier = if volume > 0.0 {
            VolumeTier::for_volume(volume)
        } else {
            VolumeTier::High
        };

        let mut controller = Self {
            media,
            host,
            surface,
            catalog,
            last_volume: volume,
            last_tier,
            fullscreen: false,
        };

        controller.media.set_volume(volume);
        controller.surface.volume_bar.set_percent(volume * 100.0);
        controller
            .surface
            .volume_icon
            .set(VolumeTier::for_volume(volume).glyph(), "Mute");
        controller
    }

    /// Dispatch one input signal
    pub fn handle(&mut self, signal: InputSignal) {
        debug!("signal: {:?}", signal);
        match signal {
            InputSignal::Ready => self.load_video(),
            InputSignal::PlayClicked | InputSignal::StageClicked => self.toggle_play(),
            InputSignal::TimeUpdate | InputSignal::CanPlay => self.update_progress(),
            InputSignal::Ended => self.show_play_glyph(),
            InputSignal::ProgressClicked {
                offset_x,
                track_width,
            } => self.set_progress(offset_x, track_width),
            InputSignal::VolumeClicked {
                offset_x,
                track_width,
            } => self.change_volume(offset_x, track_width),
            InputSignal::MuteClicked => self.toggle_mute(),
            InputSignal::SpeedSelected { rate } => self.change_speed(rate),
            InputSignal::PipClicked => self.toggle_picture_in_picture(),
            InputSignal::FullscreenClicked => self.toggle_fullscreen(),
            InputSignal::FullscreenChanged { active } => self.sync_fullscreen(active),
            InputSignal::SourceSelected { index } => self.select_source(index),
        }
    }

    /// Read access to the surface state, for the hosting page to render
    pub fn surface(&self) -> &ControlSurface {
        &self.surface
    }

    /// Whether the controller believes the player is fullscreen
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn toggle_play(&mut self) {
        if self.media.is_paused() {
            self.media.play();
            self.surface.play.set(PlayGlyph::Pause, "Pause");
            info!("playback started");
        } else {
            self.media.pause();
            self.show_play_glyph();
            info!("playback paused");
        }
    }

    fn show_play_glyph(&mut self) {
        self.surface.play.set(PlayGlyph::Play, "Play");
    }

    fn update_progress(&mut self) {
        let position = self.media.current_time();
        let duration = self.media.duration();

        if duration.is_finite() && duration > 0.0 {
            self.surface
                .progress
                .set_percent(position / duration * 100.0);
        }
        self.surface
            .elapsed
            .set(format!("{} /", format_clock(position)));
        self.surface.duration.set(format_clock(duration));
    }

    fn set_progress(&mut self, offset_x: f64, track_width: f64) {
        let fraction = offset_x / track_width;
        // Optimistic fill update; the next TimeUpdate confirms it
        self.surface.progress.set_percent(fraction * 100.0);

        let duration = self.media.duration();
        if duration.is_finite() && duration > 0.0 {
            self.media.seek(fraction * duration);
            debug!("seek to {:.1}% of {:.1}s", fraction * 100.0, duration);
        } else {
            debug!("seek before metadata, position request dropped");
        }
    }

    fn change_volume(&mut self, offset_x: f64, track_width: f64) {
        let volume = snap(offset_x / track_width);
        self.surface.volume_bar.set_percent(volume * 100.0);
        self.media.set_volume(volume);
        debug!("volume set to {:.2}", volume);

        let tier = VolumeTier::for_volume(volume);
        self.surface.volume_icon.set_glyph(tier.glyph());
        if volume > 0.0 {
            self.last_tier = tier;
        }
        self.last_volume = volume;
    }

    fn toggle_mute(&mut self) {
        if self.media.volume() != 0.0 {
            self.last_volume = self.media.volume();
            self.media.set_volume(0.0);
            self.surface.volume_bar.set_percent(0.0);
            self.surface.volume_icon.set(VolumeGlyph::Muted, "Unmute");
            info!("muted");
        } else {
            self.media.set_volume(self.last_volume);
            self.surface
                .volume_bar
                .set_percent(self.last_volume * 100.0);
            self.surface
                .volume_icon
                .set(self.last_tier.glyph(), "Mute");
            info!("unmuted, volume restored to {:.2}", self.last_volume);
        }
    }

    fn change_speed(&mut self, rate: f64) {
        // The surface offers preset values only; no range validation here
        self.media.set_playback_rate(rate);
        self.surface.speed.set_rate(rate);
        info!("playback rate set to {:.2}x", rate);
    }

    fn toggle_picture_in_picture(&mut self) {
        if self.host.pip_active() {
            self.host.exit_pip();
            info!("left picture-in-picture");
        } else if self.host.pip_supported() {
            if self.host.enter_pip() {
                info!("entered picture-in-picture");
            }
        } else {
            debug!("picture-in-picture not supported by host");
        }
    }

    fn toggle_fullscreen(&mut self) {
        if !self.fullscreen {
            match platform::request_fullscreen(self.host.as_ref()) {
                Some(api) => debug!("fullscreen entered via {:?}", api),
                None => warn!("host accepted no fullscreen API"),
            }
            self.surface.stage.set_fullscreen(true);
            self.surface.pip.set_hidden(true);
        } else {
            match platform::release_fullscreen(self.host.as_ref()) {
                Some(api) => debug!("fullscreen exited via {:?}", api),
                None => warn!("host accepted no fullscreen exit API"),
            }
            self.surface.stage.set_fullscreen(false);
            self.surface.pip.set_hidden(false);
        }
        self.fullscreen = !self.fullscreen;
        info!("fullscreen toggled {}", if self.fullscreen { "on" } else { "off" });
    }

    /// Reconcile with a platform-native fullscreen change (e.g. Escape)
    fn sync_fullscreen(&mut self, active: bool) {
        if self.fullscreen == active {
            return;
        }
        self.fullscreen = active;
        self.surface.stage.set_fullscreen(active);
        self.surface.pip.set_hidden(active);
        info!("fullscreen state reconciled to {}", active);
    }

    fn populate_selector(&mut self) {
        if !self.surface.selector.is_empty() {
            return;
        }
        for source in self.catalog.iter() {
            self.surface.selector.push(SourceOption {
                label: source.title.clone(),
                value: source.uri.clone(),
            });
        }
        debug!("selector populated with {} sources", self.catalog.len());
    }

    fn select_source(&mut self, index: usize) {
        self.populate_selector();
        if !self.surface.selector.select(index) {
            warn!("selector has no option {}", index);
            return;
        }
        self.load_video();
    }

    fn load_video(&mut self) {
        self.populate_selector();
        let Some(option) = self.surface.selector.selected_option() else {
            warn!("source selector is empty, nothing to load");
            return;
        };

        let uri = option.value.clone();
        self.media.set_source(&uri);
        if let Err(err) = self.media.load() {
            error!("failed to load {}: {}", uri, err);
            return;
        }
        info!("loaded source {}", uri);
    }
}
