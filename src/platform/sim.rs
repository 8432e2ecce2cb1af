//! Simulated platform backend
//!
//! A deterministic in-process stand-in for the hosting environment, used by
//! the test suites and the headless demo driver. `SimMedia` mimics a media
//! element's observable surface (source, position, duration, volume, rate);
//! `SimHost` mimics the windowing capabilities with configurable API
//! support so capability-absent paths can be exercised.

use crate::platform::{FullscreenApi, MediaHandle, WindowingHost};
use crate::utils::error::{PlayerError, Result};
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};

/// Playback state of the simulated media element
#[derive(Debug)]
struct MediaState {
    source: String,
    loaded_source: Option<String>,
    paused: bool,
    ended: bool,
    current_time: f64,
    /// NaN until a source has been loaded and announced its metadata
    duration: f64,
    volume: f64,
    playback_rate: f64,
}

impl Default for MediaState {
    fn default() -> Self {
        Self {
            source: String::new(),
            loaded_source: None,
            paused: true,
            ended: false,
            current_time: 0.0,
            duration: f64::NAN,
            volume: 1.0,
            playback_rate: 1.0,
        }
    }
}

/// Simulated media element
pub struct SimMedia {
    state: RwLock<MediaState>,

    /// Known durations per source URI; sources not listed load with the
    /// default duration
    durations: RwLock<HashMap<String, f64>>,

    /// Sources whose load is scripted to fail
    failing: RwLock<HashSet<String>>,

    /// Duration reported for sources without a scripted one
    default_duration: f64,
}

impl SimMedia {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MediaState::default()),
            durations: RwLock::new(HashMap::new()),
            failing: RwLock::new(HashSet::new()),
            default_duration: 60.0,
        }
    }

    /// Script the duration a source announces once loaded
    pub fn with_source_duration(self, uri: &str, seconds: f64) -> Self {
        self.durations.write().insert(uri.to_string(), seconds);
        self
    }

    /// Script a source whose load fails
    pub fn with_failing_source(self, uri: &str) -> Self {
        self.failing.write().insert(uri.to_string());
        self
    }

    /// Source URI of the last successful load
    pub fn loaded_source(&self) -> Option<String> {
        self.state.read().loaded_source.clone()
    }

    /// Current playback rate
    pub fn playback_rate(&self) -> f64 {
        self.state.read().playback_rate
    }

    /// Whether the end of the media has been reached
    pub fn ended(&self) -> bool {
        self.state.read().ended
    }

    /// Advance the playback clock, as the platform would while playing.
    /// Position saturates at the duration and flips the ended flag.
    pub fn advance(&self, seconds: f64) {
        let mut state = self.state.write();
        if state.paused || !state.duration.is_finite() {
            return;
        }
        state.current_time += seconds * state.playback_rate;
        if state.current_time >= state.duration {
            state.current_time = state.duration;
            state.paused = true;
            state.ended = true;
        }
    }
}

impl Default for SimMedia {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaHandle for SimMedia {
    fn play(&self) {
        let mut state = self.state.write();
        state.paused = false;
        state.ended = false;
    }

    fn pause(&self) {
        self.state.write().paused = true;
    }

    fn is_paused(&self) -> bool {
        self.state.read().paused
    }

    fn current_time(&self) -> f64 {
        self.state.read().current_time
    }

    fn seek(&self, seconds: f64) {
        let mut state = self.state.write();
        if state.duration.is_finite() {
            state.current_time = seconds.clamp(0.0, state.duration);
        }
    }

    fn duration(&self) -> f64 {
        self.state.read().duration
    }

    fn volume(&self) -> f64 {
        self.state.read().volume
    }

    fn set_volume(&self, volume: f64) {
        self.state.write().volume = volume.clamp(0.0, 1.0);
    }

    fn set_playback_rate(&self, rate: f64) {
        self.state.write().playback_rate = rate;
    }

    fn set_source(&self, uri: &str) {
        self.state.write().source = uri.to_string();
    }

    fn load(&self) -> Result<()> {
        let source = self.state.read().source.clone();
        if source.is_empty() {
            return Err(PlayerError::Media("no source set".to_string()));
        }
        if self.failing.read().contains(&source) {
            return Err(PlayerError::Media(format!("failed to fetch {}", source)));
        }

        let duration = self
            .durations
            .read()
            .get(&source)
            .copied()
            .unwrap_or(self.default_duration);

        let mut state = self.state.write();
        state.loaded_source = Some(source);
        state.paused = true;
        state.ended = false;
        state.current_time = 0.0;
        state.duration = duration;
        Ok(())
    }
}

/// Windowing state of the simulated host
#[derive(Debug, Default)]
struct HostState {
    fullscreen_via: Option<FullscreenApi>,
    pip_active: bool,
}

/// Simulated windowing host
pub struct SimHost {
    state: RwLock<HostState>,
    fullscreen_apis: HashSet<FullscreenApi>,
    pip_supported: bool,

    /// Every fullscreen entry attempt, in call order
    attempts: RwLock<Vec<FullscreenApi>>,
}

impl SimHost {
    /// Host with the standard fullscreen API and picture-in-picture support
    pub fn new() -> Self {
        Self {
            state: RwLock::new(HostState::default()),
            fullscreen_apis: [FullscreenApi::Standard].into_iter().collect(),
            pip_supported: true,
            attempts: RwLock::new(Vec::new()),
        }
    }

    /// Replace the set of fullscreen API variants the host answers to
    pub fn with_fullscreen_apis(mut self, apis: &[FullscreenApi]) -> Self {
        self.fullscreen_apis = apis.iter().copied().collect();
        self
    }

    /// Host without picture-in-picture support
    pub fn without_pip(mut self) -> Self {
        self.pip_supported = false;
        self
    }

    /// Whether the host is currently fullscreen
    pub fn fullscreen_active(&self) -> bool {
        self.state.read().fullscreen_via.is_some()
    }

    /// Fullscreen entry attempts observed so far, in call order
    pub fn fullscreen_attempts(&self) -> Vec<FullscreenApi> {
        self.attempts.read().clone()
    }

    /// Leave fullscreen the way the platform itself would (e.g. the user
    /// pressing Escape), bypassing the controller entirely
    pub fn native_fullscreen_exit(&self) {
        self.state.write().fullscreen_via = None;
    }
}

impl Default for SimHost {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowingHost for SimHost {
    fn enter_fullscreen(&self, api: FullscreenApi) -> bool {
        self.attempts.write().push(api);
        if !self.fullscreen_apis.contains(&api) {
            return false;
        }
        self.state.write().fullscreen_via = Some(api);
        true
    }

    fn exit_fullscreen(&self, api: FullscreenApi) -> bool {
        if !self.fullscreen_apis.contains(&api) {
            return false;
        }
        self.state.write().fullscreen_via = None;
        true
    }

    fn pip_supported(&self) -> bool {
        self.pip_supported
    }

    fn pip_active(&self) -> bool {
        self.state.read().pip_active
    }

    fn enter_pip(&self) -> bool {
        if !self.pip_supported {
            return false;
        }
        self.state.write().pip_active = true;
        true
    }

    fn exit_pip(&self) {
        self.state.write().pip_active = false;
    }
}
