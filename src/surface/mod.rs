//! Control surface model for Playdeck
//!
//! The hosting page publishes a fixed set of named control elements; the
//! controller binds to them once at startup and owns their visual state from
//! then on. Absence of any required element is a fatal startup condition.

use crate::utils::error::{PlayerError, Result};
use std::collections::HashSet;

/// Element ids every hosting page must publish
pub const REQUIRED_ELEMENTS: [&str; 14] = [
    "player",
    "video",
    "play-btn",
    "progress-range",
    "progress-bar",
    "volume-range",
    "volume-bar",
    "volume-icon",
    "time-elapsed",
    "time-duration",
    "player-speed",
    "pip",
    "fullscreen",
    "videos",
];

/// Set of element ids a hosting page publishes
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    ids: HashSet<String>,
}

impl PageLayout {
    /// Empty layout
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout of a complete hosting page
    pub fn standard() -> Self {
        let mut layout = Self::new();
        for id in REQUIRED_ELEMENTS {
            layout.declare(id);
        }
        layout
    }

    /// Declare an element id as present
    pub fn declare(&mut self, id: &str) {
        self.ids.insert(id.to_string());
    }

    /// Standard layout with one element removed, for exercising the
    /// missing-element startup failure
    pub fn without(id: &str) -> Self {
        let mut layout = Self::standard();
        layout.ids.remove(id);
        layout
    }

    /// Whether the page publishes the given element id
    pub fn has(&self, id: &str) -> bool {
        self.ids.contains(id)
    }
}

/// Glyph on the play/pause button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayGlyph {
    Play,
    Pause,
}

/// Glyph on the volume icon
///
/// `Off` is the zero-tier glyph reached by sliding the volume down;
/// `Muted` is the distinct glyph for an explicit mute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeGlyph {
    Up,
    Down,
    Off,
    Muted,
}

/// Play/pause button state
#[derive(Debug, Clone)]
pub struct PlayButton {
    glyph: PlayGlyph,
    title: String,
}

impl PlayButton {
    fn new() -> Self {
        Self {
            glyph: PlayGlyph::Play,
            title: "Play".to_string(),
        }
    }

    pub fn set(&mut self, glyph: PlayGlyph, title: &str) {
        self.glyph = glyph;
        self.title = title.to_string();
    }

    pub fn glyph(&self) -> PlayGlyph {
        self.glyph
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Horizontal fill bar (scrub bar fill, volume bar fill)
#[derive(Debug, Clone)]
pub struct FillBar {
    percent: f64,
}

impl FillBar {
    fn new(percent: f64) -> Self {
        Self { percent }
    }

    pub fn set_percent(&mut self, percent: f64) {
        self.percent = percent;
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }
}

/// Volume icon state
#[derive(Debug, Clone)]
pub struct VolumeIcon {
    glyph: VolumeGlyph,
    title: String,
}

impl VolumeIcon {
    fn new() -> Self {
        Self {
            glyph: VolumeGlyph::Up,
            title: "Mute".to_string(),
        }
    }

    pub fn set(&mut self, glyph: VolumeGlyph, title: &str) {
        self.glyph = glyph;
        self.title = title.to_string();
    }

    pub fn set_glyph(&mut self, glyph: VolumeGlyph) {
        self.glyph = glyph;
    }

    pub fn glyph(&self) -> VolumeGlyph {
        self.glyph
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Text display (elapsed/duration labels)
#[derive(Debug, Clone, Default)]
pub struct TextLabel {
    text: String,
}

impl TextLabel {
    pub fn set(&mut self, text: String) {
        self.text = text;
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Speed selector state; the surface offers preset rates only
#[derive(Debug, Clone)]
pub struct SpeedSelector {
    rate: f64,
}

impl SpeedSelector {
    fn new() -> Self {
        Self { rate: 1.0 }
    }

    pub fn set_rate(&mut self, rate: f64) {
        self.rate = rate;
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

/// Picture-in-picture button state
#[derive(Debug, Clone, Default)]
pub struct PipButton {
    hidden: bool,
}

impl PipButton {
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }
}

/// One entry in the source selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceOption {
    /// Display label (the source title)
    pub label: String,
    /// Option value (the source URI)
    pub value: String,
}

/// Source selector state
#[derive(Debug, Clone, Default)]
pub struct SourceSelector {
    options: Vec<SourceOption>,
    selected: usize,
}

impl SourceSelector {
    pub fn push(&mut self, option: SourceOption) {
        self.options.push(option);
    }

    pub fn options(&self) -> &[SourceOption] {
        &self.options
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Select the option at `index`; out-of-range selections are ignored
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.options.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_option(&self) -> Option<&SourceOption> {
        self.options.get(self.selected)
    }
}

/// The video stage (the media element's visual container state)
#[derive(Debug, Clone, Default)]
pub struct VideoStage {
    fullscreen: bool,
}

impl VideoStage {
    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
    }

    pub fn fullscreen(&self) -> bool {
        self.fullscreen
    }
}

/// The bound control surface
///
/// Created once at startup; the controller is the only writer afterwards.
#[derive(Debug, Clone)]
pub struct ControlSurface {
    pub play: PlayButton,
    pub progress: FillBar,
    pub volume_bar: FillBar,
    pub volume_icon: VolumeIcon,
    pub elapsed: TextLabel,
    pub duration: TextLabel,
    pub speed: SpeedSelector,
    pub pip: PipButton,
    pub selector: SourceSelector,
    pub stage: VideoStage,
}

impl ControlSurface {
    /// Bind the control surface to a hosting page
    ///
    /// Fails with [`PlayerError::MissingControl`] naming the first absent
    /// element; there is no degraded mode.
    pub fn bind(layout: &PageLayout) -> Result<Self> {
        for id in REQUIRED_ELEMENTS {
            if !layout.has(id) {
                return Err(PlayerError::MissingControl(id.to_string()));
            }
        }

        Ok(Self {
            play: PlayButton::new(),
            progress: FillBar::new(0.0),
            volume_bar: FillBar::new(100.0),
            volume_icon: VolumeIcon::new(),
            elapsed: TextLabel::default(),
            duration: TextLabel::default(),
            speed: SpeedSelector::new(),
            pip: PipButton::default(),
            selector: SourceSelector::default(),
            stage: VideoStage::default(),
        })
    }
}
