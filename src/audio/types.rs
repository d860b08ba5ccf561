//! Audio widget value types: status, volume, scroll samples, events and effects.

use std::path::PathBuf;
use std::time::Duration;

/// Lifecycle of the widget's track.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    /// Nothing started yet, or autoplay was refused.
    #[default]
    Idle,
    Playing,
    Paused,
    /// The track played to its end.
    Ended,
}

/// Playback volume, clamped to `0.0..=1.0`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Volume(f32);

impl Volume {
    pub const MUTED: Volume = Volume(0.0);
    pub const FULL: Volume = Volume(1.0);

    /// Creates a new volume level, clamping to the valid range.
    #[must_use]
    pub fn new(volume: f32) -> Self {
        if volume.is_nan() {
            return Self::MUTED;
        }
        Self(volume.clamp(0.0, 1.0))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true if volume is effectively muted (below audible threshold).
    #[must_use]
    pub fn is_muted(self) -> bool {
        self.0 < 0.001
    }

    #[must_use]
    pub fn increase(self, step: f32) -> Self {
        Self::new(self.0 + step)
    }

    #[must_use]
    pub fn decrease(self, step: f32) -> Self {
        Self::new(self.0 - step)
    }

    /// Rounded percentage for display.
    #[must_use]
    pub fn percent(self) -> u8 {
        (self.0 * 100.0).round() as u8
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::FULL
    }
}

/// One scroll observation of the screen hosting the widget, in rows.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScrollSample {
    /// First visible row of the document.
    pub position: u32,
    pub viewport_height: u32,
    pub document_height: u32,
}

/// Everything the widget reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    /// The hosting screen was mounted: open the track and try to autoplay.
    Mount,
    /// The hosting screen scrolled.
    Scroll(ScrollSample),
    /// Periodic progress signal from the playback resource.
    TimeUpdate {
        position: Duration,
        /// `None` until the track's metadata is available.
        duration: Option<Duration>,
    },
    /// The track reached its natural end.
    Ended,
    /// The play/pause control was activated.
    ToggleRequested,
    VolumeChanged(Volume),
    ToggleMute,
    /// Reveal or hide the volume slider.
    ToggleVolumeSlider,
    /// The screen now shows a different painting; the path identifies the track.
    TrackChanged(PathBuf),
}

/// What changed as a result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    StatusChanged(PlaybackStatus),
    /// Autoplay was refused; the widget waits for an explicit play.
    AutoplayBlocked,
    ProgressUpdated,
    VisibilityChanged(bool),
    VolumeChanged(Volume),
    SliderToggled(bool),
}

/// Snapshot of the widget state used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    pub status: PlaybackStatus,
    /// Elapsed playback time.
    pub position: Duration,
    /// Total length, `Duration::ZERO` until known.
    pub duration: Duration,
    pub volume: Volume,
    /// Whether the transport bar is shown.
    pub visible: bool,
    /// Autoplay was refused and nothing has been started since.
    pub needs_gesture: bool,
}

impl PlaybackState {
    pub fn new(volume: Volume, visible: bool) -> Self {
        Self {
            status: PlaybackStatus::Idle,
            position: Duration::ZERO,
            duration: Duration::ZERO,
            volume,
            visible,
            needs_gesture: false,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.status == PlaybackStatus::Playing
    }
}
