use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

use log::{debug, info, warn};

use crate::error::PlaybackError;

use super::resource::{PlaybackBackend, PlaybackResource};
use super::time::{TimeLabel, progress_ratio, remaining_display};
use super::types::{Effect, PlaybackState, PlaybackStatus, Volume, WidgetEvent};
use super::visibility::ScrollVisibility;

/// Behavior knobs of the widget, usually derived from the settings.
#[derive(Debug, Clone)]
pub struct WidgetOptions {
    pub autoplay: bool,
    pub default_volume: Volume,
    pub volume_step: f32,
    /// Whether the volume slider and mute toggle exist at all.
    pub volume_control: bool,
    pub start_visible: bool,
    /// Show zero instead of the full length after the track ended.
    pub rewind_on_end: bool,
    pub bottom_threshold: u32,
    pub hide_threshold: u32,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            autoplay: true,
            default_volume: Volume::FULL,
            volume_step: 0.05,
            volume_control: false,
            start_visible: true,
            rewind_on_end: false,
            bottom_threshold: 2,
            hide_threshold: 3,
        }
    }
}

/// Transport controls for one painting screen.
///
/// Owns the playback resource of the current track; dropping the widget
/// releases it.
pub struct AudioWidget {
    backend: Rc<dyn PlaybackBackend>,
    options: WidgetOptions,
    source: PathBuf,
    resource: Option<Box<dyn PlaybackResource>>,
    state: PlaybackState,
    visibility: ScrollVisibility,
    /// Volume to restore when unmuting.
    unmuted: Option<Volume>,
    slider_revealed: bool,
}

impl AudioWidget {
    /// Create the widget for `source` and attempt autoplay.
    pub fn mount(backend: Rc<dyn PlaybackBackend>, source: PathBuf, options: WidgetOptions) -> Self {
        let mut widget = Self {
            state: PlaybackState::new(options.default_volume, options.start_visible),
            visibility: ScrollVisibility::new(options.bottom_threshold, options.hide_threshold),
            backend,
            options,
            source,
            resource: None,
            unmuted: None,
            slider_revealed: false,
        };
        widget.handle(WidgetEvent::Mount);
        widget
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn options(&self) -> &WidgetOptions {
        &self.options
    }

    pub fn slider_revealed(&self) -> bool {
        self.slider_revealed
    }

    pub fn has_resource(&self) -> bool {
        self.resource.is_some()
    }

    pub fn progress_ratio(&self) -> f64 {
        progress_ratio(self.state.position, self.state.duration)
    }

    pub fn remaining_display(&self) -> TimeLabel {
        remaining_display(self.state.position, self.state.duration)
    }

    /// The single transition function of the widget.
    pub fn handle(&mut self, event: WidgetEvent) -> Effect {
        match event {
            WidgetEvent::Mount => self.on_mount(),
            WidgetEvent::Scroll(sample) => {
                let visible = self.visibility.sample(sample);
                self.set_visible(visible)
            }
            WidgetEvent::TimeUpdate { position, duration } => self.on_time_update(position, duration),
            WidgetEvent::Ended => self.on_ended(),
            WidgetEvent::ToggleRequested => self.on_toggle(),
            WidgetEvent::VolumeChanged(volume) => self.on_volume(volume),
            WidgetEvent::ToggleMute => self.on_toggle_mute(),
            WidgetEvent::ToggleVolumeSlider => {
                if !self.options.volume_control {
                    return Effect::None;
                }
                self.slider_revealed = !self.slider_revealed;
                Effect::SliderToggled(self.slider_revealed)
            }
            WidgetEvent::TrackChanged(path) => self.on_track_changed(path),
        }
    }

    /// Sample the resource and feed the resulting progress / end events.
    ///
    /// Called once per event loop tick.
    pub fn poll(&mut self) -> Effect {
        let Some(resource) = self.resource.as_ref() else {
            return Effect::None;
        };
        let position = resource.position();
        let duration = resource.duration();
        let finished = resource.is_finished();

        if self.state.status != PlaybackStatus::Playing {
            // Pick up metadata that arrived while paused, but leave the
            // position alone.
            let known = self.state.duration;
            self.on_time_update(self.state.position, duration);
            return if self.state.duration == known {
                Effect::None
            } else {
                Effect::ProgressUpdated
            };
        }

        if finished {
            self.on_time_update(position, duration);
            return self.handle(WidgetEvent::Ended);
        }
        self.handle(WidgetEvent::TimeUpdate { position, duration })
    }

    /// Volume one step up or down, for the `+` / `-` keys.
    pub fn nudge_volume(&mut self, up: bool) -> Effect {
        let step = self.options.volume_step;
        let volume = if up {
            self.state.volume.increase(step)
        } else {
            self.state.volume.decrease(step)
        };
        self.handle(WidgetEvent::VolumeChanged(volume))
    }

    fn on_mount(&mut self) -> Effect {
        if self.resource.is_none() {
            match self.backend.open(&self.source) {
                Ok(mut resource) => {
                    resource.set_volume(self.state.volume);
                    self.state.duration = resource.duration().unwrap_or(Duration::ZERO);
                    self.resource = Some(resource);
                }
                Err(e) => {
                    warn!("{e}; waiting for an explicit play");
                    return self.block_autoplay();
                }
            }
        }

        match self.autoplay() {
            Ok(()) => Effect::StatusChanged(PlaybackStatus::Playing),
            Err(e) => {
                info!("{e}, {:?} waits for an explicit play", self.source);
                self.block_autoplay()
            }
        }
    }

    /// Start without a user gesture. Any refusal counts as blocked.
    fn autoplay(&mut self) -> Result<(), PlaybackError> {
        if !self.options.autoplay {
            return Err(PlaybackError::Blocked("disabled in settings".into()));
        }
        self.start()
            .map_err(|e| PlaybackError::Blocked(e.to_string()))
    }

    fn block_autoplay(&mut self) -> Effect {
        self.state.status = PlaybackStatus::Idle;
        self.state.needs_gesture = true;
        Effect::AutoplayBlocked
    }

    /// Open the resource if needed and start it.
    fn start(&mut self) -> Result<(), PlaybackError> {
        if self.resource.is_none() {
            let mut resource = self.backend.open(&self.source)?;
            resource.set_volume(self.state.volume);
            if let Some(d) = resource.duration() {
                self.state.duration = d;
            }
            self.resource = Some(resource);
        }

        if let Some(resource) = self.resource.as_mut() {
            resource.play()?;
        }
        self.state.status = PlaybackStatus::Playing;
        self.state.needs_gesture = false;
        Ok(())
    }

    fn on_toggle(&mut self) -> Effect {
        match self.state.status {
            PlaybackStatus::Playing => {
                if let Some(resource) = self.resource.as_mut() {
                    resource.pause();
                }
                self.state.status = PlaybackStatus::Paused;
                Effect::StatusChanged(PlaybackStatus::Paused)
            }
            PlaybackStatus::Idle | PlaybackStatus::Paused | PlaybackStatus::Ended => {
                let restarting = self.state.status == PlaybackStatus::Ended;
                match self.start() {
                    Ok(()) => {
                        if restarting {
                            self.state.position = Duration::ZERO;
                        }
                        Effect::StatusChanged(PlaybackStatus::Playing)
                    }
                    Err(e) => {
                        let failed = if matches!(e, PlaybackError::ResumeFailed(_)) {
                            e
                        } else {
                            PlaybackError::ResumeFailed(e.to_string())
                        };
                        warn!("{failed}");
                        Effect::None
                    }
                }
            }
        }
    }

    fn on_time_update(&mut self, position: Duration, duration: Option<Duration>) -> Effect {
        if let Some(d) = duration.filter(|d| !d.is_zero()) {
            self.state.duration = d;
        }

        self.state.position = if self.state.duration.is_zero() {
            position
        } else {
            position.min(self.state.duration)
        };
        Effect::ProgressUpdated
    }

    fn on_ended(&mut self) -> Effect {
        self.state.status = PlaybackStatus::Ended;
        self.state.visible = true;
        self.state.position = if self.options.rewind_on_end {
            Duration::ZERO
        } else {
            self.state.duration
        };
        debug!("{:?} ended", self.source);
        Effect::StatusChanged(PlaybackStatus::Ended)
    }

    fn on_volume(&mut self, volume: Volume) -> Effect {
        if !self.options.volume_control {
            return Effect::None;
        }
        self.unmuted = None;
        self.apply_volume(volume)
    }

    fn on_toggle_mute(&mut self) -> Effect {
        if !self.options.volume_control {
            return Effect::None;
        }

        if self.state.volume.is_muted() {
            let restore = self
                .unmuted
                .take()
                .filter(|v| !v.is_muted())
                .unwrap_or(if self.options.default_volume.is_muted() {
                    Volume::FULL
                } else {
                    self.options.default_volume
                });
            self.apply_volume(restore)
        } else {
            self.unmuted = Some(self.state.volume);
            self.apply_volume(Volume::MUTED)
        }
    }

    fn apply_volume(&mut self, volume: Volume) -> Effect {
        self.state.volume = volume;
        if let Some(resource) = self.resource.as_mut() {
            resource.set_volume(volume);
        }
        Effect::VolumeChanged(volume)
    }

    fn on_track_changed(&mut self, path: PathBuf) -> Effect {
        if path == self.source {
            return Effect::None;
        }

        debug!("track changed {:?} -> {:?}", self.source, path);
        // Dropping the old resource stops it before the new one is opened.
        self.resource = None;
        self.source = path;
        self.state.status = PlaybackStatus::Idle;
        self.state.position = Duration::ZERO;
        self.state.duration = Duration::ZERO;
        self.state.needs_gesture = false;
        self.state.visible = self.options.start_visible;
        self.visibility.reset();

        self.on_mount()
    }

    fn set_visible(&mut self, visible: bool) -> Effect {
        if self.state.visible == visible {
            return Effect::None;
        }
        self.state.visible = visible;
        Effect::VisibilityChanged(visible)
    }
}

impl Drop for AudioWidget {
    fn drop(&mut self) {
        if self.resource.take().is_some() {
            debug!("unmounted player for {:?}", self.source);
        }
    }
}
