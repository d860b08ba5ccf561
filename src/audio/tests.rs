use super::*;
use super::time::{TimeLabel, progress_ratio, remaining_display};
use super::visibility::ScrollVisibility;
use crate::error::PlaybackError;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

/// Everything the fake resources were asked to do, in order.
#[derive(Debug, Default)]
struct Log {
    calls: Vec<String>,
    /// Paths whose resources are still alive.
    live: Vec<PathBuf>,
}

#[derive(Clone, Default)]
struct Shared {
    log: Rc<RefCell<Log>>,
    /// Position/duration/finished reported by every resource.
    position: Rc<RefCell<Duration>>,
    duration: Rc<RefCell<Option<Duration>>>,
    finished: Rc<RefCell<bool>>,
    fail_open: Rc<RefCell<bool>>,
    fail_play: Rc<RefCell<bool>>,
}

impl Shared {
    fn calls(&self) -> Vec<String> {
        self.log.borrow().calls.clone()
    }

    fn live(&self) -> Vec<PathBuf> {
        self.log.borrow().live.clone()
    }
}

struct FakeBackend(Shared);

struct FakeResource {
    path: PathBuf,
    shared: Shared,
}

impl PlaybackBackend for FakeBackend {
    fn open(&self, path: &Path) -> Result<Box<dyn PlaybackResource>, PlaybackError> {
        let mut log = self.0.log.borrow_mut();
        log.calls.push(format!("open {}", path.display()));
        if *self.0.fail_open.borrow() {
            return Err(PlaybackError::Unavailable("test".into()));
        }
        log.live.push(path.to_path_buf());
        Ok(Box::new(FakeResource {
            path: path.to_path_buf(),
            shared: self.0.clone(),
        }))
    }
}

impl PlaybackResource for FakeResource {
    fn play(&mut self) -> Result<(), PlaybackError> {
        self.shared.log.borrow_mut().calls.push("play".into());
        if *self.shared.fail_play.borrow() {
            return Err(PlaybackError::ResumeFailed("refused".into()));
        }
        *self.shared.finished.borrow_mut() = false;
        Ok(())
    }

    fn pause(&mut self) {
        self.shared.log.borrow_mut().calls.push("pause".into());
    }

    fn position(&self) -> Duration {
        *self.shared.position.borrow()
    }

    fn duration(&self) -> Option<Duration> {
        *self.shared.duration.borrow()
    }

    fn is_finished(&self) -> bool {
        *self.shared.finished.borrow()
    }

    fn set_volume(&mut self, volume: Volume) {
        self.shared
            .log
            .borrow_mut()
            .calls
            .push(format!("volume {}", volume.percent()));
    }
}

impl Drop for FakeResource {
    fn drop(&mut self) {
        let mut log = self.shared.log.borrow_mut();
        log.calls.push(format!("release {}", self.path.display()));
        log.live.retain(|p| p != &self.path);
    }
}

fn mount_with(shared: &Shared, options: WidgetOptions) -> AudioWidget {
    AudioWidget::mount(
        Rc::new(FakeBackend(shared.clone())),
        PathBuf::from("sounds/a.mp3"),
        options,
    )
}

fn mount(shared: &Shared) -> AudioWidget {
    mount_with(shared, WidgetOptions::default())
}

fn with_volume_control() -> WidgetOptions {
    WidgetOptions {
        volume_control: true,
        default_volume: Volume::new(0.5),
        ..WidgetOptions::default()
    }
}

fn secs(s: u64) -> Duration {
    Duration::from_secs(s)
}

#[test]
fn mount_autoplays_when_allowed() {
    let shared = Shared::default();
    let widget = mount(&shared);

    assert_eq!(widget.state().status, PlaybackStatus::Playing);
    assert!(!widget.state().needs_gesture);
    assert_eq!(
        shared.calls(),
        vec!["open sounds/a.mp3", "volume 100", "play"]
    );
}

#[test]
fn blocked_autoplay_waits_for_a_gesture() {
    let shared = Shared::default();
    *shared.fail_play.borrow_mut() = true;
    let widget = mount(&shared);

    assert_eq!(widget.state().status, PlaybackStatus::Idle);
    assert!(widget.state().needs_gesture);
    // The resource stays open so a later toggle can start it.
    assert!(widget.has_resource());
}

#[test]
fn disabled_autoplay_does_not_start_the_resource() {
    let shared = Shared::default();
    let widget = mount_with(
        &shared,
        WidgetOptions {
            autoplay: false,
            ..WidgetOptions::default()
        },
    );

    assert_eq!(widget.state().status, PlaybackStatus::Idle);
    assert!(widget.state().needs_gesture);
    assert!(!shared.calls().contains(&"play".to_string()));
}

#[test]
fn unavailable_output_degrades_to_idle() {
    let shared = Shared::default();
    *shared.fail_open.borrow_mut() = true;
    let mut widget = mount(&shared);

    assert_eq!(widget.state().status, PlaybackStatus::Idle);
    assert!(widget.state().needs_gesture);
    assert!(!widget.has_resource());

    // Manual start retries the open and fails quietly.
    assert_eq!(widget.handle(WidgetEvent::ToggleRequested), Effect::None);
    assert_eq!(widget.state().status, PlaybackStatus::Idle);
}

#[test]
fn gesture_after_blocked_autoplay_starts_playback() {
    let shared = Shared::default();
    *shared.fail_play.borrow_mut() = true;
    let mut widget = mount(&shared);

    *shared.fail_play.borrow_mut() = false;
    let effect = widget.handle(WidgetEvent::ToggleRequested);
    assert_eq!(effect, Effect::StatusChanged(PlaybackStatus::Playing));
    assert!(!widget.state().needs_gesture);
}

#[test]
fn toggle_reverses_playing_and_paused() {
    let shared = Shared::default();
    let mut widget = mount(&shared);

    widget.handle(WidgetEvent::ToggleRequested);
    assert_eq!(widget.state().status, PlaybackStatus::Paused);
    assert_eq!(shared.calls().last().map(String::as_str), Some("pause"));

    widget.handle(WidgetEvent::ToggleRequested);
    assert_eq!(widget.state().status, PlaybackStatus::Playing);
    assert_eq!(shared.calls().last().map(String::as_str), Some("play"));
}

#[test]
fn pausing_keeps_the_position() {
    let shared = Shared::default();
    let mut widget = mount(&shared);

    widget.handle(WidgetEvent::TimeUpdate {
        position: secs(42),
        duration: Some(secs(200)),
    });
    widget.handle(WidgetEvent::ToggleRequested);
    *shared.position.borrow_mut() = secs(0);
    widget.poll();

    assert_eq!(widget.state().position, secs(42));
}

#[test]
fn idle_polls_report_nothing_until_the_duration_changes() {
    let shared = Shared::default();
    *shared.duration.borrow_mut() = Some(secs(200));
    let mut widget = mount(&shared);
    widget.handle(WidgetEvent::ToggleRequested);
    assert_eq!(widget.state().status, PlaybackStatus::Paused);

    assert_eq!(widget.poll(), Effect::None);
    assert_eq!(widget.poll(), Effect::None);

    *shared.duration.borrow_mut() = Some(secs(240));
    assert_eq!(widget.poll(), Effect::ProgressUpdated);
    assert_eq!(widget.state().duration, secs(240));
    assert_eq!(widget.poll(), Effect::None);
}

#[test]
fn failed_resume_keeps_paused_state() {
    let shared = Shared::default();
    let mut widget = mount(&shared);
    widget.handle(WidgetEvent::ToggleRequested);

    *shared.fail_play.borrow_mut() = true;
    let effect = widget.handle(WidgetEvent::ToggleRequested);

    assert_eq!(effect, Effect::None);
    assert_eq!(widget.state().status, PlaybackStatus::Paused);
}

#[test]
fn progress_ratio_and_remaining_label() {
    let shared = Shared::default();
    let mut widget = mount(&shared);

    widget.handle(WidgetEvent::TimeUpdate {
        position: secs(50),
        duration: Some(secs(200)),
    });

    assert_eq!(widget.progress_ratio(), 0.25);
    assert_eq!(widget.remaining_display(), TimeLabel::Remaining(secs(150)));
    assert_eq!(format_mmss(secs(150)), "02:30");
    assert_eq!(widget.remaining_display().to_string(), "-02:30");
}

#[test]
fn unknown_duration_means_zero_progress() {
    assert_eq!(progress_ratio(secs(30), Duration::ZERO), 0.0);
    assert_eq!(progress_ratio(Duration::ZERO, Duration::ZERO), 0.0);

    let shared = Shared::default();
    let mut widget = mount(&shared);
    widget.handle(WidgetEvent::TimeUpdate {
        position: secs(30),
        duration: None,
    });
    assert_eq!(widget.state().duration, Duration::ZERO);
    assert_eq!(widget.progress_ratio(), 0.0);
}

#[test]
fn remaining_label_outside_the_middle_of_the_track() {
    assert_eq!(
        remaining_display(Duration::ZERO, secs(200)),
        TimeLabel::Elapsed(Duration::ZERO)
    );
    assert_eq!(
        remaining_display(secs(200), secs(200)),
        TimeLabel::Elapsed(Duration::ZERO)
    );
    assert_eq!(
        remaining_display(secs(250), secs(200)),
        TimeLabel::Elapsed(Duration::ZERO)
    );
    assert_eq!(remaining_display(secs(0), secs(0)).to_string(), "00:00");
    // Unknown length: keep counting up.
    assert_eq!(
        remaining_display(secs(30), Duration::ZERO),
        TimeLabel::Elapsed(secs(30))
    );
}

#[test]
fn format_mmss_pads_minutes_and_seconds() {
    assert_eq!(format_mmss(secs(0)), "00:00");
    assert_eq!(format_mmss(secs(59)), "00:59");
    assert_eq!(format_mmss(secs(61)), "01:01");
    assert_eq!(format_mmss(Duration::from_millis(150_900)), "02:30");
}

#[test]
fn duration_is_picked_up_when_metadata_arrives() {
    let shared = Shared::default();
    let mut widget = mount(&shared);
    assert_eq!(widget.state().duration, Duration::ZERO);

    *shared.position.borrow_mut() = secs(3);
    *shared.duration.borrow_mut() = Some(secs(90));
    assert_eq!(widget.poll(), Effect::ProgressUpdated);

    assert_eq!(widget.state().duration, secs(90));
    assert_eq!(widget.state().position, secs(3));
}

#[test]
fn position_never_exceeds_known_duration() {
    let shared = Shared::default();
    let mut widget = mount(&shared);
    widget.handle(WidgetEvent::TimeUpdate {
        position: secs(500),
        duration: Some(secs(200)),
    });
    assert_eq!(widget.state().position, secs(200));
}

#[test]
fn ending_forces_the_bar_visible() {
    let shared = Shared::default();
    let mut widget = mount(&shared);

    // Scroll down far enough to hide the bar.
    widget.handle(WidgetEvent::Scroll(ScrollSample {
        position: 10,
        viewport_height: 20,
        document_height: 200,
    }));
    assert!(!widget.state().visible);

    *shared.duration.borrow_mut() = Some(secs(200));
    *shared.finished.borrow_mut() = true;
    let effect = widget.poll();

    assert_eq!(effect, Effect::StatusChanged(PlaybackStatus::Ended));
    assert_eq!(widget.state().status, PlaybackStatus::Ended);
    assert!(widget.state().visible);
    assert_eq!(widget.state().position, secs(200));
    assert_eq!(widget.remaining_display(), TimeLabel::Elapsed(Duration::ZERO));
}

#[test]
fn rewind_on_end_resets_the_displayed_position() {
    let shared = Shared::default();
    let mut widget = mount_with(
        &shared,
        WidgetOptions {
            rewind_on_end: true,
            ..WidgetOptions::default()
        },
    );
    widget.handle(WidgetEvent::TimeUpdate {
        position: secs(199),
        duration: Some(secs(200)),
    });
    widget.handle(WidgetEvent::Ended);
    assert_eq!(widget.state().position, Duration::ZERO);
}

#[test]
fn toggle_after_end_restarts_from_the_top() {
    let shared = Shared::default();
    let mut widget = mount(&shared);
    widget.handle(WidgetEvent::TimeUpdate {
        position: secs(200),
        duration: Some(secs(200)),
    });
    widget.handle(WidgetEvent::Ended);

    let effect = widget.handle(WidgetEvent::ToggleRequested);
    assert_eq!(effect, Effect::StatusChanged(PlaybackStatus::Playing));
    assert_eq!(widget.state().position, Duration::ZERO);
}

#[test]
fn bottom_proximity_forces_visible() {
    let mut v = ScrollVisibility::new(100, 100);
    // Scrolling down, but 800 + 1150 = 1950 >= 2000 - 100.
    v.sample(ScrollSample {
        position: 1000,
        viewport_height: 800,
        document_height: 2000,
    });
    assert!(v.sample(ScrollSample {
        position: 1150,
        viewport_height: 800,
        document_height: 2000,
    }));
}

#[test]
fn scrolling_down_past_threshold_hides() {
    let mut v = ScrollVisibility::new(100, 100);
    let at = |position| ScrollSample {
        position,
        viewport_height: 800,
        document_height: 5000,
    };

    assert!(v.sample(at(50)));
    assert!(!v.sample(at(250)));

    // Scrolling back up shows it again.
    assert!(v.sample(at(200)));
}

#[test]
fn scrolling_down_near_the_top_keeps_visible() {
    let mut v = ScrollVisibility::new(100, 100);
    let at = |position| ScrollSample {
        position,
        viewport_height: 800,
        document_height: 5000,
    };
    assert!(v.sample(at(20)));
    assert!(v.sample(at(90)));
}

#[test]
fn widget_reports_visibility_changes_only() {
    let shared = Shared::default();
    let mut widget = mount_with(
        &shared,
        WidgetOptions {
            bottom_threshold: 100,
            hide_threshold: 100,
            ..WidgetOptions::default()
        },
    );
    let at = |position| {
        WidgetEvent::Scroll(ScrollSample {
            position,
            viewport_height: 800,
            document_height: 5000,
        })
    };

    assert_eq!(widget.handle(at(50)), Effect::None);
    assert_eq!(widget.handle(at(250)), Effect::VisibilityChanged(false));
    assert_eq!(widget.handle(at(400)), Effect::None);
    assert_eq!(widget.handle(at(300)), Effect::VisibilityChanged(true));
}

#[test]
fn hidden_widget_keeps_playing() {
    let shared = Shared::default();
    let mut widget = mount(&shared);
    widget.handle(WidgetEvent::Scroll(ScrollSample {
        position: 10,
        viewport_height: 20,
        document_height: 200,
    }));

    assert!(!widget.state().visible);
    assert!(widget.state().is_playing());
    assert_eq!(shared.live(), vec![PathBuf::from("sounds/a.mp3")]);
}

#[test]
fn start_hidden_option_is_respected() {
    let shared = Shared::default();
    let widget = mount_with(
        &shared,
        WidgetOptions {
            start_visible: false,
            ..WidgetOptions::default()
        },
    );
    assert!(!widget.state().visible);
}

#[test]
fn track_change_releases_the_old_resource_and_autoplays_again() {
    let shared = Shared::default();
    let mut widget = mount(&shared);
    widget.handle(WidgetEvent::TimeUpdate {
        position: secs(12),
        duration: Some(secs(60)),
    });

    let effect = widget.handle(WidgetEvent::TrackChanged(PathBuf::from("sounds/b.mp3")));

    assert_eq!(effect, Effect::StatusChanged(PlaybackStatus::Playing));
    assert_eq!(widget.source(), Path::new("sounds/b.mp3"));
    assert_eq!(widget.state().position, Duration::ZERO);
    assert_eq!(widget.state().duration, Duration::ZERO);
    assert_eq!(shared.live(), vec![PathBuf::from("sounds/b.mp3")]);

    let calls = shared.calls();
    let released = calls.iter().position(|c| c == "release sounds/a.mp3").unwrap();
    let reopened = calls.iter().position(|c| c == "open sounds/b.mp3").unwrap();
    assert!(released < reopened);
}

#[test]
fn track_change_shows_the_bar_again() {
    let shared = Shared::default();
    let mut widget = mount(&shared);
    widget.handle(WidgetEvent::Scroll(ScrollSample {
        position: 15,
        viewport_height: 20,
        document_height: 200,
    }));
    assert!(!widget.state().visible);

    widget.handle(WidgetEvent::TrackChanged(PathBuf::from("sounds/b.mp3")));
    assert!(widget.state().visible);
}

#[test]
fn track_change_with_refused_start_reports_blocked_autoplay() {
    let shared = Shared::default();
    let mut widget = mount(&shared);

    *shared.fail_play.borrow_mut() = true;
    let effect = widget.handle(WidgetEvent::TrackChanged(PathBuf::from("sounds/b.mp3")));

    assert_eq!(effect, Effect::AutoplayBlocked);
    assert_eq!(widget.state().status, PlaybackStatus::Idle);
    assert!(widget.state().needs_gesture);
    assert!(widget.has_resource());
}

#[test]
fn same_track_is_not_reloaded() {
    let shared = Shared::default();
    let mut widget = mount(&shared);
    let before = shared.calls().len();

    let effect = widget.handle(WidgetEvent::TrackChanged(PathBuf::from("sounds/a.mp3")));
    assert_eq!(effect, Effect::None);
    assert_eq!(shared.calls().len(), before);
}

#[test]
fn dropping_the_widget_releases_the_resource() {
    let shared = Shared::default();
    let widget = mount(&shared);
    assert_eq!(shared.live().len(), 1);

    drop(widget);
    assert!(shared.live().is_empty());
}

#[test]
fn volume_changes_apply_immediately_and_clamp() {
    let shared = Shared::default();
    let mut widget = mount_with(&shared, with_volume_control());
    assert_eq!(widget.state().volume, Volume::new(0.5));

    let effect = widget.handle(WidgetEvent::VolumeChanged(Volume::new(1.7)));
    assert_eq!(effect, Effect::VolumeChanged(Volume::FULL));
    assert_eq!(shared.calls().last().map(String::as_str), Some("volume 100"));

    widget.handle(WidgetEvent::VolumeChanged(Volume::new(-3.0)));
    assert!(widget.state().volume.is_muted());
}

#[test]
fn nudge_volume_uses_the_configured_step() {
    let shared = Shared::default();
    let mut widget = mount_with(
        &shared,
        WidgetOptions {
            volume_step: 0.25,
            ..with_volume_control()
        },
    );
    widget.nudge_volume(true);
    assert_eq!(widget.state().volume, Volume::new(0.75));
    widget.nudge_volume(false);
    widget.nudge_volume(false);
    assert_eq!(widget.state().volume, Volume::new(0.25));
}

#[test]
fn mute_restores_previous_level() {
    let shared = Shared::default();
    let mut widget = mount_with(&shared, with_volume_control());
    widget.handle(WidgetEvent::VolumeChanged(Volume::new(0.8)));

    widget.handle(WidgetEvent::ToggleMute);
    assert!(widget.state().volume.is_muted());

    widget.handle(WidgetEvent::ToggleMute);
    assert_eq!(widget.state().volume, Volume::new(0.8));
}

#[test]
fn unmuting_a_zero_default_goes_to_full() {
    let shared = Shared::default();
    let mut widget = mount_with(
        &shared,
        WidgetOptions {
            default_volume: Volume::MUTED,
            ..with_volume_control()
        },
    );
    widget.handle(WidgetEvent::ToggleMute);
    assert_eq!(widget.state().volume, Volume::FULL);
}

#[test]
fn volume_events_are_ignored_without_the_control() {
    let shared = Shared::default();
    let mut widget = mount(&shared);

    assert_eq!(
        widget.handle(WidgetEvent::VolumeChanged(Volume::new(0.1))),
        Effect::None
    );
    assert_eq!(widget.handle(WidgetEvent::ToggleMute), Effect::None);
    assert_eq!(widget.handle(WidgetEvent::ToggleVolumeSlider), Effect::None);
    assert_eq!(widget.state().volume, Volume::FULL);
}

#[test]
fn volume_slider_is_revealed_on_demand() {
    let shared = Shared::default();
    let mut widget = mount_with(&shared, with_volume_control());
    assert!(!widget.slider_revealed());

    assert_eq!(
        widget.handle(WidgetEvent::ToggleVolumeSlider),
        Effect::SliderToggled(true)
    );
    assert!(widget.slider_revealed());
}

#[test]
fn volume_new_clamps_and_rejects_nan() {
    assert_eq!(Volume::new(2.0), Volume::FULL);
    assert_eq!(Volume::new(-1.0), Volume::MUTED);
    assert_eq!(Volume::new(f32::NAN), Volume::MUTED);
    assert_eq!(Volume::new(0.5).percent(), 50);
}
