use std::time::{Duration, Instant};

/// `power3.out`-style easing: fast start, long soft landing.
pub fn ease_out_quart(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

/// A one-shot entrance animation.
///
/// Nothing is shown until the animation is triggered; once triggered it runs
/// to completion and can never be restarted.
#[derive(Debug, Clone, Copy)]
pub struct Reveal {
    started_at: Option<Instant>,
    delay: Duration,
    duration: Duration,
}

impl Reveal {
    pub fn new(duration: Duration) -> Self {
        Self {
            started_at: None,
            delay: Duration::ZERO,
            duration,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Start the animation at `now`. Returns false if it was already started.
    pub fn trigger(&mut self, now: Instant) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now);
        true
    }

    pub fn is_triggered(&self) -> bool {
        self.started_at.is_some()
    }

    /// Eased progress in `0.0..=1.0`.
    pub fn progress(&self, now: Instant) -> f32 {
        let Some(start) = self.started_at else {
            return 0.0;
        };
        let elapsed = now.saturating_duration_since(start);
        if elapsed <= self.delay {
            return 0.0;
        }
        if self.duration.is_zero() {
            return 1.0;
        }
        let t = (elapsed - self.delay).as_secs_f32() / self.duration.as_secs_f32();
        ease_out_quart(t)
    }

    pub fn is_done(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Position and opacity of an element that rises `travel` rows into place.
    pub fn entrance(&self, now: Instant, travel: u16) -> Entrance {
        Entrance::from_progress(self.progress(now), travel)
    }
}

/// How far along an element is in its entrance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    /// 0.0 = invisible, 1.0 = fully drawn.
    pub opacity: f32,
    /// Rows the element is still displaced downwards.
    pub offset: u16,
}

impl Entrance {
    pub const SETTLED: Entrance = Entrance {
        opacity: 1.0,
        offset: 0,
    };

    pub fn from_progress(progress: f32, travel: u16) -> Self {
        let p = progress.clamp(0.0, 1.0);
        Self {
            opacity: p,
            offset: ((1.0 - p) * travel as f32).round() as u16,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.opacity <= 0.0
    }

    /// Drawn, but still faint.
    pub fn is_faint(&self) -> bool {
        self.opacity < 0.6
    }
}
