//! Progress arithmetic for the transport bar.

use std::fmt;
use std::time::Duration;

/// Format a `Duration` as `MM:SS`.
pub fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Fraction of the track already played, `0.0` while the duration is unknown.
pub fn progress_ratio(position: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 0.0;
    }
    (position.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

/// The right-hand time label of the transport bar.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TimeLabel {
    /// Time left while the track is somewhere in the middle.
    Remaining(Duration),
    /// Elapsed time otherwise (zero once the end is reached).
    Elapsed(Duration),
}

impl fmt::Display for TimeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeLabel::Remaining(d) => write!(f, "-{}", format_mmss(*d)),
            TimeLabel::Elapsed(d) => f.write_str(&format_mmss(*d)),
        }
    }
}

/// `duration - position` while `0 < position < duration`; otherwise the
/// position, or zero once playback has reached a known duration.
pub fn remaining_display(position: Duration, duration: Duration) -> TimeLabel {
    if !position.is_zero() && position < duration {
        TimeLabel::Remaining(duration - position)
    } else if !duration.is_zero() && position >= duration {
        TimeLabel::Elapsed(Duration::ZERO)
    } else {
        TimeLabel::Elapsed(position)
    }
}
