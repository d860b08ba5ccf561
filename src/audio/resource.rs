use std::path::Path;
use std::time::Duration;

use crate::error::PlaybackError;

use super::types::Volume;

/// A host audio handle bound to one track.
///
/// Dropping the resource releases it and silences the track.
pub trait PlaybackResource {
    /// Start or resume playback. A finished track starts over.
    fn play(&mut self) -> Result<(), PlaybackError>;

    /// Pause playback, keeping the position.
    fn pause(&mut self);

    /// Elapsed playback time.
    fn position(&self) -> Duration;

    /// Total length, if the track's metadata could be read.
    fn duration(&self) -> Option<Duration>;

    /// True once the track has played to its end.
    fn is_finished(&self) -> bool;

    /// Apply a volume level immediately.
    fn set_volume(&mut self, volume: Volume);
}

/// Opens playback resources for tracks.
pub trait PlaybackBackend {
    fn open(&self, path: &Path) -> Result<Box<dyn PlaybackResource>, PlaybackError>;
}
