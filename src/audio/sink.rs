//! rodio-backed playback resources.
//!
//! The backend owns the output stream for the whole session; every painting
//! screen gets its own paused `Sink` fed from the track file.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use lofty::file::AudioFile;
use log::{debug, warn};
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};

use crate::error::PlaybackError;

use super::resource::{PlaybackBackend, PlaybackResource};
use super::types::Volume;

/// Playback backend on the default audio output device.
pub struct RodioBackend {
    stream: Option<OutputStream>,
}

impl RodioBackend {
    /// Open the default output device. A missing device is not fatal: every
    /// later `open` reports [`PlaybackError::Unavailable`] instead.
    pub fn open_default() -> Self {
        match OutputStreamBuilder::open_default_stream() {
            Ok(mut stream) => {
                // rodio logs to stderr when the stream is dropped, which would
                // scribble over the terminal UI on exit.
                stream.log_on_drop(false);
                Self {
                    stream: Some(stream),
                }
            }
            Err(e) => {
                warn!("no audio output device, playback disabled: {e}");
                Self { stream: None }
            }
        }
    }
}

impl PlaybackBackend for RodioBackend {
    fn open(&self, path: &Path) -> Result<Box<dyn PlaybackResource>, PlaybackError> {
        let Some(stream) = self.stream.as_ref() else {
            return Err(PlaybackError::Unavailable(
                "no audio output device".to_string(),
            ));
        };

        let source = decode(path)?;
        let duration = probe_duration(path).or_else(|| source.total_duration());

        let sink = Sink::connect_new(stream.mixer());
        sink.pause();
        sink.append(source);

        debug!("opened {path:?} (duration {duration:?})");
        Ok(Box::new(RodioResource {
            sink,
            path: path.to_path_buf(),
            duration,
        }))
    }
}

/// One paused-or-playing track on the shared output stream.
pub struct RodioResource {
    sink: Sink,
    path: PathBuf,
    duration: Option<Duration>,
}

impl PlaybackResource for RodioResource {
    fn play(&mut self) -> Result<(), PlaybackError> {
        if self.sink.empty() {
            // The previous pass drained the queue; start over from the top.
            let source =
                decode(&self.path).map_err(|e| PlaybackError::ResumeFailed(e.to_string()))?;
            self.sink.append(source);
        }
        self.sink.play();
        Ok(())
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn position(&self) -> Duration {
        self.sink.get_pos()
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn is_finished(&self) -> bool {
        self.sink.empty()
    }

    fn set_volume(&mut self, volume: Volume) {
        self.sink.set_volume(volume.value());
    }
}

impl Drop for RodioResource {
    fn drop(&mut self) {
        self.sink.stop();
        debug!("released {:?}", self.path);
    }
}

fn decode(path: &Path) -> Result<Decoder<BufReader<File>>, PlaybackError> {
    let file = File::open(path).map_err(|source| PlaybackError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    Decoder::new(BufReader::new(file)).map_err(|e| PlaybackError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Read the track length from its tags/properties.
fn probe_duration(path: &Path) -> Option<Duration> {
    let tagged = lofty::read_from_path(path).ok()?;
    let duration = tagged.properties().duration();
    (!duration.is_zero()).then_some(duration)
}
