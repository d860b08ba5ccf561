//! Shared fakes for unit tests.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

use crate::audio::{PlaybackBackend, PlaybackResource, Volume};
use crate::collection::Artwork;
use crate::error::PlaybackError;

/// Backend whose resources never make a sound; remembers which tracks are open.
#[derive(Clone, Default)]
pub struct SilentBackend {
    pub opened: Rc<RefCell<Vec<PathBuf>>>,
    pub live: Rc<RefCell<Vec<PathBuf>>>,
}

struct SilentResource {
    path: PathBuf,
    live: Rc<RefCell<Vec<PathBuf>>>,
}

impl PlaybackBackend for SilentBackend {
    fn open(&self, path: &Path) -> Result<Box<dyn PlaybackResource>, PlaybackError> {
        self.opened.borrow_mut().push(path.to_path_buf());
        self.live.borrow_mut().push(path.to_path_buf());
        Ok(Box::new(SilentResource {
            path: path.to_path_buf(),
            live: self.live.clone(),
        }))
    }
}

impl PlaybackResource for SilentResource {
    fn play(&mut self) -> Result<(), PlaybackError> {
        Ok(())
    }

    fn pause(&mut self) {}

    fn position(&self) -> Duration {
        Duration::ZERO
    }

    fn duration(&self) -> Option<Duration> {
        Some(Duration::from_secs(120))
    }

    fn is_finished(&self) -> bool {
        false
    }

    fn set_volume(&mut self, _volume: Volume) {}
}

impl Drop for SilentResource {
    fn drop(&mut self) {
        self.live.borrow_mut().retain(|p| p != &self.path);
    }
}

const fn artwork(id: &'static str, title: &'static str) -> Artwork {
    Artwork {
        id,
        title,
        description: "A painting used in tests. It has a description long enough to wrap over several lines when the terminal is narrow.",
        image: "missing.png",
        sound: "missing.mp3",
        year: Some("1900"),
        artist: Some("Anonymous"),
    }
}

/// Five artworks, enough for interior neighbors and multi-row grids.
pub static FIVE: [Artwork; 5] = [
    artwork("a", "Alpha"),
    artwork("b", "Beta"),
    artwork("c", "Gamma"),
    artwork("d", "Delta"),
    artwork("e", "Epsilon"),
];
