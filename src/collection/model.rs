use std::path::{Path, PathBuf};

/// One artwork of the exhibition.
///
/// `image` and `sound` are asset references relative to the configured
/// assets directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Artwork {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub sound: &'static str,
    pub year: Option<&'static str>,
    pub artist: Option<&'static str>,
}

impl Artwork {
    /// Resolve the image reference against `assets_dir`.
    pub fn image_path(&self, assets_dir: &Path) -> PathBuf {
        assets_dir.join(self.image)
    }

    /// Resolve the sound reference against `assets_dir`.
    pub fn sound_path(&self, assets_dir: &Path) -> PathBuf {
        assets_dir.join(self.sound)
    }

    /// The route of this artwork's detail screen.
    pub fn route(&self) -> String {
        format!("/paintings/{}", self.id)
    }

    /// `artist • year` line used by gallery tiles; `None` without an artist.
    pub fn byline(&self) -> Option<String> {
        let artist = self.artist.map(str::trim).filter(|s| !s.is_empty())?;
        match self.year.map(str::trim).filter(|s| !s.is_empty()) {
            Some(year) => Some(format!("{artist} • {year}")),
            None => Some(artist.to_string()),
        }
    }
}
