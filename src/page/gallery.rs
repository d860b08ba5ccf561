use std::path::Path;
use std::time::{Duration, Instant};

use log::warn;

use crate::collection::{Artwork, Collection};
use crate::picture::Picture;

use super::reveal::{Entrance, Reveal};

/// Rows of the picture inside a tile.
pub const TILE_PICTURE_ROWS: u16 = 8;
/// Full tile height: borders, picture, title, byline, two description lines,
/// a blank line and the call to action.
pub const TILE_HEIGHT: u32 = TILE_PICTURE_ROWS as u32 + 8;

const ENTRANCE: Duration = Duration::from_millis(800);
const ENTRANCE_RISE: u16 = 3;

/// Column count of the responsive grid for a given width.
pub fn columns_for_width(width: u16) -> usize {
    match width {
        0..70 => 1,
        70..110 => 2,
        _ => 3,
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Move {
    Left,
    Right,
    Up,
    Down,
}

/// The gallery index: a grid of tiles, one per artwork.
pub struct GalleryPage {
    collection: Collection<'static>,
    selected: usize,
    scroll: u32,
    columns: usize,
    viewport_height: u32,
    enter_offset: u32,
    reveals: Vec<Reveal>,
    pictures: Vec<Option<Picture>>,
}

impl GalleryPage {
    pub fn mount(
        collection: Collection<'static>,
        assets_dir: &Path,
        selected: usize,
        enter_offset: u32,
    ) -> Self {
        let pictures = collection
            .artworks()
            .iter()
            .map(|a| match Picture::load(&a.image_path(assets_dir)) {
                Ok(p) => Some(p),
                Err(e) => {
                    warn!("{e}");
                    None
                }
            })
            .collect();

        Self::with_pictures(collection, pictures, selected, enter_offset)
    }

    /// Build a gallery without touching the filesystem.
    pub fn with_pictures(
        collection: Collection<'static>,
        pictures: Vec<Option<Picture>>,
        selected: usize,
        enter_offset: u32,
    ) -> Self {
        Self {
            selected: selected.min(collection.len().saturating_sub(1)),
            scroll: 0,
            columns: 1,
            viewport_height: 0,
            enter_offset,
            reveals: vec![Reveal::new(ENTRANCE); collection.len()],
            pictures,
            collection,
        }
    }

    pub fn artworks(&self) -> &'static [Artwork] {
        self.collection.artworks()
    }

    pub fn picture(&self, index: usize) -> Option<&Picture> {
        self.pictures.get(index).and_then(Option::as_ref)
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_artwork(&self) -> Option<&'static Artwork> {
        self.collection.get(self.selected)
    }

    pub fn scroll(&self) -> u32 {
        self.scroll
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn document_height(&self) -> u32 {
        let rows = self.collection.len().div_ceil(self.columns.max(1));
        rows as u32 * TILE_HEIGHT
    }

    /// First document row of tile `index`.
    pub fn tile_top(&self, index: usize) -> u32 {
        (index / self.columns.max(1)) as u32 * TILE_HEIGHT
    }

    /// Adopt the current terminal size and keep the selection on screen.
    pub fn resize(&mut self, width: u16, viewport_height: u32) {
        self.columns = columns_for_width(width);
        self.viewport_height = viewport_height;
        self.ensure_selected_visible();
    }

    pub fn move_selection(&mut self, m: Move) {
        if self.collection.is_empty() {
            return;
        }
        let len = self.collection.len();
        let cols = self.columns.max(1);
        let next = match m {
            Move::Left => self.selected.saturating_sub(1),
            Move::Right => (self.selected + 1).min(len - 1),
            Move::Up => self.selected.checked_sub(cols).unwrap_or(self.selected),
            Move::Down => {
                if self.selected + cols < len {
                    self.selected + cols
                } else {
                    self.selected
                }
            }
        };
        self.selected = next;
        self.ensure_selected_visible();
    }

    /// Jump to tile `index`, clamped to the last one.
    pub fn select(&mut self, index: usize) {
        self.selected = index.min(self.collection.len().saturating_sub(1));
        self.ensure_selected_visible();
    }

    /// Start the entrance of every tile whose top has come into view.
    pub fn update_reveals(&mut self, now: Instant) {
        let line = self.scroll + self.viewport_height.saturating_sub(self.enter_offset);
        for i in 0..self.reveals.len() {
            if self.tile_top(i) < line {
                self.reveals[i].trigger(now);
            }
        }
    }

    pub fn entrance(&self, index: usize, now: Instant) -> Entrance {
        self.reveals
            .get(index)
            .map(|r| r.entrance(now, ENTRANCE_RISE))
            .unwrap_or(Entrance::SETTLED)
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.reveals.get(index).is_some_and(Reveal::is_triggered)
    }

    fn ensure_selected_visible(&mut self) {
        let top = self.tile_top(self.selected);
        let bottom = top + TILE_HEIGHT;
        if top < self.scroll {
            self.scroll = top;
        } else if bottom > self.scroll + self.viewport_height {
            self.scroll = bottom.saturating_sub(self.viewport_height);
        }
        let max_scroll = self.document_height().saturating_sub(self.viewport_height);
        self.scroll = self.scroll.min(max_scroll);
    }
}
