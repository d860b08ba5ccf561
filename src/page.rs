//! Screen models: landing, gallery index and painting detail.
//!
//! These hold the per-screen state the renderer draws from (scroll offsets,
//! selections, entrance animations and the painting's audio widget). They
//! know nothing about the terminal; sizes are handed in by the event loop.

mod detail;
mod gallery;
mod header;
mod landing;
mod reveal;

pub use detail::{BAR_HEIGHT, DetailPage};
pub use gallery::{GalleryPage, Move, TILE_HEIGHT, TILE_PICTURE_ROWS};
pub use header::NavigationHeader;
pub use landing::{HeroPart, LandingPage};
pub use reveal::Entrance;
