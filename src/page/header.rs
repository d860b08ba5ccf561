use crate::app::Route;
use crate::collection::{Artwork, Neighbors};

/// Top bar of a painting screen.
///
/// Links back to the gallery and to the neighbors; the painting's title
/// fades in once the page has been scrolled past `threshold` rows.
#[derive(Debug, Clone)]
pub struct NavigationHeader {
    artwork: &'static Artwork,
    previous: Option<&'static Artwork>,
    next: Option<&'static Artwork>,
    threshold: u32,
    show_title: bool,
}

impl NavigationHeader {
    pub fn new(artwork: &'static Artwork, neighbors: Neighbors<'static>, threshold: u32) -> Self {
        Self {
            artwork,
            previous: neighbors.previous,
            next: neighbors.next,
            threshold,
            show_title: false,
        }
    }

    /// Returns true if the title overlay changed visibility.
    pub fn on_scroll(&mut self, position: u32) -> bool {
        let show = position > self.threshold;
        let changed = show != self.show_title;
        self.show_title = show;
        changed
    }

    pub fn show_title(&self) -> bool {
        self.show_title
    }

    pub fn artwork(&self) -> &'static Artwork {
        self.artwork
    }

    pub fn previous(&self) -> Option<&'static Artwork> {
        self.previous
    }

    pub fn next(&self) -> Option<&'static Artwork> {
        self.next
    }

    pub fn back_route(&self) -> Route {
        Route::Gallery
    }

    pub fn previous_route(&self) -> Option<Route> {
        self.previous.map(|a| Route::parse(&a.route()))
    }

    pub fn next_route(&self) -> Option<Route> {
        self.next.map(|a| Route::parse(&a.route()))
    }
}
