//! Application model types: `App`, `Screen` and the per-screen context.

use std::path::PathBuf;
use std::rc::Rc;
use std::time::Instant;

use log::{debug, info, warn};

use crate::audio::{PlaybackBackend, WidgetOptions};
use crate::collection::Collection;
use crate::page::{DetailPage, GalleryPage, LandingPage};

use super::route::Route;

/// The screen currently mounted.
pub enum Screen {
    Landing(LandingPage),
    Gallery(GalleryPage),
    Painting(DetailPage),
    /// Terminal view for unknown routes and ids.
    NotFound { requested: String },
}

/// Settings the screens are mounted with.
#[derive(Debug, Clone)]
pub struct ScreenContext {
    pub widget: WidgetOptions,
    pub assets_dir: PathBuf,
    pub title_threshold: u32,
    pub enter_offset: u32,
    pub footer_credit: String,
    pub picture_rows: u16,
}

impl Default for ScreenContext {
    fn default() -> Self {
        Self {
            widget: WidgetOptions::default(),
            assets_dir: PathBuf::from("."),
            title_threshold: 8,
            enter_offset: 2,
            footer_credit: String::new(),
            picture_rows: 16,
        }
    }
}

/// The main application model.
pub struct App {
    pub screen: Screen,
    pub route: Route,
    pub context: ScreenContext,
    pub should_quit: bool,
    collection: Collection<'static>,
    backend: Rc<dyn PlaybackBackend>,
}

impl App {
    /// Create the app and mount the screen for `route`.
    pub fn new(
        collection: Collection<'static>,
        backend: Rc<dyn PlaybackBackend>,
        context: ScreenContext,
        route: Route,
        now: Instant,
    ) -> Self {
        let mut app = Self {
            screen: Screen::Landing(LandingPage::mount(now)),
            route: Route::Landing,
            context,
            should_quit: false,
            collection,
            backend,
        };
        if route != Route::Landing {
            app.navigate(route, now);
        }
        app
    }

    /// Mount the screen for `route`, unmounting the current one.
    ///
    /// Moving between two paintings keeps the painting screen mounted so its
    /// player can swap tracks in place.
    pub fn navigate(&mut self, route: Route, now: Instant) {
        info!("navigate {} -> {}", self.route, route);

        let screen = match &route {
            Route::Landing => Screen::Landing(LandingPage::mount(now)),
            Route::Gallery => {
                let selected = self.current_painting_index().unwrap_or(0);
                let mut page = GalleryPage::mount(
                    self.collection,
                    &self.context.assets_dir,
                    selected,
                    self.context.enter_offset,
                );
                page.update_reveals(now);
                Screen::Gallery(page)
            }
            Route::Painting(id) => {
                let found = self
                    .collection
                    .find_by_id(id)
                    .and_then(|a| Ok((a, self.collection.find_neighbors(id)?)));
                match found {
                    Ok((artwork, neighbors)) => {
                        if let Screen::Painting(page) = &mut self.screen {
                            page.show(artwork, neighbors);
                            self.route = route.clone();
                            return;
                        }
                        Screen::Painting(DetailPage::mount(
                            artwork,
                            neighbors,
                            self.backend.clone(),
                            self.context.widget.clone(),
                            &self.context.assets_dir,
                            self.context.title_threshold,
                        ))
                    }
                    Err(e) => {
                        debug!("{e}");
                        Screen::NotFound {
                            requested: route.path(),
                        }
                    }
                }
            }
            Route::Unknown(raw) => Screen::NotFound {
                requested: raw.clone(),
            },
        };

        self.screen = screen;
        self.route = route;
        if self.is_not_found() {
            warn!("nothing to show at {}", self.route);
        }
    }

    fn current_painting_index(&self) -> Option<usize> {
        match &self.screen {
            Screen::Painting(page) => self.collection.position_of(page.artwork().id),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.screen, Screen::NotFound { .. })
    }
}
