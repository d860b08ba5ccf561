use std::path::{Path, PathBuf};
use std::rc::Rc;

use log::{debug, warn};

use crate::audio::{AudioWidget, Effect, PlaybackBackend, ScrollSample, WidgetEvent, WidgetOptions};
use crate::collection::{Artwork, Neighbors};
use crate::picture::Picture;

use super::header::NavigationHeader;

/// Height of the transport bar, borders included.
pub const BAR_HEIGHT: u16 = 3;

/// A painting screen: header, scrollable document and the audio widget.
///
/// The widget lives as long as the screen does, whether or not its bar is
/// currently on screen.
pub struct DetailPage {
    artwork: &'static Artwork,
    header: NavigationHeader,
    widget: AudioWidget,
    picture: Option<Picture>,
    assets_dir: PathBuf,
    title_threshold: u32,
    scroll: u32,
    viewport_height: u32,
    document_height: u32,
    /// Rows of the bar currently slid below the screen edge.
    bar_offset: u16,
}

impl DetailPage {
    pub fn mount(
        artwork: &'static Artwork,
        neighbors: Neighbors<'static>,
        backend: Rc<dyn PlaybackBackend>,
        options: WidgetOptions,
        assets_dir: &Path,
        title_threshold: u32,
    ) -> Self {
        let widget = AudioWidget::mount(backend, artwork.sound_path(assets_dir), options);
        let bar_offset = resting_offset(widget.state().visible);
        Self {
            artwork,
            header: NavigationHeader::new(artwork, neighbors, title_threshold),
            widget,
            picture: load_picture(artwork, assets_dir),
            assets_dir: assets_dir.to_path_buf(),
            title_threshold,
            scroll: 0,
            viewport_height: 0,
            document_height: 0,
            bar_offset,
        }
    }

    /// Switch to another painting without unmounting the screen; the widget
    /// swaps its track.
    pub fn show(&mut self, artwork: &'static Artwork, neighbors: Neighbors<'static>) {
        if artwork.id == self.artwork.id {
            return;
        }
        self.artwork = artwork;
        self.header = NavigationHeader::new(artwork, neighbors, self.title_threshold);
        self.picture = load_picture(artwork, &self.assets_dir);
        self.scroll = 0;
        self.widget
            .handle(WidgetEvent::TrackChanged(artwork.sound_path(&self.assets_dir)));
        self.bar_offset = resting_offset(self.widget.state().visible);
        debug!("showing {} with {:?}", artwork.id, self.widget.source());
    }

    pub fn artwork(&self) -> &'static Artwork {
        self.artwork
    }

    pub fn header(&self) -> &NavigationHeader {
        &self.header
    }

    pub fn widget(&self) -> &AudioWidget {
        &self.widget
    }

    pub fn picture(&self) -> Option<&Picture> {
        self.picture.as_ref()
    }

    pub fn scroll(&self) -> u32 {
        self.scroll
    }

    pub fn bar_offset(&self) -> u16 {
        self.bar_offset
    }

    pub fn max_scroll(&self) -> u32 {
        self.document_height.saturating_sub(self.viewport_height)
    }

    /// Adopt the measured document and viewport heights.
    pub fn resize(&mut self, viewport_height: u32, document_height: u32) {
        self.viewport_height = viewport_height;
        self.document_height = document_height;
        if self.scroll > self.max_scroll() {
            self.scroll_to(self.max_scroll());
        }
    }

    pub fn scroll_by(&mut self, delta: i64) {
        let target = (self.scroll as i64 + delta).clamp(0, self.max_scroll() as i64);
        self.scroll_to(target as u32);
    }

    /// Move the viewport; emits a scroll sample only when the position changes.
    pub fn scroll_to(&mut self, position: u32) {
        let position = position.min(self.max_scroll());
        if position == self.scroll {
            return;
        }
        self.scroll = position;
        self.header.on_scroll(position);
        self.widget.handle(WidgetEvent::Scroll(ScrollSample {
            position,
            viewport_height: self.viewport_height,
            document_height: self.document_height,
        }));
    }

    pub fn half_page(&self) -> i64 {
        (self.viewport_height / 2).max(1) as i64
    }

    /// Forward a control event to the widget.
    pub fn handle(&mut self, event: WidgetEvent) -> Effect {
        let effect = self.widget.handle(event);
        if effect != Effect::None {
            debug!("player: {effect:?}");
        }
        effect
    }

    pub fn nudge_volume(&mut self, up: bool) -> Effect {
        self.widget.nudge_volume(up)
    }

    /// Per-tick work: progress polling and the bar's slide animation.
    pub fn tick(&mut self) {
        let effect = self.widget.poll();
        if matches!(effect, Effect::StatusChanged(_)) {
            debug!("player: {effect:?}");
        }

        let target = resting_offset(self.widget.state().visible);
        if self.bar_offset < target {
            self.bar_offset += 1;
        } else if self.bar_offset > target {
            self.bar_offset -= 1;
        }
    }
}

fn resting_offset(visible: bool) -> u16 {
    if visible { 0 } else { BAR_HEIGHT }
}

fn load_picture(artwork: &Artwork, assets_dir: &Path) -> Option<Picture> {
    match Picture::load(&artwork.image_path(assets_dir)) {
        Ok(p) => Some(p),
        Err(e) => {
            warn!("{e}");
            None
        }
    }
}
