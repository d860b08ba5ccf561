//! Audio playback widget.
//!
//! Each painting screen owns exactly one [`AudioWidget`], which in turn owns
//! one playback resource for the painting's soundscape. The widget is a
//! small state machine driven by tagged [`WidgetEvent`]s: input (toggle,
//! volume), scroll samples, progress updates polled from the resource and
//! track changes when navigating between paintings.

mod resource;
mod sink;
mod time;
mod types;
mod visibility;
mod widget;

pub use resource::{PlaybackBackend, PlaybackResource};
pub use sink::RodioBackend;
pub use time::format_mmss;
pub use types::*;
pub use widget::{AudioWidget, WidgetOptions};

#[cfg(test)]
mod tests;
