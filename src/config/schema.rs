use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/exhibition/config.toml` or `~/.config/exhibition/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `EXHIBITION__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub player: PlayerSettings,
    pub ui: UiSettings,
    pub content: ContentSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Start the track as soon as a painting is opened.
    /// When disabled the player waits for an explicit play.
    pub autoplay: bool,
    /// Initial volume, 0.0 to 1.0.
    pub default_volume: f32,
    /// Volume change per `+` / `-` press.
    pub volume_step: f32,
    /// Show 00:00 instead of the full length once a track has ended.
    pub rewind_on_end: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            autoplay: true,
            default_volume: 1.0,
            volume_step: 0.05,
            rewind_on_end: false,
        }
    }
}

/// Transport bar behavior. Distances are in terminal rows.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Whether the bar is shown before the first scroll.
    pub start_visible: bool,
    /// Expose the volume slider and mute toggle.
    pub volume_control: bool,
    /// The bar is forced visible when the viewport is this close to the bottom.
    pub bottom_threshold: u32,
    /// Scrolling down only hides the bar past this offset from the top.
    pub hide_threshold: u32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            start_visible: true,
            volume_control: false,
            bottom_threshold: 2,
            hide_threshold: 3,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Event loop tick (input poll timeout and progress refresh), milliseconds.
    pub tick_ms: u64,
    /// Rows a painting screen must be scrolled before the header shows the title.
    pub title_threshold: u32,
    /// Gallery tiles start their entrance animation this many rows before
    /// reaching the bottom of the viewport.
    pub enter_offset: u32,
    /// Height of the picture on a painting screen.
    pub picture_rows: u16,
    /// Text on the right side of the footer.
    pub footer_credit: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_ms: 50,
            title_threshold: 8,
            enter_offset: 2,
            picture_rows: 16,
            footer_credit: "@aiqbalsyah".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContentSettings {
    /// Directory the image and sound references are resolved against.
    pub assets_dir: PathBuf,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default level filter; `RUST_LOG` wins when set.
    pub level: String,
    /// Log file. Defaults to `$XDG_STATE_HOME/exhibition/exhibition.log`.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
