use crate::app::ScreenContext;
use crate::audio::{Volume, WidgetOptions};
use crate::config;

pub fn widget_options(settings: &config::Settings) -> WidgetOptions {
    WidgetOptions {
        autoplay: settings.audio.autoplay,
        default_volume: Volume::new(settings.audio.default_volume),
        volume_step: settings.audio.volume_step,
        volume_control: settings.player.volume_control,
        start_visible: settings.player.start_visible,
        rewind_on_end: settings.audio.rewind_on_end,
        bottom_threshold: settings.player.bottom_threshold,
        hide_threshold: settings.player.hide_threshold,
    }
}

/// Everything the screens are mounted with, taken from the settings.
pub fn screen_context(settings: &config::Settings) -> ScreenContext {
    ScreenContext {
        widget: widget_options(settings),
        assets_dir: settings.content.assets_dir.clone(),
        title_threshold: settings.ui.title_threshold,
        enter_offset: settings.ui.enter_offset,
        footer_credit: settings.ui.footer_credit.clone(),
        picture_rows: settings.ui.picture_rows,
    }
}
