use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::audio::{AudioWidget, format_mmss};

const SLIDER_WIDTH: u16 = 12;

/// The transport bar: play/pause, elapsed, progress, remaining and volume.
pub fn draw(frame: &mut Frame, area: Rect, widget: &AudioWidget, title: &str) {
    let state = widget.state();

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" ♪ {title} "));
    if state.needs_gesture {
        let hint = if widget.has_resource() {
            " press p to play "
        } else {
            " no audio, press p to retry "
        };
        block = block.title_bottom(hint).title_alignment(Alignment::Center);
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }
    let row = Rect { height: 1, ..inner };

    let volume_control = widget.options().volume_control;
    let volume_width = match (volume_control, widget.slider_revealed()) {
        (false, _) => 0,
        (true, false) => 3,
        (true, true) => 3 + SLIDER_WIDTH,
    };

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Min(4),
            Constraint::Length(8),
            Constraint::Length(volume_width),
        ])
        .split(row);

    let icon = if state.is_playing() { "⏸" } else { "▶" };
    frame.render_widget(Paragraph::new(icon).bold(), cells[0]);
    frame.render_widget(Paragraph::new(format_mmss(state.position)), cells[1]);

    let progress = Gauge::default()
        .gauge_style(Style::default().fg(Color::Gray).bg(Color::DarkGray))
        .use_unicode(true)
        .label("")
        .ratio(widget.progress_ratio());
    frame.render_widget(progress, cells[2]);

    frame.render_widget(
        Paragraph::new(widget.remaining_display().to_string()).alignment(Alignment::Right),
        cells[3],
    );

    if volume_control {
        let volume = state.volume;
        let icon = if volume.is_muted() { "🔇" } else { "🔊" };
        let icon_area = Rect {
            width: cells[4].width.min(3),
            ..cells[4]
        };
        frame.render_widget(Paragraph::new(icon).alignment(Alignment::Right), icon_area);

        if widget.slider_revealed() {
            let slider_area = Rect {
                x: cells[4].x + 3,
                width: cells[4].width.saturating_sub(3),
                ..cells[4]
            };
            let slider = Gauge::default()
                .gauge_style(Style::default().fg(Color::White).bg(Color::DarkGray))
                .label(format!("{}%", volume.percent()))
                .ratio(volume.value() as f64);
            frame.render_widget(slider, slider_area);
        }
    }
}
