//! UI rendering for the terminal user interface.
//!
//! `sync_layout` feeds the terminal size to the mounted screen, `draw` renders
//! it. Screens keep their own scroll state; this module only does geometry.

use chrono::Datelike;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use std::{collections::BTreeMap, sync::LazyLock, time::Instant};

use crate::app::{App, Screen};
use crate::page::Entrance;

mod detail;
mod gallery;
mod landing;
mod not_found;
mod player;


static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("j/k", "scroll");
    map.insert("d/u", "page");
    map.insert("gg/G", "top/end");
    map.insert("hjkl", "move");
    map.insert("enter", "open");
    map.insert("b", "back");
    map.insert("h/l", "prev/next");
    map.insert("space/p", "play");
    map.insert("+/-", "volume");
    map.insert("m", "mute");
    map.insert("v", "slider");
    map.insert("q", "quit");
    map
});

/// Render the controls help text for `keys`, in the given order.
fn controls_text(keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|k| CONTROLS_MAP.get(k).map(|v| format!("[{}] {}", k, v)))
        .collect::<Vec<String>>()
        .join(" | ")
}

fn render_controls(frame: &mut Frame, area: Rect, keys: &[&str]) {
    let controls = Paragraph::new(controls_text(keys))
        .style(Style::default().add_modifier(Modifier::DIM))
        .alignment(Alignment::Center);
    frame.render_widget(controls, area);
}

/// Year on the left, credit on the right, under a rule.
fn render_footer(frame: &mut Frame, area: Rect, credit: &str) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().add_modifier(Modifier::DIM));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let year = chrono::Local::now().year().to_string();
    let dim = Style::default().add_modifier(Modifier::DIM);
    frame.render_widget(Paragraph::new(year).style(dim), inner);
    frame.render_widget(
        Paragraph::new(credit.to_string())
            .style(dim)
            .alignment(Alignment::Right),
        inner,
    );
}

/// Dim text that is still fading in.
fn entrance_style(entrance: Entrance) -> Style {
    if entrance.is_faint() {
        Style::default().add_modifier(Modifier::DIM)
    } else {
        Style::default()
    }
}

/// Greedy word wrap to `width` columns; words longer than a line are split.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let len = current.chars().count();
        if len > 0 && len + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.extend(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wrap `text` and keep at most `max_lines`, ending with an ellipsis when
/// something was cut.
fn truncate_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines = wrap_words(text, width);
    if lines.len() <= max_lines {
        return lines;
    }
    lines.truncate(max_lines);
    if let Some(last) = lines.last_mut() {
        let mut chars: Vec<char> = last.chars().collect();
        chars.truncate(width.max(1) - 1);
        while chars.last().is_some_and(|c| c.is_whitespace()) {
            chars.pop();
        }
        *last = chars.into_iter().chain(['…']).collect();
    }
    lines
}

/// One row of `area` at `row + offset`, or `None` once it falls outside.
fn row_at(area: Rect, row: u16, offset: u16) -> Option<Rect> {
    let y = area.y.checked_add(row)?.checked_add(offset)?;
    (y < area.bottom()).then(|| Rect::new(area.x, y, area.width, 1))
}

fn stack(area: Rect, top: u16, bottom: &[u16]) -> Vec<Rect> {
    let mut constraints = vec![Constraint::Length(top), Constraint::Min(0)];
    constraints.extend(bottom.iter().map(|h| Constraint::Length(*h)));
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

fn centered(lines: Vec<Line<'static>>) -> Paragraph<'static> {
    Paragraph::new(lines).alignment(Alignment::Center)
}

/// Adopt the terminal size `area` in the mounted screen.
pub fn sync_layout(app: &mut App, area: Rect) {
    let picture_rows = app.context.picture_rows;
    match &mut app.screen {
        Screen::Gallery(page) => {
            let grid = gallery::grid_area(area);
            page.resize(grid.width, grid.height as u32);
        }
        Screen::Painting(page) => {
            let body = detail::body_area(area);
            let height = detail::document_height(page, body.width, picture_rows);
            page.resize(body.height as u32, height);
        }
        Screen::Landing(_) | Screen::NotFound { .. } => {}
    }
}

/// Render the mounted screen into `frame`.
pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let credit = app.context.footer_credit.as_str();
    match &app.screen {
        Screen::Landing(page) => landing::draw(frame, page, credit, now),
        Screen::Gallery(page) => gallery::draw(frame, page, credit, now),
        Screen::Painting(page) => detail::draw(frame, page, &app.context),
        Screen::NotFound { requested } => not_found::draw(frame, requested),
    }
}
