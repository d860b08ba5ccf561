use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::collection::Artwork;
use crate::page::{GalleryPage, TILE_HEIGHT, TILE_PICTURE_ROWS};
use crate::picture::{Picture, placeholder_lines};

use super::{render_controls, render_footer, stack, truncate_lines};

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 2;
const CONTROLS_HEIGHT: u16 = 1;
const DESCRIPTION_LINES: usize = 2;

fn chunks(area: Rect) -> Vec<Rect> {
    stack(area, HEADER_HEIGHT, &[FOOTER_HEIGHT, CONTROLS_HEIGHT])
}

/// The scrollable part of the gallery screen.
pub fn grid_area(area: Rect) -> Rect {
    chunks(area)[1]
}

pub fn draw(frame: &mut Frame, page: &GalleryPage, credit: &str, now: Instant) {
    let chunks = chunks(frame.area());

    let header = Paragraph::new("← Home").block(
        Block::default()
            .borders(Borders::BOTTOM)
            .title(" Gallery ")
            .title_alignment(Alignment::Center),
    );
    frame.render_widget(header, chunks[0]);

    draw_grid(frame, page, chunks[1], now);
    render_footer(frame, chunks[2], credit);
    render_controls(frame, chunks[3], &["hjkl", "enter", "gg/G", "b", "q"]);
}

fn draw_grid(frame: &mut Frame, page: &GalleryPage, grid: Rect, now: Instant) {
    let columns = page.columns().max(1);
    let tile_width = grid.width / columns as u16;
    if tile_width < 4 {
        return;
    }

    for (index, artwork) in page.artworks().iter().enumerate() {
        if !page.is_revealed(index) {
            continue;
        }
        let entrance = page.entrance(index, now);
        if entrance.is_hidden() {
            continue;
        }

        // Document rows relative to the viewport; negative means above it.
        let top = page.tile_top(index) as i64 - page.scroll() as i64 + entrance.offset as i64;
        let bottom = top + TILE_HEIGHT as i64;
        if bottom <= 0 || top >= grid.height as i64 {
            continue;
        }
        let clipped = top.min(0).unsigned_abs() as u16;
        let y = grid.y + top.max(0) as u16;
        let height = (bottom.min(grid.height as i64) - top.max(0)) as u16;
        let x = grid.x + (index % columns) as u16 * tile_width;
        let area = Rect::new(x, y, tile_width, height);

        let selected = index == page.selected();
        let lines = tile_lines(artwork, page.picture(index), tile_width - 2, selected);

        // Rows cut off at the top take the top border first, then content.
        let borders = if clipped > 0 {
            Borders::LEFT | Borders::RIGHT | Borders::BOTTOM
        } else {
            Borders::ALL
        };
        let mut block = Block::default().borders(borders);
        if selected {
            block = block.border_style(Style::default().add_modifier(Modifier::BOLD));
        } else {
            block = block.border_style(Style::default().add_modifier(Modifier::DIM));
        }

        let mut tile = Paragraph::new(lines)
            .block(block)
            .scroll((clipped.saturating_sub(1), 0));
        if entrance.is_faint() {
            tile = tile.style(Style::default().add_modifier(Modifier::DIM));
        }
        frame.render_widget(tile, area);
    }
}

fn tile_lines(
    artwork: &Artwork,
    picture: Option<&Picture>,
    width: u16,
    selected: bool,
) -> Vec<Line<'static>> {
    let mut lines = match picture {
        Some(p) => p.lines(width, TILE_PICTURE_ROWS),
        None => placeholder_lines(artwork.image, TILE_PICTURE_ROWS),
    };

    lines.push(Line::from(artwork.title).bold());
    lines.push(match artwork.byline() {
        Some(byline) => Line::from(byline).dim(),
        None => Line::default(),
    });

    let mut description = truncate_lines(artwork.description, width as usize, DESCRIPTION_LINES);
    description.resize(DESCRIPTION_LINES, String::new());
    lines.extend(description.into_iter().map(Line::from));

    lines.push(Line::default());
    let cta = Line::from("View →");
    lines.push(if selected { cta.reversed() } else { cta.dim() });
    lines
}
