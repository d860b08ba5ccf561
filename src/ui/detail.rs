use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Stylize,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::ScreenContext;
use crate::collection::Artwork;
use crate::page::{BAR_HEIGHT, DetailPage, NavigationHeader};
use crate::picture::placeholder_lines;

use super::{player, render_controls, stack, wrap_words};

const HEADER_HEIGHT: u16 = 3;
const MARGIN: u16 = 2;

fn chunks(area: Rect) -> Vec<Rect> {
    stack(area, HEADER_HEIGHT, &[1])
}

/// The scrollable document area below the header.
pub fn body_area(area: Rect) -> Rect {
    chunks(area)[1]
}

fn text_width(width: u16) -> usize {
    width.saturating_sub(MARGIN * 2).max(1) as usize
}

/// Year, title and artist above the picture.
fn heading(artwork: &Artwork) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default()];
    if let Some(year) = artwork.year {
        lines.push(Line::from(year).dim());
    }
    lines.push(Line::from(artwork.title.to_uppercase()).bold());
    if let Some(artist) = artwork.artist {
        lines.push(Line::from(artist).italic());
    }
    lines.push(Line::default());
    lines
}

/// Description below the picture, plus room for the player bar.
fn closing(artwork: &Artwork, width: u16) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default()];
    lines.extend(
        wrap_words(artwork.description, text_width(width))
            .into_iter()
            .map(Line::from),
    );
    lines.extend((0..=BAR_HEIGHT).map(|_| Line::default()));
    lines
}

/// Rows of the document at `width`, without rendering the picture.
pub fn document_height(page: &DetailPage, width: u16, picture_rows: u16) -> u32 {
    let artwork = page.artwork();
    (heading(artwork).len() + picture_rows as usize + closing(artwork, width).len()) as u32
}

fn document(page: &DetailPage, width: u16, picture_rows: u16) -> Vec<Line<'static>> {
    let artwork = page.artwork();
    let mut lines = heading(artwork);
    lines.extend(match page.picture() {
        Some(p) => p.lines(text_width(width) as u16, picture_rows),
        None => placeholder_lines(artwork.image, picture_rows),
    });
    lines.extend(closing(artwork, width));
    lines
}

pub fn draw(frame: &mut Frame, page: &DetailPage, context: &ScreenContext) {
    let chunks = chunks(frame.area());
    draw_header(frame, page.header(), chunks[0]);

    let body = chunks[1];
    let inner = Rect {
        x: body.x + MARGIN.min(body.width),
        width: body.width.saturating_sub(MARGIN * 2),
        ..body
    };
    let scroll = page.scroll().min(u16::MAX as u32) as u16;
    frame.render_widget(
        Paragraph::new(document(page, body.width, context.picture_rows)).scroll((scroll, 0)),
        inner,
    );

    // The bar slides down out of the body while hidden.
    let shown = BAR_HEIGHT.saturating_sub(page.bar_offset()).min(body.height);
    if shown > 0 {
        let bar = Rect {
            y: body.bottom() - shown,
            height: shown,
            ..body
        };
        frame.render_widget(Clear, bar);
        player::draw(frame, bar, page.widget(), page.artwork().title);
    }

    let mut keys = vec!["b", "h/l", "space/p", "j/k", "d/u", "gg/G"];
    if page.widget().options().volume_control {
        keys.extend(["+/-", "m", "v"]);
    }
    keys.push("q");
    render_controls(frame, chunks[2], &keys);
}

fn draw_header(frame: &mut Frame, header: &NavigationHeader, area: Rect) {
    let block = Block::default().borders(Borders::BOTTOM);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }
    let top = Rect { height: 1, ..inner };

    frame.render_widget(Paragraph::new("← Index"), top);

    let links = [
        header.previous().map(|_| "‹ Prev"),
        header.next().map(|_| "Next ›"),
    ];
    let links = links.into_iter().flatten().collect::<Vec<_>>().join("   ");
    frame.render_widget(Paragraph::new(links).alignment(Alignment::Right), top);

    if header.show_title() {
        let artwork = header.artwork();
        let mut lines = vec![Line::from(artwork.title).bold()];
        if let Some(artist) = artwork.artist {
            lines.push(Line::from(artist).italic().dim());
        }
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
    }
}
