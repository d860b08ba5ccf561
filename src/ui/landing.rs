use std::time::Instant;

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Modifier, Style},
    widgets::Paragraph,
};

use crate::page::{HeroPart, LandingPage};

use super::{entrance_style, render_controls, render_footer, row_at, stack};

const TITLE: &str = "E X H I B I T I O N";
const SUBTITLE: &str = "An immersive collection where art meets sound";
const LINK: &str = "Enter Gallery →";

/// Rows of the hero block, from the title to the link.
const HERO_ROWS: u16 = 6;

pub fn draw(frame: &mut Frame, page: &LandingPage, credit: &str, now: Instant) {
    let chunks = stack(frame.area(), 0, &[2, 1]);
    let hero = chunks[1];
    let top = hero.height.saturating_sub(HERO_ROWS) / 2;

    let parts = [
        (HeroPart::Title, top, TITLE, Modifier::BOLD),
        (HeroPart::Subtitle, top + 2, SUBTITLE, Modifier::ITALIC),
        (HeroPart::Link, top + 5, LINK, Modifier::UNDERLINED),
    ];
    for (part, row, text, modifier) in parts {
        let entrance = page.entrance(part, now);
        if entrance.is_hidden() {
            continue;
        }
        let Some(area) = row_at(hero, row, entrance.offset) else {
            continue;
        };
        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(entrance_style(entrance).patch(Style::default().add_modifier(modifier)));
        frame.render_widget(paragraph, area);
    }

    render_footer(frame, chunks[2], credit);
    if page.is_settled(now) {
        render_controls(frame, chunks[3], &["enter", "q"]);
    }
}
