use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, Route, Screen};
use crate::audio::WidgetEvent;
use crate::page::{DetailPage, GalleryPage, Move};
use crate::ui;

/// State tracked by the runtime event loop across iterations.
#[derive(Debug, Default)]
pub struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
}

impl EventLoopState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Main terminal event loop: per-screen ticking, drawing and input.
/// Returns `Ok(())` once the app asked to quit.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    tick: Duration,
    app: &mut App,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        let now = Instant::now();
        tick_screen(app, now);

        terminal.draw(|f| {
            ui::sync_layout(app, f.area());
            ui::draw(f, app, now);
        })?;

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                handle_key_event(key, app, state, Instant::now());
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Time-driven work of the mounted screen.
pub fn tick_screen(app: &mut App, now: Instant) {
    match &mut app.screen {
        Screen::Painting(page) => page.tick(),
        Screen::Gallery(page) => page.update_reveals(now),
        Screen::Landing(_) | Screen::NotFound { .. } => {}
    }
}

pub fn handle_key_event(key: KeyEvent, app: &mut App, state: &mut EventLoopState, now: Instant) {
    // A second `g` completes `gg`; anything else clears the prefix.
    let jump_top = match key.code {
        KeyCode::Char('g') => {
            let completed = state.pending_gg;
            state.pending_gg = !completed;
            completed
        }
        _ => {
            state.pending_gg = false;
            false
        }
    };

    if key.code == KeyCode::Char('q') {
        app.should_quit = true;
        return;
    }

    let route = match &mut app.screen {
        Screen::Landing(_) => match key.code {
            KeyCode::Enter => Some(Route::Gallery),
            _ => None,
        },
        Screen::NotFound { .. } => match key.code {
            KeyCode::Enter | KeyCode::Esc => Some(Route::Landing),
            _ => None,
        },
        Screen::Gallery(page) => gallery_key(page, key.code, jump_top),
        Screen::Painting(page) => painting_key(page, key.code, jump_top),
    };

    if let Some(route) = route {
        app.navigate(route, now);
    }
}

fn gallery_key(page: &mut GalleryPage, code: KeyCode, jump_top: bool) -> Option<Route> {
    match code {
        KeyCode::Char('h') | KeyCode::Left => page.move_selection(Move::Left),
        KeyCode::Char('l') | KeyCode::Right => page.move_selection(Move::Right),
        KeyCode::Char('k') | KeyCode::Up => page.move_selection(Move::Up),
        KeyCode::Char('j') | KeyCode::Down => page.move_selection(Move::Down),
        KeyCode::Char('g') if jump_top => page.select(0),
        KeyCode::Char('G') => page.select(usize::MAX),
        KeyCode::Enter => {
            return page.selected_artwork().map(|a| Route::parse(&a.route()));
        }
        KeyCode::Char('b') | KeyCode::Esc => return Some(Route::Landing),
        _ => {}
    }
    None
}

fn painting_key(page: &mut DetailPage, code: KeyCode, jump_top: bool) -> Option<Route> {
    let effect = match code {
        KeyCode::Char('b') | KeyCode::Esc => return Some(page.header().back_route()),
        KeyCode::Char('h') | KeyCode::Left => return page.header().previous_route(),
        KeyCode::Char('l') | KeyCode::Right => return page.header().next_route(),
        KeyCode::Char('p') | KeyCode::Char(' ') => page.handle(WidgetEvent::ToggleRequested),
        KeyCode::Char('+') | KeyCode::Char('=') => page.nudge_volume(true),
        KeyCode::Char('-') => page.nudge_volume(false),
        KeyCode::Char('m') => page.handle(WidgetEvent::ToggleMute),
        KeyCode::Char('v') => page.handle(WidgetEvent::ToggleVolumeSlider),
        code => {
            scroll_key(page, code, jump_top);
            return None;
        }
    };
    debug!("key {code:?}: {effect:?}");
    None
}

fn scroll_key(page: &mut DetailPage, code: KeyCode, jump_top: bool) {
    match code {
        KeyCode::Char('j') | KeyCode::Down => page.scroll_by(1),
        KeyCode::Char('k') | KeyCode::Up => page.scroll_by(-1),
        KeyCode::Char('d') | KeyCode::PageDown => page.scroll_by(page.half_page()),
        KeyCode::Char('u') | KeyCode::PageUp => page.scroll_by(-page.half_page()),
        KeyCode::Char('g') if jump_top => page.scroll_to(0),
        KeyCode::Char('G') => page.scroll_to(page.max_scroll()),
        _ => {}
    }
}
