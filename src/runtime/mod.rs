use std::env;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use log::{info, warn};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, Route};
use crate::audio::{PlaybackBackend, RodioBackend};
use crate::collection::Collection;

mod event_loop;
mod logging;
mod settings;
mod startup;


pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, problem) = settings::load_settings();
    logging::init(&settings.logging);
    if let Some(problem) = problem {
        warn!("{problem}");
    }

    let route = Route::parse(&env::args().nth(1).unwrap_or_else(|| "/".to_string()));
    info!("starting at {route}");

    let context = startup::screen_context(&settings);
    let tick = Duration::from_millis(settings.ui.tick_ms);
    let backend: Rc<dyn PlaybackBackend> = Rc::new(RodioBackend::open_default());

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend_term = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend_term)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let mut app = App::new(Collection::builtin(), backend, context, route, Instant::now());
        let mut state = event_loop::EventLoopState::new();

        event_loop::run(&mut terminal, tick, &mut app, &mut state)
    })();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("bye");
    run_result
}
