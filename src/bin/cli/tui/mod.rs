mod app_state;
mod key_handler;
mod status_bar;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;

use studyloom_lib::pomodoro::{IntervalTicker, PomodoroTimer};

use crate::app::App;
use app_state::TuiState;
pub use app_state::Screen;

pub fn run(app: App, screen: Screen) -> Result<()> {
    // Ticks are produced on the runtime and drained by the draw loop
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()
        .context("Failed to start tick runtime")?;
    let (ticker, ticks) = IntervalTicker::new(runtime.handle().clone(), app.config.tick_period());
    let timer = PomodoroTimer::mount(app.store.clone(), ticker);
    let mut state = TuiState::new(&app, screen, timer, ticks);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Event loop
    let result = run_loop(&mut terminal, &mut state);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Stop the ticker before its runtime goes away
    drop(state);
    runtime.shutdown_timeout(Duration::from_millis(100));

    result
}

fn run_loop<B: Backend>(terminal: &mut Terminal<B>, state: &mut TuiState) -> Result<()> {
    loop {
        state.drain_ticks();
        terminal.draw(|f| ui::draw(f, state))?;

        if state.quit {
            return Ok(());
        }

        // Poll for events with timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    key_handler::handle_key(state, key);
                }
            }
        }
    }
}
