use anyhow::Result;

use studyloom_lib::pomodoro::{ManualTicker, Phase, PomodoroTimer};

use crate::app::App;
use crate::render::terminal::{heading, paint, progress_bar, Color};
use crate::OutputFormat;

/// One-shot commands only record the running flag
const COUNTDOWN_NOTE: &str = "The clock only counts down while `pomodoro run` is open.";

fn status_label(is_running: bool) -> &'static str {
    if is_running {
        "running (waiting for `pomodoro run`)"
    } else {
        "paused"
    }
}

pub fn run_status(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let timer = app.pomodoro();
    print_status(&timer, format, use_color)
}

pub fn run_start(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let mut timer = app.pomodoro();
    if !timer.state().is_running {
        timer.toggle_running();
    }
    print_status(&timer, format, use_color)
}

pub fn run_pause(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let mut timer = app.pomodoro();
    if timer.state().is_running {
        timer.toggle_running();
    }
    print_status(&timer, format, use_color)
}

pub fn run_phase(app: &App, phase: Phase, format: &OutputFormat, use_color: bool) -> Result<()> {
    let mut timer = app.pomodoro();
    timer.select_phase(phase);
    print_status(&timer, format, use_color)
}

pub fn run_reset(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let mut timer = app.pomodoro();
    timer.reset();
    print_status(&timer, format, use_color)
}

fn print_status(
    timer: &PomodoroTimer<ManualTicker>,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let state = timer.state();

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "phase": state.phase,
                "remaining": state.remaining,
                "clock": state.clock(),
                "isRunning": state.is_running,
                "completedCycles": state.completed_cycles,
                "progress": timer.progress_percent(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            let color = if state.phase.is_break() { Color::GREEN } else { Color::RED };
            println!(
                "{}  {}",
                paint(state.phase.label(), color, use_color),
                heading(&state.clock(), use_color)
            );
            let percent = timer.progress_percent();
            println!("{} {}%", progress_bar(percent, 30), percent);
            let status = status_label(state.is_running);
            println!("Status: {}  Cycles: {}", status, state.completed_cycles);
            println!("{}", paint(state.phase.hint(), Color::DIM, use_color));
            println!("{}", paint(COUNTDOWN_NOTE, Color::DIM, use_color));
        }
    }

    Ok(())
}
