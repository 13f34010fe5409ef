use anyhow::Result;

use crate::app::{resolve_id, App};
use crate::render::terminal::{checkbox, paint, Color};
use crate::OutputFormat;

pub fn run_list(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let tracker = app.assignments();

    match format {
        OutputFormat::Json => {
            let items: Vec<serde_json::Value> = tracker
                .assignments()
                .iter()
                .map(|a| {
                    serde_json::json!({
                        "id": a.id,
                        "title": a.title,
                        "done": tracker.is_done(&a.id),
                    })
                })
                .collect();
            let output = serde_json::json!({
                "assignments": items,
                "done": tracker.done_count(),
                "total": tracker.total(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            for a in tracker.assignments() {
                let done = tracker.is_done(&a.id);
                let title = if done {
                    paint(&a.title, Color::STRIKETHROUGH, use_color)
                } else {
                    a.title.clone()
                };
                println!("{} {:<4} {}", checkbox(done), a.id, title);
            }
            println!();
            println!("Completed: {} / {}", tracker.done_count(), tracker.total());
        }
    }

    Ok(())
}

pub fn run_toggle(app: &App, id: &str, format: &OutputFormat, use_color: bool) -> Result<()> {
    let mut tracker = app.assignments();
    let id = resolve_id(tracker.assignments().iter().map(|a| a.id.as_str()), id, "assignment")?;
    tracker.toggle(&id);
    let done = tracker.is_done(&id);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "id": id, "done": done });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            let state = if done {
                paint("done", Color::GREEN, use_color)
            } else {
                paint("not done", Color::YELLOW, use_color)
            };
            println!("Marked {} as {}", id, state);
        }
    }

    Ok(())
}

pub fn run_reset(app: &App, format: &OutputFormat) -> Result<()> {
    let mut tracker = app.assignments();
    tracker.reset();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "done": 0, "total": tracker.total() }));
        }
        OutputFormat::Plain => println!("Assignment progress cleared."),
    }

    Ok(())
}
