use anyhow::{bail, Result};
use chrono::Local;

use crate::app::{parse_date, resolve_id, App};
use crate::render::terminal::{heading, paint, short_id, Color};
use crate::OutputFormat;

pub fn run_list(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let planner = app.exams();
    let upcoming = planner.upcoming();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&upcoming)?),
        OutputFormat::Plain => {
            if upcoming.is_empty() {
                println!("No exams added yet.");
                return Ok(());
            }
            let today = Local::now().date_naive();
            for exam in upcoming {
                let date = exam.date.to_string();
                let date = if exam.date < today {
                    paint(&date, Color::DIM, use_color)
                } else {
                    date
                };
                println!(
                    "{}  {}  {}",
                    paint(short_id(&exam.id), Color::GRAY, use_color),
                    date,
                    exam.label()
                );
            }
        }
    }

    Ok(())
}

pub fn run_add(
    app: &App,
    subject: &str,
    topic: &str,
    date: &str,
    format: &OutputFormat,
) -> Result<()> {
    let date = parse_date(date)?;
    let mut planner = app.exams();
    let Some(id) = planner.add_exam(subject, topic, Some(date)) else {
        bail!("Subject and topic must not be empty");
    };

    match format {
        OutputFormat::Json => {
            let exam = planner.exams().iter().find(|e| e.id == id);
            println!("{}", serde_json::to_string_pretty(&exam)?);
        }
        OutputFormat::Plain => {
            println!("Added exam {}: {} on {}", subject.trim(), topic.trim(), date);
            println!("  ID: {}", id);
        }
    }

    Ok(())
}

pub fn run_remove(app: &App, id: &str, format: &OutputFormat) -> Result<()> {
    let mut planner = app.exams();
    let id = resolve_id(planner.exams().iter().map(|e| e.id.as_str()), id, "exam")?;
    planner.remove_exam(&id);

    match format {
        OutputFormat::Json => println!("{}", serde_json::json!({ "removed": id })),
        OutputFormat::Plain => println!("Removed exam {}", id),
    }

    Ok(())
}

pub fn run_clear(app: &App, format: &OutputFormat) -> Result<()> {
    let mut planner = app.exams();
    planner.clear_all();

    match format {
        OutputFormat::Json => println!("{}", serde_json::json!({ "exams": [] })),
        OutputFormat::Plain => println!("All exams cleared."),
    }

    Ok(())
}

pub fn run_plan(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let mut planner = app.exams();
    let plan = planner.build_plan(Local::now().naive_local()).unwrap_or_default();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(plan)?),
        OutputFormat::Plain => {
            if plan.is_empty() {
                println!("No exams to plan for. Add one with: exams add <subject> <topic> <date>");
                return Ok(());
            }
            println!("{}", heading("Study plan", use_color));
            for block in plan {
                println!(
                    "{}  {:>3} min  {}",
                    paint(&block.date.format("%a %Y-%m-%d").to_string(), Color::CYAN, use_color),
                    block.minutes,
                    block.topic
                );
            }
        }
    }

    Ok(())
}
