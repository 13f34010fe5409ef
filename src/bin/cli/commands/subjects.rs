use anyhow::{bail, Context, Result};

use studyloom_lib::subjects::{Subject, SubjectsCalendar};

use crate::app::App;
use crate::render::terminal::{heading, paint, parse_hex, progress_bar, swatch, Color};
use crate::OutputFormat;

pub fn run_list(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let calendar = app.calendar();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(calendar.subjects())?),
        OutputFormat::Plain => {
            for subject in calendar.subjects() {
                println!(
                    "{:>3}  {}  {}",
                    subject.id,
                    swatch(subject.event_color(), use_color),
                    heading(&subject.name, use_color)
                );
                if let Some(description) = &subject.description {
                    println!("       {}", paint(description, Color::DIM, use_color));
                }
                println!("       {} {}%", progress_bar(subject.progress, 20), subject.progress);
            }
        }
    }

    Ok(())
}

pub fn run_add(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let mut calendar = app.calendar();
    let id = calendar
        .add_subject()
        .context("No free subject id left")?;
    print_subject(&calendar, id, "Added", format, use_color)
}

pub fn run_color(
    app: &App,
    id: u32,
    color: &str,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    if parse_hex(color.trim()).is_none() {
        bail!("Invalid color '{}', expected #rrggbb", color);
    }
    let mut calendar = app.calendar();
    if !calendar.set_color(id, color) {
        bail!("No subject with id {}", id);
    }
    print_subject(&calendar, id, "Recolored", format, use_color)
}

pub fn run_progress(
    app: &App,
    id: u32,
    percent: u8,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let mut calendar = app.calendar();
    if !calendar.set_progress(id, percent) {
        bail!("No subject with id {}", id);
    }
    print_subject(&calendar, id, "Updated", format, use_color)
}

fn print_subject(
    calendar: &SubjectsCalendar,
    id: u32,
    verb: &str,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let subject: &Subject = calendar.subject(id).context("Subject not found")?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(subject)?),
        OutputFormat::Plain => println!(
            "{} subject {} \"{}\" {} {}%",
            verb,
            subject.id,
            subject.name,
            swatch(subject.event_color(), use_color),
            subject.progress
        ),
    }
    Ok(())
}
