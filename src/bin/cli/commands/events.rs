use anyhow::{Context, Result};
use chrono::NaiveDate;

use studyloom_lib::subjects::{EventItem, SubjectsCalendar};

use crate::app::{parse_date, resolve_id, App};
use crate::render::terminal::{heading, paint, short_id, swatch, Color};
use crate::OutputFormat;

pub fn run_list(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let calendar = app.calendar();
    let days = calendar.events_by_date();

    match format {
        OutputFormat::Json => {
            let output: serde_json::Map<String, serde_json::Value> = days
                .iter()
                .map(|(date, events)| Ok((date.to_string(), serde_json::to_value(events)?)))
                .collect::<Result<_, serde_json::Error>>()?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if days.is_empty() {
                println!("No events on the calendar.");
                return Ok(());
            }
            for (date, events) in &days {
                println!("{}", heading(&date.format("%a %Y-%m-%d").to_string(), use_color));
                for event in events {
                    print_event(&calendar, event, use_color);
                }
            }
        }
    }

    Ok(())
}

pub fn run_add(
    app: &App,
    date: &str,
    title: &str,
    subject_id: Option<u32>,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let date = parse_date(date)?;
    let mut calendar = app.calendar();
    calendar.select_date(date);
    let id = calendar.add_event_for_selected_date(title, subject_id)?;

    let event = calendar
        .events()
        .iter()
        .find(|e| e.id == id)
        .context("Event not found after adding")?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(event)?),
        OutputFormat::Plain => {
            println!("Added event on {}", date);
            print_event(&calendar, event, use_color);
        }
    }

    Ok(())
}

pub fn run_rename(app: &App, id: &str, title: &str, format: &OutputFormat) -> Result<()> {
    let mut calendar = app.calendar();
    let id = resolve_id(calendar.events().iter().map(|e| e.id.as_str()), id, "event")?;
    calendar.edit_event_title(&id, title);

    match format {
        OutputFormat::Json => println!("{}", serde_json::json!({ "id": id, "title": title })),
        OutputFormat::Plain => println!("Renamed event {} to \"{}\"", id, title),
    }

    Ok(())
}

pub fn run_day(app: &App, date: &str, format: &OutputFormat, use_color: bool) -> Result<()> {
    let date: NaiveDate = parse_date(date)?;
    let calendar = app.calendar();
    let cell = calendar.day_cell(date);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&cell)?),
        OutputFormat::Plain => {
            println!("{}", heading(&date.format("%a %Y-%m-%d").to_string(), use_color));
            if cell.shown.is_empty() {
                println!("  {}", paint("No events", Color::DIM, use_color));
            }
            for event in &cell.shown {
                print_event(&calendar, event, use_color);
            }
            if cell.overflow > 0 {
                println!("  {}", paint(&format!("+{} more", cell.overflow), Color::DIM, use_color));
            }
        }
    }

    Ok(())
}

fn print_event(calendar: &SubjectsCalendar, event: &EventItem, use_color: bool) {
    let subject = event
        .subject_id
        .and_then(|id| calendar.subject(id))
        .map(|s| s.name.as_str())
        .unwrap_or("");
    let color = event
        .background_color
        .as_deref()
        .map(|c| swatch(c, use_color))
        .unwrap_or_else(|| "  ".to_string());
    println!(
        "  {}  {}  {}  {}",
        paint(short_id(&event.id), Color::GRAY, use_color),
        color,
        event.title,
        paint(subject, Color::DIM, use_color)
    );
}
