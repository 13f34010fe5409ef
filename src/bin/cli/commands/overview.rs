use anyhow::Result;
use chrono::Local;

use studyloom_lib::overview::Overview;

use crate::app::App;
use crate::render::terminal::{heading, paint, Color};
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let overview = Overview::collect(&app.store, Local::now().date_naive());

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&overview)?);
        }
        OutputFormat::Plain => {
            println!("{}", heading("StudyLoom", use_color));
            println!(
                "  Assignments  {}/{} done",
                overview.assignments_done, overview.assignments_total
            );
            println!(
                "  To-do        {} left of {}",
                overview.tasks_left, overview.tasks_total
            );
            match &overview.next_exam {
                Some(exam) => println!("  Next exam    {} on {}", exam.label(), exam.date),
                None => println!(
                    "  Next exam    {}",
                    paint("none scheduled", Color::DIM, use_color)
                ),
            }
            println!(
                "  Pomodoro     {} ({} cycles completed)",
                overview.pomodoro_phase.label(),
                overview.pomodoro_cycles
            );
            match &overview.flashcard_deck {
                Some(deck) => println!("  Flashcards   {}", deck),
                None => println!("  Flashcards   {}", paint("no deck", Color::DIM, use_color)),
            }
            println!("  Notes        {}", overview.note_count);
            println!(
                "  Subjects     {} ({} events today)",
                overview.subject_count, overview.events_today
            );
        }
    }

    Ok(())
}
