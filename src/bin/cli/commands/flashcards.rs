use anyhow::{bail, Result};

use studyloom_lib::flashcards::FlashcardDrill;

use crate::app::App;
use crate::render::terminal::{heading, paint, Color};
use crate::OutputFormat;

pub fn run_start(
    app: &App,
    subject: &str,
    topic: &str,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let mut drill = app.flashcards();
    if !drill.start(subject, topic) {
        bail!("Both a subject and a topic are required");
    }
    print_card(&drill, false, format, use_color)
}

pub fn run_show(app: &App, answer: bool, format: &OutputFormat, use_color: bool) -> Result<()> {
    let drill = app.flashcards();
    print_card(&drill, answer, format, use_color)
}

pub fn run_next(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let mut drill = app.flashcards();
    drill.next();
    print_card(&drill, false, format, use_color)
}

pub fn run_prev(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let mut drill = app.flashcards();
    drill.prev();
    print_card(&drill, false, format, use_color)
}

pub fn run_reset(app: &App, format: &OutputFormat) -> Result<()> {
    let mut drill = app.flashcards();
    drill.reset();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(drill.session())?),
        OutputFormat::Plain => println!("Flashcard deck cleared."),
    }

    Ok(())
}

fn print_card(
    drill: &FlashcardDrill,
    answer: bool,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let session = drill.session();

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "subject": session.subject,
                "topic": session.topic,
                "index": session.index,
                "total": session.cards.len(),
                "card": drill.current(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            let (Some(card), Some((position, total))) = (drill.current(), drill.position()) else {
                println!("No flashcard deck. Start one with: flashcards start <subject> <topic>");
                return Ok(());
            };

            println!(
                "{}  {}",
                heading(&format!("{}: {}", session.subject, session.topic), use_color),
                paint(&format!("Card {} of {}", position, total), Color::DIM, use_color)
            );
            println!();
            println!("Q: {}", card.q);
            if answer {
                println!("A: {}", paint(&card.a, Color::CYAN, use_color));
            }
        }
    }

    Ok(())
}
