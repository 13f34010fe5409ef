use anyhow::{Context, Result};

use studyloom_lib::notes::{CornellNote, NoteDraft};

use crate::app::{resolve_id, App};
use crate::render::terminal::{heading, paint, short_id, truncate, Color};
use crate::OutputFormat;

/// Field values given on the command line; `None` keeps the current value
pub struct NoteFields {
    pub title: Option<String>,
    pub cue: Option<String>,
    pub notes: Option<String>,
    pub summary: Option<String>,
}

impl NoteFields {
    fn apply(self, draft: &mut NoteDraft) {
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(cue) = self.cue {
            draft.cue = cue;
        }
        if let Some(notes) = self.notes {
            draft.notes = notes;
        }
        if let Some(summary) = self.summary {
            draft.summary = summary;
        }
    }
}

pub fn run_list(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let editor = app.notes();
    let notes = editor.notes();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(notes)?),
        OutputFormat::Plain => {
            if notes.is_empty() {
                println!("No notes yet.");
                return Ok(());
            }
            for note in notes {
                println!(
                    "{}  {:<40} {}",
                    paint(short_id(&note.id), Color::GRAY, use_color),
                    truncate(&note.title, 40),
                    note.created_at.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M")
                );
            }
        }
    }

    Ok(())
}

pub fn run_show(app: &App, id: &str, format: &OutputFormat, use_color: bool) -> Result<()> {
    let editor = app.notes();
    let id = resolve_id(editor.notes().iter().map(|n| n.id.as_str()), id, "note")?;
    let note = editor.get(&id).context("Note disappeared")?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(note)?),
        OutputFormat::Plain => print_note(note, use_color),
    }

    Ok(())
}

pub fn run_add(
    app: &App,
    fields: NoteFields,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let mut editor = app.notes();
    editor.new_note();
    fields.apply(editor.draft_mut());
    let id = editor.save();
    print_saved(&editor, &id, "Saved", format, use_color)
}

pub fn run_edit(
    app: &App,
    id: &str,
    fields: NoteFields,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let mut editor = app.notes();
    let id = resolve_id(editor.notes().iter().map(|n| n.id.as_str()), id, "note")?;
    editor.load(&id);
    fields.apply(editor.draft_mut());
    let id = editor.save();
    print_saved(&editor, &id, "Updated", format, use_color)
}

pub fn run_remove(app: &App, id: &str, format: &OutputFormat) -> Result<()> {
    let mut editor = app.notes();
    let id = resolve_id(editor.notes().iter().map(|n| n.id.as_str()), id, "note")?;
    editor.remove(&id);

    match format {
        OutputFormat::Json => println!("{}", serde_json::json!({ "removed": id })),
        OutputFormat::Plain => println!("Removed note {}", id),
    }

    Ok(())
}

fn print_saved(
    editor: &studyloom_lib::notes::NotesEditor,
    id: &str,
    verb: &str,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let note = editor.get(id).context("Saved note not found")?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(note)?),
        OutputFormat::Plain => {
            println!("{} note \"{}\"", verb, note.title);
            println!("  ID: {}", paint(&note.id, Color::GRAY, use_color));
        }
    }
    Ok(())
}

fn print_note(note: &CornellNote, use_color: bool) {
    println!("{}", heading(&note.title, use_color));
    println!(
        "{}",
        paint(
            &note.created_at.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M").to_string(),
            Color::DIM,
            use_color
        )
    );
    for (label, body) in [("Cue", &note.cue), ("Notes", &note.notes), ("Summary", &note.summary)] {
        println!();
        println!("{}", paint(label, Color::CYAN, use_color));
        if body.is_empty() {
            println!("  {}", paint("(empty)", Color::DIM, use_color));
        } else {
            for line in body.lines() {
                println!("  {}", line);
            }
        }
    }
}
