mod app;
mod commands;
mod render;
#[cfg(feature = "tui")]
mod tui;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use studyloom_lib::pomodoro::Phase;

use commands::notes::NoteFields;
use commands::todo::TodoFlag;

#[derive(Parser)]
#[command(name = "studyloom-cli", about = "StudyLoom student dashboard CLI and TUI", version)]
struct Cli {
    /// Data directory (default: $STUDYLOOM_DATA_DIR or the platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum PhaseArg {
    Work,
    ShortBreak,
    LongBreak,
}

impl From<PhaseArg> for Phase {
    fn from(arg: PhaseArg) -> Self {
        match arg {
            PhaseArg::Work => Phase::Work,
            PhaseArg::ShortBreak => Phase::ShortBreak,
            PhaseArg::LongBreak => Phase::LongBreak,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Summary across every tool
    Overview,

    /// Assignment checklist
    #[command(subcommand)]
    Assignments(AssignmentsCommand),

    /// Flashcard drill
    #[command(subcommand)]
    Flashcards(FlashcardsCommand),

    /// Cornell notes
    #[command(subcommand)]
    Notes(NotesCommand),

    /// Pomodoro timer
    #[command(subcommand)]
    Pomodoro(PomodoroCommand),

    /// Exams and study plan
    #[command(subcommand)]
    Exams(ExamsCommand),

    /// Eisenhower to-do list
    #[command(subcommand)]
    Todo(TodoCommand),

    /// Subjects, colors and progress
    #[command(subcommand)]
    Subjects(SubjectsCommand),

    /// Study calendar events
    #[command(subcommand)]
    Events(EventsCommand),
}

#[derive(Subcommand)]
enum AssignmentsCommand {
    /// List assignments with their done state
    List,
    /// Flip an assignment between done and not done
    Toggle { id: String },
    /// Mark every assignment as not done
    Reset,
}

#[derive(Subcommand)]
enum FlashcardsCommand {
    /// Generate a deck for a subject and topic
    Start { subject: String, topic: String },
    /// Show the current card
    Show {
        /// Reveal the answer
        #[arg(long)]
        answer: bool,
    },
    /// Move to the next card
    Next,
    /// Move to the previous card
    Prev,
    /// Drop the deck
    Reset,
    /// Drill the deck interactively
    #[cfg(feature = "tui")]
    Drill,
}

#[derive(Subcommand)]
enum NotesCommand {
    /// List saved notes, newest first
    List,
    /// Show one note
    Show {
        /// Note id or unique prefix
        id: String,
    },
    /// Save a new note
    Add {
        /// Title (defaults to the current date and time)
        title: Option<String>,
        #[arg(long)]
        cue: Option<String>,
        /// Main notes (use "-" to read from stdin)
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        summary: Option<String>,
    },
    /// Change fields of an existing note
    Edit {
        /// Note id or unique prefix
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        cue: Option<String>,
        /// Main notes (use "-" to read from stdin)
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        summary: Option<String>,
    },
    /// Delete a note
    Remove { id: String },
}

#[derive(Subcommand)]
enum PomodoroCommand {
    /// Show the timer
    Status,
    /// Start the countdown
    Start,
    /// Pause the countdown
    Pause,
    /// Switch phase and restart its countdown
    Phase {
        #[arg(value_enum)]
        phase: PhaseArg,
    },
    /// Back to a fresh work phase
    Reset,
    /// Run the timer interactively
    #[cfg(feature = "tui")]
    Run,
}

#[derive(Subcommand)]
enum ExamsCommand {
    /// List exams, earliest first
    List,
    /// Add an exam
    Add {
        subject: String,
        topic: String,
        /// Exam date (YYYY-MM-DD, "today" or "tomorrow")
        date: String,
    },
    /// Remove an exam
    Remove { id: String },
    /// Remove every exam
    Clear,
    /// Print a study plan from today
    Plan,
}

#[derive(Subcommand)]
enum TodoCommand {
    /// Show the Eisenhower matrix
    List,
    /// Add a task
    Add {
        title: String,
        /// Deadline (YYYY-MM-DD, "today" or "tomorrow")
        #[arg(long)]
        deadline: Option<String>,
    },
    /// Toggle done
    Done { id: String },
    /// Toggle important
    Important { id: String },
    /// Toggle urgent
    Urgent { id: String },
    /// Set estimated hours (omit to clear)
    Hours { id: String, hours: Option<f64> },
    /// Set the deadline (omit to clear)
    Deadline { id: String, date: Option<String> },
    /// Delete a task
    Remove { id: String },
    /// Delete every task
    Clear,
}

#[derive(Subcommand)]
enum SubjectsCommand {
    /// List subjects
    List,
    /// Add a placeholder subject
    Add,
    /// Set a subject's color (#rrggbb)
    Color { id: u32, color: String },
    /// Set a subject's progress (0-100)
    Progress { id: u32, percent: u8 },
}

#[derive(Subcommand)]
enum EventsCommand {
    /// List events by day
    List,
    /// Add an event on a date
    Add {
        /// Event date (YYYY-MM-DD, "today" or "tomorrow")
        date: String,
        title: String,
        /// Subject id whose color the event takes
        #[arg(long)]
        subject: Option<u32>,
    },
    /// Change an event's title
    Rename { id: String, title: String },
    /// Show what a calendar day cell shows
    Day { date: String },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let app = app::App::new(cli.data_dir)?;
    let use_color = !cli.no_color && app.config.color && std::io::stdout().is_terminal();
    let format = &cli.format;

    match cli.command {
        None | Some(Command::Overview) => commands::overview::run(&app, format, use_color)?,
        Some(Command::Assignments(cmd)) => match cmd {
            AssignmentsCommand::List => commands::assignments::run_list(&app, format, use_color)?,
            AssignmentsCommand::Toggle { id } => {
                commands::assignments::run_toggle(&app, &id, format, use_color)?
            }
            AssignmentsCommand::Reset => commands::assignments::run_reset(&app, format)?,
        },
        Some(Command::Flashcards(cmd)) => match cmd {
            FlashcardsCommand::Start { subject, topic } => {
                commands::flashcards::run_start(&app, &subject, &topic, format, use_color)?
            }
            FlashcardsCommand::Show { answer } => {
                commands::flashcards::run_show(&app, answer, format, use_color)?
            }
            FlashcardsCommand::Next => commands::flashcards::run_next(&app, format, use_color)?,
            FlashcardsCommand::Prev => commands::flashcards::run_prev(&app, format, use_color)?,
            FlashcardsCommand::Reset => commands::flashcards::run_reset(&app, format)?,
            #[cfg(feature = "tui")]
            FlashcardsCommand::Drill => tui::run(app, tui::Screen::Flashcards)?,
        },
        Some(Command::Notes(cmd)) => match cmd {
            NotesCommand::List => commands::notes::run_list(&app, format, use_color)?,
            NotesCommand::Show { id } => commands::notes::run_show(&app, &id, format, use_color)?,
            NotesCommand::Add { title, cue, notes, summary } => {
                let notes = app::resolve_text(notes)?;
                let fields = NoteFields { title, cue, notes, summary };
                commands::notes::run_add(&app, fields, format, use_color)?
            }
            NotesCommand::Edit { id, title, cue, notes, summary } => {
                let notes = app::resolve_text(notes)?;
                let fields = NoteFields { title, cue, notes, summary };
                commands::notes::run_edit(&app, &id, fields, format, use_color)?
            }
            NotesCommand::Remove { id } => commands::notes::run_remove(&app, &id, format)?,
        },
        Some(Command::Pomodoro(cmd)) => match cmd {
            PomodoroCommand::Status => commands::pomodoro::run_status(&app, format, use_color)?,
            PomodoroCommand::Start => commands::pomodoro::run_start(&app, format, use_color)?,
            PomodoroCommand::Pause => commands::pomodoro::run_pause(&app, format, use_color)?,
            PomodoroCommand::Phase { phase } => {
                commands::pomodoro::run_phase(&app, phase.into(), format, use_color)?
            }
            PomodoroCommand::Reset => commands::pomodoro::run_reset(&app, format, use_color)?,
            #[cfg(feature = "tui")]
            PomodoroCommand::Run => tui::run(app, tui::Screen::Pomodoro)?,
        },
        Some(Command::Exams(cmd)) => match cmd {
            ExamsCommand::List => commands::exams::run_list(&app, format, use_color)?,
            ExamsCommand::Add { subject, topic, date } => {
                commands::exams::run_add(&app, &subject, &topic, &date, format)?
            }
            ExamsCommand::Remove { id } => commands::exams::run_remove(&app, &id, format)?,
            ExamsCommand::Clear => commands::exams::run_clear(&app, format)?,
            ExamsCommand::Plan => commands::exams::run_plan(&app, format, use_color)?,
        },
        Some(Command::Todo(cmd)) => match cmd {
            TodoCommand::List => commands::todo::run_list(&app, format, use_color)?,
            TodoCommand::Add { title, deadline } => {
                commands::todo::run_add(&app, &title, deadline.as_deref(), format)?
            }
            TodoCommand::Done { id } => {
                commands::todo::run_toggle(&app, &id, TodoFlag::Done, format)?
            }
            TodoCommand::Important { id } => {
                commands::todo::run_toggle(&app, &id, TodoFlag::Important, format)?
            }
            TodoCommand::Urgent { id } => {
                commands::todo::run_toggle(&app, &id, TodoFlag::Urgent, format)?
            }
            TodoCommand::Hours { id, hours } => {
                commands::todo::run_hours(&app, &id, hours, format)?
            }
            TodoCommand::Deadline { id, date } => {
                commands::todo::run_deadline(&app, &id, date.as_deref(), format)?
            }
            TodoCommand::Remove { id } => commands::todo::run_remove(&app, &id, format)?,
            TodoCommand::Clear => commands::todo::run_clear(&app, format)?,
        },
        Some(Command::Subjects(cmd)) => match cmd {
            SubjectsCommand::List => commands::subjects::run_list(&app, format, use_color)?,
            SubjectsCommand::Add => commands::subjects::run_add(&app, format, use_color)?,
            SubjectsCommand::Color { id, color } => {
                commands::subjects::run_color(&app, id, &color, format, use_color)?
            }
            SubjectsCommand::Progress { id, percent } => {
                commands::subjects::run_progress(&app, id, percent, format, use_color)?
            }
        },
        Some(Command::Events(cmd)) => match cmd {
            EventsCommand::List => commands::events::run_list(&app, format, use_color)?,
            EventsCommand::Add { date, title, subject } => {
                commands::events::run_add(&app, &date, &title, subject, format, use_color)?
            }
            EventsCommand::Rename { id, title } => {
                commands::events::run_rename(&app, &id, &title, format)?
            }
            EventsCommand::Day { date } => {
                commands::events::run_day(&app, &date, format, use_color)?
            }
        },
    }

    Ok(())
}
