use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};

use studyloom_lib::assignments::AssignmentTracker;
use studyloom_lib::config::{resolve_base_dir, DashboardConfig};
use studyloom_lib::exams::ExamPlanner;
use studyloom_lib::flashcards::FlashcardDrill;
use studyloom_lib::notes::NotesEditor;
use studyloom_lib::pomodoro::{ManualTicker, PomodoroTimer};
use studyloom_lib::store::{FileStore, SharedStore};
use studyloom_lib::subjects::SubjectsCalendar;
use studyloom_lib::todo::TodoList;

/// Shared application state for CLI commands
pub struct App {
    pub config: DashboardConfig,
    pub store: SharedStore,
}

impl App {
    /// Resolve the data directory, read `config.toml` and open the store
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let base_dir = resolve_base_dir(data_dir).context("Failed to get data directory")?;
        let config = DashboardConfig::load(&base_dir)
            .with_context(|| format!("Failed to read config in {}", base_dir.display()))?;

        let file_store = FileStore::new(config.store_dir(&base_dir));
        file_store
            .init()
            .with_context(|| format!("Failed to initialize {}", file_store.base_path().display()))?;
        log::debug!("Using data directory {}", file_store.base_path().display());

        Ok(Self {
            config,
            store: Arc::new(file_store),
        })
    }

    pub fn assignments(&self) -> AssignmentTracker {
        AssignmentTracker::mount(self.store.clone())
    }

    pub fn flashcards(&self) -> FlashcardDrill {
        FlashcardDrill::mount(self.store.clone())
    }

    pub fn notes(&self) -> NotesEditor {
        NotesEditor::mount(self.store.clone())
    }

    /// One-shot commands never tick; `pomodoro run` drives a real ticker.
    pub fn pomodoro(&self) -> PomodoroTimer<ManualTicker> {
        PomodoroTimer::mount(self.store.clone(), ManualTicker::new())
    }

    pub fn exams(&self) -> ExamPlanner {
        ExamPlanner::mount(self.store.clone())
    }

    pub fn todos(&self) -> TodoList {
        TodoList::mount(self.store.clone())
    }

    pub fn calendar(&self) -> SubjectsCalendar {
        SubjectsCalendar::mount(self.store.clone())
    }
}

/// Find an id by exact match or unique prefix
pub fn resolve_id<'a, I>(ids: I, wanted: &str, what: &str) -> Result<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let ids: Vec<&str> = ids.into_iter().collect();

    if let Some(id) = ids.iter().find(|id| **id == wanted) {
        return Ok(id.to_string());
    }

    let matches: Vec<&&str> = ids.iter().filter(|id| id.starts_with(wanted)).collect();
    match matches.len() {
        0 => bail!("No {} with id '{}'", what, wanted),
        1 => Ok(matches[0].to_string()),
        _ => bail!(
            "Ambiguous {} id '{}'. Matches:\n{}",
            what,
            wanted,
            matches.iter().map(|id| format!("  - {}", id)).collect::<Vec<_>>().join("\n")
        ),
    }
}

/// Parse `YYYY-MM-DD`, `today` or `tomorrow`
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let today = Local::now().date_naive();
    match input.trim().to_lowercase().as_str() {
        "today" => Ok(today),
        "tomorrow" => today.succ_opt().context("Date out of range"),
        other => NaiveDate::parse_from_str(other, "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", input)),
    }
}

/// Read text from stdin when the argument is "-"
pub fn resolve_text(text: Option<String>) -> Result<Option<String>> {
    read_text_from(text, std::io::stdin())
}

fn read_text_from(text: Option<String>, mut input: impl Read) -> Result<Option<String>> {
    match text.as_deref() {
        Some("-") => {
            let mut buf = String::new();
            input
                .read_to_string(&mut buf)
                .context("Failed to read notes from stdin")?;
            Ok(Some(buf))
        }
        _ => Ok(text),
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_dash_reads_input() {
        let text = read_text_from(Some("-".to_string()), "line one\nline two".as_bytes()).unwrap();
        assert_eq!(text.as_deref(), Some("line one\nline two"));
    }

    #[test]
    fn test_plain_text_passes_through() {
        let text = read_text_from(Some("inline".to_string()), FailingReader).unwrap();
        assert_eq!(text.as_deref(), Some("inline"));
        assert_eq!(read_text_from(None, FailingReader).unwrap(), None);
    }

    #[test]
    fn test_read_error_is_reported() {
        let err = read_text_from(Some("-".to_string()), FailingReader).unwrap_err();
        assert!(err.to_string().contains("Failed to read notes from stdin"));
    }

    #[test]
    fn test_resolve_id_prefix() {
        let ids = ["abc123", "abd456"];
        assert_eq!(resolve_id(ids, "abc", "note").unwrap(), "abc123");
        assert!(resolve_id(ids, "ab", "note").is_err());
        assert!(resolve_id(ids, "zz", "note").is_err());
    }
}
