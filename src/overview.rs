//! Read-only summary across every tool

use chrono::NaiveDate;
use serde::Serialize;

use crate::assignments::AssignmentTracker;
use crate::exams::{Exam, ExamPlanner};
use crate::flashcards::FlashcardDrill;
use crate::notes::NotesEditor;
use crate::pomodoro::{timer, Phase, PomodoroState};
use crate::store::{Persisted, SharedStore};
use crate::subjects::SubjectsCalendar;
use crate::todo::TodoList;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub assignments_done: usize,
    pub assignments_total: usize,
    /// `subject: topic` of the active flashcard deck
    pub flashcard_deck: Option<String>,
    pub note_count: usize,
    pub pomodoro_phase: Phase,
    pub pomodoro_cycles: u32,
    pub tasks_left: usize,
    pub tasks_total: usize,
    /// Earliest exam on or after today
    pub next_exam: Option<Exam>,
    pub subject_count: usize,
    pub events_today: usize,
}

impl Overview {
    /// Build the summary from whatever is stored. Nothing is written.
    pub fn collect(store: &SharedStore, today: NaiveDate) -> Self {
        let assignments = AssignmentTracker::mount(store.clone());
        let flashcards = FlashcardDrill::mount(store.clone());
        let notes = NotesEditor::mount(store.clone());
        let todos = TodoList::mount(store.clone());
        let exams = ExamPlanner::mount(store.clone());
        let calendar = SubjectsCalendar::mount(store.clone());

        // Read the timer state directly so no ticker gets started
        let pomodoro: PomodoroState = Persisted::new(store.clone(), timer::STORAGE_KEY)
            .load()
            .map(PomodoroState::sanitized)
            .unwrap_or_default();

        let session = flashcards.session();
        let flashcard_deck = session
            .is_active()
            .then(|| format!("{}: {}", session.subject, session.topic));

        let next_exam = exams
            .upcoming()
            .into_iter()
            .find(|e| e.date >= today)
            .cloned();

        Self {
            assignments_done: assignments.done_count(),
            assignments_total: assignments.total(),
            flashcard_deck,
            note_count: notes.notes().len(),
            pomodoro_phase: pomodoro.phase,
            pomodoro_cycles: pomodoro.completed_cycles,
            tasks_left: todos.tasks_left(),
            tasks_total: todos.items().len(),
            next_exam,
            subject_count: calendar.subjects().len(),
            events_today: calendar.events_on(today).len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{KeyValueStore, MemoryStore};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_empty_store() {
        let store = MemoryStore::shared();
        let overview = Overview::collect(&store, date("2026-03-10"));
        assert_eq!(overview.assignments_done, 0);
        assert_eq!(overview.assignments_total, 3);
        assert_eq!(overview.flashcard_deck, None);
        assert_eq!(overview.pomodoro_phase, Phase::Work);
        assert_eq!(overview.subject_count, 3);
        assert_eq!(overview.next_exam, None);
        assert!(store.get_item(timer::STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_summarizes_each_tool() {
        let store = MemoryStore::shared();
        AssignmentTracker::mount(store.clone()).toggle("a2");
        FlashcardDrill::mount(store.clone()).start("Biology", "Cells");

        let mut todos = TodoList::mount(store.clone());
        let done = todos.add("Essay", None).unwrap();
        todos.add("Lab", None);
        todos.toggle_done(&done);

        let mut exams = ExamPlanner::mount(store.clone());
        exams.add_exam("History", "Rome", Some(date("2026-03-01")));
        exams.add_exam("Math", "Calculus", Some(date("2026-04-01")));
        exams.add_exam("Physics", "Optics", Some(date("2026-03-20")));

        let mut calendar = SubjectsCalendar::mount(store.clone());
        calendar.select_date(date("2026-03-10"));
        calendar.add_event_for_selected_date("Quiz", Some(1)).unwrap();

        store
            .set_item(
                timer::STORAGE_KEY,
                r#"{"phase":"short_break","remaining":60,"isRunning":false,"completedCycles":2}"#,
            )
            .unwrap();

        let overview = Overview::collect(&store, date("2026-03-10"));
        assert_eq!(overview.assignments_done, 1);
        assert_eq!(overview.flashcard_deck.as_deref(), Some("Biology: Cells"));
        assert_eq!(overview.tasks_left, 1);
        assert_eq!(overview.tasks_total, 2);
        assert_eq!(overview.next_exam.map(|e| e.subject), Some("Physics".to_string()));
        assert_eq!(overview.pomodoro_phase, Phase::ShortBreak);
        assert_eq!(overview.pomodoro_cycles, 2);
        assert_eq!(overview.events_today, 1);
    }
}
