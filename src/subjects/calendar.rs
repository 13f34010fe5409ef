//! Subjects list and study calendar

use std::collections::BTreeMap;

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use super::models::{default_subjects, DayCell, EventItem, Subject, NEW_SUBJECT_COLOR};
use crate::store::{Persisted, SharedStore};

pub const SUBJECTS_KEY: &str = "studyloom_subjects_v1";
pub const EVENTS_KEY: &str = "studyloom_events_v1";

/// Titles a day cell lists before collapsing the rest
pub const DAY_CELL_LIMIT: usize = 3;

/// Rejections the user should be told about
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("Select a date first")]
    NoDateSelected,

    #[error("Enter an event title")]
    EmptyTitle,
}

pub struct SubjectsCalendar {
    subjects: Vec<Subject>,
    events: Vec<EventItem>,
    selected_date: Option<NaiveDate>,
    subjects_record: Persisted<Vec<Subject>>,
    events_record: Persisted<Vec<EventItem>>,
}

impl SubjectsCalendar {
    pub fn mount(store: SharedStore) -> Self {
        let subjects_record: Persisted<Vec<Subject>> = Persisted::new(store.clone(), SUBJECTS_KEY);
        let events_record = Persisted::new(store, EVENTS_KEY);
        let subjects = subjects_record
            .load()
            .map(|list| list.into_iter().map(Subject::sanitized).collect())
            .unwrap_or_else(default_subjects);
        let events = events_record.load_or_default();
        Self {
            subjects,
            events,
            selected_date: None,
            subjects_record,
            events_record,
        }
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn subject(&self, id: u32) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    pub fn events(&self) -> &[EventItem] {
        &self.events
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    /// Append a placeholder subject with the next free id. Refused once the
    /// highest id is `u32::MAX`.
    pub fn add_subject(&mut self) -> Option<u32> {
        let highest = self.subjects.iter().map(|s| s.id).max().unwrap_or(0);
        let Some(id) = highest.checked_add(1) else {
            log::warn!("No subject id left after {}", u32::MAX);
            return None;
        };
        self.subjects.push(Subject {
            id,
            name: format!("New Subject {}", id),
            description: None,
            progress: 0,
            color: Some(NEW_SUBJECT_COLOR.to_string()),
        });
        self.subjects_record.save(&self.subjects);
        Some(id)
    }

    /// Recolor one subject. A blank color clears it back to the default.
    /// Events already on the calendar keep their color.
    pub fn set_color(&mut self, id: u32, color: &str) -> bool {
        let color = Some(color.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string);
        self.update_subject(id, |s| s.color = color)
    }

    pub fn set_progress(&mut self, id: u32, progress: u8) -> bool {
        self.update_subject(id, |s| s.progress = progress.min(100))
    }

    /// Subject id -> event color
    pub fn color_map(&self) -> BTreeMap<u32, &str> {
        self.subjects.iter().map(|s| (s.id, s.event_color())).collect()
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = Some(date);
    }

    pub fn clear_selection(&mut self) {
        self.selected_date = None;
    }

    /// Put an event on the selected date, painted with the subject's
    /// current color. Returns the new event's id.
    pub fn add_event_for_selected_date(
        &mut self,
        title: &str,
        subject_id: Option<u32>,
    ) -> Result<String, CalendarError> {
        let date = self.selected_date.ok_or(CalendarError::NoDateSelected)?;
        let title = title.trim();
        if title.is_empty() {
            return Err(CalendarError::EmptyTitle);
        }

        let background_color = subject_id
            .and_then(|id| self.subject(id))
            .map(|s| s.event_color().to_string());

        let event = EventItem {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            start: date,
            end: None,
            subject_id,
            background_color,
        };
        let id = event.id.clone();
        log::info!("Added event '{}' on {}", event.title, date);
        self.events.push(event);
        self.events_record.save(&self.events);
        Ok(id)
    }

    pub fn edit_event_title(&mut self, id: &str, title: &str) -> bool {
        let Some(event) = self.events.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        event.title = title.to_string();
        self.events_record.save(&self.events);
        true
    }

    /// Events grouped by their start date
    pub fn events_by_date(&self) -> BTreeMap<NaiveDate, Vec<&EventItem>> {
        let mut days: BTreeMap<NaiveDate, Vec<&EventItem>> = BTreeMap::new();
        for event in &self.events {
            days.entry(event.start).or_default().push(event);
        }
        days
    }

    pub fn events_on(&self, date: NaiveDate) -> Vec<&EventItem> {
        self.events.iter().filter(|e| e.start == date).collect()
    }

    pub fn has_events(&self, date: NaiveDate) -> bool {
        self.events.iter().any(|e| e.start == date)
    }

    pub fn day_cell(&self, date: NaiveDate) -> DayCell<'_> {
        let all = self.events_on(date);
        let overflow = all.len().saturating_sub(DAY_CELL_LIMIT);
        DayCell {
            shown: all.into_iter().take(DAY_CELL_LIMIT).collect(),
            overflow,
        }
    }

    fn update_subject(&mut self, id: u32, f: impl FnOnce(&mut Subject)) -> bool {
        let Some(subject) = self.subjects.iter_mut().find(|s| s.id == id) else {
            return false;
        };
        f(subject);
        self.subjects_record.save(&self.subjects);
        true
    }
}
