//! Note list plus the single edit form

use chrono::{Local, Utc};
use uuid::Uuid;

use super::models::{CornellNote, NoteDraft};
use crate::store::{Persisted, SharedStore};

pub const STORAGE_KEY: &str = "cornell_notes_v1";

pub struct NotesEditor {
    notes: Vec<CornellNote>,
    draft: NoteDraft,
    selected_id: Option<String>,
    record: Persisted<Vec<CornellNote>>,
}

impl NotesEditor {
    pub fn mount(store: SharedStore) -> Self {
        let record = Persisted::new(store, STORAGE_KEY);
        let notes = record.load_or_default();
        Self {
            notes,
            draft: NoteDraft::default(),
            selected_id: None,
            record,
        }
    }

    pub fn notes(&self) -> &[CornellNote] {
        &self.notes
    }

    pub fn get(&self, id: &str) -> Option<&CornellNote> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn draft(&self) -> &NoteDraft {
        &self.draft
    }

    /// Form fields are edited in place; nothing is stored until [`save`](Self::save)
    pub fn draft_mut(&mut self) -> &mut NoteDraft {
        &mut self.draft
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// Store the form. Overwrites the selected note in place, otherwise
    /// prepends a new one. The form is always cleared afterwards, so saving
    /// again creates another note. Returns the saved note's id.
    pub fn save(&mut self) -> String {
        let draft = std::mem::take(&mut self.draft);
        let title = if draft.title.trim().is_empty() {
            Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
        } else {
            draft.title
        };

        let note = CornellNote {
            id: self
                .selected_id
                .take()
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            title,
            cue: draft.cue,
            notes: draft.notes,
            summary: draft.summary,
            created_at: Utc::now(),
        };
        let id = note.id.clone();

        match self.notes.iter_mut().find(|n| n.id == note.id) {
            Some(existing) => *existing = note,
            None => self.notes.insert(0, note),
        }

        self.record.save(&self.notes);
        id
    }

    /// Fill the form from a stored note. Unknown ids are ignored.
    pub fn load(&mut self, id: &str) -> bool {
        let Some(note) = self.get(id) else {
            return false;
        };

        let draft = NoteDraft::from(note);
        let selected = note.id.clone();
        self.draft = draft;
        self.selected_id = Some(selected);
        true
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let len_before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        if self.notes.len() == len_before {
            return false;
        }

        if self.selected_id.as_deref() == Some(id) {
            self.clear_form();
        }
        self.record.save(&self.notes);
        true
    }

    /// Start a fresh note, discarding the form and selection
    pub fn new_note(&mut self) {
        self.clear_form();
    }

    fn clear_form(&mut self) {
        self.selected_id = None;
        self.draft = NoteDraft::default();
    }
}
