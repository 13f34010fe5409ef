//! Data models for Cornell notes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved Cornell note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CornellNote {
    pub id: String,
    pub title: String,
    /// Left column: questions and keywords
    #[serde(default)]
    pub cue: String,
    /// Right column: the notes themselves
    #[serde(default)]
    pub notes: String,
    /// Bottom section
    #[serde(default)]
    pub summary: String,
    /// Stamped on every save
    pub created_at: DateTime<Utc>,
}

/// Edit form contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub cue: String,
    pub notes: String,
    pub summary: String,
}

impl NoteDraft {
    pub fn is_blank(&self) -> bool {
        self.title.is_empty()
            && self.cue.is_empty()
            && self.notes.is_empty()
            && self.summary.is_empty()
    }
}

impl From<&CornellNote> for NoteDraft {
    fn from(note: &CornellNote) -> Self {
        Self {
            title: note.title.clone(),
            cue: note.cue.clone(),
            notes: note.notes.clone(),
            summary: note.summary.clone(),
        }
    }
}
