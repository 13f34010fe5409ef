//! Data models for subjects and calendar events

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Color for events whose subject has no color of its own
pub const DEFAULT_EVENT_COLOR: &str = "#0ea5e9";

/// Color given to freshly added subjects
pub const NEW_SUBJECT_COLOR: &str = "#10b981";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Percent complete, 0..=100
    #[serde(default)]
    pub progress: u8,
    /// Hex color such as `#ef4444`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Subject {
    /// The color events for this subject are painted with. A blank color
    /// counts as none.
    pub fn event_color(&self) -> &str {
        self.color
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_EVENT_COLOR)
    }

    /// Bring a decoded subject back within its invariants
    pub fn sanitized(mut self) -> Self {
        self.progress = self.progress.min(100);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventItem {
    pub id: String,
    pub title: String,
    pub start: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<u32>,
    /// Subject color captured when the event was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

/// What a calendar cell shows for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell<'a> {
    pub shown: Vec<&'a EventItem>,
    /// Events beyond the shown ones ("+N more")
    pub overflow: usize,
}

fn subject(id: u32, name: &str, description: &str, progress: u8, color: &str) -> Subject {
    Subject {
        id,
        name: name.to_string(),
        description: Some(description.to_string()),
        progress,
        color: Some(color.to_string()),
    }
}

/// Subjects shown on first run
pub fn default_subjects() -> Vec<Subject> {
    vec![
        subject(
            1,
            "Mathematics",
            "Advanced calculus, linear algebra, and statistics",
            65,
            "#ef4444",
        ),
        subject(
            2,
            "Physics",
            "Mechanics, thermodynamics, and quantum physics",
            45,
            "#06b6d4",
        ),
        subject(
            3,
            "Computer Science",
            "Programming, algorithms, and data structures",
            80,
            "#7c3aed",
        ),
    ]
}
