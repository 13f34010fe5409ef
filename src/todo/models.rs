//! Data models for the Eisenhower to-do list

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub title: String,
    /// Due day (YYYY-MM-DD), counted until 23:59:59 local time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,
    #[serde(default)]
    pub important: bool,
    #[serde(default)]
    pub urgent: bool,
    #[serde(default)]
    pub done: bool,
    pub created_at: DateTime<Utc>,
}

impl Todo {
    pub fn quadrant(&self) -> Quadrant {
        Quadrant::classify(self.important, self.urgent)
    }
}

/// One cell of the importance/urgency matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    Do,
    Plan,
    Delegate,
    Eliminate,
}

impl Quadrant {
    /// Matrix order: top row first
    pub const ALL: [Quadrant; 4] = [
        Quadrant::Do,
        Quadrant::Plan,
        Quadrant::Delegate,
        Quadrant::Eliminate,
    ];

    pub fn classify(important: bool, urgent: bool) -> Self {
        match (important, urgent) {
            (true, true) => Quadrant::Do,
            (true, false) => Quadrant::Plan,
            (false, true) => Quadrant::Delegate,
            (false, false) => Quadrant::Eliminate,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Quadrant::Do => "Important & Urgent - Do",
            Quadrant::Plan => "Important & Not Urgent - Plan",
            Quadrant::Delegate => "Not Important & Urgent - Delegate",
            Quadrant::Eliminate => "Not Important & Not Urgent - Eliminate",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Quadrant::Do => "do",
            Quadrant::Plan => "plan",
            Quadrant::Delegate => "delegate",
            Quadrant::Eliminate => "eliminate",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_is_exclusive() {
        let mut seen = Vec::new();
        for important in [false, true] {
            for urgent in [false, true] {
                seen.push(Quadrant::classify(important, urgent));
            }
        }
        seen.sort_by_key(|q| q.as_str());
        seen.dedup();
        assert_eq!(seen.len(), 4);
        assert_eq!(Quadrant::classify(true, false), Quadrant::Plan);
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        let todo = Todo {
            id: "1".to_string(),
            title: "Essay".to_string(),
            deadline: None,
            estimated_hours: None,
            important: true,
            urgent: false,
            done: false,
            created_at: "2026-03-01T10:00:00Z".parse().unwrap(),
        };
        let json = serde_json::to_string(&todo).unwrap();
        assert!(!json.contains("deadline"));
        assert!(!json.contains("estimatedHours"));
        assert!(json.contains("\"createdAt\""));
    }

    #[test]
    fn test_decodes_browser_document() {
        let raw = r#"{"id":"1709287200000","title":"Essay","deadline":"2026-03-05",
            "estimatedHours":4,"important":true,"urgent":false,"done":false,
            "createdAt":"2026-03-01T10:00:00.000Z"}"#;
        let todo: Todo = serde_json::from_str(raw).unwrap();
        assert_eq!(todo.estimated_hours, Some(4.0));
        assert_eq!(todo.deadline, NaiveDate::from_ymd_opt(2026, 3, 5));
        assert_eq!(todo.quadrant(), Quadrant::Plan);
    }
}
