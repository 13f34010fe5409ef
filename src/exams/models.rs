//! Data models for the exam planner

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Minutes allotted to every study block
pub const BLOCK_MINUTES: u32 = 45;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    pub id: String,
    pub subject: String,
    pub topic: String,
    /// Exam day (YYYY-MM-DD)
    pub date: NaiveDate,
}

impl Exam {
    /// Label used for study blocks and listings
    pub fn label(&self) -> String {
        format!("{}: {}", self.subject, self.topic)
    }
}

/// Persisted document under `prepare_exam_v2`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamBook {
    #[serde(default)]
    pub exams: Vec<Exam>,
}

/// One day's study allocation for one exam. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyBlock {
    pub date: NaiveDate,
    pub topic: String,
    pub minutes: u32,
}
