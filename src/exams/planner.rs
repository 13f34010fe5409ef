//! Exam list and study plan generation
//!
//! The planner is deliberately naive: every exam gets one 45-minute block
//! per day from today until the day before the exam, at least one block and
//! at most a year of blocks.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use uuid::Uuid;

use super::models::{Exam, ExamBook, StudyBlock, BLOCK_MINUTES};
use crate::store::{Persisted, SharedStore};

pub const STORAGE_KEY: &str = "prepare_exam_v2";

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Most blocks one exam contributes
pub const PLAN_HORIZON_DAYS: i64 = 365;

/// Exams ordered by date, earliest first. Exams on the same day keep their
/// list order.
pub fn upcoming(exams: &[Exam]) -> Vec<&Exam> {
    let mut sorted: Vec<&Exam> = exams.iter().collect();
    sorted.sort_by_key(|e| e.date);
    sorted
}

/// Whole days from `now` until the start of `date`, rounded up
fn days_until(date: NaiveDate, now: NaiveDateTime) -> i64 {
    let millis = (date.and_time(NaiveTime::default()) - now).num_milliseconds();
    (millis + MILLIS_PER_DAY - 1).div_euclid(MILLIS_PER_DAY)
}

/// Study blocks for every exam, in upcoming order
pub fn build_plan(exams: &[Exam], now: NaiveDateTime) -> Vec<StudyBlock> {
    let today = now.date();
    let mut blocks = Vec::new();

    for exam in upcoming(exams) {
        let days = days_until(exam.date, now).clamp(1, PLAN_HORIZON_DAYS);
        let topic = exam.label();
        for offset in 0..days {
            blocks.push(StudyBlock {
                date: today + Duration::days(offset),
                topic: topic.clone(),
                minutes: BLOCK_MINUTES,
            });
        }
    }

    blocks
}

pub struct ExamPlanner {
    book: ExamBook,
    plan: Option<Vec<StudyBlock>>,
    record: Persisted<ExamBook>,
}

impl ExamPlanner {
    pub fn mount(store: SharedStore) -> Self {
        let record = Persisted::new(store, STORAGE_KEY);
        let book = record.load_or_default();
        Self {
            book,
            plan: None,
            record,
        }
    }

    pub fn exams(&self) -> &[Exam] {
        &self.book.exams
    }

    pub fn upcoming(&self) -> Vec<&Exam> {
        upcoming(&self.book.exams)
    }

    /// Add an exam to the top of the list. Blank subject/topic or a missing
    /// date is rejected. Returns the new exam's id.
    pub fn add_exam(
        &mut self,
        subject: &str,
        topic: &str,
        date: Option<NaiveDate>,
    ) -> Option<String> {
        let subject = subject.trim();
        let topic = topic.trim();
        let date = date?;
        if subject.is_empty() || topic.is_empty() {
            return None;
        }

        let exam = Exam {
            id: Uuid::new_v4().to_string(),
            subject: subject.to_string(),
            topic: topic.to_string(),
            date,
        };
        let id = exam.id.clone();
        self.book.exams.insert(0, exam);
        self.record.save(&self.book);
        Some(id)
    }

    pub fn remove_exam(&mut self, id: &str) -> bool {
        let len_before = self.book.exams.len();
        self.book.exams.retain(|e| e.id != id);
        if self.book.exams.len() == len_before {
            return false;
        }
        self.record.save(&self.book);
        true
    }

    /// Remove every exam and drop the plan
    pub fn clear_all(&mut self) {
        self.book.exams.clear();
        self.plan = None;
        self.record.save(&self.book);
    }

    /// Generate the plan as of `now`. Without exams this does nothing.
    pub fn build_plan(&mut self, now: NaiveDateTime) -> Option<&[StudyBlock]> {
        if self.book.exams.is_empty() {
            return None;
        }
        let blocks = build_plan(&self.book.exams, now);
        log::info!("Built study plan: {} blocks for {} exams", blocks.len(), self.book.exams.len());
        self.plan = Some(blocks);
        self.plan.as_deref()
    }

    pub fn plan(&self) -> Option<&[StudyBlock]> {
        self.plan.as_deref()
    }

    pub fn reset_plan(&mut self) {
        self.plan = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{KeyValueStore, MemoryStore};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    fn exam(subject: &str, day: &str) -> Exam {
        Exam {
            id: subject.to_lowercase(),
            subject: subject.to_string(),
            topic: "Final".to_string(),
            date: date(day),
        }
    }

    #[test]
    fn test_exam_today_gets_one_block() {
        let blocks = build_plan(&[exam("Math", "2026-03-10")], at("2026-03-10 09:30"));
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].date, date("2026-03-10"));
        assert_eq!(blocks[0].minutes, 45);
        assert_eq!(blocks[0].topic, "Math: Final");
    }

    #[test]
    fn test_exam_three_days_out() {
        for now in ["2026-03-10 00:00", "2026-03-10 15:45"] {
            let blocks = build_plan(&[exam("Math", "2026-03-13")], at(now));
            assert_eq!(blocks.len(), 3, "now = {}", now);
            let dates: Vec<NaiveDate> = blocks.iter().map(|b| b.date).collect();
            assert_eq!(
                dates,
                vec![date("2026-03-10"), date("2026-03-11"), date("2026-03-12")]
            );
            assert!(blocks.iter().all(|b| b.minutes == 45));
        }
    }

    #[test]
    fn test_past_exam_still_gets_one_block() {
        let blocks = build_plan(&[exam("History", "2026-01-01")], at("2026-03-10 12:00"));
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].date, date("2026-03-10"));
    }

    #[test]
    fn test_far_exam_is_capped_to_horizon() {
        let blocks = build_plan(&[exam("Math", "9999-12-31")], at("2026-03-10 08:00"));
        assert_eq!(blocks.len(), PLAN_HORIZON_DAYS as usize);
        assert_eq!(blocks.last().unwrap().date, date("2027-03-09"));
    }

    #[test]
    fn test_plan_follows_upcoming_order() {
        let exams = vec![exam("Physics", "2026-03-12"), exam("Math", "2026-03-11")];
        let blocks = build_plan(&exams, at("2026-03-10 08:00"));
        let topics: Vec<&str> = blocks.iter().map(|b| b.topic.as_str()).collect();
        assert_eq!(topics, vec!["Math: Final", "Physics: Final", "Physics: Final"]);
    }

    #[test]
    fn test_plan_is_reproducible() {
        let exams = vec![exam("Physics", "2026-04-01"), exam("Math", "2026-03-20")];
        let now = at("2026-03-10 08:00");
        assert_eq!(build_plan(&exams, now), build_plan(&exams, now));
    }

    #[test]
    fn test_upcoming_is_stable() {
        let mut a = exam("A", "2026-05-01");
        a.id = "first".to_string();
        let mut b = exam("B", "2026-05-01");
        b.id = "second".to_string();
        let c = exam("C", "2026-04-01");
        let exams = vec![a, b, c];

        let ids: Vec<&str> = upcoming(&exams).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "first", "second"]);
    }

    #[test]
    fn test_add_exam_validation() {
        let store = MemoryStore::shared();
        let mut planner = ExamPlanner::mount(store.clone());
        assert!(planner.add_exam("  ", "Calculus", Some(date("2026-05-01"))).is_none());
        assert!(planner.add_exam("Math", "", Some(date("2026-05-01"))).is_none());
        assert!(planner.add_exam("Math", "Calculus", None).is_none());
        assert!(planner.exams().is_empty());
        assert!(store.get_item(STORAGE_KEY).unwrap().is_none());

        let id = planner
            .add_exam(" Math ", " Calculus ", Some(date("2026-05-01")))
            .unwrap();
        assert_eq!(planner.exams()[0].id, id);
        assert_eq!(planner.exams()[0].subject, "Math");
        assert_eq!(planner.exams()[0].topic, "Calculus");
    }

    #[test]
    fn test_add_prepends_and_persists() {
        let store = MemoryStore::shared();
        let mut planner = ExamPlanner::mount(store.clone());
        planner.add_exam("Math", "Calculus", Some(date("2026-05-01")));
        let second = planner.add_exam("Physics", "Optics", Some(date("2026-04-01"))).unwrap();
        assert_eq!(planner.exams()[0].id, second);

        let reloaded = ExamPlanner::mount(store.clone());
        assert_eq!(reloaded.exams().len(), 2);
        assert!(reloaded.plan().is_none());

        let raw = store.get_item(STORAGE_KEY).unwrap().unwrap();
        assert!(raw.contains("\"exams\""));
        assert!(raw.contains("\"2026-04-01\""));
    }

    #[test]
    fn test_plan_lifecycle() {
        let mut planner = ExamPlanner::mount(MemoryStore::shared());
        assert!(planner.build_plan(at("2026-03-10 08:00")).is_none());

        planner.add_exam("Math", "Calculus", Some(date("2026-03-12")));
        let len = planner.build_plan(at("2026-03-10 08:00")).map(|p| p.len());
        assert_eq!(len, Some(2));

        planner.reset_plan();
        assert!(planner.plan().is_none());

        planner.build_plan(at("2026-03-10 08:00"));
        planner.clear_all();
        assert!(planner.plan().is_none());
        assert!(planner.exams().is_empty());
    }

    #[test]
    fn test_remove_exam() {
        let mut planner = ExamPlanner::mount(MemoryStore::shared());
        let id = planner.add_exam("Math", "Calculus", Some(date("2026-05-01"))).unwrap();
        assert!(!planner.remove_exam("missing"));
        assert!(planner.remove_exam(&id));
        assert!(planner.exams().is_empty());
    }

    #[test]
    fn test_stale_document_shape_is_ignored() {
        let store = MemoryStore::shared();
        store.set_item(STORAGE_KEY, r#"[{"subject":"Math"}]"#).unwrap();
        let planner = ExamPlanner::mount(store);
        assert!(planner.exams().is_empty());
    }
}
