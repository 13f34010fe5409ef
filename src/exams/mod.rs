//! Exam preparation: upcoming exams and a naive study plan

pub mod models;
pub mod planner;

pub use models::*;
pub use planner::{build_plan, upcoming, ExamPlanner, PLAN_HORIZON_DAYS};
