//! StudyLoom: a local student productivity dashboard.
//!
//! Every tool owns one slice of a key-value store (see [`store`]) and keeps
//! its state there as a JSON document. Tools never talk to each other; the
//! [`overview`] only reads.

pub mod assignments;
pub mod config;
pub mod exams;
pub mod flashcards;
pub mod notes;
pub mod overview;
pub mod pomodoro;
pub mod store;
pub mod subjects;
pub mod todo;
