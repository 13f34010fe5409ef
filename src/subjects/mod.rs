//! Subjects with progress and colors, and a calendar of study events

pub mod calendar;
pub mod models;

pub use calendar::{CalendarError, SubjectsCalendar};
pub use models::*;
