//! Eisenhower matrix to-do list with a Parkinson's-law daily-hours hint

pub mod list;
pub mod matrix;
pub mod models;

pub use list::TodoList;
pub use matrix::{days_left, quadrants, suggestion};
pub use models::{Quadrant, Todo};
