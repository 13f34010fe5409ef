pub mod assignments;
pub mod events;
pub mod exams;
pub mod flashcards;
pub mod notes;
pub mod overview;
pub mod pomodoro;
pub mod subjects;
pub mod todo;
