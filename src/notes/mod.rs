//! Cornell-method notes: cue column, note body and summary

pub mod editor;
pub mod models;

pub use editor::NotesEditor;
pub use models::*;
