//! Local key-value persistence for the dashboard widgets
//!
//! Every widget owns exactly one JSON document (two for the calendar) in a
//! flat key namespace. Layout when backed by [`FileStore`]:
//! ```text
//! {data-dir}/
//! ├── config.toml               # optional, see crate::config
//! ├── assignments_v1.json
//! ├── flashcards_v2.json
//! ├── cornell_notes_v1.json
//! ├── pomodoro_state_v1.json
//! ├── prepare_exam_v2.json
//! ├── todo_eisenhower_v1.json
//! ├── studyloom_subjects_v1.json
//! └── studyloom_events_v1.json
//! ```
//!
//! Widgets never talk to a backend directly: they go through [`Persisted`],
//! which turns every read fault into "absent" and drops failed writes.

mod file_store;
mod kv;
mod persisted;

pub use file_store::FileStore;
pub use kv::{KeyValueStore, MemoryStore, SharedStore, StorageError};
pub use persisted::Persisted;

#[cfg(test)]
pub(crate) use kv::BrokenStore;
