//! Assignment tracker: a fixed sample list with a persisted done-map

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::store::{Persisted, SharedStore};

pub const STORAGE_KEY: &str = "assignments_v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: String,
    pub title: String,
}

impl Assignment {
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
        }
    }
}

/// The built-in assignment list
pub fn sample_assignments() -> Vec<Assignment> {
    vec![
        Assignment::new("a1", "Math homework"),
        Assignment::new("a2", "Science lab report"),
        Assignment::new("a3", "Read chapter 5"),
    ]
}

/// Persisted companion state: assignment id -> done
pub type DoneMap = BTreeMap<String, bool>;

pub struct AssignmentTracker {
    assignments: Vec<Assignment>,
    done: DoneMap,
    record: Persisted<DoneMap>,
}

impl AssignmentTracker {
    /// Mount with the built-in sample list
    pub fn mount(store: SharedStore) -> Self {
        Self::with_assignments(store, sample_assignments())
    }

    pub fn with_assignments(store: SharedStore, assignments: Vec<Assignment>) -> Self {
        let record = Persisted::new(store, STORAGE_KEY);
        let done = record.load_or_default();
        Self {
            assignments,
            done,
            record,
        }
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn is_done(&self, id: &str) -> bool {
        self.done.get(id).copied().unwrap_or(false)
    }

    /// Flip the done flag of an assignment. Unknown ids are ignored.
    pub fn toggle(&mut self, id: &str) -> bool {
        if !self.assignments.iter().any(|a| a.id == id) {
            log::debug!("Ignoring toggle for unknown assignment {}", id);
            return false;
        }

        let done = !self.is_done(id);
        self.done.insert(id.to_string(), done);
        self.record.save(&self.done);
        true
    }

    pub fn reset(&mut self) {
        self.done.clear();
        self.record.save(&self.done);
    }

    /// Number of listed assignments marked done
    pub fn done_count(&self) -> usize {
        self.assignments.iter().filter(|a| self.is_done(&a.id)).count()
    }

    pub fn total(&self) -> usize {
        self.assignments.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{KeyValueStore, MemoryStore};

    #[test]
    fn test_starts_with_nothing_done() {
        let tracker = AssignmentTracker::mount(MemoryStore::shared());
        assert_eq!(tracker.total(), 3);
        assert_eq!(tracker.done_count(), 0);
        assert!(!tracker.is_done("a1"));
    }

    #[test]
    fn test_toggle_persists_and_reloads() {
        let store = MemoryStore::shared();
        let mut tracker = AssignmentTracker::mount(store.clone());

        assert!(tracker.toggle("a2"));
        assert!(tracker.is_done("a2"));
        assert_eq!(tracker.done_count(), 1);

        let reloaded = AssignmentTracker::mount(store.clone());
        assert!(reloaded.is_done("a2"));

        let raw = store.get_item(STORAGE_KEY).unwrap().unwrap();
        let map: DoneMap = serde_json::from_str(&raw).unwrap();
        assert_eq!(map.get("a2"), Some(&true));
    }

    #[test]
    fn test_toggle_twice_marks_undone() {
        let mut tracker = AssignmentTracker::mount(MemoryStore::shared());
        tracker.toggle("a1");
        tracker.toggle("a1");
        assert!(!tracker.is_done("a1"));
        assert_eq!(tracker.done_count(), 0);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let store = MemoryStore::shared();
        let mut tracker = AssignmentTracker::mount(store.clone());
        assert!(!tracker.toggle("zz"));
        assert!(store.get_item(STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_reset_clears_map() {
        let store = MemoryStore::shared();
        let mut tracker = AssignmentTracker::mount(store.clone());
        tracker.toggle("a1");
        tracker.toggle("a3");
        tracker.reset();

        assert_eq!(tracker.done_count(), 0);
        assert_eq!(store.get_item(STORAGE_KEY).unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_malformed_map_falls_back_to_empty() {
        let store = MemoryStore::shared();
        store.set_item(STORAGE_KEY, "[\"a1\"]").unwrap();
        let tracker = AssignmentTracker::mount(store);
        assert_eq!(tracker.done_count(), 0);
    }
}
