//! Persisted Eisenhower to-do list

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use super::matrix;
use super::models::{Quadrant, Todo};
use crate::store::{Persisted, SharedStore};

pub const STORAGE_KEY: &str = "todo_eisenhower_v1";

pub struct TodoList {
    items: Vec<Todo>,
    record: Persisted<Vec<Todo>>,
}

impl TodoList {
    pub fn mount(store: SharedStore) -> Self {
        let record = Persisted::new(store, STORAGE_KEY);
        let items = record.load_or_default();
        Self { items, record }
    }

    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Todo> {
        self.items.iter().find(|t| t.id == id)
    }

    pub fn quadrants(&self) -> [(Quadrant, Vec<&Todo>); 4] {
        matrix::quadrants(&self.items)
    }

    /// Number of todos not yet done
    pub fn tasks_left(&self) -> usize {
        self.items.iter().filter(|t| !t.done).count()
    }

    /// Append a new todo. A blank title is rejected. Returns the new id.
    pub fn add(&mut self, title: &str, deadline: Option<NaiveDate>) -> Option<String> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }

        let todo = Todo {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            deadline,
            estimated_hours: None,
            important: false,
            urgent: false,
            done: false,
            created_at: Utc::now(),
        };
        let id = todo.id.clone();
        self.items.push(todo);
        self.record.save(&self.items);
        Some(id)
    }

    pub fn toggle_done(&mut self, id: &str) -> bool {
        self.update(id, |t| t.done = !t.done)
    }

    pub fn toggle_important(&mut self, id: &str) -> bool {
        self.update(id, |t| t.important = !t.important)
    }

    pub fn toggle_urgent(&mut self, id: &str) -> bool {
        self.update(id, |t| t.urgent = !t.urgent)
    }

    /// Set or clear the estimate. Non-finite or negative values clear it.
    pub fn set_estimated_hours(&mut self, id: &str, hours: Option<f64>) -> bool {
        let hours = hours.filter(|h| h.is_finite() && *h >= 0.0);
        self.update(id, |t| t.estimated_hours = hours)
    }

    pub fn set_deadline(&mut self, id: &str, deadline: Option<NaiveDate>) -> bool {
        self.update(id, |t| t.deadline = deadline)
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let len_before = self.items.len();
        self.items.retain(|t| t.id != id);
        if self.items.len() == len_before {
            return false;
        }
        self.record.save(&self.items);
        true
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.record.save(&self.items);
    }

    fn update(&mut self, id: &str, f: impl FnOnce(&mut Todo)) -> bool {
        let Some(todo) = self.items.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        f(todo);
        self.record.save(&self.items);
        true
    }
}
