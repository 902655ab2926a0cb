use super::date_key::DateKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;
use uuid::Uuid;

/// Identifier of a task, unique within the store
pub type TaskId = Uuid;

/// A to-do entry on a single day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            completed: false,
        }
    }
}

/// Tasks keyed by day, each day in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskStore {
    days: BTreeMap<DateKey, Vec<Task>>,
}

impl TaskStore {
    /// Append a task to a day. Blank text is ignored.
    pub fn add(&mut self, date_key: &DateKey, text: &str) -> Option<TaskId> {
        if text.trim().is_empty() {
            return None;
        }

        let task = Task::new(text.to_string());
        let id = task.id;
        self.days.entry(date_key.clone()).or_default().push(task);
        debug!(%date_key, %id, "task added");
        Some(id)
    }

    /// Flip the completion flag of a task
    pub fn toggle(&mut self, date_key: &DateKey, task_id: TaskId) {
        if let Some(task) = self
            .days
            .get_mut(date_key)
            .and_then(|tasks| tasks.iter_mut().find(|t| t.id == task_id))
        {
            task.completed = !task.completed;
            debug!(%date_key, %task_id, completed = task.completed, "task toggled");
        }
    }

    /// Remove a task from a day
    pub fn delete(&mut self, date_key: &DateKey, task_id: TaskId) {
        if let Some(tasks) = self.days.get_mut(date_key) {
            let before = tasks.len();
            tasks.retain(|t| t.id != task_id);
            if tasks.len() != before {
                debug!(%date_key, %task_id, "task deleted");
            }
        }
    }

    /// Tasks for a day (empty if none were ever added)
    pub fn tasks_for(&self, date_key: &DateKey) -> &[Task] {
        self.days.get(date_key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Completed and total task counts for a day
    pub fn progress_for(&self, date_key: &DateKey) -> (usize, usize) {
        let tasks = self.tasks_for(date_key);
        let done = tasks.iter().filter(|t| t.completed).count();
        (done, tasks.len())
    }

    /// Total number of tasks across all days
    pub fn len(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::date_key::key_of;
    use chrono::NaiveDate;

    fn day(d: u32) -> DateKey {
        key_of(NaiveDate::from_ymd_opt(2026, 10, d).unwrap())
    }

    #[test]
    fn test_add_task() {
        let mut store = TaskStore::default();
        let id = store.add(&day(19), "  Call the bank ").unwrap();

        let tasks = store.tasks_for(&day(19));
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, id);
        assert_eq!(tasks[0].text, "  Call the bank ");
        assert!(!tasks[0].completed);
    }

    #[test]
    fn test_add_blank_task_is_rejected() {
        let mut store = TaskStore::default();
        assert!(store.add(&day(19), "").is_none());
        assert!(store.add(&day(19), "   \t").is_none());
        assert!(store.is_empty());
        assert!(store.tasks_for(&day(19)).is_empty());
    }

    #[test]
    fn test_insertion_order_and_unique_ids() {
        let mut store = TaskStore::default();
        let a = store.add(&day(19), "first").unwrap();
        let b = store.add(&day(19), "second").unwrap();
        assert_ne!(a, b);

        let texts: Vec<&str> = store.tasks_for(&day(19)).iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[test]
    fn test_toggle_is_involution() {
        let mut store = TaskStore::default();
        let id = store.add(&day(20), "Water plants").unwrap();

        store.toggle(&day(20), id);
        assert!(store.tasks_for(&day(20))[0].completed);

        store.toggle(&day(20), id);
        assert!(!store.tasks_for(&day(20))[0].completed);
    }

    #[test]
    fn test_toggle_unknown_is_noop() {
        let mut store = TaskStore::default();
        let id = store.add(&day(20), "Water plants").unwrap();
        let snapshot = store.clone();

        store.toggle(&day(21), id);
        store.toggle(&day(20), Uuid::new_v4());
        assert_eq!(store, snapshot);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut store = TaskStore::default();
        let a = store.add(&day(22), "a").unwrap();
        store.add(&day(22), "b").unwrap();

        store.delete(&day(22), a);
        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks_for(&day(22))[0].text, "b");

        store.delete(&day(22), a);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_days_are_independent() {
        let mut store = TaskStore::default();
        let id = store.add(&day(19), "Monday").unwrap();
        store.add(&day(20), "Tuesday").unwrap();

        // Deleting with the wrong day leaves the task in place
        store.delete(&day(20), id);
        assert_eq!(store.tasks_for(&day(19)).len(), 1);
        assert_eq!(store.progress_for(&day(20)), (0, 1));
    }
}
