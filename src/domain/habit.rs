use super::date_key::DateKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;
use uuid::Uuid;

/// Identifier of a habit, unique within the store
pub type HabitId = Uuid;

/// Habits a fresh install starts with
pub const DEFAULT_HABITS: [&str; 3] = ["Drink water", "Exercise", "Reading"];

/// A recurring habit and the days it was marked done
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: HabitId,
    pub name: String,
    /// Absent keys count as not done
    #[serde(default)]
    pub completion_by_date: BTreeMap<DateKey, bool>,
}

impl Habit {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            completion_by_date: BTreeMap::new(),
        }
    }

    pub fn is_done(&self, date_key: &DateKey) -> bool {
        self.completion_by_date.get(date_key).copied().unwrap_or(false)
    }

    /// Number of the given days this habit was done
    pub fn completed_count_in<'a>(&self, keys: impl IntoIterator<Item = &'a DateKey>) -> usize {
        keys.into_iter().filter(|key| self.is_done(key)).count()
    }
}

/// Ordered list of habits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitStore {
    habits: Vec<Habit>,
}

impl Default for HabitStore {
    /// The fresh-install seed
    fn default() -> Self {
        Self {
            habits: DEFAULT_HABITS
                .iter()
                .map(|name| Habit::new(name.to_string()))
                .collect(),
        }
    }
}

impl HabitStore {
    /// A store with no habits at all (not the fresh-install seed)
    #[cfg(test)]
    pub fn empty() -> Self {
        Self { habits: Vec::new() }
    }

    /// Append a habit. Blank names are ignored.
    pub fn add(&mut self, name: &str) -> Option<HabitId> {
        if name.trim().is_empty() {
            return None;
        }

        let habit = Habit::new(name.to_string());
        let id = habit.id;
        self.habits.push(habit);
        debug!(%id, "habit added");
        Some(id)
    }

    /// Flip whether a habit was done on a day
    pub fn toggle_for_date(&mut self, habit_id: HabitId, date_key: &DateKey) {
        if let Some(habit) = self.habits.iter_mut().find(|h| h.id == habit_id) {
            let done = !habit.is_done(date_key);
            habit.completion_by_date.insert(date_key.clone(), done);
            debug!(%habit_id, %date_key, done, "habit toggled");
        }
    }

    /// Remove a habit with its whole history
    pub fn delete(&mut self, habit_id: HabitId) {
        self.habits.retain(|h| h.id != habit_id);
    }

    #[cfg(test)]
    pub fn get(&self, habit_id: HabitId) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == habit_id)
    }

    #[cfg(test)]
    pub fn is_done(&self, habit_id: HabitId, date_key: &DateKey) -> bool {
        self.get(habit_id).is_some_and(|h| h.is_done(date_key))
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }
}
