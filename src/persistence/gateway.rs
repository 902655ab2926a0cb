use crate::domain::{HabitStore, Planner, PlannerError, ShoppingStore, TaskStore, ThemeMode};
use crate::persistence::files::{atomic_write, read_file};
use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

/// Logical keys of the persisted blobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlobKey {
    ThemeMode,
    Tasks,
    Habits,
    Shopping,
}

impl BlobKey {
    #[cfg(test)]
    pub const ALL: [BlobKey; 4] = [Self::ThemeMode, Self::Tasks, Self::Habits, Self::Shopping];

    pub fn name(&self) -> &'static str {
        match self {
            Self::ThemeMode => "dark-mode",
            Self::Tasks => "tasks",
            Self::Habits => "habits",
            Self::Shopping => "shopping",
        }
    }
}

/// Whole-blob key-value storage
pub trait BlobStore {
    /// Read a blob, `None` when it was never written
    fn load(&self, key: BlobKey) -> Result<Option<String>>;

    /// Replace a blob
    fn save(&mut self, key: BlobKey, blob: &str) -> Result<()>;
}

/// One JSON file per key inside the data directory
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: BlobKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.name()))
    }
}

impl BlobStore for FileBlobStore {
    fn load(&self, key: BlobKey) -> Result<Option<String>> {
        read_file(self.path_for(key))
    }

    fn save(&mut self, key: BlobKey, blob: &str) -> Result<()> {
        atomic_write(self.path_for(key), blob)
    }
}

/// Blobs kept in memory only
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: std::collections::HashMap<BlobKey, String>,
}

#[cfg(test)]
impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl BlobStore for MemoryBlobStore {
    fn load(&self, key: BlobKey) -> Result<Option<String>> {
        Ok(self.blobs.get(&key).cloned())
    }

    fn save(&mut self, key: BlobKey, blob: &str) -> Result<()> {
        self.blobs.insert(key, blob.to_string());
        Ok(())
    }
}

/// Result of loading the planner: the state plus anything that fell back to defaults
#[derive(Debug)]
pub struct LoadOutcome {
    pub planner: Planner,
    pub warnings: Vec<PlannerError>,
}

/// Load every store, falling back to its default when a blob is missing or unusable
pub fn load_planner(store: &dyn BlobStore) -> LoadOutcome {
    let mut warnings = Vec::new();

    let theme: ThemeMode = load_value(store, BlobKey::ThemeMode, &mut warnings);
    let tasks: TaskStore = load_value(store, BlobKey::Tasks, &mut warnings);
    let habits: HabitStore = load_value(store, BlobKey::Habits, &mut warnings);
    let shopping: ShoppingStore = load_value(store, BlobKey::Shopping, &mut warnings);

    info!(
        tasks = tasks.len(),
        habits = habits.len(),
        fallbacks = warnings.len(),
        "planner loaded"
    );

    LoadOutcome {
        planner: Planner {
            theme,
            tasks,
            habits,
            shopping,
        },
        warnings,
    }
}

fn load_value<T>(store: &dyn BlobStore, key: BlobKey, warnings: &mut Vec<PlannerError>) -> T
where
    T: DeserializeOwned + Default,
{
    let error = match store.load(key) {
        Ok(None) => return T::default(),
        Ok(Some(blob)) => match serde_json::from_str(&blob) {
            Ok(value) => return value,
            Err(source) => PlannerError::Corrupt {
                key: key.name(),
                source,
            },
        },
        Err(source) => PlannerError::PersistenceUnavailable {
            key: key.name(),
            source,
        },
    };

    warn!(key = key.name(), error = %error, "falling back to default");
    warnings.push(error);
    T::default()
}

/// Write every store. All blobs are attempted; the first failure is returned.
pub fn save_planner(store: &mut dyn BlobStore, planner: &Planner) -> Result<(), PlannerError> {
    let results = [
        save_value(store, BlobKey::ThemeMode, &planner.theme),
        save_value(store, BlobKey::Tasks, &planner.tasks),
        save_value(store, BlobKey::Habits, &planner.habits),
        save_value(store, BlobKey::Shopping, &planner.shopping),
    ];

    results.into_iter().collect::<Result<Vec<()>, _>>()?;
    Ok(())
}

fn save_value<T: Serialize>(
    store: &mut dyn BlobStore,
    key: BlobKey,
    value: &T,
) -> Result<(), PlannerError> {
    let unavailable = |source: anyhow::Error| PlannerError::PersistenceUnavailable {
        key: key.name(),
        source,
    };

    let blob = serde_json::to_string_pretty(value).map_err(|e| unavailable(e.into()))?;
    store.save(key, &blob).map_err(unavailable)
}
