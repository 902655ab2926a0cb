use super::habit::HabitStore;
use super::shopping::ShoppingStore;
use super::task::TaskStore;
use serde::{Deserialize, Serialize};

/// Light or dark palette, persisted as a boolean (true = dark)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "bool", into = "bool")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl From<bool> for ThemeMode {
    fn from(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

impl From<ThemeMode> for bool {
    fn from(mode: ThemeMode) -> Self {
        mode.is_dark()
    }
}

/// Everything the planner persists, held in one place
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Planner {
    pub theme: ThemeMode,
    pub tasks: TaskStore,
    pub habits: HabitStore,
    pub shopping: ShoppingStore,
}
