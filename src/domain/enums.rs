/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    AddingHabit,
    AddingShoppingItem,
}

/// Which pane keyboard actions apply to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Tasks,
    Shopping,
    Habits,
}

impl Panel {
    /// Next pane in Tab order
    pub fn next(&self) -> Self {
        match self {
            Self::Tasks => Self::Shopping,
            Self::Shopping => Self::Habits,
            Self::Habits => Self::Tasks,
        }
    }

    /// Display name for pane titles
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tasks => "Tasks",
            Self::Shopping => "Shopping",
            Self::Habits => "Habits",
        }
    }
}
