use crate::domain::DAYS_PER_WEEK;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub header_area: Rect,
    /// One column per day, Monday first
    pub task_columns: Vec<Rect>,
    pub shopping_columns: Vec<Rect>,
    pub habits_area: Rect,
    pub stats_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row), then week header (1 row)
/// - Main area: week grid (72%) | sidebar (28%)
///   - Week grid: task columns above shopping columns
///   - Sidebar: habits above spending statistics
pub fn create_layout(area: Rect) -> MainLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Length(1), // Week header
            Constraint::Min(0),    // Main content
        ])
        .split(area);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(72), Constraint::Percentage(28)])
        .split(main_chunks[2]);

    let grid = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(content[0]);

    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(content[1]);

    MainLayout {
        keybindings_area: main_chunks[0],
        header_area: main_chunks[1],
        task_columns: day_columns(grid[0]),
        shopping_columns: day_columns(grid[1]),
        habits_area: sidebar[0],
        stats_area: sidebar[1],
    }
}

/// Split an area into seven equal day columns
fn day_columns(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, DAYS_PER_WEEK as u32); DAYS_PER_WEEK])
        .split(area)
        .to_vec()
}

/// Create centered modal area (for add forms)
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(12),
            Constraint::Percentage(25),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
