pub mod habits_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod shopping_pane;
pub mod stats_pane;
pub mod styles;
pub mod week_pane;

use crate::app::AppState;
use habits_pane::render_habits_pane;
use input_form::render_input_form;
use keybindings::{render_header, render_keybindings};
use layout::create_layout;
use ratatui::{widgets::Block, Frame};
use shopping_pane::render_shopping_columns;
use stats_pane::render_stats_pane;
use styles::palette;
use week_pane::render_task_columns;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &mut AppState) {
    let size = f.size();
    let layout = create_layout(size);

    // Recompute stats first if they went stale; everything below only reads
    let stats = app.stats().clone();
    let app: &AppState = app;
    let palette = palette(app.planner.theme);

    f.render_widget(Block::default().style(palette.base_style()), size);

    render_keybindings(f, &palette, layout.keybindings_area);
    render_header(f, app, &palette, layout.header_area);

    render_task_columns(f, app, &palette, &layout.task_columns);
    render_shopping_columns(f, app, &stats, &palette, &layout.shopping_columns);
    render_habits_pane(f, app, &palette, layout.habits_area);
    render_stats_pane(f, &stats, &palette, layout.stats_area);

    if app.input_form.is_some() {
        render_input_form(f, app, &palette, size);
    }
}
