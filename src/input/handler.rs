use crate::app::AppState;
use crate::domain::UiMode;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask | UiMode::AddingHabit | UiMode::AddingShoppingItem => {
            handle_input_form_mode(app, key)
        }
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Day selection
        KeyCode::Left | KeyCode::Char('h') => {
            app.select_previous_day();
            Ok(false)
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.select_next_day();
            Ok(false)
        }

        // Row selection
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection_down();
            Ok(false)
        }

        // Week navigation
        KeyCode::Char('[') | KeyCode::PageUp => {
            app.navigate_week(-1);
            Ok(false)
        }
        KeyCode::Char(']') | KeyCode::PageDown => {
            app.navigate_week(1);
            Ok(false)
        }
        KeyCode::Char('.') | KeyCode::Home => {
            app.go_to_today();
            Ok(false)
        }

        // Pane focus
        KeyCode::Tab => {
            app.focus_next_panel();
            Ok(false)
        }

        // Edit
        KeyCode::Char('a') => {
            app.start_add();
            Ok(false)
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.toggle_selected();
            Ok(false)
        }
        KeyCode::Char('x') | KeyCode::Delete => {
            app.delete_selected();
            Ok(false)
        }

        // Theme
        KeyCode::Char('t') => {
            app.toggle_theme();
            Ok(false)
        }

        KeyCode::Char('q') | KeyCode::Esc => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys while an add form is open
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Submit form
        KeyCode::Enter => {
            app.submit_input_form();
            Ok(false)
        }

        // Cancel form
        KeyCode::Esc => {
            app.cancel_input_form();
            Ok(false)
        }

        // Switch between name and price
        KeyCode::Tab => {
            app.input_form_toggle_field();
            Ok(false)
        }

        KeyCode::Backspace => {
            app.input_form_backspace();
            Ok(false)
        }

        KeyCode::Char(c) => {
            app.input_form_add_char(c);
            Ok(false)
        }

        _ => Ok(false),
    }
}
