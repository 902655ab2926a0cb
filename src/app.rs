use crate::domain::{
    key_of, parse_price, shift, week_of, DateKey, HabitId, ItemId, NewShoppingItem, Panel, Planner,
    PlannerError, TaskId, UiMode, Week, DAYS_PER_WEEK,
};
use crate::persistence::{load_planner, save_planner, BlobStore};
use crate::report::stats::{compute_week_stats, WeekStats};
use chrono::{Datelike, NaiveDate};
use tracing::{info, warn};

/// Input form state for adding tasks, habits and shopping items
#[derive(Debug, Clone, Default)]
pub struct InputFormState {
    pub text: String,
    pub price: String,
    pub editing_field: usize, // 0 = text, 1 = price (shopping only)
    pub error: Option<String>,
}

/// Main application state
pub struct AppState {
    pub planner: Planner,
    storage: Box<dyn BlobStore>,
    /// Any date inside the visible week
    pub reference_date: NaiveDate,
    pub today: NaiveDate,
    pub focus: Panel,
    pub selected_day: usize, // 0 = Monday
    pub selected_row: usize,
    pub ui_mode: UiMode,
    pub input_form: Option<InputFormState>,
    pub needs_save: bool,
    pub status_message: Option<String>,
    stats_cache: Option<WeekStats>,
}

impl AppState {
    pub fn new(planner: Planner, storage: Box<dyn BlobStore>, today: NaiveDate) -> Self {
        Self {
            planner,
            storage,
            reference_date: today,
            today,
            focus: Panel::Tasks,
            selected_day: today.weekday().num_days_from_monday() as usize,
            selected_row: 0,
            ui_mode: UiMode::Normal,
            input_form: None,
            needs_save: false,
            status_message: None,
            stats_cache: None,
        }
    }

    /// Load the planner from storage, reporting fallbacks in the status line
    pub fn load(storage: Box<dyn BlobStore>, today: NaiveDate) -> Self {
        let outcome = load_planner(storage.as_ref());
        let mut app = Self::new(outcome.planner, storage, today);
        if let Some(first) = outcome.warnings.iter().find(|w| w.is_warning()) {
            app.status_message = Some(format!("Using defaults: {}", first));
        }
        app
    }

    // ── Week and selection ──────────────────────────────────────────

    pub fn week(&self) -> Week {
        week_of(self.reference_date)
    }

    pub fn visible_keys(&self) -> [DateKey; DAYS_PER_WEEK] {
        self.week().keys()
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.week().days()[self.selected_day.min(DAYS_PER_WEEK - 1)]
    }

    pub fn selected_key(&self) -> DateKey {
        key_of(self.selected_date())
    }

    /// Move the visible week by whole weeks, keeping the selected weekday
    pub fn navigate_week(&mut self, delta_weeks: i64) {
        let previous = self.week();
        self.reference_date = shift(self.reference_date, delta_weeks);
        if self.week() != previous {
            self.stats_cache = None;
        }
        self.selected_row = 0;
    }

    /// Jump back to the week containing today and select today
    pub fn go_to_today(&mut self) {
        let previous = self.week();
        self.reference_date = self.today;
        if self.week() != previous {
            self.stats_cache = None;
        }
        self.selected_day = self.today.weekday().num_days_from_monday() as usize;
        self.selected_row = 0;
    }

    /// Pick up a date change while the app is running
    pub fn refresh_today(&mut self, today: NaiveDate) {
        if today != self.today {
            info!(%today, "date changed");
            self.today = today;
        }
    }

    pub fn select_previous_day(&mut self) {
        if self.selected_day > 0 {
            self.selected_day -= 1;
            self.clamp_selection();
        }
    }

    pub fn select_next_day(&mut self) {
        if self.selected_day < DAYS_PER_WEEK - 1 {
            self.selected_day += 1;
            self.clamp_selection();
        }
    }

    pub fn focus_next_panel(&mut self) {
        self.focus = self.focus.next();
        self.selected_row = 0;
    }

    pub fn move_selection_up(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        let count = self.row_count();
        if count > 0 && self.selected_row < count - 1 {
            self.selected_row += 1;
        }
    }

    /// Number of rows in the focused pane for the selected day
    pub fn row_count(&self) -> usize {
        let key = self.selected_key();
        match self.focus {
            Panel::Tasks => self.planner.tasks.tasks_for(&key).len(),
            Panel::Shopping => self.planner.shopping.items_for(&key).len(),
            Panel::Habits => self.planner.habits.len(),
        }
    }

    fn clamp_selection(&mut self) {
        let count = self.row_count();
        self.selected_row = self.selected_row.min(count.saturating_sub(1));
    }

    fn selected_task_id(&self) -> Option<TaskId> {
        let key = self.selected_key();
        self.planner
            .tasks
            .tasks_for(&key)
            .get(self.selected_row)
            .map(|t| t.id)
    }

    fn selected_item_id(&self) -> Option<ItemId> {
        let key = self.selected_key();
        self.planner
            .shopping
            .items_for(&key)
            .get(self.selected_row)
            .map(|i| i.id)
    }

    fn selected_habit_id(&self) -> Option<HabitId> {
        self.planner.habits.habits().get(self.selected_row).map(|h| h.id)
    }

    // ── Mutations ───────────────────────────────────────────────────

    /// Toggle the selected row in the focused pane
    pub fn toggle_selected(&mut self) {
        let key = self.selected_key();
        match self.focus {
            Panel::Tasks => {
                if let Some(id) = self.selected_task_id() {
                    self.planner.tasks.toggle(&key, id);
                    self.needs_save = true;
                }
            }
            Panel::Shopping => {
                if let Some(id) = self.selected_item_id() {
                    self.planner.shopping.toggle_by_id(&key, id);
                    self.shopping_changed(&key);
                }
            }
            Panel::Habits => {
                if let Some(id) = self.selected_habit_id() {
                    self.planner.habits.toggle_for_date(id, &key);
                    self.needs_save = true;
                }
            }
        }
    }

    /// Delete the selected row in the focused pane
    pub fn delete_selected(&mut self) {
        let key = self.selected_key();
        match self.focus {
            Panel::Tasks => {
                if let Some(id) = self.selected_task_id() {
                    self.planner.tasks.delete(&key, id);
                    self.needs_save = true;
                }
            }
            Panel::Shopping => {
                if let Some(id) = self.selected_item_id() {
                    self.planner.shopping.delete_by_id(&key, id);
                    self.shopping_changed(&key);
                }
            }
            Panel::Habits => {
                if let Some(id) = self.selected_habit_id() {
                    self.planner.habits.delete(id);
                    self.needs_save = true;
                }
            }
        }
        self.clamp_selection();
    }

    pub fn add_task(&mut self, text: &str) -> bool {
        let key = self.selected_key();
        let added = self.planner.tasks.add(&key, text).is_some();
        if added {
            self.needs_save = true;
            self.select_last_row(Panel::Tasks);
        }
        added
    }

    pub fn add_habit(&mut self, name: &str) -> bool {
        let added = self.planner.habits.add(name).is_some();
        if added {
            self.needs_save = true;
            self.select_last_row(Panel::Habits);
        }
        added
    }

    /// Add a shopping item from form input; the error text is meant for the user
    pub fn add_shopping_item(&mut self, name: &str, price: &str) -> Result<(), String> {
        let price = parse_price(price).map_err(|e| e.to_string())?;
        let key = self.selected_key();
        self.planner
            .shopping
            .add(&key, NewShoppingItem::new(name, price))
            .map_err(|e| e.to_string())?;
        self.shopping_changed(&key);
        self.select_last_row(Panel::Shopping);
        Ok(())
    }

    pub fn toggle_theme(&mut self) {
        self.planner.theme = self.planner.theme.toggled();
        self.needs_save = true;
    }

    fn select_last_row(&mut self, panel: Panel) {
        if self.focus == panel {
            self.selected_row = self.row_count().saturating_sub(1);
        }
    }

    fn shopping_changed(&mut self, key: &DateKey) {
        self.needs_save = true;
        if self.week().contains(key) {
            self.stats_cache = None;
        }
    }

    // ── Statistics ──────────────────────────────────────────────────

    /// Spending statistics for the visible week, recomputed when stale
    pub fn stats(&mut self) -> &WeekStats {
        let week = self.week();
        let shopping = &self.planner.shopping;
        self.stats_cache
            .get_or_insert_with(|| compute_week_stats(shopping, &week))
    }

    #[cfg(test)]
    pub fn stats_are_fresh(&self) -> bool {
        self.stats_cache.is_some()
    }

    // ── Input form ──────────────────────────────────────────────────

    /// Open the add form for the focused pane
    pub fn start_add(&mut self) {
        self.ui_mode = match self.focus {
            Panel::Tasks => UiMode::AddingTask,
            Panel::Shopping => UiMode::AddingShoppingItem,
            Panel::Habits => UiMode::AddingHabit,
        };
        self.input_form = Some(InputFormState::default());
    }

    pub fn input_form_toggle_field(&mut self) {
        if self.ui_mode != UiMode::AddingShoppingItem {
            return;
        }
        if let Some(form) = &mut self.input_form {
            form.editing_field = (form.editing_field + 1) % 2;
        }
    }

    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.input_form {
            match form.editing_field {
                0 => form.text.push(c),
                _ => form.price.push(c),
            }
        }
    }

    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.input_form {
            match form.editing_field {
                0 => form.text.pop(),
                _ => form.price.pop(),
            };
        }
    }

    /// Submit the form; it stays open with an error message when the input is rejected
    pub fn submit_input_form(&mut self) {
        let Some(form) = self.input_form.take() else {
            return;
        };

        let result = match self.ui_mode {
            UiMode::AddingTask => {
                if self.add_task(&form.text) {
                    Ok(())
                } else {
                    Err(
                        PlannerError::InvalidInput("task text must not be empty".to_string())
                            .to_string(),
                    )
                }
            }
            UiMode::AddingHabit => {
                if self.add_habit(&form.text) {
                    Ok(())
                } else {
                    Err(
                        PlannerError::InvalidInput("habit name must not be empty".to_string())
                            .to_string(),
                    )
                }
            }
            UiMode::AddingShoppingItem => self.add_shopping_item(&form.text, &form.price),
            UiMode::Normal => Ok(()),
        };

        match result {
            Ok(()) => self.ui_mode = UiMode::Normal,
            Err(message) => {
                self.input_form = Some(InputFormState {
                    error: Some(message),
                    ..form
                });
            }
        }
    }

    pub fn cancel_input_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }

    // ── Persistence ─────────────────────────────────────────────────

    /// Write the planner through to storage. Failures are reported, never fatal.
    pub fn save(&mut self) {
        match save_planner(self.storage.as_mut(), &self.planner) {
            Ok(()) => {
                if self.status_message.as_deref().is_some_and(|m| m.starts_with("Save failed")) {
                    self.status_message = None;
                }
            }
            Err(err) => {
                warn!(error = %err, "save failed, keeping changes in memory");
                self.status_message = Some(format!("Save failed: {}", err));
            }
        }
        // A failed write is retried on the next change rather than every tick
        self.needs_save = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ThemeMode;
    use crate::persistence::{BlobKey, MemoryBlobStore};
    use anyhow::Result;

    /// 2026-10-21 is a Wednesday
    fn wednesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 21).unwrap()
    }

    fn create_test_app() -> AppState {
        AppState::load(Box::new(MemoryBlobStore::new()), wednesday())
    }

    struct ReadOnlyStore;

    impl BlobStore for ReadOnlyStore {
        fn load(&self, _key: BlobKey) -> Result<Option<String>> {
            Ok(None)
        }

        fn save(&mut self, _key: BlobKey, _blob: &str) -> Result<()> {
            anyhow::bail!("read-only file system")
        }
    }

    #[test]
    fn test_app_state_new() {
        let app = create_test_app();
        assert_eq!(app.selected_day, 2);
        assert_eq!(app.selected_key().to_string(), "2026-10-21");
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.planner.habits.len(), 3);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_add_task() {
        let mut app = create_test_app();
        assert!(app.add_task("Buy stamps"));
        assert!(app.needs_save);
        assert_eq!(app.planner.tasks.tasks_for(&app.selected_key())[0].text, "Buy stamps");

        app.needs_save = false;
        assert!(!app.add_task("   "));
        assert!(!app.needs_save);
    }

    #[test]
    fn test_toggle_and_delete_selected_task() {
        let mut app = create_test_app();
        app.add_task("first");
        app.add_task("second");
        assert_eq!(app.selected_row, 1);

        app.move_selection_up();
        app.toggle_selected();
        let key = app.selected_key();
        assert!(app.planner.tasks.tasks_for(&key)[0].completed);

        app.delete_selected();
        let texts: Vec<&str> = app.planner.tasks.tasks_for(&key).iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["second"]);
        assert_eq!(app.selected_row, 0);
    }

    #[test]
    fn test_habit_toggle_uses_selected_day() {
        let mut app = create_test_app();
        app.focus = Panel::Habits;
        app.toggle_selected();

        let habit = app.planner.habits.habits()[0].id;
        assert!(app.planner.habits.is_done(habit, &app.selected_key()));

        app.select_next_day();
        assert!(!app.planner.habits.is_done(habit, &app.selected_key()));
    }

    #[test]
    fn test_navigation() {
        let mut app = create_test_app();
        let start = app.week().start();

        app.navigate_week(1);
        assert_eq!(app.week().start(), start + chrono::Duration::days(7));
        assert_eq!(app.selected_day, 2);

        app.navigate_week(-3);
        assert_eq!(app.week().start(), start - chrono::Duration::days(14));

        app.go_to_today();
        assert_eq!(app.week().start(), start);
        assert_eq!(app.selected_date(), wednesday());
    }

    #[test]
    fn test_day_selection_is_bounded() {
        let mut app = create_test_app();
        for _ in 0..10 {
            app.select_next_day();
        }
        assert_eq!(app.selected_day, 6);
        for _ in 0..10 {
            app.select_previous_day();
        }
        assert_eq!(app.selected_day, 0);
    }

    #[test]
    fn test_stats_invalidated_by_shopping_and_navigation() {
        let mut app = create_test_app();
        app.focus = Panel::Shopping;
        assert_eq!(app.stats().total_spent, 0.0);
        assert!(app.stats_are_fresh());

        app.add_shopping_item("Rice", "3.20").unwrap();
        assert!(!app.stats_are_fresh());
        app.toggle_selected();
        assert_eq!(app.stats().total_spent, 3.2);

        // Habit and task edits leave the stats alone
        app.add_task("unrelated");
        assert!(app.stats_are_fresh());

        app.navigate_week(1);
        assert!(!app.stats_are_fresh());
        assert_eq!(app.stats().total_spent, 0.0);
    }

    #[test]
    fn test_shopping_delete_by_selection() {
        let mut app = create_test_app();
        app.focus = Panel::Shopping;
        app.add_shopping_item("Apples", "3").unwrap();
        app.add_shopping_item("Pears", "4").unwrap();

        app.selected_row = 0;
        app.delete_selected();
        let key = app.selected_key();
        let items = app.planner.shopping.items_for(&key);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Pears");
    }

    #[test]
    fn test_invalid_shopping_input_keeps_form_open() {
        let mut app = create_test_app();
        app.focus = Panel::Shopping;
        app.start_add();
        for c in "Milk".chars() {
            app.input_form_add_char(c);
        }
        app.input_form_toggle_field();
        for c in "-2".chars() {
            app.input_form_add_char(c);
        }

        app.submit_input_form();
        assert_eq!(app.ui_mode, UiMode::AddingShoppingItem);
        let form = app.input_form.as_ref().unwrap();
        assert_eq!(form.text, "Milk");
        assert!(form.error.as_deref().unwrap().contains("negative"));

        app.input_form_backspace();
        app.input_form_backspace();
        app.input_form_add_char('2');
        app.submit_input_form();
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.input_form.is_none());
        assert_eq!(app.planner.shopping.items_for(&app.selected_key())[0].price, 2.0);
    }

    #[test]
    fn test_blank_task_keeps_form_open() {
        let mut app = create_test_app();
        app.start_add();
        app.input_form_add_char(' ');
        app.submit_input_form();

        assert_eq!(app.ui_mode, UiMode::AddingTask);
        let error = app.input_form.as_ref().unwrap().error.as_deref().unwrap();
        assert_eq!(error, "invalid input: task text must not be empty");
        assert!(app.planner.tasks.is_empty());
    }

    #[test]
    fn test_corrupt_blob_shown_in_status() {
        let mut store = MemoryBlobStore::new();
        store.save(BlobKey::Tasks, r#"{"2026-10-5": []}"#).unwrap();

        let app = AppState::load(Box::new(store), wednesday());
        assert!(app.status_message.as_deref().unwrap().starts_with("Using defaults: storage for 'tasks' is corrupt"));
        assert_eq!(app.planner.tasks.len(), 0);
    }

    #[test]
    fn test_add_habit_via_form() {
        let mut app = create_test_app();
        app.focus = Panel::Habits;
        app.start_add();
        assert_eq!(app.ui_mode, UiMode::AddingHabit);
        for c in "Floss".chars() {
            app.input_form_add_char(c);
        }
        app.submit_input_form();
        assert_eq!(app.planner.habits.len(), 4);
        assert_eq!(app.selected_row, 3);
    }

    #[test]
    fn test_save_writes_through() {
        let mut app = create_test_app();
        app.toggle_theme();
        app.add_task("Persist me");
        app.save();
        assert!(!app.needs_save);

        let outcome = load_planner(app.storage.as_ref());
        assert_eq!(outcome.planner.theme, ThemeMode::Dark);
        assert_eq!(outcome.planner, app.planner);
    }

    #[test]
    fn test_save_failure_is_not_fatal() {
        let mut app = AppState::load(Box::new(ReadOnlyStore), wednesday());
        app.add_task("Kept in memory");
        app.save();

        assert!(!app.needs_save);
        assert!(app.status_message.as_deref().unwrap().starts_with("Save failed"));
        assert_eq!(app.planner.tasks.len(), 1);
    }
}
