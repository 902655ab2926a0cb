pub mod date_key;
pub mod enums;
pub mod error;
pub mod habit;
pub mod planner;
pub mod shopping;
pub mod task;
pub mod week;

pub use date_key::{key_of, DateKey};
pub use enums::{Panel, UiMode};
pub use error::PlannerError;
pub use habit::{HabitId, HabitStore};
pub use planner::{Planner, ThemeMode};
pub use shopping::{parse_price, ItemId, NewShoppingItem, ShoppingStore};
pub use task::{TaskId, TaskStore};
pub use week::{shift, week_of, Week, DAYS_PER_WEEK};
