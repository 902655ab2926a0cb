use super::date_key::DateKey;
use super::error::PlannerError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;
use uuid::Uuid;

/// Identifier of a shopping item
pub type ItemId = Uuid;

/// A purchase planned for a day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    /// Assigned on load when an older blob has none
    #[serde(default = "Uuid::new_v4")]
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub completed: bool,
}

/// User-supplied fields of a new shopping item
#[derive(Debug, Clone, PartialEq)]
pub struct NewShoppingItem {
    pub name: String,
    pub price: f64,
}

impl NewShoppingItem {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    fn validate(&self) -> Result<(), PlannerError> {
        if self.name.trim().is_empty() {
            return Err(PlannerError::InvalidItem("name must not be empty".to_string()));
        }
        if !self.price.is_finite() {
            return Err(PlannerError::InvalidItem("price must be a number".to_string()));
        }
        if self.price < 0.0 {
            return Err(PlannerError::InvalidItem("price must not be negative".to_string()));
        }
        Ok(())
    }
}

/// Parse a price typed by the user ("12.50" or "12,50")
pub fn parse_price(input: &str) -> Result<f64, PlannerError> {
    let normalized = input.trim().replace(',', ".");
    if normalized.is_empty() {
        return Err(PlannerError::InvalidItem("price is required".to_string()));
    }

    let price: f64 = normalized
        .parse()
        .map_err(|_| PlannerError::InvalidItem(format!("'{}' is not a price", input.trim())))?;

    if !price.is_finite() {
        return Err(PlannerError::InvalidItem(format!("'{}' is not a price", input.trim())));
    }
    if price < 0.0 {
        return Err(PlannerError::InvalidItem("price must not be negative".to_string()));
    }
    Ok(price)
}

/// Shopping lists keyed by day.
///
/// Items can be addressed by position, which goes stale as soon as the list
/// changes shape, or by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoppingStore {
    days: BTreeMap<DateKey, Vec<ShoppingItem>>,
}

impl ShoppingStore {
    /// Append an item to a day's list; malformed items are rejected untouched
    pub fn add(&mut self, date_key: &DateKey, item: NewShoppingItem) -> Result<ItemId, PlannerError> {
        item.validate()?;

        let id = Uuid::new_v4();
        self.days.entry(date_key.clone()).or_default().push(ShoppingItem {
            id,
            name: item.name,
            price: item.price,
            completed: false,
        });
        debug!(%date_key, %id, "shopping item added");
        Ok(id)
    }

    /// Flip the purchased flag of the item at `index`
    pub fn toggle(&mut self, date_key: &DateKey, index: usize) {
        if let Some(item) = self.days.get_mut(date_key).and_then(|items| items.get_mut(index)) {
            item.completed = !item.completed;
            debug!(%date_key, index, completed = item.completed, "shopping item toggled");
        }
    }

    /// Remove the item at `index`
    pub fn delete(&mut self, date_key: &DateKey, index: usize) {
        if let Some(items) = self.days.get_mut(date_key) {
            if index < items.len() {
                items.remove(index);
                debug!(%date_key, index, "shopping item deleted");
            }
        }
    }

    /// Current position of an item within its day's list
    pub fn position_of(&self, date_key: &DateKey, item_id: ItemId) -> Option<usize> {
        self.items_for(date_key).iter().position(|item| item.id == item_id)
    }

    pub fn toggle_by_id(&mut self, date_key: &DateKey, item_id: ItemId) {
        if let Some(index) = self.position_of(date_key, item_id) {
            self.toggle(date_key, index);
        }
    }

    pub fn delete_by_id(&mut self, date_key: &DateKey, item_id: ItemId) {
        if let Some(index) = self.position_of(date_key, item_id) {
            self.delete(date_key, index);
        }
    }

    /// Items for a day (empty if none were ever added)
    pub fn items_for(&self, date_key: &DateKey) -> &[ShoppingItem] {
        self.days.get(date_key).map(Vec::as_slice).unwrap_or(&[])
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

    fn names(store: &ShoppingStore, key: &DateKey) -> Vec<String> {
        store.items_for(key).iter().map(|i| i.name.clone()).collect()
    }

    #[test]
    fn test_add_item() {
        let mut store = ShoppingStore::default();
        let id = store.add(&day(19), NewShoppingItem::new("Milk", 1.29)).unwrap();

        let items = store.items_for(&day(19));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, id);
        assert_eq!(items[0].price, 1.29);
        assert!(!items[0].completed);
    }

    #[test]
    fn test_add_rejects_invalid_items() {
        let mut store = ShoppingStore::default();
        let rejected = [
            NewShoppingItem::new("", 1.0),
            NewShoppingItem::new("   ", 1.0),
            NewShoppingItem::new("Bread", -0.5),
            NewShoppingItem::new("Bread", f64::NAN),
            NewShoppingItem::new("Bread", f64::INFINITY),
        ];
        for item in rejected {
            assert!(matches!(store.add(&day(19), item), Err(PlannerError::InvalidItem(_))));
        }
        assert!(store.items_for(&day(19)).is_empty());

        // Free items are fine
        assert!(store.add(&day(19), NewShoppingItem::new("Sample", 0.0)).is_ok());
    }

    #[test]
    fn test_toggle_by_index() {
        let mut store = ShoppingStore::default();
        store.add(&day(19), NewShoppingItem::new("Eggs", 2.0)).unwrap();

        store.toggle(&day(19), 0);
        assert!(store.items_for(&day(19))[0].completed);
        store.toggle(&day(19), 0);
        assert!(!store.items_for(&day(19))[0].completed);
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut store = ShoppingStore::default();
        store.add(&day(19), NewShoppingItem::new("Eggs", 2.0)).unwrap();
        let snapshot = store.clone();

        store.toggle(&day(19), 1);
        store.delete(&day(19), 5);
        store.toggle(&day(20), 0);
        store.delete(&day(20), 0);
        assert_eq!(store, snapshot);
    }

    #[test]
    fn test_delete_shifts_positions() {
        let mut store = ShoppingStore::default();
        store.add(&day(19), NewShoppingItem::new("Apples", 3.0)).unwrap();
        store.add(&day(19), NewShoppingItem::new("Pears", 4.0)).unwrap();

        store.delete(&day(19), 0);
        assert_eq!(names(&store, &day(19)), vec!["Pears"]);
        assert_eq!(store.items_for(&day(19))[0].price, 4.0);
    }

    #[test]
    fn test_stale_index_misaddresses() {
        let mut store = ShoppingStore::default();
        store.add(&day(19), NewShoppingItem::new("Apples", 3.0)).unwrap();
        store.add(&day(19), NewShoppingItem::new("Pears", 4.0)).unwrap();
        store.add(&day(19), NewShoppingItem::new("Plums", 5.0)).unwrap();

        // Two deletes computed from the same rendered list: "Apples" at 0, "Pears" at 1
        store.delete(&day(19), 0);
        store.delete(&day(19), 1);

        // "Plums" went instead of "Pears"
        assert_eq!(names(&store, &day(19)), vec!["Pears"]);
    }

    #[test]
    fn test_id_addressing_survives_reshaping() {
        let mut store = ShoppingStore::default();
        let apples = store.add(&day(19), NewShoppingItem::new("Apples", 3.0)).unwrap();
        let pears = store.add(&day(19), NewShoppingItem::new("Pears", 4.0)).unwrap();
        store.add(&day(19), NewShoppingItem::new("Plums", 5.0)).unwrap();

        store.delete_by_id(&day(19), apples);
        store.delete_by_id(&day(19), pears);
        assert_eq!(names(&store, &day(19)), vec!["Plums"]);

        // Stale ids are ignored
        store.delete_by_id(&day(19), pears);
        store.toggle_by_id(&day(19), apples);
        assert_eq!(names(&store, &day(19)), vec!["Plums"]);
        assert!(!store.items_for(&day(19))[0].completed);
    }

    #[test]
    fn test_toggle_by_id() {
        let mut store = ShoppingStore::default();
        store.add(&day(19), NewShoppingItem::new("Tea", 4.5)).unwrap();
        let coffee = store.add(&day(19), NewShoppingItem::new("Coffee", 9.0)).unwrap();

        store.toggle_by_id(&day(19), coffee);
        assert_eq!(store.position_of(&day(19), coffee), Some(1));
        assert!(store.items_for(&day(19))[1].completed);
        assert!(!store.items_for(&day(19))[0].completed);
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("12.50").unwrap(), 12.5);
        assert_eq!(parse_price(" 12,5 ").unwrap(), 12.5);
        assert_eq!(parse_price("0").unwrap(), 0.0);
        assert!(parse_price("").is_err());
        assert!(parse_price("abc").is_err());
        assert!(parse_price("-3").is_err());
        assert!(parse_price("inf").is_err());
        assert!(parse_price("NaN").is_err());
    }

    #[test]
    fn test_missing_id_assigned_on_load() {
        let json = r#"{"2026-10-19":[{"name":"Milk","price":1.5,"completed":true}]}"#;
        let store: ShoppingStore = serde_json::from_str(json).unwrap();
        let item = &store.items_for(&day(19))[0];
        assert_eq!(item.name, "Milk");
        assert!(item.completed);
        assert!(!item.id.is_nil());
    }
}
