use crate::domain::{DateKey, ShoppingStore, Week, DAYS_PER_WEEK};

/// Spending summary for one day of the week
#[derive(Debug, Clone, PartialEq)]
pub struct DaySpend {
    pub date_key: DateKey,
    /// Sum of prices of purchased items
    pub total: f64,
    pub completed_count: usize,
    pub total_items: usize,
}

/// A day singled out by an extremum, with its amount
#[derive(Debug, Clone, PartialEq)]
pub struct DayAmount {
    pub date_key: DateKey,
    pub amount: f64,
}

/// Spending statistics for a week
#[derive(Debug, Clone, PartialEq)]
pub struct WeekStats {
    pub total_spent: f64,
    /// One entry per day, Monday first
    pub per_day: Vec<DaySpend>,
    pub most_expensive_day: Option<DayAmount>,
    /// Only days with at least one item are considered
    pub cheapest_day: Option<DayAmount>,
    pub average_per_day: f64,
    /// Percentage of items purchased, 0 when there are none
    pub completion_rate: f64,
    pub completed_items: usize,
    pub total_items: usize,
}

impl WeekStats {
    pub fn day(&self, date_key: &DateKey) -> Option<&DaySpend> {
        self.per_day.iter().find(|d| &d.date_key == date_key)
    }
}

/// Compute spending statistics for a week from scratch.
///
/// Only purchased items count as spent. Ties for either extremum keep the
/// earliest day of the week.
pub fn compute_week_stats(shopping: &ShoppingStore, week: &Week) -> WeekStats {
    let mut per_day = Vec::with_capacity(DAYS_PER_WEEK);
    let mut total_spent = 0.0;
    let mut completed_items = 0;
    let mut total_items = 0;
    let mut most_expensive_day: Option<DayAmount> = None;
    let mut cheapest_day: Option<DayAmount> = None;

    for date_key in week.keys() {
        let items = shopping.items_for(&date_key);
        let total: f64 = items.iter().filter(|i| i.completed).map(|i| i.price).sum();
        let completed_count = items.iter().filter(|i| i.completed).count();

        total_spent += total;
        completed_items += completed_count;
        total_items += items.len();

        // The running maximum starts at zero, so a week with no spending has no priciest day
        let best = most_expensive_day.as_ref().map_or(0.0, |d| d.amount);
        if total > best {
            most_expensive_day = Some(DayAmount {
                date_key: date_key.clone(),
                amount: total,
            });
        }

        if !items.is_empty() {
            let beaten = cheapest_day.as_ref().map_or(true, |d| total < d.amount);
            if beaten {
                cheapest_day = Some(DayAmount {
                    date_key: date_key.clone(),
                    amount: total,
                });
            }
        }

        per_day.push(DaySpend {
            date_key,
            total,
            completed_count,
            total_items: items.len(),
        });
    }

    let completion_rate = if total_items > 0 {
        completed_items as f64 / total_items as f64 * 100.0
    } else {
        0.0
    };

    WeekStats {
        total_spent,
        per_day,
        most_expensive_day,
        cheapest_day,
        average_per_day: total_spent / DAYS_PER_WEEK as f64,
        completion_rate,
        completed_items,
        total_items,
    }
}
