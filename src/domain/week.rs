use super::date_key::{key_of, DateKey};
use chrono::{Datelike, Duration, NaiveDate};

/// Number of days in a planner week
pub const DAYS_PER_WEEK: usize = 7;

/// Seven consecutive days starting on a Monday
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week {
    start: NaiveDate,
}

impl Week {
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.start + Duration::days(DAYS_PER_WEEK as i64 - 1)
    }

    /// The days of the week in order, Monday first
    pub fn days(&self) -> [NaiveDate; DAYS_PER_WEEK] {
        std::array::from_fn(|i| self.start + Duration::days(i as i64))
    }

    /// Keys of the days in order, Monday first
    pub fn keys(&self) -> [DateKey; DAYS_PER_WEEK] {
        self.days().map(key_of)
    }

    pub fn contains(&self, date_key: &DateKey) -> bool {
        let date = date_key.date();
        self.start <= date && date <= self.end()
    }

    /// Position of a date within the week, if it falls inside it
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        let offset = (date - self.start).num_days();
        (0..DAYS_PER_WEEK as i64).contains(&offset).then_some(offset as usize)
    }

    /// Human-readable range, e.g. "19 Oct 2026 – 25 Oct 2026"
    pub fn label(&self) -> String {
        format!(
            "{} – {}",
            self.start.format("%-d %b %Y"),
            self.end().format("%-d %b %Y")
        )
    }
}

/// Earliest and latest reference dates whose week is fully representable
fn representable_range() -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::MIN + Duration::weeks(1),
        NaiveDate::MAX - Duration::weeks(1),
    )
}

/// The Monday-first week containing `reference`
pub fn week_of(reference: NaiveDate) -> Week {
    let (lower, upper) = representable_range();
    let reference = reference.clamp(lower, upper);
    let offset = reference.weekday().num_days_from_monday() as i64;
    Week {
        start: reference - Duration::days(offset),
    }
}

/// Move a reference date by whole weeks (negative goes back in time)
pub fn shift(reference: NaiveDate, delta_weeks: i64) -> NaiveDate {
    let (lower, upper) = representable_range();
    Duration::try_weeks(delta_weeks)
        .and_then(|delta| reference.checked_add_signed(delta))
        .map(|date| date.clamp(lower, upper))
        .unwrap_or(if delta_weeks < 0 { lower } else { upper })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_starts_on_monday() {
        // 2026-10-22 is a Thursday
        let week = week_of(date(2026, 10, 22));
        assert_eq!(week.start(), date(2026, 10, 19));
        assert_eq!(week.start().weekday(), Weekday::Mon);
        assert_eq!(week.end(), date(2026, 10, 25));
    }

    #[test]
    fn test_sunday_belongs_to_preceding_monday() {
        let week = week_of(date(2026, 10, 25));
        assert_eq!(week.start(), date(2026, 10, 19));
        assert_eq!(week_of(date(2026, 10, 19)), week);
    }

    #[test]
    fn test_keys_are_consecutive() {
        let keys = week_of(date(2026, 12, 30)).keys();
        let expected = [
            "2026-12-28", "2026-12-29", "2026-12-30", "2026-12-31", "2027-01-01", "2027-01-02",
            "2027-01-03",
        ];
        let actual: Vec<String> = keys.iter().map(DateKey::to_string).collect();
        assert_eq!(actual, expected.to_vec());
    }

    #[test]
    fn test_shift_forward_lands_on_next_week() {
        let reference = date(2026, 10, 22);
        let week = week_of(reference);
        let next = week_of(shift(week.start(), 1));
        assert_eq!(next.start(), week.start() + Duration::days(7));
        assert_eq!(next.keys()[0], key_of(date(2026, 10, 26)));
    }

    #[test]
    fn test_shift_back_and_forth_returns() {
        let reference = date(2026, 3, 1);
        let there_and_back = shift(shift(reference, -1), 1);
        assert_eq!(week_of(there_and_back), week_of(reference));
        assert_eq!(there_and_back, reference);
    }

    #[test]
    fn test_shift_distant() {
        let reference = date(2026, 10, 19);
        assert_eq!(shift(reference, -5200), reference - Duration::days(36_400));
        assert_eq!(shift(reference, 3).weekday(), reference.weekday());
        assert_eq!(shift(reference, 0), reference);
    }

    #[test]
    fn test_shift_saturates_at_representable_limits() {
        let reference = date(2026, 10, 19);
        let far = shift(reference, i64::MAX);
        let week = week_of(far);
        assert!(week.end() <= NaiveDate::MAX);
        assert_eq!(week.keys().len(), DAYS_PER_WEEK);

        let past = shift(reference, i64::MIN);
        assert!(week_of(past).start() >= NaiveDate::MIN);
    }

    #[test]
    fn test_contains_and_index_of() {
        let week = week_of(date(2026, 10, 19));
        assert!(week.contains(&key_of(date(2026, 10, 25))));
        assert!(!week.contains(&key_of(date(2026, 10, 26))));
        assert_eq!(week.index_of(date(2026, 10, 21)), Some(2));
        assert_eq!(week.index_of(date(2026, 10, 18)), None);
    }

    #[test]
    fn test_label() {
        let week = week_of(date(2026, 10, 19));
        assert_eq!(week.label(), "19 Oct 2026 – 25 Oct 2026");
    }
}
