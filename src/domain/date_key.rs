use super::error::PlannerError;
use chrono::{DateTime, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

const KEY_FORMAT: &str = "%Y-%m-%d";

/// Canonical identifier for a calendar day ("YYYY-MM-DD").
///
/// Every per-day record (tasks, habit completions, shopping lists) is indexed
/// by this key. It is stored as its canonical string; anything else fails to
/// deserialize, so one date never ends up under two keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Key for a `DateTime`, taken in its own offset so the time of day never matters
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        key_of(dt.date_naive())
    }

    /// Parse and normalize a key, rejecting anything that is not a calendar date
    pub fn parse(input: &str) -> Result<Self, PlannerError> {
        NaiveDate::parse_from_str(input.trim(), KEY_FORMAT)
            .map(key_of)
            .map_err(|_| PlannerError::InvalidDate(input.to_string()))
    }

    /// The calendar date this key names
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        key_of(date)
    }
}

/// Stored keys must already be canonical
impl TryFrom<String> for DateKey {
    type Error = PlannerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let key = Self::parse(&value)?;
        if key.to_string() != value {
            return Err(PlannerError::InvalidDate(value));
        }
        Ok(key)
    }
}

impl From<DateKey> for String {
    fn from(key: DateKey) -> Self {
        key.to_string()
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(KEY_FORMAT))
    }
}

/// Convert a calendar date to its key
pub fn key_of(date: NaiveDate) -> DateKey {
    DateKey(date)
}
