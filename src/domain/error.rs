use thiserror::Error;

/// Errors raised by the planner core.
///
/// Stale references (unknown ids, dates or positions) are not errors: store
/// operations absorb them as no-ops.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Input that is not a calendar date
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Empty text or name where one is required
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Shopping item rejected at the store boundary
    #[error("invalid shopping item: {0}")]
    InvalidItem(String),

    /// Storage blob could not be read or written
    #[error("storage for '{key}' unavailable: {source}")]
    PersistenceUnavailable {
        key: &'static str,
        #[source]
        source: anyhow::Error,
    },

    /// Storage blob was read but did not decode
    #[error("storage for '{key}' is corrupt: {source}")]
    Corrupt {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl PlannerError {
    /// Whether this error should be reported as a warning and otherwise ignored
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::PersistenceUnavailable { .. } | Self::Corrupt { .. })
    }
}
