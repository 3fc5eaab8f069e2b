//! Error types for configuration and programmatic selection.

use crate::types::SelectionMode;

/// Error type for all fallible operations in calpick.
///
/// Taps never produce errors: a rejected tap is reported through
/// [`TapResult::accepted`](crate::engine::TapResult).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Minimum date is after the maximum date.
    #[error("invalid date range: {min} is after {max}")]
    InvalidRange { min: String, max: String },

    /// Both an allow-list and a deny-list were given.
    #[error("allow-list and deny-list cannot be set at the same time")]
    ConflictingPolicy,

    #[error("invalid first day of week: {0} (must be 1..=7)")]
    InvalidFirstDayOfWeek(u32),

    #[error("invalid month: {0} (must be 1..=12)")]
    InvalidMonth(u32),

    #[error("invalid date: {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("cannot parse date '{0}' (expected YYYY-MM-DD)")]
    ParseDate(String),

    #[error("page {index} out of range (page count {count})")]
    PageOutOfRange { index: usize, count: usize },

    /// A programmatic setter was called for a mode the engine is not in.
    #[error("selection mode mismatch: engine is {actual}, setter needs {expected}")]
    ModeMismatch {
        expected: SelectionMode,
        actual: SelectionMode,
    },
}
