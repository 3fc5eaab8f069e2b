//! Mapping between absolute page indices, (year, month) pairs and dates.
//!
//! Page 0 is the month containing the minimum date; the last page is the
//! month containing the maximum date.

use crate::date::DateValue;
use crate::types::MONTHS_PER_YEAR;

/// (year, month) shown on page `index`. Month is 1-based.
pub fn month_index_to_year_month(index: usize, min_date: &DateValue) -> (i32, u32) {
    let months = index as i64 + i64::from(min_date.month0());
    let year = i64::from(min_date.year()) + months / i64::from(MONTHS_PER_YEAR);
    let month0 = months % i64::from(MONTHS_PER_YEAR);
    (year as i32, month0 as u32 + 1)
}

/// Page index of `year`/`month`; negative for months before `min_date`.
pub fn year_month_to_month_index(year: i32, month: u32, min_date: &DateValue) -> i64 {
    month_diff(min_date.year(), min_date.month(), year, month)
}

/// Signed number of months from (from_year, from_month) to (to_year, to_month).
fn month_diff(from_year: i32, from_month: u32, to_year: i32, to_month: u32) -> i64 {
    (i64::from(to_year) - i64::from(from_year)) * i64::from(MONTHS_PER_YEAR)
        + (i64::from(to_month) - i64::from(from_month))
}

/// Inclusive number of months spanned by `[min_date, max_date]`.
pub fn page_count(min_date: &DateValue, max_date: &DateValue) -> usize {
    let span = month_diff(
        min_date.year(),
        min_date.month(),
        max_date.year(),
        max_date.month(),
    ) + 1;
    span.max(1) as usize
}

/// Page containing `date`, clamped into `[0, page_count - 1]`.
///
/// Dates outside the bounds land on the first or last page instead of failing.
pub fn page_index_for_date(date: &DateValue, min_date: &DateValue, max_date: &DateValue) -> usize {
    let last = page_count(min_date, max_date) as i64 - 1;
    year_month_to_month_index(date.year(), date.month(), min_date).clamp(0, last) as usize
}
