//! Month grid construction: 42 cells per page with spillover days.

use chrono::Weekday;
use tracing::trace;

use crate::date::{DateValue, Origin, weekday_from_number};
use crate::error::CalendarError;
use crate::types::{CELLS_PER_MONTH, DAYS_PER_WEEK, MONTHS_PER_YEAR};

/// Check if a year is a leap year in the proleptic Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

pub fn days_in_month(year: i32, month: u32) -> Result<u32, CalendarError> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 if is_leap_year(year) => Ok(29),
        2 => Ok(28),
        _ => Err(CalendarError::InvalidMonth(month)),
    }
}

/// (year, month) of the month before, carrying into the previous year.
pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, MONTHS_PER_YEAR)
    } else {
        (year, month - 1)
    }
}

/// (year, month) of the month after, carrying into the next year.
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == MONTHS_PER_YEAR {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Weekday header order starting at `week_start`.
///
/// Monday start gives `[Mon, Tue, .., Sun]`, Wednesday start gives `[Wed, .., Sun, Mon, Tue]`.
pub fn weekday_order(week_start: Weekday) -> [Weekday; DAYS_PER_WEEK] {
    let mut order = [week_start; DAYS_PER_WEEK];
    for i in 1..DAYS_PER_WEEK {
        order[i] = order[i - 1].succ();
    }
    order
}

/// Column index of `weekday` in a week starting at `week_start`.
pub fn weekday_offset(weekday: Weekday, week_start: Weekday) -> usize {
    weekday_order(week_start)
        .iter()
        .position(|&w| w == weekday)
        .unwrap_or(0)
}

/// Calendar page data for a single month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub week_start: Weekday,
    /// Exactly [`CELLS_PER_MONTH`] cells, row-major, 7 columns.
    pub cells: Vec<DateValue>,
}

impl MonthGrid {
    /// Build the 6x7 grid for `year`/`month` with weeks starting at `week_start`.
    pub fn new(year: i32, month: u32, week_start: Weekday) -> Result<Self, CalendarError> {
        let day_count = days_in_month(year, month)?;
        let first = DateValue::new(year, month, 1)?;
        let last = DateValue::new(year, month, day_count)?;

        let leading = weekday_offset(first.weekday(), week_start);
        let trailing = DAYS_PER_WEEK - (weekday_offset(last.weekday(), week_start) + 1);

        let mut cells: Vec<DateValue> = Vec::with_capacity(CELLS_PER_MONTH);

        // Tail of the previous month, ascending
        if leading > 0 {
            let (prev_year, prev_month) = prev_month(year, month);
            let prev_days = days_in_month(prev_year, prev_month)?;
            for day in (prev_days + 1 - leading as u32)..=prev_days {
                cells.push(DateValue::new(prev_year, prev_month, day)?.with_origin(Origin::Prev));
            }
        }

        for day in 1..=day_count {
            cells.push(DateValue::new(year, month, day)?);
        }

        // Complete the last week from the next month
        let (next_year, next_month) = next_month(year, month);
        for day in 1..=trailing as u32 {
            cells.push(DateValue::new(next_year, next_month, day)?.with_origin(Origin::Next));
        }

        // Pad to 42 cells (6 weeks) so every page has the same height
        while cells.len() < CELLS_PER_MONTH {
            let next = match cells.last() {
                Some(last) => last.shift_days(1),
                None => break,
            };
            cells.push(next.with_origin(Origin::Next));
        }

        trace!(year, month, leading, trailing, "built month grid");

        Ok(MonthGrid {
            year,
            month,
            week_start,
            cells,
        })
    }

    /// Rows of 7 cells; always 6 rows for a built grid.
    pub fn week_rows(&self) -> Vec<&[DateValue]> {
        week_rows(&self.cells)
    }

    /// Cells tagged [`Origin::Current`], in day order.
    pub fn current_days(&self) -> impl Iterator<Item = &DateValue> {
        self.cells
            .iter()
            .filter(|cell| cell.origin() == Origin::Current)
    }

    /// Position of the cell holding `date` and belonging to this month.
    pub fn position_of(&self, date: &DateValue) -> Option<usize> {
        self.cells
            .iter()
            .position(|cell| cell.origin() == Origin::Current && cell == date)
    }
}

/// Build a grid from a 1..=7 first-day-of-week number (1 = Monday, 7 = Sunday).
pub fn build_grid(year: i32, month: u32, first_day_of_week: u32) -> Result<MonthGrid, CalendarError> {
    let week_start = weekday_from_number(first_day_of_week)?;
    MonthGrid::new(year, month, week_start)
}

/// Partition cells into rows by position `i / 7`.
pub fn week_rows(cells: &[DateValue]) -> Vec<&[DateValue]> {
    cells.chunks(DAYS_PER_WEEK).collect()
}
