//! Naive calendar dates tagged with their grid origin, and inclusive date bounds.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::types::{DATE_FORMAT, DAYS_PER_WEEK};

/// Which month a grid cell belongs to relative to the displayed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Prev,
    #[default]
    Current,
    Next,
}

/// Immutable calendar date with an origin tag.
///
/// Equality, ordering and hashing look at year, month and day only; the
/// origin is a display hint set by the grid builder.
#[derive(Debug, Clone, Copy)]
pub struct DateValue {
    date: NaiveDate,
    origin: Origin,
}

impl DateValue {
    /// Create a validated date with origin [`Origin::Current`].
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self::from_naive)
            .ok_or(CalendarError::InvalidDate { year, month, day })
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self {
            date,
            origin: Origin::Current,
        }
    }

    /// Same date with a different origin tag.
    pub fn with_origin(self, origin: Origin) -> Self {
        Self { origin, ..self }
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Month, 1-based.
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Month, 0-based.
    pub fn month0(&self) -> u32 {
        self.date.month0()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    pub fn naive(&self) -> NaiveDate {
        self.date
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Three-way comparison on (year, month, day), ignoring origin.
    pub fn compare(&self, other: &Self) -> i32 {
        match self.cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Date `n` months away, carrying into the year.
    ///
    /// The day is clamped to the length of the target month (Jan 31 + 1 -> Feb 28/29).
    /// Saturates at chrono's representable bounds.
    pub fn shift_month(&self, n: i32) -> Self {
        let months = Months::new(n.unsigned_abs());
        let shifted = if n >= 0 {
            self.date.checked_add_months(months)
        } else {
            self.date.checked_sub_months(months)
        };
        let date = shifted.unwrap_or(if n >= 0 {
            NaiveDate::MAX
        } else {
            NaiveDate::MIN
        });
        Self { date, ..*self }
    }

    /// Date `n` days away, saturating at chrono's bounds.
    pub fn shift_days(&self, n: i64) -> Self {
        let days = Days::new(n.unsigned_abs());
        let shifted = if n >= 0 {
            self.date.checked_add_days(days)
        } else {
            self.date.checked_sub_days(days)
        };
        let date = shifted.unwrap_or(if n >= 0 {
            NaiveDate::MAX
        } else {
            NaiveDate::MIN
        });
        Self { date, ..*self }
    }

    /// Day count since 0001-01-01 (day 1), usable for containment and distances.
    pub fn to_ordinal_day(&self) -> i32 {
        self.date.num_days_from_ce()
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(&self, other: &Self) -> i64 {
        i64::from(other.to_ordinal_day()) - i64::from(self.to_ordinal_day())
    }
}

impl PartialEq for DateValue {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date
    }
}

impl Eq for DateValue {}

impl Hash for DateValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.date.hash(state);
    }
}

impl PartialOrd for DateValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date.cmp(&other.date)
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.format(DATE_FORMAT))
    }
}

impl FromStr for DateValue {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map(Self::from_naive)
            .map_err(|_| CalendarError::ParseDate(s.to_string()))
    }
}

impl From<NaiveDate> for DateValue {
    fn from(date: NaiveDate) -> Self {
        Self::from_naive(date)
    }
}

impl Serialize for DateValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Convert a 1..=7 weekday number (1 = Monday, 7 = Sunday) to a [`Weekday`].
pub fn weekday_from_number(n: u32) -> Result<Weekday, CalendarError> {
    match n {
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        7 => Ok(Weekday::Sun),
        _ => Err(CalendarError::InvalidFirstDayOfWeek(n)),
    }
}

/// Inverse of [`weekday_from_number`]: Monday = 1 .. Sunday = 7.
pub fn weekday_number(weekday: Weekday) -> u32 {
    weekday.number_from_monday()
}

/// The Monday-based week `n` weeks away from the week containing `date`.
///
/// `n == 0` is the containing week, `-1` the previous one, `1` the next one.
/// Origins of the returned dates are [`Origin::Current`].
pub fn week_of(date: DateValue, n: i64) -> [DateValue; DAYS_PER_WEEK] {
    let offset = i64::from(date.weekday().num_days_from_monday());
    let monday = date
        .with_origin(Origin::Current)
        .shift_days(n * DAYS_PER_WEEK as i64 - offset);
    std::array::from_fn(|i| monday.shift_days(i as i64))
}

/// Inclusive `[min, max]` bounds of a calendar widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    min: DateValue,
    max: DateValue,
}

impl DateRange {
    /// Fails with [`CalendarError::InvalidRange`] if `min > max`.
    pub fn new(min: DateValue, max: DateValue) -> Result<Self, CalendarError> {
        if min > max {
            return Err(CalendarError::InvalidRange {
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        Ok(Self {
            min: min.with_origin(Origin::Current),
            max: max.with_origin(Origin::Current),
        })
    }

    pub fn min(&self) -> DateValue {
        self.min
    }

    pub fn max(&self) -> DateValue {
        self.max
    }

    pub fn contains(&self, date: &DateValue) -> bool {
        (self.min..=self.max).contains(date)
    }

    /// Clamp `date` to the nearer bound, keeping its origin tag.
    pub fn clamp(&self, date: DateValue) -> DateValue {
        if date < self.min {
            self.min.with_origin(date.origin())
        } else if date > self.max {
            self.max.with_origin(date.origin())
        } else {
            date
        }
    }
}
