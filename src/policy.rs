//! Clickability rules: range clamping plus an optional allow- or deny-list.

use std::collections::HashSet;

use crate::date::{DateRange, DateValue};
use crate::error::CalendarError;
use crate::types::{ClickableMode, Clickability};

/// Gate applied to taps inside the configured range.
///
/// Allow- and deny-lists are mutually exclusive: installing one while the
/// other is active fails with [`CalendarError::ConflictingPolicy`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClickabilityPolicy {
    #[default]
    Unrestricted,
    /// Only listed dates are clickable.
    AllowList(HashSet<DateValue>),
    /// Listed dates are blocked.
    DenyList(HashSet<DateValue>),
}

impl ClickabilityPolicy {
    /// Build from optional lists; both present is a conflict.
    pub fn from_lists(
        allow: Option<Vec<DateValue>>,
        deny: Option<Vec<DateValue>>,
    ) -> Result<Self, CalendarError> {
        match (allow, deny) {
            (Some(_), Some(_)) => Err(CalendarError::ConflictingPolicy),
            (Some(allow), None) => Ok(Self::AllowList(allow.into_iter().collect())),
            (None, Some(deny)) => Ok(Self::DenyList(deny.into_iter().collect())),
            (None, None) => Ok(Self::Unrestricted),
        }
    }

    pub fn mode(&self) -> ClickableMode {
        match self {
            Self::Unrestricted => ClickableMode::Unrestricted,
            Self::AllowList(_) => ClickableMode::AllowList,
            Self::DenyList(_) => ClickableMode::DenyList,
        }
    }

    /// Install or replace the allow-list.
    pub fn set_allow_list(
        &mut self,
        dates: impl IntoIterator<Item = DateValue>,
    ) -> Result<(), CalendarError> {
        if let Self::DenyList(_) = self {
            return Err(CalendarError::ConflictingPolicy);
        }
        *self = Self::AllowList(dates.into_iter().collect());
        Ok(())
    }

    /// Install or replace the deny-list.
    pub fn set_deny_list(
        &mut self,
        dates: impl IntoIterator<Item = DateValue>,
    ) -> Result<(), CalendarError> {
        if let Self::AllowList(_) = self {
            return Err(CalendarError::ConflictingPolicy);
        }
        *self = Self::DenyList(dates.into_iter().collect());
        Ok(())
    }

    /// Drop any list and go back to unrestricted.
    pub fn clear(&mut self) {
        *self = Self::Unrestricted;
    }

    /// Classify `date` against this policy and `range`.
    ///
    /// Out-of-range dates are blocked regardless of the lists.
    pub fn classify(&self, date: &DateValue, range: &DateRange) -> Clickability {
        if !range.contains(date) {
            return Clickability::Blocked;
        }
        let clickable = match self {
            Self::Unrestricted => true,
            Self::AllowList(dates) => dates.contains(date),
            Self::DenyList(dates) => !dates.contains(date),
        };
        if clickable {
            Clickability::Clickable
        } else {
            Clickability::Blocked
        }
    }
}

/// Free-function form taking the mode and lists separately.
///
/// A list that does not match `mode` is ignored; giving both lists is a conflict.
pub fn classify(
    date: &DateValue,
    mode: ClickableMode,
    allow_list: Option<&[DateValue]>,
    deny_list: Option<&[DateValue]>,
    min_date: &DateValue,
    max_date: &DateValue,
) -> Result<Clickability, CalendarError> {
    if allow_list.is_some() && deny_list.is_some() {
        return Err(CalendarError::ConflictingPolicy);
    }
    if date < min_date || date > max_date {
        return Ok(Clickability::Blocked);
    }
    let clickable = match mode {
        ClickableMode::Unrestricted => true,
        ClickableMode::AllowList => allow_list.is_some_and(|list| list.contains(date)),
        ClickableMode::DenyList => !deny_list.is_some_and(|list| list.contains(date)),
    };
    Ok(if clickable {
        Clickability::Clickable
    } else {
        Clickability::Blocked
    })
}
