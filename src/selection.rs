//! Selection state machines for the four interaction modes.
//!
//! Each machine consumes a tap on a date that already passed the
//! clickability check and reports the origin-normalized date it accepted.
//! [`Selection`] selects one machine per widget.

use indexmap::IndexSet;
use serde::Serialize;

use crate::date::{DateRange, DateValue, Origin, week_of};
use crate::position::page_index_for_date;
use crate::types::{CellMark, DAYS_PER_WEEK, SelectionMode};

/// Force the origin of a tapped cell to [`Origin::Current`].
pub fn normalize_origin(date: DateValue) -> DateValue {
    date.with_origin(Origin::Current)
}

/// Page the host must move to after accepting `date`, if any.
///
/// Spillover cells resolve to the neighboring page; a date outside the
/// displayed page resolves to the page that contains it.
pub fn navigation_target(date: &DateValue, current_page: usize, range: &DateRange) -> Option<usize> {
    let target = page_index_for_date(date, &range.min(), &range.max());
    (target != current_page).then_some(target)
}

/// Snapshot of a selection, as handed to the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum SelectionState {
    Single {
        selected: Option<DateValue>,
    },
    Multi {
        selected: Vec<DateValue>,
    },
    Range {
        start: Option<DateValue>,
        end: Option<DateValue>,
    },
    Week {
        anchor: Option<DateValue>,
        week_start: Option<DateValue>,
        week_end: Option<DateValue>,
    },
}

/// Listener payload derived from an accepted tap.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectionEvent {
    DateSelected {
        date: DateValue,
    },
    MultiSelected {
        date: DateValue,
        dates: Vec<DateValue>,
    },
    /// Emitted only once both ends of the range are set.
    RangeSelected {
        date: DateValue,
        start: DateValue,
        end: DateValue,
    },
    WeekSelected {
        date: DateValue,
        week_start: DateValue,
        week_end: DateValue,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SingleSelection {
    selected: Option<DateValue>,
}

impl SingleSelection {
    pub fn selected(&self) -> Option<DateValue> {
        self.selected
    }

    pub fn set(&mut self, date: Option<DateValue>) {
        self.selected = date.map(normalize_origin);
    }

    pub fn tap(&mut self, date: DateValue) -> Option<DateValue> {
        let date = normalize_origin(date);
        self.selected = Some(date);
        Some(date)
    }
}

/// Toggle set of dates, iterated in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiSelection {
    selected: IndexSet<DateValue>,
}

impl MultiSelection {
    pub fn selected(&self) -> impl Iterator<Item = &DateValue> {
        self.selected.iter()
    }

    pub fn contains(&self, date: &DateValue) -> bool {
        self.selected.contains(date)
    }

    pub fn set(&mut self, dates: impl IntoIterator<Item = DateValue>) {
        self.selected = dates.into_iter().map(normalize_origin).collect();
    }

    /// Toggle membership of a current-month cell.
    ///
    /// Spillover cells are ignored even when an equal date is selected.
    pub fn tap(&mut self, date: DateValue) -> Option<DateValue> {
        if date.origin() != Origin::Current {
            return None;
        }
        if !self.selected.shift_remove(&date) {
            self.selected.insert(date);
        }
        Some(date)
    }
}

/// `start < end` whenever both are set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RangeSelection {
    start: Option<DateValue>,
    end: Option<DateValue>,
}

impl RangeSelection {
    pub fn start(&self) -> Option<DateValue> {
        self.start
    }

    pub fn end(&self) -> Option<DateValue> {
        self.end
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Set both ends, swapping when out of order.
    pub fn set(&mut self, start: Option<DateValue>, end: Option<DateValue>) {
        self.start = start.map(normalize_origin);
        self.end = end.map(normalize_origin);
        self.normalize();
    }

    pub fn tap(&mut self, date: DateValue) -> Option<DateValue> {
        let date = normalize_origin(date);
        // A completed range starts a new cycle
        if self.is_complete() {
            self.start = None;
            self.end = None;
        }
        if self.start.is_none() {
            self.start = Some(date);
        } else if self.end.is_none() {
            self.end = Some(date);
        }
        self.normalize();
        Some(date)
    }

    fn normalize(&mut self) {
        if let (Some(start), Some(end)) = (self.start, self.end) {
            if start > end {
                self.start = Some(end);
                self.end = Some(start);
            } else if start == end {
                // zero-length range is discarded
                self.start = None;
                self.end = None;
            }
        }
    }
}

/// Monday-based week around an anchor date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeekSelection {
    anchor: Option<DateValue>,
    week: Option<[DateValue; DAYS_PER_WEEK]>,
}

impl WeekSelection {
    pub fn anchor(&self) -> Option<DateValue> {
        self.anchor
    }

    pub fn week_start(&self) -> Option<DateValue> {
        self.week.map(|week| week[0])
    }

    pub fn week_end(&self) -> Option<DateValue> {
        self.week.map(|week| week[DAYS_PER_WEEK - 1])
    }

    pub fn set(&mut self, anchor: Option<DateValue>) {
        self.anchor = anchor.map(normalize_origin);
        self.week = self.anchor.map(|anchor| week_of(anchor, 0));
    }

    pub fn tap(&mut self, date: DateValue) -> Option<DateValue> {
        self.set(Some(date));
        self.anchor
    }
}

/// One selection machine per widget.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Single(SingleSelection),
    Multi(MultiSelection),
    Range(RangeSelection),
    Week(WeekSelection),
}

impl Selection {
    /// Empty machine for `mode`.
    pub fn new(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Selection::Single(SingleSelection::default()),
            SelectionMode::Multi => Selection::Multi(MultiSelection::default()),
            SelectionMode::Range => Selection::Range(RangeSelection::default()),
            SelectionMode::Week => Selection::Week(WeekSelection::default()),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        match self {
            Selection::Single(_) => SelectionMode::Single,
            Selection::Multi(_) => SelectionMode::Multi,
            Selection::Range(_) => SelectionMode::Range,
            Selection::Week(_) => SelectionMode::Week,
        }
    }

    /// Whether an accepted tap may move the host to another page.
    pub fn navigates(&self) -> bool {
        !matches!(self, Selection::Multi(_))
    }

    /// Feed a clickable tap; `None` means the machine ignored it.
    pub fn tap(&mut self, date: DateValue) -> Option<DateValue> {
        match self {
            Selection::Single(single) => single.tap(date),
            Selection::Multi(multi) => multi.tap(date),
            Selection::Range(range) => range.tap(date),
            Selection::Week(week) => week.tap(date),
        }
    }

    pub fn state(&self) -> SelectionState {
        match self {
            Selection::Single(single) => SelectionState::Single {
                selected: single.selected(),
            },
            Selection::Multi(multi) => SelectionState::Multi {
                selected: multi.selected().copied().collect(),
            },
            Selection::Range(range) => SelectionState::Range {
                start: range.start(),
                end: range.end(),
            },
            Selection::Week(week) => SelectionState::Week {
                anchor: week.anchor(),
                week_start: week.week_start(),
                week_end: week.week_end(),
            },
        }
    }

    /// Listener payload after accepting `date`.
    pub fn event(&self, date: DateValue) -> Option<SelectionEvent> {
        match self {
            Selection::Single(_) => Some(SelectionEvent::DateSelected { date }),
            Selection::Multi(multi) => Some(SelectionEvent::MultiSelected {
                date,
                dates: multi.selected().copied().collect(),
            }),
            Selection::Range(range) => match (range.start(), range.end()) {
                (Some(start), Some(end)) => Some(SelectionEvent::RangeSelected { date, start, end }),
                _ => None,
            },
            Selection::Week(week) => match (week.week_start(), week.week_end()) {
                (Some(week_start), Some(week_end)) => Some(SelectionEvent::WeekSelected {
                    date,
                    week_start,
                    week_end,
                }),
                _ => None,
            },
        }
    }

    /// Highlight for a grid cell; spillover cells are never marked.
    pub fn mark(&self, cell: &DateValue) -> CellMark {
        if cell.origin() != Origin::Current {
            return CellMark::None;
        }
        match self {
            Selection::Single(single) if single.selected() == Some(*cell) => CellMark::Selected,
            Selection::Multi(multi) if multi.contains(cell) => CellMark::Selected,
            Selection::Range(range) => match (range.start(), range.end()) {
                (Some(start), _) if start == *cell => CellMark::RangeStart,
                (_, Some(end)) if end == *cell => CellMark::RangeEnd,
                (Some(start), Some(end)) if start < *cell && *cell < end => CellMark::InRange,
                _ => CellMark::None,
            },
            Selection::Week(week) => match (week.anchor(), week.week_start(), week.week_end()) {
                (Some(anchor), _, _) if anchor == *cell => CellMark::WeekAnchor,
                (_, Some(start), Some(end)) if start <= *cell && *cell <= end => CellMark::InWeek,
                _ => CellMark::None,
            },
            _ => CellMark::None,
        }
    }
}
