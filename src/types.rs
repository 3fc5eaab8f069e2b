//! Shared enums and constants for grids, selection and rendering.

use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

/// Interaction mode of a calendar widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[value(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// One date at a time.
    Single,
    /// Any number of dates, toggled individually.
    Multi,
    /// A contiguous start..end range.
    Range,
    /// The Monday-based week containing the tapped date.
    Week,
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SelectionMode::Single => "single",
            SelectionMode::Multi => "multi",
            SelectionMode::Range => "range",
            SelectionMode::Week => "week",
        };
        f.write_str(name)
    }
}

/// Which policy gates taps inside the configured date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickableMode {
    Unrestricted,
    AllowList,
    DenyList,
}

/// Result of classifying a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Clickability {
    Clickable,
    Blocked,
}

impl Clickability {
    pub fn is_clickable(self) -> bool {
        self == Clickability::Clickable
    }
}

/// Selection highlight carried by a rendered cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellMark {
    None,
    /// Single selection or a member of a multi selection.
    Selected,
    RangeStart,
    RangeEnd,
    /// Strictly between range start and end.
    InRange,
    WeekAnchor,
    /// Inside the selected week but not the anchor.
    InWeek,
}

/// Column display mode for multi-page layouts.
#[derive(Debug, Clone, Copy)]
pub enum ColumnsMode {
    /// Fixed number of columns.
    Fixed(u32),
    /// Auto-detect from terminal width.
    Auto,
}

/// Terminal rendering options used by the binary.
#[derive(Clone, Debug)]
pub struct RenderContext {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    pub columns: ColumnsMode,
    /// Width of gutter between pages in multi-page display.
    pub gutter_width: usize,
}

// Grid geometry
pub const DAYS_PER_WEEK: usize = 7;
pub const WEEK_ROWS: usize = 6;
pub const CELLS_PER_MONTH: usize = DAYS_PER_WEEK * WEEK_ROWS; // 6 weeks × 7 days
pub const MONTHS_PER_YEAR: u32 = 12;

// Default lower bound when the host gives none
pub const DEFAULT_MIN_YEAR: i32 = 1970;

// Canonical numeric date format
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// Constants for text rendering
pub const CELL_WIDTH: usize = 4;
pub const PAGE_WIDTH: usize = CELL_WIDTH * DAYS_PER_WEEK;
pub const GUTTER_WIDTH_REGULAR: usize = 2;

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_REVERSE: &str = "\x1b[7m";
pub const COLOR_DIM: &str = "\x1b[2m";
pub const COLOR_RED: &str = "\x1b[91m";
pub const COLOR_TEAL: &str = "\x1b[96m";
pub const COLOR_SAND_YELLOW: &str = "\x1b[93m";
