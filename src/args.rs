//! Command-line argument parsing using clap.
//!
//! Dates are given in the canonical `YYYY-MM-DD` form.

use clap::Parser;
use std::io::IsTerminal;

use crate::date::DateValue;
use crate::engine::CalendarOptions;
use crate::types::{ColumnsMode, GUTTER_WIDTH_REGULAR, RenderContext, SelectionMode};

/// Environment variable overriding today's date.
pub const TODAY_ENV: &str = "CALPICK_TODAY";

#[derive(Parser, Debug)]
#[command(name = "calpick")]
#[command(about = "Drives a calendar selection engine from the terminal", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// First selectable date (default 1970-01-01).
    #[arg(long, value_name = "date", help_heading = "Range options")]
    pub min: Option<DateValue>,

    /// Last selectable date (default today).
    #[arg(long, value_name = "date", help_heading = "Range options")]
    pub max: Option<DateValue>,

    /// Initially selected date or week anchor (default today).
    #[arg(long, value_name = "date", help_heading = "Range options")]
    pub selected: Option<DateValue>,

    /// First day of week, 1 = Monday .. 7 = Sunday.
    #[arg(
        short = 'f',
        long = "first-day",
        default_value_t = 1,
        value_name = "1-7",
        help_heading = "Calendar options"
    )]
    pub first_day: u32,

    /// Week starts on Sunday (same as --first-day 7).
    #[arg(short = 's', long, help_heading = "Calendar options")]
    pub sunday: bool,

    /// Selection mode.
    #[arg(
        short = 'm',
        long,
        default_value = "single",
        help_heading = "Calendar options"
    )]
    pub mode: SelectionMode,

    /// Only these dates are clickable (comma separated).
    #[arg(
        long,
        value_delimiter = ',',
        value_name = "dates",
        help_heading = "Calendar options"
    )]
    pub allow: Option<Vec<DateValue>>,

    /// These dates are not clickable (comma separated).
    #[arg(
        long,
        value_delimiter = ',',
        value_name = "dates",
        help_heading = "Calendar options"
    )]
    pub deny: Option<Vec<DateValue>>,

    /// Tap a date on the displayed page (repeatable, applied in order).
    #[arg(short = 't', long = "tap", value_name = "date", help_heading = "Interaction")]
    pub taps: Vec<DateValue>,

    /// Number of pages to display, starting at the current page.
    #[arg(
        short = 'n',
        long = "months",
        value_name = "num",
        help_heading = "Display options"
    )]
    pub months_count: Option<u32>,

    /// Number of columns for multiple pages (or "auto" for terminal width).
    #[arg(
        short = 'c',
        long = "columns",
        value_name = "width",
        help_heading = "Display options"
    )]
    pub columns: Option<String>,

    /// Print a JSON report instead of the calendar.
    #[arg(long, help_heading = "Output options")]
    pub json: bool,

    /// Disable colorized output.
    #[arg(long, help_heading = "Output options")]
    pub no_color: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, help_heading = "Output options")]
    pub verbose: u8,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Cell legend:
  [dd]   selected date, range end or week anchor
  <dd>   inside the selected range or week
  -dd-   not clickable
  ·dd·   day of the previous or next month

Examples:
  calpick                                   Current month, today selected
  calpick --mode range -t 2023-05-08 -t 2023-05-03
  calpick --mode week --selected 2024-01-03
  calpick --deny 2023-05-08 -t 2023-05-08   Tap is rejected
  calpick --min 2023-01-15 --max 2024-04-15 -n 3 --json

CALPICK_TODAY=YYYY-MM-DD overrides today's date.";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// First-day-of-week number after applying --sunday.
    pub fn first_day_of_week(&self) -> u32 {
        if self.sunday { 7 } else { self.first_day }
    }
}

impl CalendarOptions {
    pub fn from_args(args: &Args) -> Self {
        let defaults = CalendarOptions::with_today(get_today_date());
        CalendarOptions {
            min_date: args.min.unwrap_or(defaults.min_date),
            max_date: args.max.unwrap_or(defaults.max_date),
            selected: args.selected.or(defaults.selected),
            first_day_of_week: args.first_day_of_week(),
            mode: args.mode,
            allow_list: args.allow.clone(),
            deny_list: args.deny.clone(),
        }
    }
}

impl RenderContext {
    pub fn new(args: &Args) -> Result<Self, String> {
        let color = !args.no_color && std::io::stdout().is_terminal();

        let columns = match args.columns.as_deref() {
            Some("auto") | None => ColumnsMode::Auto,
            Some(s) => {
                let n = s
                    .parse::<u32>()
                    .map_err(|_| format!("Invalid columns value: {}", s))?;
                if n == 0 {
                    return Err("Columns must be positive".to_string());
                }
                ColumnsMode::Fixed(n)
            }
        };

        if args.months_count == Some(0) {
            return Err("Months must be positive".to_string());
        }

        Ok(RenderContext {
            color,
            columns,
            gutter_width: GUTTER_WIDTH_REGULAR,
        })
    }
}

/// Get today's date, respecting the CALPICK_TODAY environment variable for testing.
pub fn get_today_date() -> DateValue {
    if let Ok(test_time) = std::env::var(TODAY_ENV)
        && let Ok(date) = test_time.parse::<DateValue>()
    {
        return date;
    }
    DateValue::from_naive(chrono::Local::now().date_naive())
}
