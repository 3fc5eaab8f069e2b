//! Calendar date-selection engine.
//!
//! Features:
//! - 6x7 month grids with spillover days and a configurable first day of week
//! - Page index <-> (year, month) mapping over an inclusive date range
//! - Allow-list / deny-list clickability policies
//! - Single, multi, range and week selection modes
//! - Header callbacks injected by the host

pub mod args;
pub mod calendar;
pub mod date;
pub mod engine;
pub mod error;
pub mod formatter;
pub mod header;
pub mod logging;
pub mod policy;
pub mod position;
pub mod selection;
pub mod types;

pub use calendar::{MonthGrid, build_grid, week_rows};
pub use date::{DateRange, DateValue, Origin};
pub use engine::{CalendarEngine, CalendarOptions, PageCell, TapResult};
pub use error::CalendarError;
pub use policy::ClickabilityPolicy;
pub use selection::{Selection, SelectionEvent, SelectionState};
pub use types::{CellMark, ClickableMode, Clickability, SelectionMode};
