//! Terminal host for the calendar selection engine.
//!
//! # Usage
//! ```ignore
//! calpick                                         // current month, today selected
//! calpick --mode range -t 2023-05-08 -t 2023-05-03
//! calpick --mode week --selected 2024-01-03 -n 2
//! calpick --json -t 2022-05-25                    // machine-readable report
//! ```

use serde::Serialize;

use calpick::args::Args;
use calpick::formatter::{format_page, format_tap_result, join_side_by_side};
use calpick::logging;
use calpick::types::RenderContext;
use calpick::{
    CalendarEngine, CalendarError, CalendarOptions, DateValue, PageCell, SelectionMode,
    SelectionState, TapResult,
};

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("calpick: {}", e);
        std::process::exit(1);
    }
}

#[derive(Serialize)]
struct PageReport {
    index: usize,
    year: i32,
    month: u32,
    cells: Vec<PageCell>,
}

#[derive(Serialize)]
struct Report {
    mode: SelectionMode,
    page_count: usize,
    current_page: usize,
    selection: SelectionState,
    taps: Vec<TapResult>,
    pages: Vec<PageReport>,
}

fn run(args: &Args) -> Result<(), String> {
    let ctx = RenderContext::new(args)?;
    let mut engine =
        CalendarEngine::new(CalendarOptions::from_args(args)).map_err(|e| e.to_string())?;

    let mut taps = Vec::with_capacity(args.taps.len());
    for &date in &args.taps {
        let cell = resolve_tap(&mut engine, date).map_err(|e| e.to_string())?;
        taps.push(engine.on_tap(cell));
    }

    let first = engine.current_page();
    let count = args.months_count.unwrap_or(1) as usize;
    let last = (first + count).min(engine.page_count());

    if args.json {
        let pages = (first..last)
            .map(|index| page_report(&engine, index))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| e.to_string())?;
        let report = Report {
            mode: engine.mode(),
            page_count: engine.page_count(),
            current_page: engine.current_page(),
            selection: engine.state(),
            taps,
            pages,
        };
        let json = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{}", json);
        return Ok(());
    }

    for result in &taps {
        println!("{}", format_tap_result(result));
    }
    if !taps.is_empty() {
        println!();
    }

    let pages = (first..last)
        .map(|index| format_page(&engine, index, ctx.color))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| e.to_string())?;
    for line in join_side_by_side(&ctx, &pages) {
        println!("{}", line);
    }

    Ok(())
}

/// Map a tapped date to the matching cell of the displayed grid, keeping its origin.
///
/// Dates not on the displayed grid are passed through as current-month dates.
fn resolve_tap(engine: &mut CalendarEngine, date: DateValue) -> Result<DateValue, CalendarError> {
    let grid = engine.current_grid()?;
    Ok(grid
        .cells
        .iter()
        .find(|cell| **cell == date)
        .copied()
        .unwrap_or(date))
}

fn page_report(engine: &CalendarEngine, index: usize) -> Result<PageReport, CalendarError> {
    let (year, month) = engine.year_month_for_page(index)?;
    Ok(PageReport {
        index,
        year,
        month,
        cells: engine.page_cells(index)?,
    })
}
