//! Text rendering of calendar pages and tap results.

use chrono::Weekday;
use unicode_width::UnicodeWidthStr;

use crate::calendar::weekday_order;
use crate::date::{DateValue, Origin};
use crate::engine::{CalendarEngine, PageCell, TapResult};
use crate::error::CalendarError;
use crate::header::{HeaderState, range_label};
use crate::selection::SelectionState;
use crate::types::{
    COLOR_DIM, COLOR_RED, COLOR_RESET, COLOR_REVERSE, COLOR_SAND_YELLOW, COLOR_TEAL,
    CellMark, ColumnsMode, DAYS_PER_WEEK, PAGE_WIDTH, RenderContext,
};

impl RenderContext {
    pub fn pages_per_row(&self) -> u32 {
        match self.columns {
            ColumnsMode::Fixed(n) => n,
            ColumnsMode::Auto => {
                // page width + gutter, clamp to 1-3 for readability
                let page_width = PAGE_WIDTH + self.gutter_width;
                if let Some(term_width) = get_terminal_width() {
                    (term_width / page_width as u32).clamp(1, 3)
                } else {
                    3
                }
            }
        }
    }
}

/// Get terminal width using terminal_size crate.
fn get_terminal_width() -> Option<u32> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as u32)
}

/// Display width of `text`, ignoring ANSI escape sequences.
pub fn visible_width(text: &str) -> usize {
    let mut plain = String::with_capacity(text.len());
    let mut in_escape = false;
    for ch in text.chars() {
        if in_escape {
            if ch.is_ascii_alphabetic() {
                in_escape = false;
            }
        } else if ch == '\x1b' {
            in_escape = true;
        } else {
            plain.push(ch);
        }
    }
    plain.width()
}

/// Center text within a specified width, accounting for Unicode character widths.
pub fn center_text(text: &str, width: usize) -> String {
    let text_width = visible_width(text);
    if text_width >= width {
        return text.to_string();
    }
    let total_padding = width - text_width;
    let left_padding = total_padding.div_ceil(2);
    let right_padding = total_padding - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

/// Page title with `<` / `>` when a previous / next page exists.
pub fn format_page_header(state: &HeaderState, color: bool) -> String {
    let prev = if state.has_prev { '<' } else { ' ' };
    let next = if state.has_next { '>' } else { ' ' };
    let header = format!("{} {} {}", prev, state.title(), next);
    let centered = center_text(&header, PAGE_WIDTH);
    if color {
        format!("{}{}{}", COLOR_TEAL, centered, COLOR_RESET)
    } else {
        centered
    }
}

/// Two-letter English weekday abbreviation.
pub fn weekday_short_name(weekday: Weekday) -> String {
    weekday.to_string().chars().take(2).collect()
}

/// Weekday header row in the configured week order.
pub fn format_weekday_headers(week_start: Weekday, color: bool) -> String {
    let mut result = String::new();
    if color {
        result.push_str(COLOR_SAND_YELLOW);
    }
    for weekday in weekday_order(week_start) {
        result.push_str(&format!(" {} ", weekday_short_name(weekday)));
    }
    if color {
        result.push_str(COLOR_RESET);
    }
    result
}

/// Format one cell, always four columns wide.
///
/// Marker priority: selection > spillover > blocked.
pub fn format_cell(cell: &PageCell, color: bool) -> String {
    let spillover = cell.origin != Origin::Current;
    let blocked = !cell.clickability.is_clickable();
    let (open, close) = match cell.mark {
        CellMark::Selected | CellMark::RangeStart | CellMark::RangeEnd | CellMark::WeekAnchor => {
            ('[', ']')
        }
        CellMark::InRange | CellMark::InWeek => ('<', '>'),
        CellMark::None if spillover => ('·', '·'),
        CellMark::None if blocked => ('-', '-'),
        CellMark::None => (' ', ' '),
    };
    let day = format!("{:>2}", cell.date.day());
    if !color {
        return format!("{}{}{}", open, day, close);
    }
    let style = match cell.mark {
        CellMark::Selected | CellMark::RangeStart | CellMark::RangeEnd | CellMark::WeekAnchor => {
            COLOR_REVERSE
        }
        CellMark::InRange | CellMark::InWeek => COLOR_TEAL,
        CellMark::None if spillover || blocked => COLOR_DIM,
        CellMark::None if cell.date.is_weekend() => COLOR_RED,
        CellMark::None => "",
    };
    if style.is_empty() {
        format!("{}{}{}", open, day, close)
    } else {
        format!("{}{}{}{}{}", open, style, day, COLOR_RESET, close)
    }
}

/// Page `index` as lines: header, weekday row, 6 week rows.
pub fn format_page(
    engine: &CalendarEngine,
    index: usize,
    color: bool,
) -> Result<Vec<String>, CalendarError> {
    let state = engine.header_state(index)?;
    let cells = engine.page_cells(index)?;

    let mut lines = Vec::with_capacity(8);
    lines.push(format_page_header(&state, color));
    lines.push(format_weekday_headers(engine.week_start(), color));
    for week in cells.chunks(DAYS_PER_WEEK) {
        let line: String = week.iter().map(|cell| format_cell(cell, color)).collect();
        lines.push(line);
    }
    Ok(lines)
}

/// Lay out multiple pages side by side, `pages_per_row` at a time.
pub fn join_side_by_side(ctx: &RenderContext, pages: &[Vec<String>]) -> Vec<String> {
    let mut out = Vec::new();
    let per_row = ctx.pages_per_row().max(1) as usize;
    for (chunk_idx, chunk) in pages.chunks(per_row).enumerate() {
        if chunk_idx > 0 {
            out.push(String::new());
        }
        let max_height = chunk.iter().map(|g| g.len()).max().unwrap_or(0);
        for row in 0..max_height {
            let mut line = String::new();
            for (i, page) in chunk.iter().enumerate() {
                let text = page.get(row).map(String::as_str).unwrap_or("");
                line.push_str(text);
                if i < chunk.len() - 1 {
                    let padding = PAGE_WIDTH.saturating_sub(visible_width(text));
                    line.push_str(&" ".repeat(padding + ctx.gutter_width));
                }
            }
            out.push(line.trim_end().to_string());
        }
    }
    out
}

/// Human-readable summary of a selection.
pub fn format_selection(state: &SelectionState) -> String {
    fn opt(date: Option<DateValue>) -> String {
        date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())
    }
    match state {
        SelectionState::Single { selected } => format!("selected {}", opt(*selected)),
        SelectionState::Multi { selected } => {
            let dates: Vec<String> = selected.iter().map(|d| d.to_string()).collect();
            format!("selected [{}]", dates.join(", "))
        }
        SelectionState::Range { start, end } => {
            let label = range_label(*start, *end);
            if label.is_empty() {
                "range -".to_string()
            } else {
                format!("range {}", label)
            }
        }
        SelectionState::Week {
            anchor,
            week_start,
            week_end,
        } => format!(
            "week {} .. {} (anchor {})",
            opt(*week_start),
            opt(*week_end),
            opt(*anchor)
        ),
    }
}

/// One line per tap: date, verdict, resulting selection, navigation.
pub fn format_tap_result(result: &TapResult) -> String {
    let verdict = if result.accepted {
        "accepted"
    } else {
        "rejected"
    };
    let mut line = format!(
        "tap {}: {}, {}",
        result.date,
        verdict,
        format_selection(&result.selection)
    );
    if let Some(page) = result.navigate_to {
        line.push_str(&format!(", go to page {}", page));
    }
    line
}

