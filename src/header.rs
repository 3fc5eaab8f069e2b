//! Page header state and the callbacks a host injects to draw it.

use crate::date::DateValue;
use crate::position::{month_index_to_year_month, page_count};

/// What a header shows for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderState {
    pub year: i32,
    pub month: u32,
    pub has_prev: bool,
    pub has_next: bool,
}

impl HeaderState {
    /// Header for `page` of the `[min_date, max_date]` calendar.
    pub fn for_page(page: usize, min_date: &DateValue, max_date: &DateValue) -> Self {
        let (year, month) = month_index_to_year_month(page, min_date);
        let count = page_count(min_date, max_date);
        HeaderState {
            year,
            month,
            has_prev: page > 0,
            has_next: page + 1 < count,
        }
    }

    /// Canonical `YYYY-MM` title.
    pub fn title(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

type TitleFn = Box<dyn FnMut(i32, u32)>;
type PrevNextFn = Box<dyn FnMut(bool, bool)>;
type RangeFn = Box<dyn FnMut(Option<DateValue>, Option<DateValue>)>;

/// Header capability injected by the host. Every hook is optional.
#[derive(Default)]
pub struct HeaderHooks {
    /// Called with (year, month) when the displayed page changes.
    pub render_title: Option<TitleFn>,
    /// Called with (has_prev, has_next) when the displayed page changes.
    pub render_prev_next: Option<PrevNextFn>,
    /// Called with (start, end) after range selection changes.
    pub render_range: Option<RangeFn>,
}

impl HeaderHooks {
    pub fn page_changed(&mut self, state: &HeaderState) {
        if let Some(render) = self.render_title.as_mut() {
            render(state.year, state.month);
        }
        if let Some(render) = self.render_prev_next.as_mut() {
            render(state.has_prev, state.has_next);
        }
    }

    pub fn range_changed(&mut self, start: Option<DateValue>, end: Option<DateValue>) {
        if let Some(render) = self.render_range.as_mut() {
            render(start, end);
        }
    }
}

impl std::fmt::Debug for HeaderHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeaderHooks")
            .field("render_title", &self.render_title.is_some())
            .field("render_prev_next", &self.render_prev_next.is_some())
            .field("render_range", &self.render_range.is_some())
            .finish()
    }
}

/// Range label: empty, `start`, or `start -- end`.
pub fn range_label(start: Option<DateValue>, end: Option<DateValue>) -> String {
    match (start, end) {
        (Some(start), Some(end)) => format!("{start} -- {end}"),
        (Some(start), None) => start.to_string(),
        _ => String::new(),
    }
}
