//! Calendar engine: configuration, paging, taps and programmatic selection.
//!
//! The engine is single-threaded and synchronous. The host translates a
//! pointer event into the tapped [`DateValue`] of the displayed grid and
//! calls [`CalendarEngine::on_tap`]; the returned [`TapResult`] says whether
//! the tap was accepted and which page to show next.

use chrono::{Local, NaiveDate, Weekday};
use serde::Serialize;
use tracing::{debug, trace};

use crate::calendar::MonthGrid;
use crate::date::{DateRange, DateValue, Origin, weekday_from_number};
use crate::error::CalendarError;
use crate::header::{HeaderHooks, HeaderState};
use crate::policy::ClickabilityPolicy;
use crate::position::{month_index_to_year_month, page_count, page_index_for_date};
use crate::selection::{Selection, SelectionEvent, SelectionState, navigation_target};
use crate::types::{CellMark, Clickability, DEFAULT_MIN_YEAR, SelectionMode};

/// Everything `configure` accepts.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarOptions {
    pub min_date: DateValue,
    pub max_date: DateValue,
    /// Initial selected date (single) or anchor (week); also picks the first page shown.
    pub selected: Option<DateValue>,
    /// 1 = Monday .. 7 = Sunday.
    pub first_day_of_week: u32,
    pub mode: SelectionMode,
    pub allow_list: Option<Vec<DateValue>>,
    pub deny_list: Option<Vec<DateValue>>,
}

impl CalendarOptions {
    /// Defaults with an explicit "today": range 1970-01-01..=today, today selected.
    pub fn with_today(today: DateValue) -> Self {
        let min_date = NaiveDate::from_ymd_opt(DEFAULT_MIN_YEAR, 1, 1)
            .map(DateValue::from_naive)
            .unwrap_or(today);
        CalendarOptions {
            min_date,
            max_date: today,
            selected: Some(today),
            first_day_of_week: 1,
            mode: SelectionMode::Single,
            allow_list: None,
            deny_list: None,
        }
    }
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self::with_today(DateValue::from_naive(Local::now().date_naive()))
    }
}

/// One annotated cell of a page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageCell {
    pub date: DateValue,
    pub origin: Origin,
    pub clickability: Clickability,
    pub mark: CellMark,
}

/// Outcome of [`CalendarEngine::on_tap`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TapResult {
    pub accepted: bool,
    /// Tapped date, origin-normalized when accepted.
    pub date: DateValue,
    pub selection: SelectionState,
    /// Page the host must switch to, when the tap crossed a month boundary.
    pub navigate_to: Option<usize>,
    /// Listener payload, when the mode emits one for this transition.
    pub event: Option<SelectionEvent>,
}

#[derive(Debug, Clone)]
struct EngineConfig {
    range: DateRange,
    week_start: Weekday,
    policy: ClickabilityPolicy,
}

/// Selection engine for one calendar widget.
#[derive(Debug)]
pub struct CalendarEngine {
    config: EngineConfig,
    selection: Selection,
    current_page: usize,
    displayed: Option<MonthGrid>,
    hooks: HeaderHooks,
}

impl CalendarEngine {
    pub fn new(options: CalendarOptions) -> Result<Self, CalendarError> {
        let (config, selection, current_page) = Self::validate(options)?;
        debug!(
            min = %config.range.min(),
            max = %config.range.max(),
            mode = %selection.mode(),
            page = current_page,
            "calendar configured"
        );
        Ok(CalendarEngine {
            config,
            selection,
            current_page,
            displayed: None,
            hooks: HeaderHooks::default(),
        })
    }

    /// Replace the whole configuration. On error nothing changes.
    pub fn configure(&mut self, options: CalendarOptions) -> Result<(), CalendarError> {
        let (config, selection, current_page) = Self::validate(options)?;
        self.config = config;
        self.selection = selection;
        self.displayed = None;
        debug!(
            min = %self.config.range.min(),
            max = %self.config.range.max(),
            mode = %self.selection.mode(),
            page = current_page,
            "calendar reconfigured"
        );
        self.move_to_page(current_page);
        Ok(())
    }

    fn validate(
        options: CalendarOptions,
    ) -> Result<(EngineConfig, Selection, usize), CalendarError> {
        let range = DateRange::new(options.min_date, options.max_date)?;
        let week_start = weekday_from_number(options.first_day_of_week)?;
        let policy = ClickabilityPolicy::from_lists(options.allow_list, options.deny_list)?;

        // Out-of-range initial dates are clamped, not rejected
        let selected = options.selected.map(|date| range.clamp(date));
        let current_page = selected
            .map(|date| page_index_for_date(&date, &range.min(), &range.max()))
            .unwrap_or(0);

        let mut selection = Selection::new(options.mode);
        match &mut selection {
            Selection::Single(single) => single.set(selected),
            Selection::Week(week) => week.set(selected),
            Selection::Multi(_) | Selection::Range(_) => {}
        }

        Ok((
            EngineConfig {
                range,
                week_start,
                policy,
            },
            selection,
            current_page,
        ))
    }

    pub fn mode(&self) -> SelectionMode {
        self.selection.mode()
    }

    pub fn range(&self) -> &DateRange {
        &self.config.range
    }

    pub fn week_start(&self) -> Weekday {
        self.config.week_start
    }

    pub fn policy(&self) -> &ClickabilityPolicy {
        &self.config.policy
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn state(&self) -> SelectionState {
        self.selection.state()
    }

    /// Install the host's header callbacks and render the current page once.
    pub fn set_header_hooks(&mut self, hooks: HeaderHooks) {
        self.hooks = hooks;
        let state = self.header_state_unchecked(self.current_page);
        self.hooks.page_changed(&state);
    }

    // ---------------------------------------------------------------------
    // Pages
    // ---------------------------------------------------------------------

    pub fn page_count(&self) -> usize {
        page_count(&self.config.range.min(), &self.config.range.max())
    }

    pub fn page_index_for(&self, date: &DateValue) -> usize {
        page_index_for_date(date, &self.config.range.min(), &self.config.range.max())
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    fn check_page(&self, index: usize) -> Result<(), CalendarError> {
        let count = self.page_count();
        if index >= count {
            return Err(CalendarError::PageOutOfRange { index, count });
        }
        Ok(())
    }

    pub fn year_month_for_page(&self, index: usize) -> Result<(i32, u32), CalendarError> {
        self.check_page(index)?;
        Ok(month_index_to_year_month(index, &self.config.range.min()))
    }

    /// Freshly built grid for page `index`.
    pub fn grid_for_page(&self, index: usize) -> Result<MonthGrid, CalendarError> {
        let (year, month) = self.year_month_for_page(index)?;
        MonthGrid::new(year, month, self.config.week_start)
    }

    /// Grid of the displayed page, rebuilt only when its month or week start changed.
    pub fn current_grid(&mut self) -> Result<&MonthGrid, CalendarError> {
        let (year, month) = self.year_month_for_page(self.current_page)?;
        let week_start = self.config.week_start;
        let fresh = matches!(
            &self.displayed,
            Some(grid) if grid.year == year && grid.month == month && grid.week_start == week_start
        );
        if !fresh {
            self.displayed = Some(MonthGrid::new(year, month, week_start)?);
        }
        match &self.displayed {
            Some(grid) => Ok(grid),
            None => Err(CalendarError::PageOutOfRange {
                index: self.current_page,
                count: self.page_count(),
            }),
        }
    }

    /// Grid of page `index` with clickability and selection marks.
    pub fn page_cells(&self, index: usize) -> Result<Vec<PageCell>, CalendarError> {
        let grid = self.grid_for_page(index)?;
        Ok(grid
            .cells
            .iter()
            .map(|&date| PageCell {
                date,
                origin: date.origin(),
                clickability: self.classify(&date),
                mark: self.selection.mark(&date),
            })
            .collect())
    }

    pub fn header_state(&self, index: usize) -> Result<HeaderState, CalendarError> {
        self.check_page(index)?;
        Ok(self.header_state_unchecked(index))
    }

    fn header_state_unchecked(&self, index: usize) -> HeaderState {
        HeaderState::for_page(index, &self.config.range.min(), &self.config.range.max())
    }

    /// Display page `index`.
    pub fn show_page(&mut self, index: usize) -> Result<(), CalendarError> {
        self.check_page(index)?;
        self.move_to_page(index);
        Ok(())
    }

    /// Step forward one page; false when already on the last page.
    pub fn next_page(&mut self) -> bool {
        if self.current_page + 1 >= self.page_count() {
            return false;
        }
        self.move_to_page(self.current_page + 1);
        true
    }

    /// Step back one page; false when already on the first page.
    pub fn prev_page(&mut self) -> bool {
        if self.current_page == 0 {
            return false;
        }
        self.move_to_page(self.current_page - 1);
        true
    }

    fn move_to_page(&mut self, index: usize) {
        if index != self.current_page {
            debug!(from = self.current_page, to = index, "page changed");
        }
        self.current_page = index;
        let state = self.header_state_unchecked(index);
        self.hooks.page_changed(&state);
    }

    // ---------------------------------------------------------------------
    // Taps
    // ---------------------------------------------------------------------

    pub fn classify(&self, date: &DateValue) -> Clickability {
        self.config.policy.classify(date, &self.config.range)
    }

    /// Feed a tap on `date` from the displayed page.
    ///
    /// Blocked dates and multi-mode spillover taps leave the state untouched
    /// and come back with `accepted == false`.
    pub fn on_tap(&mut self, date: DateValue) -> TapResult {
        if !self.classify(&date).is_clickable() {
            trace!(%date, "tap on blocked date ignored");
            return self.rejected(date);
        }
        let Some(accepted) = self.selection.tap(date) else {
            trace!(%date, origin = ?date.origin(), "tap ignored by selection");
            return self.rejected(date);
        };

        let navigate_to = if self.selection.navigates() {
            navigation_target(&accepted, self.current_page, &self.config.range)
        } else {
            None
        };
        if let Some(page) = navigate_to {
            self.move_to_page(page);
        }
        self.notify_range();

        debug!(date = %accepted, navigate_to = ?navigate_to, "tap accepted");
        TapResult {
            accepted: true,
            date: accepted,
            selection: self.selection.state(),
            navigate_to,
            event: self.selection.event(accepted),
        }
    }

    fn rejected(&self, date: DateValue) -> TapResult {
        TapResult {
            accepted: false,
            date,
            selection: self.selection.state(),
            navigate_to: None,
            event: None,
        }
    }

    fn notify_range(&mut self) {
        if let Selection::Range(range) = &self.selection {
            let (start, end) = (range.start(), range.end());
            self.hooks.range_changed(start, end);
        }
    }

    // ---------------------------------------------------------------------
    // Programmatic selection
    // ---------------------------------------------------------------------

    fn expect_mode(&self, expected: SelectionMode) -> Result<(), CalendarError> {
        let actual = self.selection.mode();
        if actual != expected {
            return Err(CalendarError::ModeMismatch { expected, actual });
        }
        Ok(())
    }

    /// Single mode: select `date` (clamped into range) and show its page.
    pub fn set_selected_date(&mut self, date: Option<DateValue>) -> Result<(), CalendarError> {
        self.expect_mode(SelectionMode::Single)?;
        let date = date.map(|date| self.config.range.clamp(date));
        if let Selection::Single(single) = &mut self.selection {
            single.set(date);
        }
        if let Some(date) = date {
            let page = self.page_index_for(&date);
            self.move_to_page(page);
        }
        Ok(())
    }

    /// Multi mode: replace the selected set. Dates outside the range are dropped.
    pub fn set_selected_dates(
        &mut self,
        dates: impl IntoIterator<Item = DateValue>,
    ) -> Result<(), CalendarError> {
        self.expect_mode(SelectionMode::Multi)?;
        let range = self.config.range;
        if let Selection::Multi(multi) = &mut self.selection {
            multi.set(dates.into_iter().filter(|date| range.contains(date)));
        }
        Ok(())
    }

    /// Range mode: set both ends (clamped, swapped when reversed) and show the start page.
    ///
    /// Equal ends clear the range.
    pub fn set_selected_range(
        &mut self,
        start: DateValue,
        end: DateValue,
    ) -> Result<(), CalendarError> {
        self.expect_mode(SelectionMode::Range)?;
        let range = self.config.range;
        let mut shown = None;
        if let Selection::Range(selection) = &mut self.selection {
            selection.set(Some(range.clamp(start)), Some(range.clamp(end)));
            shown = selection.start();
        }
        if let Some(start) = shown {
            let page = self.page_index_for(&start);
            self.move_to_page(page);
        }
        self.notify_range();
        Ok(())
    }

    /// Week mode: anchor the selected week at `date` (clamped) and show its page.
    pub fn set_week_anchor(&mut self, date: Option<DateValue>) -> Result<(), CalendarError> {
        self.expect_mode(SelectionMode::Week)?;
        let date = date.map(|date| self.config.range.clamp(date));
        if let Selection::Week(week) = &mut self.selection {
            week.set(date);
        }
        if let Some(date) = date {
            let page = self.page_index_for(&date);
            self.move_to_page(page);
        }
        Ok(())
    }

    /// Empty the selection of the current mode.
    pub fn clear_selection(&mut self) {
        self.selection = Selection::new(self.selection.mode());
        self.notify_range();
    }
}
