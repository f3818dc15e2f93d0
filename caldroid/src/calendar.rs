//! The calendar facade.
//!
//! ## Usage
//!
//! [`CalendarState`] bundles everything a host widget needs: it owns the
//! page mapper, the coordinator, the grid layout and the selection model,
//! all built from one [`CalendarConfig`].
//!
//! ```
//! use caldroid::{CalendarConfig, CalendarState, GridCells};
//! use chrono::NaiveDate;
//!
//! let config = CalendarConfig::default()
//!     .initial_date(NaiveDate::from_ymd_opt(2024, 2, 14).unwrap());
//! let mut calendar = CalendarState::new(config).unwrap();
//! let page = calendar.current_index();
//! let GridCells::Days(grid) = calendar.grid_for_page(page).unwrap() else {
//!     unreachable!();
//! };
//! assert_eq!(grid.len(), 42);
//! calendar.select_single(NaiveDate::from_ymd_opt(2024, 2, 14));
//! assert!(calendar.selection().is_selected(NaiveDate::from_ymd_opt(2024, 2, 14).unwrap()));
//! ```
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::{
    config::CalendarConfig,
    coordinator::{MoveOutcome, PageLifecycleCoordinator, WindowChange},
    date_utils::today,
    error::{CalendarError, ConfigError, RangeError},
    grid::{CalendarGridBuilder, GridCells},
    listener::{CalendarListener, NoopListener},
    mapper::PageIndexMapper,
    selection::DateSelectionModel,
    unit::CalendarUnit,
    weekday::StartDayOfWeek,
};

/// Headless state of one calendar widget.
#[derive(Debug)]
pub struct CalendarState {
    config: CalendarConfig,
    coordinator: PageLifecycleCoordinator,
    grid_builder: CalendarGridBuilder,
    selection: DateSelectionModel,
}

impl CalendarState {
    /// Creates a calendar without a listener.
    ///
    /// # Errors
    ///
    /// See [`CalendarState::with_listener`].
    pub fn new(config: CalendarConfig) -> Result<Self, CalendarError> {
        Self::with_listener(config, Arc::new(NoopListener))
    }

    /// Creates a calendar that reports to `listener`.
    ///
    /// The listener receives `on_unit_changed` for the initial unit, then
    /// `on_view_created`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the date bounds are inverted.
    pub fn with_listener(
        config: CalendarConfig,
        listener: Arc<dyn CalendarListener>,
    ) -> Result<Self, CalendarError> {
        config.validate()?;
        let anchor = config.initial_date.unwrap_or_else(today);
        let mapper = PageIndexMapper::for_bounds(
            config.granularity,
            anchor,
            config.min_date,
            config.max_date,
            config.page_window,
        )?;

        let mut selection = DateSelectionModel::with_bounds(config.min_date, config.max_date)?;
        selection.set_disabled_dates(config.disabled_dates.iter().copied());
        selection.set_selected_dates(config.selected_dates.iter().copied());

        let grid_builder =
            CalendarGridBuilder::new(config.start_day_of_week, config.six_weeks_in_calendar);
        let coordinator = PageLifecycleCoordinator::new(
            mapper,
            CalendarUnit::of(anchor, config.granularity),
            listener,
        )?;
        debug!(
            "Calendar created with {} pages, showing {}",
            mapper.item_count(),
            coordinator.current_unit()
        );
        coordinator.listener().on_view_created();

        Ok(Self {
            config,
            coordinator,
            grid_builder,
            selection,
        })
    }

    /// Returns the configuration the calendar currently follows.
    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Returns the page coordinator.
    pub fn coordinator(&self) -> &PageLifecycleCoordinator {
        &self.coordinator
    }

    /// Returns the page coordinator for direct page tracking.
    pub fn coordinator_mut(&mut self) -> &mut PageLifecycleCoordinator {
        &mut self.coordinator
    }

    /// Returns the grid layout.
    pub fn grid_builder(&self) -> &CalendarGridBuilder {
        &self.grid_builder
    }

    /// Returns the selection model.
    pub fn selection(&self) -> &DateSelectionModel {
        &self.selection
    }

    /// Replaces the listener.
    pub fn set_listener(&mut self, listener: Arc<dyn CalendarListener>) {
        self.coordinator.set_listener(listener);
    }

    /// Returns the number of pages.
    pub fn page_count(&self) -> usize {
        self.coordinator.mapper().item_count()
    }

    /// Returns the current page index.
    pub fn current_index(&self) -> usize {
        self.coordinator.current_index()
    }

    /// Returns the unit on the current page.
    pub fn current_unit(&self) -> CalendarUnit {
        self.coordinator.current_unit()
    }

    /// Returns the unit on the page at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::IndexOutOfRange`] past the last page.
    pub fn unit_for_page(&self, index: usize) -> Result<CalendarUnit, RangeError> {
        self.coordinator.mapper().index_to_unit(index)
    }

    /// Builds the cells of the page at `index`.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] past the last page or when the padded grid
    /// leaves the representable date range.
    pub fn grid_for_page(&self, index: usize) -> Result<GridCells, RangeError> {
        let unit = self.unit_for_page(index)?;
        self.grid_builder.build(unit)
    }

    /// Forwards a settled page from the host scroller.
    ///
    /// # Errors
    ///
    /// See [`PageLifecycleCoordinator::on_page_selected`].
    pub fn on_page_selected(&mut self, index: usize) -> Result<CalendarUnit, RangeError> {
        self.coordinator.on_page_selected(index)
    }

    /// Navigates to the unit containing `date`.
    pub fn move_to(&mut self, date: NaiveDate) -> MoveOutcome {
        self.coordinator.move_to(date)
    }

    /// Requests a one-page step back; `None` on the first page.
    pub fn prev_page(&mut self) -> Option<usize> {
        self.coordinator.prev_page()
    }

    /// Requests a one-page step forward; `None` on the last page.
    pub fn next_page(&mut self) -> Option<usize> {
        self.coordinator.next_page()
    }

    /// Keeps the pages within `beyond` of the current page alive.
    pub fn sync_window(&mut self, beyond: usize) -> WindowChange {
        self.coordinator.sync_window(beyond)
    }

    /// Handles a click on `date`.
    ///
    /// Returns whether the click was dispatched to the listener.
    pub fn click(&self, date: NaiveDate) -> bool {
        if !self.accepts_click(date) {
            return false;
        }
        self.coordinator.listener().on_select_date(date);
        true
    }

    /// Handles a long press on `date`.
    ///
    /// Returns whether the press was dispatched to the listener.
    pub fn long_click(&self, date: NaiveDate) -> bool {
        if !self.accepts_click(date) {
            return false;
        }
        self.coordinator.listener().on_long_click_date(date);
        true
    }

    /// Handles a click on the title above the grid.
    pub fn title_clicked(&self) {
        self.coordinator
            .listener()
            .on_title_clicked(self.coordinator.current_unit());
    }

    /// Changes the first grid column. Existing grids must be rebuilt.
    pub fn set_start_day_of_week(&mut self, start_day_of_week: impl Into<StartDayOfWeek>) {
        let start_day_of_week = start_day_of_week.into();
        self.config.start_day_of_week = start_day_of_week;
        self.grid_builder =
            CalendarGridBuilder::new(start_day_of_week, self.grid_builder.force_six_rows());
    }

    /// Toggles six-row padding of month grids. Existing grids must be rebuilt.
    pub fn set_six_weeks_in_calendar(&mut self, six_weeks_in_calendar: bool) {
        self.config.six_weeks_in_calendar = six_weeks_in_calendar;
        self.grid_builder =
            CalendarGridBuilder::new(self.grid_builder.start_day_of_week(), six_weeks_in_calendar);
    }

    /// Toggles dispatching of clicks on non-selectable dates.
    pub fn set_enable_click_on_disabled_dates(&mut self, enable: bool) {
        self.config.enable_click_on_disabled_dates = enable;
    }

    /// Returns whether the host pager should accept swipes.
    pub fn swipe_enabled(&self) -> bool {
        self.config.enable_swipe
    }

    /// Locks or unlocks swiping. Arrow and programmatic navigation still work.
    pub fn set_enable_swipe(&mut self, enable: bool) {
        self.config.enable_swipe = enable;
    }

    /// Replaces the selection with every date from `from` to `to` inclusive.
    ///
    /// See [`DateSelectionModel::select_range`].
    pub fn select_range(
        &mut self,
        from: impl Into<Option<NaiveDate>>,
        to: impl Into<Option<NaiveDate>>,
    ) -> bool {
        self.selection.select_range(from, to)
    }

    /// Adds `date` to the selection.
    pub fn select_single(&mut self, date: impl Into<Option<NaiveDate>>) {
        self.selection.select_single(date);
    }

    /// Removes `date` from the selection.
    pub fn deselect(&mut self, date: impl Into<Option<NaiveDate>>) {
        self.selection.deselect(date);
    }

    /// Replaces the selection.
    pub fn set_selected_dates(&mut self, dates: impl IntoIterator<Item = NaiveDate>) {
        self.selection.set_selected_dates(dates);
    }

    /// Replaces the selection from date strings.
    ///
    /// # Errors
    ///
    /// See [`DateSelectionModel::set_selected_dates_from_strings`].
    pub fn set_selected_dates_from_strings<I, S>(
        &mut self,
        dates: I,
        format: Option<&str>,
    ) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.selection.set_selected_dates_from_strings(dates, format)
    }

    /// Clears the selection.
    pub fn clear_selected_dates(&mut self) {
        self.selection.clear_selected_dates();
    }

    /// Replaces the disabled dates.
    pub fn set_disabled_dates(&mut self, dates: impl IntoIterator<Item = NaiveDate>) {
        self.selection.set_disabled_dates(dates);
    }

    /// Replaces the disabled dates from date strings.
    ///
    /// # Errors
    ///
    /// See [`DateSelectionModel::set_disabled_dates_from_strings`].
    pub fn set_disabled_dates_from_strings<I, S>(
        &mut self,
        dates: I,
        format: Option<&str>,
    ) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.selection.set_disabled_dates_from_strings(dates, format)
    }

    /// Disables a single date.
    pub fn disable_date(&mut self, date: impl Into<Option<NaiveDate>>) {
        self.selection.disable_date(date);
    }

    /// Re-enables a single date.
    pub fn enable_date(&mut self, date: impl Into<Option<NaiveDate>>) {
        self.selection.enable_date(date);
    }

    /// Clears every disabled date.
    pub fn clear_disabled_dates(&mut self) {
        self.selection.clear_disabled_dates();
    }

    /// Sets or clears the minimum date, keeping the maximum.
    ///
    /// # Errors
    ///
    /// See [`CalendarState::rebuild_bounds`].
    pub fn set_min_date(&mut self, min_date: Option<NaiveDate>) -> Result<usize, CalendarError> {
        self.rebuild_bounds(min_date, self.config.max_date)
    }

    /// Sets or clears the maximum date, keeping the minimum.
    ///
    /// # Errors
    ///
    /// See [`CalendarState::rebuild_bounds`].
    pub fn set_max_date(&mut self, max_date: Option<NaiveDate>) -> Result<usize, CalendarError> {
        self.rebuild_bounds(self.config.min_date, max_date)
    }

    /// Changes the date bounds and rebuilds the page mapping.
    ///
    /// The displayed unit is kept when it is still in range and clamped to the
    /// nearest bound otherwise. Returns the new current page index; every live
    /// page must be rebuilt.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDateBounds`] when `min > max`; nothing
    /// changes in that case.
    pub fn rebuild_bounds(
        &mut self,
        min_date: Option<NaiveDate>,
        max_date: Option<NaiveDate>,
    ) -> Result<usize, CalendarError> {
        let mut config = self.config.clone();
        config.min_date = min_date;
        config.max_date = max_date;
        config.validate()?;

        let current = self.coordinator.current_unit();
        let mapper = PageIndexMapper::for_bounds(
            config.granularity,
            current.first_day(),
            min_date,
            max_date,
            config.page_window,
        )?;
        self.selection.set_bounds(min_date, max_date)?;
        let index = self.coordinator.replace_mapper(mapper, current)?;
        self.config = config;
        Ok(index)
    }

    fn accepts_click(&self, date: NaiveDate) -> bool {
        self.selection
            .should_dispatch_click(date, self.config.enable_click_on_disabled_dates)
    }
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;

    use super::*;
    use crate::{
        coordinator::{ScrollRequest, SwipeDirection},
        unit::Granularity,
    };

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        UnitChanged(CalendarUnit),
        Select(NaiveDate),
        LongClick(NaiveDate),
        Title(CalendarUnit),
        ViewCreated,
    }

    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<Event>>,
    }

    impl Recorder {
        fn take(&self) -> Vec<Event> {
            std::mem::take(&mut *self.events.lock())
        }
    }

    impl CalendarListener for Recorder {
        fn on_unit_changed(&self, unit: CalendarUnit) {
            self.events.lock().push(Event::UnitChanged(unit));
        }

        fn on_select_date(&self, date: NaiveDate) {
            self.events.lock().push(Event::Select(date));
        }

        fn on_long_click_date(&self, date: NaiveDate) {
            self.events.lock().push(Event::LongClick(date));
        }

        fn on_title_clicked(&self, unit: CalendarUnit) {
            self.events.lock().push(Event::Title(unit));
        }

        fn on_view_created(&self) {
            self.events.lock().push(Event::ViewCreated);
        }
    }

    fn ym(year: i32, month: u8) -> CalendarUnit {
        CalendarUnit::new_month(year, month).unwrap()
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn setup(config: CalendarConfig) -> (CalendarState, Arc<Recorder>) {
        let recorder = Arc::new(Recorder::default());
        let calendar = CalendarState::with_listener(config, recorder.clone()).unwrap();
        (calendar, recorder)
    }

    #[test]
    fn construction_reports_unit_then_view() {
        let (calendar, recorder) =
            setup(CalendarConfig::default().initial_date(date(2023, 6, 15)));
        assert_eq!(
            recorder.take(),
            vec![Event::UnitChanged(ym(2023, 6)), Event::ViewCreated]
        );
        assert_eq!(calendar.page_count(), 2001);
        assert_eq!(calendar.current_index(), 1000);
    }

    #[test]
    fn inverted_bounds_are_rejected_up_front() {
        let config = CalendarConfig::default()
            .min_date(date(2024, 2, 1))
            .max_date(date(2024, 1, 1));
        let err = CalendarState::new(config).unwrap_err();
        assert!(matches!(
            err,
            CalendarError::Config(ConfigError::InvalidDateBounds { .. })
        ));
    }

    #[test]
    fn oversized_page_window_is_rejected_up_front() {
        let config = CalendarConfig::default()
            .initial_date(date(2023, 6, 1))
            .page_window(usize::MAX);
        let err = CalendarState::new(config).unwrap_err();
        assert!(matches!(
            err,
            CalendarError::Config(ConfigError::InvalidPageWindow { window: usize::MAX, .. })
        ));
    }

    #[test]
    fn bounded_config_pages_only_the_range() {
        let config = CalendarConfig::default()
            .min_date(date(2020, 1, 15))
            .max_date(date(2020, 3, 10))
            .initial_date(date(2020, 2, 1));
        let calendar = CalendarState::new(config).unwrap();
        assert_eq!(calendar.page_count(), 3);
        assert_eq!(calendar.current_index(), 1);
        assert!(calendar.grid_for_page(3).is_err());
    }

    #[test]
    fn grids_follow_the_layout_settings() {
        let config = CalendarConfig::default()
            .initial_date(date(2023, 2, 1))
            .start_day_of_week(StartDayOfWeek::MONDAY)
            .six_weeks_in_calendar(false);
        let mut calendar = CalendarState::new(config).unwrap();
        let index = calendar.current_index();
        let grid = calendar.grid_for_page(index).unwrap();
        let days = grid.as_days().unwrap();
        assert_eq!(days.cells()[0].date(), date(2023, 1, 30));
        assert_eq!(days.len(), 35);

        calendar.set_six_weeks_in_calendar(true);
        calendar.set_start_day_of_week(StartDayOfWeek::SUNDAY);
        let grid = calendar.grid_for_page(index).unwrap();
        let days = grid.as_days().unwrap();
        assert_eq!(days.cells()[0].date(), date(2023, 1, 29));
        assert_eq!(days.len(), 42);
    }

    #[test]
    fn year_pages_list_months() {
        let config = CalendarConfig::default()
            .granularity(Granularity::Year)
            .initial_date(date(2023, 6, 1))
            .page_window(10);
        let calendar = CalendarState::new(config).unwrap();
        assert_eq!(calendar.page_count(), 21);
        let grid = calendar.grid_for_page(11).unwrap();
        let months = grid.as_months().unwrap();
        assert_eq!(months.len(), 12);
        assert_eq!(months[0], ym(2024, 1));
    }

    #[test]
    fn clicks_respect_the_selectability_gate() {
        let config = CalendarConfig::default()
            .initial_date(date(2023, 6, 1))
            .min_date(date(2023, 6, 5))
            .disabled_dates(vec![date(2023, 6, 10)]);
        let (mut calendar, recorder) = setup(config);
        recorder.take();

        assert!(!calendar.click(date(2023, 6, 1)));
        assert!(!calendar.long_click(date(2023, 6, 10)));
        assert!(calendar.click(date(2023, 6, 11)));
        assert!(calendar.long_click(date(2023, 6, 12)));
        assert_eq!(
            recorder.take(),
            vec![
                Event::Select(date(2023, 6, 11)),
                Event::LongClick(date(2023, 6, 12)),
            ]
        );

        calendar.set_enable_click_on_disabled_dates(true);
        assert!(calendar.click(date(2023, 6, 10)));
        assert_eq!(recorder.take(), vec![Event::Select(date(2023, 6, 10))]);
    }

    #[test]
    fn swipe_lock_is_readable_by_the_host() {
        let mut calendar = CalendarState::new(
            CalendarConfig::default()
                .initial_date(date(2023, 6, 1))
                .enable_swipe(false),
        )
        .unwrap();
        assert!(!calendar.swipe_enabled());
        assert_eq!(calendar.next_page(), Some(1001));
        calendar.set_enable_swipe(true);
        assert!(calendar.swipe_enabled());
        assert!(calendar.config().enable_swipe);
    }

    #[test]
    fn selection_edits_go_through_the_facade() {
        let mut calendar =
            CalendarState::new(CalendarConfig::default().initial_date(date(2023, 6, 1))).unwrap();
        assert!(calendar.select_range(date(2023, 6, 2), date(2023, 6, 4)));
        calendar.deselect(date(2023, 6, 3));
        calendar.select_single(date(2023, 6, 9));
        assert_eq!(
            calendar.selection().selected_dates(),
            &[date(2023, 6, 2), date(2023, 6, 4), date(2023, 6, 9)]
        );
        calendar.clear_selected_dates();
        assert!(calendar.selection().selected_dates().is_empty());

        calendar.disable_date(date(2023, 6, 10));
        assert!(!calendar.click(date(2023, 6, 10)));
        calendar.enable_date(date(2023, 6, 10));
        assert!(calendar.click(date(2023, 6, 10)));
        calendar
            .set_disabled_dates_from_strings(["2023-06-11", "2023-06-12"], None)
            .unwrap();
        assert_eq!(calendar.selection().disabled_count(), 2);
        assert!(
            calendar
                .set_disabled_dates_from_strings(["not a date"], None)
                .is_err()
        );
        assert_eq!(calendar.selection().disabled_count(), 2);
        calendar.clear_disabled_dates();
        assert_eq!(calendar.selection().disabled_count(), 0);
    }

    #[test]
    fn bound_setters_keep_paging_and_selection_in_sync() {
        let (mut calendar, _) = setup(CalendarConfig::default().initial_date(date(2023, 6, 1)));
        assert_eq!(calendar.set_min_date(Some(date(2023, 1, 1))), Ok(1000));
        assert_eq!(calendar.page_count(), 2001);
        assert_eq!(calendar.config().min_date, Some(date(2023, 1, 1)));
        assert_eq!(calendar.selection().min_date(), Some(date(2023, 1, 1)));
        assert!(!calendar.click(date(2022, 12, 31)));

        assert_eq!(calendar.set_max_date(Some(date(2023, 3, 31))), Ok(2));
        assert_eq!(calendar.page_count(), 3);
        assert_eq!(calendar.current_unit(), ym(2023, 3));
        assert_eq!(calendar.config().max_date, Some(date(2023, 3, 31)));
        assert_eq!(calendar.selection().max_date(), Some(date(2023, 3, 31)));
        assert_eq!(calendar.move_to(date(2023, 4, 1)), MoveOutcome::Blocked);

        assert!(calendar.set_min_date(Some(date(2023, 4, 1))).is_err());
        assert_eq!(calendar.page_count(), 3);
        assert_eq!(calendar.config().min_date, Some(date(2023, 1, 1)));
        assert_eq!(calendar.selection().min_date(), Some(date(2023, 1, 1)));

        assert_eq!(calendar.set_max_date(None), Ok(1000));
        assert_eq!(calendar.page_count(), 2001);
        assert_eq!(calendar.selection().max_date(), None);
    }

    #[test]
    fn title_click_reports_the_current_unit() {
        let (mut calendar, recorder) =
            setup(CalendarConfig::default().initial_date(date(2023, 6, 1)));
        calendar.on_page_selected(1001).unwrap();
        recorder.take();
        calendar.title_clicked();
        assert_eq!(recorder.take(), vec![Event::Title(ym(2023, 7))]);
    }

    #[test]
    fn initial_selection_comes_from_the_config() {
        let config = CalendarConfig::default()
            .initial_date(date(2023, 6, 1))
            .selected_dates(vec![date(2023, 6, 2), date(2023, 6, 3)]);
        let calendar = CalendarState::new(config).unwrap();
        assert!(calendar.selection().is_selected(date(2023, 6, 3)));
        assert!(!calendar.selection().is_selected(date(2023, 6, 4)));
    }

    #[test]
    fn rebuilding_bounds_keeps_an_in_range_unit() {
        let (mut calendar, recorder) =
            setup(CalendarConfig::default().initial_date(date(2023, 6, 1)));
        recorder.take();
        let index = calendar
            .rebuild_bounds(Some(date(2023, 1, 1)), Some(date(2023, 12, 31)))
            .unwrap();
        assert_eq!(index, 5);
        assert_eq!(calendar.page_count(), 12);
        assert_eq!(calendar.current_unit(), ym(2023, 6));
        assert_eq!(recorder.take(), vec![Event::UnitChanged(ym(2023, 6))]);
        assert_eq!(calendar.selection().min_date(), Some(date(2023, 1, 1)));
    }

    #[test]
    fn rebuilding_bounds_clamps_an_out_of_range_unit() {
        let (mut calendar, _) = setup(CalendarConfig::default().initial_date(date(2023, 6, 1)));
        let index = calendar
            .rebuild_bounds(Some(date(2022, 1, 1)), Some(date(2022, 3, 31)))
            .unwrap();
        assert_eq!(index, 2);
        assert_eq!(calendar.current_unit(), ym(2022, 3));
    }

    #[test]
    fn rebuilding_with_inverted_bounds_changes_nothing() {
        let (mut calendar, _) = setup(CalendarConfig::default().initial_date(date(2023, 6, 1)));
        assert!(
            calendar
                .rebuild_bounds(Some(date(2023, 2, 1)), Some(date(2023, 1, 1)))
                .is_err()
        );
        assert_eq!(calendar.page_count(), 2001);
        assert_eq!(calendar.config().min_date, None);
        assert_eq!(calendar.selection().min_date(), None);
    }

    #[test]
    fn removing_bounds_returns_to_an_unbounded_window() {
        let config = CalendarConfig::default()
            .initial_date(date(2020, 2, 1))
            .min_date(date(2020, 1, 1))
            .max_date(date(2020, 3, 31));
        let mut calendar = CalendarState::new(config).unwrap();
        let index = calendar.rebuild_bounds(None, None).unwrap();
        assert_eq!(index, 1000);
        assert_eq!(calendar.current_unit(), ym(2020, 2));
        assert_eq!(
            calendar.move_to(date(2030, 1, 1)),
            MoveOutcome::Scroll(ScrollRequest {
                from: 1118,
                to: 1119,
                direction: SwipeDirection::Forward,
            })
        );
    }
}
