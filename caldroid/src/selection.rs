//! Selected dates, disabled dates and min/max bounds.
//!
//! ## Usage
//!
//! The host owns one [`DateSelectionModel`] per calendar, mutates it in
//! response to taps or configuration, and queries it per rendered cell. The
//! model never triggers a redraw; the host decides when to re-query.
//!
//! Selectability is advisory. A host configured to allow clicks on disabled
//! dates may still act on them.
use chrono::NaiveDate;
use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use crate::{
    date_utils::{days_inclusive, parse_dates},
    error::ConfigError,
    grid::DayCell,
    unit::CalendarUnit,
};

/// Render state of one day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellState {
    /// The cell shows today's date.
    pub today: bool,
    /// The date is selected.
    pub selected: bool,
    /// The date is disabled or outside the min/max bounds.
    pub disabled: bool,
    /// The cell is an overflow day from an adjacent month.
    pub out_of_unit: bool,
}

/// Selection and validity state for a calendar.
#[derive(Debug, Clone, Default)]
pub struct DateSelectionModel {
    selected: Vec<NaiveDate>,
    selected_lookup: FxHashSet<NaiveDate>,
    disabled: FxHashSet<NaiveDate>,
    min_date: Option<NaiveDate>,
    max_date: Option<NaiveDate>,
}

impl DateSelectionModel {
    /// Creates an empty model with no bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a model with the given bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDateBounds`] when `min > max`.
    pub fn with_bounds(
        min_date: Option<NaiveDate>,
        max_date: Option<NaiveDate>,
    ) -> Result<Self, ConfigError> {
        let mut model = Self::new();
        model.set_bounds(min_date, max_date)?;
        Ok(model)
    }

    /// Returns false for disabled dates and dates outside the bounds.
    pub fn is_selectable(&self, date: NaiveDate) -> bool {
        !self.disabled.contains(&date) && self.is_within_bounds(date)
    }

    /// Returns true when `date` is inside the min/max bounds.
    pub fn is_within_bounds(&self, date: NaiveDate) -> bool {
        self.min_date.is_none_or(|min| date >= min) && self.max_date.is_none_or(|max| date <= max)
    }

    /// Returns true when any day of `unit` lies inside the bounds.
    ///
    /// Disabled dates are not considered at unit precision.
    pub fn is_unit_selectable(&self, unit: CalendarUnit) -> bool {
        self.min_date.is_none_or(|min| unit.last_day() >= min)
            && self.max_date.is_none_or(|max| unit.first_day() <= max)
    }

    /// Returns whether a click on `date` should reach the listener.
    pub fn should_dispatch_click(
        &self,
        date: NaiveDate,
        enable_click_on_disabled_dates: bool,
    ) -> bool {
        enable_click_on_disabled_dates || self.is_selectable(date)
    }

    /// Returns the render state of `cell`.
    pub fn cell_state(&self, cell: &DayCell, today: NaiveDate) -> CellState {
        let date = cell.date();
        CellState {
            today: date == today,
            selected: self.is_selected(date),
            disabled: !self.is_selectable(date),
            out_of_unit: !cell.belongs_to_current_unit(),
        }
    }

    /// Returns the selected dates in selection order.
    pub fn selected_dates(&self) -> &[NaiveDate] {
        &self.selected
    }

    /// Returns true when `date` is selected.
    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.selected_lookup.contains(&date)
    }

    /// Replaces the selection with every date from `from` to `to` inclusive.
    ///
    /// Ignored when either end is absent or `from > to`; returns whether the
    /// selection was replaced.
    pub fn select_range(
        &mut self,
        from: impl Into<Option<NaiveDate>>,
        to: impl Into<Option<NaiveDate>>,
    ) -> bool {
        let (from, to): (Option<NaiveDate>, Option<NaiveDate>) = (from.into(), to.into());
        let (Some(from), Some(to)) = (from, to) else {
            return false;
        };
        if from > to {
            debug!(%from, %to, "ignoring reversed selection range");
            return false;
        }
        self.clear_selected_dates();
        for day in days_inclusive(from, to) {
            self.push_selected(day);
        }
        true
    }

    /// Adds `date` to the selection. Absent dates and duplicates are ignored.
    pub fn select_single(&mut self, date: impl Into<Option<NaiveDate>>) {
        if let Some(date) = date.into() {
            self.push_selected(date);
        }
    }

    /// Removes `date` from the selection if present.
    pub fn deselect(&mut self, date: impl Into<Option<NaiveDate>>) {
        let Some(date) = date.into() else {
            return;
        };
        if self.selected_lookup.remove(&date) {
            self.selected.retain(|selected| *selected != date);
        }
    }

    /// Replaces the selection, keeping first occurrences in order.
    pub fn set_selected_dates(&mut self, dates: impl IntoIterator<Item = NaiveDate>) {
        self.clear_selected_dates();
        for date in dates {
            self.push_selected(date);
        }
    }

    /// Replaces the selection from date strings.
    ///
    /// # Errors
    ///
    /// Returns the first parse failure; the selection is left untouched.
    pub fn set_selected_dates_from_strings<I, S>(
        &mut self,
        dates: I,
        format: Option<&str>,
    ) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed = parse_dates(dates, format).inspect_err(|err| {
            warn!(%err, "rejecting selected dates");
        })?;
        self.set_selected_dates(parsed);
        Ok(())
    }

    /// Clears the selection.
    pub fn clear_selected_dates(&mut self) {
        self.selected.clear();
        self.selected_lookup.clear();
    }

    /// Returns true when `date` is explicitly disabled.
    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        self.disabled.contains(&date)
    }

    /// Returns the number of disabled dates.
    pub fn disabled_count(&self) -> usize {
        self.disabled.len()
    }

    /// Replaces the disabled dates.
    pub fn set_disabled_dates(&mut self, dates: impl IntoIterator<Item = NaiveDate>) {
        self.disabled = dates.into_iter().collect();
    }

    /// Replaces the disabled dates from date strings.
    ///
    /// # Errors
    ///
    /// Returns the first parse failure; the disabled set is left untouched.
    pub fn set_disabled_dates_from_strings<I, S>(
        &mut self,
        dates: I,
        format: Option<&str>,
    ) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed = parse_dates(dates, format).inspect_err(|err| {
            warn!(%err, "rejecting disabled dates");
        })?;
        self.set_disabled_dates(parsed);
        Ok(())
    }

    /// Clears every disabled date.
    pub fn clear_disabled_dates(&mut self) {
        self.disabled.clear();
    }

    /// Disables a single date. Absent dates are ignored.
    pub fn disable_date(&mut self, date: impl Into<Option<NaiveDate>>) {
        if let Some(date) = date.into() {
            self.disabled.insert(date);
        }
    }

    /// Re-enables a single date. Absent dates are ignored.
    pub fn enable_date(&mut self, date: impl Into<Option<NaiveDate>>) {
        if let Some(date) = date.into() {
            self.disabled.remove(&date);
        }
    }

    /// Returns the minimum selectable date.
    pub fn min_date(&self) -> Option<NaiveDate> {
        self.min_date
    }

    /// Returns the maximum selectable date.
    pub fn max_date(&self) -> Option<NaiveDate> {
        self.max_date
    }

    /// Sets or clears the minimum date.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDateBounds`] when the new minimum would
    /// lie after the current maximum.
    pub fn set_min_date(&mut self, min_date: Option<NaiveDate>) -> Result<(), ConfigError> {
        self.set_bounds(min_date, self.max_date)
    }

    /// Sets or clears the maximum date.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDateBounds`] when the new maximum would
    /// lie before the current minimum.
    pub fn set_max_date(&mut self, max_date: Option<NaiveDate>) -> Result<(), ConfigError> {
        self.set_bounds(self.min_date, max_date)
    }

    /// Sets both bounds at once.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDateBounds`] when `min > max`.
    pub fn set_bounds(
        &mut self,
        min_date: Option<NaiveDate>,
        max_date: Option<NaiveDate>,
    ) -> Result<(), ConfigError> {
        if let (Some(min), Some(max)) = (min_date, max_date)
            && min > max
        {
            warn!(%min, %max, "rejecting inverted date bounds");
            return Err(ConfigError::InvalidDateBounds { min, max });
        }
        self.min_date = min_date;
        self.max_date = max_date;
        Ok(())
    }

    fn push_selected(&mut self, date: NaiveDate) {
        if self.selected_lookup.insert(date) {
            self.selected.push(date);
        }
    }
}
