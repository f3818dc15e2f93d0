//! Calendar configuration.
//!
//! ## Usage
//!
//! ```
//! use caldroid::{CalendarConfig, Granularity, StartDayOfWeek};
//! use chrono::NaiveDate;
//!
//! let config = CalendarConfig::default()
//!     .granularity(Granularity::Month)
//!     .start_day_of_week(StartDayOfWeek::MONDAY)
//!     .min_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
//!     .max_date(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
//! assert!(config.validate().is_ok());
//! ```
use chrono::NaiveDate;
use derive_setters::Setters;

use crate::{
    date_utils::{parse_date, parse_dates},
    error::ConfigError,
    mapper::PageIndexMapper,
    unit::Granularity,
    weekday::StartDayOfWeek,
};

/// Construction arguments for a [`CalendarState`](crate::CalendarState).
#[derive(Debug, Clone, PartialEq, Eq, Setters)]
pub struct CalendarConfig {
    /// Whether pages show months or years.
    pub granularity: Granularity,
    /// First column of the day grid. Defaults to Sunday.
    #[setters(into)]
    pub start_day_of_week: StartDayOfWeek,
    /// Pad every month grid to six rows. Defaults to true.
    pub six_weeks_in_calendar: bool,
    /// Earliest selectable date, inclusive.
    #[setters(strip_option)]
    pub min_date: Option<NaiveDate>,
    /// Latest selectable date, inclusive.
    #[setters(strip_option)]
    pub max_date: Option<NaiveDate>,
    /// Dispatch clicks on non-selectable dates too. Defaults to false.
    pub enable_click_on_disabled_dates: bool,
    /// Date whose unit is shown first. Defaults to today.
    #[setters(strip_option)]
    pub initial_date: Option<NaiveDate>,
    /// Half-width of the page window when the range is unbounded. At most
    /// [`PageIndexMapper::MAX_OFFSET`].
    pub page_window: usize,
    /// Whether the host should allow swiping between pages. Defaults to true.
    ///
    /// The core never scrolls on its own; the host reads this through
    /// [`CalendarState::swipe_enabled`](crate::CalendarState::swipe_enabled)
    /// and locks its pager when it is false.
    pub enable_swipe: bool,
    /// Dates disabled from the start.
    pub disabled_dates: Vec<NaiveDate>,
    /// Dates selected from the start.
    pub selected_dates: Vec<NaiveDate>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            granularity: Granularity::Month,
            start_day_of_week: StartDayOfWeek::SUNDAY,
            six_weeks_in_calendar: true,
            min_date: None,
            max_date: None,
            enable_click_on_disabled_dates: false,
            initial_date: None,
            page_window: PageIndexMapper::DEFAULT_OFFSET,
            enable_swipe: true,
            disabled_dates: Vec::new(),
            selected_dates: Vec::new(),
        }
    }
}

impl CalendarConfig {
    /// Checks the configuration for contradictions.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDateBounds`] when both bounds are set and
    /// the minimum is after the maximum, and [`ConfigError::InvalidPageWindow`]
    /// when `page_window` is too wide.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_window > PageIndexMapper::MAX_OFFSET {
            return Err(ConfigError::InvalidPageWindow {
                window: self.page_window,
                max: PageIndexMapper::MAX_OFFSET,
            });
        }
        match (self.min_date, self.max_date) {
            (Some(min), Some(max)) if min > max => Err(ConfigError::InvalidDateBounds { min, max }),
            _ => Ok(()),
        }
    }

    /// Sets the date bounds from strings.
    ///
    /// `None` leaves the bound unset. `format` defaults to `%Y-%m-%d`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MalformedDate`] when either string does not
    /// parse; the configuration is not modified.
    pub fn with_date_strings(
        mut self,
        min: Option<&str>,
        max: Option<&str>,
        format: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let min = min.map(|input| parse_date(input, format)).transpose()?;
        let max = max.map(|input| parse_date(input, format)).transpose()?;
        self.min_date = min;
        self.max_date = max;
        Ok(self)
    }

    /// Sets the initially disabled dates from strings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MalformedDate`] for the first entry that does not
    /// parse.
    pub fn with_disabled_date_strings<I, S>(
        mut self,
        inputs: I,
        format: Option<&str>,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.disabled_dates = parse_dates(inputs, format)?;
        Ok(self)
    }

    /// Sets the initially selected dates from strings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MalformedDate`] for the first entry that does not
    /// parse.
    pub fn with_selected_date_strings<I, S>(
        mut self,
        inputs: I,
        format: Option<&str>,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.selected_dates = parse_dates(inputs, format)?;
        Ok(self)
    }
}
