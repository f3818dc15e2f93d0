//! caldroid is the headless core of a paged calendar widget.
//!
//! It answers the questions a calendar UI asks, and nothing else: which
//! month or year lives on a given pager page, which day cells that page shows,
//! which dates can be picked, and what to tell the host when the page changes.
//! Rendering, input handling and localization belong to the host toolkit.
//!
//! # Paging
//!
//! A [`PageIndexMapper`] turns linear pager indices into [`CalendarUnit`]s.
//! With both date bounds set it exposes one page per unit in range; otherwise
//! it exposes a large window around an anchor unit so swiping feels endless.
//!
//! # Grids
//!
//! [`CalendarGridBuilder`] lays out a month as whole weeks starting on the
//! configured weekday, with overflow days from the neighbouring months and
//! optional padding to six rows. A year page lists its twelve months.
//!
//! # Selection
//!
//! [`DateSelectionModel`] tracks selected and disabled dates plus the
//! min/max bounds. Its answers are advisory; the host decides whether a click
//! on a non-selectable date still goes through.
//!
//! # Putting it together
//!
//! ```
//! use caldroid::{CalendarConfig, CalendarState, MoveOutcome};
//! use chrono::NaiveDate;
//!
//! let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
//! let config = CalendarConfig::default()
//!     .initial_date(date(2024, 5, 20))
//!     .min_date(date(2024, 1, 1))
//!     .max_date(date(2024, 12, 31));
//! let mut calendar = CalendarState::new(config).unwrap();
//! assert_eq!(calendar.page_count(), 12);
//!
//! // Jump to March: the host jumps to `from`, then animates to `to`.
//! let MoveOutcome::Scroll(request) = calendar.move_to(date(2024, 3, 8)) else {
//!     unreachable!();
//! };
//! calendar.on_page_selected(request.to).unwrap();
//! assert_eq!(calendar.current_unit().month(), Some(3));
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod calendar;
pub mod config;
pub mod coordinator;
pub mod date_utils;
pub mod decoration;
pub mod error;
pub mod grid;
pub mod listener;
pub mod mapper;
pub mod selection;
pub mod unit;
pub mod weekday;

pub use crate::{
    calendar::CalendarState,
    config::CalendarConfig,
    coordinator::{
        MoveOutcome, PageLifecycleCoordinator, ScrollRequest, SwipeDirection, WindowChange,
        page_tag,
    },
    date_utils::{DEFAULT_DATE_FORMAT, format_date, parse_date, parse_dates, today},
    decoration::DecorationTable,
    error::{CalendarError, ConfigError, RangeError},
    grid::{
        CalendarGridBuilder, DayCell, GridCells, MonthGrid, YearListGrid, build_grid,
        build_year_list,
    },
    listener::{CalendarListener, NoopListener},
    mapper::{MapperMode, PageIndexMapper},
    selection::{CellState, DateSelectionModel},
    unit::{CalendarUnit, Granularity},
    weekday::StartDayOfWeek,
};
