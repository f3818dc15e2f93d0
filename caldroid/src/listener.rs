//! Host callback hooks.
//!
//! Every hook has an empty default body, so a host implements only the
//! notifications it cares about:
//!
//! ```
//! use caldroid::{CalendarListener, CalendarUnit};
//!
//! struct TitleRefresher;
//!
//! impl CalendarListener for TitleRefresher {
//!     fn on_unit_changed(&self, unit: CalendarUnit) {
//!         println!("now showing {unit}");
//!     }
//! }
//! ```
use chrono::NaiveDate;

use crate::unit::CalendarUnit;

/// Notifications raised by the calendar core.
///
/// Hooks take `&self`; implementations that record state use interior
/// mutability.
pub trait CalendarListener: Send + Sync {
    /// The displayed unit changed. Raised on every page transition, even when
    /// the unit is the same as before.
    fn on_unit_changed(&self, unit: CalendarUnit) {
        let _ = unit;
    }

    /// A day cell was clicked and the click passed the selectability gate.
    fn on_select_date(&self, date: NaiveDate) {
        let _ = date;
    }

    /// A day cell was long-pressed and the press passed the selectability gate.
    fn on_long_click_date(&self, date: NaiveDate) {
        let _ = date;
    }

    /// The title above the grid was clicked.
    fn on_title_clicked(&self, unit: CalendarUnit) {
        let _ = unit;
    }

    /// The calendar finished its initial setup.
    fn on_view_created(&self) {}
}

/// A listener that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListener;

impl CalendarListener for NoopListener {}
