//! Error types shared by the calendar core.
//!
//! Two families are kept apart: [`ConfigError`] for
//! input that is rejected at construction or setter time, and [`RangeError`]
//! for an index or unit outside a mapper's domain. The coordinator treats a
//! range error as a navigation boundary; anything else is a caller bug.
use chrono::NaiveDate;
use thiserror::Error;

use crate::unit::{CalendarUnit, Granularity};

/// Rejected configuration input. The rejecting call leaves state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A lower unit bound lies after the upper unit bound.
    #[error("minimum unit {min} is after maximum unit {max}")]
    InvalidUnitBounds {
        /// Requested lower bound.
        min: CalendarUnit,
        /// Requested upper bound.
        max: CalendarUnit,
    },
    /// A minimum date lies after the maximum date.
    #[error("minimum date {min} is after maximum date {max}")]
    InvalidDateBounds {
        /// Requested minimum date.
        min: NaiveDate,
        /// Requested maximum date.
        max: NaiveDate,
    },
    /// An unbounded page window wider than the mapper supports.
    #[error("page window {window} exceeds the maximum of {max}")]
    InvalidPageWindow {
        /// Requested half-width.
        window: usize,
        /// Largest accepted half-width.
        max: usize,
    },
    /// A unit of the wrong granularity was handed to a mapper or grid.
    #[error("expected a {expected:?} unit, got a {found:?} unit")]
    GranularityMismatch {
        /// Granularity the receiver works with.
        expected: Granularity,
        /// Granularity of the unit that was passed in.
        found: Granularity,
    },
    /// A date string could not be parsed with the given format.
    #[error("malformed date {input:?} for format {format:?}: {source}")]
    MalformedDate {
        /// Raw input.
        input: String,
        /// chrono format string used for parsing.
        format: String,
        /// Underlying parse failure.
        #[source]
        source: chrono::ParseError,
    },
    /// The format string contains an unsupported specifier.
    #[error("unusable date format {0:?}")]
    InvalidFormat(String),
}

/// An index or unit outside the valid domain of a page mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    /// The page index is past the last page.
    #[error("page index {index} is out of range for {item_count} pages")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of pages the mapper exposes.
        item_count: usize,
    },
    /// The unit cannot be addressed by any page.
    #[error("unit {unit} is outside the pageable range")]
    UnitOutOfRange {
        /// Requested unit.
        unit: CalendarUnit,
    },
    /// Calendar arithmetic left the representable date range.
    #[error("calendar arithmetic overflowed")]
    Overflow,
}

/// Any failure raised by the calendar core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// Rejected configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Index or unit outside the pageable range.
    #[error(transparent)]
    Range(#[from] RangeError),
}

impl CalendarError {
    /// Returns true when this error marks a navigation boundary.
    pub fn is_range_error(&self) -> bool {
        matches!(self, CalendarError::Range(_))
    }
}
