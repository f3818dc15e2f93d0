//! Date parsing and formatting helpers.
//!
//! Dates cross the host boundary as strings (argument bundles, saved state).
//! The default format is ISO `yyyy-MM-dd`; hosts may pass any chrono format.
use chrono::{
    Local, NaiveDate,
    format::{Item, StrftimeItems},
};

use crate::error::ConfigError;

/// Default chrono format for date strings.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a date using `format`, or [`DEFAULT_DATE_FORMAT`] when absent.
///
/// # Errors
///
/// Returns [`ConfigError::MalformedDate`] when the input does not match.
pub fn parse_date(input: &str, format: Option<&str>) -> Result<NaiveDate, ConfigError> {
    let format = format.unwrap_or(DEFAULT_DATE_FORMAT);
    NaiveDate::parse_from_str(input.trim(), format).map_err(|source| ConfigError::MalformedDate {
        input: input.to_owned(),
        format: format.to_owned(),
        source,
    })
}

/// Parses every input, failing on the first malformed entry.
///
/// # Errors
///
/// Returns the error of the first entry that does not parse; nothing is
/// returned for the entries that did.
pub fn parse_dates<I, S>(inputs: I, format: Option<&str>) -> Result<Vec<NaiveDate>, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    inputs
        .into_iter()
        .map(|input| parse_date(input.as_ref(), format))
        .collect()
}

/// Formats a date using `format`, or [`DEFAULT_DATE_FORMAT`] when absent.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidFormat`] for format strings chrono cannot
/// render.
pub fn format_date(date: NaiveDate, format: Option<&str>) -> Result<String, ConfigError> {
    let format = format.unwrap_or(DEFAULT_DATE_FORMAT);
    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(ConfigError::InvalidFormat(format.to_owned()));
    }
    Ok(date.format_with_items(items.into_iter()).to_string())
}

/// Returns the current local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Iterates every date from `from` to `to`, both inclusive.
///
/// Yields nothing when `from` is after `to`.
pub fn days_inclusive(from: NaiveDate, to: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    from.iter_days().take_while(move |day| *day <= to)
}
