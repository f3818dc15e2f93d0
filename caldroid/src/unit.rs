//! Calendar units, the addressable granularity of a page.
//!
//! A month picker pages through `(year, month)` units, a year picker through
//! bare years. Units are immutable values; arithmetic produces new units.
use std::{cmp::Ordering, fmt};

use chrono::{Datelike, NaiveDate};

use crate::error::ConfigError;

/// Granularity of a [`CalendarUnit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Granularity {
    /// One page per month.
    #[default]
    Month,
    /// One page per year.
    Year,
}

/// A month-in-year or a bare year.
///
/// Units of one granularity are totally ordered by `(year, month)`. Units of
/// different granularities never interleave: every month unit sorts before
/// every year unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarUnit {
    granularity: Granularity,
    year: i32,
    // Always 1 for year units.
    month: u8,
}

impl CalendarUnit {
    /// Creates a month unit if the values are valid.
    pub fn new_month(year: i32, month: u8) -> Option<Self> {
        if !(1..=12).contains(&month) || !year_in_range(year) {
            return None;
        }
        Some(Self {
            granularity: Granularity::Month,
            year,
            month,
        })
    }

    /// Creates a year unit if the year is representable.
    pub fn new_year(year: i32) -> Option<Self> {
        if !year_in_range(year) {
            return None;
        }
        Some(Self {
            granularity: Granularity::Year,
            year,
            month: 1,
        })
    }

    /// Returns the unit of the given granularity that contains `date`.
    pub fn of(date: NaiveDate, granularity: Granularity) -> Self {
        let month = match granularity {
            Granularity::Month => date.month() as u8,
            Granularity::Year => 1,
        };
        Self {
            granularity,
            year: date.year(),
            month,
        }
    }

    /// Returns the granularity.
    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1-12) for month units.
    pub fn month(&self) -> Option<u8> {
        match self.granularity {
            Granularity::Month => Some(self.month),
            Granularity::Year => None,
        }
    }

    /// Linear position of the unit: `year * 12 + (month - 1)` for months,
    /// `year` for years.
    pub fn epoch(&self) -> i64 {
        match self.granularity {
            Granularity::Month => i64::from(self.year) * 12 + i64::from(self.month) - 1,
            Granularity::Year => i64::from(self.year),
        }
    }

    fn from_epoch(epoch: i64, granularity: Granularity) -> Option<Self> {
        match granularity {
            Granularity::Month => {
                let year = i32::try_from(epoch.div_euclid(12)).ok()?;
                let month = (epoch.rem_euclid(12) + 1) as u8;
                Self::new_month(year, month)
            }
            Granularity::Year => Self::new_year(i32::try_from(epoch).ok()?),
        }
    }

    /// Steps forward or backward by whole units of this unit's granularity.
    pub fn checked_add(&self, steps: i64) -> Option<Self> {
        Self::from_epoch(self.epoch().checked_add(steps)?, self.granularity)
    }

    /// Adds or subtracts months. A year unit is treated as January of its
    /// year and stays a year unit.
    pub fn add_months(&self, months: i64) -> Option<Self> {
        match self.granularity {
            Granularity::Month => self.checked_add(months),
            Granularity::Year => {
                let total = (i64::from(self.year) * 12).checked_add(months)?;
                Self::from_epoch(total.div_euclid(12), Granularity::Year)
            }
        }
    }

    /// Adds or subtracts years.
    pub fn add_years(&self, years: i64) -> Option<Self> {
        match self.granularity {
            Granularity::Month => self.checked_add(years.checked_mul(12)?),
            Granularity::Year => self.checked_add(years),
        }
    }

    /// Returns the following unit.
    pub fn next(&self) -> Option<Self> {
        self.checked_add(1)
    }

    /// Returns the preceding unit.
    pub fn prev(&self) -> Option<Self> {
        self.checked_add(-1)
    }

    /// Signed number of steps from `self` to `other`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::GranularityMismatch`] when the units differ in
    /// granularity.
    pub fn distance_to(&self, other: &CalendarUnit) -> Result<i64, ConfigError> {
        if self.granularity != other.granularity {
            return Err(ConfigError::GranularityMismatch {
                expected: self.granularity,
                found: other.granularity,
            });
        }
        Ok(other.epoch() - self.epoch())
    }

    /// Returns the first day covered by the unit.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, u32::from(self.month), 1).unwrap_or(NaiveDate::MIN)
    }

    /// Returns the last day covered by the unit.
    pub fn last_day(&self) -> NaiveDate {
        let (month, day) = match self.granularity {
            Granularity::Month => (self.month, days_in_month(self.year, self.month)),
            Granularity::Year => (12, 31),
        };
        NaiveDate::from_ymd_opt(self.year, u32::from(month), u32::from(day))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Returns true when `date` falls inside the unit.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self.granularity {
            Granularity::Month => date.year() == self.year && date.month() == u32::from(self.month),
            Granularity::Year => date.year() == self.year,
        }
    }

    /// Returns the twelve month units of this unit's year.
    pub fn months_of_year(&self) -> [CalendarUnit; 12] {
        std::array::from_fn(|index| Self {
            granularity: Granularity::Month,
            year: self.year,
            month: index as u8 + 1,
        })
    }
}

impl Ord for CalendarUnit {
    fn cmp(&self, other: &Self) -> Ordering {
        self.granularity
            .cmp(&other.granularity)
            .then_with(|| self.epoch().cmp(&other.epoch()))
    }
}

impl PartialOrd for CalendarUnit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CalendarUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.granularity {
            Granularity::Month => write!(f, "{:04}-{:02}", self.year, self.month),
            Granularity::Year => write!(f, "{:04}", self.year),
        }
    }
}

fn year_in_range(year: i32) -> bool {
    (NaiveDate::MIN.year()..=NaiveDate::MAX.year()).contains(&year)
}

fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 30,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month: u8) -> CalendarUnit {
        CalendarUnit::new_month(year, month).unwrap()
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn month_out_of_range_is_rejected() {
        assert!(CalendarUnit::new_month(2023, 0).is_none());
        assert!(CalendarUnit::new_month(2023, 13).is_none());
        assert!(CalendarUnit::new_month(2023, 12).is_some());
    }

    #[test]
    fn add_months_rolls_over_years() {
        assert_eq!(ym(2023, 11).add_months(3), Some(ym(2024, 2)));
        assert_eq!(ym(2023, 1).add_months(-1), Some(ym(2022, 12)));
        assert_eq!(ym(2023, 1).add_months(-25), Some(ym(2020, 12)));
        assert_eq!(ym(2023, 6).add_years(-2), Some(ym(2021, 6)));
    }

    #[test]
    fn year_units_step_by_years() {
        let unit = CalendarUnit::new_year(2020).unwrap();
        assert_eq!(unit.next(), CalendarUnit::new_year(2021));
        assert_eq!(unit.add_months(11), Some(unit));
        assert_eq!(unit.add_months(12), CalendarUnit::new_year(2021));
        assert_eq!(unit.add_months(-1), CalendarUnit::new_year(2019));
        assert_eq!(unit.month(), None);
    }

    #[test]
    fn arithmetic_past_representable_years_is_none() {
        let last = CalendarUnit::of(NaiveDate::MAX, Granularity::Month);
        assert!(last.next().is_none());
        assert!(ym(2023, 1).checked_add(i64::MAX).is_none());
    }

    #[test]
    fn ordering_follows_year_then_month() {
        assert!(ym(2022, 12) < ym(2023, 1));
        assert!(ym(2023, 2) > ym(2023, 1));
        assert_eq!(ym(2023, 5).cmp(&ym(2023, 5)), Ordering::Equal);
    }

    #[test]
    fn distance_is_signed_epoch_difference() {
        assert_eq!(ym(2020, 1).distance_to(&ym(2020, 3)), Ok(2));
        assert_eq!(ym(2021, 1).distance_to(&ym(2020, 12)), Ok(-1));
        assert_eq!(ym(2020, 7).distance_to(&ym(2020, 7)), Ok(0));
        let year = CalendarUnit::new_year(2020).unwrap();
        assert!(matches!(
            ym(2020, 1).distance_to(&year),
            Err(ConfigError::GranularityMismatch { .. })
        ));
    }

    #[test]
    fn first_and_last_days_cover_the_unit() {
        assert_eq!(ym(2024, 2).first_day(), date(2024, 2, 1));
        assert_eq!(ym(2024, 2).last_day(), date(2024, 2, 29));
        assert_eq!(ym(2023, 2).last_day(), date(2023, 2, 28));
        assert_eq!(ym(1900, 2).last_day(), date(1900, 2, 28));
        let year = CalendarUnit::new_year(2023).unwrap();
        assert_eq!(year.first_day(), date(2023, 1, 1));
        assert_eq!(year.last_day(), date(2023, 12, 31));
    }

    #[test]
    fn unit_of_date_matches_contains() {
        let day = date(2023, 6, 15);
        let month = CalendarUnit::of(day, Granularity::Month);
        assert_eq!(month, ym(2023, 6));
        assert!(month.contains(day));
        assert!(!month.contains(date(2023, 7, 1)));
        let year = CalendarUnit::of(day, Granularity::Year);
        assert!(year.contains(date(2023, 1, 1)));
        assert!(!year.contains(date(2024, 1, 1)));
    }

    #[test]
    fn months_of_year_lists_january_to_december() {
        let months = CalendarUnit::new_year(2023).unwrap().months_of_year();
        assert_eq!(months[0], ym(2023, 1));
        assert_eq!(months[11], ym(2023, 12));
    }

    #[test]
    fn display_pads_fields() {
        assert_eq!(ym(2023, 2).to_string(), "2023-02");
        assert_eq!(CalendarUnit::new_year(987).unwrap().to_string(), "0987");
    }
}
