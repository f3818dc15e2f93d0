//! Mapping between pager indices and calendar units.
//!
//! ## Usage
//!
//! The host scroller only knows linear page indices. A [`PageIndexMapper`]
//! turns an index into the month or year shown on that page and back.
//!
//! - Unbounded: `2 * offset + 1` pages centred on an anchor unit, which sits
//!   at index `offset`. Swiping can continue in either direction without the
//!   host knowing a boundary; the ends of the window are terminal.
//! - Bounded: exactly one page per unit from `min` to `max`, with `min` at
//!   index 0 and `max` at the last index.
//!
//! Mappers are immutable. Rebuild one when the bounds change.
use chrono::NaiveDate;

use crate::{
    error::{CalendarError, ConfigError, RangeError},
    unit::{CalendarUnit, Granularity},
};

/// Index layout of a [`PageIndexMapper`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapperMode {
    /// A fixed window around an anchor unit.
    Unbounded {
        /// Unit shown at index `offset`.
        anchor: CalendarUnit,
        /// Half-width of the window.
        offset: usize,
    },
    /// One page per unit between two inclusive bounds.
    Bounded {
        /// Unit at index 0.
        min: CalendarUnit,
        /// Unit at the last index.
        max: CalendarUnit,
    },
}

/// Bidirectional page index to unit mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageIndexMapper {
    mode: MapperMode,
    item_count: usize,
}

impl PageIndexMapper {
    /// Default half-width of an unbounded window.
    pub const DEFAULT_OFFSET: usize = 1000;
    /// Largest accepted half-width of an unbounded window.
    pub const MAX_OFFSET: usize = 1_000_000;

    /// Creates an unbounded mapper with `anchor` at index `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPageWindow`] when `offset` exceeds
    /// [`PageIndexMapper::MAX_OFFSET`].
    pub fn unbounded(anchor: CalendarUnit, offset: usize) -> Result<Self, ConfigError> {
        if offset > Self::MAX_OFFSET {
            return Err(ConfigError::InvalidPageWindow {
                window: offset,
                max: Self::MAX_OFFSET,
            });
        }
        Ok(Self {
            mode: MapperMode::Unbounded { anchor, offset },
            item_count: offset * 2 + 1,
        })
    }

    /// Creates a bounded mapper covering `min..=max`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUnitBounds`] when `min > max` and
    /// [`ConfigError::GranularityMismatch`] when the bounds differ in
    /// granularity.
    pub fn bounded(min: CalendarUnit, max: CalendarUnit) -> Result<Self, ConfigError> {
        let span = min.distance_to(&max)?;
        if span < 0 {
            return Err(ConfigError::InvalidUnitBounds { min, max });
        }
        let item_count = usize::try_from(span)
            .ok()
            .and_then(|span| span.checked_add(1))
            .ok_or(ConfigError::InvalidUnitBounds { min, max })?;
        Ok(Self {
            mode: MapperMode::Bounded { min, max },
            item_count,
        })
    }

    /// Picks the mode from optional date bounds: bounded when both are set,
    /// unbounded around `anchor` otherwise.
    ///
    /// # Errors
    ///
    /// See [`PageIndexMapper::bounded`] and [`PageIndexMapper::unbounded`].
    pub fn for_bounds(
        granularity: Granularity,
        anchor: NaiveDate,
        min_date: Option<NaiveDate>,
        max_date: Option<NaiveDate>,
        offset: usize,
    ) -> Result<Self, ConfigError> {
        match (min_date, max_date) {
            (Some(min), Some(max)) => Self::bounded(
                CalendarUnit::of(min, granularity),
                CalendarUnit::of(max, granularity),
            ),
            _ => Self::unbounded(CalendarUnit::of(anchor, granularity), offset),
        }
    }

    /// Returns the index layout.
    pub fn mode(&self) -> MapperMode {
        self.mode
    }

    /// Returns the granularity of the mapped units.
    pub fn granularity(&self) -> Granularity {
        match self.mode {
            MapperMode::Unbounded { anchor, .. } => anchor.granularity(),
            MapperMode::Bounded { max, .. } => max.granularity(),
        }
    }

    /// Returns the number of pages.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Returns true when `index` addresses a page.
    pub fn contains_index(&self, index: usize) -> bool {
        index < self.item_count
    }

    /// Returns the unit shown at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::IndexOutOfRange`] for indices past the last page.
    pub fn index_to_unit(&self, index: usize) -> Result<CalendarUnit, RangeError> {
        if !self.contains_index(index) {
            return Err(RangeError::IndexOutOfRange {
                index,
                item_count: self.item_count,
            });
        }
        let (origin, origin_index) = self.origin();
        let steps = signed(index)?
            .checked_sub(signed(origin_index)?)
            .ok_or(RangeError::Overflow)?;
        origin.checked_add(steps).ok_or(RangeError::Overflow)
    }

    /// Returns the index of the page showing `unit`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `unit` has the wrong granularity and
    /// [`RangeError::UnitOutOfRange`] when no page shows it.
    pub fn unit_to_index(&self, unit: CalendarUnit) -> Result<usize, CalendarError> {
        let (origin, origin_index) = self.origin();
        let steps = origin.distance_to(&unit)?;
        let index = signed(origin_index)?.checked_add(steps);
        index
            .and_then(|index| usize::try_from(index).ok())
            .filter(|index| self.contains_index(*index))
            .ok_or_else(|| RangeError::UnitOutOfRange { unit }.into())
    }

    /// Returns the nearest pageable unit to `unit`.
    ///
    /// Units before the first page map to the first page's unit and units past
    /// the last page to the last page's unit.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::GranularityMismatch`] for units of the wrong
    /// granularity.
    pub fn clamp_unit(&self, unit: CalendarUnit) -> Result<CalendarUnit, CalendarError> {
        match self.unit_to_index(unit) {
            Ok(_) => Ok(unit),
            Err(CalendarError::Range(_)) => {
                let first = self.index_to_unit(0)?;
                if unit < first {
                    Ok(first)
                } else {
                    Ok(self.index_to_unit(self.item_count - 1)?)
                }
            }
            Err(err) => Err(err),
        }
    }

    // Every unit is computed relative to a fixed unit at a fixed index.
    fn origin(&self) -> (CalendarUnit, usize) {
        match self.mode {
            MapperMode::Unbounded { anchor, offset } => (anchor, offset),
            MapperMode::Bounded { max, .. } => (max, self.item_count - 1),
        }
    }
}

fn signed(index: usize) -> Result<i64, RangeError> {
    i64::try_from(index).map_err(|_| RangeError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month: u8) -> CalendarUnit {
        CalendarUnit::new_month(year, month).unwrap()
    }

    #[test]
    fn bounded_mapping_is_exact() {
        let mapper = PageIndexMapper::bounded(ym(2020, 1), ym(2020, 3)).unwrap();
        assert_eq!(mapper.item_count(), 3);
        assert_eq!(mapper.index_to_unit(0), Ok(ym(2020, 1)));
        assert_eq!(mapper.index_to_unit(1), Ok(ym(2020, 2)));
        assert_eq!(mapper.index_to_unit(2), Ok(ym(2020, 3)));
        assert_eq!(mapper.unit_to_index(ym(2020, 1)), Ok(0));
        assert_eq!(mapper.unit_to_index(ym(2020, 3)), Ok(2));
    }

    #[test]
    fn single_unit_bounds_give_one_page() {
        let mapper = PageIndexMapper::bounded(ym(2020, 5), ym(2020, 5)).unwrap();
        assert_eq!(mapper.item_count(), 1);
        assert_eq!(mapper.index_to_unit(0), Ok(ym(2020, 5)));
    }

    #[test]
    fn inverted_bounds_are_a_config_error() {
        assert_eq!(
            PageIndexMapper::bounded(ym(2020, 3), ym(2020, 1)),
            Err(ConfigError::InvalidUnitBounds {
                min: ym(2020, 3),
                max: ym(2020, 1),
            })
        );
        let year = CalendarUnit::new_year(2020).unwrap();
        assert!(matches!(
            PageIndexMapper::bounded(ym(2020, 1), year),
            Err(ConfigError::GranularityMismatch { .. })
        ));
    }

    #[test]
    fn out_of_range_requests_are_range_errors() {
        let mapper = PageIndexMapper::bounded(ym(2020, 1), ym(2020, 3)).unwrap();
        assert_eq!(
            mapper.index_to_unit(3),
            Err(RangeError::IndexOutOfRange {
                index: 3,
                item_count: 3,
            })
        );
        let err = mapper.unit_to_index(ym(2020, 4)).unwrap_err();
        assert!(err.is_range_error());
        let err = mapper.unit_to_index(ym(2019, 12)).unwrap_err();
        assert!(err.is_range_error());
        let err = mapper
            .unit_to_index(CalendarUnit::new_year(2020).unwrap())
            .unwrap_err();
        assert!(!err.is_range_error());
    }

    #[test]
    fn unbounded_window_is_centred_on_anchor() {
        let mapper = PageIndexMapper::unbounded(ym(2023, 6), 10).unwrap();
        assert_eq!(mapper.item_count(), 21);
        assert_eq!(mapper.index_to_unit(10), Ok(ym(2023, 6)));
        assert_eq!(mapper.index_to_unit(0), Ok(ym(2022, 8)));
        assert_eq!(mapper.index_to_unit(20), Ok(ym(2024, 4)));
        assert_eq!(mapper.unit_to_index(ym(2023, 7)), Ok(11));
        assert!(mapper.unit_to_index(ym(2024, 5)).unwrap_err().is_range_error());
    }

    #[test]
    fn round_trip_over_the_whole_domain() {
        let mappers = [
            PageIndexMapper::unbounded(ym(2023, 6), PageIndexMapper::DEFAULT_OFFSET).unwrap(),
            PageIndexMapper::bounded(ym(1999, 11), ym(2031, 2)).unwrap(),
            PageIndexMapper::unbounded(CalendarUnit::new_year(2023).unwrap(), 50).unwrap(),
        ];
        for mapper in mappers {
            let mut previous = None;
            for index in 0..mapper.item_count() {
                let unit = mapper.index_to_unit(index).unwrap();
                assert_eq!(mapper.unit_to_index(unit), Ok(index));
                if let Some(previous) = previous {
                    assert!(previous < unit);
                }
                previous = Some(unit);
            }
        }
    }

    #[test]
    fn bounds_pick_the_mode() {
        let day = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        let mapper = PageIndexMapper::for_bounds(
            Granularity::Month,
            day(2023, 6, 15),
            Some(day(2023, 1, 20)),
            Some(day(2023, 4, 2)),
            1000,
        )
        .unwrap();
        assert_eq!(mapper.item_count(), 4);

        let mapper = PageIndexMapper::for_bounds(
            Granularity::Year,
            day(2023, 6, 15),
            Some(day(2023, 1, 20)),
            None,
            5,
        )
        .unwrap();
        assert_eq!(mapper.item_count(), 11);
        assert_eq!(mapper.index_to_unit(5), Ok(CalendarUnit::new_year(2023).unwrap()));
        assert_eq!(mapper.granularity(), Granularity::Year);
    }

    #[test]
    fn oversized_windows_are_rejected() {
        assert_eq!(
            PageIndexMapper::unbounded(ym(2023, 6), usize::MAX),
            Err(ConfigError::InvalidPageWindow {
                window: usize::MAX,
                max: PageIndexMapper::MAX_OFFSET,
            })
        );
        let widest =
            PageIndexMapper::unbounded(ym(2023, 6), PageIndexMapper::MAX_OFFSET).unwrap();
        assert_eq!(widest.unit_to_index(ym(2023, 6)), Ok(PageIndexMapper::MAX_OFFSET));
        assert_eq!(widest.index_to_unit(PageIndexMapper::MAX_OFFSET), Ok(ym(2023, 6)));
        assert_eq!(
            widest.index_to_unit(i64::MAX as usize),
            Err(RangeError::IndexOutOfRange {
                index: i64::MAX as usize,
                item_count: widest.item_count(),
            })
        );
    }

    #[test]
    fn window_edges_past_the_date_range_overflow() {
        let last = CalendarUnit::of(NaiveDate::MAX, Granularity::Month);
        let mapper = PageIndexMapper::unbounded(last, 3).unwrap();
        assert_eq!(mapper.index_to_unit(3), Ok(last));
        assert_eq!(mapper.index_to_unit(4), Err(RangeError::Overflow));
    }

    #[test]
    fn clamp_unit_snaps_to_the_nearest_end() {
        let mapper = PageIndexMapper::bounded(ym(2020, 1), ym(2020, 3)).unwrap();
        assert_eq!(mapper.clamp_unit(ym(2019, 5)), Ok(ym(2020, 1)));
        assert_eq!(mapper.clamp_unit(ym(2020, 2)), Ok(ym(2020, 2)));
        assert_eq!(mapper.clamp_unit(ym(2021, 5)), Ok(ym(2020, 3)));
    }
}
