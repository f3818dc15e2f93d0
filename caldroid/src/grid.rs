//! Grid construction for calendar pages.
//!
//! ## Usage
//!
//! A host page renderer asks for the cells of the unit it is about to show.
//! Month units produce whole weeks of [`DayCell`]s, padded with overflow days
//! from the neighbouring months. Year units produce their twelve months.
//!
//! Building a grid is a pure function of its inputs; nothing is cached.
use chrono::{Datelike, Days, NaiveDate};

use crate::{
    error::RangeError,
    unit::{CalendarUnit, Granularity},
    weekday::StartDayOfWeek,
};

/// Cells per week row.
pub const DAYS_PER_WEEK: usize = 7;
/// Rows of a six-week month page.
pub const SIX_WEEK_ROWS: usize = 6;
/// Columns of a year-list page.
pub const YEAR_LIST_COLUMNS: usize = 4;

/// One entry of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayCell {
    date: NaiveDate,
    belongs_to_current_unit: bool,
}

impl DayCell {
    /// Returns the date of the cell.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns false for overflow days drawn from an adjacent month.
    pub fn belongs_to_current_unit(&self) -> bool {
        self.belongs_to_current_unit
    }
}

/// Day cells of one month page, in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    unit: CalendarUnit,
    cells: Vec<DayCell>,
}

impl MonthGrid {
    /// Returns the month this grid was built for.
    pub fn unit(&self) -> CalendarUnit {
        self.unit
    }

    /// Returns the cells.
    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// Consumes the grid and returns its cells.
    pub fn into_cells(self) -> Vec<DayCell> {
        self.cells
    }

    /// Returns the number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true when the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the number of week rows in the grid.
    pub fn row_count(&self) -> usize {
        self.cells.len() / DAYS_PER_WEEK
    }

    /// Number of rows the pager should reserve for this page: six in
    /// six-week mode, the grid's own row count otherwise.
    pub fn displayed_rows(&self, six_weeks_in_calendar: bool) -> usize {
        if six_weeks_in_calendar {
            SIX_WEEK_ROWS
        } else {
            self.row_count()
        }
    }

    /// Iterates the grid one week at a time.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }
}

/// Cells of a year-picker page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearListGrid {
    years: Vec<CalendarUnit>,
}

impl YearListGrid {
    /// Returns the year units in display order.
    pub fn years(&self) -> &[CalendarUnit] {
        &self.years
    }

    /// Returns the number of rows at [`YEAR_LIST_COLUMNS`] per row.
    pub fn row_count(&self) -> usize {
        if self.years.is_empty() {
            0
        } else {
            (self.years.len() - 1) / YEAR_LIST_COLUMNS + 1
        }
    }
}

/// Cells of a page, shaped by the unit's granularity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridCells {
    /// Day cells of a month page.
    Days(MonthGrid),
    /// The twelve months of a year page.
    Months(Vec<CalendarUnit>),
}

impl GridCells {
    /// Returns the number of cells.
    pub fn len(&self) -> usize {
        match self {
            GridCells::Days(grid) => grid.len(),
            GridCells::Months(months) => months.len(),
        }
    }

    /// Returns true when there are no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the month grid for month pages.
    pub fn as_days(&self) -> Option<&MonthGrid> {
        match self {
            GridCells::Days(grid) => Some(grid),
            GridCells::Months(_) => None,
        }
    }

    /// Returns the months for year pages.
    pub fn as_months(&self) -> Option<&[CalendarUnit]> {
        match self {
            GridCells::Days(_) => None,
            GridCells::Months(months) => Some(months),
        }
    }
}

/// Builds page grids for a fixed layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalendarGridBuilder {
    start_day_of_week: StartDayOfWeek,
    force_six_rows: bool,
}

impl CalendarGridBuilder {
    /// Creates a builder.
    pub fn new(start_day_of_week: StartDayOfWeek, force_six_rows: bool) -> Self {
        Self {
            start_day_of_week,
            force_six_rows,
        }
    }

    /// Returns the first-column weekday.
    pub fn start_day_of_week(&self) -> StartDayOfWeek {
        self.start_day_of_week
    }

    /// Returns whether month grids are padded to six rows.
    pub fn force_six_rows(&self) -> bool {
        self.force_six_rows
    }

    /// Builds the cells for `unit`, dispatching on its granularity.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Overflow`] when the padded grid would leave the
    /// representable date range.
    pub fn build(&self, unit: CalendarUnit) -> Result<GridCells, RangeError> {
        match unit.granularity() {
            Granularity::Month => self.build_month(unit).map(GridCells::Days),
            Granularity::Year => Ok(GridCells::Months(unit.months_of_year().to_vec())),
        }
    }

    /// Builds the day cells of a month unit.
    ///
    /// A year unit is treated as its January.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Overflow`] when the padded grid would leave the
    /// representable date range.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn build_month(&self, unit: CalendarUnit) -> Result<MonthGrid, RangeError> {
        let first = unit.first_day();
        let last = match unit.granularity() {
            Granularity::Month => unit.last_day(),
            Granularity::Year => unit.months_of_year()[0].last_day(),
        };
        let month = CalendarUnit::of(first, Granularity::Month);

        let start = self.start_day_of_week.weekday();
        let end = self.start_day_of_week.last_weekday();
        let leading =
            (first.weekday().num_days_from_sunday() + 7 - start.num_days_from_sunday()) % 7;
        let trailing = (end.num_days_from_sunday() + 7 - last.weekday().num_days_from_sunday()) % 7;

        let grid_start = first
            .checked_sub_days(Days::new(u64::from(leading)))
            .ok_or(RangeError::Overflow)?;
        let natural = (last - first).num_days() as usize + 1 + leading as usize + trailing as usize;
        let len = if self.force_six_rows {
            natural.max(SIX_WEEK_ROWS * DAYS_PER_WEEK)
        } else {
            natural
        };
        grid_start
            .checked_add_days(Days::new(len as u64 - 1))
            .ok_or(RangeError::Overflow)?;

        let cells = grid_start
            .iter_days()
            .take(len)
            .map(|date| DayCell {
                date,
                belongs_to_current_unit: month.contains(date),
            })
            .collect();

        Ok(MonthGrid { unit: month, cells })
    }
}

/// Builds the grid for `unit` with the given layout.
///
/// # Errors
///
/// See [`CalendarGridBuilder::build`].
pub fn build_grid(
    unit: CalendarUnit,
    start_day_of_week: StartDayOfWeek,
    force_six_rows: bool,
) -> Result<GridCells, RangeError> {
    CalendarGridBuilder::new(start_day_of_week, force_six_rows).build(unit)
}

/// Lists `count` consecutive year units starting at `first_year`.
///
/// # Errors
///
/// Returns [`RangeError::Overflow`] when a year is not representable.
pub fn build_year_list(first_year: i32, count: usize) -> Result<YearListGrid, RangeError> {
    let first = CalendarUnit::new_year(first_year).ok_or(RangeError::Overflow)?;
    let years = (0..count as i64)
        .map(|step| first.checked_add(step).ok_or(RangeError::Overflow))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(YearListGrid { years })
}
