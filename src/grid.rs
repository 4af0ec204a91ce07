//! Grid geometry: 90 year-rows of 52 week cells, and the mapping from a cell
//! to the calendar days it covers.
//!
//! Each row starts on an anniversary of the birth date. Columns 0-50 are
//! exactly seven days long; column 51 runs up to the day before the next
//! anniversary, absorbing the one or two days a real year has beyond 364.

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, DAYS_PER_WEEK, TOTAL_WEEKS, TOTAL_YEARS, WEEKS_PER_ROW, WeekSpan, prelude::*};

/// Linear position of a cell in the grid, `0..TOTAL_WEEKS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{_0}")]
#[serde(try_from = "u16", into = "u16")]
pub struct WeekIndex(u16);

/// Zero-based row and column of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridPosition {
    pub row:    u16,
    pub column: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("Week index {0} is outside the grid (0-{max})", max = TOTAL_WEEKS - 1)]
    IndexOutOfRange(u16),

    #[error("Grid position (row {row}, column {column}) is outside the {rows}x{columns} grid", rows = TOTAL_YEARS, columns = WEEKS_PER_ROW)]
    PositionOutOfRange { row: u16, column: u16 },
}

impl WeekIndex {
    pub const FIRST: Self = Self(0);
    pub const LAST: Self = Self(TOTAL_WEEKS - 1);

    /// # Errors
    /// Returns `GridError::IndexOutOfRange` if `index >= TOTAL_WEEKS`.
    pub const fn new(index: u16) -> Result<Self, GridError> {
        if index < TOTAL_WEEKS {
            Ok(Self(index))
        } else {
            Err(GridError::IndexOutOfRange(index))
        }
    }

    /// # Errors
    /// Returns `GridError::PositionOutOfRange` if either coordinate is off the grid.
    pub const fn from_position(row: u16, column: u16) -> Result<Self, GridError> {
        if row < TOTAL_YEARS && column < WEEKS_PER_ROW {
            Ok(Self(row * WEEKS_PER_ROW + column))
        } else {
            Err(GridError::PositionOutOfRange { row, column })
        }
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }

    pub const fn row(self) -> u16 {
        self.0 / WEEKS_PER_ROW
    }

    pub const fn column(self) -> u16 {
        self.0 % WEEKS_PER_ROW
    }

    pub const fn position(self) -> GridPosition {
        GridPosition {
            row:    self.row(),
            column: self.column(),
        }
    }

    /// The following cell, or `None` after the last one.
    pub const fn succ(self) -> Option<Self> {
        if self.0 + 1 < TOTAL_WEEKS {
            Some(Self(self.0 + 1))
        } else {
            None
        }
    }

    /// Every cell of the grid in order.
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..TOTAL_WEEKS).map(Self)
    }
}

impl TryFrom<u16> for WeekIndex {
    type Error = GridError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WeekIndex> for u16 {
    fn from(index: WeekIndex) -> Self {
        index.0
    }
}

impl GridPosition {
    /// One-based year of life shown to the user.
    pub const fn year(self) -> u16 {
        self.row + 1
    }

    /// One-based week within the year shown to the user.
    pub const fn week(self) -> u16 {
        self.column + 1
    }

    pub const fn is_last_column(self) -> bool {
        self.column == WEEKS_PER_ROW - 1
    }
}

impl From<WeekIndex> for GridPosition {
    fn from(index: WeekIndex) -> Self {
        index.position()
    }
}

/// The date on which row `year_row` begins: the birth date moved forward by
/// whole calendar years (not by multiples of 364 days).
pub const fn anniversary_of(birth: CalendarDate, year_row: u16) -> CalendarDate {
    birth.add_years(year_row as i32)
}

/// The inclusive range of days covered by `week`.
pub fn span_of(birth: CalendarDate, week: WeekIndex) -> WeekSpan {
    let GridPosition { row, column } = week.position();
    let row_start = anniversary_of(birth, row);
    let start = row_start.add_days(i32::from(column) * DAYS_PER_WEEK);
    let end = if week.position().is_last_column() {
        anniversary_of(birth, row + 1).pred()
    } else {
        start.add_days(DAYS_PER_WEEK - 1)
    };
    WeekSpan::from_ordered(start, end)
}
