//! Shorthand constructors for tests.

use crate::{CalendarDate, WeekIndex};

pub fn date(year: u16, month: u8, day: u8) -> CalendarDate {
    CalendarDate::from_ymd(year, month, day).expect("test date must be valid")
}

pub fn week(index: u16) -> WeekIndex {
    WeekIndex::new(index).expect("test week index must be on the grid")
}

pub fn cell(row: u16, column: u16) -> WeekIndex {
    WeekIndex::from_position(row, column).expect("test position must be on the grid")
}
