use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_GREGORIAN_CYCLE, EPOCH_SHIFT_DAYS, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR,
};
use crate::ParseError;
use std::num::{NonZeroU8, NonZeroU16};

/// A year accepted on input, in the range `1..=MAX_YEAR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(NonZeroU16);

impl Year {
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        match NonZeroU16::new(value) {
            Some(year) if value <= MAX_YEAR => Ok(Self(year)),
            _ => Err(ParseError::InvalidYear(value)),
        }
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

/// A month number, `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(NonZeroU8);

impl Month {
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        match NonZeroU8::new(value) {
            Some(month) if value <= MAX_MONTH => Ok(Self(month)),
            _ => Err(ParseError::InvalidMonth(value)),
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

/// A day of month, only constructible against the year and month it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, ParseError> {
        let invalid = ParseError::InvalidDay {
            year: year.get(),
            month: month.get(),
            day: value,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;
        if value > days_in_month(i32::from(year.get()), month.get()) {
            return Err(invalid);
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

// Helper functions. Years are proleptic Gregorian and may fall outside the
// range accepted on input (anniversaries run up to 90 years past a birth date).

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Days since 1970-01-01 for a valid civil date.
pub(crate) const fn days_from_civil(year: i32, month: u8, day: u8) -> i32 {
    let y = if month <= FEBRUARY { year - 1 } else { year };
    let era = y.div_euclid(GREGORIAN_CYCLE);
    let year_of_era = y - era * GREGORIAN_CYCLE;
    // March-based month so the leap day sits at the end of the year
    let shifted_month = (month as i32 + 9) % 12;
    let day_of_year = (153 * shifted_month + 2) / 5 + day as i32 - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_PER_GREGORIAN_CYCLE + day_of_era - EPOCH_SHIFT_DAYS
}

/// Inverse of [`days_from_civil`].
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) const fn civil_from_days(days: i32) -> (i32, u8, u8) {
    let z = days + EPOCH_SHIFT_DAYS;
    let era = z.div_euclid(DAYS_PER_GREGORIAN_CYCLE);
    let day_of_era = z - era * DAYS_PER_GREGORIAN_CYCLE;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = (day_of_year - (153 * shifted_month + 2) / 5 + 1) as u8;
    let month = (if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    }) as u8;
    let year = year_of_era + era * GREGORIAN_CYCLE;
    if month <= FEBRUARY {
        (year + 1, month, day)
    } else {
        (year, month, day)
    }
}
