//! How much of the grid lies in the past.
//!
//! Rows restart on every birthday, so the count never drifts against the
//! anniversary-based row boundaries `span_of` uses.

use log::debug;

use crate::{
    CalendarDate, DAYS_PER_WEEK, ParseError, TOTAL_WEEKS, WEEKS_PER_ROW, WeekIndex, WeekSpan, parse_birth_date, span_of,
};

/// The birth date as the user has entered it so far.
///
/// Everything computed from a missing or malformed birth date degrades to
/// zero or nothing instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BirthInput {
    /// Nothing entered yet
    #[default]
    Unset,
    /// Entered, but not a real `YYYY-MM-DD` date
    Invalid(ParseError),
    Date(CalendarDate),
}

impl BirthInput {
    pub fn parse(raw: &str) -> Self {
        match parse_birth_date(raw) {
            Ok(Some(date)) => Self::Date(date),
            Ok(None) => Self::Unset,
            Err(err) => {
                debug!("birth date {raw:?} not accepted: {err}");
                Self::Invalid(err)
            }
        }
    }

    pub const fn date(&self) -> Option<CalendarDate> {
        match self {
            Self::Date(date) => Some(*date),
            Self::Unset | Self::Invalid(_) => None,
        }
    }

    pub const fn error(&self) -> Option<&ParseError> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::Unset | Self::Date(_) => None,
        }
    }

    /// Lived weeks as of `today`, zero without a usable birth date.
    pub fn weeks_lived(&self, today: CalendarDate) -> u16 {
        self.date().map_or_else(
            || {
                debug!("no usable birth date, counting 0 lived weeks");
                0
            },
            |birth| weeks_lived(birth, today),
        )
    }

    pub fn span_of(&self, week: WeekIndex) -> Option<WeekSpan> {
        self.date().map(|birth| span_of(birth, week))
    }

    pub fn current_week(&self, today: CalendarDate) -> Option<WeekIndex> {
        self.date().and_then(|birth| current_week(birth, today))
    }
}

/// Whole years of life completed on `today` and the days since the last
/// anniversary. `None` before birth.
fn elapsed(birth: CalendarDate, today: CalendarDate) -> Option<(i32, i32)> {
    if today < birth {
        return None;
    }

    let mut years = today.year() - birth.year();
    if today < birth.add_years(years) {
        years -= 1;
    }
    let years = years.max(0);

    let anniversary = birth.add_years(years);
    Some((years, today.days_since(anniversary)))
}

/// Number of leading grid cells that are in the past on `today`.
///
/// Zero before or on the birth date, capped at the grid capacity.
pub fn weeks_lived(birth: CalendarDate, today: CalendarDate) -> u16 {
    let Some((years, days)) = elapsed(birth, today) else {
        return 0;
    };
    let lived = years
        .saturating_mul(i32::from(WEEKS_PER_ROW))
        .saturating_add(days / DAYS_PER_WEEK);
    u16::try_from(lived.min(i32::from(TOTAL_WEEKS))).unwrap_or(TOTAL_WEEKS)
}

/// The cell whose span contains `today`, if it is on the grid.
///
/// Can trail the lived count by one: a last-column cell already counts as
/// lived after seven days but its span runs to the next anniversary.
pub fn current_week(birth: CalendarDate, today: CalendarDate) -> Option<WeekIndex> {
    let (years, days) = elapsed(birth, today)?;
    let row = u16::try_from(years).ok()?;
    let column = u16::try_from(days / DAYS_PER_WEEK)
        .ok()?
        .min(WEEKS_PER_ROW - 1);
    WeekIndex::from_position(row, column).ok()
}
