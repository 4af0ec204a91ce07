mod consts;
mod export;
mod goals;
mod grid;
mod lived;
mod locale;
mod prelude;
mod session;
mod settings;
mod span;
#[cfg(test)]
mod test_utils;
mod types;
mod view;

pub use consts::*;
pub use export::{ExportError, ExportRequest, Exporter, PageSize, PaperSize, Placement, Theme, file_name, fit_image};
pub use goals::GoalStore;
pub use grid::{GridError, GridPosition, WeekIndex, anniversary_of, span_of};
pub use lived::{BirthInput, current_week, weeks_lived};
pub use locale::{Key, Language, format_date, format_range, t, t_with};
pub use session::Session;
pub use settings::{Settings, SettingsError};
pub use span::{SpanError, WeekSpan};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};
pub use view::{Cell, CellState, cells, tooltip, year_label};

use crate::consts::{ISO_DATE_LEN, MAX_CIVIL_YEAR, MIN_CIVIL_YEAR, SECONDS_PER_DAY};
use crate::prelude::*;
use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};
use types::{civil_from_days, days_from_civil};

/// A proleptic Gregorian calendar date with no time zone attached.
///
/// Stored as a day count relative to 1970-01-01 so comparisons, day
/// differences and day additions are plain integer operations. Year, month and
/// day are derived from that count on demand.
///
/// Arithmetic saturates at [`CalendarDate::MIN`] and [`CalendarDate::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    days: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0:?} (expected YYYY-MM-DD)")]
    InvalidFormat(String),
    #[display(fmt = "Invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidCalendarDate { year: u16, month: u8, day: u8 },
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// -999999-01-01
    pub const MIN: Self = Self {
        days: days_from_civil(MIN_CIVIL_YEAR, 1, MIN_DAY),
    };
    /// 999999-12-31
    pub const MAX: Self = Self {
        days: days_from_civil(MAX_CIVIL_YEAR, MAX_MONTH, 31),
    };

    const fn clamped(days: i32) -> Self {
        if days < Self::MIN.days {
            Self::MIN
        } else if days > Self::MAX.days {
            Self::MAX
        } else {
            Self { days }
        }
    }

    /// Creates a date from already validated components.
    pub const fn new(year: Year, month: Month, day: Day) -> Self {
        Self {
            days: days_from_civil(year.get() as i32, month.get(), day.get()),
        }
    }

    /// Creates a date from raw components, rejecting impossible ones.
    ///
    /// # Errors
    /// Returns `InvalidYear`, `InvalidMonth` or `InvalidDay` for the first
    /// component that is out of range.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self::new(year, month, day))
    }

    /// Saturates outside the representable range.
    pub const fn from_days_since_epoch(days: i32) -> Self {
        Self::clamped(days)
    }

    pub const fn days_since_epoch(self) -> i32 {
        self.days
    }

    /// Today's date on the UTC calendar, read from the system clock.
    pub fn today_utc() -> Self {
        let days = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => i64::try_from(elapsed.as_secs() / SECONDS_PER_DAY).unwrap_or(i64::MAX),
            // Clock set before 1970: count whole days backwards, rounding down
            Err(err) => {
                let behind = err.duration().as_secs().div_ceil(SECONDS_PER_DAY);
                -i64::try_from(behind).unwrap_or(i64::MAX)
            }
        };
        let days = i32::try_from(days).unwrap_or(if days < 0 { i32::MIN } else { i32::MAX });
        Self::clamped(days)
    }

    pub const fn year(self) -> i32 {
        civil_from_days(self.days).0
    }

    pub const fn month(self) -> u8 {
        civil_from_days(self.days).1
    }

    pub const fn day(self) -> u8 {
        civil_from_days(self.days).2
    }

    /// Returns `(year, month, day)` in one conversion.
    pub const fn ymd(self) -> (i32, u8, u8) {
        civil_from_days(self.days)
    }

    #[must_use]
    pub const fn add_days(self, days: i32) -> Self {
        Self::clamped(self.days.saturating_add(days))
    }

    /// Moves the date by whole calendar years, keeping month and day.
    ///
    /// February 29 lands on February 28 when the target year has no leap day.
    #[must_use]
    pub const fn add_years(self, years: i32) -> Self {
        let (year, month, day) = self.ymd();
        let target = year.saturating_add(years);
        if target > MAX_CIVIL_YEAR {
            return Self::MAX;
        }
        if target < MIN_CIVIL_YEAR {
            return Self::MIN;
        }
        let max_day = types::days_in_month(target, month);
        let day = if day > max_day { max_day } else { day };
        Self {
            days: days_from_civil(target, month, day),
        }
    }

    /// Whole days from `earlier` to `self`; negative when `earlier` is later.
    pub const fn days_since(self, earlier: Self) -> i32 {
        self.days - earlier.days
    }

    #[must_use]
    pub const fn succ(self) -> Self {
        self.add_days(1)
    }

    #[must_use]
    pub const fn pred(self) -> Self {
        self.add_days(-1)
    }

    /// Builds a date the lenient way: month overflow carries into the year and
    /// day overflow carries into following (or preceding) months.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn normalized(year: i32, month: i32, day: i32) -> Self {
        let month0 = month - 1;
        let year = year + month0.div_euclid(12);
        let month = (month0.rem_euclid(12) + 1) as u8;
        Self {
            days: days_from_civil(year, month, MIN_DAY) + (day - 1),
        }
    }

    /// Splits `YYYY-MM-DD` into numeric components.
    fn split_iso(s: &str) -> Result<(u16, u8, u8), ParseError> {
        let invalid = || ParseError::InvalidFormat(s.to_owned());
        if s.len() != ISO_DATE_LEN {
            return Err(invalid());
        }
        let parts: Vec<&str> = s.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts[..] else {
            return Err(invalid());
        };
        let all_digits = |part: &str, len: usize| {
            part.len() == len && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !(all_digits(year, 4) && all_digits(month, 2) && all_digits(day, 2)) {
            return Err(invalid());
        }
        Ok((
            year.parse().map_err(|_| invalid())?,
            month.parse().map_err(|_| invalid())?,
            day.parse().map_err(|_| invalid())?,
        ))
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Accepts exactly `YYYY-MM-DD`; surrounding whitespace is a format error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let (year, month, day) = Self::split_iso(s)?;

        // Let the lenient constructor roll over, then reject anything that moved
        let date = Self::normalized(i32::from(year), i32::from(month), i32::from(day));
        if year == 0 || date.ymd() != (i32::from(year), month, day) {
            return Err(ParseError::InvalidCalendarDate { year, month, day });
        }
        Ok(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day) = self.ymd();
        write!(f, "{year:04}{DATE_SEPARATOR}{month:02}{DATE_SEPARATOR}{day:02}")
    }
}

/// Parses a birth date as typed by the user.
///
/// Blank input is not an error: it means no date has been chosen yet and
/// yields `Ok(None)`.
///
/// # Errors
/// Returns `ParseError` when the input is present but not a real `YYYY-MM-DD` date.
pub fn parse_birth_date(raw: &str) -> Result<Option<CalendarDate>, ParseError> {
    match raw.parse::<CalendarDate>() {
        Ok(date) => Ok(Some(date)),
        Err(ParseError::EmptyInput) => Ok(None),
        Err(err) => Err(err),
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_parse_valid_date() {
        let d = "1990-01-01".parse::<CalendarDate>().unwrap();
        assert_eq!(d.ymd(), (1990, 1, 1));
        assert_eq!(d.year(), 1990);
        assert_eq!(d.month(), 1);
        assert_eq!(d.day(), 1);
    }

    #[test]
    fn test_parse_rejects_rollover() {
        let result = "2023-02-30".parse::<CalendarDate>();
        assert_eq!(
            result,
            Err(ParseError::InvalidCalendarDate {
                year: 2023,
                month: 2,
                day: 30
            })
        );
        assert!("2023-02-28".parse::<CalendarDate>().is_ok());
    }

    #[test]
    fn test_parse_rollover_cases() {
        struct TestCase {
            input:       &'static str,
            valid:       bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                input:       "2024-02-29",
                valid:       true,
                description: "leap day in leap year",
            },
            TestCase {
                input:       "2023-02-29",
                valid:       false,
                description: "leap day in common year",
            },
            TestCase {
                input:       "1900-02-29",
                valid:       false,
                description: "century not divisible by 400",
            },
            TestCase {
                input:       "2000-02-29",
                valid:       true,
                description: "century divisible by 400",
            },
            TestCase {
                input:       "2023-13-01",
                valid:       false,
                description: "month 13 would roll into next year",
            },
            TestCase {
                input:       "2023-00-10",
                valid:       false,
                description: "month 0 would roll into previous year",
            },
            TestCase {
                input:       "2023-04-31",
                valid:       false,
                description: "April has 30 days",
            },
            TestCase {
                input:       "2023-05-00",
                valid:       false,
                description: "day 0 would roll into previous month",
            },
            TestCase {
                input:       "0000-01-01",
                valid:       false,
                description: "year 0",
            },
            TestCase {
                input:       "9999-12-31",
                valid:       true,
                description: "last four-digit date",
            },
        ];

        for case in &cases {
            let result = case.input.parse::<CalendarDate>();
            assert_eq!(
                result.is_ok(),
                case.valid,
                "{} ({}): got {:?}",
                case.input,
                case.description,
                result
            );
            if !case.valid {
                assert!(
                    matches!(result, Err(ParseError::InvalidCalendarDate { .. })),
                    "{} should be an invalid calendar date",
                    case.input
                );
            }
        }
    }

    #[test]
    fn test_parse_rejects_bad_format() {
        for input in [
            "1990-1-01",
            "90-01-01",
            "1990/01/01",
            "1990-01-01T00:00",
            "+990-01-01",
            "1990-0a-01",
            "19900101",
            "1990--01-1",
            "01-01-1990",
        ] {
            assert!(
                matches!(
                    input.parse::<CalendarDate>(),
                    Err(ParseError::InvalidFormat(_))
                ),
                "{input} should be rejected as malformed"
            );
        }
    }

    #[test]
    fn test_parse_empty_is_distinct() {
        assert_eq!("".parse::<CalendarDate>(), Err(ParseError::EmptyInput));
        assert_eq!(
            "   ".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat("   ".to_owned()))
        );
        assert_eq!(parse_birth_date(""), Ok(None));
        assert!(parse_birth_date(" ").is_err());
        assert_eq!(parse_birth_date("1990-01-01"), Ok(Some(date(1990, 1, 1))));
        assert!(parse_birth_date("1990-02-30").is_err());
    }

    #[test]
    fn test_parse_rejects_surrounding_whitespace() {
        for input in [" 1990-01-01", "1990-01-01 ", "1990-01-01\n", "\t1990-01-01"] {
            assert_eq!(
                input.parse::<CalendarDate>(),
                Err(ParseError::InvalidFormat(input.to_owned())),
                "{input:?}"
            );
        }
    }

    #[test]
    fn test_arithmetic_saturates_at_range_ends() {
        let far = CalendarDate::from_days_since_epoch(i32::MAX);
        assert_eq!(far, CalendarDate::MAX);
        assert_eq!(far.to_string(), "999999-12-31");
        assert_eq!(far.ymd(), (999_999, 12, 31));
        assert_eq!(CalendarDate::from_days_since_epoch(i32::MIN).ymd(), (-999_999, 1, 1));

        assert_eq!(CalendarDate::MAX.succ(), CalendarDate::MAX);
        assert_eq!(CalendarDate::MAX.add_days(i32::MAX), CalendarDate::MAX);
        assert_eq!(CalendarDate::MIN.add_days(i32::MIN), CalendarDate::MIN);
        assert_eq!(date(2000, 1, 1).add_years(i32::MAX), CalendarDate::MAX);
        assert_eq!(date(2000, 1, 1).add_years(i32::MIN), CalendarDate::MIN);
        assert_eq!(CalendarDate::MAX.pred().succ(), CalendarDate::MAX);
        assert!(CalendarDate::MAX.days_since(CalendarDate::MIN) > 0);
    }

    #[test]
    fn test_display_round_trip() {
        // Parse(Format(Parse(s))) == Parse(s), over every day of a leap cycle
        let mut d = date(1999, 12, 1);
        let end = date(2004, 3, 1);
        while d < end {
            let text = d.to_string();
            assert_eq!(text.parse::<CalendarDate>(), Ok(d), "{text}");
            d = d.succ();
        }
        assert_eq!(date(987, 6, 5).to_string(), "0987-06-05");
    }

    #[test]
    fn test_from_ymd_errors() {
        assert!(matches!(
            CalendarDate::from_ymd(0, 1, 1),
            Err(ParseError::InvalidYear(0))
        ));
        assert!(matches!(
            CalendarDate::from_ymd(2020, 13, 1),
            Err(ParseError::InvalidMonth(13))
        ));
        assert!(matches!(
            CalendarDate::from_ymd(2021, 2, 29),
            Err(ParseError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_add_days_crosses_boundaries() {
        assert_eq!(date(1990, 12, 31).add_days(1), date(1991, 1, 1));
        assert_eq!(date(2000, 2, 28).add_days(1), date(2000, 2, 29));
        assert_eq!(date(2001, 2, 28).add_days(1), date(2001, 3, 1));
        assert_eq!(date(1990, 1, 1).add_days(-1), date(1989, 12, 31));
        assert_eq!(date(1990, 1, 1).add_days(364), date(1990, 12, 31));
    }

    #[test]
    fn test_add_years_keeps_month_and_day() {
        assert_eq!(date(1990, 6, 15).add_years(30), date(2020, 6, 15));
        assert_eq!(date(1990, 6, 15).add_years(-1), date(1989, 6, 15));
    }

    #[test]
    fn test_add_years_clamps_leap_day() {
        let leap = date(2000, 2, 29);
        assert_eq!(leap.add_years(1), date(2001, 2, 28));
        assert_eq!(leap.add_years(4), date(2004, 2, 29));
        assert_eq!(leap.add_years(100), date(2100, 2, 28));
    }

    #[test]
    fn test_add_years_past_parse_range() {
        let d = date(9999, 3, 1).add_years(90);
        assert_eq!(d.ymd(), (10089, 3, 1));
    }

    #[test]
    fn test_days_since() {
        assert_eq!(date(2020, 1, 1).days_since(date(2019, 1, 1)), 365);
        assert_eq!(date(2021, 1, 1).days_since(date(2020, 1, 1)), 366);
        assert_eq!(date(2019, 1, 1).days_since(date(2020, 1, 1)), -365);
        assert_eq!(date(1990, 1, 1).days_since(date(1990, 1, 1)), 0);
    }

    #[test]
    fn test_ordering() {
        assert!(date(1990, 1, 1) < date(1990, 1, 2));
        assert!(date(1989, 12, 31) < date(1990, 1, 1));
        assert!(date(2000, 3, 1) > date(2000, 2, 29));
    }

    #[test]
    fn test_epoch_accessors() {
        let d = CalendarDate::from_days_since_epoch(0);
        assert_eq!(d, date(1970, 1, 1));
        assert_eq!(date(1970, 1, 2).days_since_epoch(), 1);
    }

    #[test]
    fn test_today_utc_is_plausible() {
        let today = CalendarDate::today_utc();
        assert!(today > date(2020, 1, 1));
    }

    #[test]
    fn test_serde_string_format() {
        let d = date(1991, 8, 15);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#""1991-08-15""#);
        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, d);

        assert!(serde_json::from_str::<CalendarDate>(r#""2024-02-30""#).is_err());
        assert!(serde_json::from_str::<CalendarDate>(r#""2024-02""#).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = "2023-02-30".parse::<CalendarDate>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid calendar date: 2023-02-30");
        assert_eq!(ParseError::EmptyInput.to_string(), "Empty date string");
    }
}
