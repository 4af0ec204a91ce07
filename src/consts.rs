/// Maximum year accepted when parsing (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days in a full 400-year Gregorian cycle
pub(crate) const DAYS_PER_GREGORIAN_CYCLE: i32 = 146_097;
/// Offset between 0000-03-01 and the 1970-01-01 epoch, in days
pub(crate) const EPOCH_SHIFT_DAYS: i32 = 719_468;

/// Earliest year a `CalendarDate` can reach through arithmetic
pub(crate) const MIN_CIVIL_YEAR: i32 = -999_999;
/// Latest year a `CalendarDate` can reach through arithmetic
pub(crate) const MAX_CIVIL_YEAR: i32 = 999_999;

/// Seconds in one calendar day
pub(crate) const SECONDS_PER_DAY: u64 = 86_400;

/// Number of year-rows in the grid
pub const TOTAL_YEARS: u16 = 90;
/// Number of week cells in each year-row
pub const WEEKS_PER_ROW: u16 = 52;
/// Total number of cells in the grid (4680)
pub const TOTAL_WEEKS: u16 = TOTAL_YEARS * WEEKS_PER_ROW;
/// Length of an ordinary week cell
pub const DAYS_PER_WEEK: i32 = 7;
/// Rows carrying a year label in the rendered grid
pub const YEAR_LABEL_EVERY: u16 = 5;

/// Blank border kept on every side of an exported page, in millimetres
pub const PAGE_MARGIN_MM: f64 = 10.0;
/// Birth date a fresh session starts with
pub const DEFAULT_BIRTH_DATE: &str = "1990-01-01";

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Separator between the start and end of a week span
pub const SPAN_SEPARATOR: char = '/';
/// Exact length of a `YYYY-MM-DD` date string
pub(crate) const ISO_DATE_LEN: usize = 10;
