/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;
/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
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

/// Months per year, used by month arithmetic
pub(crate) const MONTHS_PER_YEAR: i64 = 12;

/// Largest valid hour of day
pub const MAX_HOUR: u8 = 23;
/// Largest valid minute of hour
pub const MAX_MINUTE: u8 = 59;
/// Largest valid second of minute
pub const MAX_SECOND: u8 = 59;
/// Largest valid millisecond of second
pub const MAX_MILLISECOND: u16 = 999;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Time component separator (ISO 8601 format)
pub const TIME_SEPARATOR: char = ':';
/// Separator between seconds and the fraction of a second
pub const FRACTION_SEPARATOR: char = '.';
/// Separator between date and time (ISO 8601 format); a space is accepted too
pub const DATE_TIME_SEPARATOR: char = 'T';

/// Spec token: reset the time of day to midnight
pub const ZERO_TIME_TOKEN: char = 'Z';
/// Spec token: set a field to a cardinal value or to its last value
pub const SET_VALUE_TOKEN: char = '=';
/// Spec token: move forward
pub const FORTH_TOKEN: char = '+';
/// Spec token: move back
pub const BACK_TOKEN: char = '-';
/// Spec token: the last valid value of a field
pub const LAST_VALUE_TOKEN: char = 'L';
/// Spec unit: month
pub const MONTH_UNIT: char = 'M';
/// Spec unit: day
pub const DAY_UNIT: char = 'D';
