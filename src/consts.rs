/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December). Month 0 is a sentinel for "unspecified".
pub const MAX_MONTH: u8 = 12;

/// Maximum valid day of month. Day 0 is a sentinel for "unspecified".
pub const MAX_DAY: u8 = 31;

/// Maximum valid hour
pub const MAX_HOUR: u8 = 23;
/// Maximum valid minute
pub const MAX_MINUTE: u8 = 59;
/// Maximum valid second
pub const MAX_SECOND: u8 = 59;
/// Maximum valid microsecond
pub const MAX_MICROSECOND: u32 = 999_999;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in a common year
pub const DAYS_IN_COMMON_YEAR: i32 = 365;
/// Days in a leap year
pub const DAYS_IN_LEAP_YEAR: i32 = 366;
/// Days in a week
pub const DAYS_PER_WEEK: i32 = 7;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (and are not year 0)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Month length correction subtracted from day numbers after February.
/// Fixed at `23 / 10` evaluated with integer division.
pub(crate) const MONTH_CORRECTION: i32 = 23 / 10;

/// Shift applied to a day number so that weekday 0 is Monday
pub(crate) const WEEKDAY_SHIFT: i32 = 5;

/// Weeks in a year before the last-week checks kick in
pub(crate) const WEEKS_BEFORE_ROLLOVER: i32 = 52;
/// Upper bound of weeks a year may span, used to keep modular arithmetic non-negative
pub(crate) const MAX_WEEKS: i32 = 53;
/// ISO-style numbering: a year starting on this weekday index or later leaves
/// fewer than four days in its first week
pub(crate) const ISO_MIN_FIRST_WEEK_DAYS: i32 = 4;

pub(crate) const NANOS_PER_MICRO: i64 = 1_000;
