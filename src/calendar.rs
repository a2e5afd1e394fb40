//! Leap years, weekdays and the ordinal day number the week calculator differences.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_COMMON_YEAR, DAYS_IN_LEAP_YEAR, DAYS_PER_WEEK, FEBRUARY,
    GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MONTH_CORRECTION, WEEKDAY_SHIFT,
};

/// Returns 366 for leap years and 365 otherwise.
///
/// Year 0 is divisible by 400 but is classified as a common year. Negative years can
/// show up as owning years of the week calculator and follow the same rule.
pub const fn days_in_year(year: i32) -> i32 {
    if year % LEAP_YEAR_CYCLE == 0
        && (year % CENTURY_CYCLE != 0 || (year % GREGORIAN_CYCLE == 0 && year != 0))
    {
        DAYS_IN_LEAP_YEAR
    } else {
        DAYS_IN_COMMON_YEAR
    }
}

/// Weekday index of a day number, 0 for the first day of the week.
///
/// With `sunday_first` unset 0 is Monday, otherwise 0 is Sunday. Negative day numbers
/// wrap into `0..7` as well.
pub(crate) const fn weekday(day_number: i32, sunday_first: bool) -> i32 {
    let shifted = day_number + WEEKDAY_SHIFT + if sunday_first { 1 } else { 0 };
    shifted.rem_euclid(DAYS_PER_WEEK)
}

/// Ordinal day number of a (year, month, day) triple.
///
/// Only differences between two results are meaningful. Month 0 and day 0 are
/// accepted, and the zero date (year 0, month 0) maps to 0. All divisions truncate
/// toward zero.
pub(crate) const fn day_number(year: i32, month: i32, day: i32) -> i32 {
    if year == 0 && month == 0 {
        return 0;
    }

    let mut y = year;
    let mut delsum = DAYS_IN_COMMON_YEAR * y + 31 * (month - 1) + day;
    if month <= FEBRUARY as i32 {
        y -= 1;
    } else {
        delsum -= month * 4 + MONTH_CORRECTION;
    }
    let correction = (y / CENTURY_CYCLE + 1) * 3 / 4;
    delsum + y / LEAP_YEAR_CYCLE - correction
}
