//! MySQL-compatible civil date/time values.
//!
//! [`CivilTime`] stores calendar and clock fields without validating them, the way
//! MySQL keeps zero dates such as `2006-00-00`. The crate provides the legacy week
//! arithmetic behind `WEEK()`/`YEARWEEK()` and a conversion to an absolute,
//! offset-aware timestamp that doubles as the validity check for a value.

mod absolute;
mod calendar;
mod consts;
mod offset;
mod prelude;
#[cfg(test)]
mod test_utils;
mod week;

pub use calendar::days_in_year;
pub use consts::*;
pub use offset::LocalOffset;
pub use week::{WeekBehaviour, calc_week};

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Calendar and clock fields of a MySQL date/time value.
///
/// No validation happens on construction through [`CivilTime::from_fields`]: month 0 and
/// day 0 are sentinels for "unspecified", and hour 24 or April 31st are representable.
/// Every operation of this crate accepts such values; only [`CivilTime::to_absolute`]
/// rejects values that are not a real date and time.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(
    fmt = "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:06}",
    year,
    month,
    day,
    hour,
    minute,
    second,
    microsecond
)]
pub struct CivilTime {
    year:        u16,
    month:       u8,
    day:         u8,
    hour:        u8,
    minute:      u8,
    second:      u8,
    microsecond: u32,
}

/// A component of a [`CivilTime`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "hour")]
    Hour,
    #[display(fmt = "minute")]
    Minute,
    #[display(fmt = "second")]
    Second,
    #[display(fmt = "microsecond")]
    Microsecond,
}

impl Field {
    /// Largest value the field may hold; the smallest is always 0
    pub const fn max(self) -> i64 {
        match self {
            Self::Year => MAX_YEAR as i64,
            Self::Month => MAX_MONTH as i64,
            Self::Day => MAX_DAY as i64,
            Self::Hour => MAX_HOUR as i64,
            Self::Minute => MAX_MINUTE as i64,
            Self::Second => MAX_SECOND as i64,
            Self::Microsecond => MAX_MICROSECOND as i64,
        }
    }
}

/// Error type for civil time operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    /// The value does not denote a real date and time.
    ///
    /// `normalized` is the rolled over timestamp the fields produced, e.g. `2023-03-01`
    /// for `2023-02-29`. It is `None` only if normalization left chrono's range.
    #[error("Invalid time format: {time}")]
    InvalidTimeFormat {
        time:       CivilTime,
        normalized: Option<DateTime<FixedOffset>>,
    },

    /// A component is outside its declared range.
    #[error("Invalid {field}: {value} (must be 0-{max})", max = .field.max())]
    FieldOutOfRange { field: Field, value: i64 },

    /// Week behaviour bits outside 0-7.
    #[error("Invalid week behaviour: {0} (must be 0-7)")]
    InvalidWeekBehaviour(u8),

    /// UTC offset of a day or more.
    #[error("Invalid UTC offset: {0} seconds")]
    InvalidOffset(i32),
}

impl TimeError {
    /// The rolled over timestamp of an `InvalidTimeFormat` error
    pub fn normalized(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            Self::InvalidTimeFormat { normalized, .. } => *normalized,
            _ => None,
        }
    }
}

impl CivilTime {
    /// The zero date `0000-00-00 00:00:00.000000`
    pub const ZERO: Self = Self::from_fields(0, 0, 0, 0, 0, 0, 0);

    /// Creates a civil time, checking every component against its declared range.
    ///
    /// Month and day 0 are accepted. The components are not checked against each other,
    /// so `2023-02-30` is accepted here and rejected by [`CivilTime::to_absolute`].
    ///
    /// # Errors
    /// Returns `TimeError::FieldOutOfRange` for the first component that is negative or
    /// above its maximum.
    pub fn new(
        year: i64,
        month: i64,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
        microsecond: i64,
    ) -> Result<Self, TimeError> {
        Ok(Self {
            year:        checked_field(Field::Year, year)?,
            month:       checked_field(Field::Month, month)?,
            day:         checked_field(Field::Day, day)?,
            hour:        checked_field(Field::Hour, hour)?,
            minute:      checked_field(Field::Minute, minute)?,
            second:      checked_field(Field::Second, second)?,
            microsecond: checked_field(Field::Microsecond, microsecond)?,
        })
    }

    /// Creates a civil time from raw fields without any validation
    pub const fn from_fields(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        microsecond: u32,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            microsecond,
        }
    }

    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    #[inline]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    #[inline]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    #[inline]
    pub const fn second(&self) -> u8 {
        self.second
    }

    #[inline]
    pub const fn microsecond(&self) -> u32 {
        self.microsecond
    }

    /// Returns true for the zero date (all fields 0)
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

fn checked_field<T: TryFrom<i64>>(field: Field, value: i64) -> Result<T, TimeError> {
    if !(0..=field.max()).contains(&value) {
        return Err(TimeError::FieldOutOfRange { field, value });
    }
    T::try_from(value).map_err(|_| TimeError::FieldOutOfRange { field, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_reads_back_fields() {
        let time = CivilTime::new(2024, 2, 29, 12, 30, 45, 123_456).unwrap();
        assert_eq!(time.year(), 2024);
        assert_eq!(time.month(), 2);
        assert_eq!(time.day(), 29);
        assert_eq!(time.hour(), 12);
        assert_eq!(time.minute(), 30);
        assert_eq!(time.second(), 45);
        assert_eq!(time.microsecond(), 123_456);
    }

    #[test]
    fn test_new_accepts_sentinels_and_bounds() {
        assert!(CivilTime::new(0, 0, 0, 0, 0, 0, 0).unwrap().is_zero());
        assert!(CivilTime::new(2006, 0, 0, 0, 0, 0, 0).is_ok());
        assert!(CivilTime::new(9999, 12, 31, 23, 59, 59, 999_999).is_ok());
        // Components are not checked against each other
        assert!(CivilTime::new(2023, 2, 30, 0, 0, 0, 0).is_ok());
    }

    #[test]
    fn test_new_rejects_out_of_range_cases() {
        struct TestCase {
            fields:      [i64; 7],
            field:       Field,
            value:       i64,
            description: &'static str,
        }

        let cases = [
            TestCase {
                fields:      [10_000, 1, 1, 0, 0, 0, 0],
                field:       Field::Year,
                value:       10_000,
                description: "year above 9999",
            },
            TestCase {
                fields:      [65_536 + 2024, 1, 1, 0, 0, 0, 0],
                field:       Field::Year,
                value:       67_560,
                description: "year that would wrap in 16 bits",
            },
            TestCase {
                fields:      [-1, 1, 1, 0, 0, 0, 0],
                field:       Field::Year,
                value:       -1,
                description: "negative year",
            },
            TestCase {
                fields:      [2024, 13, 1, 0, 0, 0, 0],
                field:       Field::Month,
                value:       13,
                description: "month 13",
            },
            TestCase {
                fields:      [2024, 1, 32, 0, 0, 0, 0],
                field:       Field::Day,
                value:       32,
                description: "day 32",
            },
            TestCase {
                fields:      [2024, 1, 1, 24, 0, 0, 0],
                field:       Field::Hour,
                value:       24,
                description: "hour 24",
            },
            TestCase {
                fields:      [2024, 1, 1, 0, 60, 0, 0],
                field:       Field::Minute,
                value:       60,
                description: "minute 60",
            },
            TestCase {
                fields:      [2024, 1, 1, 0, 0, 60, 0],
                field:       Field::Second,
                value:       60,
                description: "second 60",
            },
            TestCase {
                fields:      [2024, 1, 1, 0, 0, 0, 1_000_000],
                field:       Field::Microsecond,
                value:       1_000_000,
                description: "a full second of microseconds",
            },
        ];

        for case in &cases {
            let [y, mo, d, h, mi, s, us] = case.fields;
            let result = CivilTime::new(y, mo, d, h, mi, s, us);
            assert_eq!(
                result,
                Err(TimeError::FieldOutOfRange {
                    field: case.field,
                    value: case.value,
                }),
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_from_fields_is_unchecked() {
        let time = CivilTime::from_fields(2024, 4, 31, 24, 61, 99, 5_000_000);
        assert_eq!(time.day(), 31);
        assert_eq!(time.hour(), 24);
        assert_eq!(time.minute(), 61);
        assert_eq!(time.second(), 99);
        assert_eq!(time.microsecond(), 5_000_000);
    }

    #[test]
    fn test_zero() {
        assert!(CivilTime::ZERO.is_zero());
        assert!(CivilTime::default().is_zero());
        assert!(!CivilTime::from_fields(0, 0, 1, 0, 0, 0, 0).is_zero());
    }

    #[test]
    fn test_display() {
        let time = CivilTime::from_fields(2024, 2, 9, 8, 5, 3, 42);
        assert_eq!(time.to_string(), "2024-02-09 08:05:03.000042");
        assert_eq!(CivilTime::ZERO.to_string(), "0000-00-00 00:00:00.000000");
    }

    #[test]
    fn test_ordering_is_chronological() {
        let a = CivilTime::from_fields(2023, 12, 31, 23, 59, 59, 999_999);
        let b = CivilTime::from_fields(2024, 1, 1, 0, 0, 0, 0);
        let c = CivilTime::from_fields(2024, 1, 1, 0, 0, 0, 1);
        assert!(a < b);
        assert!(b < c);
        assert!(CivilTime::ZERO < a);
    }

    #[test]
    fn test_field_max() {
        assert_eq!(Field::Year.max(), 9999);
        assert_eq!(Field::Month.max(), 12);
        assert_eq!(Field::Day.max(), 31);
        assert_eq!(Field::Hour.max(), 23);
        assert_eq!(Field::Minute.max(), 59);
        assert_eq!(Field::Second.max(), 59);
        assert_eq!(Field::Microsecond.max(), 999_999);
    }

    #[test]
    fn test_error_display() {
        let err = CivilTime::new(2024, 13, 1, 0, 0, 0, 0).unwrap_err();
        assert_eq!(err.to_string(), "Invalid month: 13 (must be 0-12)");

        assert_eq!(
            TimeError::InvalidWeekBehaviour(9).to_string(),
            "Invalid week behaviour: 9 (must be 0-7)"
        );
    }

    #[test]
    fn test_serde() {
        let time = CivilTime::from_fields(2024, 2, 29, 12, 0, 0, 7);
        let json = serde_json::to_string(&time).unwrap();
        assert_eq!(
            json,
            r#"{"year":2024,"month":2,"day":29,"hour":12,"minute":0,"second":0,"microsecond":7}"#
        );

        let parsed: CivilTime = serde_json::from_str(&json).unwrap();
        assert_eq!(time, parsed);
    }

    #[test]
    fn test_constants() {
        assert_eq!(MAX_YEAR, 9999);
        assert_eq!(MAX_MICROSECOND, 999_999);
    }
}
