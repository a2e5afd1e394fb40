//! Week numbering under the eight MySQL week behaviours.
//!
//! The three bits of [`WeekBehaviour`] have the following meaning:
//!
//! - [`WeekBehaviour::MONDAY_FIRST`]: if set the week starts on Monday, otherwise on Sunday.
//! - [`WeekBehaviour::WEEK_YEAR`]: if unset the week is in range 0-53 and week 0 is the
//!   tail of the previous year's last week. If set the week is in range 1-53 and the
//!   owning year may be the previous year (early January) or the next year (late December).
//! - [`WeekBehaviour::FIRST_WEEKDAY`]: if set week 1 is the week containing the first
//!   first-day-of-week of the year. Otherwise weeks follow ISO 8601:1988: week 1 is the
//!   first week with four or more days in the new year.

use std::ops::BitOr;

use serde::{Deserialize, Serialize};

use crate::{
    CivilTime, TimeError,
    calendar::{day_number, days_in_year, weekday},
    consts::{DAYS_PER_WEEK, ISO_MIN_FIRST_WEEK_DAYS, JANUARY, MAX_WEEKS, WEEKS_BEFORE_ROLLOVER},
    prelude::*,
};

/// Flag set selecting one of the eight week numbering conventions.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct WeekBehaviour(u8);

impl WeekBehaviour {
    /// Week starts on Monday instead of Sunday
    pub const MONDAY_FIRST: Self = Self(1);
    /// Week is always in range 1-53, possibly owned by an adjacent year
    pub const WEEK_YEAR: Self = Self(1 << 1);
    /// Week 1 contains the first occurrence of the first day of the week
    pub const FIRST_WEEKDAY: Self = Self(1 << 2);

    const MASK: u8 = 0b111;

    /// Creates a behaviour from its bit value.
    ///
    /// # Errors
    /// Returns `TimeError::InvalidWeekBehaviour` if `bits` is greater than 7.
    pub const fn new(bits: u8) -> Result<Self, TimeError> {
        if bits & !Self::MASK != 0 {
            return Err(TimeError::InvalidWeekBehaviour(bits));
        }
        Ok(Self(bits))
    }

    /// Creates a behaviour from the low three bits of `bits`
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::MASK)
    }

    /// Maps a `WEEK()` mode argument to its behaviour.
    ///
    /// Only the low three bits of the mode are used. Modes without the Monday bit count
    /// weeks from the first Sunday, modes with it follow the four-day rule, so the
    /// first-weekday bit is toggled when the Monday bit is clear.
    pub const fn from_week_mode(mode: u32) -> Self {
        let mut bits = (mode & Self::MASK as u32) as u8;
        if bits & Self::MONDAY_FIRST.0 == 0 {
            bits ^= Self::FIRST_WEEKDAY.0;
        }
        Self(bits)
    }

    /// Returns the bit value (0-7)
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if every bit of `flag` is set
    #[inline]
    pub const fn contains(self, flag: Self) -> bool {
        self.0 & flag.0 == flag.0
    }
}

impl BitOr for WeekBehaviour {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl TryFrom<u8> for WeekBehaviour {
    type Error = TimeError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Self::new(bits)
    }
}

impl From<WeekBehaviour> for u8 {
    fn from(behaviour: WeekBehaviour) -> Self {
        behaviour.0
    }
}

/// True if a year whose January 1st has weekday index `weekday0` starts with a partial
/// week that does not count as week 1.
const fn first_week_belongs_to_previous_year(first_weekday: bool, weekday0: i32) -> bool {
    (first_weekday && weekday0 != 0) || (!first_weekday && weekday0 >= ISO_MIN_FIRST_WEEK_DAYS)
}

/// Computes the week number of `time` and the year that week belongs to.
///
/// Total over every `CivilTime`. The zero date and out of range fields yield a
/// deterministic but meaningless result, possibly a week outside 0-53.
pub fn calc_week(time: &CivilTime, behaviour: WeekBehaviour) -> (i32, i32) {
    let year = i32::from(time.year());
    let month = i32::from(time.month());
    let day = i32::from(time.day());

    let day_nr = day_number(year, month, day);
    let mut first_day_nr = day_number(year, i32::from(JANUARY), 1);
    let monday_first = behaviour.contains(WeekBehaviour::MONDAY_FIRST);
    let mut week_year = behaviour.contains(WeekBehaviour::WEEK_YEAR);
    let first_weekday = behaviour.contains(WeekBehaviour::FIRST_WEEKDAY);

    let mut weekday0 = weekday(first_day_nr, !monday_first);
    let mut owning_year = year;

    if time.month() == JANUARY && day <= DAYS_PER_WEEK - weekday0 {
        if !week_year && first_week_belongs_to_previous_year(first_weekday, weekday0) {
            return (0, owning_year);
        }
        week_year = true;
        owning_year -= 1;
        let days = days_in_year(owning_year);
        first_day_nr -= days;
        weekday0 = (weekday0 + MAX_WEEKS * DAYS_PER_WEEK - days) % DAYS_PER_WEEK;
        tracing::trace!(%time, behaviour = behaviour.bits(), owning_year, "week owned by previous year");
    }

    let days = if first_week_belongs_to_previous_year(first_weekday, weekday0) {
        day_nr - (first_day_nr + DAYS_PER_WEEK - weekday0)
    } else {
        day_nr - (first_day_nr - weekday0)
    };

    if week_year && days >= WEEKS_BEFORE_ROLLOVER * DAYS_PER_WEEK {
        weekday0 = (weekday0 + days_in_year(owning_year)) % DAYS_PER_WEEK;
        if (!first_weekday && weekday0 < ISO_MIN_FIRST_WEEK_DAYS) || (first_weekday && weekday0 == 0) {
            owning_year += 1;
            tracing::trace!(%time, behaviour = behaviour.bits(), owning_year, "week owned by next year");
            return (1, owning_year);
        }
    }

    (days / DAYS_PER_WEEK + 1, owning_year)
}

impl CivilTime {
    /// Week number and owning year under `behaviour`, see [`calc_week`]
    pub fn calc_week(&self, behaviour: WeekBehaviour) -> (i32, i32) {
        calc_week(self, behaviour)
    }

    /// `WEEK(date, mode)`: the week number under the given mode argument
    pub fn week(&self, mode: u32) -> i32 {
        calc_week(self, WeekBehaviour::from_week_mode(mode)).0
    }

    /// `YEARWEEK(date, mode)`: owning year times 100 plus the week number.
    ///
    /// The week is always in range 1-53 here, whatever the mode.
    pub fn year_week(&self, mode: u32) -> i32 {
        let behaviour = WeekBehaviour::from_week_mode(mode) | WeekBehaviour::WEEK_YEAR;
        let (week, year) = calc_week(self, behaviour);
        year * 100 + week
    }

    /// `WEEKOFYEAR(date)`: ISO-style week number, same as `WEEK(date, 3)`
    pub fn week_of_year(&self) -> i32 {
        self.week(3)
    }
}
