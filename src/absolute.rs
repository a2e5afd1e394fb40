//! Conversion between civil times and absolute, offset-aware timestamps.
//!
//! Conversion normalizes out of range fields into adjacent dates (month 13 becomes
//! January of the next year, day 0 the last day of the previous month, hour 24 the next
//! day). A value is valid iff reading the fields back from the normalized timestamp
//! gives the original fields.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, TimeZone, Timelike, Weekday};

use crate::{CivilTime, LocalOffset, TimeError, consts::NANOS_PER_MICRO};

const MONTHS_PER_YEAR: i32 = 12;

impl CivilTime {
    /// Builds the timestamp the fields denote in `offset`, rolling out of range fields
    /// over into adjacent dates.
    fn normalize(&self, offset: LocalOffset) -> Option<DateTime<FixedOffset>> {
        let months = i32::from(self.month()) - 1;
        let year = i32::from(self.year()) + months.div_euclid(MONTHS_PER_YEAR);
        let month = u32::try_from(months.rem_euclid(MONTHS_PER_YEAR) + 1).ok()?;

        let elapsed = Duration::days(i64::from(self.day()) - 1)
            + Duration::hours(i64::from(self.hour()))
            + Duration::minutes(i64::from(self.minute()))
            + Duration::seconds(i64::from(self.second()))
            + Duration::nanoseconds(i64::from(self.microsecond()) * NANOS_PER_MICRO);

        let local = NaiveDate::from_ymd_opt(year, month, 1)?
            .and_hms_opt(0, 0, 0)?
            .checked_add_signed(elapsed)?;
        offset.fixed().from_local_datetime(&local).single()
    }

    /// Converts to an absolute timestamp in `offset`.
    ///
    /// # Errors
    /// Returns `TimeError::InvalidTimeFormat` if the fields are not a real date and time,
    /// e.g. month 0, day 0, February 29th of a common year or hour 24. The error carries
    /// the rolled over timestamp.
    pub fn to_absolute(&self, offset: LocalOffset) -> Result<DateTime<FixedOffset>, TimeError> {
        let Some(normalized) = self.normalize(offset) else {
            tracing::debug!(time = %self, "civil time out of representable range");
            return Err(TimeError::InvalidTimeFormat {
                time:       *self,
                normalized: None,
            });
        };

        let round_trip = (
            normalized.year(),
            normalized.month(),
            normalized.day(),
            normalized.hour(),
            normalized.minute(),
            normalized.second(),
            normalized.nanosecond() / 1_000,
        );
        let original = (
            i32::from(self.year()),
            u32::from(self.month()),
            u32::from(self.day()),
            u32::from(self.hour()),
            u32::from(self.minute()),
            u32::from(self.second()),
            self.microsecond(),
        );
        if round_trip != original {
            tracing::debug!(time = %self, %normalized, "civil time does not survive normalization");
            return Err(TimeError::InvalidTimeFormat {
                time:       *self,
                normalized: Some(normalized),
            });
        }
        Ok(normalized)
    }

    /// Reads the local calendar and clock fields of `datetime`.
    ///
    /// # Errors
    /// Returns `TimeError::FieldOutOfRange` for years outside 0-9999 and for the extra
    /// nanoseconds of a leap second.
    pub fn from_absolute<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Result<Self, TimeError> {
        let local = datetime.naive_local();
        Self::new(
            i64::from(local.year()),
            i64::from(local.month()),
            i64::from(local.day()),
            i64::from(local.hour()),
            i64::from(local.minute()),
            i64::from(local.second()),
            i64::from(local.nanosecond()) / NANOS_PER_MICRO,
        )
    }

    /// Day of the week.
    ///
    /// # Errors
    /// Returns `TimeError::InvalidTimeFormat` if the value is not a real date and time.
    pub fn weekday(&self, offset: LocalOffset) -> Result<Weekday, TimeError> {
        Ok(self.to_absolute(offset)?.weekday())
    }

    /// Day of the year, 1-366.
    ///
    /// # Errors
    /// Returns `TimeError::InvalidTimeFormat` if the value is not a real date and time.
    pub fn year_day(&self, offset: LocalOffset) -> Result<u32, TimeError> {
        Ok(self.to_absolute(offset)?.ordinal())
    }

    /// ISO 8601 week as `(iso_year, week)`.
    ///
    /// # Errors
    /// Returns `TimeError::InvalidTimeFormat` if the value is not a real date and time.
    pub fn iso_week(&self, offset: LocalOffset) -> Result<(i32, u32), TimeError> {
        let week = self.to_absolute(offset)?.iso_week();
        Ok((week.year(), week.week()))
    }

    /// Like [`CivilTime::weekday`], but invalid values yield Sunday
    pub fn weekday_or_default(&self, offset: LocalOffset) -> Weekday {
        self.weekday(offset).unwrap_or(Weekday::Sun)
    }

    /// Like [`CivilTime::year_day`], but invalid values yield 0
    pub fn year_day_or_default(&self, offset: LocalOffset) -> u32 {
        self.year_day(offset).unwrap_or_default()
    }

    /// Like [`CivilTime::iso_week`], but invalid values yield `(0, 0)`
    pub fn iso_week_or_default(&self, offset: LocalOffset) -> (i32, u32) {
        self.iso_week(offset).unwrap_or_default()
    }
}
