//! UTC calendar helpers
//!
//! Converts between epoch milliseconds and the calendar fields embedded in
//! a key. Months are one-based throughout.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike, Utc};

use crate::error::{Error, Result};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Get a UTC date-time set to the given epoch millisecond
pub fn utc_from_millis(time_ms: i64) -> Result<DateTime<Utc>> {
    Utc.timestamp_millis_opt(time_ms).single().ok_or_else(|| {
        Error::timestamp(format!("Instant out of calendar range: {}ms", time_ms))
    })
}

/// Calendar fields of a UTC instant, millisecond resolution
///
/// Fields are signed so that keys carrying out-of-range values can still be
/// represented and normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarFields {
    pub year: i32,
    /// 1-12
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
    pub millisecond: i32,
}

impl Default for CalendarFields {
    /// The Unix epoch
    fn default() -> Self {
        Self {
            year: 1970,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
            millisecond: 0,
        }
    }
}

impl CalendarFields {
    /// Decompose an epoch millisecond into UTC calendar fields
    pub fn from_time_ms(time_ms: i64) -> Result<Self> {
        Ok(Self::from_date_time(&utc_from_millis(time_ms)?))
    }

    /// Decompose a UTC date-time into calendar fields
    pub fn from_date_time(dt: &DateTime<Utc>) -> Self {
        Self {
            year: dt.year(),
            month: dt.month() as i32,
            day: dt.day() as i32,
            hour: dt.hour() as i32,
            minute: dt.minute() as i32,
            second: dt.second() as i32,
            millisecond: dt.timestamp_subsec_millis().min(999) as i32,
        }
    }

    /// Combine the fields back into epoch milliseconds
    ///
    /// Out-of-range fields roll over into the next larger unit: month 13 is
    /// January of the following year, day 0 is the last day of the previous
    /// month, hour 25 is 01:00 of the next day, and so on.
    pub fn to_time_ms(&self) -> Result<i64> {
        let months = i64::from(self.year) * 12 + i64::from(self.month) - 1;
        let year = i32::try_from(months.div_euclid(12)).map_err(|_| {
            Error::timestamp(format!("Year out of range: {:?}", self))
        })?;
        let month = months.rem_euclid(12) as u32 + 1;

        let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .ok_or_else(|| Error::timestamp(format!("Date out of range: {:?}", self)))?;
        let base = Utc.from_utc_datetime(&first_of_month).timestamp_millis();

        // Each term is bounded by i32::MAX * MS_PER_DAY, so the sum cannot overflow.
        let offset = (i64::from(self.day) - 1) * MS_PER_DAY
            + i64::from(self.hour) * MS_PER_HOUR
            + i64::from(self.minute) * MS_PER_MINUTE
            + i64::from(self.second) * MS_PER_SECOND
            + i64::from(self.millisecond);

        base.checked_add(offset)
            .ok_or_else(|| Error::timestamp(format!("Instant out of range: {:?}", self)))
    }

    /// Check that every field lies in its natural calendar range
    pub fn is_normalized(&self) -> bool {
        let date_ok = u32::try_from(self.month)
            .ok()
            .zip(u32::try_from(self.day).ok())
            .and_then(|(month, day)| NaiveDate::from_ymd_opt(self.year, month, day))
            .is_some();

        date_ok
            && (0..24).contains(&self.hour)
            && (0..60).contains(&self.minute)
            && (0..60).contains(&self.second)
            && (0..1000).contains(&self.millisecond)
    }
}
