//! Conversions between `YYYY-MM-DD` strings and epoch seconds.

use chrono::{DateTime, NaiveDate, NaiveTime};

use crate::error::CoreError;
use crate::types::EpochSeconds;

/// Accepted input and display format for dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date. Failure is a decode error, not a validation error.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        CoreError::Decode(format!("bad date format for {field}, must be YYYY-MM-DD"))
    })
}

/// Seconds since the Unix epoch at UTC midnight of `date`.
pub fn date_to_epoch(date: NaiveDate) -> EpochSeconds {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

/// Parse a `YYYY-MM-DD` field straight to epoch seconds.
pub fn parse_epoch(field: &str, value: &str) -> Result<EpochSeconds, CoreError> {
    parse_date(field, value).map(date_to_epoch)
}

/// Render epoch seconds as `YYYY-MM-DD` (UTC). `None` if out of range.
pub fn epoch_to_date(secs: EpochSeconds) -> Option<String> {
    DateTime::from_timestamp(secs, 0).map(|dt| dt.format(DATE_FORMAT).to_string())
}
