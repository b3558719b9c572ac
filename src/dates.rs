//! Need-by Dates

use jiff::{
    Timestamp,
    civil::{Date, DateTime, Time},
    tz::TimeZone,
};
use thiserror::Error;

/// Errors parsing a need-by value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NeedByError {
    /// No date was entered.
    #[error("need-by date is empty")]
    Empty,

    /// The value is not a recognised date or date-time.
    #[error("invalid need-by date: {0:?}")]
    Invalid(String),
}

/// Parse a need-by value into a civil date-time in the given zone.
///
/// Accepts RFC 3339 timestamps (converted into `tz`), civil date-times such as
/// `2026-10-20T09:30` or `2026-10-20 09:30:00`, and bare dates, which are read
/// as midnight.
///
/// # Errors
///
/// Returns a `NeedByError` when the value is empty or cannot be parsed.
pub fn parse_need_by(raw: &str, tz: &TimeZone) -> Result<DateTime, NeedByError> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(NeedByError::Empty);
    }

    if let Ok(timestamp) = raw.parse::<Timestamp>() {
        return Ok(tz.to_datetime(timestamp));
    }

    if let Ok(datetime) = raw.parse::<DateTime>() {
        return Ok(datetime);
    }

    raw.parse::<Date>()
        .map(start_of_day)
        .map_err(|_err| NeedByError::Invalid(raw.to_string()))
}

/// Midnight at the start of the given day.
pub fn start_of_day(date: Date) -> DateTime {
    date.to_datetime(Time::midnight())
}

/// Today's date in the given zone.
pub fn today_in(tz: &TimeZone) -> Date {
    tz.to_datetime(Timestamp::now()).date()
}
