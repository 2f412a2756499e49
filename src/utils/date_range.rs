//! Calendar-day bounds for the daily listing.
//!
//! A `YYYY-MM-DD` string is interpreted in the server's local time zone and
//! turned into the closed UTC interval covering that whole day.

use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};

/// Accepted input format for listing dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, thiserror::Error)]
pub enum DateRangeError {
    #[error("Invalid date '{input}': expected YYYY-MM-DD")]
    Unparseable {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Date '{0}' has no representable local midnight")]
    Unrepresentable(NaiveDate),
}

/// Parses `input` and returns the closed interval of that day in local time.
pub fn local_day_bounds(input: &str) -> Result<(DateTime<Utc>, DateTime<Utc>), DateRangeError> {
    let date = parse_date(input)?;
    day_bounds_in(date, &Local)
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate, DateRangeError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|source| {
        DateRangeError::Unparseable {
            input: input.to_string(),
            source,
        }
    })
}

/// Returns `[start of date, end of date]` in `tz`, converted to UTC.
///
/// The end is the last microsecond before the following midnight, which is
/// the finest resolution PostgreSQL stores.
pub fn day_bounds_in<Tz: TimeZone>(
    date: NaiveDate,
    tz: &Tz,
) -> Result<(DateTime<Utc>, DateTime<Utc>), DateRangeError> {
    let next = date
        .succ_opt()
        .ok_or(DateRangeError::Unrepresentable(date))?;

    let start = start_of_day(date, tz).ok_or(DateRangeError::Unrepresentable(date))?;
    let next_start = start_of_day(next, tz).ok_or(DateRangeError::Unrepresentable(next))?;

    Ok((start, next_start - Duration::microseconds(1)))
}

/// First instant of `date` in `tz`.
///
/// Midnight can fall into a DST gap; in that case the day starts at the
/// first valid local time an hour later.
fn start_of_day<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Option<DateTime<Utc>> {
    let midnight = date.and_time(NaiveTime::MIN);

    let local = match tz.from_local_datetime(&midnight) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => tz
            .from_local_datetime(&(midnight + Duration::hours(1)))
            .earliest()?,
    };

    Some(local.with_timezone(&Utc))
}
