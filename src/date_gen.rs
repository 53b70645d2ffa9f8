use crate::error::{RadestError, Result};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

/// Every `step_seconds` from midnight of `date` up to, not including, the next midnight.
///
/// `step_seconds` must divide a day evenly.
pub fn day_series(date: NaiveDate, step_seconds: u32) -> Result<Vec<NaiveDateTime>> {
    if step_seconds == 0 || 86_400 % step_seconds != 0 {
        return Err(RadestError::invalid(
            "step_seconds",
            step_seconds,
            "must be a positive divisor of 86400",
        ));
    }

    let midnight = date.and_time(chrono::NaiveTime::MIN);
    let steps = 86_400 / step_seconds;

    Ok((0..steps)
        .map(|i| midnight + Duration::seconds(i as i64 * step_seconds as i64))
        .collect())
}

/// All dates of a calendar year, January 1st first.
pub fn year_dates(year: i32) -> Result<Vec<NaiveDate>> {
    let first = NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| RadestError::invalid("year", year, "outside the supported calendar"))?;

    Ok(first
        .iter_days()
        .take_while(|date| date.year() == year)
        .collect())
}
