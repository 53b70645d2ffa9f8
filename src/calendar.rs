//! Calendar helpers: ordinal day and Julian day of a civil timestamp.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// 1-based day of the timestamp's calendar year.
///
/// Counted by date arithmetic from January 1st, so leap years need no
/// special casing.
pub fn day_of_year(time_stamp: NaiveDateTime) -> u32 {
    let date = time_stamp.date();
    // January 1st exists for every year chrono can represent
    let year_start = NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date);

    date.signed_duration_since(year_start).num_days() as u32 + 1
}

/// Day of year for each timestamp, in input order.
pub fn days_of_year(time_stamps: &[NaiveDateTime]) -> Vec<u32> {
    time_stamps.iter().map(|&ts| day_of_year(ts)).collect()
}

/// Julian day number of the timestamp's date (Gregorian calendar).
///
/// The half-day offset of the formula leaves a `.5` fraction; it is
/// truncated toward zero, not floored, so dates before the epoch round
/// up (-4713-01-01 gives -327, not -328).
pub fn julian_day(time_stamp: NaiveDateTime) -> i64 {
    let mut year = time_stamp.year() as i64;
    let mut month = time_stamp.month() as i64;
    let day = time_stamp.day() as f64;

    if month <= 2 {
        year -= 1;
        month += 12;
    }

    let a = year.div_euclid(100);
    let b = 2 - a + a.div_euclid(4);

    let jd = (365.25 * (year + 4716) as f64).floor()
        + (30.6001 * (month + 1) as f64).floor()
        + day
        + b as f64
        - 1524.5;

    jd.trunc() as i64
}

/// Julian day number for each timestamp, in input order.
pub fn julian_days(time_stamps: &[NaiveDateTime]) -> Vec<i64> {
    time_stamps.iter().map(|&ts| julian_day(ts)).collect()
}

/// Decimal hours elapsed since the timestamp's midnight.
pub fn hour_of_day(time_stamp: NaiveDateTime) -> f64 {
    let time = time_stamp.time();

    time.num_seconds_from_midnight() as f64 / 3600.0 + time.nanosecond() as f64 / 3.6e12
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_day_of_year_regular_date() {
        assert_eq!(day_of_year(at(2019, 3, 8, 0)), 67);
        assert_eq!(day_of_year(at(2019, 3, 8, 23)), 67);
    }

    #[test]
    fn test_day_of_year_consecutive_dates() {
        let days: Vec<NaiveDateTime> = (0..3)
            .map(|i| at(2019, 3, 8, 0) + Duration::days(i))
            .collect();
        assert_eq!(days_of_year(&days), vec![67, 68, 69]);
    }

    #[test]
    fn test_day_of_year_year_boundaries() {
        assert_eq!(day_of_year(at(2019, 1, 1, 0)), 1);
        assert_eq!(day_of_year(at(2019, 12, 31, 12)), 365);
        assert_eq!(day_of_year(at(2020, 2, 29, 6)), 60);
        assert_eq!(day_of_year(at(2020, 3, 1, 0)), 61);
        assert_eq!(day_of_year(at(2020, 12, 31, 23)), 366);
        assert_eq!(day_of_year(at(2021, 1, 1, 0)), 1);
    }

    #[test]
    fn test_day_of_year_range_over_leap_cycle() {
        let start = at(2019, 1, 1, 0);
        for i in 0..(4 * 366) {
            let doy = day_of_year(start + Duration::hours(i * 6));
            assert!((1..=366).contains(&doy), "{doy}");
        }
    }

    #[test]
    fn test_julian_day_reference_vectors() {
        assert_eq!(julian_day(at(2019, 3, 8, 0)), 2458550);
        assert_eq!(julian_day(at(2000, 1, 1, 0)), 2451544);
        // Time of day does not move the date
        assert_eq!(julian_day(at(2000, 1, 1, 23)), 2451544);
    }

    #[test]
    fn test_julian_day_truncates_toward_zero() {
        let ts = at(-4713, 1, 1, 0);
        assert_eq!(julian_day(ts), -327);
    }

    #[test]
    fn test_julian_day_consecutive_dates() {
        let days: Vec<NaiveDateTime> = (0..3)
            .map(|i| at(2019, 3, 8, 0) + Duration::days(i))
            .collect();
        assert_eq!(julian_days(&days), vec![2458550, 2458551, 2458552]);
    }

    #[test]
    fn test_julian_day_steps_by_one() {
        // Crosses the Feb/Mar month shift, a leap day and two new years
        let start = at(2018, 12, 1, 12);
        let mut previous = julian_day(start);
        for i in 1..800 {
            let current = julian_day(start + Duration::days(i));
            assert_eq!(current - previous, 1, "day offset {i}");
            previous = current;
        }
    }

    #[test]
    fn test_hour_of_day() {
        let ts = NaiveDate::from_ymd_opt(2019, 3, 8)
            .unwrap()
            .and_hms_opt(13, 30, 36)
            .unwrap();
        assert!((hour_of_day(ts) - 13.51).abs() < 1e-12);
        assert_eq!(hour_of_day(at(2019, 3, 8, 0)), 0.0);
    }
}
