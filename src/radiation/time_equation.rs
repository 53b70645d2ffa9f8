//! Empirical equation of time: how far the radiation peak drifts from civil noon.

use chrono::{Duration, NaiveDate};
use rayon::prelude::*;
use tracing::info;

use crate::date_gen::{day_series, year_dates};
use crate::error::Result;
use crate::radiation::extraterrestrial_radiation_at;
use crate::site::{AveragingWindow, SiteParameters};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeEquationSample {
    pub date: NaiveDate,
    /// Seconds from 12:00 to the start of the window with most radiation.
    pub offset_seconds: f64,
}

/// Offset between civil noon and the extraterrestrial radiation maximum of one day.
///
/// The day is sampled every `step_seconds` with a window of the same length.
/// On a tie the earliest window wins.
pub fn noon_offset(date: NaiveDate, site: &SiteParameters, step_seconds: u32) -> Result<f64> {
    let time_stamps = day_series(date, step_seconds)?;
    let window = AveragingWindow::new(step_seconds as f64)?;

    let mut peak = time_stamps[0];
    let mut peak_ra = f64::NEG_INFINITY;
    for &time_stamp in &time_stamps {
        let ra = extraterrestrial_radiation_at(time_stamp, &window, site);
        if ra > peak_ra {
            peak = time_stamp;
            peak_ra = ra;
        }
    }

    let noon = time_stamps[0] + Duration::hours(12);

    Ok(peak.signed_duration_since(noon).num_seconds() as f64)
}

/// Noon offsets for every day of `year`, in calendar order.
pub fn time_equation(
    year: i32,
    site: &SiteParameters,
    step_seconds: u32,
) -> Result<Vec<TimeEquationSample>> {
    let dates = year_dates(year)?;
    info!(year, days = dates.len(), step_seconds, "computing time equation");

    dates
        .par_iter()
        .map(|&date| {
            noon_offset(date, site, step_seconds).map(|offset_seconds| TimeEquationSample {
                date,
                offset_seconds,
            })
        })
        .collect()
}
