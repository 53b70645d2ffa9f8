//! Global radiation tables on the equinoxes and solstices: across latitudes
//! at noon, and around the equator at local midnight.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rayon::prelude::*;
use tracing::info;

use crate::error::{RadestError, Result, ensure_finite};
use crate::radiation::{extraterrestrial_radiation_at, global_radiation};
use crate::site::{AveragingWindow, SiteParameters};

pub const PROFILE_LATITUDES: std::ops::RangeInclusive<i32> = -89..=89;

pub const PROFILE_LONGITUDES: std::ops::Range<i32> = 0..360;

/// March 21st, June 21st, September 21st and December 21st.
const PROFILE_DAYS: [(u32, u32); 4] = [(3, 21), (6, 21), (9, 21), (12, 21)];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatitudeProfileRow {
    pub latitude: i32,
    /// Global radiation (W/m2) in `PROFILE_DAYS` order.
    pub rg: [f64; 4],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongitudeProfileRow {
    pub longitude: i32,
    pub zone: i32,
    /// Global radiation (W/m2) in `PROFILE_DAYS` order.
    pub rg: [f64; 4],
}

fn profile_times(year: i32, hour: u32) -> Result<[NaiveDateTime; 4]> {
    let mut times = [NaiveDateTime::MIN; 4];
    for (time, (month, day)) in times.iter_mut().zip(PROFILE_DAYS) {
        *time = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, 0, 0))
            .ok_or_else(|| RadestError::invalid("year", year, "outside the supported calendar"))?;
    }
    Ok(times)
}

fn profile_rg(
    times: &[NaiveDateTime; 4],
    window: &AveragingWindow,
    site: &SiteParameters,
    height: f64,
) -> Result<[f64; 4]> {
    let ra = times.map(|time| extraterrestrial_radiation_at(time, window, site));
    let rg = global_radiation(&ra, height)?;
    Ok([rg[0], rg[1], rg[2], rg[3]])
}

/// Zone used for an equator longitude: one hour every 24 degrees, capped at +12.
pub fn longitude_profile_zone(longitude: i32) -> i32 {
    (longitude / 24).min(12)
}

/// Hourly global radiation at noon for each integer latitude in [-89, 89].
pub fn latitude_profile(
    year: i32,
    longitude: f64,
    zone: i32,
    height: f64,
) -> Result<Vec<LatitudeProfileRow>> {
    ensure_finite("height", height)?;
    let noons = profile_times(year, 12)?;
    let window = AveragingWindow::new(3600.0)?;
    // Validate the shared longitude and zone once, up front
    SiteParameters::new(0.0, longitude, zone)?;

    info!(year, longitude, zone, height, "computing latitude profile");

    PROFILE_LATITUDES
        .into_par_iter()
        .map(|latitude| -> Result<LatitudeProfileRow> {
            let site = SiteParameters::new(latitude as f64, longitude, zone)?;

            Ok(LatitudeProfileRow {
                latitude,
                rg: profile_rg(&noons, &window, &site, height)?,
            })
        })
        .collect()
}

/// Hourly global radiation on the equator for each integer longitude in [0, 359].
///
/// Each longitude is evaluated at local midnight plus its zone hours, so the
/// window opens at 00:00 zone time shifted by `longitude_profile_zone`.
pub fn longitude_profile(year: i32, height: f64) -> Result<Vec<LongitudeProfileRow>> {
    ensure_finite("height", height)?;
    let midnights = profile_times(year, 0)?;
    let window = AveragingWindow::new(3600.0)?;

    info!(year, height, "computing longitude profile");

    PROFILE_LONGITUDES
        .into_par_iter()
        .map(|longitude| -> Result<LongitudeProfileRow> {
            let zone = longitude_profile_zone(longitude);
            let site = SiteParameters::new(0.0, longitude as f64, zone)?;
            let times = midnights.map(|midnight| midnight + Duration::hours(zone as i64));

            Ok(LongitudeProfileRow {
                longitude,
                zone,
                rg: profile_rg(&times, &window, &site, height)?,
            })
        })
        .collect()
}
