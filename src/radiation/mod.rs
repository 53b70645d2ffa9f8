//! Extraterrestrial and global solar radiation estimates (ASCE method).
//!
//! Each sample depends only on its own timestamp and the shared site
//! parameters, so batches are evaluated as a parallel map.
//!
//! ## Usage Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use radest::radiation::{extraterrestrial_radiation, global_radiation};
//!
//! let noon = NaiveDate::from_ymd_opt(2019, 7, 1)
//!     .unwrap()
//!     .and_hms_opt(12, 0, 0)
//!     .unwrap();
//!
//! let ra = extraterrestrial_radiation(&[noon], 3600.0, 45.0, 9.0, 1).unwrap();
//! let rg = global_radiation(&ra, 250.0).unwrap();
//! println!("Rg at noon: {:.1} W/m2", rg[0]);
//! ```

use chrono::NaiveDateTime;
use rayon::prelude::*;
use std::f64::consts::PI;
use tracing::{debug, trace};

use crate::calendar::{day_of_year, hour_of_day, julian_day};
use crate::error::{RadestError, Result, ensure_finite};
use crate::site::{AveragingWindow, SiteParameters};
use crate::solar::time_correction::{
    HourAngleWindow, central_meridian_longitude, delta_longitude, local_longitude,
    seasonal_correction, solar_time_angle,
};
use crate::solar::{solar_declination, sun_earth_distance_factor, sunset_hour_angle};

pub mod profile;
pub mod time_equation;

/// Solar constant (W/m2), from 49.2 MJ m-2 h-1.
pub const SOLAR_CONSTANT: f64 = 1.0e5 * 49.2 / 3600.0;

/// One timestamp with its radiation estimates (W/m2).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiationSample {
    pub time_stamp: NaiveDateTime,
    pub ra: f64,
    pub rg: f64,
}

/// Extraterrestrial radiation (W/m2) over the window starting at `time_stamp`.
pub fn extraterrestrial_radiation_at(
    time_stamp: NaiveDateTime,
    window: &AveragingWindow,
    site: &SiteParameters,
) -> f64 {
    let doy = day_of_year(time_stamp);
    let declination = solar_declination(doy);
    let dr = sun_earth_distance_factor(doy);

    let zone_time = hour_of_day(time_stamp) - site.zone() as f64;
    trace!(
        %time_stamp,
        doy,
        julian_day = julian_day(time_stamp),
        "estimating extraterrestrial radiation"
    );

    let delta_lon = delta_longitude(
        central_meridian_longitude(site.zone()),
        local_longitude(site.longitude()),
    );
    let t1 = window.hours();
    let omega = solar_time_angle(zone_time, site.zone(), t1, delta_lon, seasonal_correction(doy));

    let latitude = site.latitude() * PI / 180.0;
    let omega_s = sunset_hour_angle(site.latitude(), declination);
    let HourAngleWindow { omega1, omega2 } = HourAngleWindow::clipped(omega, t1, omega_s);

    let ra = 12.0 / PI
        * SOLAR_CONSTANT
        * dr
        * ((omega2 - omega1) * latitude.sin() * declination.sin()
            + latitude.cos() * declination.cos() * (omega2.sin() - omega1.sin()));

    // Fully dark windows can still leave rounding noise below zero
    ra.max(0.0)
}

/// Extraterrestrial radiation for every timestamp, in input order.
pub fn extraterrestrial_radiation_for_site(
    time_stamps: &[NaiveDateTime],
    window: &AveragingWindow,
    site: &SiteParameters,
) -> Vec<f64> {
    debug!(
        samples = time_stamps.len(),
        averaging_period = window.seconds(),
        latitude = site.latitude(),
        longitude = site.longitude(),
        zone = site.zone(),
        "computing extraterrestrial radiation"
    );

    time_stamps
        .par_iter()
        .map(|&ts| extraterrestrial_radiation_at(ts, window, site))
        .collect()
}

/// Estimates extraterrestrial solar radiation by the ASCE method.
///
/// # Arguments
/// * `time_stamps` - Local civil times at the start of each averaging period
/// * `averaging_period` - Length of the period (s)
/// * `latitude` - Decimal degrees, positive northwards
/// * `longitude` - Decimal degrees, positive eastwards
/// * `zone` - Time zone (hours, positive eastwards, -12 to 12)
///
/// # Returns
/// * One non-negative value (W/m2) per timestamp; empty input gives an empty vector
pub fn extraterrestrial_radiation(
    time_stamps: &[NaiveDateTime],
    averaging_period: f64,
    latitude: f64,
    longitude: f64,
    zone: i32,
) -> Result<Vec<f64>> {
    let site = SiteParameters::new(latitude, longitude, zone)?;
    let window = AveragingWindow::new(averaging_period)?;

    Ok(extraterrestrial_radiation_for_site(
        time_stamps,
        &window,
        &site,
    ))
}

/// Reduces extraterrestrial radiation to a ground level estimate.
///
/// `height` is the site height above mean sea level (m). The reduction is
/// linear, `0.75 + 2e-5 * height`.
pub fn global_radiation(ra: &[f64], height: f64) -> Result<Vec<f64>> {
    ensure_finite("height", height)?;
    if ra.iter().any(|r| !r.is_finite()) {
        return Err(RadestError::NonFiniteInput { name: "ra" });
    }

    let factor = 0.75 + 2.0e-5 * height;

    Ok(ra.iter().map(|r| r * factor).collect())
}

/// Pairs each timestamp with its extraterrestrial and global radiation.
pub fn radiation_samples(
    time_stamps: &[NaiveDateTime],
    window: &AveragingWindow,
    site: &SiteParameters,
    height: f64,
) -> Result<Vec<RadiationSample>> {
    let ra = extraterrestrial_radiation_for_site(time_stamps, window, site);
    let rg = global_radiation(&ra, height)?;

    Ok(time_stamps
        .iter()
        .zip(ra)
        .zip(rg)
        .map(|((&time_stamp, ra), rg)| RadiationSample { time_stamp, ra, rg })
        .collect())
}
