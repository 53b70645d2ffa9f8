//! Conversion of civil time to solar hour angles.
//!
//! Longitudes follow the ASCE convention here: degrees west of Greenwich,
//! in `[0, 360)`. Callers pass ordinary east-positive values and the
//! sign flip happens in [`local_longitude`] and [`central_meridian_longitude`].

use std::f64::consts::PI;

/// Seasonal correction for solar time (hours), i.e. the equation of time.
pub fn seasonal_correction(day_of_year: u32) -> f64 {
    let b = 2.0 * PI * (day_of_year as f64 - 81.0) / 364.0;

    0.1645 * (2.0 * b).sin() - 0.1255 * b.cos() - 0.025 * b.sin()
}

/// Wraps an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

/// Longitude of the time zone's central meridian, degrees west.
pub fn central_meridian_longitude(zone: i32) -> f64 {
    normalize_degrees(-(zone as f64) * 15.0)
}

/// Site longitude, degrees west.
pub fn local_longitude(longitude: f64) -> f64 {
    normalize_degrees(-longitude)
}

/// Signed difference between the zone meridian and the site, in `(-180, 180]`.
///
/// The absolute difference is reduced modulo 360 to `d`. Its magnitude is
/// folded to the short way round (`360 - d` past 180). The sign is positive
/// for `d` in `(0, 180]` and negative otherwise, which makes `d == 0`
/// a (negative) zero.
pub fn delta_longitude(central_meridian: f64, local: f64) -> f64 {
    let d = (central_meridian - local).abs() % 360.0;

    let magnitude = if d > 180.0 { 360.0 - d } else { d };
    let sign = if d > 0.0 && d <= 180.0 { 1.0 } else { -1.0 };

    sign * magnitude
}

/// Solar hour angle (rad) at the midpoint of an averaging window.
///
/// # Arguments
/// * `zone_time` - Decimal hour of day, already shifted back by `zone`
/// * `zone` - Time zone, hours east of GMT
/// * `window_hours` - Length of the averaging window
/// * `delta_lon` - Output of [`delta_longitude`]
/// * `sc` - Output of [`seasonal_correction`]
pub fn solar_time_angle(
    zone_time: f64,
    zone: i32,
    window_hours: f64,
    delta_lon: f64,
    sc: f64,
) -> f64 {
    let t = zone_time + zone as f64 + 0.5 * window_hours;

    (PI / 12.0) * ((t + 0.06667 * delta_lon + sc) - 12.0)
}

/// Hour angles bounding an averaging window, clipped to daylight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourAngleWindow {
    pub omega1: f64,
    pub omega2: f64,
}

impl HourAngleWindow {
    /// Spreads `omega` over the window and clips both ends into
    /// `[-omega_s, omega_s]`.
    ///
    /// A window entirely before sunrise or after sunset collapses to
    /// `omega1 == omega2`.
    pub fn clipped(omega: f64, window_hours: f64, omega_s: f64) -> Self {
        let half_width = PI * window_hours / 24.0;

        let omega2 = (omega + half_width).clamp(-omega_s, omega_s);
        let omega1 = (omega - half_width).clamp(-omega_s, omega_s).min(omega2);

        HourAngleWindow { omega1, omega2 }
    }

    pub fn is_dark(&self) -> bool {
        self.omega1 == self.omega2
    }
}
