// Solar geometry after the ASCE standardized reference method:
// https://www.mesonet.org/images/site/ASCE_Evapotranspiration_Formula.pdf

use std::f64::consts::PI;

pub mod time_correction;

/// Solar declination (rad) for a 1-based day of year.
pub fn solar_declination(day_of_year: u32) -> f64 {
    0.409 * (2.0 * PI / 365.0 * day_of_year as f64 - 1.39).sin()
}

/// Inverse squared relative Sun-Earth distance.
pub fn sun_earth_distance_factor(day_of_year: u32) -> f64 {
    1.0 + 0.033 * (2.0 * PI * day_of_year as f64 / 365.0).cos()
}

/// Hour angle (rad) at which the sun crosses the horizon.
///
/// # Arguments
/// * `latitude` - Latitude in decimal degrees (-90 to +90)
/// * `declination` - Solar declination in radians
///
/// # Returns
/// * Angle in `[0, PI]`. Beyond the polar circles the `acos` argument leaves
///   `[-1, 1]`; it is clamped so polar day yields `PI` and polar night `0`.
pub fn sunset_hour_angle(latitude: f64, declination: f64) -> f64 {
    let cos_omega_s = -(latitude * PI / 180.0).tan() * declination.tan();

    cos_omega_s.clamp(-1.0, 1.0).acos()
}
