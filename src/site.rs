use serde::Deserialize;

use crate::error::{RadestError, Result, ensure_finite};

/// Geographic position and civil time zone of the site radiation is estimated at.
///
/// Only obtainable through [`SiteParameters::new`], deserialization included,
/// so every instance is in range and finite.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "SiteHelper")]
pub struct SiteParameters {
    latitude: f64,
    longitude: f64,
    zone: i32,
}

#[derive(Deserialize)]
struct SiteHelper {
    latitude: f64,
    longitude: f64,
    zone: i32,
}

impl TryFrom<SiteHelper> for SiteParameters {
    type Error = RadestError;

    fn try_from(helper: SiteHelper) -> Result<Self> {
        SiteParameters::new(helper.latitude, helper.longitude, helper.zone)
    }
}

impl SiteParameters {
    /// Builds a validated site.
    ///
    /// # Arguments
    /// * `latitude` - Decimal degrees, positive northwards (-90 to +90)
    /// * `longitude` - Decimal degrees, positive eastwards (-180 to +180, or 0 to 360)
    /// * `zone` - Hours displacement from GMT, positive eastwards (-12 to +12)
    pub fn new(latitude: f64, longitude: f64, zone: i32) -> Result<Self> {
        ensure_finite("latitude", latitude)?;
        ensure_finite("longitude", longitude)?;

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(RadestError::invalid(
                "latitude",
                latitude,
                "must be between -90 and 90",
            ));
        }

        if !(-180.0..=360.0).contains(&longitude) {
            return Err(RadestError::invalid(
                "longitude",
                longitude,
                "must be between -180 and 360",
            ));
        }

        if !(-12..=12).contains(&zone) {
            return Err(RadestError::invalid(
                "zone",
                zone,
                "must be between -12 and 12",
            ));
        }

        Ok(SiteParameters {
            latitude,
            longitude,
            zone,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn zone(&self) -> i32 {
        self.zone
    }
}

/// Length of the radiation accumulation interval starting at each timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AveragingWindow {
    seconds: f64,
}

impl AveragingWindow {
    pub fn new(seconds: f64) -> Result<Self> {
        ensure_finite("averaging_period", seconds)?;
        if seconds <= 0.0 {
            return Err(RadestError::invalid(
                "averaging_period",
                seconds,
                "must be positive",
            ));
        }
        Ok(AveragingWindow { seconds })
    }

    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    pub fn hours(&self) -> f64 {
        self.seconds / 3600.0
    }
}
