use chrono::{Duration, NaiveDateTime};

use serde::Deserialize;
use serde::Deserializer;
use serde::de::Error;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{RadestError, Result, ensure_finite};
use crate::site::{AveragingWindow, SiteParameters};

const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Run description for a radiation time series.
///
/// Iterating a `Config` yields its `num_steps` timestamps.
#[derive(Debug, Clone)]
pub struct Config {
    site: SiteParameters,
    height: f64,
    start: NaiveDateTime,
    step_seconds: u32,
    num_steps: u32,
    next_step: u32,
}

// Deserializes through a helper so the start instant is parsed and every
// field is validated before a Config exists.
impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ConfigHelper {
            site: SiteParameters,
            #[serde(default)]
            height: f64,
            start: String,
            step_seconds: u32,
            num_steps: u32,
        }

        let helper = ConfigHelper::deserialize(deserializer)?;

        let start = NaiveDateTime::parse_from_str(&helper.start, DATETIME_FORMAT)
            .map_err(|e| D::Error::custom(format!("Invalid start format: {}", e)))?;

        Config::new(
            helper.site,
            helper.height,
            start,
            helper.step_seconds,
            helper.num_steps,
        )
        .map_err(D::Error::custom)
    }
}

impl Config {
    pub fn new(
        site: SiteParameters,
        height: f64,
        start: NaiveDateTime,
        step_seconds: u32,
        num_steps: u32,
    ) -> Result<Self> {
        ensure_finite("height", height)?;

        if step_seconds == 0 {
            return Err(RadestError::invalid(
                "step_seconds",
                step_seconds,
                "must be greater than 0",
            ));
        }

        if num_steps == 0 {
            return Err(RadestError::invalid(
                "num_steps",
                num_steps,
                "must be greater than 0",
            ));
        }

        Ok(Self {
            site,
            height,
            start,
            step_seconds,
            num_steps,
            next_step: 0,
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let config: Config = serde_json::from_reader(reader)?;

        Ok(config)
    }

    pub fn site(&self) -> &SiteParameters {
        &self.site
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn num_steps(&self) -> u32 {
        self.num_steps
    }

    /// Each sample accumulates radiation over one time step.
    pub fn averaging_window(&self) -> Result<AveragingWindow> {
        AveragingWindow::new(self.step_seconds as f64)
    }

    fn time_stamp(&self, step: u32) -> NaiveDateTime {
        self.start + Duration::seconds(step as i64 * self.step_seconds as i64)
    }
}

impl Iterator for Config {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_step < self.num_steps {
            let current = self.time_stamp(self.next_step);
            self.next_step += 1;
            Some(current)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("config.json");
        let mut file = File::create(&file_path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, file_path)
    }

    #[test]
    fn test_from_file() {
        let config_data = r#"
    {
        "site": { "latitude": 45.5, "longitude": 9.5, "zone": 1 },
        "height": 120.0,
        "start": "2019-03-08T00:00:00",
        "step_seconds": 3600,
        "num_steps": 24
    }
    "#;
        let (_dir, file_path) = write_config(config_data);

        let config = Config::from_file(file_path).unwrap();

        assert_eq!(config.site(), &SiteParameters::new(45.5, 9.5, 1).unwrap());
        assert_eq!(config.height(), 120.0);
        assert_eq!(config.num_steps(), 24);
        assert_eq!(
            config.start(),
            NaiveDate::from_ymd_opt(2019, 3, 8)
                .expect("Invalid date")
                .and_hms_opt(0, 0, 0)
                .expect("Invalid time")
        );
        assert_eq!(config.averaging_window().unwrap().seconds(), 3600.0);
    }

    #[test]
    fn test_height_defaults_to_sea_level() {
        let config: Config = serde_json::from_str(
            r#"{
                "site": { "latitude": 0.0, "longitude": 0.0, "zone": 0 },
                "start": "2019-06-21T12:00:00",
                "step_seconds": 60,
                "num_steps": 1
            }"#,
        )
        .unwrap();

        assert_eq!(config.height(), 0.0);
    }

    #[test]
    fn test_invalid_configs_are_rejected() {
        let bad_latitude = r#"{
            "site": { "latitude": 95.0, "longitude": 0.0, "zone": 0 },
            "start": "2019-06-21T12:00:00", "step_seconds": 60, "num_steps": 1
        }"#;
        let err = serde_json::from_str::<Config>(bad_latitude).unwrap_err();
        assert!(err.to_string().contains("latitude"), "{err}");

        let bad_zone = r#"{
            "site": { "latitude": 0.0, "longitude": 0.0, "zone": 15 },
            "start": "2019-06-21T12:00:00", "step_seconds": 60, "num_steps": 1
        }"#;
        assert!(serde_json::from_str::<Config>(bad_zone).is_err());

        let bad_start = r#"{
            "site": { "latitude": 0.0, "longitude": 0.0, "zone": 0 },
            "start": "21/06/2019", "step_seconds": 60, "num_steps": 1
        }"#;
        let err = serde_json::from_str::<Config>(bad_start).unwrap_err();
        assert!(err.to_string().contains("Invalid start format"), "{err}");

        let zero_step = r#"{
            "site": { "latitude": 0.0, "longitude": 0.0, "zone": 0 },
            "start": "2019-06-21T12:00:00", "step_seconds": 0, "num_steps": 1
        }"#;
        assert!(serde_json::from_str::<Config>(zero_step).is_err());

        let no_steps = r#"{
            "site": { "latitude": 0.0, "longitude": 0.0, "zone": 0 },
            "start": "2019-06-21T12:00:00", "step_seconds": 60, "num_steps": 0
        }"#;
        assert!(serde_json::from_str::<Config>(no_steps).is_err());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let result = Config::from_file(dir.path().join("missing.json"));
        assert!(matches!(result, Err(RadestError::Io(_))));
    }

    #[test]
    fn test_malformed_json() {
        let (_dir, file_path) = write_config("{ not json");
        let result = Config::from_file(file_path);
        assert!(matches!(result, Err(RadestError::Json(_))));
    }

    #[test]
    fn test_iterator() {
        let config = Config::new(
            SiteParameters::new(45.5, 9.5, 1).unwrap(),
            0.0,
            NaiveDate::from_ymd_opt(2023, 12, 31)
                .expect("Invalid date")
                .and_hms_opt(23, 0, 0)
                .expect("Invalid time"),
            1800,
            3,
        )
        .unwrap();

        let time_stamps: Vec<NaiveDateTime> = config.collect();

        assert_eq!(
            time_stamps,
            vec![
                NaiveDate::from_ymd_opt(2023, 12, 31)
                    .unwrap()
                    .and_hms_opt(23, 0, 0)
                    .unwrap(),
                NaiveDate::from_ymd_opt(2023, 12, 31)
                    .unwrap()
                    .and_hms_opt(23, 30, 0)
                    .unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 1)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap(),
            ]
        );
    }
}
