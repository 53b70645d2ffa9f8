//! Error types for radest

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RadestError {
    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Non-finite value supplied for {name}")]
    NonFiniteInput { name: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse date: {0}")]
    DateParse(#[from] chrono::ParseError),
}

impl RadestError {
    pub(crate) fn invalid(name: &'static str, value: impl ToString, reason: &str) -> Self {
        RadestError::InvalidParameter {
            name,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for radest operations
pub type Result<T> = std::result::Result<T, RadestError>;

/// Rejects NaN and infinities before they reach the trigonometry.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RadestError::NonFiniteInput { name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite("height", 12.5).unwrap(), 12.5);
        assert!(matches!(
            ensure_finite("height", f64::NAN),
            Err(RadestError::NonFiniteInput { name: "height" })
        ));
        assert!(ensure_finite("height", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_invalid_parameter_message() {
        let err = RadestError::invalid("zone", 13, "must be between -12 and 12");
        assert_eq!(
            err.to_string(),
            "Invalid parameter: zone = 13 (must be between -12 and 12)"
        );
    }
}
