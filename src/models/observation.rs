use serde::{Deserialize, Serialize};

use crate::utils::constants::{
    KELVIN_TO_FAHRENHEIT_OFFSET, KELVIN_TO_FAHRENHEIT_SCALE, MILLIS_PER_SECOND,
};

/// One parsed climate record, already in reporting units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub state_code: String,
    /// Seconds since the epoch
    pub timestamp: i64,
    pub humidity_pct: f64,
    pub has_snow: bool,
    pub cloud_cover_pct: f64,
    pub has_lightning: bool,
    pub surface_temp_fahrenheit: f64,
}

impl Observation {
    pub fn new(
        state_code: impl Into<String>,
        timestamp: i64,
        humidity_pct: f64,
        has_snow: bool,
        cloud_cover_pct: f64,
        has_lightning: bool,
        surface_temp_fahrenheit: f64,
    ) -> Self {
        Self {
            state_code: state_code.into(),
            timestamp,
            humidity_pct,
            has_snow,
            cloud_cover_pct,
            has_lightning,
            surface_temp_fahrenheit,
        }
    }
}

pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    kelvin * KELVIN_TO_FAHRENHEIT_SCALE - KELVIN_TO_FAHRENHEIT_OFFSET
}

/// Truncating conversion, matching integer division on the raw field
pub fn millis_to_seconds(millis: i64) -> i64 {
    millis / MILLIS_PER_SECOND
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freezing_point() {
        assert!((kelvin_to_fahrenheit(273.15) - 32.0).abs() < 1e-9);
    }

    #[test]
    fn test_absolute_zero() {
        assert!((kelvin_to_fahrenheit(0.0) + 459.67).abs() < 1e-9);
    }

    #[test]
    fn test_millis_to_seconds() {
        assert_eq!(millis_to_seconds(1428300000000), 1428300000);
        assert_eq!(millis_to_seconds(1428300000999), 1428300000);
        assert_eq!(millis_to_seconds(0), 0);
    }
}
