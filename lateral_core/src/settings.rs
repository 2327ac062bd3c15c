//! # Calculation Settings
//!
//! Defaults applied when a calculation input leaves a value open, plus the
//! numerical tolerance used to detect vanishing denominators. Settings are
//! plain JSON so they can sit next to an input file.
//!
//! ## Example
//!
//! ```rust
//! use lateral_core::settings::CalcSettings;
//!
//! let settings = CalcSettings::from_json(r#"{ "wall_friction_ratio": 0.5 }"#).unwrap();
//! assert_eq!(settings.wall_friction_ratio, 0.5);
//! assert_eq!(settings.default_profile_samples, 51);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult, ZERO_TOLERANCE};

/// Global calculation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcSettings {
    /// δ/φ used when an input omits the wall-friction angle
    pub wall_friction_ratio: f64,

    /// Number of profile samples when an input does not specify one
    pub default_profile_samples: usize,

    /// Magnitude below which a denominator counts as zero
    pub zero_tolerance: f64,
}

impl Default for CalcSettings {
    fn default() -> Self {
        CalcSettings {
            wall_friction_ratio: 2.0 / 3.0,
            default_profile_samples: 51,
            zero_tolerance: ZERO_TOLERANCE,
        }
    }
}

impl CalcSettings {
    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let settings: CalcSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> CalcResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
        let settings = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), ?settings, "loaded calculation settings");
        Ok(settings)
    }

    /// Validate setting values.
    pub fn validate(&self) -> CalcResult<()> {
        if !(0.0..=1.0).contains(&self.wall_friction_ratio) {
            return Err(CalcError::invalid_input(
                "wall_friction_ratio",
                self.wall_friction_ratio.to_string(),
                "Wall friction ratio δ/φ must be between 0 and 1",
            ));
        }
        if self.default_profile_samples < 2 {
            return Err(CalcError::invalid_input(
                "default_profile_samples",
                self.default_profile_samples.to_string(),
                "A profile needs at least 2 samples to span top and base",
            ));
        }
        if !(self.zero_tolerance > 0.0 && self.zero_tolerance < 1e-3) {
            return Err(CalcError::invalid_input(
                "zero_tolerance",
                self.zero_tolerance.to_string(),
                "Zero tolerance must be positive and below 1e-3",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = CalcSettings::default();
        assert!((settings.wall_friction_ratio - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(settings.default_profile_samples, 51);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = CalcSettings::from_json(r#"{ "default_profile_samples": 11 }"#).unwrap();
        assert_eq!(settings.default_profile_samples, 11);
        assert_eq!(settings.zero_tolerance, ZERO_TOLERANCE);
    }

    #[test]
    fn test_invalid_ratio_rejected() {
        let err = CalcSettings::from_json(r#"{ "wall_friction_ratio": 1.5 }"#).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_malformed_json() {
        let err = CalcSettings::from_json("{ not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_missing_file() {
        let err = CalcSettings::load("/nonexistent/lateral-settings.json").unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let settings = CalcSettings::default();
        let json = serde_json::to_string_pretty(&settings).unwrap();
        let roundtrip: CalcSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, roundtrip);
    }
}
