//! # Critical Slip-Plane Inclination
//!
//! Inclination ϑ of the planar failure surface that produces the active
//! thrust, for the same angle set as the Coulomb coefficient.
//!
//! ## Formula
//!
//! ```text
//! R' = [ sin(φ+δ) · cos(α−β) ] / [ sin(φ−β) · cos(α+δ) ]
//! ϑ  = φ + atan( cos(φ−α) / ( sin(φ−α) + √R' ) )
//! ```
//!
//! ## Validity
//!
//! 1. `sin(φ−β)` and `cos(α+δ)` must not vanish
//! 2. `R'` must be non-negative
//! 3. `sin(φ−α) + √R'` must not vanish
//!
//! ## Example
//!
//! ```rust
//! use lateral_core::calculations::slip_plane::compute_slip_angle;
//!
//! let theta = compute_slip_angle(35.0, 10.0, 20.0, 23.33).unwrap();
//! assert!((theta - 55.8).abs() < 0.1);
//! ```

use serde::{Deserialize, Serialize};

use super::angles::AngleSet;
use crate::equations::earth_pressure::{slip_plane_angle, slip_plane_denominator, slip_plane_ratio};
use crate::errors::{ensure_non_negative, ensure_nonzero, CalcResult};
use crate::settings::CalcSettings;
use crate::units::Radians;

/// Results from the slip-plane calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlipPlaneResult {
    /// The angles the slip plane was computed from
    pub angles: AngleSet,

    /// Inclination of the critical slip surface in degrees
    pub slip_angle_deg: f64,

    /// R', the ratio under the square root
    pub ratio: f64,

    /// sin(φ−α) + √R'
    pub denominator: f64,
}

/// Calculate the critical slip-plane inclination.
///
/// # Returns
///
/// * `Ok(SlipPlaneResult)` - ϑ in degrees with intermediate terms
/// * `Err(CalcError)` - DivisionByZero, DomainError or InvalidInput
pub fn calculate(angles: &AngleSet, settings: &CalcSettings) -> CalcResult<SlipPlaneResult> {
    angles.validate()?;
    let rad = angles.to_radians();
    let tolerance = settings.zero_tolerance;

    ensure_nonzero("sin(φ−β)", (rad.phi - rad.beta).sin(), tolerance)?;
    ensure_nonzero("cos(α+δ)", (rad.alpha + rad.delta).cos(), tolerance)?;

    let ratio = slip_plane_ratio(rad.phi.0, rad.alpha.0, rad.beta.0, rad.delta.0);
    ensure_non_negative("R' = sin(φ+δ)·cos(α−β) / (sin(φ−β)·cos(α+δ))", ratio)?;

    let denominator = slip_plane_denominator(rad.phi.0, rad.alpha.0, ratio);
    ensure_nonzero("sin(φ−α) + √R'", denominator, tolerance)?;

    let slip_angle_deg = Radians(slip_plane_angle(rad.phi.0, rad.alpha.0, ratio)).to_degrees();

    tracing::debug!(?angles, slip_angle_deg, ratio, "computed critical slip-plane angle");

    Ok(SlipPlaneResult {
        angles: *angles,
        slip_angle_deg,
        ratio,
        denominator,
    })
}

/// Critical slip-plane inclination ϑ in degrees from φ, α, β, δ in degrees.
pub fn compute_slip_angle(phi_k: f64, alpha: f64, beta: f64, delta_a: f64) -> CalcResult<f64> {
    let angles = AngleSet::new(phi_k, alpha, beta, delta_a);
    calculate(&angles, &CalcSettings::default()).map(|r| r.slip_angle_deg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;

    #[test]
    fn test_reference_example() {
        let theta = compute_slip_angle(35.0, 10.0, 20.0, 23.33).unwrap();
        assert!((theta - 55.8).abs() < 0.1);
    }

    #[test]
    fn test_rankine_slip_plane() {
        // Smooth vertical wall, level backfill: ϑ = 45° + φ/2
        for phi in [20.0, 30.0, 40.0] {
            let theta = compute_slip_angle(phi, 0.0, 0.0, 0.0).unwrap();
            assert!((theta - (45.0 + phi / 2.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_slip_plane_steeper_than_friction_angle() {
        let theta = compute_slip_angle(30.0, 0.0, 0.0, 20.0).unwrap();
        assert!(theta > 30.0 && theta < 90.0);
    }

    #[test]
    fn test_backfill_at_friction_angle() {
        let err = compute_slip_angle(30.0, 0.0, 30.0, 20.0).unwrap_err();
        assert_eq!(err, CalcError::division_by_zero("sin(φ−β)"));
    }

    #[test]
    fn test_cos_alpha_plus_delta_zero() {
        let err = compute_slip_angle(35.0, 60.0, 0.0, 30.0).unwrap_err();
        assert_eq!(err, CalcError::division_by_zero("cos(α+δ)"));
    }

    #[test]
    fn test_negative_radicand() {
        let err = compute_slip_angle(20.0, 0.0, 30.0, 10.0).unwrap_err();
        assert_eq!(err.error_code(), "DOMAIN_ERROR");
    }

    #[test]
    fn test_vanishing_denominator() {
        // φ = α gives sin(φ−α) = 0, δ = −φ gives R' = 0
        let err = compute_slip_angle(20.0, 20.0, 0.0, -20.0).unwrap_err();
        assert_eq!(err, CalcError::division_by_zero("sin(φ−α) + √R'"));
    }

    #[test]
    fn test_result_terms() {
        let result = calculate(&AngleSet::new(35.0, 10.0, 20.0, 23.33), &CalcSettings::default()).unwrap();
        assert!(result.ratio > 0.0);
        assert!(result.denominator > 0.0);
        assert!((result.angles.phi_k - 35.0).abs() < 1e-12);
    }
}
