//! # Unbounded Uniform Surcharge
//!
//! A uniform load p spread over the whole backfill surface adds a lateral
//! ordinate `e_p = p · K` that is constant over the wall height. Its
//! resultant is `p · K · h`, acting at mid-height.

use super::profile::PressureProfile;
use crate::equations::earth_pressure::surcharge_ordinate;
use crate::errors::{ensure_finite, CalcResult};

/// Additional pressure ordinate (kN/m²) from surcharge `p` (kN/m²).
///
/// ```rust
/// use lateral_core::calculations::surcharge::compute_surcharge_pressure;
///
/// assert!((compute_surcharge_pressure(30.0, 0.3) - 9.0).abs() < 1e-12);
/// ```
pub fn compute_surcharge_pressure(p: f64, k: f64) -> f64 {
    surcharge_ordinate(p, k)
}

/// Surcharge ordinate sampled at `samples` depths over [0, height].
pub fn compute_surcharge_profile(p: f64, height_m: f64, samples: usize, k: f64) -> CalcResult<PressureProfile> {
    ensure_finite("surcharge_kn_m2", p)?;
    ensure_finite("k", k)?;
    let e_p = surcharge_ordinate(p, k);
    let profile = PressureProfile::sample(height_m, samples, |_| e_p)?;
    tracing::debug!(p, height_m, samples, k, e_p, "sampled surcharge profile");
    Ok(profile)
}
