//! # Earth-Pressure Profile
//!
//! Samples a pressure law over the wall height at evenly spaced depths,
//! top (z = 0) and base (z = h) included.
//!
//! The sample count is an arity, not a spacing: a caller that wants a
//! physical step `Δz` must pass `n = h/Δz + 1`.
//!
//! ## Example
//!
//! ```rust
//! use lateral_core::calculations::profile::compute_profile;
//!
//! let profile = compute_profile(20.0, 5.0, 51, 0.44).unwrap();
//! assert_eq!(profile.len(), 51);
//! assert!((profile.max_ordinate() - 44.0).abs() < 0.1);
//! // ½·γ·h²·K
//! assert!((profile.resultant() - 110.0).abs() < 0.1);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_finite, CalcError, CalcResult};
use crate::equations::earth_pressure::pressure_ordinate;

/// One sample of a pressure profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfilePoint {
    /// Depth below the top of the wall (m)
    pub depth_m: f64,

    /// Pressure ordinate at this depth (kN/m²)
    pub ordinate_kn_m2: f64,
}

/// Pressure distribution over the wall height.
///
/// Depths are non-decreasing from 0 to h.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressureProfile {
    points: Vec<ProfilePoint>,
}

impl PressureProfile {
    /// Evaluate `law` at `samples` evenly spaced depths over [0, height].
    pub fn sample<F>(height_m: f64, samples: usize, law: F) -> CalcResult<Self>
    where
        F: Fn(f64) -> f64,
    {
        let points = sample_depths(height_m, samples)?
            .into_iter()
            .map(|depth_m| ProfilePoint {
                depth_m,
                ordinate_kn_m2: law(depth_m),
            })
            .collect();
        Ok(PressureProfile { points })
    }

    pub fn points(&self) -> &[ProfilePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProfilePoint> {
        self.points.iter()
    }

    pub fn depths(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.depth_m).collect()
    }

    pub fn ordinates(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.ordinate_kn_m2).collect()
    }

    /// Total height covered by the profile (m)
    pub fn height_m(&self) -> f64 {
        self.points.last().map_or(0.0, |p| p.depth_m)
    }

    /// Largest ordinate along the profile (kN/m²)
    pub fn max_ordinate(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.ordinate_kn_m2)
            .fold(0.0, f64::max)
    }

    /// Resultant force per unit wall length (kN/m), trapezoidal rule.
    ///
    /// Exact for the piecewise-linear laws produced in this crate.
    pub fn resultant(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| 0.5 * (w[0].ordinate_kn_m2 + w[1].ordinate_kn_m2) * (w[1].depth_m - w[0].depth_m))
            .sum()
    }

    /// Depth of the resultant's line of action below the top of the wall (m).
    ///
    /// Returns `None` when the resultant is zero.
    pub fn point_of_application(&self) -> Option<f64> {
        let resultant = self.resultant();
        if resultant.abs() < f64::EPSILON {
            return None;
        }
        // First moment about the top, exact per linear segment
        let moment: f64 = self
            .points
            .windows(2)
            .map(|w| {
                let (z0, e0) = (w[0].depth_m, w[0].ordinate_kn_m2);
                let (z1, e1) = (w[1].depth_m, w[1].ordinate_kn_m2);
                (z1 - z0) * (e0 * (2.0 * z0 + z1) + e1 * (z0 + 2.0 * z1)) / 6.0
            })
            .sum();
        Some(moment / resultant)
    }

    /// Sum two profiles sampled on the same depths.
    pub fn superpose(&self, other: &PressureProfile) -> CalcResult<PressureProfile> {
        if self.len() != other.len()
            || self
                .points
                .iter()
                .zip(&other.points)
                .any(|(a, b)| (a.depth_m - b.depth_m).abs() > 1e-9)
        {
            return Err(CalcError::invalid_input(
                "profile",
                format!("{} vs {} samples", self.len(), other.len()),
                "Profiles must share the same depth samples",
            ));
        }
        let points = self
            .points
            .iter()
            .zip(&other.points)
            .map(|(a, b)| ProfilePoint {
                depth_m: a.depth_m,
                ordinate_kn_m2: a.ordinate_kn_m2 + b.ordinate_kn_m2,
            })
            .collect();
        Ok(PressureProfile { points })
    }
}

impl<'a> IntoIterator for &'a PressureProfile {
    type Item = &'a ProfilePoint;
    type IntoIter = std::slice::Iter<'a, ProfilePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// `samples` evenly spaced depths over [0, height], both ends included.
///
/// The last depth equals `height_m` exactly.
pub fn sample_depths(height_m: f64, samples: usize) -> CalcResult<Vec<f64>> {
    ensure_finite("height_m", height_m)?;
    if height_m < 0.0 {
        return Err(CalcError::invalid_input(
            "height_m",
            height_m.to_string(),
            "Height cannot be negative",
        ));
    }
    if samples < 2 {
        return Err(CalcError::invalid_input(
            "samples",
            samples.to_string(),
            "A profile needs at least 2 samples to span top and base",
        ));
    }
    let last = (samples - 1) as f64;
    Ok((0..samples).map(|i| height_m * (i as f64 / last)).collect())
}

/// Soil pressure profile e(z) = γ·z·K sampled at `samples` depths.
///
/// `samples` must be at least 2 so the profile includes both the top (z = 0)
/// and the base (z = h); fewer returns `InvalidInput`. The result holds
/// exactly `samples` points.
pub fn compute_profile(gamma_k: f64, height_m: f64, samples: usize, k: f64) -> CalcResult<PressureProfile> {
    ensure_finite("gamma_k", gamma_k)?;
    ensure_finite("k", k)?;
    let profile = PressureProfile::sample(height_m, samples, |z| pressure_ordinate(gamma_k, z, k))?;
    tracing::debug!(gamma_k, height_m, samples, k, "sampled earth-pressure profile");
    Ok(profile)
}
