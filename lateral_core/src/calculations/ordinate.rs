//! # Earth-Pressure Ordinate
//!
//! Lateral pressure from the soil's self-weight at one depth:
//! `e = γ · z · K`. The coefficient may be the Coulomb active value or any
//! other lateral coefficient (at-rest, passive, user supplied).
//!
//! This is the pointwise law sampled by [`super::profile`].

use crate::equations::earth_pressure::pressure_ordinate;

/// Pressure ordinate e in kN/m² at depth `depth_m` for unit weight
/// `gamma_k` (kN/m³) and coefficient `k`.
///
/// Always defined for finite inputs.
///
/// ```rust
/// use lateral_core::calculations::ordinate::compute_ordinate;
///
/// let e = compute_ordinate(20.0, 5.0, 0.44);
/// assert!((e - 44.0).abs() < 0.1);
/// ```
pub fn compute_ordinate(gamma_k: f64, depth_m: f64, k: f64) -> f64 {
    pressure_ordinate(gamma_k, depth_m, k)
}
