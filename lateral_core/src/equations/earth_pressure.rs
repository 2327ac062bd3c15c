//! # Coulomb Earth-Pressure Formulas
//!
//! Closed-form expressions for active lateral earth pressure on a retaining
//! wall with a planar back face and a planar backfill surface. These functions
//! evaluate the raw formulas only; validation of the angle combination lives in
//! [`crate::calculations`].
//!
//! ## Notation
//!
//! - `φ` = Angle of internal friction of the soil
//! - `α` = Inclination of the wall back face (from vertical)
//! - `β` = Inclination of the backfill surface (from horizontal)
//! - `δ` = Wall-friction angle (active case)
//! - `K` = Active earth-pressure coefficient (dimensionless)
//! - `γ` = Unit weight of the soil
//! - `z` = Depth below the top of the wall
//! - `p` = Unbounded uniform surcharge
//!
//! All angle arguments to these functions are in **radians**.
//!
//! ## Sign Conventions
//!
//! - `α` positive when the back face leans away from the backfill
//! - `β` positive when the backfill rises away from the wall
//! - `δ` positive for the active case (soil slides down the wall)
//!
//! ## References
//!
//! - DIN 4085:2017-08, Baugrund - Berechnung des Erddrucks
//! - EAB, Empfehlungen des Arbeitskreises "Baugruben", 5th Edition

// =============================================================================
// COULOMB ACTIVE COEFFICIENT
// =============================================================================

/// Ratio under the square root of the Coulomb active coefficient
///
/// # Formula
/// R = sin(φ+δ)·sin(φ−β) / (cos(α+δ)·cos(α−β))
#[inline]
pub fn coulomb_active_ratio(phi: f64, alpha: f64, beta: f64, delta: f64) -> f64 {
    ((phi + delta).sin() * (phi - beta).sin()) / ((alpha + delta).cos() * (alpha - beta).cos())
}

/// Coulomb active earth-pressure coefficient from a precomputed ratio
///
/// ```text
///   ╲ β
///    ╲────────
///    │╲
///  α │ ╲ slip plane
///    │  ╲
///    │   ╲
/// ```
///
/// # Formula
/// K = cos²(φ−α) / [cos²(α)·cos(α+δ)·(1 + √R)²]
///
/// # Example
/// ```rust
/// use lateral_core::equations::earth_pressure::{coulomb_active_coefficient, coulomb_active_ratio};
///
/// // Smooth vertical wall, level backfill, φ = 30°: Rankine K = 1/3
/// let phi = 30f64.to_radians();
/// let r = coulomb_active_ratio(phi, 0.0, 0.0, 0.0);
/// let k = coulomb_active_coefficient(phi, 0.0, 0.0, r);
/// assert!((k - 1.0 / 3.0).abs() < 1e-9);
/// ```
#[inline]
pub fn coulomb_active_coefficient(phi: f64, alpha: f64, delta: f64, ratio: f64) -> f64 {
    (phi - alpha).cos().powi(2) / (alpha.cos().powi(2) * (alpha + delta).cos() * (1.0 + ratio.sqrt()).powi(2))
}

// =============================================================================
// CRITICAL SLIP PLANE
// =============================================================================

/// Ratio under the square root of the slip-plane formula
///
/// # Formula
/// R' = sin(φ+δ)·cos(α−β) / (sin(φ−β)·cos(α+δ))
#[inline]
pub fn slip_plane_ratio(phi: f64, alpha: f64, beta: f64, delta: f64) -> f64 {
    ((phi + delta).sin() * (alpha - beta).cos()) / ((phi - beta).sin() * (alpha + delta).cos())
}

/// Denominator of the arctangent argument in the slip-plane formula
///
/// # Formula
/// sin(φ−α) + √R'
#[inline]
pub fn slip_plane_denominator(phi: f64, alpha: f64, ratio: f64) -> f64 {
    (phi - alpha).sin() + ratio.sqrt()
}

/// Inclination of the critical slip surface, in radians
///
/// # Formula
/// ϑ = φ + atan( cos(φ−α) / (sin(φ−α) + √R') )
///
/// For a smooth vertical wall with level backfill this reduces to the
/// Rankine value 45° + φ/2.
#[inline]
pub fn slip_plane_angle(phi: f64, alpha: f64, ratio: f64) -> f64 {
    phi + ((phi - alpha).cos() / slip_plane_denominator(phi, alpha, ratio)).atan()
}

// =============================================================================
// PRESSURE ORDINATES AND FORCES
// =============================================================================

/// Earth-pressure ordinate at depth z
///
/// # Formula
/// e = γ·z·K
#[inline]
pub fn pressure_ordinate(gamma: f64, depth: f64, k: f64) -> f64 {
    gamma * depth * k
}

/// Pressure ordinate from an unbounded uniform surcharge
///
/// # Formula
/// e_p = p·K (constant with depth)
#[inline]
pub fn surcharge_ordinate(p: f64, k: f64) -> f64 {
    p * k
}

/// Horizontal and vertical components of a resultant force
///
/// The resultant is inclined at (α+δ) to the horizontal.
///
/// # Formulas
/// - E_h = E·cos(α+δ)
/// - E_v = E·sin(α+δ)
///
/// # Returns
/// (E_h, E_v)
#[inline]
pub fn force_components(force: f64, alpha: f64, delta: f64) -> (f64, f64) {
    let inclination = alpha + delta;
    (force * inclination.cos(), force * inclination.sin())
}
