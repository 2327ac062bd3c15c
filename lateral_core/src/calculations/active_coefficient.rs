//! # Active Earth-Pressure Coefficient
//!
//! Coulomb active coefficient K for a planar wall back face and a planar
//! backfill surface.
//!
//! ## Formula
//!
//! ```text
//! K = cos²(φ−α) / [ cos²(α) · cos(α+δ) · (1 + √R)² ]
//! R = [ sin(φ+δ) · sin(φ−β) ] / [ cos(α+δ) · cos(α−β) ]
//! ```
//!
//! ## Validity
//!
//! Checked in order:
//! 1. `cos(α+δ)` and `cos(α−β)` must not vanish, else [`DivisionByZero`](crate::errors::CalcError::DivisionByZero)
//! 2. `R` must be non-negative, else [`DomainError`](crate::errors::CalcError::DomainError)
//! 3. `cos(α)` must not vanish (horizontal back face), else `DivisionByZero`
//! 4. `cos²(α)·cos(α+δ)` must be non-negative, else `DomainError`
//!
//! A negative `R` typically means the backfill is steeper than the friction
//! angle (β > φ), for which no active wedge exists. Check 4 catches α+δ > 90°
//! with cos(α−β) also negative: R is then positive but K would be negative.
//!
//! ## Example
//!
//! ```rust
//! use lateral_core::calculations::active_coefficient::compute_active_coefficient;
//!
//! // Wall inclined 10°, backfill 20°, φ = 35°, δ = 2/3 φ
//! let k = compute_active_coefficient(35.0, 10.0, 20.0, 23.33).unwrap();
//! assert!((k - 0.44).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};

use super::angles::AngleSet;
use crate::equations::earth_pressure::{coulomb_active_coefficient, coulomb_active_ratio};
use crate::errors::{ensure_non_negative, ensure_nonzero, CalcResult};
use crate::settings::CalcSettings;

/// Intermediate trigonometric terms of the Coulomb coefficient.
///
/// Exposed so hand calculations can be checked term by term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoulombTerms {
    /// cos²(φ−α)
    pub cos2_phi_minus_alpha: f64,
    /// cos²(α)
    pub cos2_alpha: f64,
    /// cos(α+δ)
    pub cos_alpha_plus_delta: f64,
    /// sin(φ+δ)
    pub sin_phi_plus_delta: f64,
    /// sin(φ−β)
    pub sin_phi_minus_beta: f64,
    /// cos(α−β)
    pub cos_alpha_minus_beta: f64,
    /// R, the ratio under the square root
    pub ratio: f64,
    /// √R
    pub sqrt_ratio: f64,
}

/// Results from the active coefficient calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "angles": { "phi_k": 35.0, "alpha": 10.0, "beta": 20.0, "delta_a": 23.33 },
///   "k_a": 0.4402,
///   "terms": { "cos2_phi_minus_alpha": 0.8214, "ratio": 0.2677, "...": "..." }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActiveCoefficientResult {
    /// The angles the coefficient was computed from
    pub angles: AngleSet,

    /// Active earth-pressure coefficient K_a (dimensionless)
    pub k_a: f64,

    /// Intermediate terms for inspection
    pub terms: CoulombTerms,
}

/// Calculate the Coulomb active coefficient for an angle set.
///
/// # Arguments
///
/// * `angles` - φ, α, β, δ in degrees
/// * `settings` - supplies the zero tolerance for denominators
///
/// # Returns
///
/// * `Ok(ActiveCoefficientResult)` - K_a with its intermediate terms
/// * `Err(CalcError)` - DivisionByZero, DomainError or InvalidInput
pub fn calculate(angles: &AngleSet, settings: &CalcSettings) -> CalcResult<ActiveCoefficientResult> {
    angles.validate()?;
    let rad = angles.to_radians();
    let tolerance = settings.zero_tolerance;

    let cos_alpha_plus_delta = (rad.alpha + rad.delta).cos();
    let cos_alpha_minus_beta = (rad.alpha - rad.beta).cos();
    ensure_nonzero("cos(α+δ)", cos_alpha_plus_delta, tolerance)?;
    ensure_nonzero("cos(α−β)", cos_alpha_minus_beta, tolerance)?;

    let ratio = coulomb_active_ratio(rad.phi.0, rad.alpha.0, rad.beta.0, rad.delta.0);
    ensure_non_negative("R = sin(φ+δ)·sin(φ−β) / (cos(α+δ)·cos(α−β))", ratio)?;

    // A horizontal back face (α = ±90°) leaves cos²(α) as the only vanishing factor
    ensure_nonzero("cos(α)", rad.alpha.cos(), tolerance)?;
    ensure_non_negative("cos²(α)·cos(α+δ)", rad.alpha.cos().powi(2) * cos_alpha_plus_delta)?;
    let k_a = coulomb_active_coefficient(rad.phi.0, rad.alpha.0, rad.delta.0, ratio);

    let terms = CoulombTerms {
        cos2_phi_minus_alpha: (rad.phi - rad.alpha).cos().powi(2),
        cos2_alpha: rad.alpha.cos().powi(2),
        cos_alpha_plus_delta,
        sin_phi_plus_delta: (rad.phi + rad.delta).sin(),
        sin_phi_minus_beta: (rad.phi - rad.beta).sin(),
        cos_alpha_minus_beta,
        ratio,
        sqrt_ratio: ratio.sqrt(),
    };

    tracing::debug!(?angles, k_a, ratio, "computed active earth-pressure coefficient");

    Ok(ActiveCoefficientResult {
        angles: *angles,
        k_a,
        terms,
    })
}

/// Coulomb active coefficient K from φ, α, β, δ in degrees.
pub fn compute_active_coefficient(phi_k: f64, alpha: f64, beta: f64, delta_a: f64) -> CalcResult<f64> {
    let angles = AngleSet::new(phi_k, alpha, beta, delta_a);
    calculate(&angles, &CalcSettings::default()).map(|r| r.k_a)
}
