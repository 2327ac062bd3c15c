//! # Retaining-Wall Active Pressure Analysis
//!
//! Runs the full active earth-pressure workflow for one wall:
//!
//! 1. Coulomb active coefficient K_a from φ, α, β, δ
//! 2. Critical slip-plane inclination
//! 3. Soil pressure profile e(z) = γ·z·K_a and its resultant
//! 4. Surcharge profile e_p = p·K_a and its resultant
//! 5. Horizontal/vertical components of each resultant
//!
//! ## Assumptions
//!
//! - Homogeneous, dry, cohesionless backfill
//! - Planar back face and planar backfill surface
//! - Unbounded uniform surcharge (optional)
//!
//! ## Example
//!
//! ```rust
//! use lateral_core::calculations::retaining_wall::{RetainingWallInput, calculate};
//! use lateral_core::settings::CalcSettings;
//!
//! let input = RetainingWallInput {
//!     label: "W-1".to_string(),
//!     phi_k: 30.0,
//!     alpha: 0.0,
//!     beta: 0.0,
//!     delta_a: None, // 2/3 φ from settings
//!     gamma_k: 18.0,
//!     height_m: 5.0,
//!     surcharge_kn_m2: 30.0,
//!     samples: None,
//! };
//!
//! let result = calculate(&input, &CalcSettings::default()).unwrap();
//! assert!((result.k_a - 0.30).abs() < 0.01);
//! assert!((result.surcharge_ordinate_kn_m2 - 8.9).abs() < 0.1);
//! println!("E_h = {:.1} kN/m", result.total_force.components.horizontal_kn_m);
//! ```

use serde::{Deserialize, Serialize};

use super::active_coefficient::{self, CoulombTerms};
use super::angles::AngleSet;
use super::force::{compute_force_components, ForceComponents};
use super::profile::{compute_profile, PressureProfile};
use super::slip_plane;
use super::surcharge::{compute_surcharge_pressure, compute_surcharge_profile};
use crate::equations::registry::{Equation, EquationTracker};
use crate::errors::{ensure_finite, CalcError, CalcResult};
use crate::settings::CalcSettings;

/// Input parameters for a retaining-wall analysis.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "W-1",
///   "phi_k": 35.0,
///   "alpha": 10.0,
///   "beta": 20.0,
///   "delta_a": 23.33,
///   "gamma_k": 20.0,
///   "height_m": 5.0,
///   "surcharge_kn_m2": 10.0,
///   "samples": 51
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetainingWallInput {
    /// User label for this wall (e.g., "W-1", "Basement wall north")
    pub label: String,

    /// Angle of internal friction φ (degrees)
    pub phi_k: f64,

    /// Back-face inclination α (degrees)
    pub alpha: f64,

    /// Backfill slope β (degrees)
    pub beta: f64,

    /// Wall-friction angle δ (degrees). Defaults to ratio · φ from settings.
    #[serde(default)]
    pub delta_a: Option<f64>,

    /// Unit weight of the backfill γ (kN/m³)
    pub gamma_k: f64,

    /// Retained height h (m)
    pub height_m: f64,

    /// Unbounded uniform surcharge p (kN/m²)
    #[serde(default)]
    pub surcharge_kn_m2: f64,

    /// Number of profile samples. Defaults to the settings value.
    #[serde(default)]
    pub samples: Option<usize>,
}

impl RetainingWallInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_finite("gamma_k", self.gamma_k)?;
        ensure_finite("height_m", self.height_m)?;
        ensure_finite("surcharge_kn_m2", self.surcharge_kn_m2)?;
        if self.gamma_k <= 0.0 {
            return Err(CalcError::invalid_input(
                "gamma_k",
                self.gamma_k.to_string(),
                "Unit weight must be positive",
            ));
        }
        if self.height_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "height_m",
                self.height_m.to_string(),
                "Wall height must be positive",
            ));
        }
        if self.surcharge_kn_m2 < 0.0 {
            return Err(CalcError::invalid_input(
                "surcharge_kn_m2",
                self.surcharge_kn_m2.to_string(),
                "Surcharge cannot be negative",
            ));
        }
        Ok(())
    }

    /// Angle set with δ resolved against the settings.
    pub fn angles(&self, settings: &CalcSettings) -> AngleSet {
        match self.delta_a {
            Some(delta_a) => AngleSet::new(self.phi_k, self.alpha, self.beta, delta_a),
            None => AngleSet::with_friction_ratio(self.phi_k, self.alpha, self.beta, settings.wall_friction_ratio),
        }
    }

    /// Sample count with the settings default applied.
    pub fn sample_count(&self, settings: &CalcSettings) -> usize {
        self.samples.unwrap_or(settings.default_profile_samples)
    }
}

/// A resultant force with its components and line of action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResultantForce {
    /// Resultant E per unit wall length (kN/m)
    pub magnitude_kn_m: f64,

    /// Horizontal and vertical components
    pub components: ForceComponents,

    /// Depth of the line of action below the top of the wall (m), if E ≠ 0
    pub depth_of_action_m: Option<f64>,
}

impl ResultantForce {
    fn from_profile(profile: &PressureProfile, angles: &AngleSet) -> Self {
        let magnitude_kn_m = profile.resultant();
        ResultantForce {
            magnitude_kn_m,
            components: compute_force_components(magnitude_kn_m, angles.alpha, angles.delta_a),
            depth_of_action_m: profile.point_of_application(),
        }
    }
}

/// Results from a retaining-wall analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetainingWallResult {
    /// Angles used, with δ resolved
    pub angles: AngleSet,

    /// Active earth-pressure coefficient K_a
    pub k_a: f64,

    /// Intermediate Coulomb terms
    pub coulomb_terms: CoulombTerms,

    /// Critical slip-plane inclination (degrees).
    ///
    /// `None` when the slip-plane formula is undefined for these angles even
    /// though K_a is (e.g. β = φ).
    pub slip_angle_deg: Option<f64>,

    /// Soil pressure ordinate at the base γ·h·K_a (kN/m²)
    pub base_ordinate_kn_m2: f64,

    /// Surcharge pressure ordinate p·K_a (kN/m²)
    pub surcharge_ordinate_kn_m2: f64,

    /// Soil pressure profile
    pub soil_profile: PressureProfile,

    /// Surcharge pressure profile
    pub surcharge_profile: PressureProfile,

    /// Superposed soil + surcharge profile
    pub total_profile: PressureProfile,

    /// Resultant of the soil pressure
    pub soil_force: ResultantForce,

    /// Resultant of the surcharge pressure
    pub surcharge_force: ResultantForce,

    /// Resultant of the total pressure
    pub total_force: ResultantForce,

    /// Equations applied, for the calculation record
    pub equations: EquationTracker,
}

/// Run the active pressure analysis for one wall.
///
/// # Returns
///
/// * `Ok(RetainingWallResult)` - Coefficient, profiles and forces
/// * `Err(CalcError)` - Invalid input or an angle set the Coulomb formula rejects
pub fn calculate(input: &RetainingWallInput, settings: &CalcSettings) -> CalcResult<RetainingWallResult> {
    input.validate()?;
    let angles = input.angles(settings);
    let samples = input.sample_count(settings);
    let mut equations = EquationTracker::new();

    let coefficient = active_coefficient::calculate(&angles, settings)?;
    let k_a = coefficient.k_a;
    equations.record(Equation::CoulombActiveRatio, "Active coefficient");
    equations.record(Equation::CoulombActiveCoefficient, "Active coefficient");

    let slip_angle_deg = match slip_plane::calculate(&angles, settings) {
        Ok(slip) => {
            equations.record(Equation::SlipPlaneRatio, "Critical slip plane");
            equations.record(Equation::SlipPlaneAngle, "Critical slip plane");
            Some(slip.slip_angle_deg)
        }
        Err(err) => {
            tracing::warn!(label = %input.label, error = %err, "slip-plane angle undefined");
            None
        }
    };

    let soil_profile = compute_profile(input.gamma_k, input.height_m, samples, k_a)?;
    equations.record(Equation::PressureOrdinate, "Soil pressure profile");

    let surcharge_profile = compute_surcharge_profile(input.surcharge_kn_m2, input.height_m, samples, k_a)?;
    equations.record(Equation::SurchargeOrdinate, "Surcharge pressure profile");

    let total_profile = soil_profile.superpose(&surcharge_profile)?;

    let soil_force = ResultantForce::from_profile(&soil_profile, &angles);
    let surcharge_force = ResultantForce::from_profile(&surcharge_profile, &angles);
    let total_force = ResultantForce::from_profile(&total_profile, &angles);
    equations.record(Equation::ProfileResultant, "Soil, surcharge and total resultants");
    equations.record(Equation::ForceComponents, "Soil, surcharge and total resultants");

    tracing::debug!(
        label = %input.label,
        k_a,
        total_force_kn_m = total_force.magnitude_kn_m,
        "retaining-wall analysis complete"
    );

    Ok(RetainingWallResult {
        angles,
        k_a,
        coulomb_terms: coefficient.terms,
        slip_angle_deg,
        base_ordinate_kn_m2: soil_profile.max_ordinate(),
        surcharge_ordinate_kn_m2: compute_surcharge_pressure(input.surcharge_kn_m2, k_a),
        soil_profile,
        surcharge_profile,
        total_profile,
        soil_force,
        surcharge_force,
        total_force,
        equations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::registry::EquationCategory;

    fn test_wall() -> RetainingWallInput {
        RetainingWallInput {
            label: "Test Wall".to_string(),
            phi_k: 35.0,
            alpha: 10.0,
            beta: 20.0,
            delta_a: Some(23.33),
            gamma_k: 20.0,
            height_m: 5.0,
            surcharge_kn_m2: 0.0,
            samples: Some(50),
        }
    }

    #[test]
    fn test_reference_wall() {
        let result = calculate(&test_wall(), &CalcSettings::default()).unwrap();

        assert!((result.k_a - 0.44).abs() < 0.01);
        assert!((result.base_ordinate_kn_m2 - 44.0).abs() < 0.1);
        assert!((result.slip_angle_deg.unwrap() - 55.8).abs() < 0.1);
        assert_eq!(result.soil_profile.len(), 50);

        // E = ½·γ·h²·K ≈ 110 kN/m
        assert!((result.soil_force.magnitude_kn_m - 110.0).abs() < 0.1);
        assert!((result.soil_force.components.horizontal_kn_m - 92.0).abs() < 0.5);
        assert_eq!(result.surcharge_force.magnitude_kn_m, 0.0);
        assert!(result.surcharge_force.depth_of_action_m.is_none());
    }

    #[test]
    fn test_default_wall_friction() {
        let mut wall = test_wall();
        wall.delta_a = None;
        let result = calculate(&wall, &CalcSettings::default()).unwrap();
        assert!((result.angles.delta_a - 35.0 * 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_default_samples() {
        let mut wall = test_wall();
        wall.samples = None;
        let settings = CalcSettings {
            default_profile_samples: 11,
            ..CalcSettings::default()
        };
        let result = calculate(&wall, &settings).unwrap();
        assert_eq!(result.total_profile.len(), 11);
    }

    #[test]
    fn test_surcharge_superposition() {
        let wall = RetainingWallInput {
            label: "Surcharged".to_string(),
            phi_k: 30.0,
            alpha: 0.0,
            beta: 0.0,
            delta_a: Some(20.0),
            gamma_k: 18.0,
            height_m: 5.0,
            surcharge_kn_m2: 30.0,
            samples: Some(21),
        };
        let result = calculate(&wall, &CalcSettings::default()).unwrap();
        let k = result.k_a;

        assert!((result.surcharge_ordinate_kn_m2 - 30.0 * k).abs() < 1e-12);
        assert!((result.surcharge_force.magnitude_kn_m - 30.0 * k * 5.0).abs() < 1e-9);
        assert!(
            (result.total_force.magnitude_kn_m
                - (result.soil_force.magnitude_kn_m + result.surcharge_force.magnitude_kn_m))
                .abs()
                < 1e-9
        );
        // Surcharge acts at mid-height, soil at 2/3 h: the total lies between
        let z = result.total_force.depth_of_action_m.unwrap();
        assert!(z > 2.5 && z < 10.0 / 3.0);
    }

    #[test]
    fn test_slip_plane_undefined_does_not_fail() {
        let mut wall = test_wall();
        wall.beta = 35.0;
        let result = calculate(&wall, &CalcSettings::default()).unwrap();
        assert!(result.slip_angle_deg.is_none());
        assert!(result.k_a > 0.0);
        assert!(!result.equations.unique_equations().contains(&Equation::SlipPlaneAngle));
    }

    #[test]
    fn test_coulomb_rejection_propagates() {
        let mut wall = test_wall();
        wall.beta = 40.0;
        let err = calculate(&wall, &CalcSettings::default()).unwrap_err();
        assert!(err.is_coulomb_rejection());
    }

    #[test]
    fn test_invalid_height() {
        let mut wall = test_wall();
        wall.height_m = -5.0;
        let err = calculate(&wall, &CalcSettings::default()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_invalid_surcharge() {
        let mut wall = test_wall();
        wall.surcharge_kn_m2 = -1.0;
        assert!(calculate(&wall, &CalcSettings::default()).is_err());
    }

    #[test]
    fn test_equations_recorded() {
        let result = calculate(&test_wall(), &CalcSettings::default()).unwrap();
        let used = result.equations.unique_equations();
        assert!(used.contains(&Equation::CoulombActiveCoefficient));
        assert!(used.contains(&Equation::SlipPlaneAngle));
        assert!(used.contains(&Equation::ForceComponents));

        let grouped = result.equations.by_category();
        assert_eq!(grouped.len(), 4);
        assert_eq!(grouped[0].0, EquationCategory::Coefficients);
        assert_eq!(grouped[3].1, vec![Equation::ProfileResultant, Equation::ForceComponents]);
    }

    #[test]
    fn test_input_json_defaults() {
        let json = r#"{
            "label": "W-2",
            "phi_k": 30.0,
            "alpha": 0.0,
            "beta": 0.0,
            "gamma_k": 18.0,
            "height_m": 4.0
        }"#;
        let input: RetainingWallInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.delta_a, None);
        assert_eq!(input.surcharge_kn_m2, 0.0);
        assert_eq!(input.samples, None);
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&test_wall(), &CalcSettings::default()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("k_a"));
        assert!(json.contains("soil_profile"));
        assert!(json.contains("horizontal_kn_m"));

        let roundtrip: RetainingWallResult = serde_json::from_str(&json).unwrap();
        assert!((roundtrip.k_a - result.k_a).abs() < 1e-12);
    }
}
