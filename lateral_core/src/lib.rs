//! # lateral_core - Lateral Earth-Pressure Calculation Engine
//!
//! `lateral_core` is the computational heart of Lateral, providing classical
//! (Coulomb) earth-pressure calculations for retaining-wall design. All inputs
//! and outputs are JSON-serializable so a web form, CLI or script can drive it.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Degenerate angle combinations are reported, never turned into NaN or infinity
//! - **Degrees at the boundary**: Radians only inside the trigonometry
//!
//! ## Quick Start
//!
//! ```rust
//! use lateral_core::{compute_active_coefficient, compute_ordinate, compute_force_components};
//!
//! // φ = 35°, α = 10°, β = 20°, δ = 2/3 φ
//! let k = compute_active_coefficient(35.0, 10.0, 20.0, 23.33).unwrap();
//!
//! // Ordinate at the base of a 5 m wall, γ = 20 kN/m³
//! let e = compute_ordinate(20.0, 5.0, k);
//! assert!((e - 44.0).abs() < 0.1);
//!
//! // Components of E = 110 kN/m
//! let c = compute_force_components(110.0, 10.0, 24.0);
//! assert!((c.horizontal_kn_m - 91.2).abs() < 0.1);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Coefficient, slip plane, ordinates, profiles, forces, wall analysis
//! - [`equations`] - Raw formulas and the equation registry
//! - [`units`] - Type-safe unit wrappers and degree/radian conversion
//! - [`settings`] - Calculation defaults and tolerances
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    compute_active_coefficient,
    compute_force_components,
    compute_ordinate,
    compute_profile,
    compute_slip_angle,
    compute_surcharge_pressure,
    compute_surcharge_profile,
    AngleSet,
    CalculationItem,
    CalculationOutput,
    ForceComponents,
    PressureProfile,
};
pub use errors::{CalcError, CalcResult};
pub use settings::CalcSettings;
