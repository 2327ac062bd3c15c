//! # Earth-Pressure Equations
//!
//! This module contains the closed-form earth-pressure equations used in
//! calculations. Having them in one place enables:
//! - Easy verification against references (DIN 4085, EAB)
//! - Documentation of sign conventions
//! - Consistent implementation across calculation types
//!
//! ## Modules
//!
//! - [`earth_pressure`] - Coulomb coefficient, slip plane, ordinates, forces
//! - [`registry`] - Equation metadata and usage tracking
//!
//! ## Units
//!
//! Functions in [`earth_pressure`] take angles in radians. The public
//! calculation API in [`crate::calculations`] takes degrees.

pub mod earth_pressure;
pub mod registry;

pub use earth_pressure::{
    coulomb_active_coefficient,
    coulomb_active_ratio,
    force_components,
    pressure_ordinate,
    slip_plane_angle,
    slip_plane_denominator,
    slip_plane_ratio,
    surcharge_ordinate,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    EquationTracker,
    EquationUsage,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
