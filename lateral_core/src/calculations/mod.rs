//! # Earth-Pressure Calculations
//!
//! This module contains all earth-pressure calculation types. Calculations
//! that can reject their input follow the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input, settings) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! Each component also exposes a plain `compute_*` function taking scalars in
//! degrees and SI units.
//!
//! ## Available Calculations
//!
//! - [`active_coefficient`] - Coulomb active coefficient K_a
//! - [`slip_plane`] - Critical slip-plane inclination
//! - [`ordinate`] - Pressure ordinate at one depth
//! - [`profile`] - Pressure distribution over the wall height
//! - [`force`] - Horizontal/vertical components of a resultant
//! - [`surcharge`] - Pressure from an unbounded uniform surcharge
//! - [`retaining_wall`] - All of the above for one wall

pub mod active_coefficient;
pub mod angles;
pub mod force;
pub mod ordinate;
pub mod profile;
pub mod retaining_wall;
pub mod slip_plane;
pub mod surcharge;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::settings::CalcSettings;

// Re-export commonly used types
pub use active_coefficient::{compute_active_coefficient, ActiveCoefficientResult, CoulombTerms};
pub use angles::AngleSet;
pub use force::{compute_force_components, ForceComponents};
pub use ordinate::compute_ordinate;
pub use profile::{compute_profile, PressureProfile, ProfilePoint};
pub use retaining_wall::{RetainingWallInput, RetainingWallResult};
pub use slip_plane::{compute_slip_angle, SlipPlaneResult};
pub use surcharge::{compute_surcharge_pressure, compute_surcharge_profile};

/// Labelled angle set, the input of the coefficient and slip-plane calculations.
///
/// ## JSON Example
///
/// ```json
/// { "label": "Backfill A", "phi_k": 35.0, "alpha": 10.0, "beta": 20.0, "delta_a": 23.33 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoulombInput {
    /// User label
    pub label: String,

    #[serde(flatten)]
    pub angles: AngleSet,
}

/// Enum wrapper for all calculation types.
///
/// This allows storing heterogeneous calculations in a single collection
/// while maintaining type safety and clean serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Active earth-pressure coefficient only
    ActiveCoefficient(CoulombInput),
    /// Critical slip-plane inclination only
    SlipPlane(CoulombInput),
    /// Full retaining-wall analysis
    RetainingWall(RetainingWallInput),
}

/// Output of [`CalculationItem::run`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    ActiveCoefficient(ActiveCoefficientResult),
    SlipPlane(SlipPlaneResult),
    RetainingWall(Box<RetainingWallResult>),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::ActiveCoefficient(c) => &c.label,
            CalculationItem::SlipPlane(c) => &c.label,
            CalculationItem::RetainingWall(w) => &w.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::ActiveCoefficient(_) => "ActiveCoefficient",
            CalculationItem::SlipPlane(_) => "SlipPlane",
            CalculationItem::RetainingWall(_) => "RetainingWall",
        }
    }

    /// Run the calculation this item describes.
    pub fn run(&self, settings: &CalcSettings) -> CalcResult<CalculationOutput> {
        tracing::debug!(label = self.label(), calc_type = self.calc_type(), "running calculation");
        match self {
            CalculationItem::ActiveCoefficient(c) => {
                active_coefficient::calculate(&c.angles, settings).map(CalculationOutput::ActiveCoefficient)
            }
            CalculationItem::SlipPlane(c) => {
                slip_plane::calculate(&c.angles, settings).map(CalculationOutput::SlipPlane)
            }
            CalculationItem::RetainingWall(w) => {
                retaining_wall::calculate(w, settings).map(|r| CalculationOutput::RetainingWall(Box::new(r)))
            }
        }
    }
}
