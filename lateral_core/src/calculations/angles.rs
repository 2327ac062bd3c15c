//! # Angle Set
//!
//! The four angles that define a Coulomb wedge behind a wall. They are
//! supplied in degrees and converted once to radians for the trigonometry.
//!
//! ```text
//!            β
//!     ┌────╱────────
//!     │   ╱ backfill
//!   α │  ╱
//!     │ ╱  δ acts along the back face
//!     │╱
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_finite, CalcResult};
use crate::units::{Degrees, Radians};

/// Angles of the wall/backfill system, all in degrees.
///
/// ## JSON Example
///
/// ```json
/// { "phi_k": 35.0, "alpha": 10.0, "beta": 20.0, "delta_a": 23.33 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleSet {
    /// Angle of internal friction of the soil φ
    pub phi_k: f64,

    /// Inclination of the wall back face α
    pub alpha: f64,

    /// Inclination of the backfill surface β
    pub beta: f64,

    /// Wall-friction angle for the active case δ
    pub delta_a: f64,
}

impl AngleSet {
    pub fn new(phi_k: f64, alpha: f64, beta: f64, delta_a: f64) -> Self {
        AngleSet { phi_k, alpha, beta, delta_a }
    }

    /// Build an angle set with δ = ratio · φ (e.g. 2/3 for rough concrete).
    pub fn with_friction_ratio(phi_k: f64, alpha: f64, beta: f64, ratio: f64) -> Self {
        AngleSet::new(phi_k, alpha, beta, ratio * phi_k)
    }

    /// Reject NaN and infinite angles.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_finite("phi_k", self.phi_k)?;
        ensure_finite("alpha", self.alpha)?;
        ensure_finite("beta", self.beta)?;
        ensure_finite("delta_a", self.delta_a)?;
        Ok(())
    }

    pub(crate) fn to_radians(self) -> RadianAngles {
        RadianAngles {
            phi: Radians::from(Degrees(self.phi_k)),
            alpha: Radians::from(Degrees(self.alpha)),
            beta: Radians::from(Degrees(self.beta)),
            delta: Radians::from(Degrees(self.delta_a)),
        }
    }
}

/// Angle set converted to radians.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RadianAngles {
    pub phi: Radians,
    pub alpha: Radians,
    pub beta: Radians,
    pub delta: Radians,
}
