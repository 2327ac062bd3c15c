//! # Earth-Pressure Force Components
//!
//! Splits a known resultant E (kN/m) into horizontal and vertical parts. The
//! resultant acts at (α+δ) to the horizontal: the wall-friction angle δ
//! measured from the normal of a back face inclined at α.
//!
//! ## Example
//!
//! ```rust
//! use lateral_core::calculations::force::compute_force_components;
//!
//! let c = compute_force_components(110.0, 10.0, 24.0);
//! assert!((c.horizontal_kn_m - 91.2).abs() < 0.1);
//! assert!((c.vertical_kn_m - 61.5).abs() < 0.1);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::earth_pressure::force_components;
use crate::units::deg_to_rad;

/// Horizontal/vertical decomposition of a resultant force per unit wall length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceComponents {
    /// Horizontal component E_h (kN/m)
    pub horizontal_kn_m: f64,

    /// Vertical component E_v (kN/m)
    pub vertical_kn_m: f64,
}

impl ForceComponents {
    /// (E_h, E_v)
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.horizontal_kn_m, self.vertical_kn_m)
    }
}

/// Decompose resultant `e_kn_m` for wall inclination `alpha` and wall
/// friction `delta_a`, both in degrees.
pub fn compute_force_components(e_kn_m: f64, alpha: f64, delta_a: f64) -> ForceComponents {
    let (horizontal_kn_m, vertical_kn_m) = force_components(e_kn_m, deg_to_rad(alpha), deg_to_rad(delta_a));
    ForceComponents {
        horizontal_kn_m,
        vertical_kn_m,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_components() {
        let (h, v) = compute_force_components(110.0, 10.0, 24.0).as_tuple();
        assert!((h - 91.2).abs() < 0.1);
        assert!((v - 61.5).abs() < 0.1);
    }

    #[test]
    fn test_smooth_vertical_wall_is_horizontal() {
        let c = compute_force_components(50.0, 0.0, 0.0);
        assert_eq!(c.horizontal_kn_m, 50.0);
        assert_eq!(c.vertical_kn_m, 0.0);
    }

    #[test]
    fn test_magnitude_preserved() {
        let c = compute_force_components(73.4, 5.0, 20.0);
        assert!((c.horizontal_kn_m.hypot(c.vertical_kn_m) - 73.4).abs() < 1e-9);
    }

    #[test]
    fn test_serialization() {
        let c = compute_force_components(110.0, 10.0, 24.0);
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("horizontal_kn_m"));
        let roundtrip: ForceComponents = serde_json::from_str(&json).unwrap();
        assert_eq!(c, roundtrip);
    }
}
