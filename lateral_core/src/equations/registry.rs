//! # Equation Registry
//!
//! Central registry of the earth-pressure equations used in calculations.
//! Each equation has metadata including its reference, formula and variable
//! definitions.
//!
//! ## Architecture
//!
//! The registry provides:
//! - Type-safe equation identification via the `Equation` enum
//! - Full metadata for reports and audit trails
//! - Usage tracking so a calculation can report which formulas it applied
//!
//! ## Usage
//!
//! ```rust
//! use lateral_core::equations::registry::{Equation, EquationTracker};
//!
//! let mut tracker = EquationTracker::new();
//! tracker.record(Equation::CoulombActiveCoefficient, "Backfill");
//!
//! let meta = Equation::CoulombActiveCoefficient.metadata();
//! println!("Formula: {}", meta.formula_plain);
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to a standard or theory an equation is taken from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum CodeReference {
    /// DIN 4085 - Calculation of earth pressure
    Din4085 { year: u16 },
    /// EAB - Recommendations on excavations
    Eab { edition: u8 },
    /// Coulomb's wedge theory (1776)
    Coulomb,
    /// Fundamental mechanics (no specific code reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Din4085 { year } => format!("DIN 4085:{}", year),
            CodeReference::Eab { edition } => format!("EAB {}ed", edition),
            CodeReference::Coulomb => "Coulomb wedge theory".to_string(),
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for organizing equations in the reference document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Earth-pressure coefficients
    Coefficients,
    /// Critical slip surface
    SlipSurface,
    /// Pressure ordinates at a depth
    Ordinates,
    /// Resultant forces and their components
    Resultants,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::Coefficients => "Earth-Pressure Coefficients",
            EquationCategory::SlipSurface => "Slip Surface",
            EquationCategory::Ordinates => "Pressure Ordinates",
            EquationCategory::Resultants => "Resultant Forces",
        }
    }

    /// Sort order in the reference document (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::Coefficients => 1,
            EquationCategory::SlipSurface => 2,
            EquationCategory::Ordinates => 3,
            EquationCategory::Resultants => 4,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "φ", "K", "e")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "°", "kN/m²", "-")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for an earth-pressure equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Code/standard reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Validity conditions checked before evaluation
    pub preconditions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All earth-pressure equations used in Lateral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    /// R = sin(φ+δ)·sin(φ−β) / (cos(α+δ)·cos(α−β))
    CoulombActiveRatio,
    /// K = cos²(φ−α) / [cos²α·cos(α+δ)·(1+√R)²]
    CoulombActiveCoefficient,
    /// R' = sin(φ+δ)·cos(α−β) / (sin(φ−β)·cos(α+δ))
    SlipPlaneRatio,
    /// ϑ = φ + atan(cos(φ−α) / (sin(φ−α)+√R'))
    SlipPlaneAngle,
    /// e = γ·z·K
    PressureOrdinate,
    /// e_p = p·K
    SurchargeOrdinate,
    /// E = ∫ e dz (trapezoidal rule over the sampled profile)
    ProfileResultant,
    /// E_h = E·cos(α+δ), E_v = E·sin(α+δ)
    ForceComponents,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::CoulombActiveRatio => EquationMetadata {
                name: "Coulomb Radicand",
                description: "Ratio under the square root of the Coulomb active coefficient",
                formula_plain: "R = sin(phi+delta)*sin(phi-beta) / (cos(alpha+delta)*cos(alpha-beta))",
                reference: CodeReference::Coulomb,
                variables: vec![
                    Variable::new("φ", "Angle of internal friction", "°"),
                    Variable::new("α", "Wall back-face inclination", "°"),
                    Variable::new("β", "Backfill slope", "°"),
                    Variable::new("δ", "Wall-friction angle", "°"),
                ],
                preconditions: vec!["cos(α+δ) ≠ 0", "cos(α−β) ≠ 0", "R ≥ 0"],
                category: EquationCategory::Coefficients,
                source_module: "equations/earth_pressure.rs",
                source_function: "coulomb_active_ratio",
            },

            Equation::CoulombActiveCoefficient => EquationMetadata {
                name: "Active Earth-Pressure Coefficient",
                description: "Coulomb active coefficient for a planar wall and planar backfill",
                formula_plain: "K = cos^2(phi-alpha) / (cos^2(alpha)*cos(alpha+delta)*(1+sqrt(R))^2)",
                reference: CodeReference::Din4085 { year: 2017 },
                variables: vec![
                    Variable::new("K", "Active earth-pressure coefficient", "-"),
                    Variable::new("R", "Coulomb radicand", "-"),
                ],
                preconditions: vec!["R ≥ 0"],
                category: EquationCategory::Coefficients,
                source_module: "equations/earth_pressure.rs",
                source_function: "coulomb_active_coefficient",
            },

            Equation::SlipPlaneRatio => EquationMetadata {
                name: "Slip-Plane Radicand",
                description: "Ratio under the square root of the slip-plane formula",
                formula_plain: "R' = sin(phi+delta)*cos(alpha-beta) / (sin(phi-beta)*cos(alpha+delta))",
                reference: CodeReference::Coulomb,
                variables: vec![
                    Variable::new("R'", "Slip-plane radicand", "-"),
                ],
                preconditions: vec!["sin(φ−β) ≠ 0", "cos(α+δ) ≠ 0", "R' ≥ 0"],
                category: EquationCategory::SlipSurface,
                source_module: "equations/earth_pressure.rs",
                source_function: "slip_plane_ratio",
            },

            Equation::SlipPlaneAngle => EquationMetadata {
                name: "Critical Slip-Plane Inclination",
                description: "Inclination of the failure surface that maximises the active thrust",
                formula_plain: "theta = phi + atan(cos(phi-alpha) / (sin(phi-alpha) + sqrt(R')))",
                reference: CodeReference::Din4085 { year: 2017 },
                variables: vec![
                    Variable::new("ϑ", "Slip-plane inclination from horizontal", "°"),
                ],
                preconditions: vec!["sin(φ−α) + √R' ≠ 0"],
                category: EquationCategory::SlipSurface,
                source_module: "equations/earth_pressure.rs",
                source_function: "slip_plane_angle",
            },

            Equation::PressureOrdinate => EquationMetadata {
                name: "Earth-Pressure Ordinate",
                description: "Lateral pressure from soil self-weight at depth z",
                formula_plain: "e = gamma * z * K",
                reference: CodeReference::Din4085 { year: 2017 },
                variables: vec![
                    Variable::new("e", "Pressure ordinate", "kN/m²"),
                    Variable::new("γ", "Unit weight of soil", "kN/m³"),
                    Variable::new("z", "Depth below top of wall", "m"),
                ],
                preconditions: vec![],
                category: EquationCategory::Ordinates,
                source_module: "equations/earth_pressure.rs",
                source_function: "pressure_ordinate",
            },

            Equation::SurchargeOrdinate => EquationMetadata {
                name: "Surcharge Pressure Ordinate",
                description: "Lateral pressure from an unbounded uniform surcharge, constant with depth",
                formula_plain: "e_p = p * K",
                reference: CodeReference::Eab { edition: 5 },
                variables: vec![
                    Variable::new("e_p", "Surcharge pressure ordinate", "kN/m²"),
                    Variable::new("p", "Uniform surcharge", "kN/m²"),
                ],
                preconditions: vec![],
                category: EquationCategory::Ordinates,
                source_module: "equations/earth_pressure.rs",
                source_function: "surcharge_ordinate",
            },

            Equation::ProfileResultant => EquationMetadata {
                name: "Resultant Earth-Pressure Force",
                description: "Area under the pressure profile per unit wall length",
                formula_plain: "E = sum((e_i + e_i+1)/2 * (z_i+1 - z_i))",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("E", "Resultant force", "kN/m"),
                ],
                preconditions: vec![],
                category: EquationCategory::Resultants,
                source_module: "calculations/profile.rs",
                source_function: "PressureProfile::resultant",
            },

            Equation::ForceComponents => EquationMetadata {
                name: "Force Components",
                description: "Horizontal and vertical components of the inclined resultant",
                formula_plain: "E_h = E*cos(alpha+delta), E_v = E*sin(alpha+delta)",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("E_h", "Horizontal component", "kN/m"),
                    Variable::new("E_v", "Vertical component", "kN/m"),
                ],
                preconditions: vec![],
                category: EquationCategory::Resultants,
                source_module: "equations/earth_pressure.rs",
                source_function: "force_components",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories in document order
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        let mut cats = vec![Coefficients, SlipSurface, Ordinates, Resultants];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::CoulombActiveRatio,
    Equation::CoulombActiveCoefficient,
    Equation::SlipPlaneRatio,
    Equation::SlipPlaneAngle,
    Equation::PressureOrdinate,
    Equation::SurchargeOrdinate,
    Equation::ProfileResultant,
    Equation::ForceComponents,
];

// ============================================================================
// Equation Usage Tracking
// ============================================================================

/// Record of an equation being used in a calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquationUsage {
    /// The equation that was used
    pub equation: Equation,
    /// Context describing where/why it was used (e.g., "Surcharge profile")
    pub context: String,
}

impl EquationUsage {
    pub fn new(equation: Equation, context: impl Into<String>) -> Self {
        Self {
            equation,
            context: context.into(),
        }
    }
}

/// Collector for equation usage during a calculation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquationTracker {
    usages: Vec<EquationUsage>,
}

impl EquationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an equation was used
    pub fn record(&mut self, equation: Equation, context: impl Into<String>) {
        self.usages.push(EquationUsage::new(equation, context));
    }

    /// Get all recorded usages
    pub fn usages(&self) -> &[EquationUsage] {
        &self.usages
    }

    /// Get unique equations used, in first-use order
    pub fn unique_equations(&self) -> Vec<Equation> {
        let mut seen = HashSet::new();
        self.usages
            .iter()
            .filter(|u| seen.insert(u.equation))
            .map(|u| u.equation)
            .collect()
    }

    /// Group unique equations by category
    pub fn by_category(&self) -> Vec<(EquationCategory, Vec<Equation>)> {
        let mut by_cat: HashMap<EquationCategory, Vec<Equation>> = HashMap::new();
        for eq in self.unique_equations() {
            by_cat.entry(eq.metadata().category).or_default().push(eq);
        }

        let mut result: Vec<_> = by_cat.into_iter().collect();
        result.sort_by_key(|(cat, _)| cat.sort_order());
        result
    }
}

// ============================================================================
// Markdown Generation
// ============================================================================

/// Generate the EQUATIONS.md reference document from the registry.
///
/// ```rust
/// use lateral_core::equations::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Earth-Pressure Coefficients"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(8_000);

    output.push_str(r#"# Lateral Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

This document lists every formula used in Lateral earth-pressure calculations,
with its reference, validity conditions and source location.

## Sign Conventions

| Angle | Positive Direction |
|-------|-------------------|
| α (wall) | Back face leaning away from the backfill |
| β (backfill) | Surface rising away from the wall |
| δ (wall friction) | Soil sliding down the wall (active case) |

---

"#);

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, var.units));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.preconditions.is_empty() {
                output.push_str("**Validity:**\n");
                for condition in &meta.preconditions {
                    output.push_str(&format!("- {}\n", condition));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        assert_eq!(ALL_EQUATIONS.len(), 8);

        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_plain.is_empty(), "Equation {:?} has no formula", eq);
            assert!(!meta.variables.is_empty(), "Equation {:?} has no variables", eq);
            assert!(!meta.source_function.is_empty(), "Equation {:?} missing source_function", eq);
        }

        let ordinate = Equation::PressureOrdinate.metadata();
        assert!(ordinate.formula_plain.contains("gamma * z * K"));
    }

    #[test]
    fn test_code_reference_citation() {
        assert_eq!(CodeReference::Din4085 { year: 2017 }.citation(), "DIN 4085:2017");
        assert_eq!(CodeReference::Eab { edition: 5 }.citation(), "EAB 5ed");
    }

    #[test]
    fn test_equation_tracker() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::PressureOrdinate, "Soil profile");
        tracker.record(Equation::SurchargeOrdinate, "Surcharge profile");
        tracker.record(Equation::PressureOrdinate, "Base ordinate");

        assert_eq!(tracker.usages().len(), 3);
        assert_eq!(
            tracker.unique_equations(),
            vec![Equation::PressureOrdinate, Equation::SurchargeOrdinate]
        );
    }

    #[test]
    fn test_by_category_sorted() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::ForceComponents, "test");
        tracker.record(Equation::CoulombActiveCoefficient, "test");
        tracker.record(Equation::SlipPlaneAngle, "test");

        let by_cat = tracker.by_category();
        let categories: Vec<_> = by_cat.iter().map(|(cat, _)| *cat).collect();
        assert_eq!(
            categories,
            vec![
                EquationCategory::Coefficients,
                EquationCategory::SlipSurface,
                EquationCategory::Resultants,
            ]
        );
    }

    #[test]
    fn test_generate_equations_markdown() {
        let markdown = generate_equations_markdown();

        assert!(markdown.contains("# Lateral Equations Reference"));
        assert!(markdown.contains("## Sign Conventions"));
        assert!(markdown.contains("## Earth-Pressure Coefficients"));
        assert!(markdown.contains("## Slip Surface"));
        assert!(markdown.contains("## Pressure Ordinates"));
        assert!(markdown.contains("## Resultant Forces"));
        assert!(markdown.contains("`e = gamma * z * K`"));
        assert!(markdown.contains("DIN 4085:2017"));
        assert!(markdown.contains("**Validity:**"));
        assert!(markdown.contains("**Total Equations:** 8"));
        assert!(markdown.contains("**Categories:** 4"));
    }
}
