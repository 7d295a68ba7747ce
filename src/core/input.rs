//! Resolved calculator inputs
//!
//! Values are stored as the user entered them, in the run's unit system;
//! the accessors convert to SI for the sizing engine.

use crate::core::units::{UnitSystem, STANDARD_GRAVITY};

/// How the streamer width is determined. Exactly one of the two drives
/// sizing: a manual width derives the ratio, a target ratio derives the
/// width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidthSpec {
    /// User-entered width in display units (cm or in).
    Manual(f64),
    /// Target length-to-width ratio.
    AspectRatio(f64),
}

/// Fully collected parameters for one sizing run.
#[derive(Debug, Clone)]
pub struct CalculatorInput {
    pub project_name: Option<String>,
    pub units: UnitSystem,
    /// Mass as entered: grams (metric) or ounces (imperial).
    pub mass: f64,
    /// Descent rate as entered: m/s (metric) or ft/s (imperial).
    pub descent_rate: f64,
    /// Always entered in kg/m³, both systems.
    pub air_density: f64,
    pub drag_coefficient: f64,
    /// As entered. In imperial mode this is report display only; the
    /// engine always computes with standard gravity.
    pub gravity: f64,
    pub width: WidthSpec,
}

impl CalculatorInput {
    pub fn mass_kg(&self) -> f64 {
        self.units.mass_to_kg(self.mass)
    }

    pub fn descent_rate_ms(&self) -> f64 {
        self.units.velocity_to_ms(self.descent_rate)
    }

    /// Gravity actually used by the formula, m/s². The imperial prompt is
    /// cosmetic: whatever was entered there, the computation uses the
    /// standard constant.
    pub fn gravity_ms2(&self) -> f64 {
        match self.units {
            UnitSystem::Metric => self.gravity,
            UnitSystem::Imperial => STANDARD_GRAVITY,
        }
    }
}
