//! Unit systems, conversion factors, and display labels
//!
//! The calculator works in SI internally. The unit system chosen at the
//! start of a run fixes how entries are converted on the way in and how
//! values are labelled on the way out; it never changes mid-run.

/// Standard gravity used by the sizing formula, m/s².
pub const STANDARD_GRAVITY: f64 = 9.8067;

/// Gravity shown in imperial reports, ft/s².
pub const IMPERIAL_GRAVITY_DISPLAY: f64 = 32.17;

/// Sea-level air density default, kg/m³ (entered in kg/m³ in both systems).
pub const DEFAULT_AIR_DENSITY: f64 = 1.225;

/// Default drag coefficient for a streamer.
pub const DEFAULT_DRAG_COEFFICIENT: f64 = 0.4;

/// Default length-to-width ratio when no width is supplied.
pub const DEFAULT_ASPECT_RATIO: f64 = 10.0;

pub const OUNCES_TO_KG: f64 = 0.0283495;
pub const FEET_TO_M: f64 = 0.3048;
pub const M2_TO_CM2: f64 = 10_000.0;
pub const M2_TO_IN2: f64 = 1550.0;
pub const KGM3_TO_SLUGFT3: f64 = 0.001_940_32;

/// Measurement system selected up front for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSystem {
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Parse a user entry. Empty input selects metric; anything else must
    /// spell out the system or its first letter, case-insensitive.
    pub fn parse(raw: &str) -> Option<UnitSystem> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "m" | "metric" => Some(UnitSystem::Metric),
            "i" | "imperial" => Some(UnitSystem::Imperial),
            _ => None,
        }
    }

    /// Mass as entered (grams or ounces) to kilograms.
    pub fn mass_to_kg(self, entered: f64) -> f64 {
        match self {
            UnitSystem::Metric => entered / 1000.0,
            UnitSystem::Imperial => entered * OUNCES_TO_KG,
        }
    }

    /// Descent rate as entered (m/s or ft/s) to m/s.
    pub fn velocity_to_ms(self, entered: f64) -> f64 {
        match self {
            UnitSystem::Metric => entered,
            UnitSystem::Imperial => entered * FEET_TO_M,
        }
    }

    /// Scale a drag area in m² to the display unit (cm² or in²).
    pub fn area_from_m2(self, area_m2: f64) -> f64 {
        match self {
            UnitSystem::Metric => area_m2 * M2_TO_CM2,
            UnitSystem::Imperial => area_m2 * M2_TO_IN2,
        }
    }

    pub fn default_descent_rate(self) -> f64 {
        match self {
            UnitSystem::Metric => 6.0,
            UnitSystem::Imperial => 20.0,
        }
    }

    pub fn mass_label(self) -> &'static str {
        match self {
            UnitSystem::Metric => "g",
            UnitSystem::Imperial => "oz",
        }
    }

    pub fn velocity_label(self) -> &'static str {
        match self {
            UnitSystem::Metric => "m/s",
            UnitSystem::Imperial => "ft/s",
        }
    }

    pub fn area_label(self) -> &'static str {
        match self {
            UnitSystem::Metric => "cm²",
            UnitSystem::Imperial => "in²",
        }
    }

    pub fn length_label(self) -> &'static str {
        match self {
            UnitSystem::Metric => "cm",
            UnitSystem::Imperial => "in",
        }
    }
}
