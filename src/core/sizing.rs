//! Streamer sizing engine
//!
//! Pure functions: required drag area from the descent-equilibrium
//! equation, then width/length derivation from either a manual width or a
//! target aspect ratio.

use crate::core::input::{CalculatorInput, WidthSpec};
use crate::error::SizerError;

/// Whether the streamer width came from the user or from the ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthSource {
    Manual,
    Auto,
}

/// Computed sizing, immutable once produced.
#[derive(Debug, Clone)]
pub struct SizingResult {
    /// Required drag area in m².
    pub area_m2: f64,
    /// Required drag area scaled to the display unit (cm² or in²).
    pub area: f64,
    /// Width in display length units (cm or in).
    pub width: f64,
    /// Length in display length units (cm or in).
    pub length: f64,
    pub ratio_used: f64,
    pub width_source: WidthSource,
}

fn check_positive(field: &'static str, value: f64) -> Result<(), SizerError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SizerError::NonPositive { field, value });
    }
    Ok(())
}

/// Drag area in m² required to hold the target descent rate:
/// `A = 2 m g / (ρ Cd v²)`. All arguments in SI units.
pub fn required_area_m2(
    mass_kg: f64,
    gravity: f64,
    air_density: f64,
    drag_coefficient: f64,
    velocity_ms: f64,
) -> Result<f64, SizerError> {
    check_positive("rocket mass", mass_kg)?;
    check_positive("gravity", gravity)?;
    check_positive("air density", air_density)?;
    check_positive("drag coefficient", drag_coefficient)?;
    check_positive("descent rate", velocity_ms)?;

    Ok((2.0 * mass_kg * gravity) / (air_density * drag_coefficient * velocity_ms.powi(2)))
}

/// Size the streamer for fully collected inputs.
pub fn size(input: &CalculatorInput) -> Result<SizingResult, SizerError> {
    let area_m2 = required_area_m2(
        input.mass_kg(),
        input.gravity_ms2(),
        input.air_density,
        input.drag_coefficient,
        input.descent_rate_ms(),
    )?;
    let area = input.units.area_from_m2(area_m2);

    let (width, length, ratio_used, width_source) = match input.width {
        WidthSpec::Manual(width) => {
            check_positive("streamer width", width)?;
            let length = area / width;
            (width, length, length / width, WidthSource::Manual)
        }
        WidthSpec::AspectRatio(ratio) => {
            check_positive("aspect ratio", ratio)?;
            let width = (area / ratio).sqrt();
            (width, width * ratio, ratio, WidthSource::Auto)
        }
    };

    Ok(SizingResult {
        area_m2,
        area,
        width,
        length,
        ratio_used,
        width_source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::units::{UnitSystem, STANDARD_GRAVITY};
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-9;

    fn metric_input() -> CalculatorInput {
        CalculatorInput {
            project_name: None,
            units: UnitSystem::Metric,
            mass: 500.0,
            descent_rate: 6.0,
            air_density: 1.225,
            drag_coefficient: 0.4,
            gravity: STANDARD_GRAVITY,
            width: WidthSpec::AspectRatio(10.0),
        }
    }

    #[test]
    fn test_worked_example_500g_metric_defaults() {
        let result = size(&metric_input()).unwrap();

        // A = (2 * 0.5 * 9.8067) / (1.225 * 0.4 * 36) = 9.8067 / 17.64 m²
        let expected_m2 = 9.8067 / 17.64;
        assert_relative_eq!(result.area_m2, expected_m2, epsilon = EPSILON);
        assert_relative_eq!(result.area, expected_m2 * 10_000.0, epsilon = 1e-6);
        assert_relative_eq!(result.width, (result.area / 10.0).sqrt(), epsilon = EPSILON);
        assert_relative_eq!(result.length, result.width * 10.0, epsilon = EPSILON);
        assert_relative_eq!(result.ratio_used, 10.0, epsilon = EPSILON);
        assert_eq!(result.width_source, WidthSource::Auto);

        // Sanity: ~5559 cm², ~23.6 cm wide
        assert!(result.area > 5559.0 && result.area < 5560.0);
        assert!(result.width > 23.5 && result.width < 23.7);
    }

    #[test]
    fn test_area_scaling_laws() {
        let base = required_area_m2(0.5, STANDARD_GRAVITY, 1.225, 0.4, 6.0).unwrap();

        let double_mass = required_area_m2(1.0, STANDARD_GRAVITY, 1.225, 0.4, 6.0).unwrap();
        assert_relative_eq!(double_mass, base * 2.0, epsilon = EPSILON);

        let double_gravity =
            required_area_m2(0.5, 2.0 * STANDARD_GRAVITY, 1.225, 0.4, 6.0).unwrap();
        assert_relative_eq!(double_gravity, base * 2.0, epsilon = EPSILON);

        let double_velocity = required_area_m2(0.5, STANDARD_GRAVITY, 1.225, 0.4, 12.0).unwrap();
        assert_relative_eq!(double_velocity, base / 4.0, epsilon = EPSILON);

        let double_cd = required_area_m2(0.5, STANDARD_GRAVITY, 1.225, 0.8, 6.0).unwrap();
        assert_relative_eq!(double_cd, base / 2.0, epsilon = EPSILON);

        let double_density = required_area_m2(0.5, STANDARD_GRAVITY, 2.45, 0.4, 6.0).unwrap();
        assert_relative_eq!(double_density, base / 2.0, epsilon = EPSILON);
    }

    #[test]
    fn test_area_is_positive() {
        let area = required_area_m2(0.013, STANDARD_GRAVITY, 1.225, 0.3, 3.5).unwrap();
        assert!(area > 0.0);
    }

    #[test]
    fn test_auto_ratio_round_trip() {
        for ratio in [5.0, 7.5, 10.0] {
            let mut input = metric_input();
            input.width = WidthSpec::AspectRatio(ratio);
            let result = size(&input).unwrap();

            assert_relative_eq!(result.length / result.width, ratio, epsilon = 1e-9);
            assert_relative_eq!(result.width * result.length, result.area, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_manual_width_recombines_to_area() {
        let mut input = metric_input();
        input.width = WidthSpec::Manual(20.0);
        let result = size(&input).unwrap();

        assert_eq!(result.width_source, WidthSource::Manual);
        assert_relative_eq!(result.width, 20.0, epsilon = EPSILON);
        assert_relative_eq!(result.width * result.length, result.area, epsilon = 1e-6);
        assert_relative_eq!(
            result.ratio_used,
            result.length / result.width,
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_imperial_uses_converted_velocity_and_fixed_gravity() {
        let mut input = metric_input();
        input.units = UnitSystem::Imperial;
        input.mass = 17.637; // ~500 g in oz
        input.descent_rate = 20.0; // ft/s -> 6.096 m/s
        input.gravity = 123.0; // must be ignored

        let result = size(&input).unwrap();
        let expected_m2 =
            (2.0 * 17.637 * 0.0283495 * STANDARD_GRAVITY) / (1.225 * 0.4 * 6.096_f64.powi(2));
        assert_relative_eq!(result.area_m2, expected_m2, epsilon = EPSILON);
        assert_relative_eq!(result.area, expected_m2 * 1550.0, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_mass_rejected() {
        let mut input = metric_input();
        input.mass = 0.0;
        assert!(matches!(
            size(&input),
            Err(SizerError::NonPositive { field: "rocket mass", .. })
        ));
    }

    #[test]
    fn test_zero_or_negative_manual_width_rejected() {
        for width in [0.0, -3.0] {
            let mut input = metric_input();
            input.width = WidthSpec::Manual(width);
            assert!(matches!(
                size(&input),
                Err(SizerError::NonPositive { field: "streamer width", .. })
            ));
        }
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        let mut input = metric_input();
        input.descent_rate = f64::NAN;
        assert!(size(&input).is_err());

        let mut input = metric_input();
        input.width = WidthSpec::AspectRatio(f64::INFINITY);
        assert!(size(&input).is_err());
    }
}
