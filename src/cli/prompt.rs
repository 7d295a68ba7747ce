//! Interactive input collection over explicit streams
//!
//! The collector runs on any `BufRead`/`Write` pair instead of ambient
//! stdin/stdout, so the whole pipeline can be exercised with scripted
//! input in tests. Prompts run in a fixed order, one value per line; unit
//! selection comes first because it fixes the defaults and labels for
//! every later prompt. The first unparseable entry aborts the run.

use std::io::{BufRead, Write};

use crate::core::input::{CalculatorInput, WidthSpec};
use crate::core::units::{
    UnitSystem, DEFAULT_AIR_DENSITY, DEFAULT_ASPECT_RATIO, DEFAULT_DRAG_COEFFICIENT,
    STANDARD_GRAVITY,
};
use crate::error::SizerError;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, prompt: &str) -> Result<String, SizerError> {
        write!(self.output, "{}: ", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    fn parse_f64(field: &'static str, raw: &str) -> Result<f64, SizerError> {
        raw.parse().map_err(|_| SizerError::InvalidNumber {
            field,
            value: raw.to_string(),
        })
    }

    fn f64_or_default(
        &mut self,
        field: &'static str,
        prompt: &str,
        default: f64,
    ) -> Result<f64, SizerError> {
        let raw = self.ask(prompt)?;
        if raw.is_empty() {
            Ok(default)
        } else {
            Self::parse_f64(field, &raw)
        }
    }

    fn optional_f64(
        &mut self,
        field: &'static str,
        prompt: &str,
    ) -> Result<Option<f64>, SizerError> {
        let raw = self.ask(prompt)?;
        if raw.is_empty() {
            Ok(None)
        } else {
            Self::parse_f64(field, &raw).map(Some)
        }
    }

    fn unit_system(&mut self) -> Result<UnitSystem, SizerError> {
        let raw = self.ask("Unit system, metric or imperial [Default: metric]")?;
        UnitSystem::parse(&raw).ok_or(SizerError::InvalidUnitSystem { value: raw })
    }

    /// Run the full prompt sequence and return the resolved inputs.
    pub fn collect(&mut self) -> Result<CalculatorInput, SizerError> {
        let units = self.unit_system()?;

        let project_name = {
            let raw = self.ask("Project name (optional)")?;
            if raw.is_empty() {
                None
            } else {
                Some(raw)
            }
        };

        let mass_prompt = format!("Rocket mass ({}) [Required]", units.mass_label());
        let raw = self.ask(&mass_prompt)?;
        if raw.is_empty() {
            return Err(SizerError::MissingMass);
        }
        let mass = Self::parse_f64("rocket mass", &raw)?;

        let descent_prompt = format!(
            "Descent rate v ({}) [Default: {:.1}]",
            units.velocity_label(),
            units.default_descent_rate()
        );
        let descent_rate =
            self.f64_or_default("descent rate", &descent_prompt, units.default_descent_rate())?;

        let air_density = self.f64_or_default(
            "air density",
            "Air density ρ (kg/m³) [Default: 1.225]",
            DEFAULT_AIR_DENSITY,
        )?;

        let drag_coefficient = self.f64_or_default(
            "drag coefficient",
            "Drag coefficient Cd (for streamers: 0.3<Cd<0.8) [Default: 0.4]",
            DEFAULT_DRAG_COEFFICIENT,
        )?;

        // In imperial mode the entered gravity only shows up in the report;
        // the engine always computes with standard gravity, and the prompt
        // says so instead of silently discarding the entry.
        let gravity_prompt = match units {
            UnitSystem::Metric => "Gravity g (m/s²) [Default: 9.8067]",
            UnitSystem::Imperial => "Gravity g (m/s², report display only) [Default: 9.8067]",
        };
        let gravity = self.f64_or_default("gravity", gravity_prompt, STANDARD_GRAVITY)?;

        let width_prompt = format!(
            "Streamer width in {} (optional, auto-calculated if omitted)",
            units.length_label()
        );
        let width = match self.optional_f64("streamer width", &width_prompt)? {
            Some(width) => WidthSpec::Manual(width),
            None => {
                let ratio = self.f64_or_default(
                    "aspect ratio",
                    "Length-to-width ratio (5:1 to 10:1 is very effective) [Default: 10]",
                    DEFAULT_ASPECT_RATIO,
                )?;
                WidthSpec::AspectRatio(ratio)
            }
        };

        Ok(CalculatorInput {
            project_name,
            units,
            mass,
            descent_rate,
            air_density,
            drag_coefficient,
            gravity,
            width,
        })
    }
}
