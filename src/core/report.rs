//! Report rendering and dual-sink emission
//!
//! The report is rendered once and broadcast to every sink through
//! [`TeeWriter`], so the console and the file are guaranteed to receive
//! identical bytes. The file is only created after all inputs have parsed
//! and sizing has succeeded; a failed run never touches the filesystem.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::core::input::CalculatorInput;
use crate::core::sizing::{SizingResult, WidthSource};
use crate::core::units::{UnitSystem, IMPERIAL_GRAVITY_DISPLAY, KGM3_TO_SLUGFT3};
use crate::error::SizerError;

/// Filename used when no project name was given.
pub const DEFAULT_FILENAME: &str = "streamer.txt";

/// Duplicates every write to all underlying sinks.
pub struct TeeWriter<'a> {
    sinks: Vec<&'a mut dyn Write>,
}

impl<'a> TeeWriter<'a> {
    pub fn new(sinks: Vec<&'a mut dyn Write>) -> Self {
        Self { sinks }
    }
}

impl Write for TeeWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for sink in &mut self.sinks {
            sink.write_all(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        for sink in &mut self.sinks {
            sink.flush()?;
        }
        Ok(())
    }
}

/// Replace every character outside `[A-Za-z0-9_-]` with an underscore,
/// one-for-one.
pub fn sanitize_project_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Report filename for a run: `streamer_<sanitized>.txt`, or the fixed
/// default when the project name is empty or whitespace.
pub fn report_filename(project_name: Option<&str>) -> String {
    match project_name {
        Some(name) if !name.trim().is_empty() => {
            format!("streamer_{}.txt", sanitize_project_name(name))
        }
        _ => DEFAULT_FILENAME.to_string(),
    }
}

/// Render the fixed-layout report to a single sink.
pub fn render(
    input: &CalculatorInput,
    sizing: &SizingResult,
    out: &mut dyn Write,
) -> io::Result<()> {
    let units = input.units;

    writeln!(out, "=== Results of Streamer Calculation ===")?;
    writeln!(out)?;
    if let Some(name) = &input.project_name {
        writeln!(out, "Project name: {}", name)?;
    }

    writeln!(
        out,
        "Required drag area: {:.2} {}",
        sizing.area,
        units.area_label()
    )?;
    writeln!(out, "Suggested streamer dimensions:")?;
    let width_tag = match sizing.width_source {
        WidthSource::Manual => "(user input)",
        WidthSource::Auto => "(auto-calculated)",
    };
    writeln!(
        out,
        " - Width:  {:.1} {} {}",
        sizing.width,
        units.length_label(),
        width_tag
    )?;
    writeln!(out, " - Length: {:.1} {}", sizing.length, units.length_label())?;
    writeln!(out, " - Aspect ratio: {:.1} : 1", sizing.ratio_used)?;

    writeln!(out)?;
    writeln!(out, "--- Inputs ---")?;
    writeln!(out, "Rocket mass: {:.1} {}", input.mass, units.mass_label())?;
    writeln!(
        out,
        "Descent rate: {:.1} {}",
        input.descent_rate,
        units.velocity_label()
    )?;
    match units {
        UnitSystem::Metric => {
            writeln!(out, "Air density: {:.3} kg/m³", input.air_density)?;
        }
        UnitSystem::Imperial => {
            writeln!(
                out,
                "Air density: {:.6} slug/ft³",
                input.air_density * KGM3_TO_SLUGFT3
            )?;
        }
    }
    writeln!(out, "Drag coefficient: {:.2}", input.drag_coefficient)?;
    match units {
        UnitSystem::Metric => writeln!(out, "Gravity: {:.4} m/s²", input.gravity)?,
        UnitSystem::Imperial => {
            writeln!(out, "Gravity: {:.2} ft/s²", IMPERIAL_GRAVITY_DISPLAY)?;
        }
    }
    match sizing.width_source {
        WidthSource::Manual => writeln!(
            out,
            "Note: aspect ratio was computed because the width was manually provided"
        )?,
        WidthSource::Auto => writeln!(out, "Used ratio: {:.1} : 1", sizing.ratio_used)?,
    }

    Ok(())
}

/// Emit the report to the console sink and to a file under `dir`, flushing
/// both. Returns the path written. The file handle is scoped to this
/// function, so it is closed on every exit path.
pub fn emit(
    input: &CalculatorInput,
    sizing: &SizingResult,
    dir: &Path,
    console: &mut dyn Write,
) -> Result<PathBuf, SizerError> {
    let path = dir.join(report_filename(input.project_name.as_deref()));
    let mut file = BufWriter::new(File::create(&path)?);

    let sinks: Vec<&mut dyn Write> = vec![console, &mut file];
    let mut tee = TeeWriter::new(sinks);
    render(input, sizing, &mut tee)?;
    tee.flush()?;

    Ok(path)
}
