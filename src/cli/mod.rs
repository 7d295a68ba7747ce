//! CLI argument definitions and the interactive pipeline

pub mod prompt;

use clap::Parser;
use console::style;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::cli::prompt::Prompter;
use crate::core::{report, sizing};
use crate::error::SizerError;

#[derive(Parser)]
#[command(name = "streamer-sizer")]
#[command(author, version, about = "Model rocket streamer size calculator")]
#[command(
    long_about = "Computes the required drag area and suggested width/length for a model rocket recovery streamer, and echoes the report to the terminal and a text file."
)]
pub struct Cli {
    /// Directory where the report file is written
    #[arg(long, short = 'o', default_value = ".")]
    pub output_dir: PathBuf,
}

/// Run the full collect/size/report pipeline over explicit streams.
pub fn run(cli: &Cli, input: impl BufRead, mut output: impl Write) -> Result<(), SizerError> {
    writeln!(output, "=== Model Rocket Streamer Size Calculator ===")?;
    writeln!(output)?;

    let resolved = Prompter::new(input, &mut output).collect()?;
    let sizing = sizing::size(&resolved)?;

    writeln!(output)?;
    let path = report::emit(&resolved, &sizing, &cli.output_dir, &mut output)?;
    writeln!(output)?;
    writeln!(
        output,
        "{} Results also saved to {}",
        style("✓").green(),
        style(path.display()).cyan()
    )?;
    Ok(())
}
