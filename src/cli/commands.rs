//! CLI Command Implementations
//!
//! Implements the actual logic behind the command line.

use log::info;

use super::Cli;
use crate::engine::SAMPLE_RATE;
use crate::error::Result;
use crate::pipeline::{Pipeline, RenderReport};

/// Render an explosion as described by the parsed command line
pub fn generate(cli: &Cli) -> Result<RenderReport> {
    let params = cli.explosion_params()?;

    if cli.print_params {
        println!("{}", params.to_json_string()?);
    }

    let mut pipeline = Pipeline::new(params)?;
    if let Some(seed) = cli.seed {
        pipeline = pipeline.with_seed(seed);
    }

    info!("Writing explosion to: {}", cli.output.display());
    let report = pipeline.render_to_file(&cli.output)?;

    println!("Saved output in '{}'", cli.output.display());
    println!(
        "Seed {}: {} samples ({:.2}s)",
        report.seed,
        report.final_len,
        report.final_len as f64 / SAMPLE_RATE as f64
    );

    Ok(report)
}
