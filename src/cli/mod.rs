//! CLI Module
//!
//! Command-line interface for the explosion synthesizer.

pub mod commands;

use clap::Parser;
use std::path::PathBuf;

use crate::error::Result;
use crate::params::ExplosionParams;

/// Explodomatica - procedural explosion sound effect generator
#[derive(Parser, Debug)]
#[command(name = "explodomatica")]
#[command(version, about, long_about = None)]
#[command(after_help = "caution: OUTPUT will be overwritten.")]
pub struct Cli {
    /// WAV file to write
    pub output: PathBuf,

    /// JSON file with explosion parameters
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Duration of the explosion in seconds
    #[arg(long)]
    pub duration: Option<f64>,

    /// Number of sound layers per explosion
    #[arg(long)]
    pub layers: Option<usize>,

    /// Number of pre-explosions (the "ka-" in "ka-BOOM")
    #[arg(long)]
    pub preexplosions: Option<usize>,

    /// Window in seconds for pre-explosion offsets
    #[arg(long)]
    pub pre_delay: Option<f64>,

    /// Low-pass factor for pre-explosions, between 0 and 1
    #[arg(long)]
    pub pre_lp_factor: Option<f64>,

    /// Number of low-pass passes over the pre-explosions
    #[arg(long)]
    pub pre_lp_count: Option<usize>,

    /// Final speed factor (0.1 to 10); below 1.0 slows the explosion down
    #[arg(long)]
    pub speed_factor: Option<f64>,

    /// Number of early reverb reflections
    #[arg(long)]
    pub early_refls: Option<usize>,

    /// Number of late reverb reflections
    #[arg(long)]
    pub late_refls: Option<usize>,

    /// Seed for the random stream (defaults to the clock)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the effective parameters as JSON before rendering
    #[arg(long)]
    pub print_params: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Merge defaults, the config file and command line overrides
    ///
    /// The merged parameters are validated before they are returned.
    pub fn explosion_params(&self) -> Result<ExplosionParams> {
        let mut params = match &self.config {
            Some(path) => ExplosionParams::from_json_file(path)?,
            None => ExplosionParams::default(),
        };

        if let Some(duration) = self.duration {
            params.duration = duration;
        }
        if let Some(layers) = self.layers {
            params.layer_count = layers;
        }
        if let Some(preexplosions) = self.preexplosions {
            params.preexplosions = preexplosions;
        }
        if let Some(delay) = self.pre_delay {
            params.preexplosion_delay = delay;
        }
        if let Some(factor) = self.pre_lp_factor {
            params.preexplosion_lp_factor = factor;
        }
        if let Some(count) = self.pre_lp_count {
            params.preexplosion_lp_count = count;
        }
        if let Some(factor) = self.speed_factor {
            params.final_speed_factor = factor;
        }
        if let Some(early) = self.early_refls {
            params.early_reflections = early;
        }
        if let Some(late) = self.late_refls {
            params.late_reflections = late;
        }

        params.validate()?;
        Ok(params)
    }
}
