//! Explosion pipeline
//!
//! Orchestrates one complete run:
//! 1. pre-explosion burst (optional)
//! 2. main explosion, with the burst mixed in
//! 3. final speed change
//! 4. trailing silence trim
//! 5. reverb tail, renormalized back under full scale
//! 6. trailing silence trim
//!
//! One random stream is seeded per run and threaded through every stage.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::dsp::{accumulate, renormalize, trim_trailing_silence, ChangeSpeed, Transform};
use crate::engine::{export_wav, SampleBuffer};
use crate::error::Result;
use crate::params::ExplosionParams;
use crate::synth::{synthesize_explosion, synthesize_pre_explosions, synthesize_reverb};

/// Channel count of exported explosions
pub const OUTPUT_CHANNELS: u16 = 1;

/// Buffer lengths observed at each stage of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderReport {
    /// Seed of the run's random stream
    pub seed: u64,
    /// Main explosion, pre-explosions mixed in
    pub main_len: usize,
    /// After the final speed change
    pub slowed_len: usize,
    /// After the first silence trim
    pub trimmed_len: usize,
    /// Reverberated buffer before the final trim
    pub reverb_len: usize,
    /// Finished buffer
    pub final_len: usize,
}

/// Explosion renderer for one validated parameter set
#[derive(Debug, Clone)]
pub struct Pipeline {
    params: ExplosionParams,
    seed: u64,
}

impl Pipeline {
    /// Create a pipeline, validating `params`
    ///
    /// The seed is taken from the wall clock; use `with_seed` for a
    /// reproducible run.
    pub fn new(params: ExplosionParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            params,
            seed: clock_seed(),
        })
    }

    /// Replace the seed of the random stream
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Parameters this pipeline renders
    pub fn params(&self) -> &ExplosionParams {
        &self.params
    }

    /// Seed of the random stream
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Render the finished explosion
    pub fn run(&self) -> SampleBuffer {
        self.render().0
    }

    /// Render the finished explosion along with per-stage lengths
    pub fn render(&self) -> (SampleBuffer, RenderReport) {
        info!("Rendering explosion with seed {}", self.seed);
        let mut rng = StdRng::seed_from_u64(self.seed);
        let (buffer, mut report) = render_with_rng(&self.params, &mut rng);
        report.seed = self.seed;
        (buffer, report)
    }

    /// Render the explosion and write it to `path` as a mono WAV file
    pub fn render_to_file(&self, path: &Path) -> Result<RenderReport> {
        let (buffer, report) = self.render();
        export_wav(&buffer, OUTPUT_CHANNELS, path)?;
        Ok(report)
    }
}

/// Synthesize the main explosion with the pre-explosion burst mixed in
pub fn compose_explosion<R: Rng + ?Sized>(params: &ExplosionParams, rng: &mut R) -> SampleBuffer {
    info!("Synthesizing {} pre-explosion(s)", params.preexplosions);
    let pre = synthesize_pre_explosions(params, rng);

    info!(
        "Synthesizing {:.2}s explosion with {} layer(s)",
        params.duration, params.layer_count
    );
    let mut main = synthesize_explosion(params.duration, params.layer_count, rng);

    if let Some(pre) = pre {
        accumulate(&mut main, &pre);
        renormalize(&mut main);
        pre.release();
    }
    main
}

/// Run every stage with the caller's random stream
///
/// The returned report carries seed 0; `Pipeline::render` fills it in.
pub fn render_with_rng<R: Rng + ?Sized>(
    params: &ExplosionParams,
    rng: &mut R,
) -> (SampleBuffer, RenderReport) {
    let main = compose_explosion(params, rng);
    let main_len = main.len();

    info!("Changing speed by {}", params.final_speed_factor);
    let mut main = ChangeSpeed::new(params.final_speed_factor).apply(main);
    let slowed_len = main.len();

    trim_trailing_silence(&mut main);
    let trimmed_len = main.len();

    let mut reverbed = synthesize_reverb(
        &main,
        params.early_reflections,
        params.late_reflections,
        rng,
    );
    let reverb_len = reverbed.len();
    renormalize(&mut reverbed);
    trim_trailing_silence(&mut reverbed);
    main.release();

    let report = RenderReport {
        seed: 0,
        main_len,
        slowed_len,
        trimmed_len,
        reverb_len,
        final_len: reverbed.len(),
    };
    info!(
        "Explosion rendered: {} samples ({:.2}s)",
        report.final_len,
        reverbed.duration_secs()
    );
    (reverbed, report)
}

/// Seed derived from the wall clock
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
