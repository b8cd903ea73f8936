//! Pre-explosion burst
//!
//! The "ka-" in "ka-BOOM": a handful of half-length explosions, each pushed
//! back by a random offset inside the pre-explosion delay window, summed and
//! darkened with a constant low-pass.

use log::debug;
use rand::Rng;

use crate::dsp::{
    accumulate, delay_shift, renormalize, Renormalize, SlidingLowPass, TransformChain,
};
use crate::engine::{seconds_to_frames, SampleBuffer};
use crate::params::ExplosionParams;
use crate::synth::synthesize_explosion;

/// Synthesize the pre-explosion burst, or `None` when none are configured
pub fn synthesize_pre_explosions<R: Rng + ?Sized>(
    params: &ExplosionParams,
    rng: &mut R,
) -> Option<SampleBuffer> {
    if params.preexplosions == 0 {
        return None;
    }

    let mut burst = SampleBuffer::silence(seconds_to_frames(params.duration));
    let max_offset = seconds_to_frames(params.preexplosion_delay);

    for index in 0..params.preexplosions {
        let mut explosion = synthesize_explosion(params.duration / 2.0, params.layer_count, rng);
        let offset = rng.gen_range(0..=max_offset);
        debug!(
            "[PRE] {}/{} offset {} samples",
            index + 1,
            params.preexplosions,
            offset
        );
        delay_shift(&mut explosion, offset);
        accumulate(&mut burst, &explosion);
        renormalize(&mut burst);
        explosion.release();
    }

    let mut finish = TransformChain::new();
    finish
        .repeat(
            SlidingLowPass::constant(params.preexplosion_lp_factor),
            params.preexplosion_lp_count,
        )
        .push(Renormalize);
    Some(finish.process(burst))
}
