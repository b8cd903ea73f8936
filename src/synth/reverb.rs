//! Synthetic reverb tail
//!
//! A poor man's reverb: no convolution and no feedback network, just a pile
//! of delayed, attenuated and low-passed copies of the dry sound.
//!
//! A running echo buffer starts as the dry signal padded to twice its
//! length. Each reflection:
//! 1. derives a low-passed copy of the running echo
//! 2. attenuates the running echo by a random gain (so every later
//!    reflection is quieter and duller than the one before)
//! 3. pushes the copy back by a random delay and sums it onto the output
//!
//! Early reflections come first with a gentle constant filter and a short
//! delay window; late reflections follow with a sweeping filter, a smaller
//! gain and a much longer window.

use std::ops::Range;

use log::{debug, info};
use rand::Rng;

use crate::dsp::{accumulate, amplify_and_clip, delay_shift, sliding_low_pass};
use crate::engine::{SampleBuffer, SAMPLE_RATE};

/// Parameters shared by every reflection of one stage
#[derive(Debug, Clone, PartialEq)]
struct ReflectionStage {
    name: &'static str,
    /// Low-pass sweep applied to each reflection
    alpha: (f64, f64),
    /// Attenuation applied to the running echo per reflection
    gain: Range<f64>,
    /// Largest delay in samples
    max_delay: usize,
}

/// Early reflections: constant filter, 300 ms window
fn early_stage() -> ReflectionStage {
    ReflectionStage {
        name: "early",
        alpha: (0.5, 0.5),
        gain: 0.03..0.06,
        max_delay: 3 * SAMPLE_RATE as usize / 10,
    }
}

/// Late reflections: sweeping filter, 2000 ms window
fn late_stage() -> ReflectionStage {
    ReflectionStage {
        name: "late",
        alpha: (0.5, 0.2),
        gain: 0.03..0.04,
        max_delay: 2 * SAMPLE_RATE as usize,
    }
}

/// Add a reverb tail to `input`
///
/// The result is twice the input's length: the dry signal followed by room
/// for the tail, with all reflections summed on top. It is not
/// renormalized, so it may exceed full scale.
pub fn synthesize_reverb<R: Rng + ?Sized>(
    input: &SampleBuffer,
    early_reflections: usize,
    late_reflections: usize,
    rng: &mut R,
) -> SampleBuffer {
    info!(
        "Calculating poor man's reverb ({} early, {} late reflections)",
        early_reflections, late_reflections
    );

    let dry_len = input.len();
    let mut with_verb = SampleBuffer::silence(2 * dry_len);
    with_verb.samples_mut()[..dry_len].copy_from_slice(input.samples());
    let mut echo = with_verb.clone();

    for (stage, count) in [
        (early_stage(), early_reflections),
        (late_stage(), late_reflections),
    ] {
        for index in 0..count {
            let mut reflection = sliding_low_pass(&echo, stage.alpha.0, stage.alpha.1);
            let gain = rng.gen_range(stage.gain.clone());
            amplify_and_clip(&mut echo, gain);

            let delay = rng.gen_range(0..=stage.max_delay);
            debug!(
                "[REVERB] {} {}/{}: gain {:.4} delay {} samples",
                stage.name,
                index + 1,
                count,
                gain,
                delay
            );
            delay_shift(&mut reflection, delay);
            accumulate(&mut with_verb, &reflection);
            reflection.release();
        }
    }

    with_verb
}
