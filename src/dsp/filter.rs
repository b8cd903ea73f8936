//! Sliding one-pole low-pass filter
//!
//! A one-pole smoother whose coefficient moves linearly from `alpha1` at the
//! start of the buffer to `alpha2` at the end, so the cutoff sweeps over the
//! course of the sound.
//!
//! y[0] = x[0]
//! y[i] = y[i-1] + alpha(i)^2 * (x[i] - y[i-1]),  alpha(i) = alpha1 + (alpha2 - alpha1) * i/n

use super::Transform;
use crate::engine::SampleBuffer;
use crate::impl_transform_common;

/// Derive a low-passed copy of `input`
///
/// `alpha1 == alpha2` gives a constant-coefficient filter. Values near 1.0
/// pass almost everything, values near 0.0 smooth heavily.
pub fn sliding_low_pass(input: &SampleBuffer, alpha1: f64, alpha2: f64) -> SampleBuffer {
    let x = input.samples();
    let n = x.len();
    let mut output = SampleBuffer::allocate(n);
    let Some(&first) = x.first() else {
        return output;
    };

    let mut prev = first;
    output.push(prev);
    for (i, &sample) in x.iter().enumerate().skip(1) {
        let alpha = (i as f64 / n as f64) * (alpha2 - alpha1) + alpha1;
        let alpha = alpha * alpha;
        prev += alpha * (sample - prev);
        output.push(prev);
    }
    output
}

/// Sliding low-pass as a chainable transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlidingLowPass {
    alpha1: f64,
    alpha2: f64,
}

impl SlidingLowPass {
    /// Sweep the coefficient from `alpha1` to `alpha2`
    pub fn new(alpha1: f64, alpha2: f64) -> Self {
        Self { alpha1, alpha2 }
    }

    /// Constant-coefficient filter
    pub fn constant(alpha: f64) -> Self {
        Self::new(alpha, alpha)
    }
}

impl Transform for SlidingLowPass {
    fn apply(&self, buffer: SampleBuffer) -> SampleBuffer {
        sliding_low_pass(&buffer, self.alpha1, self.alpha2)
    }

    impl_transform_common!("sliding_low_pass");
}
