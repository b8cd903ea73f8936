//! Level Transforms
//!
//! Peak renormalization and hard-clipping gain.

use super::Transform;
use crate::engine::SampleBuffer;
use crate::impl_transform_common;

// ============================================================================
// Constants
// ============================================================================

/// Renormalized peaks land at `1 / NORMALIZE_HEADROOM`, just under full scale
pub const NORMALIZE_HEADROOM: f64 = 1.001;

/// Hard clip bound for `amplify_and_clip`
const CLIP_LEVEL: f64 = 1.0;

// ============================================================================
// Renormalize
// ============================================================================

/// Scale the buffer so its peak sits just under full scale, in place
///
/// Every sample is divided by `NORMALIZE_HEADROOM * peak`. An all-silent
/// buffer is left unchanged.
pub fn renormalize(buffer: &mut SampleBuffer) {
    let peak = buffer.peak();
    if peak <= 0.0 {
        return;
    }
    let divisor = NORMALIZE_HEADROOM * peak;
    for sample in buffer.samples_mut() {
        *sample /= divisor;
    }
}

/// Renormalize as a chainable transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Renormalize;

impl Transform for Renormalize {
    fn apply(&self, mut buffer: SampleBuffer) -> SampleBuffer {
        renormalize(&mut buffer);
        buffer
    }

    impl_transform_common!("renormalize");
}

// ============================================================================
// Amplify and Clip
// ============================================================================

/// Multiply every sample by `gain`, then hard clip to [-1.0, 1.0]
pub fn amplify_and_clip(buffer: &mut SampleBuffer, gain: f64) {
    for sample in buffer.samples_mut() {
        *sample = (*sample * gain).clamp(-CLIP_LEVEL, CLIP_LEVEL);
    }
}

/// Amplify and clip as a chainable transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmplifyAndClip {
    gain: f64,
}

impl AmplifyAndClip {
    /// Linear gain followed by a hard clip
    pub fn new(gain: f64) -> Self {
        Self { gain }
    }
}

impl Transform for AmplifyAndClip {
    fn apply(&self, mut buffer: SampleBuffer) -> SampleBuffer {
        amplify_and_clip(&mut buffer, self.gain);
        buffer
    }

    impl_transform_common!("amplify_and_clip");
}
