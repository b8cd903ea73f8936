//! Delay shift
//!
//! Moves the buffer's content later in time by a whole number of samples,
//! keeping the length fixed. Content pushed past the end is lost and the
//! vacated start becomes silence. This is a one-shot shift, not a circular
//! delay line.

use super::Transform;
use crate::engine::SampleBuffer;
use crate::impl_transform_common;

/// Shift content forward by `delay_samples`, in place
///
/// Walks from the end toward the start so every destination reads an
/// unshifted source. Destinations whose source index is not positive
/// become 0.0, which includes index 0 even for a zero delay.
pub fn delay_shift(buffer: &mut SampleBuffer, delay_samples: usize) {
    let data = buffer.samples_mut();
    for i in (0..data.len()).rev() {
        data[i] = match i.checked_sub(delay_samples) {
            Some(source) if source > 0 => data[source],
            _ => 0.0,
        };
    }
}

/// Delay shift as a chainable transform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayShift {
    delay_samples: usize,
}

impl DelayShift {
    /// Shift by `delay_samples`
    pub fn new(delay_samples: usize) -> Self {
        Self { delay_samples }
    }
}

impl Transform for DelayShift {
    fn apply(&self, mut buffer: SampleBuffer) -> SampleBuffer {
        delay_shift(&mut buffer, self.delay_samples);
        buffer
    }

    impl_transform_common!("delay_shift");
}
