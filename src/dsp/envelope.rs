//! Linear fade-out envelope
//!
//! Repeated application is how the synthesizers get steeper decays: every
//! pass multiplies the existing ramp again.

use super::Transform;
use crate::engine::SampleBuffer;
use crate::impl_transform_common;

/// Ramp the first `n` samples from gain 1.0 down toward 0.0
///
/// Sample `i` is scaled by `1 - i/n`. Samples from `n` onward are untouched;
/// `n` larger than the buffer is clamped to its length.
pub fn fade_out(buffer: &mut SampleBuffer, n: usize) {
    let span = n.min(buffer.len());
    for (i, sample) in buffer.samples_mut()[..span].iter_mut().enumerate() {
        *sample *= 1.0 - i as f64 / n as f64;
    }
}

/// Fade-out as a chainable transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeOut {
    /// Ramp length in samples; `None` ramps over the whole buffer
    span: Option<usize>,
}

impl FadeOut {
    /// Fade over the first `n` samples
    pub fn new(n: usize) -> Self {
        Self { span: Some(n) }
    }

    /// Fade over whatever length the buffer has when the transform runs
    pub fn whole() -> Self {
        Self { span: None }
    }
}

impl Transform for FadeOut {
    fn apply(&self, mut buffer: SampleBuffer) -> SampleBuffer {
        let n = self.span.unwrap_or(buffer.len());
        fade_out(&mut buffer, n);
        buffer
    }

    impl_transform_common!("fade_out");
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_fade_out_ramp() {
        let mut buffer = SampleBuffer::from_samples(vec![1.0; 4]);
        fade_out(&mut buffer, 4);
        assert_eq!(buffer.samples(), &[1.0, 0.75, 0.5, 0.25]);
    }

    #[test]
    fn test_fade_out_leaves_tail_untouched() {
        let mut buffer = SampleBuffer::from_samples(vec![0.8; 6]);
        fade_out(&mut buffer, 2);
        assert_eq!(buffer.samples(), &[0.8, 0.4, 0.8, 0.8, 0.8, 0.8]);
    }

    #[test]
    fn test_fade_out_first_sample_unchanged_and_last_shrinks() {
        for n in [10usize, 100, 10_000] {
            let mut buffer = SampleBuffer::from_samples(vec![-0.6; n]);
            fade_out(&mut buffer, n);
            assert_eq!(buffer.samples()[0], -0.6);
            assert_abs_diff_eq!(buffer.samples()[n - 1], -0.6 / n as f64, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_repeated_fade_compounds() {
        let buffer = SampleBuffer::from_samples(vec![1.0; 4]);
        let buffer = FadeOut::whole().apply(FadeOut::whole().apply(buffer));
        assert_eq!(buffer.samples(), &[1.0, 0.5625, 0.25, 0.0625]);
    }

    #[test]
    fn test_fade_longer_than_buffer() {
        let mut buffer = SampleBuffer::from_samples(vec![1.0; 2]);
        fade_out(&mut buffer, 4);
        assert_eq!(buffer.samples(), &[1.0, 0.75]);
        let empty = FadeOut::new(8).apply(SampleBuffer::default());
        assert!(empty.is_empty());
    }
}
