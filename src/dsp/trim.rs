//! Trailing silence trimming

use super::Transform;
use crate::engine::{SampleBuffer, SILENCE_THRESHOLD};
use crate::impl_transform_common;

/// Drop the contiguous near-silent run at the end of the buffer
///
/// Scans backward from the last sample and stops at the first sample whose
/// magnitude reaches `SILENCE_THRESHOLD`. Quiet samples before that point
/// are kept. Only the logical length changes; storage is not reallocated.
pub fn trim_trailing_silence(buffer: &mut SampleBuffer) {
    let keep = buffer
        .samples()
        .iter()
        .rposition(|s| s.abs() >= SILENCE_THRESHOLD)
        .map_or(0, |last_loud| last_loud + 1);
    buffer.truncate(keep);
}

/// Silence trimming as a chainable transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrimSilence;

impl Transform for TrimSilence {
    fn apply(&self, mut buffer: SampleBuffer) -> SampleBuffer {
        trim_trailing_silence(&mut buffer);
        buffer
    }

    impl_transform_common!("trim_silence");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_trailing_run_only() {
        let mut buffer = SampleBuffer::from_samples(vec![0.5, 0.0, 0.3, 1e-7, 0.0, -1e-6]);
        trim_trailing_silence(&mut buffer);
        assert_eq!(buffer.samples(), &[0.5, 0.0, 0.3]);
        assert_eq!(buffer.capacity(), 6);
    }

    #[test]
    fn test_loud_last_sample_stops_trim() {
        let mut buffer = SampleBuffer::from_samples(vec![0.5, 0.0, 0.0, 0.0, 0.2]);
        trim_trailing_silence(&mut buffer);
        assert_eq!(buffer.len(), 5);
    }

    #[test]
    fn test_all_silent_trims_to_empty() {
        let buffer = TrimSilence.apply(SampleBuffer::silence(100));
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 100);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut buffer = SampleBuffer::from_samples(vec![0.1, SILENCE_THRESHOLD, 9e-6]);
        trim_trailing_silence(&mut buffer);
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_trim_is_idempotent() {
        let mut buffer =
            SampleBuffer::from_samples(vec![0.4, -0.2, 1e-9, 0.0, 0.7, 0.0, 2e-6, 0.0]);
        trim_trailing_silence(&mut buffer);
        let once = buffer.len();
        trim_trailing_silence(&mut buffer);
        assert_eq!(buffer.len(), once);
        assert_eq!(once, 5);
    }
}
