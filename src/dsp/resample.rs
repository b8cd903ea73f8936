//! Variable-rate resampling ("speed change")
//!
//! Linear interpolation between the two source samples nearest each target
//! position. The output length is `round(n / factor)`: factors above 1.0
//! shorten the sound and raise its pitch, factors below 1.0 stretch it.
//!
//! The last target positions can fall between the final source sample and
//! one past the end. The upper neighbour is clamped to the final sample, so
//! those outputs hold the final source value.

use super::Transform;
use crate::engine::{SampleBuffer, SAMPLE_RATE};
use crate::impl_transform_common;

/// Neighbour spacing below which two x-positions are treated as the same point
const COINCIDENT_EPSILON: f64 = 0.01 / SAMPLE_RATE as f64;

/// Return the y on the line through (x1, y1) and (x2, y2) at `x`
///
/// Falls back to the midpoint of `y1` and `y2` when the x-positions coincide.
#[inline]
fn interpolate(x: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    if (x2 - x1).abs() < COINCIDENT_EPSILON {
        return (y1 + y2) / 2.0;
    }
    (x - x1) * (y2 - y1) / (x2 - x1) + y1
}

/// Output length of a speed change, 0 for degenerate factors
fn resampled_len(nsamples: usize, factor: f64) -> usize {
    let len = (nsamples as f64 / factor).round();
    if len.is_finite() && len > 0.0 {
        len as usize
    } else {
        0
    }
}

/// Derive a resampled copy of `input` played `factor` times faster
pub fn change_speed(input: &SampleBuffer, factor: f64) -> SampleBuffer {
    let source = input.samples();
    let target_len = if source.is_empty() {
        0
    } else {
        resampled_len(source.len(), factor)
    };

    let mut output = SampleBuffer::allocate(target_len);
    if target_len == 0 {
        return output;
    }

    let last = source.len() - 1;
    output.push(source[0]);
    for i in 1..target_len {
        let sample_point = i as f64 / target_len as f64 * source.len() as f64;
        let sp1 = (sample_point as usize).min(last);
        let sp2 = (sp1 + 1).min(last);
        output.push(interpolate(
            sample_point,
            sp1 as f64,
            source[sp1],
            sp2 as f64,
            source[sp2],
        ));
    }
    output
}

/// Speed change as a chainable transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChangeSpeed {
    factor: f64,
}

impl ChangeSpeed {
    /// Play back `factor` times faster
    pub fn new(factor: f64) -> Self {
        Self { factor }
    }
}

impl Transform for ChangeSpeed {
    fn apply(&self, buffer: SampleBuffer) -> SampleBuffer {
        change_speed(&buffer, self.factor)
    }

    impl_transform_common!("change_speed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn ramp(n: usize) -> SampleBuffer {
        SampleBuffer::from_samples((0..n).map(|i| i as f64).collect())
    }

    #[test]
    fn test_interpolate() {
        assert_abs_diff_eq!(interpolate(1.5, 1.0, 2.0, 2.0, 4.0), 3.0);
        assert_abs_diff_eq!(interpolate(1.0, 1.0, 2.0, 1.0, 4.0), 3.0);
    }

    #[test]
    fn test_unit_factor_is_identity() {
        let input = SampleBuffer::from_samples(vec![0.3, -0.1, 0.9, 0.2, -0.7]);
        let output = change_speed(&input, 1.0);
        assert_eq!(output.len(), input.len());
        for (out, inp) in output.samples().iter().zip(input.samples()) {
            assert_abs_diff_eq!(*out, *inp, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_speed_up_halves_length() {
        let output = change_speed(&ramp(8), 2.0);
        assert_eq!(output.samples(), &[0.0, 2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_slow_down_interpolates_and_clamps_boundary() {
        let input = SampleBuffer::from_samples(vec![0.0, 2.0, 4.0, 6.0]);
        let output = ChangeSpeed::new(0.5).apply(input);
        // the final target point sits past the last source sample and holds it
        assert_eq!(output.samples(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 6.0]);
    }

    #[test]
    fn test_length_rounds() {
        assert_eq!(change_speed(&ramp(10), 3.0).len(), 3);
        assert_eq!(change_speed(&ramp(10), 4.0).len(), 3);
        assert_eq!(change_speed(&ramp(10), 0.25).len(), 40);
    }

    #[test]
    fn test_round_trip_recovers_length() {
        for (n, factor) in [(1000usize, 3.0), (44100, 0.25), (12345, 1.7), (777, 8.0)] {
            let there = change_speed(&ramp(n), factor);
            let back = change_speed(&there, 1.0 / factor);
            let tolerance = factor.max(1.0).ceil() as usize;
            assert!(
                back.len().abs_diff(n) <= tolerance,
                "n={} factor={} got {}",
                n,
                factor,
                back.len()
            );
        }
    }

    #[test]
    fn test_never_reads_past_end() {
        for n in 1..20 {
            for factor in [0.1, 0.3, 0.77, 1.0, 1.5, 2.0] {
                let output = change_speed(&ramp(n), factor);
                assert!(output.samples().iter().all(|&s| s <= (n - 1) as f64));
            }
        }
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(change_speed(&SampleBuffer::default(), 2.0).is_empty());
        assert!(change_speed(&ramp(3), 100.0).is_empty());
        assert!(change_speed(&ramp(3), 0.0).is_empty());
    }
}
