//! Signal generators
//!
//! Produce fresh buffers from nothing: uniform white noise and a sine tone.

use std::f64::consts::PI;

use rand::Rng;

use crate::engine::{SampleBuffer, SAMPLE_RATE};

/// Amplitude of generated tones
pub const TONE_AMPLITUDE: f64 = 0.5;

/// Generate `nsamples` of white noise
///
/// Each sample is drawn independently and uniformly from [-1.0, 1.0] using
/// the caller's random stream.
pub fn generate_noise<R: Rng + ?Sized>(nsamples: usize, rng: &mut R) -> SampleBuffer {
    let mut buffer = SampleBuffer::allocate(nsamples);
    for _ in 0..nsamples {
        buffer.push(rng.gen_range(-1.0..=1.0));
    }
    buffer
}

/// Generate `nsamples` of a sine tone at `frequency` Hz
///
/// The phase is accumulated sample by sample and never wrapped, so very long
/// tones drift slightly in phase from floating-point error.
pub fn generate_tone(nsamples: usize, frequency: f64) -> SampleBuffer {
    let delta = frequency * 2.0 * PI / SAMPLE_RATE as f64;
    let mut theta = 0.0_f64;
    let mut buffer = SampleBuffer::allocate(nsamples);
    for _ in 0..nsamples {
        buffer.push(theta.sin() * TONE_AMPLITUDE);
        theta += delta;
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_noise_range_and_length() {
        let mut rng = StdRng::seed_from_u64(7);
        let noise = generate_noise(10_000, &mut rng);
        assert_eq!(noise.len(), 10_000);
        assert!(noise.samples().iter().all(|&s| (-1.0..=1.0).contains(&s)));
        // uniform noise should use most of its range
        assert!(noise.peak() > 0.9);
    }

    #[test]
    fn test_noise_is_reproducible_from_seed() {
        let a = generate_noise(256, &mut StdRng::seed_from_u64(42));
        let b = generate_noise(256, &mut StdRng::seed_from_u64(42));
        let c = generate_noise(256, &mut StdRng::seed_from_u64(43));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_noise_zero_length() {
        let noise = generate_noise(0, &mut StdRng::seed_from_u64(1));
        assert!(noise.is_empty());
    }

    #[test]
    fn test_tone_shape() {
        let tone = generate_tone(44100, 441.0);
        assert_eq!(tone.len(), 44100);
        assert_abs_diff_eq!(tone.samples()[0], 0.0);
        // a quarter period of 441 Hz is 25 samples
        assert_abs_diff_eq!(tone.samples()[25], 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(tone.peak(), 0.5, epsilon = 1e-9);
    }
}
