//! Layered explosion synthesis
//!
//! One explosion is a stack of noise layers. Layer `i` of `n`:
//! - is sped up by `2 * i` (layer 0 keeps its pitch), so higher layers
//!   read as faster, brighter debris
//! - fades out `min(i + 1, 3)` times over its whole length
//! - is low-passed with a coefficient sweeping from `(i + 1) / n` to `i / n`
//!   and renormalized, `max(n - i, 1)` times, leaving the low layers muffled
//!
//! The layers are summed onto layer 0 and the result renormalized.

use log::debug;
use rand::Rng;

use crate::dsp::{
    accumulate, generate_noise, renormalize, ChangeSpeed, FadeOut, Renormalize, SlidingLowPass,
    TransformChain,
};
use crate::engine::{seconds_to_frames, SampleBuffer};

/// Most fade-out passes applied to any single layer
const MAX_FADE_PASSES: usize = 3;

/// Build the transform chain that shapes layer `index` of `layer_count`
pub fn layer_chain(index: usize, layer_count: usize) -> TransformChain {
    let mut chain = TransformChain::new();

    if index > 0 {
        chain.push(ChangeSpeed::new(2.0 * index as f64));
    }

    chain.repeat(FadeOut::whole(), (index + 1).min(MAX_FADE_PASSES));

    let alpha1 = (index + 1) as f64 / layer_count as f64;
    let alpha2 = index as f64 / layer_count as f64;
    let mut filter = TransformChain::new();
    filter.push(SlidingLowPass::new(alpha1, alpha2)).push(Renormalize);
    chain.repeat_chain(&filter, layer_count.saturating_sub(index).max(1));

    chain
}

/// Synthesize one multi-layer explosion lasting roughly `duration_secs`
///
/// Returns an empty buffer when `layer_count` is 0.
pub fn synthesize_explosion<R: Rng + ?Sized>(
    duration_secs: f64,
    layer_count: usize,
    rng: &mut R,
) -> SampleBuffer {
    let frames = seconds_to_frames(duration_secs);

    let mut layers = Vec::with_capacity(layer_count);
    for index in 0..layer_count {
        let noise = generate_noise(frames, rng);
        let layer = layer_chain(index, layer_count).process(noise);
        debug!(
            "[LAYER] {}/{}: {} samples",
            index + 1,
            layer_count,
            layer.len()
        );
        layers.push(layer);
    }

    let mut layers = layers.into_iter();
    let Some(mut explosion) = layers.next() else {
        return SampleBuffer::default();
    };
    for layer in layers {
        accumulate(&mut explosion, &layer);
        layer.release();
    }
    renormalize(&mut explosion);
    explosion
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::NORMALIZE_HEADROOM;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_layer_chain_shape() {
        assert_eq!(
            layer_chain(0, 2).transform_types(),
            vec![
                "fade_out",
                "sliding_low_pass",
                "renormalize",
                "sliding_low_pass",
                "renormalize"
            ]
        );
        assert_eq!(
            layer_chain(3, 4).transform_types(),
            vec![
                "change_speed",
                "fade_out",
                "fade_out",
                "fade_out",
                "sliding_low_pass",
                "renormalize"
            ]
        );
    }

    #[test]
    fn test_layer_chain_filter_passes_never_below_one() {
        // indices past the layer count still get a single filter pass
        let chain = layer_chain(7, 4);
        let filters = chain
            .transform_types()
            .into_iter()
            .filter(|t| *t == "sliding_low_pass")
            .count();
        assert_eq!(filters, 1);
    }

    #[test]
    fn test_explosion_length_and_level() {
        let mut rng = StdRng::seed_from_u64(11);
        let explosion = synthesize_explosion(0.5, 3, &mut rng);
        // layer 0 is never resampled, so it sets the length
        assert_eq!(explosion.len(), 22050);
        assert!(explosion.is_valid());
        assert!(explosion.peak() <= 1.0 / NORMALIZE_HEADROOM + 1e-12);
        assert!(explosion.peak() > 0.9);
    }

    #[test]
    fn test_explosion_decays() {
        let mut rng = StdRng::seed_from_u64(5);
        let explosion = synthesize_explosion(0.5, 2, &mut rng);
        let samples = explosion.samples();
        let quarter = samples.len() / 4;
        let energy = |s: &[f64]| s.iter().map(|x| x * x).sum::<f64>();
        assert!(energy(&samples[..quarter]) > energy(&samples[3 * quarter..]));
    }

    #[test]
    fn test_explosion_reproducible_from_seed() {
        let a = synthesize_explosion(0.1, 2, &mut StdRng::seed_from_u64(9));
        let b = synthesize_explosion(0.1, 2, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_more_than_ten_layers() {
        let mut rng = StdRng::seed_from_u64(1);
        let explosion = synthesize_explosion(0.05, 12, &mut rng);
        assert_eq!(explosion.len(), 2205);
        assert!(explosion.is_valid());
    }

    #[test]
    fn test_zero_layers_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(synthesize_explosion(1.0, 0, &mut rng).is_empty());
    }
}
