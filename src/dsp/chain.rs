//! Transform Chain management
//!
//! Transforms are applied in chain order (index 0 first). The buffer is
//! handed from one transform to the next by value, so each stage owns it
//! exclusively while it runs.

use log::trace;

use super::Transform;
use crate::engine::SampleBuffer;

/// Ordered chain of transforms
#[derive(Debug, Clone, Default)]
pub struct TransformChain {
    transforms: Vec<Box<dyn Transform>>,
}

impl TransformChain {
    /// Create a new empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transform to the end of the chain
    pub fn push<T: Transform + 'static>(&mut self, transform: T) -> &mut Self {
        self.transforms.push(Box::new(transform));
        self
    }

    /// Append `times` copies of a transform
    pub fn repeat<T: Transform + 'static>(&mut self, transform: T, times: usize) -> &mut Self {
        let transform: Box<dyn Transform> = Box::new(transform);
        for _ in 0..times {
            self.transforms.push(transform.clone());
        }
        self
    }

    /// Append every transform of another chain, `times` times over
    pub fn repeat_chain(&mut self, chain: &TransformChain, times: usize) -> &mut Self {
        for _ in 0..times {
            self.transforms.extend(chain.transforms.iter().cloned());
        }
        self
    }

    /// Run the buffer through every transform in order
    pub fn process(&self, buffer: SampleBuffer) -> SampleBuffer {
        self.transforms.iter().fold(buffer, |buffer, transform| {
            trace!(
                "[CHAIN] {} on {} samples",
                transform.transform_type(),
                buffer.len()
            );
            transform.apply(buffer)
        })
    }

    /// Get the number of transforms in the chain
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Check if the chain is empty
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Transform type identifiers in chain order
    pub fn transform_types(&self) -> Vec<&'static str> {
        self.transforms.iter().map(|t| t.transform_type()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::{AmplifyAndClip, FadeOut, Renormalize};

    #[test]
    fn test_empty_chain_passthrough() {
        let chain = TransformChain::new();
        let buffer = SampleBuffer::from_samples(vec![0.1, 0.2, 0.3]);
        assert!(chain.is_empty());
        assert_eq!(chain.process(buffer.clone()), buffer);
    }

    #[test]
    fn test_chain_applies_in_order() {
        let mut chain = TransformChain::new();
        chain.push(AmplifyAndClip::new(4.0)).push(Renormalize);

        let out = chain.process(SampleBuffer::from_samples(vec![0.5, -0.1]));

        // clipped to 1.0 first, then scaled just under full scale
        assert!((out.samples()[0] - 1.0 / 1.001).abs() < 1e-12);
        assert!((out.samples()[1] - (-0.4 / 1.001)).abs() < 1e-12);
    }

    #[test]
    fn test_repeat_and_repeat_chain() {
        let mut inner = TransformChain::new();
        inner.push(FadeOut::whole()).push(Renormalize);

        let mut chain = TransformChain::new();
        chain.repeat(FadeOut::whole(), 2).repeat_chain(&inner, 3);

        assert_eq!(chain.len(), 8);
        assert_eq!(
            chain.transform_types(),
            vec![
                "fade_out",
                "fade_out",
                "fade_out",
                "renormalize",
                "fade_out",
                "renormalize",
                "fade_out",
                "renormalize"
            ]
        );
    }
}
