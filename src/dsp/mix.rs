//! Compositor
//!
//! Sample-wise summation of buffers. The shorter operand is treated as
//! zero-padded out to the longer one's length.

use crate::engine::SampleBuffer;

/// Sum two buffers into a new one of length `max(a.len(), b.len())`
pub fn add(a: &SampleBuffer, b: &SampleBuffer) -> SampleBuffer {
    let (long, short) = if a.len() >= b.len() {
        (a.samples(), b.samples())
    } else {
        (b.samples(), a.samples())
    };

    let mut output = SampleBuffer::allocate(long.len());
    for (i, &sample) in long.iter().enumerate() {
        output.push(sample + short.get(i).copied().unwrap_or(0.0));
    }
    output
}

/// Replace `acc` with `acc + inc`
///
/// The old storage behind `acc` is released once the sum is adopted.
pub fn accumulate(acc: &mut SampleBuffer, inc: &SampleBuffer) {
    let sum = add(acc, inc);
    std::mem::replace(acc, sum).release();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_zero_pads_shorter() {
        let a = SampleBuffer::from_samples(vec![0.5, 0.25, 0.125]);
        let b = SampleBuffer::from_samples(vec![1.0]);
        let sum = add(&a, &b);
        assert_eq!(sum.samples(), &[1.5, 0.25, 0.125]);
    }

    #[test]
    fn test_add_is_commutative() {
        let a = SampleBuffer::from_samples(vec![0.25, -0.5, 0.125, 0.75]);
        let b = SampleBuffer::from_samples(vec![-0.25, 0.5]);
        assert_eq!(add(&a, &b), add(&b, &a));
        assert_eq!(add(&a, &b).len(), 4);
    }

    #[test]
    fn test_add_with_empty_operands() {
        let a = SampleBuffer::from_samples(vec![0.5, 0.5]);
        let empty = SampleBuffer::default();
        assert_eq!(add(&a, &empty).samples(), a.samples());
        assert_eq!(add(&empty, &a).samples(), a.samples());
        assert!(add(&empty, &empty).is_empty());
    }

    #[test]
    fn test_add_ignores_content_past_logical_length() {
        let mut a = SampleBuffer::from_samples(vec![1.0, 1.0, 1.0, 1.0]);
        a.truncate(2);
        let b = SampleBuffer::from_samples(vec![0.5]);
        assert_eq!(add(&a, &b).samples(), &[1.5, 1.0]);
    }

    #[test]
    fn test_accumulate_grows_acc() {
        let mut acc = SampleBuffer::from_samples(vec![0.5]);
        accumulate(&mut acc, &SampleBuffer::from_samples(vec![0.25, 0.25, 0.25]));
        assert_eq!(acc.samples(), &[0.75, 0.25, 0.25]);
        assert_eq!(acc.capacity(), 3);
    }
}
