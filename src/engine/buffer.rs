//! Sample Buffer Management
//!
//! Provides the mono sample buffer every generator, transform and
//! synthesizer in Explodomatica operates on. All processing happens at a
//! fixed 44.1kHz in 64-bit float.

// ============================================================================
// Constants
// ============================================================================

/// Fixed sample rate for all processing and export (44.1kHz)
pub const SAMPLE_RATE: u32 = 44100;

/// Magnitude below which a trailing sample counts as silence
pub const SILENCE_THRESHOLD: f64 = 0.00001;

// ============================================================================
// Helper Functions
// ============================================================================

/// Convert a duration in seconds to a frame count at `SAMPLE_RATE`
///
/// Rounds to the nearest frame. Negative or non-finite durations map to 0.
#[inline]
pub fn seconds_to_frames(seconds: f64) -> usize {
    let frames = (seconds * SAMPLE_RATE as f64).round();
    if frames.is_finite() && frames > 0.0 {
        frames as usize
    } else {
        0
    }
}

// ============================================================================
// Sample Buffer
// ============================================================================

/// Mono buffer of 64-bit samples with a logical length
///
/// The logical length may be shorter than the allocated capacity. Shrinking
/// operations such as silence trimming only move the logical length and
/// never reallocate; samples past it are not meaningful.
///
/// # Example
/// ```
/// use explodomatica::engine::SampleBuffer;
///
/// let mut buffer = SampleBuffer::allocate(4);
/// assert_eq!(buffer.len(), 0);
/// buffer.push(0.5);
/// assert_eq!(buffer.samples(), &[0.5]);
/// assert_eq!(buffer.capacity(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SampleBuffer {
    /// Backing storage, always `capacity` samples long
    data: Vec<f64>,
    /// Number of meaningful samples at the front of `data`
    len: usize,
}

impl SampleBuffer {
    /// Allocate zero-filled storage for `capacity` samples, logical length 0
    pub fn allocate(capacity: usize) -> Self {
        Self {
            data: vec![0.0; capacity],
            len: 0,
        }
    }

    /// Allocate `len` samples of silence, all of them logically present
    pub fn silence(len: usize) -> Self {
        Self {
            data: vec![0.0; len],
            len,
        }
    }

    /// Adopt an existing vector of samples as a full buffer
    pub fn from_samples(samples: Vec<f64>) -> Self {
        let len = samples.len();
        Self { data: samples, len }
    }

    /// Release the buffer's storage
    ///
    /// Equivalent to dropping it; spelled out where a pipeline stage hands
    /// off its last use of a buffer.
    pub fn release(self) {}

    /// Logical length in samples
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the logical length is zero
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocated capacity in samples
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Duration of the logical content in seconds
    pub fn duration_secs(&self) -> f64 {
        self.len as f64 / SAMPLE_RATE as f64
    }

    /// The meaningful samples
    pub fn samples(&self) -> &[f64] {
        &self.data[..self.len]
    }

    /// The meaningful samples, mutably
    pub fn samples_mut(&mut self) -> &mut [f64] {
        &mut self.data[..self.len]
    }

    /// Append a sample, growing storage only if capacity is exhausted
    pub fn push(&mut self, value: f64) {
        if self.len < self.data.len() {
            self.data[self.len] = value;
        } else {
            self.data.push(value);
        }
        self.len += 1;
    }

    /// Shrink the logical length; never grows it and never reallocates
    pub fn truncate(&mut self, len: usize) {
        self.len = self.len.min(len);
    }

    /// Largest absolute sample value (0.0 for an empty buffer)
    pub fn peak(&self) -> f64 {
        self.samples().iter().map(|s| s.abs()).fold(0.0, f64::max)
    }

    /// Check that every sample is finite
    pub fn is_valid(&self) -> bool {
        self.samples().iter().all(|s| s.is_finite())
    }

    /// Consume the buffer, returning only the meaningful samples
    pub fn into_samples(mut self) -> Vec<f64> {
        self.data.truncate(self.len);
        self.data
    }
}

/// Buffers are equal when their meaningful samples are; capacity is ignored
impl PartialEq for SampleBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.samples() == other.samples()
    }
}
