//! DSP Library
//!
//! Buffer generators, transforms and the compositor. Every transform is
//! available both as a plain function and as a `Transform` value that can
//! be queued in a `TransformChain`.

mod chain;
mod delay;
mod envelope;
mod filter;
mod gain;
mod generator;
mod mix;
mod resample;
mod transform;
mod trim;

pub use chain::TransformChain;
pub use delay::{delay_shift, DelayShift};
pub use envelope::{fade_out, FadeOut};
pub use filter::{sliding_low_pass, SlidingLowPass};
pub use gain::{amplify_and_clip, renormalize, AmplifyAndClip, Renormalize, NORMALIZE_HEADROOM};
pub use generator::{generate_noise, generate_tone, TONE_AMPLITUDE};
pub use mix::{accumulate, add};
pub use resample::{change_speed, ChangeSpeed};
pub use transform::Transform;
pub use trim::{trim_trailing_silence, TrimSilence};
