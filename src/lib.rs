//! Explodomatica - Procedural Explosion Synthesizer
//!
//! Builds a layered explosion sound effect entirely offline and writes it
//! to a 16-bit mono WAV file.
//!
//! # Architecture
//!
//! - `engine`: the `SampleBuffer` type and WAV export
//! - `dsp`: generators, transforms and the compositor that operate on buffers
//! - `synth`: layered explosions, pre-explosion bursts and the reverb tail
//! - `pipeline`: orchestrates the synthesizers into one finished buffer

pub mod cli;
pub mod dsp;
pub mod engine;
pub mod error;
pub mod params;
pub mod pipeline;
pub mod synth;

pub use engine::{seconds_to_frames, SampleBuffer, SAMPLE_RATE};
pub use error::{ExplodeError, Result};
pub use params::ExplosionParams;
pub use pipeline::{Pipeline, RenderReport};
