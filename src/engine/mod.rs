//! Audio Engine Module
//!
//! Core buffer type and file export:
//! - Sample buffer management
//! - WAV export

pub mod buffer;
pub mod io;

pub use buffer::{seconds_to_frames, SampleBuffer, SAMPLE_RATE, SILENCE_THRESHOLD};
pub use io::export_wav;
