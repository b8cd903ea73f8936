//! Audio file export for Explodomatica
//!
//! Writes finished buffers as uncompressed 16-bit PCM WAV at 44.1kHz.
//! Existing files at the target path are overwritten.

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};
use log::debug;

use crate::engine::buffer::{SampleBuffer, SAMPLE_RATE};
use crate::error::{ExplodeError, Result};

/// Bit depth of exported files
pub const EXPORT_BIT_DEPTH: u16 = 16;

/// Export a buffer to a WAV file
///
/// Each frame carries `channels` copies of the mono sample, so `channels = 1`
/// produces a plain mono file. Samples are scaled to 16-bit and clamped.
///
/// # Arguments
/// * `buffer` - The finished buffer to export
/// * `channels` - Channel count of the written file (1 = mono)
/// * `path` - Path where the file will be written
///
/// # Errors
/// * `FileWrite` - If the target cannot be created or written
/// * `InvalidParameter` - If `channels` is zero
pub fn export_wav(buffer: &SampleBuffer, channels: u16, path: &Path) -> Result<()> {
    if channels == 0 {
        return Err(ExplodeError::invalid_parameter(
            "channels",
            channels,
            "at least 1",
        ));
    }

    let spec = WavSpec {
        channels,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: EXPORT_BIT_DEPTH,
        sample_format: SampleFormat::Int,
    };

    let file_error = |source: hound::Error| ExplodeError::FileWrite {
        path: path.display().to_string(),
        source,
    };

    let mut writer = WavWriter::create(path, spec).map_err(file_error)?;

    for &sample in buffer.samples() {
        let scaled = to_pcm16(sample);
        for _ in 0..channels {
            writer.write_sample(scaled).map_err(file_error)?;
        }
    }

    writer.finalize().map_err(file_error)?;

    debug!(
        "Wrote {} frame(s) x {} channel(s) to {}",
        buffer.len(),
        channels,
        path.display()
    );
    Ok(())
}

/// Scale a float sample to 16-bit PCM, clamping out-of-range values
#[inline]
fn to_pcm16(sample: f64) -> i16 {
    (sample * 32767.0).round().clamp(-32768.0, 32767.0) as i16
}
