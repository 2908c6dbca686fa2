use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::audio::domain::audio_error::AudioError;
use crate::audio::domain::audio_segment::AudioSegment;
use crate::audio::domain::audio_writer::AudioWriter;
use crate::shared::constants::SUPPORTED_BIT_DEPTHS;

/// Writes integer PCM WAV files with hound.
pub struct HoundWavWriter;

impl AudioWriter for HoundWavWriter {
    fn write_audio(
        &self,
        path: &Path,
        audio: &AudioSegment,
        bit_depth: u16,
    ) -> Result<(), AudioError> {
        if !SUPPORTED_BIT_DEPTHS.contains(&bit_depth) {
            return Err(AudioError::UnsupportedFormat(format!(
                "{bit_depth}-bit PCM"
            )));
        }

        let spec = WavSpec {
            channels: audio.channels(),
            sample_rate: audio.sample_rate(),
            bits_per_sample: bit_depth,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(path, spec)?;

        let scale = ((1i64 << (bit_depth - 1)) - 1) as f32;
        for &sample in audio.samples() {
            writer.write_sample((sample.clamp(-1.0, 1.0) * scale).round() as i32)?;
        }
        writer.finalize()?;
        Ok(())
    }
}
