use std::path::Path;

use super::ffmpeg_audio_reader::decode;
use super::hound_wav_writer::HoundWavWriter;
use crate::audio::domain::audio_converter::AudioConverter;
use crate::audio::domain::audio_error::AudioError;
use crate::audio::domain::audio_writer::AudioWriter;
use crate::shared::wav_format::WavFormat;

/// Converts source audio to WAV: ffmpeg decodes and resamples, hound encodes.
pub struct FfmpegAudioConverter {
    writer: HoundWavWriter,
}

impl FfmpegAudioConverter {
    pub fn new() -> Self {
        Self {
            writer: HoundWavWriter,
        }
    }
}

impl Default for FfmpegAudioConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioConverter for FfmpegAudioConverter {
    fn convert(&self, src: &Path, dst: &Path, format: &WavFormat) -> Result<(), AudioError> {
        format.validate().map_err(AudioError::UnsupportedFormat)?;
        let audio = decode(src, Some(format.sample_rate), Some(format.channels))?;
        self.writer.write_audio(dst, &audio, format.bit_depth)
    }
}
