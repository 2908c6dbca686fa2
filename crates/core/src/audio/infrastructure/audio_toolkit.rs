use crate::audio::domain::audio_converter::AudioConverter;
use crate::audio::domain::audio_reader::AudioReader;
use crate::audio::domain::audio_writer::AudioWriter;

use super::ffmpeg_audio_converter::FfmpegAudioConverter;
use super::ffmpeg_audio_reader::FfmpegAudioReader;
use super::hound_wav_writer::HoundWavWriter;

/// The audio capabilities a catalog builder may need.
///
/// Common Voice and Custom corpora go through `converter`; LibriSpeech
/// decodes with `reader` and re-encodes with `writer` at the native rate.
pub struct AudioToolkit {
    pub converter: Box<dyn AudioConverter>,
    pub reader: Box<dyn AudioReader>,
    pub writer: Box<dyn AudioWriter>,
}

impl AudioToolkit {
    pub fn new(
        converter: Box<dyn AudioConverter>,
        reader: Box<dyn AudioReader>,
        writer: Box<dyn AudioWriter>,
    ) -> Self {
        Self {
            converter,
            reader,
            writer,
        }
    }

    /// ffmpeg decoding with hound WAV output.
    pub fn ffmpeg() -> Self {
        Self::new(
            Box::new(FfmpegAudioConverter::new()),
            Box::new(FfmpegAudioReader),
            Box::new(HoundWavWriter),
        )
    }
}
