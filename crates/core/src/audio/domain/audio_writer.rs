use std::path::Path;

use super::audio_error::AudioError;
use super::audio_segment::AudioSegment;

/// Domain interface for encoding an AudioSegment as integer PCM WAV.
pub trait AudioWriter: Send {
    fn write_audio(
        &self,
        path: &Path,
        audio: &AudioSegment,
        bit_depth: u16,
    ) -> Result<(), AudioError>;
}
