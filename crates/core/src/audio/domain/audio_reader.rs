use std::path::Path;

use super::audio_error::AudioError;
use super::audio_segment::AudioSegment;

/// Domain interface for decoding an audio file at its native rate and layout.
pub trait AudioReader: Send {
    fn read_audio(&self, path: &Path) -> Result<AudioSegment, AudioError>;
}
