use std::path::Path;

use super::audio_error::AudioError;
use crate::shared::wav_format::WavFormat;

/// Domain interface for converting any source audio into a WAV file.
///
/// Implementations resample to `format.sample_rate`, remix to
/// `format.channels` and quantize to `format.bit_depth`.
pub trait AudioConverter: Send {
    fn convert(&self, src: &Path, dst: &Path, format: &WavFormat) -> Result<(), AudioError>;
}
