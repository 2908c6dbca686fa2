use std::path::Path;

use hound::WavReader;

use crate::audio::domain::audio_error::AudioError;
use crate::audio::domain::audio_probe::AudioProbe;

/// Reads sample counts from WAV headers.
pub struct HoundWavProbe;

impl AudioProbe for HoundWavProbe {
    fn sample_count(&self, path: &Path) -> Result<u64, AudioError> {
        let reader = WavReader::open(path)?;
        Ok(reader.len() as u64)
    }
}
