use std::path::Path;

use super::audio_error::AudioError;

/// Reads how many samples a WAV file holds without decoding it.
pub trait AudioProbe {
    /// Total sample count across all channels.
    fn sample_count(&self, path: &Path) -> Result<u64, AudioError>;
}
