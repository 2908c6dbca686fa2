use std::path::{Path, PathBuf};

use serde::Serialize;

/// One utterance: a WAV file and its reference transcription.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    audio_path: PathBuf,
    transcript: String,
}

impl CatalogEntry {
    pub fn new(audio_path: PathBuf, transcript: String) -> Self {
        Self {
            audio_path,
            transcript,
        }
    }

    pub fn audio_path(&self) -> &Path {
        &self.audio_path
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }
}
