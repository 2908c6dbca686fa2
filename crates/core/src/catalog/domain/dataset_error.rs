use std::path::PathBuf;

use thiserror::Error;

use crate::audio::domain::audio_error::AudioError;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("cannot create dataset of type '{0}' (expected commonvoice, librispeech or custom)")]
    UnknownDatasetType(String),
    #[error("index {index} out of range for dataset of size {size}")]
    IndexOutOfRange { index: usize, size: usize },
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed metadata in {path}: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("source audio not found: {path}")]
    MissingSourceAudio { path: PathBuf },
    #[error("no transcript for utterance {utterance_id} in {transcript_path}")]
    MissingTranscript {
        utterance_id: String,
        transcript_path: PathBuf,
    },
    #[error("failed to convert {src} to {dst}: {source}")]
    Conversion {
        src: PathBuf,
        dst: PathBuf,
        #[source]
        source: AudioError,
    },
    #[error("failed to read duration of {path}: {source}")]
    Probe {
        path: PathBuf,
        #[source]
        source: AudioError,
    },
    #[error("failed to write manifest {path}: {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl DatasetError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn metadata(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Metadata {
            path: path.into(),
            source,
        }
    }
}
