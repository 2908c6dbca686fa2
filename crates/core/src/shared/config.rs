use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::constants::{COMMON_VOICE_METADATA, CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use super::wav_format::WavFormat;
use crate::catalog::domain::missing_audio_policy::MissingAudioPolicy;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid output format: {0}")]
    Format(String),
}

/// Options shared by every catalog builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogOptions {
    pub format: WavFormat,
    pub missing_audio: MissingAudioPolicy,
    /// Metadata file read from a Common Voice root.
    pub common_voice_metadata: String,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            format: WavFormat::default(),
            missing_audio: MissingAudioPolicy::default(),
            common_voice_metadata: COMMON_VOICE_METADATA.to_string(),
        }
    }
}

impl CatalogOptions {
    /// Platform config location, e.g. `~/.config/speech-corpus/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load options from `path`, or from the platform config file when no path
    /// is given. A missing platform file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::read(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::read(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let options: Self = serde_json::from_str(&json).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        options.validate()?;
        log::debug!("Loaded catalog options from {}", path.display());
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.format.validate().map_err(ConfigError::Format)
    }
}
