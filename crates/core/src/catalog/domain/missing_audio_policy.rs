use serde::{Deserialize, Serialize};

use super::dataset_error::DatasetError;

/// What a builder does with a row whose audio or transcript is missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingAudioPolicy {
    /// Fail the whole scan.
    #[default]
    Abort,
    /// Log a warning and drop the row.
    Skip,
}

impl MissingAudioPolicy {
    /// Returns `error` under `Abort`; logs it and returns `Ok` under `Skip`.
    pub fn handle(self, error: DatasetError) -> Result<(), DatasetError> {
        match self {
            MissingAudioPolicy::Abort => Err(error),
            MissingAudioPolicy::Skip => {
                log::warn!("Skipping row: {error}");
                Ok(())
            }
        }
    }
}
