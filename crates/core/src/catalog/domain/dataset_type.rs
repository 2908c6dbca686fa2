use std::fmt;
use std::str::FromStr;

use super::dataset_error::DatasetError;

/// The corpus layouts a catalog can be built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DatasetType {
    CommonVoice,
    LibriSpeech,
    Custom,
}

impl DatasetType {
    pub const ALL: &[DatasetType] = &[
        DatasetType::CommonVoice,
        DatasetType::LibriSpeech,
        DatasetType::Custom,
    ];

    /// Identifier accepted by the factory.
    pub fn as_str(self) -> &'static str {
        match self {
            DatasetType::CommonVoice => "commonvoice",
            DatasetType::LibriSpeech => "librispeech",
            DatasetType::Custom => "custom",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DatasetType::CommonVoice => "Common Voice Dataset",
            DatasetType::LibriSpeech => "LibriSpeech Dataset",
            DatasetType::Custom => "Custom Dataset",
        }
    }
}

impl FromStr for DatasetType {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DatasetType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DatasetError::UnknownDatasetType(s.to_string()))
    }
}

impl fmt::Display for DatasetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
