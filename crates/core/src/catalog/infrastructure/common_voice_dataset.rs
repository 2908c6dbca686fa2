use std::fmt;
use std::path::Path;

use serde::Deserialize;

use super::wav_sibling::{materialize, Materialized};
use crate::audio::infrastructure::audio_toolkit::AudioToolkit;
use crate::catalog::domain::catalog::Catalog;
use crate::catalog::domain::catalog_entry::CatalogEntry;
use crate::catalog::domain::dataset::Dataset;
use crate::catalog::domain::dataset_error::DatasetError;
use crate::catalog::domain::dataset_type::DatasetType;
use crate::shared::config::CatalogOptions;
use crate::shared::constants::{COMMON_VOICE_MIN_UP_VOTES, WAV_EXTENSION};

/// Columns read from a Common Voice metadata CSV. Others are ignored.
#[derive(Debug, Deserialize)]
struct CommonVoiceRow {
    filename: String,
    text: String,
    up_votes: u32,
    down_votes: u32,
}

/// Mozilla Common Voice: a flat CSV plus MP3 clips, converted to WAV siblings.
pub struct CommonVoiceDataset {
    catalog: Catalog,
}

impl CommonVoiceDataset {
    pub fn new(
        root: &Path,
        toolkit: &AudioToolkit,
        options: &CatalogOptions,
    ) -> Result<Self, DatasetError> {
        let metadata_path = root.join(&options.common_voice_metadata);
        let mut reader = csv::Reader::from_path(&metadata_path)
            .map_err(|e| DatasetError::metadata(&metadata_path, e))?;

        let mut catalog = Catalog::new();
        let mut rejected = 0usize;
        let mut converted = 0usize;

        for result in reader.deserialize::<CommonVoiceRow>() {
            let row = result.map_err(|e| DatasetError::metadata(&metadata_path, e))?;
            let text = row.text.to_lowercase();

            if !passes_quality_gate(row.up_votes, row.down_votes, &text) {
                log::debug!(
                    "Rejected {} (up={}, down={}, text_len={})",
                    row.filename,
                    row.up_votes,
                    row.down_votes,
                    text.len()
                );
                rejected += 1;
                continue;
            }

            let mp3_path = root.join(&row.filename);
            let wav_path = mp3_path.with_extension(WAV_EXTENSION);
            match materialize(&mp3_path, &wav_path, |src, dst| {
                toolkit.converter.convert(src, dst, &options.format)
            })? {
                Materialized::SourceMissing => {
                    options
                        .missing_audio
                        .handle(DatasetError::MissingSourceAudio { path: mp3_path })?;
                    continue;
                }
                Materialized::Converted => converted += 1,
                Materialized::Cached => {}
            }

            catalog.push(CatalogEntry::new(wav_path, text));
        }

        log::info!(
            "Common Voice: {} entries ({} converted, {} rejected by vote filter)",
            catalog.len(),
            converted,
            rejected
        );
        Ok(Self { catalog })
    }
}

/// At least two up-votes, no down-votes, non-empty text.
fn passes_quality_gate(up_votes: u32, down_votes: u32, text: &str) -> bool {
    up_votes >= COMMON_VOICE_MIN_UP_VOTES && down_votes == 0 && !text.is_empty()
}

impl Dataset for CommonVoiceDataset {
    fn size(&self) -> usize {
        self.catalog.len()
    }

    fn get(&self, index: usize) -> Result<&CatalogEntry, DatasetError> {
        self.catalog.get(index)
    }

    fn label(&self) -> &'static str {
        DatasetType::CommonVoice.label()
    }
}

impl fmt::Display for CommonVoiceDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
