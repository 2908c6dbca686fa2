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
use crate::shared::constants::{CUSTOM_ANNOTATIONS, CUSTOM_LANGUAGE, CUSTOM_ORIGINAL_DIR};

#[derive(Debug, Deserialize)]
struct AnnotationRow {
    file: String,
    text: String,
    language: String,
}

/// In-house corpus: `annotations.csv` naming WAV targets under the root,
/// with source recordings under `original/`.
pub struct CustomDataset {
    catalog: Catalog,
}

impl CustomDataset {
    pub fn new(
        root: &Path,
        toolkit: &AudioToolkit,
        options: &CatalogOptions,
    ) -> Result<Self, DatasetError> {
        let annotations_path = root.join(CUSTOM_ANNOTATIONS);
        let mut reader = csv::Reader::from_path(&annotations_path)
            .map_err(|e| DatasetError::metadata(&annotations_path, e))?;

        let mut catalog = Catalog::new();
        let mut rejected = 0usize;
        let mut converted = 0usize;

        for result in reader.deserialize::<AnnotationRow>() {
            let row = result.map_err(|e| DatasetError::metadata(&annotations_path, e))?;

            if row.text.is_empty() || row.language != CUSTOM_LANGUAGE {
                log::debug!("Rejected {} (language={})", row.file, row.language);
                rejected += 1;
                continue;
            }

            let original_path = root.join(CUSTOM_ORIGINAL_DIR).join(&row.file);
            let wav_path = root.join(&row.file);
            match materialize(&original_path, &wav_path, |src, dst| {
                toolkit.converter.convert(src, dst, &options.format)
            })? {
                Materialized::SourceMissing => {
                    options
                        .missing_audio
                        .handle(DatasetError::MissingSourceAudio {
                            path: original_path,
                        })?;
                    continue;
                }
                Materialized::Converted => converted += 1,
                Materialized::Cached => {}
            }

            catalog.push(CatalogEntry::new(wav_path, row.text));
        }

        log::info!(
            "Custom: {} entries ({} converted, {} rejected)",
            catalog.len(),
            converted,
            rejected
        );
        Ok(Self { catalog })
    }
}

impl Dataset for CustomDataset {
    fn size(&self) -> usize {
        self.catalog.len()
    }

    fn get(&self, index: usize) -> Result<&CatalogEntry, DatasetError> {
        self.catalog.get(index)
    }

    fn label(&self) -> &'static str {
        DatasetType::Custom.label()
    }

    fn all_data(&self) -> Option<&[CatalogEntry]> {
        Some(self.catalog.entries())
    }
}

impl fmt::Display for CustomDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
