use std::fmt;

use super::catalog_entry::CatalogEntry;
use super::dataset_error::DatasetError;
use crate::audio::domain::audio_probe::AudioProbe;
use crate::shared::constants::DURATION_SAMPLE_RATE;

/// Read-only, indexed view over a scanned speech corpus.
///
/// Implementations scan and convert eagerly at construction; afterwards the
/// catalog never changes, so indices stay valid for the dataset's lifetime.
pub trait Dataset: fmt::Display + Send {
    /// Number of utterances in the catalog.
    fn size(&self) -> usize;

    /// Entry at `index`, or `IndexOutOfRange` when `index >= size()`.
    fn get(&self, index: usize) -> Result<&CatalogEntry, DatasetError>;

    /// Human-readable dataset name.
    fn label(&self) -> &'static str;

    /// The whole catalog, for variants that expose it in bulk.
    fn all_data(&self) -> Option<&[CatalogEntry]> {
        None
    }

    /// Total speech duration in seconds.
    ///
    /// Re-reads every file on each call; sample counts are divided by a fixed
    /// 16 kHz rate.
    fn size_seconds(&self, probe: &dyn AudioProbe) -> Result<f64, DatasetError> {
        let mut total = 0.0;
        for index in 0..self.size() {
            let path = self.get(index)?.audio_path();
            let samples = probe
                .sample_count(path)
                .map_err(|e| DatasetError::Probe {
                    path: path.to_path_buf(),
                    source: e,
                })?;
            total += samples as f64 / DURATION_SAMPLE_RATE as f64;
        }
        Ok(total)
    }

    /// Total speech duration in hours.
    fn size_hours(&self, probe: &dyn AudioProbe) -> Result<f64, DatasetError> {
        Ok(self.size_seconds(probe)? / 3600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::domain::audio_error::AudioError;
    use crate::catalog::domain::catalog::Catalog;
    use approx::assert_relative_eq;
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    struct FixedDataset {
        catalog: Catalog,
    }

    impl fmt::Display for FixedDataset {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.label())
        }
    }

    impl Dataset for FixedDataset {
        fn size(&self) -> usize {
            self.catalog.len()
        }

        fn get(&self, index: usize) -> Result<&CatalogEntry, DatasetError> {
            self.catalog.get(index)
        }

        fn label(&self) -> &'static str {
            "Fixed Dataset"
        }
    }

    struct MapProbe {
        counts: HashMap<PathBuf, u64>,
        calls: Cell<usize>,
    }

    impl AudioProbe for MapProbe {
        fn sample_count(&self, path: &Path) -> Result<u64, AudioError> {
            self.calls.set(self.calls.get() + 1);
            self.counts
                .get(path)
                .copied()
                .ok_or_else(|| AudioError::NoAudioStream(path.to_path_buf()))
        }
    }

    fn dataset(names: &[&str]) -> FixedDataset {
        FixedDataset {
            catalog: names
                .iter()
                .map(|n| CatalogEntry::new(PathBuf::from(n), "text".to_string()))
                .collect(),
        }
    }

    fn probe(counts: &[(&str, u64)]) -> MapProbe {
        MapProbe {
            counts: counts
                .iter()
                .map(|(n, c)| (PathBuf::from(n), *c))
                .collect(),
            calls: Cell::new(0),
        }
    }

    #[test]
    fn test_size_seconds_sums_all_entries() {
        let ds = dataset(&["a.wav", "b.wav"]);
        let probe = probe(&[("a.wav", 16000), ("b.wav", 8000)]);
        assert_relative_eq!(ds.size_seconds(&probe).unwrap(), 1.5);
    }

    #[test]
    fn test_size_hours() {
        let ds = dataset(&["a.wav"]);
        let probe = probe(&[("a.wav", 16000 * 1800)]);
        assert_relative_eq!(ds.size_hours(&probe).unwrap(), 0.5);
    }

    #[test]
    fn test_size_seconds_rereads_every_call() {
        let ds = dataset(&["a.wav", "b.wav"]);
        let probe = probe(&[("a.wav", 1), ("b.wav", 1)]);
        ds.size_seconds(&probe).unwrap();
        ds.size_seconds(&probe).unwrap();
        assert_eq!(probe.calls.get(), 4);
    }

    #[test]
    fn test_size_seconds_propagates_probe_error() {
        let ds = dataset(&["a.wav", "missing.wav"]);
        let probe = probe(&[("a.wav", 16000)]);
        assert!(matches!(
            ds.size_seconds(&probe),
            Err(DatasetError::Probe { .. })
        ));
    }

    #[test]
    fn test_empty_dataset_has_zero_duration() {
        let ds = dataset(&[]);
        assert_relative_eq!(ds.size_seconds(&probe(&[])).unwrap(), 0.0);
    }

    #[test]
    fn test_all_data_defaults_to_none() {
        assert!(dataset(&["a.wav"]).all_data().is_none());
    }
}
