use std::path::Path;

use super::common_voice_dataset::CommonVoiceDataset;
use super::custom_dataset::CustomDataset;
use super::libri_speech_dataset::LibriSpeechDataset;
use crate::audio::infrastructure::audio_toolkit::AudioToolkit;
use crate::catalog::domain::dataset::Dataset;
use crate::catalog::domain::dataset_error::DatasetError;
use crate::catalog::domain::dataset_type::DatasetType;
use crate::shared::config::CatalogOptions;

/// Build the catalog for `dataset_type` (`commonvoice`, `librispeech` or
/// `custom`) rooted at `root`.
///
/// Scanning and any audio conversion happen here, before this returns.
pub fn create(
    dataset_type: &str,
    root: &Path,
    toolkit: &AudioToolkit,
    options: &CatalogOptions,
) -> Result<Box<dyn Dataset>, DatasetError> {
    create_typed(dataset_type.parse()?, root, toolkit, options)
}

pub fn create_typed(
    dataset_type: DatasetType,
    root: &Path,
    toolkit: &AudioToolkit,
    options: &CatalogOptions,
) -> Result<Box<dyn Dataset>, DatasetError> {
    log::info!("Scanning {} at {}", dataset_type.label(), root.display());
    Ok(match dataset_type {
        DatasetType::CommonVoice => Box::new(CommonVoiceDataset::new(root, toolkit, options)?),
        DatasetType::LibriSpeech => Box::new(LibriSpeechDataset::new(root, toolkit, options)?),
        DatasetType::Custom => Box::new(CustomDataset::new(root, toolkit, options)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::infrastructure::test_support::{is_wav, stub_toolkit, write_file};
    use rstest::rstest;

    /// A root that satisfies every layout with one usable utterance each.
    /// `original/` holds only files, so it adds no LibriSpeech chapters.
    fn mixed_root() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_file(
            &root.join("cv-valid-test.csv"),
            "filename,text,up_votes,down_votes\ncv.mp3,Hello,2,0\n",
        );
        write_file(&root.join("cv.mp3"), "mp3");
        write_file(&root.join("annotations.csv"), "file,text,language\ncustom.wav,hi,EN\n");
        write_file(&root.join("original/custom.wav"), "src");
        write_file(&root.join("19/198/19-198.trans.txt"), "19-198-0000 NORTHANGER ABBEY\n");
        write_file(&root.join("19/198/19-198-0000.flac"), "flac");
        dir
    }

    #[rstest]
    #[case("commonvoice", "Common Voice Dataset")]
    #[case("librispeech", "LibriSpeech Dataset")]
    #[case("custom", "Custom Dataset")]
    fn test_create_known_types(#[case] dataset_type: &str, #[case] label: &str) {
        let root = mixed_root();
        let (toolkit, _) = stub_toolkit();

        let ds = create(dataset_type, root.path(), &toolkit, &CatalogOptions::default()).unwrap();

        assert_eq!(ds.label(), label);
        assert_eq!(ds.to_string(), label);
        assert_eq!(ds.size(), 1);
        for i in 0..ds.size() {
            assert!(is_wav(ds.get(i).unwrap().audio_path()));
        }
    }

    #[test]
    fn test_create_unknown_type() {
        let dir = tempfile::tempdir().unwrap();
        let (toolkit, counters) = stub_toolkit();

        match create("timit", dir.path(), &toolkit, &CatalogOptions::default()) {
            Err(DatasetError::UnknownDatasetType(t)) => assert_eq!(t, "timit"),
            other => panic!("expected UnknownDatasetType, got {:?}", other.err()),
        }
        assert_eq!(counters.conversions(), 0);
    }

    #[test]
    fn test_create_typed_matches_string_factory() {
        let dir = mixed_root();
        let (toolkit, _) = stub_toolkit();
        let options = CatalogOptions::default();

        let by_name = create("custom", dir.path(), &toolkit, &options).unwrap();
        let by_type = create_typed(DatasetType::Custom, dir.path(), &toolkit, &options).unwrap();

        assert_eq!(by_name.all_data(), by_type.all_data());
    }
}
