use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use super::wav_sibling::{materialize, Materialized};
use crate::audio::infrastructure::audio_toolkit::AudioToolkit;
use crate::catalog::domain::catalog::Catalog;
use crate::catalog::domain::catalog_entry::CatalogEntry;
use crate::catalog::domain::dataset::Dataset;
use crate::catalog::domain::dataset_error::DatasetError;
use crate::catalog::domain::dataset_type::DatasetType;
use crate::shared::config::CatalogOptions;
use crate::shared::constants::{FLAC_EXTENSION, LIBRISPEECH_TRANSCRIPT_SUFFIX, WAV_EXTENSION};

/// LibriSpeech: `<speaker>/<chapter>/` directories, each holding FLAC
/// utterances and a `<speaker>-<chapter>.trans.txt` transcript.
///
/// Directories and files are visited in name order, so two scans of the
/// same root produce the same catalog.
pub struct LibriSpeechDataset {
    catalog: Catalog,
}

impl LibriSpeechDataset {
    pub fn new(
        root: &Path,
        toolkit: &AudioToolkit,
        options: &CatalogOptions,
    ) -> Result<Self, DatasetError> {
        let mut scan = ChapterScan {
            toolkit,
            options,
            catalog: Catalog::new(),
            converted: 0,
        };

        for speaker_dir in sorted_entries(root, |p| p.is_dir())? {
            for chapter_dir in sorted_entries(&speaker_dir, |p| p.is_dir())? {
                scan.chapter(&speaker_dir, &chapter_dir)?;
            }
        }

        log::info!(
            "LibriSpeech: {} entries ({} converted)",
            scan.catalog.len(),
            scan.converted
        );
        Ok(Self {
            catalog: scan.catalog,
        })
    }
}

struct ChapterScan<'a> {
    toolkit: &'a AudioToolkit,
    options: &'a CatalogOptions,
    catalog: Catalog,
    converted: usize,
}

impl ChapterScan<'_> {
    fn chapter(&mut self, speaker_dir: &Path, chapter_dir: &Path) -> Result<(), DatasetError> {
        let transcript_path = chapter_dir.join(format!(
            "{}-{}{}",
            file_name(speaker_dir),
            file_name(chapter_dir),
            LIBRISPEECH_TRANSCRIPT_SUFFIX
        ));
        let contents = fs::read_to_string(&transcript_path)
            .map_err(|e| DatasetError::io(&transcript_path, e))?;
        let transcripts = parse_transcripts(&contents);

        let flac_files = sorted_entries(chapter_dir, |p| {
            p.is_file() && p.extension().is_some_and(|ext| ext == FLAC_EXTENSION)
        })?;

        for flac_path in flac_files {
            let utterance_id = flac_path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();

            let Some(text) = transcripts.get(&utterance_id) else {
                self.options
                    .missing_audio
                    .handle(DatasetError::MissingTranscript {
                        utterance_id,
                        transcript_path: transcript_path.clone(),
                    })?;
                continue;
            };

            let wav_path = flac_path.with_extension(WAV_EXTENSION);
            let outcome = materialize(&flac_path, &wav_path, |src, dst| {
                let audio = self.toolkit.reader.read_audio(src)?;
                self.toolkit
                    .writer
                    .write_audio(dst, &audio, self.options.format.bit_depth)
            })?;
            if outcome == Materialized::Converted {
                self.converted += 1;
            }

            self.catalog.push(CatalogEntry::new(wav_path, text.clone()));
        }
        Ok(())
    }
}

/// Map utterance ids to transcripts from `<id> <text>` lines.
///
/// Each line is split at its first space only. Blank lines and lines without
/// text are ignored.
pub(crate) fn parse_transcripts(contents: &str) -> HashMap<String, String> {
    contents
        .lines()
        .filter_map(|line| {
            let (id, text) = line.trim_end_matches('\r').split_once(' ')?;
            if id.is_empty() || text.is_empty() {
                return None;
            }
            Some((id.to_string(), text.to_string()))
        })
        .collect()
}

fn sorted_entries(
    dir: &Path,
    keep: impl Fn(&Path) -> bool,
) -> Result<Vec<PathBuf>, DatasetError> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| DatasetError::io(dir, e))? {
        let path = entry.map_err(|e| DatasetError::io(dir, e))?.path();
        if keep(&path) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

impl Dataset for LibriSpeechDataset {
    fn size(&self) -> usize {
        self.catalog.len()
    }

    fn get(&self, index: usize) -> Result<&CatalogEntry, DatasetError> {
        self.catalog.get(index)
    }

    fn label(&self) -> &'static str {
        DatasetType::LibriSpeech.label()
    }
}

impl fmt::Display for LibriSpeechDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
