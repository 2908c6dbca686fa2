use std::fs;
use std::path::{Path, PathBuf};

use crate::audio::domain::audio_error::AudioError;
use crate::catalog::domain::dataset_error::DatasetError;
use crate::shared::constants::PARTIAL_SUFFIX;

/// How a WAV sibling came to exist (or why it didn't).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Materialized {
    /// The WAV was already on disk; nothing was written.
    Cached,
    /// The WAV was produced from the source file.
    Converted,
    /// Neither the WAV nor its source exists.
    SourceMissing,
}

/// Make sure `dst` exists, producing it from `src` with `convert` if needed.
///
/// The presence of `dst` is the only cache key. Conversion writes to
/// `<dst>.part` and renames on success, so a failed conversion never leaves a
/// file at `dst`.
pub fn materialize<F>(src: &Path, dst: &Path, convert: F) -> Result<Materialized, DatasetError>
where
    F: FnOnce(&Path, &Path) -> Result<(), AudioError>,
{
    if dst.exists() {
        log::debug!("Using existing {}", dst.display());
        return Ok(Materialized::Cached);
    }
    if !src.exists() {
        return Ok(Materialized::SourceMissing);
    }

    let partial = partial_path(dst);
    if let Err(e) = convert(src, &partial) {
        let _ = fs::remove_file(&partial);
        return Err(DatasetError::Conversion {
            src: src.to_path_buf(),
            dst: dst.to_path_buf(),
            source: e,
        });
    }
    fs::rename(&partial, dst).map_err(|e| DatasetError::io(dst, e))?;

    log::debug!("Converted {} -> {}", src.display(), dst.display());
    Ok(Materialized::Converted)
}

pub fn partial_path(dst: &Path) -> PathBuf {
    let mut name = dst.as_os_str().to_owned();
    name.push(PARTIAL_SUFFIX);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_existing_dst_skips_conversion() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("a.wav");
        fs::write(&dst, b"wav").unwrap();
        let called = Cell::new(false);

        let outcome = materialize(&dir.path().join("a.mp3"), &dst, |_, _| {
            called.set(true);
            Ok(())
        })
        .unwrap();

        assert_eq!(outcome, Materialized::Cached);
        assert!(!called.get());
    }

    #[test]
    fn test_missing_source_reports_without_converting() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = materialize(
            &dir.path().join("a.mp3"),
            &dir.path().join("a.wav"),
            |_, _| panic!("must not convert"),
        )
        .unwrap();
        assert_eq!(outcome, Materialized::SourceMissing);
    }

    #[test]
    fn test_converts_through_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("a.mp3");
        let dst = dir.path().join("a.wav");
        fs::write(&src, b"mp3").unwrap();

        let outcome = materialize(&src, &dst, |_, out| {
            assert_eq!(out, partial_path(&dst).as_path());
            fs::write(out, b"converted").unwrap();
            Ok(())
        })
        .unwrap();

        assert_eq!(outcome, Materialized::Converted);
        assert_eq!(fs::read(&dst).unwrap(), b"converted");
        assert!(!partial_path(&dst).exists());
    }

    #[test]
    fn test_failed_conversion_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("a.mp3");
        let dst = dir.path().join("a.wav");
        fs::write(&src, b"mp3").unwrap();

        let result = materialize(&src, &dst, |_, out| {
            fs::write(out, b"half").unwrap();
            Err(AudioError::UnsupportedFormat("broken".to_string()))
        });

        assert!(matches!(result, Err(DatasetError::Conversion { .. })));
        assert!(!dst.exists());
        assert!(!partial_path(&dst).exists());
    }

    #[test]
    fn test_partial_path_appends_suffix() {
        assert_eq!(
            partial_path(Path::new("/data/clip.wav")),
            PathBuf::from("/data/clip.wav.part")
        );
    }
}
