use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("ffmpeg: {0}")]
    Ffmpeg(#[from] ffmpeg_next::Error),
    #[error("wav: {0}")]
    Wav(#[from] hound::Error),
    #[error("no audio stream in {0}")]
    NoAudioStream(PathBuf),
    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),
}
