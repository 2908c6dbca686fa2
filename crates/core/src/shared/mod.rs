pub mod config;
pub mod constants;
pub mod wav_format;
