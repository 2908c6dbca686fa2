pub mod audio_toolkit;
pub mod ffmpeg_audio_converter;
pub mod ffmpeg_audio_reader;
pub mod hound_wav_probe;
pub mod hound_wav_writer;
