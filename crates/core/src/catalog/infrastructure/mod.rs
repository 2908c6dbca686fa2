pub mod common_voice_dataset;
pub mod custom_dataset;
pub mod dataset_factory;
pub mod jsonl_manifest_writer;
pub mod libri_speech_dataset;
#[cfg(test)]
mod test_support;
pub mod wav_sibling;
