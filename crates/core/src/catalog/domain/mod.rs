pub mod catalog;
pub mod catalog_entry;
pub mod dataset;
pub mod dataset_error;
pub mod dataset_type;
pub mod missing_audio_policy;
