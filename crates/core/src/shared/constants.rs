/// Sample rate every catalog duration is measured against.
pub const DURATION_SAMPLE_RATE: u32 = 16000;

pub const TARGET_SAMPLE_RATE: u32 = 16000;
pub const TARGET_BIT_DEPTH: u16 = 16;
pub const TARGET_CHANNELS: u16 = 1;

pub const SUPPORTED_BIT_DEPTHS: &[u16] = &[8, 16, 24, 32];

pub const WAV_EXTENSION: &str = "wav";
pub const FLAC_EXTENSION: &str = "flac";

/// Suffix appended to a WAV path while it is being written.
pub const PARTIAL_SUFFIX: &str = ".part";

pub const COMMON_VOICE_METADATA: &str = "cv-valid-test.csv";
pub const COMMON_VOICE_MIN_UP_VOTES: u32 = 2;

pub const CUSTOM_ANNOTATIONS: &str = "annotations.csv";
pub const CUSTOM_ORIGINAL_DIR: &str = "original";
pub const CUSTOM_LANGUAGE: &str = "EN";

pub const LIBRISPEECH_TRANSCRIPT_SUFFIX: &str = ".trans.txt";

pub const CONFIG_DIR_NAME: &str = "speech-corpus";
pub const CONFIG_FILE_NAME: &str = "config.json";
