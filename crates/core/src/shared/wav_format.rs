use serde::{Deserialize, Serialize};

use super::constants::{SUPPORTED_BIT_DEPTHS, TARGET_BIT_DEPTH, TARGET_CHANNELS, TARGET_SAMPLE_RATE};

/// Output format for converted audio.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WavFormat {
    pub sample_rate: u32,
    pub bit_depth: u16,
    pub channels: u16,
}

impl Default for WavFormat {
    fn default() -> Self {
        Self {
            sample_rate: TARGET_SAMPLE_RATE,
            bit_depth: TARGET_BIT_DEPTH,
            channels: TARGET_CHANNELS,
        }
    }
}

impl WavFormat {
    pub fn validate(&self) -> Result<(), String> {
        if self.sample_rate == 0 {
            return Err("Sample rate must be positive".to_string());
        }
        if !(1..=2).contains(&self.channels) {
            return Err(format!("Channel count must be 1 or 2, got {}", self.channels));
        }
        if !SUPPORTED_BIT_DEPTHS.contains(&self.bit_depth) {
            return Err(format!(
                "Bit depth must be one of {:?}, got {}",
                SUPPORTED_BIT_DEPTHS, self.bit_depth
            ));
        }
        Ok(())
    }
}
