//! Stub audio capabilities that write real, silent WAV files.

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::audio::domain::audio_converter::AudioConverter;
use crate::audio::domain::audio_error::AudioError;
use crate::audio::domain::audio_reader::AudioReader;
use crate::audio::domain::audio_segment::AudioSegment;
use crate::audio::domain::audio_writer::AudioWriter;
use crate::audio::infrastructure::audio_toolkit::AudioToolkit;
use crate::audio::infrastructure::hound_wav_writer::HoundWavWriter;
use crate::shared::wav_format::WavFormat;

/// Frames in every stub-produced file (0.1 s at 16 kHz).
pub const STUB_FRAMES: usize = 1600;

#[derive(Clone, Default)]
pub struct Counters {
    pub conversions: Arc<AtomicUsize>,
    pub decodes: Arc<AtomicUsize>,
    pub writes: Arc<AtomicUsize>,
}

impl Counters {
    pub fn conversions(&self) -> usize {
        self.conversions.load(Ordering::SeqCst)
    }

    pub fn decodes(&self) -> usize {
        self.decodes.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

struct StubConverter {
    calls: Arc<AtomicUsize>,
}

impl AudioConverter for StubConverter {
    fn convert(&self, _src: &Path, dst: &Path, format: &WavFormat) -> Result<(), AudioError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let silence = AudioSegment::new(
            vec![0.0; STUB_FRAMES * format.channels as usize],
            format.sample_rate,
            format.channels,
        );
        HoundWavWriter.write_audio(dst, &silence, format.bit_depth)
    }
}

struct StubReader {
    calls: Arc<AtomicUsize>,
}

impl AudioReader for StubReader {
    fn read_audio(&self, _path: &Path) -> Result<AudioSegment, AudioError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(AudioSegment::new(vec![0.0; STUB_FRAMES], 16000, 1))
    }
}

struct CountingWriter {
    calls: Arc<AtomicUsize>,
}

impl AudioWriter for CountingWriter {
    fn write_audio(
        &self,
        path: &Path,
        audio: &AudioSegment,
        bit_depth: u16,
    ) -> Result<(), AudioError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        HoundWavWriter.write_audio(path, audio, bit_depth)
    }
}

pub fn stub_toolkit() -> (AudioToolkit, Counters) {
    let counters = Counters::default();
    let toolkit = AudioToolkit::new(
        Box::new(StubConverter {
            calls: counters.conversions.clone(),
        }),
        Box::new(StubReader {
            calls: counters.decodes.clone(),
        }),
        Box::new(CountingWriter {
            calls: counters.writes.clone(),
        }),
    );
    (toolkit, counters)
}

/// Write `contents` to `path`, creating parent directories.
pub fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

pub fn is_wav(path: &Path) -> bool {
    hound::WavReader::open(path).is_ok()
}
