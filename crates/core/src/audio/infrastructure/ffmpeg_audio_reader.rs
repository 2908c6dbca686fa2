use std::path::Path;

use ffmpeg_next::format::sample::Type as SampleType;
use ffmpeg_next::format::Sample;
use ffmpeg_next::ChannelLayout;

use crate::audio::domain::audio_error::AudioError;
use crate::audio::domain::audio_reader::AudioReader;
use crate::audio::domain::audio_segment::AudioSegment;

/// Decodes audio files (MP3, FLAC, WAV, ...) using ffmpeg-next.
pub struct FfmpegAudioReader;

impl AudioReader for FfmpegAudioReader {
    fn read_audio(&self, path: &Path) -> Result<AudioSegment, AudioError> {
        decode(path, None, None)
    }
}

/// Decode the best audio stream of `path` into packed f32 samples.
///
/// `target_rate` and `target_channels` default to the stream's own values,
/// in which case the resampler only converts the sample format.
pub(crate) fn decode(
    path: &Path,
    target_rate: Option<u32>,
    target_channels: Option<u16>,
) -> Result<AudioSegment, AudioError> {
    ffmpeg_next::init()?;

    let mut ictx = ffmpeg_next::format::input(path)?;

    let audio_stream = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Audio)
        .ok_or_else(|| AudioError::NoAudioStream(path.to_path_buf()))?;

    let audio_stream_index = audio_stream.index();
    let codec_ctx =
        ffmpeg_next::codec::context::Context::from_parameters(audio_stream.parameters())?;
    let mut decoder = codec_ctx.decoder().audio()?;

    let source_channels = decoder.channels() as u16;
    let source_layout = if decoder.channel_layout().is_empty() {
        layout_for(source_channels)?
    } else {
        decoder.channel_layout()
    };

    let out_rate = target_rate.unwrap_or(decoder.rate());
    let out_channels = target_channels.unwrap_or(source_channels);
    let out_layout = layout_for(out_channels)?;

    let mut resampler = ffmpeg_next::software::resampling::Context::get(
        decoder.format(),
        source_layout,
        decoder.rate(),
        Sample::F32(SampleType::Packed),
        out_layout,
        out_rate,
    )?;

    let mut sink = ResampleSink {
        resampler,
        in_rate: decoder.rate(),
        out_rate,
        out_layout,
        out_channels,
        samples: Vec::new(),
    };
    let mut decoded_frame = ffmpeg_next::util::frame::audio::Audio::empty();

    for (stream, packet) in ictx.packets() {
        if stream.index() != audio_stream_index {
            continue;
        }

        decoder.send_packet(&packet)?;
        drain_decoder(&mut decoder, &mut decoded_frame, &mut sink)?;
    }

    decoder.send_eof()?;
    drain_decoder(&mut decoder, &mut decoded_frame, &mut sink)?;
    sink.flush()?;

    let audio = AudioSegment::new(sink.samples, out_rate, out_channels);
    log::debug!(
        "Decoded {} ({} Hz, {} ch) -> {} frames ({:.2} s) at {} Hz, {} ch",
        path.display(),
        decoder.rate(),
        source_channels,
        audio.frames(),
        audio.duration(),
        out_rate,
        out_channels
    );

    Ok(audio)
}

/// Feed every frame the decoder has ready into `sink`.
///
/// Stops on EAGAIN (needs another packet) or EOF; any other decoder error
/// is returned so a corrupt stream never turns into a short WAV.
fn drain_decoder(
    decoder: &mut ffmpeg_next::codec::decoder::Audio,
    frame: &mut ffmpeg_next::util::frame::audio::Audio,
    sink: &mut ResampleSink,
) -> Result<(), AudioError> {
    loop {
        match decoder.receive_frame(frame) {
            Ok(()) => sink.push(frame)?,
            Err(ffmpeg_next::Error::Eof) => return Ok(()),
            Err(ffmpeg_next::Error::Other { errno }) if errno == ffmpeg_next::error::EAGAIN => {
                return Ok(())
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Resampler plus the packed output collected so far.
struct ResampleSink {
    resampler: ffmpeg_next::software::resampling::Context,
    in_rate: u32,
    out_rate: u32,
    out_layout: ChannelLayout,
    out_channels: u16,
    samples: Vec<f32>,
}

impl ResampleSink {
    fn push(&mut self, input: &ffmpeg_next::util::frame::audio::Audio) -> Result<(), AudioError> {
        let capacity = output_capacity(input.samples(), self.in_rate, self.out_rate, self.delay());
        let mut output = self.output_frame(capacity);
        self.resampler.run(input, &mut output)?;
        extract_packed_samples(&output, self.out_channels, &mut self.samples);
        Ok(())
    }

    /// Drain everything still buffered inside the resampler.
    fn flush(&mut self) -> Result<(), AudioError> {
        loop {
            let mut output = self.output_frame(self.delay() + FLUSH_HEADROOM);
            self.resampler.flush(&mut output)?;
            if output.samples() == 0 {
                return Ok(());
            }
            extract_packed_samples(&output, self.out_channels, &mut self.samples);
        }
    }

    /// Output samples currently buffered by the resampler.
    fn delay(&self) -> usize {
        self.resampler
            .delay()
            .map(|d| d.output.max(0) as usize)
            .unwrap_or(0)
    }

    fn output_frame(&self, capacity: usize) -> ffmpeg_next::util::frame::audio::Audio {
        ffmpeg_next::util::frame::audio::Audio::new(
            Sample::F32(SampleType::Packed),
            capacity,
            self.out_layout,
        )
    }
}

/// Extra output slots beyond the rate-scaled input, for filter rounding.
const FLUSH_HEADROOM: usize = 32;

/// Room for every sample one `run` can produce: the rate-scaled input
/// (rounded up) plus whatever the resampler already holds.
fn output_capacity(in_samples: usize, in_rate: u32, out_rate: u32, delay: usize) -> usize {
    let scaled = (in_samples as u64 * out_rate as u64).div_ceil(in_rate.max(1) as u64);
    scaled as usize + delay + FLUSH_HEADROOM
}

fn layout_for(channels: u16) -> Result<ChannelLayout, AudioError> {
    match channels {
        1 => Ok(ChannelLayout::MONO),
        2 => Ok(ChannelLayout::STEREO),
        n => Err(AudioError::UnsupportedFormat(format!(
            "cannot map {n} channels to a layout"
        ))),
    }
}

/// Append the interleaved f32 samples of a packed frame.
fn extract_packed_samples(
    frame: &ffmpeg_next::util::frame::audio::Audio,
    channels: u16,
    out: &mut Vec<f32>,
) {
    let num_samples = frame.samples() * channels as usize;
    if num_samples == 0 {
        return;
    }
    let data = frame.data(0);
    let floats = unsafe { std::slice::from_raw_parts(data.as_ptr() as *const f32, num_samples) };
    out.extend_from_slice(floats);
}
