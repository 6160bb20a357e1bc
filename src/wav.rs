//! Converting 16-bit PCM WAV streams.
//!
//! Everything here goes through [`hound`]. The input must hold 16-bit integer samples, any
//! other format is refused before a converter is created. The output has the same channel
//! count at the converted rate.

use std::io::{self, Read, Seek, Write};
use std::path::Path;
use std::sync::Arc;

use hound::{SampleFormat, WavSpec};

use crate::common::{assert_error_traits, ChannelCount, SampleRate};
use crate::converter::{Converter, InitError};
use crate::profile::ConversionRatio;
use crate::Sample;

/// Frames read and converted per block.
const BLOCK_FRAMES: usize = 4096;

/// Error converting a WAV stream.
#[derive(Debug, thiserror::Error, Clone)]
pub enum WavError {
    #[error("Opening input file")]
    OpenInput(#[source] Arc<io::Error>),
    #[error("Opening output file for writing")]
    CreateOutput(#[source] Arc<io::Error>),
    #[error("Could not read the wav header")]
    Opening(#[source] Arc<hound::Error>),
    #[error("Unsupported WAV format {0:?}, only integer PCM is supported")]
    UnsupportedFormat(SampleFormat),
    #[error("{0} bits are currently not supported, only 16")]
    UnsupportedBitDepth(u16),
    #[error("The wav header declares no channels")]
    NoChannels,
    #[error("The wav header declares a sample rate of 0")]
    NoSampleRate,
    #[error("Initialization of the converter failed")]
    Init(#[from] InitError),
    #[error("Failed to read samples")]
    Reading(#[source] Arc<hound::Error>),
    #[error("Could not create wav writer")]
    Creating(#[source] Arc<hound::Error>),
    #[error("Failed to write samples")]
    Writing(#[source] Arc<hound::Error>),
    #[error("Failed to update the wav header")]
    Finishing(#[source] Arc<hound::Error>),
    #[error("Failed to flush all bytes to writer")]
    Flushing(#[source] Arc<io::Error>),
}
assert_error_traits!(WavError);

/// What [`convert_wav`] read and wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavSummary {
    pub ratio: ConversionRatio,
    pub source_rate: SampleRate,
    pub target_rate: SampleRate,
    pub channels: ChannelCount,
    pub bits_per_sample: u16,
    /// Frames read from the input.
    pub frames_in: u64,
    /// Frames written to the output.
    pub frames_out: u64,
}

/// Converts the WAV file at `input` and writes the result to `output`.
///
/// If the output file already exists it will be overwritten.
///
/// # Note
/// This is a convenience wrapper around [`convert_wav`].
pub fn convert_wav_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    ratio: ConversionRatio,
) -> Result<WavSummary, WavError> {
    let input = std::fs::File::open(input)
        .map_err(Arc::new)
        .map_err(WavError::OpenInput)?;
    let mut output = std::fs::File::create(output)
        .map_err(Arc::new)
        .map_err(WavError::CreateOutput)?;
    convert_wav(input, &mut output, ratio)
}

/// Reads a 16-bit PCM WAV stream from `reader`, converts every channel by `ratio` and
/// writes the result as WAV to `writer`.
///
/// A data chunk that ends inside a frame is refused while the header is read, as
/// [`WavError::Opening`], so every block handed to the converter holds whole frames.
///
/// # Example
/// ```rust
/// use polysrc::wav::convert_wav;
/// use polysrc::ConversionRatio;
///
/// let spec = hound::WavSpec {
///     channels: 1,
///     sample_rate: 48_000,
///     bits_per_sample: 16,
///     sample_format: hound::SampleFormat::Int,
/// };
/// let mut input = std::io::Cursor::new(Vec::new());
/// let mut writer = hound::WavWriter::new(&mut input, spec)?;
/// for _ in 0..600 {
///     writer.write_sample(1_000i16)?;
/// }
/// writer.finalize()?;
/// input.set_position(0);
///
/// let mut output = std::io::Cursor::new(Vec::new());
/// let summary = convert_wav(input, &mut output, ConversionRatio::SixToFive)?;
/// assert_eq!(summary.target_rate.get(), 40_000);
/// assert_eq!(summary.frames_out, 500);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn convert_wav(
    reader: impl Read,
    writer: &mut (impl Write + Seek),
    ratio: ConversionRatio,
) -> Result<WavSummary, WavError> {
    let mut reader = hound::WavReader::new(io::BufReader::new(reader))
        .map_err(Arc::new)
        .map_err(WavError::Opening)?;
    let spec = reader.spec();
    if spec.sample_format != SampleFormat::Int {
        return Err(WavError::UnsupportedFormat(spec.sample_format));
    }
    if spec.bits_per_sample != 16 {
        return Err(WavError::UnsupportedBitDepth(spec.bits_per_sample));
    }
    let channels = ChannelCount::new(spec.channels).ok_or(WavError::NoChannels)?;
    let source_rate = SampleRate::new(spec.sample_rate).ok_or(WavError::NoSampleRate)?;

    let mut converter = Converter::new(source_rate, ratio, channels)?;
    let format = WavSpec {
        channels: spec.channels,
        sample_rate: converter.target_rate().get(),
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let stride = usize::from(channels.get());
    let mut input: Vec<Sample> = Vec::with_capacity(BLOCK_FRAMES * stride);
    let mut output: Vec<Sample> = vec![0; converter.output_capacity(BLOCK_FRAMES) * stride];
    let mut frames_in = 0;
    let mut frames_out = 0;

    let mut buffered = io::BufWriter::new(writer);
    {
        let mut writer = hound::WavWriter::new(&mut buffered, format)
            .map_err(Arc::new)
            .map_err(WavError::Creating)?;
        let mut samples = reader.samples::<i16>();
        loop {
            input.clear();
            for sample in samples.by_ref().take(BLOCK_FRAMES * stride) {
                input.push(sample.map_err(Arc::new).map_err(WavError::Reading)?);
            }
            if input.is_empty() {
                break;
            }

            let produced = converter.process_interleaved(&input, &mut output);
            for &sample in &output[..produced * stride] {
                writer
                    .write_sample(sample)
                    .map_err(Arc::new)
                    .map_err(WavError::Writing)?;
            }
            frames_in += (input.len() / stride) as u64;
            frames_out += produced as u64;

            if input.len() < BLOCK_FRAMES * stride {
                break;
            }
        }
        writer
            .finalize()
            .map_err(Arc::new)
            .map_err(WavError::Finishing)?;
    }
    buffered
        .flush()
        .map_err(Arc::new)
        .map_err(WavError::Flushing)?;

    let summary = WavSummary {
        ratio,
        source_rate,
        target_rate: converter.target_rate(),
        channels,
        bits_per_sample: spec.bits_per_sample,
        frames_in,
        frames_out,
    };
    converter.release();

    #[cfg(feature = "tracing")]
    tracing::info!(
        ratio = %summary.ratio,
        source_rate = summary.source_rate.get(),
        target_rate = summary.target_rate.get(),
        channels = summary.channels.get(),
        frames_in = summary.frames_in,
        frames_out = summary.frames_out,
        "converted wav stream"
    );

    Ok(summary)
}
