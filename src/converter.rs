use std::collections::TryReserveError;

use num_rational::Ratio;

use crate::common::{assert_error_traits, ChannelCount, SampleRate};
use crate::profile::{ConversionProfile, ConversionRatio, UnknownRatio};
use crate::stage::{self, PolyphaseStage};
use crate::Sample;

/// Error that can happen when creating a [`Converter`].
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum InitError {
    /// The conversion index does not name one of the supported ratios.
    #[error(transparent)]
    UnknownRatio(#[from] UnknownRatio),
    /// The source rate converted by the ratio is not a whole number of samples per second,
    /// or it does not fit a [`SampleRate`].
    #[error("converting {source_rate} Hz {ratio} does not give a whole sample rate")]
    InexactRate {
        /// Rate the converter was asked to read.
        source_rate: u32,
        /// Ratio that was requested.
        ratio: ConversionRatio,
    },
    /// Memory for the delay lines could not be reserved.
    #[error("could not reserve delay line storage")]
    Allocation(#[from] TryReserveError),
}
assert_error_traits!(InitError);

/// Converts one or more channels of 16-bit audio at a fixed ratio.
///
/// A converter belongs to a single stream. It keeps the filter history of every channel so
/// a stream can be fed in blocks of any size: the concatenated output is the same as if the
/// whole stream had been converted in one call.
///
/// All memory is reserved by [`Converter::new`] and given back when the converter is
/// [released](Converter::release) or dropped. Processing never allocates.
#[derive(Debug, Clone)]
pub struct Converter {
    ratio: ConversionRatio,
    source_rate: SampleRate,
    target_rate: SampleRate,
    channel_count: ChannelCount,
    channels: Box<[Channel]>,
}

impl Converter {
    /// Creates a converter reading `channels` channels at `source_rate`.
    ///
    /// The target rate is `source_rate * U / D` for the ratio's interpolation factor `U` and
    /// decimation factor `D`. It must come out as a whole number.
    pub fn new(
        source_rate: SampleRate,
        ratio: ConversionRatio,
        channels: ChannelCount,
    ) -> Result<Self, InitError> {
        let profile = ratio.profile();
        let target_rate = Ratio::from_integer(u64::from(source_rate.get()))
            * Ratio::new(
                u64::from(profile.interpolation()),
                u64::from(profile.decimation()),
            );
        let inexact = || InitError::InexactRate {
            source_rate: source_rate.get(),
            ratio,
        };
        if !target_rate.is_integer() {
            return Err(inexact());
        }
        let target_rate = u32::try_from(target_rate.to_integer())
            .ok()
            .and_then(SampleRate::new)
            .ok_or_else(inexact)?;

        let mut list = Vec::new();
        list.try_reserve_exact(usize::from(channels.get()))?;
        for _ in 0..channels.get() {
            list.push(Channel::new(profile)?);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            %ratio,
            source_rate = source_rate.get(),
            target_rate = target_rate.get(),
            channels = channels.get(),
            delay_line_len = profile.delay_line_len(),
            "created converter"
        );

        Ok(Self {
            ratio,
            source_rate,
            target_rate,
            channel_count: channels,
            channels: list.into_boxed_slice(),
        })
    }

    /// Like [`Converter::new`], selecting the ratio by its conventional index.
    ///
    /// See [`ConversionRatio`] for the indices.
    pub fn from_index(
        source_rate: SampleRate,
        index: u8,
        channels: ChannelCount,
    ) -> Result<Self, InitError> {
        Self::new(source_rate, ConversionRatio::try_from(index)?, channels)
    }

    /// The ratio this converter was created for.
    pub fn ratio(&self) -> ConversionRatio {
        self.ratio
    }

    /// The profile backing [`Converter::ratio`].
    pub fn profile(&self) -> &'static ConversionProfile {
        self.ratio.profile()
    }

    /// Rate of the input.
    pub fn source_rate(&self) -> SampleRate {
        self.source_rate
    }

    /// Rate of the output, exactly `source_rate * U / D`.
    pub fn target_rate(&self) -> SampleRate {
        self.target_rate
    }

    /// Number of channels.
    pub fn channel_count(&self) -> ChannelCount {
        self.channel_count
    }

    /// Output frames a call with `frames` input frames is guaranteed to fit in, whatever
    /// was converted before.
    pub fn output_capacity(&self, frames: usize) -> usize {
        let profile = self.profile();
        let frames = frames as u64;
        let up = u64::from(profile.interpolation());
        let down = u64::from(profile.decimation());
        (frames * up).div_ceil(down) as usize + 1
    }

    /// Converts one channel of the interleaved block `input` into the interleaved `output`.
    ///
    /// Both buffers are laid out with [`Converter::channel_count`] samples per frame; only
    /// the samples of `channel` are read and written. Returns the number of frames
    /// produced.
    ///
    /// # Panics
    /// If `channel` is out of range, if `input` is not a whole number of frames or if
    /// `output` can not hold the produced frames.
    pub fn process_channel(
        &mut self,
        channel: usize,
        input: &[Sample],
        output: &mut [Sample],
    ) -> usize {
        let stride = self.channels.len();
        assert!(
            channel < stride,
            "channel {channel} out of range for {stride} channels"
        );
        assert!(
            input.len() % stride == 0,
            "input holds {} samples, not a whole number of {stride} channel frames",
            input.len()
        );
        let frames = input.len() / stride;
        let input = input.get(channel..).unwrap_or(&[]);
        let output = output.get_mut(channel..).unwrap_or(&mut []);
        self.channels[channel].process(input, output, frames, stride)
    }

    /// Converts every channel of the interleaved block `input` into `output`.
    ///
    /// Returns the number of frames produced, the same for every channel. An `output` of
    /// [`Converter::output_capacity`] frames is always large enough.
    ///
    /// # Panics
    /// If the channels were advanced by different amounts through
    /// [`Converter::process_channel`] or [`Converter::channels_mut`], and on the conditions
    /// listed for [`Converter::process_channel`].
    pub fn process_interleaved(&mut self, input: &[Sample], output: &mut [Sample]) -> usize {
        let frames_in = self.channels[0].frames_in;
        assert!(
            self.channels.iter().all(|c| c.frames_in == frames_in),
            "channels were advanced separately and are not level"
        );
        let mut produced = 0;
        for channel in 0..self.channels.len() {
            produced = self.process_channel(channel, input, output);
        }
        produced
    }

    /// Clears the history of every channel, as if nothing had been converted yet.
    ///
    /// No memory is given back or reserved.
    pub fn reset(&mut self) {
        for channel in self.channels.iter_mut() {
            channel.reset();
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(ratio = %self.ratio, channels = self.channels.len(), "reset converter");
    }

    /// All channels, each usable on its own, for example from different threads.
    ///
    /// ```rust
    /// use polysrc::{nz, ConversionRatio, Converter};
    ///
    /// let mut converter = Converter::new(nz!(44_100), ConversionRatio::NineToEight, nz!(2))?;
    /// let left = vec![1_000i16; 441];
    /// let right = vec![-1_000i16; 441];
    ///
    /// std::thread::scope(|s| {
    ///     for (channel, input) in converter.channels_mut().iter_mut().zip([&left, &right]) {
    ///         s.spawn(move || {
    ///             let mut output = vec![0i16; 400];
    ///             assert_eq!(channel.process(input, &mut output, input.len(), 1), 392);
    ///         });
    ///     }
    /// });
    /// # Ok::<(), polysrc::InitError>(())
    /// ```
    pub fn channels_mut(&mut self) -> &mut [Channel] {
        &mut self.channels
    }

    /// A single channel, `None` if `index` is out of range.
    pub fn channel_mut(&mut self, index: usize) -> Option<&mut Channel> {
        self.channels.get_mut(index)
    }

    /// Gives back all memory held by this converter.
    ///
    /// Dropping the converter does the same; this only makes the end of a stream explicit.
    pub fn release(self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            ratio = %self.ratio,
            channels = self.channels.len(),
            "released converter"
        );
        drop(self);
    }
}

/// Filter history of one channel of a [`Converter`].
#[derive(Debug, Clone)]
pub struct Channel {
    profile: &'static ConversionProfile,
    stages: Box<[PolyphaseStage]>,
    frames_in: u64,
}

impl Channel {
    fn new(profile: &'static ConversionProfile) -> Result<Self, TryReserveError> {
        let specs = profile.stages();
        let mut stages = Vec::new();
        stages.try_reserve_exact(specs.len())?;
        for (index, spec) in specs.iter().enumerate() {
            let gain = (index == profile.gain_stage()).then_some(profile.gain());
            stages.push(PolyphaseStage::new(*spec, gain)?);
        }
        Ok(Self {
            profile,
            stages: stages.into_boxed_slice(),
            frames_in: 0,
        })
    }

    /// Input frames converted since creation or the last reset.
    pub fn frames_in(&self) -> u64 {
        self.frames_in
    }

    /// Exact number of frames the next call with `frames` input frames produces.
    ///
    /// This follows the running total: `floor((n + frames) * U / D) - floor(n * U / D)`
    /// with `n` the input frames converted so far.
    pub fn expected_output(&self, frames: usize) -> usize {
        let up = u64::from(self.profile.interpolation());
        let down = u64::from(self.profile.decimation());
        let before = self.frames_in * up / down;
        let after = (self.frames_in + frames as u64) * up / down;
        (after - before) as usize
    }

    /// Converts `frames` samples of this channel.
    ///
    /// Consecutive samples are `stride` elements apart in both `input` and `output`, so with
    /// `stride` set to the channel count and both slices starting at this channel's offset
    /// the channel is read from and written into an interleaved buffer. Returns the number
    /// of samples written, see [`Channel::expected_output`].
    ///
    /// # Panics
    /// If `stride` is zero, if `input` holds fewer than `frames` samples or if `output` can
    /// not hold the samples produced.
    pub fn process(
        &mut self,
        input: &[Sample],
        output: &mut [Sample],
        frames: usize,
        stride: usize,
    ) -> usize {
        assert!(stride > 0, "stride must be at least 1");
        assert!(
            frames == 0 || input.len() > (frames - 1) * stride,
            "input holds fewer than {frames} samples at stride {stride}"
        );
        let expected = self.expected_output(frames);
        assert!(
            expected == 0 || output.len() > (expected - 1) * stride,
            "output has no room for {expected} samples at stride {stride}"
        );

        let mut written = 0;
        let mut sink = |sample: Sample| {
            output[written * stride] = sample;
            written += 1;
        };
        for &sample in input.iter().step_by(stride).take(frames) {
            stage::feed(&mut self.stages, sample, &mut sink);
        }
        self.frames_in += frames as u64;

        debug_assert_eq!(written, expected);
        written
    }

    /// Clears the history of this channel.
    pub fn reset(&mut self) {
        for stage in self.stages.iter_mut() {
            stage.reset();
        }
        self.frames_in = 0;
    }
}
