//! A single polyphase resampling stage and the history it carries between calls.

use std::collections::TryReserveError;

use crate::math::round_to_sample;
use crate::profile::StageSpec;
use crate::{Float, Sample};

/// The last `len` input samples of a stage, newest first.
///
/// The buffer holds every sample twice, `len` elements apart, so the current window is
/// always one contiguous slice no matter where the write position is.
#[derive(Debug, Clone)]
pub(crate) struct DelayLine {
    buf: Vec<Float>,
    pos: usize,
    len: usize,
}

impl DelayLine {
    /// A zeroed delay line remembering `len` samples.
    pub(crate) fn new(len: usize) -> Result<Self, TryReserveError> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(2 * len)?;
        buf.resize(2 * len, 0.0);
        Ok(Self { buf, pos: 0, len })
    }

    #[inline]
    pub(crate) fn push(&mut self, sample: Float) {
        self.pos = if self.pos == 0 { self.len - 1 } else { self.pos - 1 };
        self.buf[self.pos] = sample;
        self.buf[self.pos + self.len] = sample;
    }

    /// The remembered samples, `window()[0]` being the most recent one.
    #[inline]
    pub(crate) fn window(&self) -> &[Float] {
        &self.buf[self.pos..self.pos + self.len]
    }

    pub(crate) fn clear(&mut self) {
        self.buf.fill(0.0);
        self.pos = 0;
    }
}

/// Runtime state of one [`StageSpec`] for one channel.
///
/// Conceptually the stage inserts `up - 1` zeros after every input sample, low-pass filters
/// the result and keeps every `down`-th sample. It does neither: `phase` tracks where the
/// next kept sample falls between two input samples, and only that sample is computed, with
/// the one polyphase branch whose taps would meet non-zero input.
#[derive(Debug, Clone)]
pub(crate) struct PolyphaseStage {
    spec: StageSpec,
    gain: Option<Float>,
    history: DelayLine,
    phase: usize,
}

impl PolyphaseStage {
    pub(crate) fn new(spec: StageSpec, gain: Option<Float>) -> Result<Self, TryReserveError> {
        Ok(Self {
            spec,
            gain,
            history: DelayLine::new(spec.delay_line_len())?,
            phase: Self::initial_phase(&spec),
        })
    }

    fn initial_phase(spec: &StageSpec) -> usize {
        spec.down() as usize - 1
    }

    /// Takes one input sample and hands every output it completes to `sink`.
    ///
    /// Over its lifetime a stage fed `n` samples emits exactly `n * up / down` samples,
    /// rounded down.
    #[inline]
    pub(crate) fn push(&mut self, sample: Sample, sink: &mut dyn FnMut(Sample)) {
        let up = self.spec.up() as usize;
        let down = self.spec.down() as usize;

        self.history.push(Float::from(sample));
        while self.phase < up {
            let window = self.history.window();
            let mut acc: Float = 0.0;
            for (x, c) in window.iter().zip(self.spec.phase(self.phase)) {
                acc += x * c;
            }
            if let Some(gain) = self.gain {
                acc *= gain;
            }
            sink(round_to_sample(acc));
            self.phase += down;
        }
        self.phase -= up;
    }

    /// Forgets all history, as if no sample had been pushed yet.
    pub(crate) fn reset(&mut self) {
        self.history.clear();
        self.phase = Self::initial_phase(&self.spec);
    }
}

/// Pushes `sample` through `stages` in order, handing the final outputs to `sink`.
///
/// Samples travel one at a time so no intermediate buffer is needed between stages.
pub(crate) fn feed(stages: &mut [PolyphaseStage], sample: Sample, sink: &mut dyn FnMut(Sample)) {
    match stages.split_first_mut() {
        None => sink(sample),
        Some((first, rest)) => first.push(sample, &mut |next| feed(&mut *rest, next, &mut *sink)),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ConversionRatio;

    fn spec(ratio: ConversionRatio, index: usize) -> StageSpec {
        ratio.profile().stages()[index]
    }

    fn run(stage: &mut PolyphaseStage, input: &[Sample]) -> Vec<Sample> {
        let mut out = Vec::new();
        for &sample in input {
            stage.push(sample, &mut |y| out.push(y));
        }
        out
    }

    #[test]
    fn history_covers_one_full_branch() {
        for ratio in ConversionRatio::ALL {
            for &spec in ratio.profile().stages() {
                let stage = PolyphaseStage::new(spec, None).unwrap();
                assert_eq!(stage.history.window().len(), spec.delay_line_len());
                assert_eq!(stage.history.window().len(), spec.phase(0).len());
            }
        }
    }

    #[test]
    fn delay_line_window_is_newest_first() {
        let mut line = DelayLine::new(3).unwrap();
        assert_eq!(line.window(), [0.0, 0.0, 0.0]);
        for value in 1..=5 {
            line.push(value as Float);
        }
        assert_eq!(line.window(), [5.0, 4.0, 3.0]);
        line.clear();
        assert_eq!(line.window(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn output_counts_follow_the_running_ratio() {
        for ratio in ConversionRatio::ALL {
            for index in 0..ratio.profile().stages().len() {
                let spec = spec(ratio, index);
                let mut stage = PolyphaseStage::new(spec, None).unwrap();
                let mut produced = 0;
                for n in 1..=500u64 {
                    stage.push(1, &mut |_| produced += 1);
                    assert_eq!(
                        produced,
                        n * u64::from(spec.up()) / u64::from(spec.down()),
                        "{ratio} stage {index} after {n} inputs"
                    );
                }
            }
        }
    }

    #[test]
    fn decimator_computes_the_retained_samples_only() {
        let spec = spec(ConversionRatio::SixToFive, 1);
        assert_eq!((spec.up(), spec.down()), (1, 2));
        let mut stage = PolyphaseStage::new(spec, None).unwrap();

        let mut impulse = vec![0; spec.taps_per_phase()];
        impulse[0] = 10_000;
        let out = run(&mut stage, &impulse);

        // output k is computed when input 2k + 1 arrives, so it sees the impulse at lag 2k + 1
        let expected: Vec<Sample> = (0..spec.taps_per_phase() / 2)
            .map(|k| round_to_sample(10_000.0 * spec.bank()[2 * k + 1]))
            .collect();
        assert_eq!(out, expected);
    }

    #[test]
    fn gain_restores_dc_after_interpolation() {
        let spec = spec(ConversionRatio::NineToTen, 0);
        let mut plain = PolyphaseStage::new(spec, None).unwrap();
        let mut compensated = PolyphaseStage::new(spec, Some(spec.up() as Float)).unwrap();

        let input = vec![3_000; 200];
        let plain = run(&mut plain, &input);
        let compensated = run(&mut compensated, &input);

        let settled = &compensated[200..];
        assert!(settled.iter().all(|&y| (y - 3_000).abs() <= 1), "{settled:?}");
        assert!(plain[200..].iter().all(|&y| (y - 300).abs() <= 1));
    }

    #[test]
    fn saturates_on_overshoot() {
        let spec = spec(ConversionRatio::SevenToEight, 0);
        let mut stage = PolyphaseStage::new(spec, Some(spec.up() as Float * 4.0)).unwrap();
        let out = run(&mut stage, &[Sample::MAX; 100]);
        assert_eq!(out.last(), Some(&Sample::MAX));
        let out = run(&mut stage, &[Sample::MIN; 100]);
        assert_eq!(out.last(), Some(&Sample::MIN));
    }

    #[test]
    fn reset_restores_the_initial_state() {
        let spec = spec(ConversionRatio::NineToEight, 0);
        let mut stage = PolyphaseStage::new(spec, Some(8.0)).unwrap();
        let input: Vec<Sample> = (0..50).map(|n| (n * 331 % 2_000) as Sample).collect();
        let first = run(&mut stage, &input);
        stage.reset();
        assert_eq!(run(&mut stage, &input), first);
    }

    #[test]
    fn feed_cascades_in_order() {
        let ratio = ConversionRatio::SixToFive;
        let mut stages = [
            PolyphaseStage::new(spec(ratio, 0), Some(5.0)).unwrap(),
            PolyphaseStage::new(spec(ratio, 1), None).unwrap(),
        ];
        let mut front = PolyphaseStage::new(spec(ratio, 0), Some(5.0)).unwrap();
        let mut back = PolyphaseStage::new(spec(ratio, 1), None).unwrap();

        let input: Vec<Sample> = (0..120).map(|n| ((n % 17) * 500 - 4_000) as Sample).collect();
        let mut cascaded = Vec::new();
        for &sample in &input {
            feed(&mut stages, sample, &mut |y| cascaded.push(y));
        }
        let by_hand = run(&mut back, &run(&mut front, &input));

        assert_eq!(cascaded, by_hand);
        assert_eq!(cascaded.len(), 100);
    }
}
