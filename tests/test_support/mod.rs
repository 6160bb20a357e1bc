#![allow(dead_code)]
/// in separate folder so its not ran as integration test
use polysrc::{nz, ChannelCount, ConversionRatio, Converter, Sample, SampleRate};

/// Divisible by the decimation factor of every ratio.
pub const SOURCE_RATE: SampleRate = nz!(50_400);

pub fn converter(ratio: ConversionRatio, channels: ChannelCount) -> Converter {
    Converter::new(SOURCE_RATE, ratio, channels).expect("source rate suits every ratio")
}

/// `len` samples of a sine with the given peak, `period` samples long.
pub fn sine(amplitude: f64, period: f64, len: usize) -> Vec<Sample> {
    (0..len)
        .map(|n| (amplitude * (2.0 * std::f64::consts::PI * n as f64 / period).sin()).round() as Sample)
        .collect()
}

/// Deterministic full range noise.
pub fn noise(seed: u32, len: usize) -> Vec<Sample> {
    let mut state = seed.wrapping_mul(2_654_435_761).wrapping_add(1);
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 16) as u16 as Sample
        })
        .collect()
}

/// Converts a mono block in one call.
pub fn convert_mono(converter: &mut Converter, input: &[Sample]) -> Vec<Sample> {
    let mut output = vec![0; converter.output_capacity(input.len())];
    let produced = converter.process_interleaved(input, &mut output);
    output.truncate(produced);
    output
}

/// Converts a mono signal in consecutive blocks of the given sizes, cycling through them.
pub fn convert_in_blocks(
    converter: &mut Converter,
    input: &[Sample],
    sizes: &[usize],
) -> Vec<Sample> {
    let mut result = Vec::new();
    let mut rest = input;
    for &size in sizes.iter().cycle() {
        if rest.is_empty() {
            break;
        }
        let (block, tail) = rest.split_at(size.min(rest.len()));
        result.extend(convert_mono(converter, block));
        rest = tail;
    }
    result
}

/// Splits an interleaved buffer into one vector per channel.
pub fn deinterleave(interleaved: &[Sample], channels: usize) -> Vec<Vec<Sample>> {
    (0..channels)
        .map(|c| interleaved.iter().skip(c).step_by(channels).copied().collect())
        .collect()
}

pub fn interleave(channels: &[Vec<Sample>]) -> Vec<Sample> {
    let len = channels.iter().map(Vec::len).min().unwrap_or(0);
    (0..len)
        .flat_map(|n| channels.iter().map(move |c| c[n]))
        .collect()
}

/// Peak amplitude of the component of `signal` at `frequency` cycles per sample.
///
/// Hann windowed so that a strong tone elsewhere does not leak into the measured bin.
pub fn tone_level(signal: &[Sample], frequency: f64) -> f64 {
    let len = signal.len() as f64;
    let (mut re, mut im, mut weight) = (0.0_f64, 0.0_f64, 0.0_f64);
    for (n, &x) in signal.iter().enumerate() {
        let n = n as f64;
        let window = 0.5 - 0.5 * (2.0 * std::f64::consts::PI * n / len).cos();
        let angle = 2.0 * std::f64::consts::PI * frequency * n;
        re += window * f64::from(x) * angle.cos();
        im -= window * f64::from(x) * angle.sin();
        weight += window;
    }
    2.0 * re.hypot(im) / weight
}
