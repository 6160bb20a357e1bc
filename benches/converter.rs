use divan::Bencher;
use polysrc::{nz, ConversionRatio, Converter, Sample};

fn main() {
    divan::main();
}

const FRAMES: usize = 48_000;

fn stereo_sine() -> Vec<Sample> {
    (0..FRAMES)
        .flat_map(|n| {
            let phase = n as f32 * 2.0 * std::f32::consts::PI * 440.0 / 50_400.0;
            let sample = (phase.sin() * 20_000.0) as Sample;
            [sample, -sample]
        })
        .collect()
}

#[divan::bench(args = ConversionRatio::ALL)]
fn one_second_stereo(bencher: Bencher, ratio: ConversionRatio) {
    bencher
        .with_inputs(|| {
            let converter = Converter::new(nz!(50_400), ratio, nz!(2)).expect("rate is exact");
            let output = vec![0; 2 * converter.output_capacity(FRAMES)];
            (converter, stereo_sine(), output)
        })
        .bench_values(|(mut converter, input, mut output)| {
            let frames = converter.process_interleaved(&input, &mut output);
            divan::black_box(&output[..2 * frames]);
        })
}

#[divan::bench(args = [64, 480, 4096])]
fn block_size(bencher: Bencher, block: usize) {
    bencher
        .with_inputs(|| {
            let converter = Converter::new(nz!(44_100), ConversionRatio::SevenToEight, nz!(2))
                .expect("rate is exact");
            let output = vec![0; 2 * converter.output_capacity(block)];
            (converter, stereo_sine(), output)
        })
        .bench_values(|(mut converter, input, mut output)| {
            for chunk in input.chunks_exact(2 * block) {
                let frames = converter.process_interleaved(chunk, &mut output);
                divan::black_box(&output[..2 * frames]);
            }
        })
}

#[divan::bench(args = ConversionRatio::ALL)]
fn create_and_release(ratio: ConversionRatio) {
    let converter = Converter::new(nz!(50_400), ratio, nz!(8)).expect("rate is exact");
    divan::black_box(converter).release();
}
