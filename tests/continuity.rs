use polysrc::{nz, ConversionRatio, Sample};
use quickcheck::{quickcheck, TestResult};
use rstest::rstest;
use rstest_reuse::{self, *};

mod test_support;
use test_support::{
    convert_in_blocks, convert_mono, converter, deinterleave, interleave, noise, sine,
};

fn ratio(index: u8) -> ConversionRatio {
    ConversionRatio::ALL[usize::from(index) % ConversionRatio::ALL.len()]
}

quickcheck! {
    fn any_partition_gives_the_same_stream(index: u8, seed: u32, sizes: Vec<u8>) -> TestResult {
        if sizes.is_empty() {
            return TestResult::discard();
        }
        let ratio = ratio(index);
        let sizes: Vec<usize> = sizes.into_iter().map(|s| 1 + usize::from(s) % 97).collect();
        let input = noise(seed, 700);

        let whole = convert_mono(&mut converter(ratio, nz!(1)), &input);
        let blocks = convert_in_blocks(&mut converter(ratio, nz!(1)), &input, &sizes);
        TestResult::from_bool(whole == blocks)
    }

    fn every_call_produces_the_running_count(index: u8, sizes: Vec<u16>) -> bool {
        let ratio = ratio(index);
        let profile = ratio.profile();
        let up = u64::from(profile.interpolation());
        let down = u64::from(profile.decimation());
        let mut converter = converter(ratio, nz!(1));

        let mut total = 0u64;
        sizes.into_iter().map(|s| usize::from(s % 1_000)).all(|frames| {
            let expected = (total + frames as u64) * up / down - total * up / down;
            let produced = convert_mono(&mut converter, &vec![7; frames]).len();
            total += frames as u64;
            produced as u64 == expected
        })
    }
}

#[template]
#[rstest]
#[case(ConversionRatio::SixToFive)]
#[case(ConversionRatio::SevenToEight)]
#[case(ConversionRatio::NineToTen)]
#[case(ConversionRatio::NineToEight)]
fn all_ratios(#[case] ratio: ConversionRatio) {}

#[apply(all_ratios)]
fn total_output_never_drifts(#[case] ratio: ConversionRatio) {
    let profile = ratio.profile();
    let mut converter = converter(ratio, nz!(1));
    let mut produced = 0;
    let mut consumed = 0;
    for call in 0..2_000usize {
        let frames = 1 + call * 7 % 23;
        produced += convert_mono(&mut converter, &vec![0; frames]).len();
        consumed += frames;
    }
    let up = profile.interpolation() as usize;
    let down = profile.decimation() as usize;
    assert_eq!(produced, consumed * up / down);
}

#[apply(all_ratios)]
fn channels_do_not_share_history(#[case] ratio: ConversionRatio) {
    let left = noise(1, 900);
    let right = sine(30_000.0, 11.0, 900);

    let mut stereo = converter(ratio, nz!(2));
    let input = interleave(&[left.clone(), right.clone()]);
    let mut output = vec![0; 2 * stereo.output_capacity(900)];
    let frames = stereo.process_interleaved(&input, &mut output);
    let split = deinterleave(&output[..2 * frames], 2);

    assert_eq!(split[0], convert_mono(&mut converter(ratio, nz!(1)), &left));
    assert_eq!(split[1], convert_mono(&mut converter(ratio, nz!(1)), &right));
}

#[apply(all_ratios)]
fn channels_can_be_driven_one_at_a_time(#[case] ratio: ConversionRatio) {
    let channels: Vec<Vec<Sample>> = (0..3).map(|c| noise(c + 10, 420)).collect();
    let input = interleave(&channels);

    let mut together = converter(ratio, nz!(3));
    let mut expected = vec![0; 3 * together.output_capacity(420)];
    let frames = together.process_interleaved(&input, &mut expected);

    let mut separately = converter(ratio, nz!(3));
    let mut actual = vec![0; expected.len()];
    for channel in [2, 0, 1] {
        assert_eq!(separately.process_channel(channel, &input, &mut actual), frames);
    }
    assert_eq!(actual[..3 * frames], expected[..3 * frames]);
}

#[apply(all_ratios)]
fn channels_convert_on_separate_threads(#[case] ratio: ConversionRatio) {
    let inputs: Vec<Vec<Sample>> = (0..4).map(|c| noise(c + 100, 2_000)).collect();
    let expected: Vec<Vec<Sample>> = inputs
        .iter()
        .map(|input| convert_mono(&mut converter(ratio, nz!(1)), input))
        .collect();

    let mut converter = converter(ratio, nz!(4));
    let outputs: Vec<Vec<Sample>> = std::thread::scope(|s| {
        let handles: Vec<_> = converter
            .channels_mut()
            .iter_mut()
            .zip(&inputs)
            .map(|(channel, input)| {
                s.spawn(move || {
                    let mut output = vec![0; channel.expected_output(input.len())];
                    let produced = channel.process(input, &mut output, input.len(), 1);
                    output.truncate(produced);
                    output
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("conversion thread panicked"))
            .collect()
    });
    assert_eq!(outputs, expected);
}

#[apply(all_ratios)]
fn reset_starts_a_fresh_stream(#[case] ratio: ConversionRatio) {
    let input = noise(5, 300);
    let mut converter = converter(ratio, nz!(1));
    let first = convert_mono(&mut converter, &input);
    convert_mono(&mut converter, &noise(6, 77));

    converter.reset();
    assert_eq!(converter.channel_mut(0).map(|c| c.frames_in()), Some(0));
    assert_eq!(convert_mono(&mut converter, &input), first);
}

#[test]
fn strided_channel_matches_contiguous() {
    let ratio = ConversionRatio::NineToTen;
    let signal = noise(9, 180);
    let padded: Vec<Sample> = signal.iter().flat_map(|&s| [s, 0, 0]).collect();

    let mut strided = converter(ratio, nz!(1));
    let channel = strided.channel_mut(0).expect("one channel");
    let mut output = vec![0; 3 * 200];
    let produced = channel.process(&padded, &mut output, signal.len(), 3);

    let contiguous = convert_mono(&mut converter(ratio, nz!(1)), &signal);
    assert_eq!(produced, 200);
    assert_eq!(deinterleave(&output[..3 * produced], 3)[0], contiguous);
    assert!(deinterleave(&output, 3)[1].iter().all(|&s| s == 0));
}
