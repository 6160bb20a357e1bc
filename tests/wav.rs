#![cfg(feature = "wav")]

use std::io::Cursor;

use hound::{SampleFormat, WavSpec};
use polysrc::wav::{convert_wav, convert_wav_file, WavError};
use polysrc::{ConversionRatio, InitError, Sample};

mod test_support;
use test_support::{convert_mono, converter, deinterleave, interleave, noise, SOURCE_RATE};

fn wav_bytes(spec: WavSpec, write: impl FnOnce(&mut hound::WavWriter<&mut Cursor<Vec<u8>>>)) -> Cursor<Vec<u8>> {
    let mut bytes = Cursor::new(Vec::new());
    let mut writer = hound::WavWriter::new(&mut bytes, spec).expect("header can be written");
    write(&mut writer);
    writer.finalize().expect("wav can be finalized");
    bytes.set_position(0);
    bytes
}

fn pcm16(channels: u16, sample_rate: u32) -> WavSpec {
    WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    }
}

fn pcm16_bytes(channels: u16, sample_rate: u32, samples: &[Sample]) -> Cursor<Vec<u8>> {
    wav_bytes(pcm16(channels, sample_rate), |writer| {
        for &sample in samples {
            writer.write_sample(sample).expect("sample can be written");
        }
    })
}

#[test]
fn stereo_stream_matches_the_engine() {
    let left = noise(21, 10_000);
    let right = noise(22, 10_000);
    let input = pcm16_bytes(2, SOURCE_RATE.get(), &interleave(&[left.clone(), right.clone()]));

    let mut output = Cursor::new(Vec::new());
    let summary = convert_wav(input, &mut output, ConversionRatio::SevenToEight).unwrap();
    assert_eq!(summary.source_rate, SOURCE_RATE);
    assert_eq!(summary.target_rate.get(), 57_600);
    assert_eq!(summary.channels.get(), 2);
    assert_eq!(summary.bits_per_sample, 16);
    assert_eq!(summary.frames_in, 10_000);
    assert_eq!(summary.frames_out, 10_000 * 8 / 7);

    output.set_position(0);
    let mut reader = hound::WavReader::new(output).unwrap();
    assert_eq!(reader.spec(), pcm16(2, 57_600));
    let samples: Vec<Sample> = reader.samples::<i16>().map(Result::unwrap).collect();
    let channels = deinterleave(&samples, 2);

    let ratio = ConversionRatio::SevenToEight;
    assert_eq!(channels[0], convert_mono(&mut converter(ratio, polysrc::nz!(1)), &left));
    assert_eq!(channels[1], convert_mono(&mut converter(ratio, polysrc::nz!(1)), &right));
}

#[test]
fn partial_trailing_frame_is_refused() {
    // a mono file relabelled as stereo, leaving 121 samples for 2 channels
    let mut bytes = pcm16_bytes(1, 48_000, &[100; 2 * 60 + 1]).into_inner();
    bytes[22..24].copy_from_slice(&2u16.to_le_bytes());
    bytes[28..32].copy_from_slice(&(48_000u32 * 4).to_le_bytes());
    bytes[32..34].copy_from_slice(&4u16.to_le_bytes());

    let err = convert_wav(
        Cursor::new(bytes),
        &mut Cursor::new(Vec::new()),
        ConversionRatio::SixToFive,
    )
    .unwrap_err();
    assert!(matches!(err, WavError::Opening(_)), "{err:?}");
}

#[test]
fn whole_frames_are_all_converted() {
    let input = pcm16_bytes(2, 48_000, &[100; 2 * 60]);
    let mut output = Cursor::new(Vec::new());
    let summary = convert_wav(input, &mut output, ConversionRatio::SixToFive).unwrap();
    assert_eq!(summary.frames_in, 60);
    assert_eq!(summary.frames_out, 50);
    output.set_position(0);
    assert_eq!(hound::WavReader::new(output).unwrap().len(), 2 * 50);
}

#[test]
fn empty_stream_gives_an_empty_wav() {
    let input = pcm16_bytes(1, 44_100, &[]);
    let mut output = Cursor::new(Vec::new());
    let summary = convert_wav(input, &mut output, ConversionRatio::NineToTen).unwrap();
    assert_eq!(summary.frames_out, 0);
    output.set_position(0);
    let reader = hound::WavReader::new(output).unwrap();
    assert_eq!(reader.spec().sample_rate, 49_000);
    assert_eq!(reader.len(), 0);
}

#[test]
fn float_input_is_refused() {
    let spec = WavSpec {
        channels: 1,
        sample_rate: 48_000,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let input = wav_bytes(spec, |writer| writer.write_sample(0.5f32).unwrap());
    let err = convert_wav(input, &mut Cursor::new(Vec::new()), ConversionRatio::SixToFive)
        .unwrap_err();
    assert!(matches!(err, WavError::UnsupportedFormat(SampleFormat::Float)));
}

#[test]
fn other_bit_depths_are_refused() {
    let spec = WavSpec {
        bits_per_sample: 24,
        ..pcm16(1, 48_000)
    };
    let input = wav_bytes(spec, |writer| writer.write_sample(1_000i32).unwrap());
    let err = convert_wav(input, &mut Cursor::new(Vec::new()), ConversionRatio::SixToFive)
        .unwrap_err();
    assert!(matches!(err, WavError::UnsupportedBitDepth(24)));
    assert_eq!(err.to_string(), "24 bits are currently not supported, only 16");
}

#[test]
fn rate_without_exact_target_is_refused() {
    // 44 101 * 5 / 6 is not a whole number of samples per second
    let input = pcm16_bytes(1, 44_101, &[0; 12]);
    let err = convert_wav(input, &mut Cursor::new(Vec::new()), ConversionRatio::SixToFive)
        .unwrap_err();
    assert!(matches!(err, WavError::Init(InitError::InexactRate { source_rate: 44_101, .. })));
}

#[test]
fn garbage_is_not_a_wav() {
    let err = convert_wav(
        Cursor::new(b"definitely not RIFF".to_vec()),
        &mut Cursor::new(Vec::new()),
        ConversionRatio::NineToEight,
    )
    .unwrap_err();
    assert!(matches!(err, WavError::Opening(_)));
}

#[test]
fn files_are_converted_on_disk() {
    let dir = std::path::Path::new("target/tmp");
    std::fs::create_dir_all(dir).expect("temporary directory can be created");
    let input_path = dir.join("polysrc-convert-input.wav");
    let output_path = dir.join("polysrc-convert-output.wav");

    let bytes = pcm16_bytes(1, 36_000, &noise(3, 900)).into_inner();
    std::fs::write(&input_path, bytes).expect("input can be written");

    let summary =
        convert_wav_file(&input_path, &output_path, ConversionRatio::NineToEight).unwrap();
    assert_eq!(summary.target_rate.get(), 32_000);
    assert_eq!(summary.frames_out, 800);

    let reader = hound::WavReader::open(&output_path).expect("output can be read back");
    assert_eq!(reader.spec(), pcm16(1, 32_000));
    assert_eq!(reader.len(), 800);

    let missing = convert_wav_file(dir.join("missing.wav"), &output_path, ConversionRatio::SixToFive);
    assert!(matches!(missing, Err(WavError::OpenInput(_))));
}
