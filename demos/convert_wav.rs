//! Converts a 16-bit PCM WAV file by one of the fixed ratios.

use polysrc::wav::convert_wav_file;
use polysrc::ConversionRatio;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() != 4 {
        eprintln!("Usage: {} <in.wav> <out.wav> <conversion index>", args[0]);
        eprintln!("\nConversion index:");
        for ratio in ConversionRatio::ALL {
            let profile = ratio.profile();
            eprintln!(
                "  {}  {:<8} output rate = input rate x {}/{}",
                ratio.index(),
                ratio.to_string(),
                profile.interpolation(),
                profile.decimation()
            );
        }
        eprintln!("\nExample:");
        eprintln!("  {} speech_48k.wav speech_40k.wav 0", args[0]);
        std::process::exit(1);
    }

    let ratio: ConversionRatio = args[3].parse()?;
    let summary = convert_wav_file(&args[1], &args[2], ratio)?;

    let profile = ratio.profile();
    println!("Input:  {}", args[1]);
    println!(
        "  sample rate {} Hz, {} bits, {} channels, {} frames",
        summary.source_rate, summary.bits_per_sample, summary.channels, summary.frames_in
    );
    println!(
        "Conversion {ratio}: up {} down {}",
        profile.interpolation(),
        profile.decimation()
    );
    println!("Output: {}", args[2]);
    println!(
        "  sample rate {} Hz, {} frames",
        summary.target_rate, summary.frames_out
    );

    Ok(())
}
