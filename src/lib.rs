//! Fixed-ratio sample rate conversion for 16-bit PCM audio.
//!
//! `polysrc` converts between sample rates related by one of four fixed rational ratios:
//!
//! | Selector | Index | Output rate |
//! |----------|-------|-------------|
//! | [`ConversionRatio::SixToFive`] | 0 | input x 5/6 |
//! | [`ConversionRatio::SevenToEight`] | 1 | input x 8/7 |
//! | [`ConversionRatio::NineToTen`] | 2 | input x 10/9 |
//! | [`ConversionRatio::NineToEight`] | 3 | input x 8/9 |
//!
//! Every ratio has a precomputed polyphase filter bank. The converter never builds the
//! zero-stuffed signal and never computes a sample it is going to throw away, so all
//! filtering happens at the lowest rate the ratio allows.
//!
//! # Quick Start
//!
//! ```rust
//! use polysrc::{nz, ConversionRatio, Converter};
//!
//! // 48 kHz stereo down to 40 kHz
//! let mut converter = Converter::new(nz!(48_000), ConversionRatio::SixToFive, nz!(2))?;
//! assert_eq!(converter.target_rate().get(), 40_000);
//!
//! let input = vec![0i16; 2 * 480];
//! let mut output = vec![0i16; 2 * converter.output_capacity(480)];
//! let frames = converter.process_interleaved(&input, &mut output);
//! assert_eq!(frames, 400);
//!
//! converter.release();
//! # Ok::<(), polysrc::InitError>(())
//! ```
//!
//! # Streaming
//!
//! A [`Converter`] keeps a delay line per stage and channel. Feeding a signal in several
//! blocks produces exactly the same samples as feeding it in one go, and the number of
//! samples produced by each call follows the running ratio instead of rounding every call
//! on its own.
//!
//! Channels never share storage. [`Converter::channels_mut`] hands out every [`Channel`]
//! separately so they can be processed on different threads.
//!
//! # Features
//!
//! - `wav` (default): read and write 16-bit PCM WAV files through [`hound`](https://docs.rs/hound),
//!   see the [`wav`] module.
//! - `tracing`: emit `tracing` events when converters are created, reset or released.
//! - `64bit`: accumulate in `f64` instead of `f32`.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod common;
mod converter;
mod profile;
mod stage;

pub mod math;
#[cfg(feature = "wav")]
#[cfg_attr(docsrs, doc(cfg(feature = "wav")))]
pub mod wav;

pub use crate::common::{ChannelCount, SampleRate};
pub use crate::converter::{Channel, Converter, InitError};
pub use crate::profile::{ConversionProfile, ConversionRatio, StageSpec, UnknownRatio};

/// Floating point type used for filter coefficients and accumulation.
#[cfg(not(feature = "64bit"))]
pub type Float = f32;

/// Floating point type used for filter coefficients and accumulation.
#[cfg(feature = "64bit")]
pub type Float = f64;

/// A single PCM sample as read from and written to the converter.
pub type Sample = i16;
