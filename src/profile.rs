//! The four conversion profiles and their ratio selector.
//!
//! A profile is selected, never computed: every filter coefficient, factor pair and gain is
//! fixed at build time and shared by all converters using that ratio.
//!
//! # Stage layout
//!
//! Each profile runs two stages. The front stage interpolates by `L1` and decimates by
//! `M1` in one pass: the decimation decides which output positions exist before anything
//! is multiplied, and the interpolation filter is then evaluated for those positions only,
//! one polyphase branch per output. It lands on an intermediate rate above both the source
//! and the target rate, so no bandwidth is given up. The back stage decimates that
//! intermediate signal by a small integer `M2` down to the target rate.
//!
//! Decimation is never placed after interpolation as a separate elementary stage. Within the
//! front stage the `M1` decimation is folded into the commuted kernel: the phase counter picks
//! the retained positions first and only those are filtered. The one stage that follows is a
//! pure decimator, so no interpolating stage ever consumes the output of a decimating one.
//! A standalone decimator in front would cut the source down to `fs / (2 * D)` before any
//! interpolation, which would lose most of the band for the up-converting ratios.
//!
//! | Ratio | U/D | Front L1/M1 | Back 1/M2 |
//! |-------|-----|-------------|-----------|
//! | 6 to 5 | 5/6 | 5/3 | 1/2 |
//! | 7 to 8 | 8/7 | 16/7 | 1/2 |
//! | 9 to 10 | 10/9 | 10/3 | 1/3 |
//! | 9 to 8 | 8/9 | 8/3 | 1/3 |

use std::fmt;
use std::str::FromStr;

use num_rational::Ratio;

use crate::common::assert_error_traits;
use crate::Float;

mod tables;

/// Selects one of the four supported conversions.
///
/// The conventional integer index of each ratio (as used on the command line) is given in
/// brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionRatio {
    /// [0] Six input samples become five output samples.
    SixToFive,
    /// [1] Seven input samples become eight output samples.
    SevenToEight,
    /// [2] Nine input samples become ten output samples.
    NineToTen,
    /// [3] Nine input samples become eight output samples.
    NineToEight,
}

/// The given selector does not name one of the four conversions.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error("unknown conversion index '{given}', expected 0 (6/5), 1 (7/8), 2 (9/10) or 3 (9/8)")]
pub struct UnknownRatio {
    /// The rejected selector, as given.
    pub given: String,
}
assert_error_traits!(UnknownRatio);

impl ConversionRatio {
    /// All selectors in index order.
    pub const ALL: [ConversionRatio; 4] = [
        ConversionRatio::SixToFive,
        ConversionRatio::SevenToEight,
        ConversionRatio::NineToTen,
        ConversionRatio::NineToEight,
    ];

    /// The conventional integer index of this ratio.
    pub fn index(self) -> u8 {
        match self {
            ConversionRatio::SixToFive => 0,
            ConversionRatio::SevenToEight => 1,
            ConversionRatio::NineToTen => 2,
            ConversionRatio::NineToEight => 3,
        }
    }

    /// The immutable profile backing this ratio.
    pub fn profile(self) -> &'static ConversionProfile {
        match self {
            ConversionRatio::SixToFive => &SIX_TO_FIVE,
            ConversionRatio::SevenToEight => &SEVEN_TO_EIGHT,
            ConversionRatio::NineToTen => &NINE_TO_TEN,
            ConversionRatio::NineToEight => &NINE_TO_EIGHT,
        }
    }
}

impl TryFrom<u8> for ConversionRatio {
    type Error = UnknownRatio;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        ConversionRatio::ALL
            .get(usize::from(index))
            .copied()
            .ok_or_else(|| UnknownRatio {
                given: index.to_string(),
            })
    }
}

impl FromStr for ConversionRatio {
    type Err = UnknownRatio;

    /// Parses the conventional index, `"0"` to `"3"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || UnknownRatio {
            given: s.to_owned(),
        };
        let index: u8 = s.trim().parse().map_err(|_| unknown())?;
        ConversionRatio::try_from(index).map_err(|_| unknown())
    }
}

impl fmt::Display for ConversionRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let profile = self.profile();
        write!(
            f,
            "{} to {}",
            profile.decimation(),
            profile.interpolation()
        )
    }
}

/// One resampling stage of a profile: interpolate by `up`, decimate by `down`.
///
/// A stage with `up == 1` is a plain decimator, one with `down == 1` a plain interpolator.
#[derive(Debug, Clone, Copy)]
pub struct StageSpec {
    up: u32,
    down: u32,
    taps_per_phase: usize,
    bank: &'static [Float],
}

impl StageSpec {
    /// Interpolation factor of this stage.
    pub fn up(&self) -> u32 {
        self.up
    }

    /// Decimation factor of this stage.
    pub fn down(&self) -> u32 {
        self.down
    }

    /// Length of every polyphase branch.
    pub fn taps_per_phase(&self) -> usize {
        self.taps_per_phase
    }

    /// Coefficients, branch after branch. See [`StageSpec::phase`].
    pub fn bank(&self) -> &'static [Float] {
        self.bank
    }

    /// The sub-filter producing outputs of polyphase branch `phase`.
    ///
    /// # Panics
    /// If `phase >= self.up()`.
    #[inline]
    pub fn phase(&self, phase: usize) -> &'static [Float] {
        let start = phase * self.taps_per_phase;
        &self.bank[start..start + self.taps_per_phase]
    }

    /// Number of input samples this stage remembers per channel, the newest one included.
    ///
    /// Equal to [`StageSpec::taps_per_phase`]: every output is computed from that many of the
    /// most recent inputs, and all of them carry over to the next call.
    pub fn delay_line_len(&self) -> usize {
        self.taps_per_phase
    }

    /// Output rate of this stage relative to its input rate.
    pub fn ratio(&self) -> Ratio<u32> {
        Ratio::new(self.up, self.down)
    }
}

/// Immutable description of one conversion ratio.
#[derive(Debug)]
pub struct ConversionProfile {
    interpolation: u32,
    decimation: u32,
    gain: Float,
    gain_stage: usize,
    stages: &'static [StageSpec],
}

impl ConversionProfile {
    /// The interpolation factor `U`.
    pub fn interpolation(&self) -> u32 {
        self.interpolation
    }

    /// The decimation factor `D`.
    pub fn decimation(&self) -> u32 {
        self.decimation
    }

    /// Output rate divided by input rate, `U / D`.
    pub fn ratio(&self) -> Ratio<u32> {
        Ratio::new(self.interpolation, self.decimation)
    }

    /// Scalar compensating the zero insertion of the interpolating stage.
    pub fn gain(&self) -> Float {
        self.gain
    }

    /// Index of the only stage that applies [`ConversionProfile::gain`].
    pub fn gain_stage(&self) -> usize {
        self.gain_stage
    }

    /// The stages in processing order.
    pub fn stages(&self) -> &'static [StageSpec] {
        self.stages
    }

    /// Total number of coefficients over all stages.
    pub fn filter_bank_len(&self) -> usize {
        self.stages.iter().map(|stage| stage.bank.len()).sum()
    }

    /// Number of history samples kept per channel, summed over all stages.
    pub fn delay_line_len(&self) -> usize {
        self.stages.iter().map(StageSpec::delay_line_len).sum()
    }
}

const FRONT_TAPS: usize = 40;
/// Back stage taps per unit of decimation.
const BACK_TAPS_PER_FACTOR: usize = 48;

static SIX_TO_FIVE: ConversionProfile = ConversionProfile {
    interpolation: 5,
    decimation: 6,
    gain: 5.0,
    gain_stage: 0,
    stages: &[
        StageSpec {
            up: 5,
            down: 3,
            taps_per_phase: FRONT_TAPS,
            bank: &tables::SIX_TO_FIVE_FRONT,
        },
        StageSpec {
            up: 1,
            down: 2,
            taps_per_phase: 2 * BACK_TAPS_PER_FACTOR,
            bank: &tables::SIX_TO_FIVE_BACK,
        },
    ],
};

static SEVEN_TO_EIGHT: ConversionProfile = ConversionProfile {
    interpolation: 8,
    decimation: 7,
    gain: 16.0,
    gain_stage: 0,
    stages: &[
        StageSpec {
            up: 16,
            down: 7,
            taps_per_phase: FRONT_TAPS,
            bank: &tables::SEVEN_TO_EIGHT_FRONT,
        },
        StageSpec {
            up: 1,
            down: 2,
            taps_per_phase: 2 * BACK_TAPS_PER_FACTOR,
            bank: &tables::SEVEN_TO_EIGHT_BACK,
        },
    ],
};

static NINE_TO_TEN: ConversionProfile = ConversionProfile {
    interpolation: 10,
    decimation: 9,
    gain: 10.0,
    gain_stage: 0,
    stages: &[
        StageSpec {
            up: 10,
            down: 3,
            taps_per_phase: FRONT_TAPS,
            bank: &tables::NINE_TO_TEN_FRONT,
        },
        StageSpec {
            up: 1,
            down: 3,
            taps_per_phase: 3 * BACK_TAPS_PER_FACTOR,
            bank: &tables::NINE_TO_TEN_BACK,
        },
    ],
};

static NINE_TO_EIGHT: ConversionProfile = ConversionProfile {
    interpolation: 8,
    decimation: 9,
    gain: 8.0,
    gain_stage: 0,
    stages: &[
        StageSpec {
            up: 8,
            down: 3,
            taps_per_phase: FRONT_TAPS,
            bank: &tables::NINE_TO_EIGHT_FRONT,
        },
        StageSpec {
            up: 1,
            down: 3,
            taps_per_phase: 3 * BACK_TAPS_PER_FACTOR,
            bank: &tables::NINE_TO_EIGHT_BACK,
        },
    ],
};
