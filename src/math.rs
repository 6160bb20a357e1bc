//! Numeric helpers shared by the conversion stages.

use crate::{Float, Sample};

/// Creates a [`NonZero`](std::num::NonZero) from a literal, checked at compile time.
///
/// ```rust
/// use polysrc::{nz, SampleRate};
///
/// let rate: SampleRate = nz!(44_100);
/// assert_eq!(rate.get(), 44_100);
/// ```
#[macro_export]
macro_rules! nz {
    ($n:literal) => {
        const { ::std::num::NonZero::new($n).unwrap() }
    };
}
pub use crate::nz;

/// Rounds an accumulated filter output to the nearest sample value.
///
/// Halfway cases round away from zero. Values outside the 16-bit range saturate at
/// [`i16::MIN`] and [`i16::MAX`] instead of wrapping around.
#[inline]
pub fn round_to_sample(value: Float) -> Sample {
    value
        .round()
        .clamp(Sample::MIN as Float, Sample::MAX as Float) as Sample
}
