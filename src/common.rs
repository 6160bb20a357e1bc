use std::num::NonZero;

/// Stream sample rate (samples per second per channel).
pub type SampleRate = NonZero<u32>;

/// Number of channels in a stream.
pub type ChannelCount = NonZero<u16>;

/// Fails to compile when an error type is missing one of the traits every public error of
/// this crate provides.
macro_rules! assert_error_traits {
    ($to_test:ty) => {
        const _: () = {
            const fn assert_traits<
                T: std::error::Error + std::fmt::Debug + Clone + Send + Sync + 'static,
            >() {
            }
            assert_traits::<$to_test>();
        };
    };
}
pub(crate) use assert_error_traits;
