//! Logging macros that forward to `tracing` when the `tracing` feature is enabled
//! (and always under test), and compile to nothing otherwise.
//!
//! The warn-level macro is `warning!`: a `warn` macro imported by `use` is
//! ambiguous with the built-in `#[warn]` attribute.

#[cfg(any(test, feature = "tracing"))]
macro_rules! trace {
    ($($tt:tt)*) => { ::tracing::trace!($($tt)*) };
}

#[cfg(not(any(test, feature = "tracing")))]
macro_rules! trace {
    ($($tt:tt)*) => {};
}

#[cfg(any(test, feature = "tracing"))]
macro_rules! debug {
    ($($tt:tt)*) => { ::tracing::debug!($($tt)*) };
}

#[cfg(not(any(test, feature = "tracing")))]
macro_rules! debug {
    ($($tt:tt)*) => {};
}

#[cfg(any(test, feature = "tracing"))]
macro_rules! warning {
    ($($tt:tt)*) => { ::tracing::warn!($($tt)*) };
}

#[cfg(not(any(test, feature = "tracing")))]
macro_rules! warning {
    ($($tt:tt)*) => {};
}

pub(crate) use {debug, trace, warning};
