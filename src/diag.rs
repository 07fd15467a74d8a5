//! Diagnostics shims.
//!
//! With the `log` feature these forward to the `log` crate; without it they
//! only type-check their arguments and the codec stays silent.

#[cfg(feature = "log")]
macro_rules! trace {
    ($($arg:tt)+) => { ::log::trace!(target: "zencool", $($arg)+) };
}

#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($arg:tt)+) => {
        if false {
            let _ = ::core::format_args!($($arg)+);
        }
    };
}

#[cfg(feature = "log")]
macro_rules! warning {
    ($($arg:tt)+) => { ::log::warn!(target: "zencool", $($arg)+) };
}

#[cfg(not(feature = "log"))]
macro_rules! warning {
    ($($arg:tt)+) => {
        if false {
            let _ = ::core::format_args!($($arg)+);
        }
    };
}

pub(crate) use {trace, warning};
