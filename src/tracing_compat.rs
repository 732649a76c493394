//! Logging shim over `tracing`.
//!
//! With the `tracing` feature (on by default) this re-exports the `tracing`
//! macros. Without it the macros expand to nothing, so call sites never need a
//! `cfg` of their own.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
mod noop {
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    pub(crate) use {debug, trace};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use noop::{debug, trace};
