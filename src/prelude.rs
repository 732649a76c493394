//! Commonly used imports
//!
//! Use `use cont_flow::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Error, Failure, Handle, IntoHandle, Sans, Sink, Step};

// Completion
pub use crate::{promise, start};

// Building and driving stages
pub use crate::build::from_fn;
pub use crate::{drive, drive_into};

// Loops
pub use crate::sequential::{do_for_each, do_until, for_each, keep_doing};

// Fan-out
pub use crate::concurrent::{parallel_for_each, when_all, WhenAll};
