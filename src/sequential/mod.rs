//! Loops that run one action at a time
//!
//! Every combinator here is a [`Sans`](crate::Sans) stage run by
//! [`drive`](crate::drive), so each inherits the same trampoline: steps that are
//! already resolved loop in place, pending ones park the loop in a continuation.

mod for_each;
mod keep;
mod until;

pub use for_each::{do_for_each, for_each, ForEach};
pub use keep::{keep_doing, KeepDoing};
pub use until::{do_until, DoUntil};
