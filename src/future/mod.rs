//! Single-threaded completion primitive.
//!
//! A [`Sink`] and a [`Handle`] share one slot. The sink writes the outcome once;
//! the handle reads it, either synchronously when it is already there or through
//! one registered continuation. Nothing here is `Send`: a completion lives and
//! dies on the thread that created it.

mod handle;
mod sink;
mod slot;

pub use handle::{start, Handle, IntoHandle};
pub use sink::{promise, Sink};
