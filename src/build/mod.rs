//! Building loop stages from scratch
//!
//! The combinators in [`sequential`](crate::sequential) cover the usual loops. For
//! anything else, write the step by hand with [`from_fn`].

mod func;

pub use func::{from_fn, FromFn};
