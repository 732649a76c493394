//! # Cont Flow: Trampolined Loops over Single-Threaded Futures
//!
//! Run asynchronous actions in a loop, one after another or all at once, without
//! growing the stack when the actions happen to finish synchronously.
//!
//! ## Core Types
//!
//! - **[`Handle<T>`]**: The consumer side of an eventual value or [`Failure`]
//! - **[`Sink<T>`]**: The producer side, created together with a handle by [`promise`]
//! - **[`Sans`]**: A loop stage that yields one handle per step until it [`Step::Complete`]s
//!
//! ## Key Features
//!
//! - **Trampolined**: Steps that are already resolved are looped in place, so a
//!   million synchronous iterations use constant stack
//! - **Single-threaded**: Continuations on pending handles run later from the
//!   thread-local [`reactor`] queue
//! - **Failures as values**: Start errors, panics and failed handles all end the
//!   loop with the same [`Failure`]
//!
//! ## Example
//!
//! ```
//! use cont_flow::prelude::*;
//! use cont_flow::reactor;
//!
//! let (sink, ack) = promise::<()>();
//! let mut ack = Some(ack);
//! let written = for_each(vec!["a", "b", "c"], move |line| {
//!     if line == "b" {
//!         ack.take().unwrap_or_else(|| Handle::ready(()))
//!     } else {
//!         Handle::ready(())
//!     }
//! });
//!
//! assert!(written.is_pending());
//! sink.set_value(());
//! assert!(reactor::block_on(written).is_ok());
//! ```
//!
//! ## Common Functions
//!
//! **Sequential loops:**
//! - [`for_each(items, action)`](sequential::for_each) - One action per element, in order
//! - [`do_until(stop, action)`](sequential::do_until) - Repeat while a condition is false
//! - [`keep_doing(action)`](sequential::keep_doing) - Repeat until the action fails
//!
//! **Concurrent:**
//! - [`parallel_for_each(items, action)`](concurrent::parallel_for_each) - Start all, wait for all
//! - [`when_all(handles)`](concurrent::when_all) - Join a tuple of handles, keeping each outcome
//!
//! **Execution:**
//! - [`drive(stage)`](drive) - Run a custom [`Sans`] stage as a trampoline
//! - [`reactor::run()`](reactor::run) - Run queued continuations

pub mod build;
pub mod concurrent;
pub mod prelude;
pub mod reactor;
pub mod sequential;

mod error;
mod future;
mod handler;
mod sans;
mod step;
mod tracing_compat;

pub use error::{Error, Failure};
pub use future::{promise, start, Handle, IntoHandle, Sink};
pub use handler::{drive, drive_into};
pub use sans::Sans;
pub use step::Step;
