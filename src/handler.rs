//! Driving loop stages to completion.
//!
//! [`drive`] runs a [`Sans`] stage as a trampoline. Each step's handle is checked
//! before anything is registered on it:
//!
//! - resolved successfully: loop again right here, no continuation, no new frame;
//! - resolved with a failure: write the failure into the output sink and stop;
//! - pending: move the stage and the sink into a continuation on that handle and
//!   return. The continuation later restarts the same loop from the reactor
//!   queue, with a fresh stack.
//!
//! Skipping the first check would turn every synchronously completed step into
//! a nested call, and a long enough loop would overflow the stack.

use std::panic::{self, AssertUnwindSafe};

use crate::error::Failure;
use crate::future::{promise, Handle, Sink};
use crate::sans::Sans;
use crate::step::Step;
use crate::tracing_compat::trace;

/// Drive `stage` until it completes or one of its steps fails.
///
/// Returns immediately; the returned handle resolves when the loop is over.
///
/// ```rust
/// use cont_flow::prelude::*;
///
/// let mut items = vec![1, 2, 3].into_iter();
/// let mut sum = 0;
/// let stage = from_fn(move || match items.next() {
///     Some(n) => {
///         sum += n;
///         Step::Yielded(Handle::ready(()))
///     }
///     None => Step::Complete(sum),
/// });
///
/// assert_eq!(drive(stage).into_result().unwrap(), 6);
/// ```
pub fn drive<S>(stage: S) -> Handle<S::Return>
where
    S: Sans + 'static,
    S::Return: 'static,
{
    let (sink, handle) = promise();
    drive_into(stage, sink);
    handle
}

/// Drive `stage`, writing its outcome into `sink`.
///
/// The sink is written exactly once: with the stage's return value when it
/// completes, or with the first failure. A panic inside a step counts as a
/// failure.
pub fn drive_into<S>(mut stage: S, sink: Sink<S::Return>)
where
    S: Sans + 'static,
    S::Return: 'static,
{
    loop {
        let step = match panic::catch_unwind(AssertUnwindSafe(|| stage.next())) {
            Ok(step) => step,
            Err(payload) => {
                sink.set_failure(Failure::panicked(payload));
                return;
            }
        };
        match step {
            Step::Complete(done) => {
                trace!("stage complete");
                sink.set_value(done);
                return;
            }
            Step::Yielded(mut pending) => match pending.take_ready() {
                Some(Ok(())) => continue,
                Some(Err(failure)) => {
                    trace!(%failure, "stage step failed");
                    sink.set_failure(failure);
                    return;
                }
                None => {
                    trace!("stage suspended on a pending step");
                    pending.on_complete(move |result| match result {
                        Ok(()) => drive_into(stage, sink),
                        Err(failure) => sink.set_failure(failure),
                    });
                    return;
                }
            },
        }
    }
}
