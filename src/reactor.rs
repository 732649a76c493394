//! Thread-local task queue that runs continuations.
//!
//! When a sink is written and its handle already has a continuation waiting, the
//! continuation is not called from inside the writer. It is pushed here and runs
//! later, from [`run`], with a fresh stack. This is what keeps long chains of
//! pending handles from nesting one call frame per link.
//!
//! The queue is the minimal stand-in for an event loop: nothing here polls I/O or
//! timers. Whoever owns the real event loop drains the queue after delivering
//! completions.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::error::{Error, Failure};
use crate::future::Handle;
use crate::tracing_compat::{debug, trace};

type Task = Box<dyn FnOnce()>;

thread_local! {
    static QUEUE: RefCell<VecDeque<Task>> = RefCell::new(VecDeque::new());
}

/// Queue a task to run on this thread's next drain.
pub fn schedule<F>(task: F)
where
    F: FnOnce() + 'static,
{
    QUEUE.with(|q| q.borrow_mut().push_back(Box::new(task)));
}

/// Number of tasks waiting in this thread's queue.
pub fn pending_tasks() -> usize {
    QUEUE.with(|q| q.borrow().len())
}

/// Run the oldest queued task, if any. Returns `false` when the queue was empty.
pub fn run_once() -> bool {
    // The borrow must end before the task runs: tasks schedule more tasks.
    let task = QUEUE.with(|q| q.borrow_mut().pop_front());
    match task {
        Some(task) => {
            task();
            true
        }
        None => false,
    }
}

/// Drain the queue, including tasks queued while draining.
///
/// Returns how many tasks ran.
pub fn run() -> usize {
    let mut ran = 0;
    while run_once() {
        ran += 1;
    }
    if ran > 0 {
        debug!(tasks = ran, "task queue drained");
    }
    ran
}

/// Drain the queue until `handle` resolves, then return its outcome.
///
/// If the queue runs dry first, nothing on this thread can resolve the handle any
/// more and the result is an [`Error::Stalled`] failure.
pub fn block_on<T: 'static>(mut handle: Handle<T>) -> Result<T, Failure> {
    loop {
        if let Some(result) = handle.take_ready() {
            return result;
        }
        if !run_once() {
            trace!("block_on: queue empty with handle still pending");
            return Err(Failure::new(Error::Stalled));
        }
    }
}
