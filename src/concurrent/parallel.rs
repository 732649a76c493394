//! Fan-out of one action over a sequence.

use crate::future::{start, Handle, IntoHandle};
use crate::tracing_compat::debug;

/// Start `action` for every element of `items` without waiting in between, and
/// resolve once all of them succeeded.
///
/// Actions start eagerly, in iteration order, before this function returns; they
/// may finish in any order. The returned handle joins them link by link: each new
/// handle is chained with the running join, so the result succeeds only if every
/// link does.
///
/// On failure the result is the first failure the join walk runs into. When
/// several actions fail that choice is not specified. Nothing is cancelled:
/// actions still in flight run to completion and their outcomes are dropped.
///
/// ```rust
/// use cont_flow::prelude::*;
/// use cont_flow::reactor;
///
/// let (sink, slow) = promise::<()>();
/// let mut slow = Some(slow);
/// let all = parallel_for_each(0..3, move |i| {
///     if i == 0 { slow.take().unwrap() } else { Handle::ready(()) }
/// });
///
/// assert!(all.is_pending());
/// sink.set_value(());
/// assert!(reactor::block_on(all).is_ok());
/// ```
pub fn parallel_for_each<C, F, R>(items: C, mut action: F) -> Handle<()>
where
    C: IntoIterator,
    F: FnMut(C::Item) -> R,
    R: IntoHandle<()>,
{
    let mut joined = Handle::ready(());
    for item in items {
        let handle = start(|| action(item));
        if joined.is_failed() || (handle.available() && !handle.is_failed()) {
            // Already decided, or nothing left to wait for on this link.
            continue;
        }
        joined = join(joined, handle);
    }
    debug!(pending = joined.is_pending(), "parallel_for_each: all actions started");
    joined
}

/// Wait for `next`, then hand over to `previous`.
fn join(previous: Handle<()>, next: Handle<()>) -> Handle<()> {
    next.then(move |()| previous)
}
