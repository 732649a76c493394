use crate::future::{promise, start, Handle, IntoHandle};
use crate::handler::drive_into;
use crate::sans::Sans;
use crate::step::Step;

/// Stage that runs an action while a stop condition is false.
pub struct DoUntil<P, A> {
    stop: P,
    action: A,
}

impl<P, A> DoUntil<P, A> {
    pub fn new(stop: P, action: A) -> Self {
        DoUntil { stop, action }
    }
}

impl<P, A, R> Sans for DoUntil<P, A>
where
    P: FnMut() -> bool,
    A: FnMut() -> R,
    R: IntoHandle<()>,
{
    type Return = ();

    fn next(&mut self) -> Step<Handle<()>, Self::Return> {
        if (self.stop)() {
            Step::Complete(())
        } else {
            Step::Yielded(start(&mut self.action))
        }
    }
}

/// Invoke `action` until it fails or `stop` returns `true`.
///
/// `stop` is checked before every invocation, so a condition that is already true
/// means the action never runs, and the action is never run once more after the
/// condition turns true.
///
/// ```rust
/// use cont_flow::prelude::*;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let count = Rc::new(Cell::new(0));
/// let (c1, c2) = (Rc::clone(&count), Rc::clone(&count));
/// let done = do_until(move || c1.get() == 3, move || {
///     c2.set(c2.get() + 1);
///     Handle::ready(())
/// });
///
/// assert!(done.into_result().is_ok());
/// assert_eq!(count.get(), 3);
/// ```
pub fn do_until<P, A, R>(stop: P, action: A) -> Handle<()>
where
    P: FnMut() -> bool + 'static,
    A: FnMut() -> R + 'static,
    R: IntoHandle<()>,
{
    let (sink, handle) = promise();
    drive_into(DoUntil::new(stop, action), sink);
    handle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Failure;
    use crate::future::Sink;
    use crate::reactor;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[test]
    fn test_true_condition_never_runs_action() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let done = do_until(|| true, move || {
            counter.set(counter.get() + 1);
            Handle::ready(())
        });
        assert!(done.into_result().is_ok());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_failure_wins_over_condition() {
        let original = Failure::msg("first call failed");
        let copy = original.clone();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let done = do_until(|| false, move || {
            counter.set(counter.get() + 1);
            Handle::<()>::failure(copy.clone())
        });

        assert!(done.into_result().unwrap_err().ptr_eq(&original));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_pending_action_restarts_loop_later() {
        let parked: Rc<RefCell<Option<Sink<()>>>> = Rc::new(RefCell::new(None));
        let calls = Rc::new(Cell::new(0));
        let done = do_until(
            {
                let calls = Rc::clone(&calls);
                move || calls.get() == 2
            },
            {
                let parked = Rc::clone(&parked);
                let calls = Rc::clone(&calls);
                move || {
                    calls.set(calls.get() + 1);
                    let (sink, handle) = promise();
                    *parked.borrow_mut() = Some(sink);
                    handle
                }
            },
        );

        for expected in 1..=2 {
            assert_eq!(calls.get(), expected);
            assert!(done.is_pending());
            let sink = parked.borrow_mut().take().expect("action parked");
            sink.set_value(());
            reactor::run();
        }
        assert_eq!(calls.get(), 2);
        assert!(reactor::block_on(done).is_ok());
    }

    #[test]
    fn test_panicking_condition_fails_loop() {
        let done = do_until(|| panic!("condition exploded"), || Handle::ready(()));
        assert!(done.into_result().is_err());
    }
}
