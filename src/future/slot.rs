use std::cell::RefCell;
use std::rc::Rc;
use std::task::Waker;

use crate::error::{Error, Failure};
use crate::reactor;

pub(crate) type Continuation<T> = Box<dyn FnOnce(Result<T, Failure>)>;

pub(crate) type SharedSlot<T> = Rc<RefCell<Slot<T>>>;

enum State<T> {
    Pending,
    Ready(Result<T, Failure>),
    /// The outcome was handed to a reader or a continuation.
    Consumed,
}

/// State shared between a [`Sink`](super::Sink) and its [`Handle`](super::Handle).
pub(crate) struct Slot<T> {
    state: State<T>,
    continuation: Option<Continuation<T>>,
    waker: Option<Waker>,
}

impl<T> Slot<T> {
    pub(crate) fn pending() -> SharedSlot<T> {
        Rc::new(RefCell::new(Slot {
            state: State::Pending,
            continuation: None,
            waker: None,
        }))
    }

    pub(crate) fn ready(result: Result<T, Failure>) -> SharedSlot<T> {
        Rc::new(RefCell::new(Slot {
            state: State::Ready(result),
            continuation: None,
            waker: None,
        }))
    }

    pub(crate) fn is_pending(&self) -> bool {
        matches!(self.state, State::Pending)
    }

    pub(crate) fn is_failed(&self) -> bool {
        matches!(self.state, State::Ready(Err(_)))
    }

    /// Take the outcome if there is one. Reading twice yields [`Error::Consumed`].
    pub(crate) fn take(&mut self) -> Option<Result<T, Failure>> {
        match std::mem::replace(&mut self.state, State::Consumed) {
            State::Pending => {
                self.state = State::Pending;
                None
            }
            State::Ready(result) => Some(result),
            State::Consumed => Some(Err(Failure::new(Error::Consumed))),
        }
    }

    pub(crate) fn set_continuation(&mut self, continuation: Continuation<T>) {
        debug_assert!(self.continuation.is_none(), "a handle takes one continuation");
        self.continuation = Some(continuation);
    }

    pub(crate) fn set_waker(&mut self, waker: &Waker) {
        match &self.waker {
            Some(current) if current.will_wake(waker) => {}
            _ => self.waker = Some(waker.clone()),
        }
    }
}

/// Write the outcome into `slot`.
///
/// A waiting continuation is queued on the reactor rather than called here, so the
/// writer's stack never grows by the reader's work.
pub(crate) fn complete<T: 'static>(slot: &SharedSlot<T>, result: Result<T, Failure>) {
    let mut inner = slot.borrow_mut();
    debug_assert!(inner.is_pending(), "a sink is written once");
    if let Some(continuation) = inner.continuation.take() {
        inner.state = State::Consumed;
        drop(inner);
        reactor::schedule(move || continuation(result));
    } else {
        inner.state = State::Ready(result);
        let waker = inner.waker.take();
        drop(inner);
        if let Some(waker) = waker {
            waker.wake();
        }
    }
}
