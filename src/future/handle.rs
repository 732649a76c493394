use std::fmt;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::pin::Pin;
use std::task::{Context, Poll};

use either::Either;

use crate::error::{Error, Failure};
use crate::future::sink::{promise, Sink};
use crate::future::slot::{SharedSlot, Slot};
use crate::tracing_compat::debug;

/// Read end of a completion: the eventual outcome of one action.
///
/// A handle is pending until its [`Sink`] is written, then holds either a value or
/// a [`Failure`] for good. It can be checked without blocking ([`available`],
/// [`is_failed`]) and takes exactly one continuation ([`on_complete`], [`then`],
/// [`then_wrapped`], [`forward_to`]), each of which consumes the handle.
///
/// A continuation attached to a handle that is already resolved runs immediately.
/// One attached while pending runs from the [`reactor`](crate::reactor) queue once
/// the sink is written.
///
/// [`available`]: Handle::available
/// [`is_failed`]: Handle::is_failed
/// [`on_complete`]: Handle::on_complete
/// [`then`]: Handle::then
/// [`then_wrapped`]: Handle::then_wrapped
/// [`forward_to`]: Handle::forward_to
pub struct Handle<T> {
    slot: SharedSlot<T>,
}

impl<T: 'static> Handle<T> {
    pub(crate) fn from_slot(slot: SharedSlot<T>) -> Self {
        Handle { slot }
    }

    /// A handle already resolved to `value`.
    pub fn ready(value: T) -> Self {
        Handle::from_result(Ok(value))
    }

    /// A handle already resolved to `failure`.
    pub fn failure<E>(failure: E) -> Self
    where
        E: Into<Failure>,
    {
        Handle::from_result(Err(failure.into()))
    }

    pub fn from_result(result: Result<T, Failure>) -> Self {
        Handle {
            slot: Slot::ready(result),
        }
    }

    /// Returns `true` once the handle has resolved, to success or failure.
    pub fn available(&self) -> bool {
        !self.slot.borrow().is_pending()
    }

    pub fn is_pending(&self) -> bool {
        self.slot.borrow().is_pending()
    }

    /// Returns `true` if the handle resolved to a failure.
    pub fn is_failed(&self) -> bool {
        self.slot.borrow().is_failed()
    }

    /// Take the outcome if the handle has resolved, leaving it consumed.
    ///
    /// Returns `None` while pending.
    pub fn take_ready(&mut self) -> Option<Result<T, Failure>> {
        self.slot.borrow_mut().take()
    }

    /// The outcome of a resolved handle.
    ///
    /// A pending handle yields an [`Error::NotReady`] failure.
    pub fn into_result(mut self) -> Result<T, Failure> {
        self.take_ready()
            .unwrap_or_else(|| Err(Failure::new(Error::NotReady)))
    }

    /// Register the single continuation of this handle.
    ///
    /// Runs `f` now if the handle is resolved, otherwise from the reactor queue
    /// once it is.
    pub fn on_complete<F>(self, f: F)
    where
        F: FnOnce(Result<T, Failure>) + 'static,
    {
        let mut slot = self.slot.borrow_mut();
        match slot.take() {
            Some(result) => {
                drop(slot);
                f(result);
            }
            None => slot.set_continuation(Box::new(f)),
        }
    }

    /// Chain `f` on success. A failure skips `f` and passes through unchanged.
    ///
    /// `f` may return anything convertible into a handle, so it can start another
    /// action. Panics inside `f` become a failed handle.
    pub fn then<U, F, R>(self, f: F) -> Handle<U>
    where
        U: 'static,
        F: FnOnce(T) -> R + 'static,
        R: IntoHandle<U>,
    {
        if self.available() {
            return match self.into_result() {
                Ok(value) => start(move || f(value)),
                Err(failure) => Handle::failure(failure),
            };
        }
        let (sink, handle) = promise();
        self.on_complete(move |result| match result {
            Ok(value) => start(move || f(value)).forward_to(sink),
            Err(failure) => sink.set_failure(failure),
        });
        handle
    }

    /// Chain `f` on either outcome, handing it this handle once resolved.
    ///
    /// The handle passed to `f` carries the original outcome unchanged, success or
    /// failure, so `f` decides what to do with it.
    pub fn then_wrapped<U, F, R>(self, f: F) -> Handle<U>
    where
        U: 'static,
        F: FnOnce(Handle<T>) -> R + 'static,
        R: IntoHandle<U>,
    {
        if self.available() {
            return start(move || f(self));
        }
        let (sink, handle) = promise();
        self.on_complete(move |result| {
            start(move || f(Handle::from_result(result))).forward_to(sink)
        });
        handle
    }

    pub fn map<U, F>(self, f: F) -> Handle<U>
    where
        U: 'static,
        F: FnOnce(T) -> U + 'static,
    {
        self.then(move |value| Handle::ready(f(value)))
    }

    /// Forget the value, keeping only success or failure.
    pub fn discard(self) -> Handle<()> {
        self.map(|_| ())
    }

    /// Write this handle's eventual outcome into `sink`.
    pub fn forward_to(self, sink: Sink<T>) {
        self.on_complete(move |result| sink.resolve(result));
    }
}

impl<T> Future for Handle<T> {
    type Output = Result<T, Failure>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut slot = self.slot.borrow_mut();
        match slot.take() {
            Some(result) => Poll::Ready(result),
            None => {
                slot.set_waker(cx.waker());
                Poll::Pending
            }
        }
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = self.slot.borrow();
        let state = if slot.is_pending() {
            "pending"
        } else if slot.is_failed() {
            "failed"
        } else {
            "resolved"
        };
        f.debug_struct("Handle").field("state", &state).finish()
    }
}

/// Conversion of an action's return value into a [`Handle`].
///
/// Besides a plain handle, an action may return `Result<Handle<T>, E>` to report
/// that it could not even start, or an [`Either`] of two convertible types when its
/// branches produce different kinds of result.
pub trait IntoHandle<T> {
    fn into_handle(self) -> Handle<T>;
}

impl<T> IntoHandle<T> for Handle<T> {
    fn into_handle(self) -> Handle<T> {
        self
    }
}

impl<T, E> IntoHandle<T> for Result<Handle<T>, E>
where
    T: 'static,
    E: Into<Failure>,
{
    fn into_handle(self) -> Handle<T> {
        match self {
            Ok(handle) => handle,
            Err(failure) => Handle::failure(failure),
        }
    }
}

impl<T, L, R> IntoHandle<T> for Either<L, R>
where
    L: IntoHandle<T>,
    R: IntoHandle<T>,
{
    fn into_handle(self) -> Handle<T> {
        match self {
            Either::Left(l) => l.into_handle(),
            Either::Right(r) => r.into_handle(),
        }
    }
}

/// Invoke `action` and return its handle.
///
/// A panic while starting the action, or an `Err` returned in place of a handle,
/// comes back as a failed handle instead of escaping to the caller.
pub fn start<T, R, F>(action: F) -> Handle<T>
where
    T: 'static,
    F: FnOnce() -> R,
    R: IntoHandle<T>,
{
    match panic::catch_unwind(AssertUnwindSafe(action)) {
        Ok(result) => result.into_handle(),
        Err(payload) => {
            let failure = Failure::panicked(payload);
            debug!(%failure, "action panicked while starting");
            Handle::failure(failure)
        }
    }
}
