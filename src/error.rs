//! Failures carried by completion handles.
//!
//! Every handle resolves either to a value or to a [`Failure`]. Combinators never
//! look inside a failure; they only move it from the handle that produced it to
//! the handle they return. [`Error`] lists the reasons this crate itself can fail.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use thiserror::Error;

/// Reasons a handle can fail that originate in this crate rather than in an action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The sink was dropped without ever being written.
    #[error("sink dropped without a value")]
    BrokenPromise,
    /// An action or continuation panicked.
    #[error("action panicked: {0}")]
    Panicked(String),
    /// A pending handle was read synchronously.
    #[error("handle is not resolved yet")]
    NotReady,
    /// The outcome of the handle was already taken.
    #[error("handle outcome was already taken")]
    Consumed,
    /// The task queue went idle while a blocked-on handle was still pending.
    #[error("task queue drained before the handle resolved")]
    Stalled,
}

/// The opaque failure a handle resolves to.
///
/// Cloning is cheap and keeps identity: two clones compare equal under
/// [`Failure::ptr_eq`], which is how callers can check a failure travelled through
/// a combinator unchanged.
#[derive(Clone)]
pub struct Failure(Rc<anyhow::Error>);

impl Failure {
    pub fn new<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Failure(Rc::new(anyhow::Error::new(error)))
    }

    /// Build a failure from a plain message.
    pub fn msg<M>(message: M) -> Self
    where
        M: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Failure(Rc::new(anyhow::Error::msg(message)))
    }

    /// Wrap an already type-erased error.
    pub fn from_anyhow(error: anyhow::Error) -> Self {
        Failure(Rc::new(error))
    }

    pub(crate) fn panicked(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        Failure::new(Error::Panicked(message))
    }

    /// Returns `true` if both failures are the same original failure.
    pub fn ptr_eq(&self, other: &Failure) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        self.0.downcast_ref::<E>()
    }

    pub fn is<E>(&self) -> bool
    where
        E: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        self.0.is::<E>()
    }

    /// The crate-level reason for this failure, if it came from this crate.
    pub fn as_error(&self) -> Option<&Error> {
        self.downcast_ref::<Error>()
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl<E> From<E> for Failure
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Failure::new(error)
    }
}
