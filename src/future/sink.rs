use crate::error::{Error, Failure};
use crate::future::handle::Handle;
use crate::future::slot::{self, SharedSlot, Slot};

/// Write-once end of a completion.
///
/// Every write method consumes the sink, so it can be written at most once. A
/// sink dropped without a write resolves its handle to [`Error::BrokenPromise`],
/// so a reader is never left pending by a writer that went away.
pub struct Sink<T: 'static> {
    slot: Option<SharedSlot<T>>,
}

/// Create a connected sink and handle.
///
/// The handle can be observed before or after the sink is written.
///
/// ```
/// use cont_flow::promise;
///
/// let (sink, handle) = promise::<u32>();
/// assert!(handle.is_pending());
/// sink.set_value(3);
/// assert_eq!(handle.into_result().unwrap(), 3);
/// ```
pub fn promise<T: 'static>() -> (Sink<T>, Handle<T>) {
    let slot = Slot::pending();
    let handle = Handle::from_slot(slot.clone());
    (Sink { slot: Some(slot) }, handle)
}

impl<T: 'static> Sink<T> {
    pub fn set_value(self, value: T) {
        self.resolve(Ok(value))
    }

    pub fn set_failure<E>(self, failure: E)
    where
        E: Into<Failure>,
    {
        self.resolve(Err(failure.into()))
    }

    pub fn resolve(mut self, result: Result<T, Failure>) {
        if let Some(slot) = self.slot.take() {
            slot::complete(&slot, result);
        }
    }
}

impl<T: 'static> Drop for Sink<T> {
    fn drop(&mut self) {
        if let Some(slot) = self.slot.take() {
            slot::complete(&slot, Err(Failure::new(Error::BrokenPromise)));
        }
    }
}

impl<T: 'static> std::fmt::Debug for Sink<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sink")
            .field("written", &self.slot.is_none())
            .finish()
    }
}
