//! Core trait for loop stages.
//!
//! A [`Sans`] is the body of an asynchronous loop with the waiting taken out: each
//! call to [`next`](Sans::next) either starts one more piece of work and yields its
//! handle, or reports that the loop is done. The stage never waits on anything
//! itself. The [driver](crate::drive) does the waiting and decides whether to
//! go around again right away or to park the stage in a continuation.
//!
//! # Examples
//!
//! ```rust
//! use cont_flow::prelude::*;
//!
//! let mut left = 3;
//! let countdown = from_fn(move || {
//!     if left == 0 {
//!         Step::Complete("liftoff")
//!     } else {
//!         left -= 1;
//!         Step::Yielded(Handle::ready(()))
//!     }
//! });
//!
//! let done = drive(countdown);
//! assert_eq!(done.into_result().unwrap(), "liftoff");
//! ```

use crate::future::Handle;
use crate::step::Step;

/// A stateful loop body that yields one in-flight handle per step.
///
/// Stages own their loop state outright. The driver moves the stage into each
/// continuation it registers, so a stage is never shared and never aliased.
pub trait Sans {
    /// Value the loop finishes with.
    type Return;

    /// Start the next iteration, or finish.
    fn next(&mut self) -> Step<Handle<()>, Self::Return>;

    fn boxed(self) -> Box<dyn Sans<Return = Self::Return>>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl<L, R> Sans for either::Either<L, R>
where
    L: Sans,
    R: Sans<Return = L::Return>,
{
    type Return = L::Return;

    fn next(&mut self) -> Step<Handle<()>, Self::Return> {
        match self {
            either::Either::Left(l) => l.next(),
            either::Either::Right(r) => r.next(),
        }
    }
}

impl<D> Sans for Box<dyn Sans<Return = D>> {
    type Return = D;

    fn next(&mut self) -> Step<Handle<()>, Self::Return> {
        (**self).next()
    }
}
