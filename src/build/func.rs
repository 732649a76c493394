use crate::future::Handle;
use crate::sans::Sans;
use crate::step::Step;

/// A stage whose step is a closure. Created by [`from_fn`].
pub struct FromFn<F>(F);

impl<D, F> Sans for FromFn<F>
where
    F: FnMut() -> Step<Handle<()>, D>,
{
    type Return = D;

    fn next(&mut self) -> Step<Handle<()>, Self::Return> {
        (self.0)()
    }
}

/// Create a stage from a closure.
///
/// ```rust
/// use cont_flow::prelude::*;
///
/// let mut polls = 0;
/// let mut stage = from_fn(move || {
///     polls += 1;
///     if polls < 2 { Step::Yielded(Handle::ready(())) } else { Step::Complete(polls) }
/// });
/// assert!(stage.next().is_yielded());
/// assert_eq!(stage.next().unwrap_complete(), 2);
/// ```
pub fn from_fn<D, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> Step<Handle<()>, D>,
{
    FromFn(f)
}
