//! Running an action over a sequence, one element at a time.
//!
//! Each element's action starts only after the previous element's handle has
//! resolved successfully. The first failure ends the walk: later elements are
//! never pulled from the iterator, and the failure is returned unchanged.

use crate::future::{start, Handle, IntoHandle};
use crate::handler::drive;
use crate::sans::Sans;
use crate::step::Step;

/// Stage that applies an action to each item of an iterator in turn.
///
/// Created via [`do_for_each`] and [`for_each`], or directly with
/// [`ForEach::new`] when the stage is to be composed with others.
pub struct ForEach<I, F> {
    iter: I,
    action: F,
}

impl<I, F> ForEach<I, F> {
    pub fn new(iter: I, action: F) -> Self {
        ForEach { iter, action }
    }
}

impl<I, F, R> Sans for ForEach<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> R,
    R: IntoHandle<()>,
{
    type Return = ();

    fn next(&mut self) -> Step<Handle<()>, Self::Return> {
        match self.iter.next() {
            Some(item) => {
                let action = &mut self.action;
                Step::Yielded(start(move || action(item)))
            }
            None => Step::Complete(()),
        }
    }
}

/// Apply `action` to every item of `iter`, strictly in order.
///
/// The returned handle resolves to success once every action succeeded, or to
/// the first failure. An empty iterator resolves immediately.
///
/// ```rust
/// use cont_flow::prelude::*;
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let log = Rc::clone(&seen);
/// let done = do_for_each(["a", "b"].into_iter(), move |s| {
///     log.borrow_mut().push(s);
///     Handle::ready(())
/// });
///
/// assert!(done.into_result().is_ok());
/// assert_eq!(*seen.borrow(), ["a", "b"]);
/// ```
pub fn do_for_each<I, F, R>(iter: I, action: F) -> Handle<()>
where
    I: Iterator + 'static,
    F: FnMut(I::Item) -> R + 'static,
    R: IntoHandle<()>,
{
    drive(ForEach::new(iter, action))
}

/// Apply `action` to every element of `items`, strictly in order.
///
/// Same as [`do_for_each`] for anything iterable, ranges included.
///
/// ```rust
/// use cont_flow::prelude::*;
///
/// let done = for_each(0..4, |i| {
///     if i < 10 { Ok(Handle::ready(())) } else { Err(Failure::msg("out of range")) }
/// });
/// assert!(done.into_result().is_ok());
/// ```
pub fn for_each<C, F, R>(items: C, action: F) -> Handle<()>
where
    C: IntoIterator,
    C::IntoIter: 'static,
    F: FnMut(C::Item) -> R + 'static,
    R: IntoHandle<()>,
{
    do_for_each(items.into_iter(), action)
}
