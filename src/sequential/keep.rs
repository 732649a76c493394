use std::convert::Infallible;

use crate::future::{start, Handle, IntoHandle};
use crate::handler::drive;
use crate::sans::Sans;
use crate::step::Step;

/// Stage that runs an action again after every success. It never completes.
pub struct KeepDoing<A> {
    action: A,
}

impl<A> KeepDoing<A> {
    pub fn new(action: A) -> Self {
        KeepDoing { action }
    }
}

impl<A, R> Sans for KeepDoing<A>
where
    A: FnMut() -> R,
    R: IntoHandle<()>,
{
    type Return = Infallible;

    fn next(&mut self) -> Step<Handle<()>, Self::Return> {
        Step::Yielded(start(&mut self.action))
    }
}

/// Invoke `action` over and over until it fails.
///
/// Meant for pump loops whose only way out is an error such as end of stream,
/// so the returned handle can only ever resolve to that failure. Actions that
/// complete synchronously are looped in place like every other stage, so an
/// always-ready action does not grow the stack.
///
/// ```rust
/// use cont_flow::prelude::*;
///
/// let mut chunks = vec![3, 2, 1];
/// let pumped = keep_doing(move || match chunks.pop() {
///     Some(_) => Ok(Handle::ready(())),
///     None => Err(Failure::msg("end of stream")),
/// });
///
/// assert_eq!(pumped.into_result().unwrap_err().to_string(), "end of stream");
/// ```
pub fn keep_doing<A, R>(action: A) -> Handle<Infallible>
where
    A: FnMut() -> R + 'static,
    R: IntoHandle<()>,
{
    drive(KeepDoing::new(action))
}
