//! Waiting for a fixed set of handles of different types.
//!
//! [`when_all`] takes a tuple of handles and resolves to a tuple of the same
//! handles once every one of them has resolved. Each slot keeps its own outcome,
//! success or failure, so nothing is short-circuited and no failure is lost; the
//! caller inspects each slot.
//!
//! The tuple is taken apart one element at a time: observe the head on either
//! outcome, recursively join the tail, observe that, then put the head back in
//! front. The recursion happens at compile time, one impl per arity, because
//! every position has its own type.

use crate::error::Failure;
use crate::future::Handle;

/// A tuple of handles that can be joined by [`when_all`].
///
/// Implemented for `()` and for tuples of up to twelve [`Handle`]s.
pub trait WhenAll {
    /// The same tuple, with every handle resolved.
    type Output: 'static;

    fn when_all(self) -> Handle<Self::Output>;
}

impl WhenAll for () {
    type Output = ();

    fn when_all(self) -> Handle<()> {
        Handle::ready(())
    }
}

macro_rules! impl_when_all {
    () => {};
    ($head:ident $(, $tail:ident)*) => {
        impl<$head: 'static $(, $tail: 'static)*> WhenAll for (Handle<$head>, $(Handle<$tail>,)*) {
            type Output = (Handle<$head>, $(Handle<$tail>,)*);

            #[allow(non_snake_case)]
            fn when_all(self) -> Handle<Self::Output> {
                let ($head, $($tail,)*) = self;
                $head.then_wrapped(move |$head: Handle<$head>| {
                    ($($tail,)*).when_all().then_wrapped(
                        move |rest| -> Result<Handle<Self::Output>, Failure> {
                            let ($($tail,)*) = rest.into_result()?;
                            Ok(Handle::ready(($head, $($tail,)*)))
                        },
                    )
                })
            }
        }

        impl_when_all!($($tail),*);
    };
}

impl_when_all!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);

/// Wait for every handle in `handles`, keeping each one's outcome.
///
/// ```rust
/// use cont_flow::prelude::*;
///
/// let (name, count, broken) = when_all((
///     Handle::ready("disk"),
///     Handle::ready(3_u32),
///     Handle::<()>::failure(Failure::msg("offline")),
/// ))
/// .into_result()
/// .unwrap();
///
/// assert_eq!(name.into_result().unwrap(), "disk");
/// assert_eq!(count.into_result().unwrap(), 3);
/// assert_eq!(broken.into_result().unwrap_err().to_string(), "offline");
/// ```
pub fn when_all<W>(handles: W) -> Handle<W::Output>
where
    W: WhenAll,
{
    handles.when_all()
}

/// Variadic form of [`when_all`]: `when_all!(a, b, c)` is `when_all((a, b, c))`.
#[macro_export]
macro_rules! when_all {
    ($($handle:expr),* $(,)?) => {
        $crate::concurrent::when_all(($($handle,)*))
    };
}
