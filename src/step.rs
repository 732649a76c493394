/// Outcome of advancing a loop stage by one step.
///
/// `Yielded` carries work the loop must wait on before the next step;
/// `Complete` carries the loop's final value.
///
/// # Examples
///
/// ```rust
/// use cont_flow::Step;
///
/// let waiting: Step<u32, &str> = Step::Yielded(7);
/// let finished: Step<u32, &str> = Step::Complete("done");
///
/// assert!(waiting.is_yielded());
/// assert_eq!(finished.map_complete(str::len), Step::Complete(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step<Y, D> {
    /// Keep going once the yielded work is done
    Yielded(Y),
    /// The loop is finished
    Complete(D),
}

impl<Y, D> Step<Y, D> {
    #[inline]
    pub const fn is_yielded(&self) -> bool {
        matches!(self, Step::Yielded(_))
    }

    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Step::Complete(_))
    }

    #[inline]
    pub fn map_complete<D2, F>(self, f: F) -> Step<Y, D2>
    where
        F: FnOnce(D) -> D2,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(y),
            Step::Complete(d) => Step::Complete(f(d)),
        }
    }

    #[inline]
    pub fn unwrap_complete(self) -> D {
        match self {
            Step::Yielded(_) => panic!("called `Step::unwrap_complete()` on a `Yielded` value"),
            Step::Complete(d) => d,
        }
    }
}
