//! Folding a sequence into a single value, or into the trace of all intermediate values.
//!
//! All reductions run strictly left to right,
//! calling `combine(accumulator, element)` once per element.
//! The accumulator is owned by the running call; nothing is shared between calls.

use core::convert::Infallible;

use super::Container;
use crate::error::{Error, Interrupted};

/// What a failing accumulation hands back besides the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Throw away everything computed so far.
    #[default]
    Discard,
    /// Return the accumulator values computed before the failing step.
    KeepPrefix,
}

/// Sequences whose elements can be visited in order.
///
/// Implementors only provide [`Foldable::elems`];
/// reductions, accumulations and the predicate functionals are built on top of it.
///
/// ```rust
/// use functionals::Foldable;
/// let xs = vec![1, 2, 3, 4, 5];
/// assert_eq!(xs.reduce(Some(0), |acc, x| acc + x), Ok(15));
/// assert_eq!(xs.accumulate(Some(0), |acc, x| acc + x), vec![0, 1, 3, 6, 10, 15]);
/// assert_eq!(xs.fold(0.5, |acc, &x| acc + f64::from(x)), 15.5);
/// ```
///
/// # On Option
/// `Option` is a sequence of zero or one elements and implements this trait too.
/// The standard library has an unstable inherent `Option::reduce`,
/// so call ours with the trait path to keep it from being picked up once that is stabilised:
/// ```rust
/// use functionals::Foldable;
/// assert_eq!(Foldable::reduce(&Some(3), Some(1), |acc, x| acc + x), Ok(4));
/// ```
pub trait Foldable: Container {
    /// The elements, in ascending index order.
    fn elems(&self) -> impl Iterator<Item = &Self::Elem>;

    /// Calls `fun` on every element for its side effects only,
    /// and hands back the sequence itself.
    fn walk(&self, mut fun: impl FnMut(&Self::Elem)) -> &Self {
        for elem in self.elems() {
            fun(elem);
        }
        self
    }

    /// Fold with an accumulator whose type may differ from the element type.
    ///
    /// Never fails: an empty sequence returns `init` unchanged.
    fn fold<A>(&self, init: A, mut combine: impl FnMut(A, &Self::Elem) -> A) -> A {
        self.elems().fold(init, |acc, elem| combine(acc, elem))
    }

    /// Fallible [`Foldable::fold`].
    ///
    /// The error carries the index of the element that was being combined.
    fn try_fold<A, E>(
        &self,
        init: A,
        mut combine: impl FnMut(A, &Self::Elem) -> Result<A, E>,
    ) -> crate::error::Result<A, E> {
        let mut acc = init;
        for (index, elem) in self.elems().enumerate() {
            acc = combine(acc, elem).map_err(|source| Error::element(index, source))?;
        }
        Ok(acc)
    }

    /// Reduce the sequence to a single element.
    ///
    /// Without `init`, the first element is the starting accumulator
    /// and combining starts at index 1.
    /// An empty sequence then fails with [`Error::EmptyReduction`].
    /// With `init`, an empty sequence returns `init`.
    fn reduce(
        &self,
        init: Option<Self::Elem>,
        mut combine: impl FnMut(Self::Elem, &Self::Elem) -> Self::Elem,
    ) -> crate::error::Result<Self::Elem>
    where
        Self::Elem: Clone,
    {
        self.try_reduce(init, |acc, elem| Ok::<_, Infallible>(combine(acc, elem)))
            .map_err(|err| match err {
                Error::ElementFailure { source, .. } => match source {},
                other => other,
            })
    }

    /// Fallible [`Foldable::reduce`]. Fails fast; no partial accumulator is returned.
    fn try_reduce<E>(
        &self,
        init: Option<Self::Elem>,
        mut combine: impl FnMut(Self::Elem, &Self::Elem) -> Result<Self::Elem, E>,
    ) -> crate::error::Result<Self::Elem, E>
    where
        Self::Elem: Clone,
    {
        let offset = usize::from(init.is_none());
        let mut elems = self.elems();
        let mut acc = seed(init, &mut elems).ok_or_else(empty_reduction::<E>)?;
        for (index, elem) in elems.enumerate() {
            acc = combine(acc, elem).map_err(|source| Error::element(index + offset, source))?;
        }
        Ok(acc)
    }

    /// Like [`Foldable::reduce`], but returns every intermediate accumulator.
    ///
    /// The first entry is the starting accumulator, so the trace has one entry more
    /// than the sequence when `init` is given, and as many entries otherwise.
    /// Entry `i` equals `reduce` on the matching prefix.
    /// An empty sequence without `init` has an empty trace.
    fn accumulate(
        &self,
        init: Option<Self::Elem>,
        mut combine: impl FnMut(Self::Elem, &Self::Elem) -> Self::Elem,
    ) -> Vec<Self::Elem>
    where
        Self::Elem: Clone,
    {
        let mut elems = self.elems();
        let Some(mut acc) = seed(init, &mut elems) else {
            return Vec::new();
        };
        let mut trace = vec![acc.clone()];
        for elem in elems {
            acc = combine(acc, elem);
            trace.push(acc.clone());
        }
        trace
    }

    /// Accumulate with an accumulator of a different type than the elements.
    ///
    /// Always returns one entry more than the sequence has elements.
    fn scan<A: Clone>(&self, init: A, mut combine: impl FnMut(A, &Self::Elem) -> A) -> Vec<A> {
        let mut acc = init;
        let mut trace = vec![acc.clone()];
        for elem in self.elems() {
            acc = combine(acc, elem);
            trace.push(acc.clone());
        }
        trace
    }

    /// Fallible [`Foldable::accumulate`], discarding everything on failure.
    fn try_accumulate<E>(
        &self,
        init: Option<Self::Elem>,
        combine: impl FnMut(Self::Elem, &Self::Elem) -> Result<Self::Elem, E>,
    ) -> Result<Vec<Self::Elem>, Interrupted<Self::Elem, E>>
    where
        Self::Elem: Clone,
    {
        self.try_accumulate_with(FailurePolicy::Discard, init, combine)
    }

    /// Fallible [`Foldable::accumulate`] with an explicit [`FailurePolicy`].
    ///
    /// ```rust
    /// use functionals::{FailurePolicy, Foldable};
    /// let xs = vec![1, 2, -3, 4];
    /// let checked_add = |acc: i32, x: &i32| if *x < 0 { Err("negative") } else { Ok(acc + x) };
    ///
    /// let discarded = xs.try_accumulate_with(FailurePolicy::Discard, None, checked_add).unwrap_err();
    /// assert!(discarded.partial.is_empty());
    ///
    /// let kept = xs.try_accumulate_with(FailurePolicy::KeepPrefix, None, checked_add).unwrap_err();
    /// assert_eq!(kept.partial, vec![1, 3]);
    /// assert_eq!(kept.error.index(), Some(2));
    /// ```
    fn try_accumulate_with<E>(
        &self,
        policy: FailurePolicy,
        init: Option<Self::Elem>,
        mut combine: impl FnMut(Self::Elem, &Self::Elem) -> Result<Self::Elem, E>,
    ) -> Result<Vec<Self::Elem>, Interrupted<Self::Elem, E>>
    where
        Self::Elem: Clone,
    {
        let offset = usize::from(init.is_none());
        let mut elems = self.elems();
        let Some(mut acc) = seed(init, &mut elems) else {
            return Ok(Vec::new());
        };
        let mut trace = vec![acc.clone()];
        for (index, elem) in elems.enumerate() {
            match combine(acc, elem) {
                Ok(next) => {
                    trace.push(next.clone());
                    acc = next;
                }
                Err(source) => {
                    let partial = match policy {
                        FailurePolicy::Discard => Vec::new(),
                        FailurePolicy::KeepPrefix => trace,
                    };
                    return Err(Interrupted {
                        error: Error::element(index + offset, source),
                        partial,
                    });
                }
            }
        }
        Ok(trace)
    }

    /// The elements for which `pred` holds, in order.
    fn keep(&self, mut pred: impl FnMut(&Self::Elem) -> bool) -> Vec<&Self::Elem> {
        self.elems().filter(|&elem| pred(elem)).collect()
    }

    /// The elements for which `pred` does not hold, in order.
    fn discard(&self, mut pred: impl FnMut(&Self::Elem) -> bool) -> Vec<&Self::Elem> {
        self.elems().filter(|&elem| !pred(elem)).collect()
    }

    /// The first element for which `pred` holds. Stops looking once found.
    fn detect(&self, mut pred: impl FnMut(&Self::Elem) -> bool) -> Option<&Self::Elem> {
        self.elems().find(|&elem| pred(elem))
    }

    /// Index of the first element for which `pred` holds.
    fn detect_index(&self, pred: impl FnMut(&Self::Elem) -> bool) -> Option<usize> {
        self.elems().position(pred)
    }

    /// Whether `pred` holds for at least one element.
    fn some(&self, pred: impl FnMut(&Self::Elem) -> bool) -> bool {
        self.elems().any(pred)
    }

    /// Whether `pred` holds for every element. True for an empty sequence.
    fn every(&self, pred: impl FnMut(&Self::Elem) -> bool) -> bool {
        self.elems().all(pred)
    }
}

impl<T> Foldable for Option<T> {
    fn elems(&self) -> impl Iterator<Item = &Self::Elem> {
        self.iter()
    }
}

fn seed<'a, T: Clone + 'a>(init: Option<T>, elems: &mut impl Iterator<Item = &'a T>) -> Option<T> {
    init.or_else(|| elems.next().cloned())
}

fn empty_reduction<E>() -> Error<E> {
    tracing::debug!("reduce called on an empty sequence without an initial value");
    Error::EmptyReduction
}
