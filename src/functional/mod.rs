mod array;
pub mod fold;
mod vec;

pub use fold::{FailurePolicy, Foldable};

use crate::error::Error;

/// Trait which makes higher-kindred types tick
///
/// Rust has no concept of 'higher kinds' but only of concrete types.
/// This means that if you want to talk about sequence-like types
/// whose element types might change in the process of performing a trait method,
/// there is no simple built-in way to do so.
///
/// Instead, it can be modeled using generic associated types (GATs).
/// There are however two drawbacks to this approach:
/// - It is possible to accidentally implement the trait incorrectly for your type. As such, this is an _unsafe_ trait; implementers are responsible for making sure their implementation is sensible.
/// - The compiler does not know that a `Vec<T>::Containing<X>` == `Vec<X>`. As such, you'll often have to re-state 'obvious' trait bounds.
///   One solution here is to write bounds like `Vec<A>: Container<Containing<B> = Vec<B>>`.
///
/// # Safety
/// For instances to make sense, implementors need to follow the rules for the two associated types mentioned below to the letter.
pub unsafe trait Container {
    /// The element type of the container.
    /// For a type Foo<T> this has to be T.
    ///
    /// # Examples:
    /// For a Vec<T>, this is T.
    /// For an Option<A>, this is A.
    type Elem;

    /// The container type with its element type
    /// changed to X.
    /// For a type Foo<T> this has to be Foo<X>
    ///
    /// # Examples:
    /// For a Vec<T>, this is Vec<X>
    /// For an Option<A>, this is Option<X>
    type Containing<X>;
}

unsafe impl<T> Container for Option<T> {
    type Elem = T;
    type Containing<X> = Option<X>;
}

/// Transform a sequence by running a unary function element-wise on its contents.
///
/// Also known as 'Functor', or simply `map`.
///
/// Every implementation upholds the same contract:
/// - The output has exactly as many elements as the input.
/// - `output[i] == fun(input[i])`.
/// - `fun` is called exactly once per element, in ascending index order.
///   Nothing is memoized and nothing runs in parallel.
///
/// The sequence is borrowed for the whole call, so it cannot be mutated while it is mapped over.
///
/// Note that different from the usual, functionally pure, definition, we allow you to pass a FnMut.
/// (a function or closure which may contain mutable state).
/// Because of the ordering guarantee above, such state evolves predictably.
///
/// # Examples
/// Transform each element using a unary function:
/// ```rust
/// use functionals::Mappable;
/// let xs = vec![1, 2, 3];
/// assert_eq!(Mappable::map(&xs, |x| x + 1), vec![2, 3, 4]);
/// ```
///
/// Using mutable state:
///```rust
/// use functionals::Mappable;
/// let xs = vec![1, 2, 3];
/// let mut sum = 0;
/// let prefix_sums = Mappable::map(&xs, |val| {
///     sum += val;
///     sum
/// });
/// assert_eq!(prefix_sums, vec![1, 3, 6]);
/// assert_eq!(sum, 6);
///```
pub trait Mappable<U>: Container {
    fn map(&self, fun: impl FnMut(&Self::Elem) -> U) -> Self::Containing<U>;

    fn map_by_value(self, fun: impl FnMut(Self::Elem) -> U) -> Self::Containing<U>;

    /// Map a fallible function, failing fast.
    ///
    /// If `fun` fails on element `i`, the whole call fails with [`Error::ElementFailure`]
    /// carrying `i` and the original error.
    /// `fun` is not called for any element after `i`.
    ///
    /// To keep going past failures, wrap `fun` with [`crate::adverb::safely`] and use [`Mappable::map`] instead.
    ///
    /// ```rust
    /// use functionals::{Error, Mappable};
    /// let words = vec!["1", "2", "three", "4"];
    /// let parsed = words.try_map(|w| w.parse::<i32>());
    /// assert!(matches!(parsed, Err(Error::ElementFailure { index: 2, .. })));
    /// ```
    fn try_map<E>(
        &self,
        fun: impl FnMut(&Self::Elem) -> Result<U, E>,
    ) -> crate::error::Result<Self::Containing<U>, E>;

    /// Like [`Mappable::map`], but hands the same extra argument to every call.
    fn map_with<X: ?Sized>(
        &self,
        extra: &X,
        mut fun: impl FnMut(&Self::Elem, &X) -> U,
    ) -> Self::Containing<U> {
        self.map(|elem| fun(elem, extra))
    }

    /// Like [`Mappable::map`], but also passes the index of each element.
    fn imap(&self, mut fun: impl FnMut(usize, &Self::Elem) -> U) -> Self::Containing<U> {
        let mut index = 0;
        self.map(|elem| {
            let out = fun(index, elem);
            index += 1;
            out
        })
    }
}

impl<T, U> Mappable<U> for Option<T> {
    fn map(&self, fun: impl FnMut(&Self::Elem) -> U) -> Self::Containing<U> {
        Option::map(self.as_ref(), fun)
    }

    fn map_by_value(self, fun: impl FnMut(Self::Elem) -> U) -> Self::Containing<U> {
        Option::map(self, fun)
    }

    fn try_map<E>(
        &self,
        mut fun: impl FnMut(&Self::Elem) -> Result<U, E>,
    ) -> crate::error::Result<Self::Containing<U>, E> {
        match self {
            Some(elem) => fun(elem).map(Some).map_err(|source| Error::element(0, source)),
            None => Ok(None),
        }
    }
}

/// Map a binary (two-parameter) function over two sequences of the same shape.
///
/// Elements are paired up by position.
/// Sequences whose length is only known at runtime fail with [`Error::LengthMismatch`]
/// when the lengths differ, before `fun` is called even once;
/// fixed-length arrays always succeed.
///
/// Here is the implementation for Option, which is a sequence of length zero or one:
/// ```ignore
/// impl<A, U> Mappable2<A, U> for Option<A> {
///     fn map2<'b, B: 'b>(&self, rhs: &'b Option<B>, mut fun: impl FnMut(&A, &'b B) -> U) -> Result<Option<U>> {
///         match (self, rhs) {
///             (Some(left), Some(right)) => Ok(Some(fun(left, right))),
///             (None, None) => Ok(None),
///             (left, right) => Err(Error::LengthMismatch { left: left.iter().count(), right: right.iter().count() }),
///         }
///     }
/// }
/// ```
///
/// # On FnMut
/// Just like the unary [`Mappable`], this trait method takes a [`FnMut`] rather than a plain [`Fn`],
/// for the same reason as listed there.
pub trait Mappable2<A, U>: Container {
    fn map2<'b, B: 'b>(
        &self,
        rhs: &'b Self::Containing<B>,
        fun: impl FnMut(&A, &'b B) -> U,
    ) -> crate::error::Result<Self::Containing<U>>;
    fn map2_by_value<B>(
        self,
        rhs: Self::Containing<B>,
        fun: impl FnMut(A, B) -> U,
    ) -> crate::error::Result<Self::Containing<U>>;
}

impl<A, U> Mappable2<A, U> for Option<A> {
    fn map2<'b, B: 'b>(
        &self,
        rhs: &'b Self::Containing<B>,
        mut fun: impl FnMut(&A, &'b B) -> U,
    ) -> crate::error::Result<Self::Containing<U>> {
        match (self, rhs) {
            (Some(left), Some(right)) => Ok(Some(fun(left, right))),
            (None, None) => Ok(None),
            (left, right) => Err(Error::LengthMismatch {
                left: left.iter().count(),
                right: right.iter().count(),
            }),
        }
    }

    fn map2_by_value<B>(
        self,
        rhs: Self::Containing<B>,
        mut fun: impl FnMut(A, B) -> U,
    ) -> crate::error::Result<Self::Containing<U>> {
        match (self, rhs) {
            (Some(left), Some(right)) => Ok(Some(fun(left, right))),
            (None, None) => Ok(None),
            (left, right) => Err(Error::LengthMismatch {
                left: left.iter().count(),
                right: right.iter().count(),
            }),
        }
    }
}

/// Map a ternary (three-parameter) function over three sequences of the same shape.
///
/// This trait is very similar to [`Mappable`] and (especially) [`Mappable2`].
/// If any of the lengths differ, the error reports the first pair that does.
pub trait Mappable3<A, U>: Container {
    fn map3<B, C>(
        &self,
        second: &Self::Containing<B>,
        third: &Self::Containing<C>,
        fun: impl FnMut(&A, &B, &C) -> U,
    ) -> crate::error::Result<Self::Containing<U>>;
    fn map3_by_value<B, C>(
        self,
        second: Self::Containing<B>,
        third: Self::Containing<C>,
        fun: impl FnMut(A, B, C) -> U,
    ) -> crate::error::Result<Self::Containing<U>>;
}

impl<A, U> Mappable3<A, U> for Option<A> {
    fn map3<B, C>(
        &self,
        second: &Self::Containing<B>,
        third: &Self::Containing<C>,
        mut fun: impl FnMut(&A, &B, &C) -> U,
    ) -> crate::error::Result<Self::Containing<U>> {
        let lens = (self.iter().count(), second.iter().count(), third.iter().count());
        check_lengths(lens.0, lens.1)?;
        check_lengths(lens.0, lens.2)?;
        match (self, second, third) {
            (Some(one), Some(two), Some(three)) => Ok(Some(fun(one, two, three))),
            (_, _, _) => Ok(None),
        }
    }

    fn map3_by_value<B, C>(
        self,
        second: Self::Containing<B>,
        third: Self::Containing<C>,
        mut fun: impl FnMut(A, B, C) -> U,
    ) -> crate::error::Result<Self::Containing<U>> {
        let lens = (self.iter().count(), second.iter().count(), third.iter().count());
        check_lengths(lens.0, lens.1)?;
        check_lengths(lens.0, lens.2)?;
        match (self, second, third) {
            (Some(one), Some(two), Some(three)) => Ok(Some(fun(one, two, three))),
            (_, _, _) => Ok(None),
        }
    }
}

pub(crate) fn check_lengths(left: usize, right: usize) -> crate::error::Result<()> {
    if left == right {
        Ok(())
    } else {
        Err(Error::LengthMismatch { left, right })
    }
}
