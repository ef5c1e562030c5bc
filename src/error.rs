//! Errors raised by the mapping and reducing functionals.
//!
//! Everything fails fast: the first failing element aborts the whole call,
//! and the error remembers at which index it happened.
//! Use [`crate::adverb::safely`] or [`crate::adverb::possibly`] when failures
//! should become data instead.

use core::convert::Infallible;

use crate::value::KindError;

/// Shorthand for results of the functionals in this crate.
///
/// `E` is the error type of the user-supplied function.
/// It defaults to [`Infallible`] for operations that can only fail structurally
/// (an empty reduction, a type mismatch, ...).
pub type Result<T, E = Infallible> = core::result::Result<T, Error<E>>;

/// Everything that can go wrong while mapping or reducing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error<E = Infallible> {
    /// The supplied function failed on the element at `index`.
    ///
    /// Elements after `index` were not visited.
    #[error("function failed on element {index}")]
    ElementFailure { index: usize, source: E },

    /// `reduce` was called on an empty sequence without an initial value.
    #[error("cannot reduce an empty sequence without an initial value")]
    EmptyReduction,

    /// The element (or produced value) at `index` is not of the declared type.
    #[error("element {index} has the wrong type")]
    TypeMismatch {
        index: usize,
        #[source]
        source: KindError,
    },

    /// Sequences mapped together do not have the same length.
    #[error("sequences have different lengths ({left} and {right})")]
    LengthMismatch { left: usize, right: usize },
}

impl<E> Error<E> {
    /// Index of the offending element, if the error is tied to one.
    pub fn index(&self) -> Option<usize> {
        match self {
            Error::ElementFailure { index, .. } | Error::TypeMismatch { index, .. } => Some(*index),
            Error::EmptyReduction | Error::LengthMismatch { .. } => None,
        }
    }

    pub(crate) fn element(index: usize, source: E) -> Self {
        tracing::debug!(index, "function failed on element");
        Error::ElementFailure { index, source }
    }
}

impl Error<Infallible> {
    /// Widens a structural error so it can be combined with
    /// the errors of a fallible function.
    pub fn widen<E>(self) -> Error<E> {
        match self {
            Error::ElementFailure { source, .. } => match source {},
            Error::EmptyReduction => Error::EmptyReduction,
            Error::TypeMismatch { index, source } => Error::TypeMismatch { index, source },
            Error::LengthMismatch { left, right } => Error::LengthMismatch { left, right },
        }
    }
}

/// A failed accumulation.
///
/// Depending on the [`FailurePolicy`](crate::functional::FailurePolicy) used,
/// `partial` is either empty or holds every accumulator value computed
/// before the failing step.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("accumulation interrupted ({} accumulated values kept)", .partial.len())]
pub struct Interrupted<A, E> {
    #[source]
    pub error: Error<E>,
    pub partial: Vec<A>,
}

static_assertions::assert_impl_all!(Error: Send, Sync, std::error::Error);
static_assertions::assert_impl_all!(Error<std::num::ParseIntError>: std::error::Error);
