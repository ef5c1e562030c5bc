//! Adverbs: functions that take a function and return a modified version of it.
//!
//! [`safely`] and [`possibly`] turn failures into data, so that a single failing
//! element no longer aborts a whole [`Mappable::map`](crate::Mappable::map).
//! [`Tally`] counts calls made through it.
//!
//! Nothing here rolls back side effects or retries:
//! every call runs the wrapped function exactly once, and ends up either succeeded or failed.

use core::any::Any;
use core::fmt;
use core::num::NonZeroUsize;
use std::error::Error as StdError;
use std::sync::Arc;

use crate::helper::simplified_typename;

/// Where a captured failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// The function returned an `Err`.
    Returned,
    /// The function panicked.
    Panicked,
}

/// A captured failure.
///
/// Immutable once built, and cheap to clone: the original error (if any) is shared.
///
/// Two `ErrorInfo`s are equal when their message, origin and type name are;
/// the original error itself does not take part in the comparison.
#[derive(Clone)]
pub struct ErrorInfo {
    message: String,
    origin: Origin,
    type_name: Option<String>,
    cause: Option<Arc<dyn StdError + Send + Sync + 'static>>,
}

impl ErrorInfo {
    /// A failure described only by a message.
    pub fn msg(message: impl Into<String>) -> Self {
        ErrorInfo {
            message: message.into(),
            origin: Origin::Returned,
            type_name: None,
            cause: None,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Short type name of the original error, e.g. `ParseIntError`.
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    /// The original error, if the failure came from one.
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.cause()?.downcast_ref::<E>()
    }

    fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(msg) = payload.downcast_ref::<&'static str>() {
            (*msg).to_owned()
        } else if let Some(msg) = payload.downcast_ref::<String>() {
            msg.clone()
        } else {
            "function panicked".to_owned()
        };
        ErrorInfo {
            message,
            origin: Origin::Panicked,
            type_name: None,
            cause: None,
        }
    }
}

impl<E> From<E> for ErrorInfo
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        ErrorInfo {
            message: error.to_string(),
            origin: Origin::Returned,
            type_name: Some(simplified_typename::<E>()),
            cause: Some(Arc::new(error)),
        }
    }
}

impl PartialEq for ErrorInfo {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
            && self.origin == other.origin
            && self.type_name == other.type_name
    }
}

impl fmt::Debug for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorInfo")
            .field("message", &self.message)
            .field("origin", &self.origin)
            .field("type_name", &self.type_name)
            .finish()
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Wraps `fun` so that calling it never fails outward.
///
/// Each call returns `Ok` with the value `fun` produced, or `Err` with an [`ErrorInfo`]
/// describing why it did not.
/// With the `unwind` feature (on by default) a panic inside `fun` is captured as well.
///
/// ```rust
/// use functionals::{safely, Mappable};
/// let words = vec!["1", "two", "3"];
/// let parsed = words.map(safely(|w: &&str| w.parse::<i32>()));
/// assert_eq!(parsed[0], Ok(1));
/// assert_eq!(parsed[1].as_ref().unwrap_err().type_name(), Some("ParseIntError"));
/// assert_eq!(parsed[2], Ok(3));
/// ```
///
/// # Panics and the panic hook
/// Capturing a panic does not silence it: the process-wide panic hook still runs first,
/// so with the default hook every captured panic is also printed to stderr.
/// Install a quiet hook with [`std::panic::set_hook`] around the call if that output is unwanted.
/// The hook is global, so restore the previous one afterwards.
///
/// ```rust
/// # #[cfg(feature = "unwind")] {
/// use functionals::{safely, ErrorInfo, Origin};
/// let previous = std::panic::take_hook();
/// std::panic::set_hook(Box::new(|_| {}));
/// let outcome = safely(|x: &i32| Ok::<_, ErrorInfo>(100 / x))(&0);
/// std::panic::set_hook(previous);
/// assert_eq!(outcome.unwrap_err().origin(), Origin::Panicked);
/// # }
/// ```
pub fn safely<T, R, E, F>(mut fun: F) -> impl FnMut(&T) -> Result<R, ErrorInfo>
where
    T: ?Sized,
    F: FnMut(&T) -> Result<R, E>,
    E: Into<ErrorInfo>,
{
    move |input: &T| {
        let outcome = guarded(|| fun(input));
        if let Err(info) = &outcome {
            tracing::debug!(error = %info, origin = ?info.origin(), "captured failure");
        }
        outcome
    }
}

/// Wraps `fun` so that a failure returns `default` instead.
///
/// Whether a failure happened is not observable afterwards;
/// only use this when `default` cannot be confused with a real result.
/// Captured panics still reach the panic hook, as described for [`safely`].
///
/// ```rust
/// use functionals::{possibly, Mappable};
/// let words = vec!["1", "two", "3"];
/// let parsed = words.map(possibly(|w: &&str| w.parse::<i32>(), -1));
/// assert_eq!(parsed, vec![1, -1, 3]);
/// ```
pub fn possibly<T, R, E, F>(fun: F, default: R) -> impl FnMut(&T) -> R
where
    T: ?Sized,
    R: Clone,
    F: FnMut(&T) -> Result<R, E>,
    E: Into<ErrorInfo>,
{
    let mut safe = safely(fun);
    move |input: &T| safe(input).unwrap_or_else(|_| default.clone())
}

#[cfg(feature = "unwind")]
fn guarded<R, E: Into<ErrorInfo>>(call: impl FnOnce() -> Result<R, E>) -> Result<R, ErrorInfo> {
    // The wrapped function runs at most once per call and is never observed mid-panic.
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(call)) {
        Ok(result) => result.map_err(Into::into),
        Err(payload) => Err(ErrorInfo::from_panic(payload)),
    }
}

#[cfg(not(feature = "unwind"))]
fn guarded<R, E: Into<ErrorInfo>>(call: impl FnOnce() -> Result<R, E>) -> Result<R, ErrorInfo> {
    call().map_err(Into::into)
}

/// The outcome of mapping a [`safely`]-wrapped function, split by success.
///
/// Each entry keeps the index of the element it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Partitioned<R, E = ErrorInfo> {
    pub successes: Vec<(usize, R)>,
    pub failures: Vec<(usize, E)>,
}

impl<R, E> Partitioned<R, E> {
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }

    /// Just the successful values, in order.
    pub fn values(self) -> Vec<R> {
        self.successes.into_iter().map(|(_, value)| value).collect()
    }
}

/// Splits results into successes and failures, preserving order within each.
///
/// ```rust
/// use functionals::{partition_results, safely, Mappable};
/// let words = vec!["1", "two", "3"];
/// let parts = partition_results(words.map(safely(|w: &&str| w.parse::<i32>())));
/// assert_eq!(parts.successes, vec![(0, 1), (2, 3)]);
/// assert_eq!(parts.failures[0].0, 1);
/// ```
pub fn partition_results<R, E>(results: impl IntoIterator<Item = Result<R, E>>) -> Partitioned<R, E> {
    let mut successes = Vec::new();
    let mut failures = Vec::new();
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(value) => successes.push((index, value)),
            Err(error) => failures.push((index, error)),
        }
    }
    Partitioned {
        successes,
        failures,
    }
}

/// Counts the calls made through the functions it wraps.
///
/// Every `every` calls, a progress event is emitted at `info` level.
/// The count lives in the `Tally` itself rather than in a global,
/// so it can be inspected (or reset) once the mapping is done.
///
/// ```rust
/// use core::num::NonZeroUsize;
/// use functionals::{Mappable, Tally};
///
/// let mut tally = Tally::every(NonZeroUsize::new(2).unwrap());
/// let xs = vec![1, 2, 3, 4, 5];
/// let squares = xs.map(tally.wrap(|x: &i32| x * x));
/// assert_eq!(squares, vec![1, 4, 9, 16, 25]);
/// assert_eq!(tally.calls(), 5);
/// assert_eq!(tally.ticks(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    every: NonZeroUsize,
    calls: usize,
}

impl Tally {
    pub fn every(every: NonZeroUsize) -> Self {
        Tally { every, calls: 0 }
    }

    pub fn calls(&self) -> usize {
        self.calls
    }

    /// How many progress events have been emitted.
    pub fn ticks(&self) -> usize {
        self.calls / self.every.get()
    }

    pub fn reset(&mut self) {
        self.calls = 0;
    }

    /// Wraps `fun` so that every call through it is counted by this tally.
    pub fn wrap<'t, T, R, F>(&'t mut self, mut fun: F) -> impl FnMut(&T) -> R + 't
    where
        T: ?Sized + 't,
        R: 't,
        F: FnMut(&T) -> R + 't,
    {
        move |input: &T| {
            self.record();
            fun(input)
        }
    }

    fn record(&mut self) {
        self.calls += 1;
        if self.calls % self.every.get() == 0 {
            tracing::info!(calls = self.calls, ticks = self.ticks(), "progress");
        }
    }
}

static_assertions::assert_impl_all!(ErrorInfo: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functional::{Foldable, Mappable};
    use crate::value::Value;

    fn divide_ten(x: &Value) -> Result<f64, crate::value::KindError> {
        x.to::<f64>().map(|x| 10.0 / x)
    }

    #[test]
    fn safely_success_equals_direct_call() {
        let mut safe = safely(divide_ten);
        let input = Value::Int(4);
        assert_eq!(safe(&input), Ok(divide_ten(&input).unwrap()));
    }

    #[test]
    fn safely_captures_returned_errors() {
        let mut safe = safely(divide_ten);
        let err = safe(&Value::from("a")).unwrap_err();
        assert_eq!(err.origin(), Origin::Returned);
        assert_eq!(err.message(), "expected float, found str");
        assert_eq!(err.type_name(), Some("KindError"));
        assert!(err.downcast_ref::<crate::value::KindError>().is_some());
    }

    #[cfg(feature = "unwind")]
    #[test]
    fn safely_captures_panics() {
        let mut safe = safely(|x: &i32| Ok::<_, ErrorInfo>(100 / x));
        assert_eq!(safe(&5), Ok(20));
        let err = safe(&0).unwrap_err();
        assert_eq!(err.origin(), Origin::Panicked);
        assert!(err.message().contains("divide by zero"));
        assert!(err.cause().is_none());
    }

    #[test]
    fn mixed_sequence_keeps_order_and_continues() {
        let xs = vec![Value::from(1), Value::from("a"), Value::from(3)];
        let out = xs.map(safely(divide_ten));
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], Ok(10.0));
        assert!(out[1].is_err());
        let third = out[2].clone().unwrap();
        assert!((third - 10.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn safely_is_deterministic() {
        let xs = vec![Value::from(2), Value::Null, Value::from(0.5)];
        let first = xs.map(safely(divide_ten));
        let second = xs.map(safely(divide_ten));
        assert_eq!(first, second);
    }

    #[test]
    fn side_effects_are_not_rolled_back() {
        let mut log = Vec::new();
        let mut safe = safely(|x: &i32| {
            log.push(*x);
            if *x < 0 {
                Err(ErrorInfo::msg("negative"))
            } else {
                Ok(*x)
            }
        });
        assert!(safe(&-1).is_err());
        assert_eq!(safe(&2), Ok(2));
        drop(safe);
        assert_eq!(log, vec![-1, 2]);
    }

    #[test]
    fn possibly_substitutes_default() {
        let mut maybe = possibly(divide_ten, -1.0);
        assert_eq!(maybe(&Value::from("a")), -1.0);
        assert_eq!(maybe(&Value::from(5)), 2.0);
    }

    #[test]
    fn safely_composes_with_reduce() {
        let xs = vec![Value::from(1), Value::Bool(true), Value::from(4)];
        let total = xs
            .map(possibly(divide_ten, 0.0))
            .reduce(Some(0.0), |acc, x| acc + x);
        assert_eq!(total, Ok(12.5));
    }

    #[test]
    fn partition_preserves_indices() {
        let xs = vec![Value::Null, Value::from(5), Value::from("x"), Value::from(10)];
        let parts = partition_results(xs.map(safely(divide_ten)));
        assert!(!parts.all_succeeded());
        assert_eq!(parts.failures.iter().map(|(i, _)| *i).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(parts.values(), vec![2.0, 1.0]);
    }

    #[test]
    fn tally_counts_every_call() {
        let mut tally = Tally::every(NonZeroUsize::new(3).unwrap());
        let xs = vec![1, 2, 3, 4, 5, 6, 7];
        let out = xs.map(tally.wrap(|x: &i32| x + 1));
        assert_eq!(out, vec![2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(tally.calls(), 7);
        assert_eq!(tally.ticks(), 2);

        // The same tally keeps counting across calls until reset.
        let _ = xs.map(tally.wrap(|x: &i32| *x));
        assert_eq!(tally.calls(), 14);
        tally.reset();
        assert_eq!(tally.calls(), 0);
    }

    #[test]
    fn tally_wraps_safely() {
        let mut tally = Tally::every(NonZeroUsize::new(1).unwrap());
        let xs = vec![Value::from(1), Value::Null];
        let out = xs.map(tally.wrap(safely(divide_ten)));
        assert!(out[1].is_err());
        assert_eq!(tally.ticks(), 2);
    }
}
