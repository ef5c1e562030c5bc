//! Mapping where element types are declared, and checked, at runtime.
//!
//! [`map_typed`] checks the *input* side: every [`Value`] must convert to the declared
//! input type before the function runs even once.
//!
//! The `map_lgl`/`map_int`/`map_dbl`/`map_chr` family checks the *output* side:
//! the function produces [`Value`]s, and each one must be of the declared kind.
//! As output kinds are only known once produced, these stop at the first offending output.

use concat_idents::concat_idents;

use crate::error::{Error, Result};
use crate::functional::{Foldable, Mappable};
use crate::value::{FromValue, Value};

/// Converts every element to `T`, or reports the first one that does not fit.
pub fn check_all<T: FromValue>(values: &[Value]) -> Result<Vec<T>> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            tracing::trace!(index, found = %value.kind(), expected = %T::KIND, "checking element type");
            value
                .to::<T>()
                .map_err(|source| Error::TypeMismatch { index, source })
        })
        .collect()
}

/// Maps `fun` over `values`, declaring `T` as the input type.
///
/// The whole sequence is type-checked first, so a mismatch anywhere means
/// `fun` is never called.
///
/// ```rust
/// use functionals::{map_typed, Error, Value};
/// let ok = map_typed(&[Value::from(1), Value::from(2)], |x: &i64| x * 10);
/// assert_eq!(ok, Ok(vec![10, 20]));
///
/// let mixed = map_typed(&[Value::from(1), Value::from("a")], |x: &i64| x * 10);
/// assert!(matches!(mixed, Err(Error::TypeMismatch { index: 1, .. })));
/// ```
pub fn map_typed<T: FromValue, U>(values: &[Value], fun: impl FnMut(&T) -> U) -> Result<Vec<U>> {
    let typed = check_all::<T>(values)?;
    Ok(Mappable::map(&typed, fun))
}

/// Fallible [`map_typed`]: type-checks everything up front, then fails fast on the function's errors.
pub fn try_map_typed<T: FromValue, U, E>(
    values: &[Value],
    fun: impl FnMut(&T) -> core::result::Result<U, E>,
) -> Result<Vec<U>, E> {
    let typed = check_all::<T>(values).map_err(Error::widen)?;
    typed.try_map(fun)
}

/// Maps `fun` over `seq`, requiring every output to convert to `R`.
pub fn map_as<S, R>(seq: &S, mut fun: impl FnMut(&S::Elem) -> Value) -> Result<Vec<R>>
where
    S: Foldable,
    R: FromValue,
{
    seq.elems()
        .enumerate()
        .map(|(index, elem)| {
            fun(elem)
                .to::<R>()
                .map_err(|source| Error::TypeMismatch { index, source })
        })
        .collect()
}

macro_rules! typed_mappers {
    ($($suffix:ident => $ty:ty),* $(,)?) => {
        $(
            concat_idents!(fn_name = map_, $suffix {
                #[doc = concat!("Maps `fun` over `seq`, requiring every output to be a `", stringify!($ty), "`.")]
                #[doc = ""]
                #[doc = "See [`map_as`]."]
                pub fn fn_name<S: Foldable>(seq: &S, fun: impl FnMut(&S::Elem) -> Value) -> Result<Vec<$ty>> {
                    map_as::<S, $ty>(seq, fun)
                }
            });
        )*
    };
}

typed_mappers!(lgl => bool, int => i64, dbl => f64, chr => String);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{KindError, ValueKind};

    #[test]
    fn map_typed_rejects_before_calling() {
        let values = vec![Value::from(1), Value::from(2), Value::from("three")];
        let mut calls = 0;
        let res = map_typed(&values, |x: &i64| {
            calls += 1;
            x + 1
        });
        assert_eq!(
            res,
            Err(Error::TypeMismatch {
                index: 2,
                source: KindError {
                    expected: ValueKind::Int,
                    found: ValueKind::Str
                }
            })
        );
        assert_eq!(calls, 0);
    }

    #[test]
    fn map_typed_widens_ints() {
        let values = vec![Value::from(1), Value::from(2.5)];
        assert_eq!(map_typed(&values, |x: &f64| x * 2.0), Ok(vec![2.0, 5.0]));
    }

    #[test]
    fn try_map_typed_failure_index() {
        let values = vec![Value::from(4), Value::from(0), Value::from(2)];
        let res = try_map_typed(&values, |x: &i64| 8_i64.checked_div(*x).ok_or("division by zero"));
        assert_eq!(
            res,
            Err(Error::ElementFailure {
                index: 1,
                source: "division by zero"
            })
        );
    }

    #[test]
    fn output_specialized_mappers() {
        let xs = vec![1, 2, 3];
        assert_eq!(map_dbl(&xs, |x| Value::from(*x)), Ok(vec![1.0, 2.0, 3.0]));
        assert_eq!(map_int(&xs, |x| Value::from(i64::from(x * x))), Ok(vec![1, 4, 9]));
        assert_eq!(map_lgl(&xs, |x| Value::from(x % 2 == 1)), Ok(vec![true, false, true]));
        assert_eq!(
            map_chr(&xs, |x| Value::from(x.to_string())),
            Ok(vec!["1".to_owned(), "2".to_owned(), "3".to_owned()])
        );
    }

    #[test]
    fn output_mismatch_stops_mapping() {
        let xs = vec![1, 2, 3];
        let mut calls = 0;
        let res = map_int(&xs, |x| {
            calls += 1;
            if *x == 2 {
                Value::from(2.5)
            } else {
                Value::from(*x)
            }
        });
        assert_eq!(res.unwrap_err().index(), Some(1));
        assert_eq!(calls, 2);
    }
}
