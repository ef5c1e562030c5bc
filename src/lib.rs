//! Functionals: functions that take functions.
//!
//! This crate provides the three classic families:
//!
//! - Mapping ([`Mappable`], [`Mappable2`], [`Mappable3`]): apply a function element-wise,
//!   keeping length and order.
//! - Reducing ([`Foldable`]): fold a sequence into one value, or into the trace of every intermediate value.
//! - Adverbs ([`safely`], [`possibly`], [`Tally`]): wrap a function to change how it behaves,
//!   most importantly so that failures become data instead of aborting the whole map.
//!
//! Sequences are `Vec`s, `Option`s (zero or one element) and [`GenericArray`](generic_array::GenericArray)s,
//! whose length is part of their type.
//! For heterogeneous input, [`Value`] offers a small dynamically typed element.
//!
//! Every functional calls the supplied function once per element, strictly left to right, on the calling thread.
//!
//! ```rust
//! use functionals::{safely, Mappable, Value};
//!
//! let xs = vec![Value::from(1), Value::from("a"), Value::from(3)];
//! let out = xs.map(safely(|x: &Value| x.to::<f64>().map(|x| 10.0 / x)));
//!
//! assert_eq!(out[0], Ok(10.0));
//! assert!(out[1].is_err());
//! assert!((out[2].as_ref().unwrap() - 3.333).abs() < 0.001);
//! ```

pub mod adverb;
pub mod common;
pub mod error;
pub mod functional;
mod helper;
pub mod typed;
pub mod value;

#[doc(inline)]
pub use adverb::{partition_results, possibly, safely, ErrorInfo, Origin, Partitioned, Tally};
#[doc(inline)]
pub use error::{Error, Interrupted, Result};
pub use functional::{Container, FailurePolicy, Foldable, Mappable, Mappable2, Mappable3};
#[doc(inline)]
pub use typed::{map_as, map_chr, map_dbl, map_int, map_lgl, map_typed, try_map_typed};
pub use value::{FromValue, KindError, Value, ValueKind};

#[cfg(test)]
mod tests {
    use super::*;
    use common::Seq;
    use generic_array::arr;

    #[test]
    fn arrays_vecs_and_options_agree() {
        let arr: Seq<i32, 4> = arr![1, 2, 3, 4];
        let vec = vec![1, 2, 3, 4];
        let squares: Vec<i32> = arr.map(|x| x * x).into_iter().collect();
        assert_eq!(squares, vec.map(|x| x * x));
        assert_eq!(arr.reduce(None, |a, b| a + b), vec.reduce(None, |a, b| a + b));
        assert_eq!(arr.accumulate(Some(0), |a, b| a + b), vec.accumulate(Some(0), |a, b| a + b));
    }

    #[test]
    fn safe_map_then_reduce() {
        let words = vec!["3", "x", "4", "5"];
        let parsed = words.map(safely(|w: &&str| w.parse::<i64>()));
        let parts = partition_results(parsed);
        assert_eq!(parts.failures.len(), 1);
        let total = parts.values().reduce(Some(0), |a, b| a + b);
        assert_eq!(total, Ok(12));
    }

    #[test]
    fn unwrapped_failure_aborts_with_index() {
        let words = vec!["3", "x", "4"];
        let err = words.try_map(|w| w.parse::<i64>()).unwrap_err();
        assert_eq!(err.index(), Some(1));
        assert!(err.to_string().starts_with("function failed on element 1"));
    }
}
