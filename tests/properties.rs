//! Property-based tests for the mapping and reducing contracts

use functionals::{possibly, safely, ErrorInfo, Foldable, Mappable};
use proptest::prelude::*;

fn checked_inverse(x: &i32) -> Result<f64, ErrorInfo> {
    if *x == 0 {
        Err(ErrorInfo::msg("zero has no inverse"))
    } else {
        Ok(1.0 / f64::from(*x))
    }
}

proptest! {
    #[test]
    fn map_preserves_length(xs in prop::collection::vec(any::<i32>(), 0..64)) {
        let mapped = xs.map(|x| i64::from(*x) * 2);
        prop_assert_eq!(mapped.len(), xs.len());
    }

    #[test]
    fn map_is_elementwise(xs in prop::collection::vec(any::<i16>(), 0..64)) {
        let f = |x: &i16| i32::from(*x) - 7;
        let mapped = xs.map(f);
        for (i, x) in xs.iter().enumerate() {
            prop_assert_eq!(mapped[i], f(x));
        }
    }

    #[test]
    fn map_visits_in_index_order(xs in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut visited = Vec::new();
        let _ = xs.imap(|i, _| visited.push(i));
        prop_assert_eq!(visited, (0..xs.len()).collect::<Vec<_>>());
    }

    #[test]
    fn try_map_fails_at_first_bad_index(xs in prop::collection::vec(-5i32..5, 1..64)) {
        let res = xs.try_map(checked_inverse);
        match xs.iter().position(|x| *x == 0) {
            Some(first_zero) => prop_assert_eq!(res.unwrap_err().index(), Some(first_zero)),
            None => prop_assert!(res.is_ok()),
        }
    }

    #[test]
    fn safe_map_never_aborts_and_is_repeatable(xs in prop::collection::vec(-5i32..5, 0..64)) {
        let first = xs.map(safely(checked_inverse));
        let second = xs.map(safely(checked_inverse));
        prop_assert_eq!(first.len(), xs.len());
        prop_assert_eq!(&first, &second);
        for (x, out) in xs.iter().zip(&first) {
            prop_assert_eq!(out.is_err(), *x == 0);
        }
    }

    #[test]
    fn possibly_matches_direct_call_on_success(xs in prop::collection::vec(-5i32..5, 0..64)) {
        let outs = xs.map(possibly(checked_inverse, -1.0));
        for (x, out) in xs.iter().zip(outs) {
            match checked_inverse(x) {
                Ok(direct) => prop_assert_eq!(out, direct),
                Err(_) => prop_assert_eq!(out, -1.0),
            }
        }
    }

    #[test]
    fn accumulate_agrees_with_prefix_reduce(xs in prop::collection::vec(-1000i64..1000, 0..32), init in -1000i64..1000) {
        let trace = xs.accumulate(Some(init), |acc, x| acc + x);
        prop_assert_eq!(trace.len(), xs.len() + 1);
        for n in 0..=xs.len() {
            let prefix = xs[..n].to_vec();
            prop_assert_eq!(prefix.reduce(Some(init), |acc, x| acc + x), Ok(trace[n]));
        }
        prop_assert_eq!(xs.reduce(Some(init), |acc, x| acc + x), Ok(*trace.last().unwrap()));
    }
}
