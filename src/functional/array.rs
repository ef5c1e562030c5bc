//! Contains trait implementations for the functional traits
//! for GenericArray
//!
//! Since the length of a GenericArray is part of its type,
//! mapping can never change it, and sequences mapped together can never disagree on it.

use crate::common::Array;
use crate::error::Error;
use generic_array::sequence::GenericSequence;
use generic_array::ArrayLength;

use super::{Container, Foldable, Mappable, Mappable2, Mappable3};

unsafe impl<T, N> Container for Array<T, N>
where
    N: ArrayLength,
{
    type Elem = T;
    type Containing<X> = Array<X, N>;
}

impl<T, U, N> Mappable<U> for Array<T, N>
where
    N: ArrayLength,
{
    fn map(&self, mut fun: impl FnMut(&Self::Elem) -> U) -> Self::Containing<U> {
        Array::generate(|pos| {
            let val = &self[pos];
            fun(val)
        })
    }

    fn map_by_value(self, fun: impl FnMut(Self::Elem) -> U) -> Self::Containing<U> {
        self.into_iter().map(fun).collect()
    }

    fn try_map<E>(
        &self,
        mut fun: impl FnMut(&Self::Elem) -> Result<U, E>,
    ) -> crate::error::Result<Self::Containing<U>, E> {
        // GenericArray's FromIterator cannot stop early,
        // so the successes are gathered first and only then turned into an array.
        let mapped = self
            .iter()
            .enumerate()
            .map(|(index, elem)| fun(elem).map_err(|source| Error::element(index, source)))
            .collect::<Result<Vec<U>, _>>()?;
        let len = mapped.len();
        Array::try_from_iter(mapped).map_err(|_| Error::LengthMismatch {
            left: N::USIZE,
            right: len,
        })
    }
}

impl<A, U, N: ArrayLength> Mappable2<A, U> for Array<A, N> {
    fn map2<'b, B: 'b>(
        &self,
        rhs: &'b Self::Containing<B>,
        mut fun: impl FnMut(&A, &'b B) -> U,
    ) -> crate::error::Result<Self::Containing<U>> {
        Ok(Array::generate(|pos| {
            let left = &self[pos];
            let right = &rhs[pos];
            fun(left, right)
        }))
    }

    fn map2_by_value<B>(
        self,
        rhs: Self::Containing<B>,
        mut fun: impl FnMut(A, B) -> U,
    ) -> crate::error::Result<Self::Containing<U>> {
        Ok(self
            .into_iter()
            .zip(rhs)
            .map(|(left, right)| fun(left, right))
            .collect())
    }
}

impl<A, U, N: ArrayLength> Mappable3<A, U> for Array<A, N> {
    fn map3<B, C>(
        &self,
        second: &Self::Containing<B>,
        third: &Self::Containing<C>,
        mut fun: impl FnMut(&A, &B, &C) -> U,
    ) -> crate::error::Result<Self::Containing<U>> {
        Ok(Array::generate(|pos| {
            let one = &self[pos];
            let two = &second[pos];
            let three = &third[pos];
            fun(one, two, three)
        }))
    }

    fn map3_by_value<B, C>(
        self,
        second: Self::Containing<B>,
        third: Self::Containing<C>,
        mut fun: impl FnMut(A, B, C) -> U,
    ) -> crate::error::Result<Self::Containing<U>> {
        Ok(self
            .into_iter()
            .zip(second)
            .zip(third)
            .map(|((one, two), three)| fun(one, two, three))
            .collect())
    }
}

impl<T, N: ArrayLength> Foldable for Array<T, N> {
    fn elems(&self) -> impl Iterator<Item = &Self::Elem> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use generic_array::arr;
    use typenum::consts::*;

    static_assertions::assert_type_eq_all!(
        <Array<u8, U4> as Container>::Containing<String>,
        Array<String, U4>
    );

    #[test]
    fn map_keeps_static_length() {
        let v123: Array<i32, U3> = arr![1, 2, 3];
        assert_eq!(v123.map(|x| x + 1), arr![2, 3, 4]);
        assert_eq!(v123.map_by_value(|x| x * 2), arr![2, 4, 6]);
    }

    #[test]
    fn try_map_array() {
        let words: Array<&str, U3> = arr!["1", "x", "3"];
        let err = words.try_map(|w| w.parse::<i32>()).unwrap_err();
        assert_eq!(err.index(), Some(1));

        let words: Array<&str, U2> = arr!["7", "8"];
        assert_eq!(words.try_map(|w| w.parse::<i32>()), Ok(arr![7, 8]));

        let empty: Array<&str, U0> = arr![];
        assert_eq!(empty.try_map(|w| w.parse::<i32>()), Ok(arr![]));
    }

    #[test]
    fn binary_and_ternary() {
        let xs: Array<i32, U3> = arr![1, 2, 3];
        let ys: Array<i32, U3> = arr![10, 20, 30];
        assert_eq!(xs.map2(&ys, |x, y| x * y), Ok(arr![10, 40, 90]));
        assert_eq!(
            xs.map3_by_value(ys, arr![0, 0, 1], |x, y, z| x + y + z),
            Ok(arr![11, 22, 34])
        );
    }
}
