//! Trait implementations for the functional traits
//! for Vec, the sequence whose length is only known at runtime.

use super::{check_lengths, Container, Foldable, Mappable, Mappable2, Mappable3};
use crate::error::Error;

unsafe impl<T> Container for Vec<T> {
    type Elem = T;
    type Containing<X> = Vec<X>;
}

impl<T, U> Mappable<U> for Vec<T> {
    fn map(&self, fun: impl FnMut(&Self::Elem) -> U) -> Self::Containing<U> {
        self.iter().map(fun).collect()
    }

    fn map_by_value(self, fun: impl FnMut(Self::Elem) -> U) -> Self::Containing<U> {
        self.into_iter().map(fun).collect()
    }

    fn try_map<E>(
        &self,
        mut fun: impl FnMut(&Self::Elem) -> Result<U, E>,
    ) -> crate::error::Result<Self::Containing<U>, E> {
        // Collecting into a Result stops pulling elements at the first Err.
        self.iter()
            .enumerate()
            .map(|(index, elem)| fun(elem).map_err(|source| Error::element(index, source)))
            .collect()
    }
}

impl<A, U> Mappable2<A, U> for Vec<A> {
    fn map2<'b, B: 'b>(
        &self,
        rhs: &'b Self::Containing<B>,
        mut fun: impl FnMut(&A, &'b B) -> U,
    ) -> crate::error::Result<Self::Containing<U>> {
        check_lengths(self.len(), rhs.len())?;
        Ok(self
            .iter()
            .zip(rhs)
            .map(|(left, right)| fun(left, right))
            .collect())
    }

    fn map2_by_value<B>(
        self,
        rhs: Self::Containing<B>,
        mut fun: impl FnMut(A, B) -> U,
    ) -> crate::error::Result<Self::Containing<U>> {
        check_lengths(self.len(), rhs.len())?;
        Ok(self
            .into_iter()
            .zip(rhs)
            .map(|(left, right)| fun(left, right))
            .collect())
    }
}

impl<A, U> Mappable3<A, U> for Vec<A> {
    fn map3<B, C>(
        &self,
        second: &Self::Containing<B>,
        third: &Self::Containing<C>,
        mut fun: impl FnMut(&A, &B, &C) -> U,
    ) -> crate::error::Result<Self::Containing<U>> {
        check_lengths(self.len(), second.len())?;
        check_lengths(self.len(), third.len())?;
        Ok(self
            .iter()
            .zip(second)
            .zip(third)
            .map(|((one, two), three)| fun(one, two, three))
            .collect())
    }

    fn map3_by_value<B, C>(
        self,
        second: Self::Containing<B>,
        third: Self::Containing<C>,
        mut fun: impl FnMut(A, B, C) -> U,
    ) -> crate::error::Result<Self::Containing<U>> {
        check_lengths(self.len(), second.len())?;
        check_lengths(self.len(), third.len())?;
        Ok(self
            .into_iter()
            .zip(second)
            .zip(third)
            .map(|((one, two), three)| fun(one, two, three))
            .collect())
    }
}

impl<T> Foldable for Vec<T> {
    fn elems(&self) -> impl Iterator<Item = &Self::Elem> {
        self.iter()
    }
}
