use generic_array::GenericArray;

/// A shorter alias for GenericArray
/// since we use it so prevalently in this crate.
pub type Array<T, N> = GenericArray<T, N>;

/// A fixed-length sequence whose length is given as a plain `usize` constant.
///
/// ```rust
/// use functionals::common::Seq;
/// use functionals::Mappable;
/// use generic_array::arr;
///
/// let xs: Seq<i32, 3> = arr![1, 2, 3];
/// let ys: Seq<i32, 3> = xs.map(|x| x * 10);
/// assert_eq!(ys, arr![10, 20, 30]);
/// ```
pub type Seq<T, const N: usize> = GenericArray<T, typenum::U<N>>;
