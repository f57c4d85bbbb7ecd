use std::fmt::Debug;

use num_traits::Float;

/// A trait for types that can be used for indexed coordinates.
///
/// This trait is sealed and cannot be implemented for external types. Only floating point
/// scalars are accepted so that Euclidean distances can be computed without conversion.
pub trait IndexableFloat: private::Sealed + Float + Debug + Send + Sync {}

impl IndexableFloat for f32 {}

impl IndexableFloat for f64 {}

/// A point that can be stored in a [`KDTree`][crate::kdtree::KDTree].
///
/// The tree only ever reads the coordinate slice. Everything else about the implementing type
/// is an opaque payload handed back unchanged from queries.
pub trait KDPoint {
    /// The scalar type of each coordinate.
    type N: IndexableFloat;

    /// The coordinates of this point. Every point in one tree must have the same length.
    fn coords(&self) -> &[Self::N];

    /// The number of coordinates of this point.
    fn dimension(&self) -> usize {
        self.coords().len()
    }
}

impl<N: IndexableFloat, const D: usize> KDPoint for [N; D] {
    type N = N;

    fn coords(&self) -> &[N] {
        self
    }
}

impl<N: IndexableFloat> KDPoint for Vec<N> {
    type N = N;

    fn coords(&self) -> &[N] {
        self
    }
}

impl<P: KDPoint + ?Sized> KDPoint for &P {
    type N = P::N;

    fn coords(&self) -> &[P::N] {
        (**self).coords()
    }
}

/// A coordinate vector paired with a caller-owned payload.
///
/// ```
/// use kd_index::kdtree::{KDTree, KDTreeIndex};
/// use kd_index::Entry;
///
/// let tree = KDTree::build(vec![
///     Entry::new([0., 0.], "A"),
///     Entry::new([3., 4.], "B"),
///     Entry::new([1., 1.], "C"),
/// ])
/// .unwrap();
///
/// let names: Vec<_> = tree
///     .k_nearest(&[0., 0.], 2)
///     .unwrap()
///     .into_iter()
///     .map(|entry| entry.payload)
///     .collect();
/// assert_eq!(names, vec!["A", "C"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<C, T> {
    /// The position of this entry.
    pub coords: C,
    /// The caller's identity for this entry.
    pub payload: T,
}

impl<C, T> Entry<C, T> {
    /// Pair coordinates with a payload.
    pub fn new(coords: C, payload: T) -> Self {
        Self { coords, payload }
    }
}

impl<C: KDPoint, T> KDPoint for Entry<C, T> {
    type N = C::N;

    fn coords(&self) -> &[C::N] {
        self.coords.coords()
    }
}

// https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod private {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
