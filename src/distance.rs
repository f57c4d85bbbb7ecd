//! The Euclidean metric shared by every query on the tree.

use crate::r#type::IndexableFloat;

/// Euclidean distance between two coordinate slices of equal length.
///
/// ```
/// use kd_index::euclidean;
///
/// assert_eq!(euclidean(&[0., 0.], &[3., 4.]), 5.);
/// ```
#[inline]
pub fn euclidean<N: IndexableFloat>(a: &[N], b: &[N]) -> N {
    sq_euclidean(a, b).sqrt()
}

/// Squared Euclidean distance between two coordinate slices of equal length.
#[inline]
pub fn sq_euclidean<N: IndexableFloat>(a: &[N], b: &[N]) -> N {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).fold(N::zero(), |acc, (&x, &y)| {
        let d = x - y;
        acc + d * d
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pythagorean_triple() {
        assert_eq!(euclidean(&[0., 0.], &[3., 4.]), 5.);
        assert_eq!(sq_euclidean(&[0., 0.], &[3., 4.]), 25.);
    }

    #[test]
    fn zero_iff_identical() {
        let a = [1.5f32, -2., 7.];
        assert_eq!(euclidean(&a, &a), 0.);
        assert!(euclidean(&a, &[1.5, -2., 7.5]) > 0.);
    }

    #[test]
    fn symmetric() {
        let a = [0.25, 9., -3., 4.];
        let b = [-1., 2., 2., 8.];
        assert_eq!(euclidean(&a, &b), euclidean(&b, &a));
    }

    #[test]
    fn one_dimensional_is_absolute_difference() {
        assert_eq!(euclidean(&[-2.], &[5.]), 7.);
    }
}
