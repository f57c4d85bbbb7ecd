//! Independent queries over many targets.
//!
//! With the `rayon` feature the queries run in parallel against the shared tree.

#[cfg(feature = "rayon")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::error::Result;
use crate::kdtree::{KDTree, KDTreeIndex};
use crate::r#type::KDPoint;

impl<P: KDPoint + Sync> KDTree<P> {
    /// Run [`k_nearest`][KDTreeIndex::k_nearest] for every target.
    ///
    /// Results are in the order of `targets`. Fails if any single query fails.
    pub fn k_nearest_batch<T>(&self, targets: &[T], k: usize) -> Result<Vec<Vec<&P>>>
    where
        T: AsRef<[P::N]> + Sync,
    {
        #[cfg(feature = "rayon")]
        {
            targets
                .par_iter()
                .map(|target| self.k_nearest(target.as_ref(), k))
                .collect()
        }

        #[cfg(not(feature = "rayon"))]
        {
            targets
                .iter()
                .map(|target| self.k_nearest(target.as_ref(), k))
                .collect()
        }
    }

    /// Run [`radius_search`][KDTreeIndex::radius_search] for every target.
    ///
    /// Results are in the order of `targets`. Fails if any single query fails.
    pub fn radius_search_batch<T>(&self, targets: &[T], r: P::N) -> Result<Vec<Vec<&P>>>
    where
        T: AsRef<[P::N]> + Sync,
    {
        #[cfg(feature = "rayon")]
        {
            targets
                .par_iter()
                .map(|target| self.radius_search(target.as_ref(), r))
                .collect()
        }

        #[cfg(not(feature = "rayon"))]
        {
            targets
                .iter()
                .map(|target| self.radius_search(target.as_ref(), r))
                .collect()
        }
    }
}
