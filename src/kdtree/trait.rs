use geo_traits::CoordTrait;
use num_traits::{Float, Zero};

use crate::distance::euclidean;
use crate::error::{InvalidArgument, Result};
use crate::kdtree::neighbors::{BoundedMaxHeap, Neighbor};
use crate::kdtree::traversal::{Iter, Node};
use crate::kdtree::KDTree;
use crate::r#type::{IndexableFloat, KDPoint};

/// A trait for searching and accessing data out of a KDTree.
///
/// Queries never mutate the tree and keep all per-query state on the stack, so a single tree
/// can be searched from many threads at once.
pub trait KDTreeIndex<P: KDPoint>: Sized {
    /// The root node of the tree.
    fn root(&self) -> &Node<P>;

    /// The number of coordinates of every point in this tree.
    fn dimension(&self) -> usize;

    /// The number of items in this KDTree
    fn num_items(&self) -> usize;

    /// Iterate over every node in pre-order.
    fn iter(&self) -> Iter<'_, P> {
        Iter::new(self.root())
    }

    /// Search the index for the `k` items closest to `target`.
    ///
    /// Returns at most `k` items ordered by ascending distance, then insertion index. When the
    /// tree holds fewer than `k` items, all of them are returned.
    ///
    /// Subtrees are pruned unless their splitting plane is strictly closer than the current
    /// k-th distance. When several items tie exactly at the k-th distance, the shape of the
    /// tree decides which of them are kept, so the survivor is not always the one with the
    /// lowest insertion index. The choice is the same for every build of the same input.
    ///
    /// ```
    /// use kd_index::kdtree::{KDTree, KDTreeIndex};
    ///
    /// let tree = KDTree::build(vec![[0., 0.], [3., 4.], [1., 1.]]).unwrap();
    /// let results = tree.k_nearest(&[0., 0.], 2).unwrap();
    /// assert_eq!(results, vec![&[0., 0.], &[1., 1.]]);
    /// ```
    fn k_nearest(&self, target: &[P::N], k: usize) -> Result<Vec<&P>> {
        let neighbors = self.k_nearest_with_distance(target, k)?;
        Ok(neighbors.into_iter().map(|n| n.item).collect())
    }

    /// Search the index for the `k` items closest to `target`, reporting each distance.
    fn k_nearest_with_distance(&self, target: &[P::N], k: usize) -> Result<Vec<Neighbor<'_, P>>> {
        validate_k(k)?;
        validate_target(target, self.dimension())?;

        let mut heap = BoundedMaxHeap::new(k.min(self.num_items()));
        nearest(self.root(), target, None, &mut heap);
        Ok(heap.into_sorted_vec())
    }

    /// Search for the `k` items closest to `target`, skipping the item inserted at `exclude`.
    ///
    /// This answers "the neighbors of a point already in the tree" without spending a result
    /// slot on the point itself.
    fn k_nearest_excluding(
        &self,
        target: &[P::N],
        k: usize,
        exclude: usize,
    ) -> Result<Vec<Neighbor<'_, P>>> {
        validate_k(k)?;
        validate_target(target, self.dimension())?;

        let mut heap = BoundedMaxHeap::new(k.min(self.num_items()));
        nearest(self.root(), target, Some(exclude), &mut heap);
        Ok(heap.into_sorted_vec())
    }

    /// Search the index for items within a given radius of `target`, inclusive.
    ///
    /// Items are returned by ascending distance, then insertion index.
    ///
    /// ```
    /// use kd_index::kdtree::{KDTree, KDTreeIndex};
    ///
    /// let tree = KDTree::build(vec![[1., 1.], [3., 4.], [0., 0.]]).unwrap();
    /// let results = tree.radius_search(&[0., 0.], 1.5).unwrap();
    /// assert_eq!(results, vec![&[0., 0.], &[1., 1.]]);
    /// ```
    fn radius_search(&self, target: &[P::N], r: P::N) -> Result<Vec<&P>> {
        let neighbors = self.radius_search_with_distance(target, r)?;
        Ok(neighbors.into_iter().map(|n| n.item).collect())
    }

    /// Search the index for items within a given radius of `target`, reporting each distance.
    fn radius_search_with_distance(
        &self,
        target: &[P::N],
        r: P::N,
    ) -> Result<Vec<Neighbor<'_, P>>> {
        validate_radius(r)?;
        validate_target(target, self.dimension())?;

        let mut result = vec![];
        within(self.root(), target, r, &mut result);
        result.sort_by(|a, b| a.cmp_by_distance(b));
        Ok(result)
    }

    /// Search a two-dimensional index for the `k` items closest to `coord`.
    fn k_nearest_coord(&self, coord: &impl CoordTrait<T = P::N>, k: usize) -> Result<Vec<&P>> {
        self.k_nearest(&[coord.x(), coord.y()], k)
    }

    /// Search a two-dimensional index for items within a given radius of `coord`.
    fn radius_search_coord(&self, coord: &impl CoordTrait<T = P::N>, r: P::N) -> Result<Vec<&P>> {
        self.radius_search(&[coord.x(), coord.y()], r)
    }
}

impl<P: KDPoint> KDTreeIndex<P> for KDTree<P> {
    fn root(&self) -> &Node<P> {
        &self.root
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn num_items(&self) -> usize {
        self.num_items
    }
}

fn validate_k(k: usize) -> Result<()> {
    if k == 0 {
        return Err(InvalidArgument::ZeroNeighbors.into());
    }
    Ok(())
}

fn validate_radius<N: IndexableFloat>(r: N) -> Result<()> {
    if r.is_nan() {
        return Err(InvalidArgument::NaNRadius.into());
    }
    if r < N::zero() {
        return Err(InvalidArgument::NegativeRadius.into());
    }
    Ok(())
}

fn validate_target<N: IndexableFloat>(target: &[N], dimension: usize) -> Result<()> {
    if target.len() != dimension {
        return Err(InvalidArgument::DimensionMismatch {
            expected: dimension,
            found: target.len(),
        }
        .into());
    }
    if let Some(axis) = target.iter().position(|c| !c.is_finite()) {
        return Err(InvalidArgument::NonFiniteTarget { axis }.into());
    }
    Ok(())
}

/// Depth-first k-nearest-neighbor descent: near side first, far side only when the splitting
/// plane is closer than the worst surviving candidate.
fn nearest<'a, P: KDPoint>(
    node: &'a Node<P>,
    target: &[P::N],
    exclude: Option<usize>,
    heap: &mut BoundedMaxHeap<'a, P>,
) {
    if exclude != Some(node.index) {
        let distance = euclidean(node.item.coords(), target);
        heap.offer(Neighbor::new(node, distance));
    }

    let delta = target[node.axis] - node.split_value();
    let (near, far) = if delta <= P::N::zero() {
        (node.left.as_deref(), node.right.as_deref())
    } else {
        (node.right.as_deref(), node.left.as_deref())
    };

    if let Some(near) = near {
        nearest(near, target, exclude, heap);
    }
    if let Some(far) = far {
        if heap.admits(delta.abs()) {
            nearest(far, target, exclude, heap);
        }
    }
}

/// Depth-first radius descent: near side always, far side when the splitting plane lies within
/// `r`.
fn within<'a, P: KDPoint>(
    node: &'a Node<P>,
    target: &[P::N],
    r: P::N,
    result: &mut Vec<Neighbor<'a, P>>,
) {
    let distance = euclidean(node.item.coords(), target);
    if distance <= r {
        result.push(Neighbor::new(node, distance));
    }

    let delta = target[node.axis] - node.split_value();
    let (near, far) = if delta <= P::N::zero() {
        (node.left.as_deref(), node.right.as_deref())
    } else {
        (node.right.as_deref(), node.left.as_deref())
    };

    if let Some(near) = near {
        within(near, target, r, result);
    }
    if let Some(far) = far {
        if delta.abs() <= r {
            within(far, target, r, result);
        }
    }
}
