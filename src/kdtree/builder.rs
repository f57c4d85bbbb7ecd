use std::cmp::Ordering;

use num_traits::Float;

use crate::error::{ConstructionError, Result};
use crate::kdtree::traversal::Node;
use crate::kdtree::KDTree;
use crate::r#type::KDPoint;

/// A builder to create a [`KDTree`].
///
/// Points are collected with [`add`][KDTreeBuilder::add] and the balanced tree is produced once
/// by [`finish`][KDTreeBuilder::finish]. The index returned from `add` is the insertion index
/// reported by queries.
#[derive(Debug, Clone)]
pub struct KDTreeBuilder<P: KDPoint> {
    items: Vec<P>,
}

impl<P: KDPoint> Default for KDTreeBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: KDPoint> KDTreeBuilder<P> {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create a new builder with room for `num_items` points.
    pub fn with_capacity(num_items: usize) -> Self {
        Self {
            items: Vec::with_capacity(num_items),
        }
    }

    /// Add a point to the index, returning its insertion index.
    pub fn add(&mut self, item: P) -> usize {
        let index = self.items.len();
        self.items.push(item);
        index
    }

    /// The number of points added so far.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no points have been added.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consume this builder, performing the median partition and generating a KDTree ready for
    /// queries.
    ///
    /// Fails if no points were added, if the points disagree on their dimension, or if any
    /// coordinate is NaN or infinite.
    pub fn finish(self) -> Result<KDTree<P>> {
        let dimension = validate(&self.items)?;
        let num_items = self.items.len();

        let items = self.items.into_iter().enumerate().collect();
        let root = build(items, 0, dimension).ok_or(ConstructionError::Empty)?;

        Ok(KDTree {
            root,
            dimension,
            num_items,
        })
    }
}

impl<P: KDPoint> Extend<P> for KDTreeBuilder<P> {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<P: KDPoint> FromIterator<P> for KDTreeBuilder<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// Check that the points share one non-zero dimension and have finite coordinates. Returns the
/// dimension.
fn validate<P: KDPoint>(items: &[P]) -> std::result::Result<usize, ConstructionError> {
    let first = items.first().ok_or(ConstructionError::Empty)?;
    let dimension = first.dimension();
    if dimension == 0 {
        return Err(ConstructionError::ZeroDimension);
    }

    for (index, item) in items.iter().enumerate() {
        let coords = item.coords();
        if coords.len() != dimension {
            return Err(ConstructionError::DimensionMismatch {
                index,
                expected: dimension,
                found: coords.len(),
            });
        }
        if let Some(axis) = coords.iter().position(|c| !c.is_finite()) {
            return Err(ConstructionError::NonFiniteCoordinate { index, axis });
        }
    }

    Ok(dimension)
}

/// Recursively build the subtree for `items` at `depth`.
///
/// Each level stable-sorts its slice on `depth % dimension` and takes the element at
/// `len / 2`, so duplicate coordinates keep their insertion order and the same input always
/// produces the same tree.
fn build<P: KDPoint>(
    mut items: Vec<(usize, P)>,
    depth: usize,
    dimension: usize,
) -> Option<Box<Node<P>>> {
    if items.is_empty() {
        return None;
    }

    let axis = depth % dimension;
    items.sort_by(|(_, a), (_, b)| compare_on_axis(a, b, axis));

    // middle index
    let m = items.len() >> 1;
    let right = items.split_off(m + 1);
    let (index, item) = items.pop()?;
    let left = items;

    Some(Box::new(Node {
        item,
        index,
        axis,
        left: build(left, depth + 1, dimension),
        right: build(right, depth + 1, dimension),
    }))
}

#[inline]
fn compare_on_axis<P: KDPoint>(a: &P, b: &P, axis: usize) -> Ordering {
    // Coordinates were checked to be finite before building
    a.coords()[axis]
        .partial_cmp(&b.coords()[axis])
        .unwrap_or(Ordering::Equal)
}
