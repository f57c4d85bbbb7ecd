use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::kdtree::traversal::Node;
use crate::r#type::KDPoint;

/// An item returned from a query together with its distance to the query target.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor<'a, P: KDPoint> {
    /// The stored item.
    pub item: &'a P,
    /// Insertion index of the item.
    pub index: usize,
    /// Euclidean distance from the query target.
    pub distance: P::N,
}

impl<'a, P: KDPoint> Neighbor<'a, P> {
    pub(crate) fn new(node: &'a Node<P>, distance: P::N) -> Self {
        Self {
            item: &node.item,
            index: node.index,
            distance,
        }
    }

    /// Ordering by distance, then insertion index.
    pub(crate) fn cmp_by_distance(&self, other: &Self) -> Ordering {
        // Distances of finite coordinates are never NaN
        self.distance
            .partial_cmp(&other.distance)
            .unwrap_or(Ordering::Equal)
            .then(self.index.cmp(&other.index))
    }
}

/// A wrapper around a neighbor for use in the priority queue.
struct Candidate<'a, P: KDPoint>(Neighbor<'a, P>);

impl<P: KDPoint> PartialEq for Candidate<'_, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<P: KDPoint> Eq for Candidate<'_, P> {}

impl<P: KDPoint> Ord for Candidate<'_, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp_by_distance(&other.0)
    }
}

impl<P: KDPoint> PartialOrd for Candidate<'_, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A max-heap holding at most `capacity` of the closest neighbors offered so far.
///
/// The top of the heap is the worst surviving candidate, so eviction is `O(log k)`.
pub(crate) struct BoundedMaxHeap<'a, P: KDPoint> {
    capacity: usize,
    heap: BinaryHeap<Candidate<'a, P>>,
}

impl<'a, P: KDPoint> BoundedMaxHeap<'a, P> {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.heap.len() >= self.capacity
    }

    /// Distance of the worst surviving candidate.
    #[inline]
    pub(crate) fn worst_distance(&self) -> Option<P::N> {
        self.heap.peek().map(|candidate| candidate.0.distance)
    }

    /// Whether a subtree whose closest possible point lies `bound` away still needs a visit.
    #[inline]
    pub(crate) fn admits(&self, bound: P::N) -> bool {
        if !self.is_full() {
            return true;
        }
        self.worst_distance().map_or(true, |worst| bound < worst)
    }

    /// Insert `neighbor` if there is room or it beats the current worst candidate.
    pub(crate) fn offer(&mut self, neighbor: Neighbor<'a, P>) {
        let candidate = Candidate(neighbor);
        if !self.is_full() {
            self.heap.push(candidate);
            return;
        }
        if let Some(mut worst) = self.heap.peek_mut() {
            if candidate < *worst {
                *worst = candidate;
            }
        }
    }

    /// Consume the heap, returning candidates by ascending distance.
    pub(crate) fn into_sorted_vec(self) -> Vec<Neighbor<'a, P>> {
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|candidate| candidate.0)
            .collect()
    }
}
