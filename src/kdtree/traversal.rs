//! Utilities to traverse the KDTree structure.

use crate::r#type::KDPoint;

/// A node in the KDTree.
///
/// Every node holds exactly one item. Items in the left subtree have a coordinate on
/// [`axis`][Node::axis] less than or equal to this node's, items in the right subtree greater
/// than or equal to it.
#[derive(Debug, Clone)]
pub struct Node<P> {
    pub(crate) item: P,

    /// Position of the item in the sequence the tree was built from.
    pub(crate) index: usize,

    /// The axis that the children of this node are split over: `depth % dimension`.
    pub(crate) axis: usize,

    pub(crate) left: Option<Box<Node<P>>>,
    pub(crate) right: Option<Box<Node<P>>>,
}

impl<P: KDPoint> Node<P> {
    /// The item stored at this node.
    #[inline]
    pub fn item(&self) -> &P {
        &self.item
    }

    /// The insertion index of the item stored at this node.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The coordinate axis this node splits its children on.
    #[inline]
    pub fn axis(&self) -> usize {
        self.axis
    }

    /// The coordinate of this node's item on its splitting axis.
    #[inline]
    pub fn split_value(&self) -> P::N {
        self.item.coords()[self.axis]
    }

    /// The child node holding items on the low side of the split.
    pub fn left_child(&self) -> Option<&Node<P>> {
        self.left.as_deref()
    }

    /// The child node holding items on the high side of the split.
    pub fn right_child(&self) -> Option<&Node<P>> {
        self.right.as_deref()
    }

    /// Returns `true` if this is a leaf node without children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Returns `true` if this is an intermediate node with children.
    #[inline]
    pub fn is_parent(&self) -> bool {
        !self.is_leaf()
    }

    /// Number of levels in the subtree rooted at this node, counting this node.
    pub(crate) fn height(&self) -> usize {
        let left = self.left.as_ref().map_or(0, |node| node.height());
        let right = self.right.as_ref().map_or(0, |node| node.height());
        1 + left.max(right)
    }
}

/// Pre-order iterator over the nodes of a tree.
#[derive(Debug, Clone)]
pub struct Iter<'a, P> {
    stack: Vec<&'a Node<P>>,
}

impl<'a, P> Iter<'a, P> {
    pub(crate) fn new(root: &'a Node<P>) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a, P> Iterator for Iter<'a, P> {
    type Item = &'a Node<P>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Note: pushed in backwards order to what gets popped
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        Some(node)
    }
}
