use crate::error::Result;
use crate::kdtree::traversal::Node;
use crate::kdtree::KDTreeBuilder;
use crate::r#type::KDPoint;

/// An immutable, balanced KDTree over items of type `P`.
///
/// Usually this will be created via [`KDTree::build`] or a
/// [`KDTreeBuilder`][crate::kdtree::KDTreeBuilder]. A tree always holds at least one item; the
/// builder refuses to produce an empty one. Queries are provided by
/// [`KDTreeIndex`][crate::kdtree::KDTreeIndex].
#[derive(Debug, Clone)]
pub struct KDTree<P> {
    pub(crate) root: Box<Node<P>>,
    pub(crate) dimension: usize,
    pub(crate) num_items: usize,
}

impl<P: KDPoint> KDTree<P> {
    /// Build a tree from a sequence of items.
    ///
    /// Insertion indices follow the order of `items`.
    pub fn build<I: IntoIterator<Item = P>>(items: I) -> Result<Self> {
        items.into_iter().collect::<KDTreeBuilder<P>>().finish()
    }

    /// The number of items in this tree.
    pub fn len(&self) -> usize {
        self.num_items
    }

    /// Always `false`: a built tree holds at least one item.
    pub fn is_empty(&self) -> bool {
        self.num_items == 0
    }

    /// Number of levels from the root to the deepest leaf, counting both.
    pub fn depth(&self) -> usize {
        self.root.height()
    }

    /// Consume the tree, returning its items in insertion order.
    pub fn into_items(self) -> Vec<P> {
        let mut items = Vec::with_capacity(self.num_items);
        let mut stack = vec![self.root];
        while let Some(node) = stack.pop() {
            let Node {
                item,
                index,
                left,
                right,
                ..
            } = *node;
            items.push((index, item));
            stack.extend(left);
            stack.extend(right);
        }
        items.sort_by_key(|(index, _)| *index);
        items.into_iter().map(|(_, item)| item).collect()
    }
}
