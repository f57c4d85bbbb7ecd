//! An implementation of an immutable, balanced K-D Tree over points of any dimension.

#![warn(missing_docs)]

mod batch;
mod builder;
mod index;
mod neighbors;
mod r#trait;
mod traversal;

pub use builder::KDTreeBuilder;
pub use index::KDTree;
pub use neighbors::Neighbor;
pub use r#trait::KDTreeIndex;
pub use traversal::{Iter, Node};
