#![doc = include_str!("../README.md")]

mod distance;
mod error;
pub mod kdtree;
mod r#type;

pub use distance::{euclidean, sq_euclidean};
pub use error::{ConstructionError, InvalidArgument, KDIndexError, Result};
pub use r#type::{Entry, IndexableFloat, KDPoint};
