use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KDIndexError {
    /// The tree could not be built from the provided points.
    #[error("Construction error: {0}")]
    Construction(#[from] ConstructionError),

    /// A query was called with arguments it cannot answer.
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
}

/// Reasons a [`KDTree`][crate::kdtree::KDTree] cannot be built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// No points were added before finishing the builder.
    #[error("cannot build a tree from an empty point sequence")]
    Empty,

    /// The first point has no coordinates at all.
    #[error("points must have at least one coordinate")]
    ZeroDimension,

    /// A point's dimension differs from the first point's.
    #[error("point {index} has {found} coordinates, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// A point has a NaN or infinite coordinate.
    #[error("point {index} has a non-finite coordinate on axis {axis}")]
    NonFiniteCoordinate { index: usize, axis: usize },
}

/// Reasons a query against a built tree is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("number of neighbors must be at least 1")]
    ZeroNeighbors,

    #[error("radius must not be negative")]
    NegativeRadius,

    #[error("radius must not be NaN")]
    NaNRadius,

    #[error("query has {found} coordinates, tree has dimension {expected}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("query has a non-finite coordinate on axis {axis}")]
    NonFiniteTarget { axis: usize },
}

pub type Result<T> = std::result::Result<T, KDIndexError>;
