//! Error types for graph clustering operations.

use std::fmt;

/// Result type for graph clustering operations.
pub type ClusteringResult<T> = Result<T, ClusteringError>;

/// Errors that can occur while computing a k-clustering.
#[derive(Debug, Clone, PartialEq)]
pub enum ClusteringError {
    /// Requested cluster count is outside `1..=num_vertices`.
    InvalidClusterCount { k: usize, num_vertices: usize },

    /// Clustering was requested before every edge slot was filled.
    IncompleteGraph { expected: usize, added: usize },

    /// The graph has more connected components than requested clusters,
    /// so no sequence of merges reaches exactly `requested` clusters.
    Unreachable { requested: usize, components: usize },

    /// No edge crosses two clusters once merging stopped.
    NoCrossingEdge { clusters: usize },

    /// Error from underlying numr operation.
    NumrError(String),
}

impl fmt::Display for ClusteringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidClusterCount { k, num_vertices } => {
                write!(
                    f,
                    "Invalid cluster count k={}: must satisfy 1 <= k <= {}",
                    k, num_vertices
                )
            }
            Self::IncompleteGraph { expected, added } => {
                write!(
                    f,
                    "Incomplete graph: {} of {} edge slots filled",
                    added, expected
                )
            }
            Self::Unreachable {
                requested,
                components,
            } => {
                write!(
                    f,
                    "Cannot form {} clusters: graph already has {} connected components",
                    requested, components
                )
            }
            Self::NoCrossingEdge { clusters } => {
                write!(
                    f,
                    "No edge crosses two of the {} clusters; spacing is undefined",
                    clusters
                )
            }
            Self::NumrError(msg) => {
                write!(f, "numr error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ClusteringError {}

impl From<numr::error::Error> for ClusteringError {
    fn from(err: numr::error::Error) -> Self {
        Self::NumrError(err.to_string())
    }
}

impl From<ClusteringError> for numr::error::Error {
    fn from(err: ClusteringError) -> Self {
        let arg = match &err {
            ClusteringError::InvalidClusterCount { .. }
            | ClusteringError::Unreachable { .. }
            | ClusteringError::NoCrossingEdge { .. } => "k",
            ClusteringError::IncompleteGraph { .. } | ClusteringError::NumrError(_) => "graph",
        };
        numr::error::Error::InvalidArgument {
            arg,
            reason: err.to_string(),
        }
    }
}
