//! Maximum-spacing k-clustering trait.

use numr::error::Result;
use numr::runtime::Runtime;

use super::types::{GraphData, KClusteringResult};

/// Single-linkage clustering of a weighted graph into a fixed number of groups.
///
/// Runs Kruskal until exactly `k` components remain. The components are the
/// clusters; the spacing is the lightest edge still joining two of them, which
/// is the largest spacing any `k`-partition can achieve.
pub trait KClusteringAlgorithms<R: Runtime> {
    /// Partition the nodes into `k` clusters of maximum spacing.
    ///
    /// # Errors
    /// - Graph is directed.
    /// - `k == 0` or `k > num_nodes`.
    /// - The graph has more than `k` connected components.
    fn k_clustering(&self, graph: &GraphData<R>, k: usize) -> Result<KClusteringResult<R>>;

    /// Spacing of the best `k`-clustering.
    ///
    /// # Errors
    /// Same as [`k_clustering`](Self::k_clustering), and additionally when no
    /// edge joins two clusters (the graph has exactly `k` components).
    fn max_spacing(&self, graph: &GraphData<R>, k: usize) -> Result<f64>;
}
