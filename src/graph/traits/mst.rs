//! Minimum spanning forest trait.

use numr::error::Result;
use numr::runtime::Runtime;

use super::types::{GraphData, MSTResult};

/// Minimum spanning tree algorithms.
///
/// Only meaningful for undirected graphs. Disconnected graphs yield a
/// spanning forest with one tree per connected component.
pub trait MSTAlgorithms<R: Runtime> {
    /// Compute the minimum spanning forest using Kruskal's algorithm.
    ///
    /// Sorts edges by weight and greedily adds edges that join two
    /// components (union-find with union by size). Sequential algorithm.
    ///
    /// # Complexity
    /// O(E log E) for sorting + O(E α(V)) for union-find.
    ///
    /// # Errors
    /// Returns error if the graph is directed.
    fn minimum_spanning_tree(&self, graph: &GraphData<R>) -> Result<MSTResult<R>>;
}
