//! Minimum spanning forest via Kruskal's algorithm (undirected graphs).
//!
//! Implemented sequentially at API boundary on top of the partial Kruskal
//! engine.

use numr::error::Result;
use numr::runtime::{Runtime, RuntimeClient};

use crate::graph::traits::types::{GraphData, MSTResult};

use super::helpers::{forest_tensors, graph_device, graph_from_csr, require_undirected};

/// Kruskal's minimum spanning forest.
///
/// Time: O(E log E) for sorting + O(E α(V)) for union-find.
pub fn kruskal_impl<R, C>(_client: &C, graph: &GraphData<R>) -> Result<MSTResult<R>>
where
    R: Runtime,
    C: RuntimeClient<R>,
{
    require_undirected(graph, "Kruskal's MST")?;

    let device = graph_device(graph)?;
    let mut edge_graph = graph_from_csr(graph)?;
    let forest = edge_graph.minimum_spanning_forest()?;

    let total_weight = forest.iter().map(|e| e.weight).sum();
    let (sources, targets, weights) = forest_tensors::<R>(&forest, &device);

    Ok(MSTResult {
        sources,
        targets,
        weights,
        total_weight,
    })
}
