//! Maximum-spacing k-clustering on CSR graphs.

use numr::error::Result;
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

use crate::graph::error::ClusteringError;
use crate::graph::traits::types::{GraphData, KClusteringResult};

use super::helpers::{forest_tensors, graph_device, graph_from_csr, require_undirected};

/// Partial Kruskal down to `k` clusters.
///
/// Time: O(E log E) for sorting + O(E α(V)) for union-find.
pub fn k_clustering_impl<R, C>(
    _client: &C,
    graph: &GraphData<R>,
    k: usize,
) -> Result<KClusteringResult<R>>
where
    R: Runtime,
    C: RuntimeClient<R>,
{
    require_undirected(graph, "k-clustering")?;

    let device = graph_device(graph)?;
    let mut edge_graph = graph_from_csr(graph)?;
    let clustering = edge_graph.compute_k_clustering(k)?;

    let labels: Vec<i64> = clustering.labels().iter().map(|&l| l as i64).collect();
    let (sources, targets, weights) = forest_tensors::<R>(clustering.forest(), &device);

    Ok(KClusteringResult {
        sources,
        targets,
        weights,
        labels: Tensor::<R>::from_slice(&labels, &[labels.len()], &device),
        total_weight: clustering.total_weight(),
        threshold: clustering.threshold(),
        num_clusters: clustering.num_clusters(),
    })
}

/// Spacing of the best `k`-clustering.
pub fn max_spacing_impl<R, C>(client: &C, graph: &GraphData<R>, k: usize) -> Result<f64>
where
    R: Runtime,
    C: RuntimeClient<R>,
{
    let result = k_clustering_impl(client, graph, k)?;
    let spacing = result.threshold.ok_or(ClusteringError::NoCrossingEdge {
        clusters: result.num_clusters,
    })?;
    Ok(spacing)
}
