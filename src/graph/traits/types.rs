//! Tensor-side graph data and clustering result structures.

use numr::error::{Error, Result};
use numr::runtime::Runtime;
use numr::sparse::SparseTensor;
use numr::tensor::Tensor;

/// Graph stored as a CSR sparse adjacency matrix.
///
/// Weights are the matrix values. Undirected graphs store every edge in both
/// directions.
///
/// ```ignore
/// use kspacing::graph::GraphData;
///
/// let graph = GraphData::from_edge_list(&[0, 1], &[1, 2], Some(&[1.0, 2.0]), 3, false, &device)?;
/// ```
#[derive(Debug, Clone)]
pub struct GraphData<R: Runtime> {
    /// CSR sparse adjacency matrix [n, n], weights as values
    pub adjacency: SparseTensor<R>,
    /// Number of nodes in the graph
    pub num_nodes: usize,
    /// Whether the graph is directed
    pub directed: bool,
}

impl<R: Runtime> GraphData<R> {
    /// Wrap an existing sparse adjacency matrix.
    pub fn new(adjacency: SparseTensor<R>, directed: bool) -> Self {
        let num_nodes = adjacency.nrows();
        Self {
            adjacency,
            num_nodes,
            directed,
        }
    }

    /// Create a graph from parallel `sources` / `targets` / `weights` slices.
    ///
    /// Missing weights default to one. Undirected edges are mirrored so the
    /// adjacency matrix is symmetric.
    pub fn from_edge_list<T: numr::dtype::Element>(
        sources: &[i64],
        targets: &[i64],
        weights: Option<&[T]>,
        num_nodes: usize,
        directed: bool,
        device: &R::Device,
    ) -> Result<Self> {
        let weights_len = weights.map_or(sources.len(), |w| w.len());
        if sources.len() != targets.len() || weights_len != sources.len() {
            return Err(Error::InvalidArgument {
                arg: "sources",
                reason: format!(
                    "edge list slices differ in length: {} sources, {} targets, {} weights",
                    sources.len(),
                    targets.len(),
                    weights_len
                ),
            });
        }
        for (&s, &t) in sources.iter().zip(targets) {
            validate_node(s, num_nodes, "source")?;
            validate_node(t, num_nodes, "target")?;
        }

        let weight_at = |i: usize| weights.map_or_else(T::one, |w| w[i]);
        let copies = if directed { 1 } else { 2 };
        let mut rows = Vec::with_capacity(sources.len() * copies);
        let mut cols = Vec::with_capacity(sources.len() * copies);
        let mut vals = Vec::with_capacity(sources.len() * copies);

        for (i, (&s, &t)) in sources.iter().zip(targets).enumerate() {
            rows.push(s);
            cols.push(t);
            vals.push(weight_at(i));
            if !directed {
                rows.push(t);
                cols.push(s);
                vals.push(weight_at(i));
            }
        }

        let adjacency =
            SparseTensor::<R>::from_coo_slices(&rows, &cols, &vals, [num_nodes, num_nodes], device)?
                .to_csr()?;
        Ok(Self::new(adjacency, directed))
    }
}

/// Validate that a node index is within `0..num_nodes`.
fn validate_node(node: i64, num_nodes: usize, name: &str) -> Result<()> {
    if node < 0 || node as usize >= num_nodes {
        return Err(Error::InvalidArgument {
            arg: "node",
            reason: format!("{name} node {node} out of range for num_nodes {num_nodes}"),
        });
    }
    Ok(())
}

/// Result of minimum spanning tree algorithms.
#[derive(Debug, Clone)]
pub struct MSTResult<R: Runtime> {
    /// Edge sources in the MST [num_mst_edges].
    pub sources: Tensor<R>,
    /// Edge targets in the MST [num_mst_edges].
    pub targets: Tensor<R>,
    /// Edge weights in the MST [num_mst_edges].
    pub weights: Tensor<R>,
    /// Total weight of the MST.
    pub total_weight: f64,
}

/// Result of maximum-spacing k-clustering.
#[derive(Debug, Clone)]
pub struct KClusteringResult<R: Runtime> {
    /// Forest edge sources [n - k], I64.
    pub sources: Tensor<R>,
    /// Forest edge targets [n - k], I64.
    pub targets: Tensor<R>,
    /// Forest edge weights [n - k], F64.
    pub weights: Tensor<R>,
    /// Cluster label per node [n], I64. Smallest node index in the cluster.
    pub labels: Tensor<R>,
    /// Total weight of the forest.
    pub total_weight: f64,
    /// Weight of the cheapest edge joining two clusters.
    /// `None` when the clusters are exactly the connected components.
    pub threshold: Option<f64>,
    /// Number of clusters (always the requested `k`).
    pub num_clusters: usize,
}
