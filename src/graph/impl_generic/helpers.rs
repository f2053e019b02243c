//! Shared helpers for the tensor front end.

use numr::error::{Error, Result};
use numr::runtime::Runtime;
use numr::sparse::SparseTensor;
use numr::tensor::Tensor;

use crate::graph::container::{Edge, Graph};
use crate::graph::traits::types::GraphData;

pub type CsrArrays = (Vec<i64>, Vec<i64>, Vec<f64>, usize);

fn not_csr() -> Error {
    Error::InvalidArgument {
        arg: "graph",
        reason: "Graph adjacency must be in CSR format. Call to_csr() first.".to_string(),
    }
}

/// Extract CSR arrays from a GraphData as CPU vecs.
///
/// Returns (row_ptrs, col_indices, values, num_nodes).
pub fn extract_csr_arrays<R: Runtime>(graph: &GraphData<R>) -> Result<CsrArrays> {
    let csr = match &graph.adjacency {
        SparseTensor::Csr(csr) => csr,
        _ => return Err(not_csr()),
    };

    let row_ptrs: Vec<i64> = csr.row_ptrs().to_vec();
    let col_indices: Vec<i64> = csr.col_indices().to_vec();
    let values: Vec<f64> = csr.values().to_vec();
    let n = graph.num_nodes;

    Ok((row_ptrs, col_indices, values, n))
}

/// Device holding the graph's adjacency values.
pub fn graph_device<R: Runtime>(graph: &GraphData<R>) -> Result<R::Device> {
    match &graph.adjacency {
        SparseTensor::Csr(csr) => Ok(csr.values().device().clone()),
        _ => Err(not_csr()),
    }
}

/// Reject directed graphs for algorithms defined on undirected ones.
pub fn require_undirected<R: Runtime>(graph: &GraphData<R>, op: &'static str) -> Result<()> {
    if graph.directed {
        return Err(Error::InvalidArgument {
            arg: "graph",
            reason: format!("{op} only works on undirected graphs"),
        });
    }
    Ok(())
}

/// Build an edge-list [`Graph`] from a symmetric CSR adjacency.
///
/// Each undirected edge appears twice in the CSR; only the `u < v` copy is
/// kept. Self-loops never join two components and are dropped. Non-finite
/// weights are rejected.
pub fn graph_from_csr<R: Runtime>(graph: &GraphData<R>) -> Result<Graph<f64>> {
    let (row_ptrs, col_indices, values, n) = extract_csr_arrays(graph)?;

    let mut edges = Vec::new();
    for u in 0..n {
        let start = row_ptrs[u] as usize;
        let end = row_ptrs[u + 1] as usize;
        for i in start..end {
            let v = col_indices[i] as usize;
            if u < v {
                if !values[i].is_finite() {
                    return Err(Error::InvalidArgument {
                        arg: "graph",
                        reason: format!("edge ({u}, {v}) has non-finite weight {}", values[i]),
                    });
                }
                edges.push((u, v, values[i]));
            }
        }
    }

    Ok(Graph::from_edges(n, &edges))
}

/// Split forest edges into (sources, targets, weights) tensors.
pub fn forest_tensors<R: Runtime>(
    forest: &[Edge<f64>],
    device: &R::Device,
) -> (Tensor<R>, Tensor<R>, Tensor<R>) {
    let len = forest.len();
    let sources: Vec<i64> = forest.iter().map(|e| e.head as i64).collect();
    let targets: Vec<i64> = forest.iter().map(|e| e.tail as i64).collect();
    let weights: Vec<f64> = forest.iter().map(|e| e.weight).collect();

    (
        Tensor::<R>::from_slice(&sources, &[len], device),
        Tensor::<R>::from_slice(&targets, &[len], device),
        Tensor::<R>::from_slice(&weights, &[len], device),
    )
}
