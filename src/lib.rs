//! kspacing - Maximum-spacing k-clustering of weighted graphs
//!
//! kspacing partitions the vertices of a weighted undirected graph into exactly
//! `k` clusters so that the lightest edge between two different clusters is as
//! heavy as possible. It runs Kruskal's algorithm until `k` components remain;
//! the next edge Kruskal would have taken gives the spacing.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │           KClusteringAlgorithms / MSTAlgorithms          │
//! │        (runtime-generic, CSR GraphData -> tensors)       │
//! └──────────────────────────┬──────────────────────────────┘
//!                            │ uses
//! ┌──────────────────────────▼──────────────────────────────┐
//! │     Graph  ─►  partial Kruskal  ─►  DisjointSet          │
//! │          (in-memory core, dense vertex indices)          │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use kspacing::graph::Graph;
//!
//! let mut graph = Graph::new(4, 4);
//! graph.add_edge(0, 1, 1);
//! graph.add_edge(1, 2, 2);
//! graph.add_edge(2, 3, 3);
//! graph.add_edge(0, 3, 10);
//!
//! let clustering = graph.compute_k_clustering(2).unwrap();
//! assert_eq!(clustering.forest().len(), 2);
//! assert_eq!(clustering.spacing().unwrap(), 3);
//! ```
//!
//! The tensor front end works with any numr runtime client:
//!
//! ```ignore
//! use kspacing::graph::{GraphData, KClusteringAlgorithms};
//! use numr::runtime::cpu::{CpuClient, CpuDevice};
//!
//! let device = CpuDevice::new();
//! let client = CpuClient::new(device.clone());
//! let graph = GraphData::from_edge_list(&sources, &targets, Some(&weights), n, false, &device)?;
//! let spacing = client.max_spacing(&graph, 2)?;
//! ```

pub mod graph;

pub use graph::{
    ClusteringError, ClusteringResult, DisjointSet, Edge, Graph, KClustering,
    KClusteringAlgorithms, MSTAlgorithms, compute_k_clustering,
};

// Re-export numr types that users will commonly need
pub use numr::error::{Error, Result};
pub use numr::runtime::{Runtime, RuntimeClient};
pub use numr::tensor::Tensor;
