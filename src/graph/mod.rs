//! Graph clustering by partial Kruskal.
//!
//! This module provides:
//! - An arena-backed undirected graph ([`Graph`], [`Edge`], [`Vertex`])
//! - Union-find with path compression and union by size ([`DisjointSet`])
//! - Maximum-spacing k-clustering ([`compute_k_clustering`], [`KClustering`])
//! - Minimum spanning forest (Kruskal)
//! - Runtime-generic tensor front ends over CSR graphs
//!   ([`KClusteringAlgorithms`], [`MSTAlgorithms`])

pub mod container;
mod cpu;
pub mod disjoint_set;
pub mod error;
pub mod impl_generic;
pub mod kruskal;
pub mod traits;

pub use container::{Edge, Graph, Vertex};
pub use disjoint_set::DisjointSet;
pub use error::{ClusteringError, ClusteringResult};
pub use kruskal::{
    KClustering, PartialForest, compute_k_clustering, minimum_spanning_forest, partial_kruskal,
};
pub use traits::*;
