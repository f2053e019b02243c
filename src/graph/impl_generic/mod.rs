//! Runtime-generic implementations shared by all backends.

pub mod helpers;
pub mod k_clustering;
pub mod mst;

pub use k_clustering::{k_clustering_impl, max_spacing_impl};
pub use mst::kruskal_impl;
