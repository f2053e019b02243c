//! CPU implementations of graph algorithms.

mod k_clustering;
mod mst;
