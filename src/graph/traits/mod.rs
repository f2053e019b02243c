pub mod k_clustering;
pub mod mst;
pub mod types;

pub use k_clustering::KClusteringAlgorithms;
pub use mst::MSTAlgorithms;
pub use types::*;
