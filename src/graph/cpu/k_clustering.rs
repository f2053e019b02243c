//! CPU implementation of maximum-spacing k-clustering.

use crate::graph::impl_generic::{k_clustering_impl, max_spacing_impl};
use crate::graph::traits::k_clustering::KClusteringAlgorithms;
use crate::graph::traits::types::{GraphData, KClusteringResult};
use numr::error::Result;
use numr::runtime::cpu::{CpuClient, CpuRuntime};

impl KClusteringAlgorithms<CpuRuntime> for CpuClient {
    fn k_clustering(
        &self,
        graph: &GraphData<CpuRuntime>,
        k: usize,
    ) -> Result<KClusteringResult<CpuRuntime>> {
        k_clustering_impl(self, graph, k)
    }

    fn max_spacing(&self, graph: &GraphData<CpuRuntime>, k: usize) -> Result<f64> {
        max_spacing_impl(self, graph, k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numr::runtime::cpu::CpuDevice;

    fn setup() -> (CpuClient, CpuDevice) {
        let device = CpuDevice::new();
        let client = CpuClient::new(device.clone());
        (client, device)
    }

    fn square(device: &CpuDevice) -> GraphData<CpuRuntime> {
        // 0-1 (1), 1-2 (2), 2-3 (3), 0-3 (10)
        GraphData::from_edge_list::<f64>(
            &[0, 1, 2, 0],
            &[1, 2, 3, 3],
            Some(&[1.0, 2.0, 3.0, 10.0]),
            4,
            false,
            device,
        )
        .unwrap()
    }

    #[test]
    fn test_k_clustering_two_clusters() {
        let (client, device) = setup();
        let graph = square(&device);

        let result = client.k_clustering(&graph, 2).unwrap();
        assert_eq!(result.num_clusters, 2);
        assert_eq!(result.threshold, Some(3.0));
        assert!((result.total_weight - 3.0).abs() < 1e-10);
        assert_eq!(result.weights.to_vec::<f64>(), vec![1.0, 2.0]);
        assert_eq!(result.labels.to_vec::<i64>(), vec![0, 0, 0, 3]);
    }

    #[test]
    fn test_max_spacing() {
        let (client, device) = setup();
        let graph = square(&device);

        assert!((client.max_spacing(&graph, 2).unwrap() - 3.0).abs() < 1e-10);
        assert!((client.max_spacing(&graph, 4).unwrap() - 1.0).abs() < 1e-10);
        // One cluster leaves nothing to cross
        assert!(client.max_spacing(&graph, 1).is_err());
    }

    #[test]
    fn test_k_clustering_unreachable() {
        let (client, device) = setup();
        let graph =
            GraphData::from_edge_list::<f64>(&[0], &[1], None, 4, false, &device).unwrap();

        // Components {0,1}, {2}, {3}
        assert!(client.k_clustering(&graph, 2).is_err());
        let result = client.k_clustering(&graph, 3).unwrap();
        assert_eq!(result.threshold, None);
    }

    #[test]
    fn test_k_clustering_invalid_k() {
        let (client, device) = setup();
        let graph = square(&device);
        assert!(client.k_clustering(&graph, 0).is_err());
        assert!(client.k_clustering(&graph, 5).is_err());
    }

    #[test]
    fn test_k_clustering_rejects_nan_weight() {
        let (client, device) = setup();
        let graph = GraphData::from_edge_list::<f64>(
            &[0, 1, 2],
            &[1, 2, 3],
            Some(&[1.0, f64::NAN, 3.0]),
            4,
            false,
            &device,
        )
        .unwrap();

        assert!(client.k_clustering(&graph, 2).is_err());
        assert!(client.max_spacing(&graph, 2).is_err());
    }

    #[test]
    fn test_from_edge_list_weight_length_mismatch() {
        let (_client, device) = setup();
        let err = GraphData::<CpuRuntime>::from_edge_list::<f64>(
            &[0, 1],
            &[1, 2],
            Some(&[1.0]),
            3,
            false,
            &device,
        )
        .unwrap_err();
        assert!(err.to_string().contains("1 weights"));
    }

    #[test]
    fn test_from_edge_list_node_out_of_range() {
        let (_client, device) = setup();
        let result =
            GraphData::<CpuRuntime>::from_edge_list::<f64>(&[0], &[3], None, 3, false, &device);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_edge_list_negative_node() {
        let (_client, device) = setup();
        let result =
            GraphData::<CpuRuntime>::from_edge_list::<f64>(&[-1], &[0], None, 3, false, &device);
        assert!(result.is_err());
    }
}
