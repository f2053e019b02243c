//! CPU implementation of minimum spanning tree algorithms.

use crate::graph::impl_generic::kruskal_impl;
use crate::graph::traits::mst::MSTAlgorithms;
use crate::graph::traits::types::{GraphData, MSTResult};
use numr::error::Result;
use numr::runtime::cpu::{CpuClient, CpuRuntime};

impl MSTAlgorithms<CpuRuntime> for CpuClient {
    fn minimum_spanning_tree(
        &self,
        graph: &GraphData<CpuRuntime>,
    ) -> Result<MSTResult<CpuRuntime>> {
        kruskal_impl(self, graph)
    }
}
