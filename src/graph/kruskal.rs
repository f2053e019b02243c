//! Partial Kruskal for maximum-spacing k-clustering.
//!
//! Edges are scanned in non-decreasing weight order and merged with a
//! [`DisjointSet`] until exactly `k` components remain. The spacing of the
//! resulting clustering is the weight of the cheapest remaining edge whose
//! endpoints still lie in different components.
//!
//! The merge loop is inherently sequential: each union depends on all earlier
//! merges having been applied.

use super::container::{Edge, Graph};
use super::disjoint_set::DisjointSet;
use super::error::{ClusteringError, ClusteringResult};

/// Output of the merge loop, whether or not `k` components were reached.
#[derive(Debug, Clone)]
pub struct PartialForest<W = i64> {
    /// Edges chosen by Kruskal, in selection order.
    pub forest: Vec<Edge<W>>,
    /// Number of components when merging stopped.
    pub components: usize,
    /// Cheapest unexamined edge crossing two components, if any.
    pub next_merge: Option<Edge<W>>,
    /// Component label per vertex (smallest vertex id in the component).
    pub labels: Vec<usize>,
}

/// A maximum-spacing partition of the vertices into `k` clusters.
#[derive(Debug, Clone, PartialEq)]
pub struct KClustering<W = i64> {
    forest: Vec<Edge<W>>,
    threshold: Option<W>,
    labels: Vec<usize>,
    num_clusters: usize,
}

impl<W: Copy> KClustering<W> {
    /// Minimum spanning forest edges with `k` components.
    pub fn forest(&self) -> &[Edge<W>] {
        &self.forest
    }

    /// Weight of the next edge Kruskal would merge, if one exists.
    pub fn threshold(&self) -> Option<W> {
        self.threshold
    }

    /// Minimum weight between two distinct clusters.
    ///
    /// Fails with [`ClusteringError::NoCrossingEdge`] when no edge joins two
    /// clusters, i.e. the clusters are exactly the connected components.
    pub fn spacing(&self) -> ClusteringResult<W> {
        self.threshold.ok_or(ClusteringError::NoCrossingEdge {
            clusters: self.num_clusters,
        })
    }

    pub fn num_clusters(&self) -> usize {
        self.num_clusters
    }

    /// Cluster label per vertex. Labels are the smallest vertex id in each cluster.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Vertex ids grouped by cluster, ordered by label.
    pub fn clusters(&self) -> Vec<Vec<usize>> {
        let mut slot = vec![usize::MAX; self.labels.len()];
        let mut groups: Vec<Vec<usize>> = Vec::with_capacity(self.num_clusters);
        for (v, &label) in self.labels.iter().enumerate() {
            if slot[label] == usize::MAX {
                slot[label] = groups.len();
                groups.push(Vec::new());
            }
            groups[slot[label]].push(v);
        }
        groups
    }
}

impl<W: Copy + std::iter::Sum> KClustering<W> {
    /// Sum of forest edge weights.
    pub fn total_weight(&self) -> W {
        self.forest.iter().map(|e| e.weight).sum()
    }
}

fn validate_inputs<W>(graph: &Graph<W>, k: usize) -> ClusteringResult<()> {
    if !graph.is_complete() {
        return Err(ClusteringError::IncompleteGraph {
            expected: graph.edge_capacity(),
            added: graph.num_edges(),
        });
    }
    let n = graph.num_vertices();
    if k == 0 || k > n {
        return Err(ClusteringError::InvalidClusterCount { k, num_vertices: n });
    }
    Ok(())
}

fn component_labels(ds: &mut DisjointSet) -> Vec<usize> {
    let n = ds.len();
    let mut root_label = vec![usize::MAX; n];
    let mut labels = Vec::with_capacity(n);
    for v in 0..n {
        let root = ds.find(v);
        if root_label[root] == usize::MAX {
            root_label[root] = v;
        }
        labels.push(root_label[root]);
    }
    labels
}

/// Run Kruskal until `k` components remain or edges run out.
///
/// Sorts the graph's edges first. The registry is rebuilt on every call, so
/// repeated calls on an unmodified graph return identical results.
///
/// # Errors
///
/// [`ClusteringError::IncompleteGraph`] if edge slots are unfilled,
/// [`ClusteringError::InvalidClusterCount`] unless `1 <= k <= n`.
pub fn partial_kruskal<W: Copy + PartialOrd>(
    graph: &mut Graph<W>,
    k: usize,
) -> ClusteringResult<PartialForest<W>> {
    validate_inputs(graph, k)?;
    graph.sort_edges();

    let n = graph.num_vertices();
    let target = n - k;
    let edges = graph.edges();

    tracing::debug!(
        vertices = n,
        edges = edges.len(),
        k,
        target_merges = target,
        "starting partial Kruskal"
    );

    let mut ds = DisjointSet::new(n);
    let mut forest = Vec::with_capacity(target);
    let mut next = 0;

    while forest.len() < target && next < edges.len() {
        let edge = edges[next];
        next += 1;
        if ds.union(edge.head, edge.tail) {
            tracing::trace!(
                head = edge.head,
                tail = edge.tail,
                merges = forest.len() + 1,
                "merged"
            );
            forest.push(edge);
        }
    }

    // Resume strictly after the last edge examined above.
    let next_merge = edges[next..]
        .iter()
        .find(|e| !ds.connected(e.head, e.tail))
        .copied();

    let components = ds.component_count();
    tracing::debug!(
        forest_edges = forest.len(),
        components,
        examined = next,
        has_next_merge = next_merge.is_some(),
        "partial Kruskal finished"
    );

    Ok(PartialForest {
        forest,
        components,
        next_merge,
        labels: component_labels(&mut ds),
    })
}

/// Partition `graph` into `k` clusters of maximum spacing.
///
/// # Errors
///
/// Besides the argument errors of [`partial_kruskal`], returns
/// [`ClusteringError::Unreachable`] when the graph has more than `k`
/// connected components.
pub fn compute_k_clustering<W: Copy + PartialOrd>(
    graph: &mut Graph<W>,
    k: usize,
) -> ClusteringResult<KClustering<W>> {
    let partial = partial_kruskal(graph, k)?;

    if partial.components > k {
        tracing::warn!(
            requested = k,
            components = partial.components,
            "k-clustering unreachable: too many connected components"
        );
        return Err(ClusteringError::Unreachable {
            requested: k,
            components: partial.components,
        });
    }

    Ok(KClustering {
        forest: partial.forest,
        threshold: partial.next_merge.map(|e| e.weight),
        labels: partial.labels,
        num_clusters: partial.components,
    })
}

/// Minimum spanning forest of the whole graph (plain Kruskal).
pub fn minimum_spanning_forest<W: Copy + PartialOrd>(
    graph: &mut Graph<W>,
) -> ClusteringResult<Vec<Edge<W>>> {
    if graph.num_vertices() == 0 {
        if !graph.is_complete() {
            return Err(ClusteringError::IncompleteGraph {
                expected: graph.edge_capacity(),
                added: graph.num_edges(),
            });
        }
        return Ok(Vec::new());
    }
    // k = 1 keeps merging until the edges run out.
    Ok(partial_kruskal(graph, 1)?.forest)
}

impl<W: Copy + PartialOrd> Graph<W> {
    /// See [`compute_k_clustering`].
    pub fn compute_k_clustering(&mut self, k: usize) -> ClusteringResult<KClustering<W>> {
        compute_k_clustering(self, k)
    }

    /// See [`minimum_spanning_forest`].
    pub fn minimum_spanning_forest(&mut self) -> ClusteringResult<Vec<Edge<W>>> {
        minimum_spanning_forest(self)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize, i64)>, usize)> {
        (2_usize..12).prop_flat_map(|n| {
            (
                Just(n),
                proptest::collection::vec((0..n, 0..n, 0_i64..20), 0..40),
                1..=n,
            )
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn kruskal_forest_properties((n, raw, k) in graph_strategy()) {
            let mut graph = Graph::from_edges(n, &raw);
            let components = graph.component_count();

            let result = match graph.compute_k_clustering(k) {
                Ok(result) => result,
                Err(ClusteringError::Unreachable { requested, components: c }) => {
                    prop_assert_eq!(requested, k);
                    prop_assert_eq!(c, components);
                    prop_assert!(components > k);
                    return Ok(());
                }
                Err(other) => return Err(TestCaseError::fail(other.to_string())),
            };
            prop_assert!(components <= k);
            prop_assert_eq!(result.forest().len(), n - k);
            prop_assert_eq!(result.num_clusters(), k);

            // Acyclic
            let mut ds = DisjointSet::new(n);
            for e in result.forest() {
                prop_assert!(ds.union(e.head, e.tail));
            }

            // Threshold is the cheapest edge crossing two clusters
            let labels = result.labels();
            let crossing_min = raw
                .iter()
                .filter(|&&(h, t, _)| labels[h] != labels[t])
                .map(|&(_, _, w)| w)
                .min();
            prop_assert_eq!(result.threshold(), crossing_min);
            if let Some(threshold) = result.threshold() {
                for e in result.forest() {
                    prop_assert!(e.weight <= threshold);
                }
            }

            let again = graph.compute_k_clustering(k).unwrap();
            prop_assert_eq!(again, result);
        }

        #[test]
        fn spanning_forest_weight_matches_each_k(
            (n, raw, _k) in graph_strategy(),
        ) {
            let mut graph = Graph::from_edges(n, &raw);
            let forest = graph.minimum_spanning_forest().unwrap();
            prop_assert_eq!(forest.len(), n - graph.component_count());

            // Forest for any reachable k is a prefix of the full forest
            for k in graph.component_count()..=n {
                let result = graph.compute_k_clustering(k).unwrap();
                prop_assert_eq!(result.forest(), &forest[..n - k]);
            }
        }
    }
}
