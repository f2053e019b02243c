//! Arena-backed undirected graph used by the clustering engine.
//!
//! Vertices and edges live in dense vectors and refer to each other by index.
//! The edge sequence has a fixed capacity chosen at construction and is filled
//! one slot at a time by [`Graph::add_edge`].

use std::cmp::Ordering;

use super::disjoint_set::DisjointSet;

/// Undirected weighted edge between two vertex ids.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W = i64> {
    pub head: usize,
    pub tail: usize,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(head: usize, tail: usize, weight: W) -> Self {
        Self { head, tail, weight }
    }
}

/// Graph vertex with its adjacency list.
#[derive(Debug, Clone)]
pub struct Vertex {
    pub id: usize,
    pub neighbors: Vec<usize>,
}

/// Weighted undirected graph with `n` vertices and `m` edge slots.
#[derive(Debug, Clone)]
pub struct Graph<W = i64> {
    vertices: Vec<Vertex>,
    edges: Vec<Edge<W>>,
    capacity: usize,
    sorted: bool,
}

impl<W: Copy + PartialOrd> Graph<W> {
    /// Create `n` isolated vertices and room for `m` edges.
    pub fn new(n: usize, m: usize) -> Self {
        let vertices = (0..n)
            .map(|id| Vertex {
                id,
                neighbors: Vec::new(),
            })
            .collect();
        Self {
            vertices,
            edges: Vec::with_capacity(m),
            capacity: m,
            sorted: true,
        }
    }

    /// Build a complete graph from `(head, tail, weight)` triples.
    pub fn from_edges(n: usize, edges: &[(usize, usize, W)]) -> Self {
        let mut graph = Self::new(n, edges.len());
        for &(head, tail, weight) in edges {
            graph.add_edge(head, tail, weight);
        }
        graph
    }

    /// Store an edge in the next free slot and link both endpoints.
    ///
    /// # Panics
    ///
    /// If either endpoint is `>= num_vertices()` or all slots are already filled.
    pub fn add_edge(&mut self, head: usize, tail: usize, weight: W) {
        let n = self.vertices.len();
        assert!(
            head < n && tail < n,
            "edge ({head}, {tail}) out of range for {n} vertices"
        );
        assert!(
            self.edges.len() < self.capacity,
            "all {} edge slots are already filled",
            self.capacity
        );

        self.vertices[head].neighbors.push(tail);
        self.vertices[tail].neighbors.push(head);

        if let Some(last) = self.edges.last() {
            if weight_cmp(&last.weight, &weight) == Ordering::Greater {
                self.sorted = false;
            }
        }
        self.edges.push(Edge::new(head, tail, weight));
    }

    /// Sort edges by non-decreasing weight. Ties keep insertion order.
    pub fn sort_edges(&mut self) {
        if self.sorted {
            return;
        }
        self.edges.sort_by(|a, b| weight_cmp(&a.weight, &b.weight));
        self.sorted = true;
    }

    /// Number of connected components of the full edge set.
    pub fn component_count(&self) -> usize {
        let mut ds = DisjointSet::new(self.vertices.len());
        for edge in &self.edges {
            ds.union(edge.head, edge.tail);
        }
        ds.component_count()
    }
}

impl<W> Graph<W> {
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges added so far.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn edge_capacity(&self) -> usize {
        self.capacity
    }

    /// Whether every edge slot has been filled.
    pub fn is_complete(&self) -> bool {
        self.edges.len() == self.capacity
    }

    /// Whether the edge sequence is currently in non-decreasing weight order.
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    pub fn vertex(&self, id: usize) -> &Vertex {
        &self.vertices[id]
    }

    pub fn neighbors(&self, id: usize) -> &[usize] {
        &self.vertices[id].neighbors
    }
}

/// Total order on weights.
///
/// Values not comparable with themselves (NaN) sort after every other weight
/// and are equal to each other.
pub(crate) fn weight_cmp<W: PartialOrd>(a: &W, b: &W) -> Ordering {
    let a_unordered = a.partial_cmp(a).is_none();
    let b_unordered = b.partial_cmp(b).is_none();
    match (a_unordered, b_unordered) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    }
}
