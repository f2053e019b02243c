//! Disjoint-set forest with path compression and union by size.
//!
//! Vertices are dense indices `0..n`. Every vertex starts as its own root
//! with size 1. Sizes are only meaningful at roots.

/// Union-find over dense vertex ids.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl DisjointSet {
    /// Create `n` singleton components.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
        }
    }

    /// Number of elements tracked.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint components.
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Return the root of `x`'s component.
    ///
    /// Every vertex on the path from `x` to the root is re-pointed directly at
    /// the root. Panics if `x` is out of range.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Path compression
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merge the components of `x` and `y`.
    ///
    /// The smaller component is attached under the larger one's root. On equal
    /// sizes `x`'s root goes under `y`'s. Returns `false` if `x` and `y` were
    /// already in the same component.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let rx = self.find(x);
        let ry = self.find(y);

        if rx == ry {
            return false; // Already in same set
        }

        // Union by size
        let (child, root) = if self.size[rx] <= self.size[ry] {
            (rx, ry)
        } else {
            (ry, rx)
        };
        self.parent[child] = root;
        self.size[root] += self.size[child];
        self.components -= 1;

        true
    }

    /// Whether `x` and `y` share a component.
    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Size of the component containing `x`.
    pub fn component_size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut ds = DisjointSet::new(4);
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.component_count(), 4);
        for v in 0..4 {
            assert_eq!(ds.find(v), v);
            assert_eq!(ds.component_size(v), 1);
        }
    }

    #[test]
    fn test_union_and_find() {
        let mut ds = DisjointSet::new(5);
        assert!(ds.union(0, 1));
        assert!(ds.union(2, 3));
        assert!(ds.union(1, 3));
        assert!(!ds.union(0, 2));

        assert!(ds.connected(0, 3));
        assert!(!ds.connected(0, 4));
        assert_eq!(ds.component_size(2), 4);
        assert_eq!(ds.component_count(), 2);
    }

    #[test]
    fn test_equal_size_tie_attaches_first_under_second() {
        let mut ds = DisjointSet::new(2);
        ds.union(0, 1);
        assert_eq!(ds.find(0), 1);
        assert_eq!(ds.find(1), 1);
    }

    #[test]
    fn test_smaller_goes_under_larger() {
        let mut ds = DisjointSet::new(4);
        ds.union(1, 2); // root 2, size 2
        ds.union(2, 0); // 0 is smaller, attaches under 2
        assert_eq!(ds.find(0), 2);
        ds.union(2, 3);
        assert_eq!(ds.find(3), 2);
        assert_eq!(ds.component_size(3), 4);
    }

    #[test]
    fn test_path_compression() {
        let mut ds = DisjointSet::new(4);
        // Build a chain by hand: 0 -> 1 -> 2 -> 3
        ds.parent = vec![1, 2, 3, 3];
        assert_eq!(ds.find(0), 3);
        assert_eq!(ds.parent, vec![3, 3, 3, 3]);
    }

    #[test]
    fn test_find_is_idempotent() {
        let mut ds = DisjointSet::new(6);
        ds.union(0, 1);
        ds.union(2, 3);
        ds.union(0, 3);
        let first: Vec<usize> = (0..6).map(|v| ds.find(v)).collect();
        let second: Vec<usize> = (0..6).map(|v| ds.find(v)).collect();
        assert_eq!(first, second);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_panics() {
        let mut ds = DisjointSet::new(3);
        ds.find(3);
    }
}
