//! Union-find (disjoint set union) used by the Kruskal-style generator and by
//! edge-set validation.
//!
//! Unions simply point the root of the first set at the root of the second;
//! there is no union-by-rank, so amortised cost relies on path compression
//! alone. The structure is always built fresh for a single call.

#[derive(Clone, Debug)]
pub(crate) struct DisjointSet {
    parent: Vec<usize>,
    components: usize,
}

impl DisjointSet {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            components: n,
        }
    }

    pub(crate) fn components(&self) -> usize {
        self.components
    }

    pub(crate) fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Sets `parent[find(left)] = find(right)`; returns `false` when both
    /// already share a root.
    pub(crate) fn union(&mut self, left: usize, right: usize) -> bool {
        let left = self.find(left);
        let right = self.find(right);
        if left == right {
            return false;
        }
        self.parent[left] = right;
        self.components -= 1;
        true
    }
}
