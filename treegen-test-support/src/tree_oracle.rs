//! Independent spanning-tree oracle.
//!
//! Generator tests validate their output against this module rather than the
//! library's own validation so a defect in one cannot hide a defect in the
//! other.

use thiserror::Error;

/// Reason an edge list fails to describe a spanning tree.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum TreeDefect {
    /// The vertex count was zero.
    #[error("no vertices")]
    NoVertices,
    /// The edge count was not `vertex_count - 1`.
    #[error("expected {expected} edges, found {actual}")]
    WrongEdgeCount {
        /// Required number of edges.
        expected: usize,
        /// Edges supplied.
        actual: usize,
    },
    /// An endpoint was not a vertex.
    #[error("edge {index} has endpoint {vertex} outside the vertex range")]
    EndpointOutOfRange {
        /// Position of the edge in the list.
        index: usize,
        /// The offending endpoint.
        vertex: usize,
    },
    /// An edge joined two vertices that were already connected.
    #[error("edge {index} ({left}, {right}) closes a cycle")]
    Cycle {
        /// Position of the edge in the list.
        index: usize,
        /// First endpoint.
        left: usize,
        /// Second endpoint.
        right: usize,
    },
}

/// Checks that `edges` form a spanning tree on `vertex_count` vertices.
///
/// With exactly `vertex_count - 1` edges and no cycle the graph is
/// necessarily connected, so no separate reachability pass is needed.
///
/// # Errors
/// Returns the first [`TreeDefect`] found.
///
/// # Examples
/// ```
/// use treegen_test_support::tree_oracle::{TreeDefect, check_spanning_tree};
///
/// assert_eq!(check_spanning_tree(3, &[(0, 1), (2, 1)]), Ok(()));
/// assert!(matches!(
///     check_spanning_tree(3, &[(0, 1), (1, 0)]),
///     Err(TreeDefect::Cycle { index: 1, .. })
/// ));
/// ```
pub fn check_spanning_tree(
    vertex_count: usize,
    edges: &[(usize, usize)],
) -> Result<(), TreeDefect> {
    if vertex_count == 0 {
        return Err(TreeDefect::NoVertices);
    }
    if edges.len() != vertex_count - 1 {
        return Err(TreeDefect::WrongEdgeCount {
            expected: vertex_count - 1,
            actual: edges.len(),
        });
    }

    let mut roots = Components::new(vertex_count);
    for (index, &(left, right)) in edges.iter().enumerate() {
        for vertex in [left, right] {
            if vertex >= vertex_count {
                return Err(TreeDefect::EndpointOutOfRange { index, vertex });
            }
        }
        if !roots.join(left, right) {
            return Err(TreeDefect::Cycle { index, left, right });
        }
    }
    Ok(())
}

/// Union by size with path halving, kept separate from the library's
/// disjoint-set forest.
struct Components {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl Components {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    fn root(&mut self, mut vertex: usize) -> usize {
        while self.parent[vertex] != vertex {
            self.parent[vertex] = self.parent[self.parent[vertex]];
            vertex = self.parent[vertex];
        }
        vertex
    }

    fn join(&mut self, left: usize, right: usize) -> bool {
        let (mut a, mut b) = (self.root(left), self.root(right));
        if a == b {
            return false;
        }
        if self.size[a] < self.size[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        self.size[a] += self.size[b];
        true
    }
}
