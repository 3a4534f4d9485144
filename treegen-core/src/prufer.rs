//! Prüfer sequence decoding and encoding.
//!
//! Both directions always take the smallest-labelled leaf first, which makes
//! them the canonical bijection between sequences of length `n - 2` over
//! `[0, n)` and labelled trees on `n` vertices.

use std::{cmp::Reverse, collections::BinaryHeap};

use tracing::error;

use crate::{
    error::{Result, TreeError},
    tree::{Tree, check_vertex},
};

impl Tree {
    /// Decodes a Prüfer sequence into a tree on `sequence.len() + 2`
    /// vertices.
    ///
    /// For each element `u` in order the smallest current leaf `v` is removed
    /// and the edge `(u, v)` emitted; the last two leaves are joined at the
    /// end, smaller label first.
    ///
    /// # Errors
    /// Returns [`TreeError::VertexOutOfRange`] when an element is not a vertex
    /// of the decoded tree.
    ///
    /// # Examples
    /// ```
    /// use treegen_core::{Edge, Tree};
    ///
    /// let tree = Tree::from_prufer(&[1, 1]).expect("entries are in range");
    /// assert_eq!(
    ///     tree.edges(),
    ///     &[Edge::new(1, 0), Edge::new(1, 2), Edge::new(1, 3)],
    /// );
    /// ```
    pub fn from_prufer(sequence: &[usize]) -> Result<Self> {
        let vertex_count = sequence.len() + 2;
        let mut degree = vec![1_usize; vertex_count];
        for &vertex in sequence {
            check_vertex(vertex, vertex_count)?;
            degree[vertex] += 1;
        }

        let mut leaves: BinaryHeap<Reverse<usize>> = degree
            .iter()
            .enumerate()
            .filter(|&(_, &d)| d == 1)
            .map(|(vertex, _)| Reverse(vertex))
            .collect();

        let mut tree = Self::with_capacity(vertex_count);
        for &vertex in sequence {
            let Some(Reverse(leaf)) = leaves.pop() else {
                return Err(codec_invariant(
                    "prufer_decode",
                    "a leaf is available for every element",
                ));
            };
            degree[leaf] -= 1;
            degree[vertex] -= 1;
            tree.push_edge(vertex, leaf);
            if degree[vertex] == 1 {
                leaves.push(Reverse(vertex));
            }
        }

        let mut remaining = degree
            .iter()
            .enumerate()
            .filter(|&(_, &d)| d == 1)
            .map(|(vertex, _)| vertex);
        let (Some(left), Some(right)) = (remaining.next(), remaining.next()) else {
            return Err(codec_invariant("prufer_decode", "exactly two leaves remain"));
        };
        tree.push_edge(left, right);
        Ok(tree)
    }

    /// Encodes the tree as its Prüfer sequence.
    ///
    /// Repeatedly removes the smallest-labelled leaf and records its
    /// neighbour until two vertices remain. Decoding the result with
    /// [`Tree::from_prufer`] yields the same undirected edge set.
    ///
    /// # Errors
    /// Returns [`TreeError::InvalidParameter`] for a single-vertex tree,
    /// which has no Prüfer sequence.
    ///
    /// # Examples
    /// ```
    /// use treegen_core::Tree;
    ///
    /// let star = Tree::from_edges(4, [(0, 1), (0, 2), (0, 3)]).expect("star");
    /// assert_eq!(star.to_prufer().expect("n >= 2"), vec![0, 0]);
    /// ```
    pub fn to_prufer(&self) -> Result<Vec<usize>> {
        let vertex_count = self.vertex_count();
        if vertex_count < 2 {
            return Err(TreeError::InvalidParameter {
                generator: "prufer",
                parameter: "vertex_count",
                constraint: ">= 2",
                got: vertex_count,
            });
        }

        // With leaves peeled one at a time, the XOR of a vertex's remaining
        // neighbours is its single neighbour once it becomes a leaf.
        let mut degree = self.degrees();
        let mut neighbour_xor = vec![0_usize; vertex_count];
        for edge in self.edges() {
            neighbour_xor[edge.source()] ^= edge.target();
            neighbour_xor[edge.target()] ^= edge.source();
        }

        let mut leaves: BinaryHeap<Reverse<usize>> = degree
            .iter()
            .enumerate()
            .filter(|&(_, &d)| d == 1)
            .map(|(vertex, _)| Reverse(vertex))
            .collect();

        let mut sequence = Vec::with_capacity(vertex_count - 2);
        while sequence.len() < vertex_count - 2 {
            let Some(Reverse(leaf)) = leaves.pop() else {
                return Err(codec_invariant(
                    "prufer_encode",
                    "a leaf is available until two vertices remain",
                ));
            };
            let parent = neighbour_xor[leaf];
            sequence.push(parent);
            degree[leaf] = 0;
            neighbour_xor[parent] ^= leaf;
            degree[parent] -= 1;
            if degree[parent] == 1 {
                leaves.push(Reverse(parent));
            }
        }
        Ok(sequence)
    }
}

fn codec_invariant(algorithm: &'static str, invariant: &'static str) -> TreeError {
    error!(algorithm, invariant, "prufer codec invariant violated");
    TreeError::InvariantViolation {
        algorithm,
        invariant,
    }
}
