//! Random binary trees.
//!
//! [`rand_binary_inversion_table`] follows Martin and Orr's inversion-table
//! construction; [`rand_binary_dyck`] follows Langdon's Dyck-word rotation,
//! which produces full binary trees with expected height near
//! `2 * sqrt(pi * k)`.

use crate::{
    error::Result,
    random::{RandomSource, shuffle},
    tree::Tree,
};

use super::{invariant_violation, require_vertices};

/// A binary tree produced from an inversion table, together with the table.
///
/// Vertex `0` is the root and every parent precedes its children. A child
/// whose label equals its parent's label is a right child; a child whose
/// label is one greater is a left child. Each vertex has at most one child
/// of each kind.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InversionTree {
    tree: Tree,
    labels: Vec<usize>,
    parents: Vec<Option<usize>>,
}

impl InversionTree {
    /// Returns the generated tree.
    #[must_use]
    #[rustfmt::skip]
    pub fn tree(&self) -> &Tree { &self.tree }

    /// Returns the inversion-table labels indexed by vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn labels(&self) -> &[usize] { &self.labels }

    /// Returns the parent of `vertex`, or `None` for the root and for ids
    /// outside the tree.
    #[must_use]
    pub fn parent(&self, vertex: usize) -> Option<usize> {
        self.parents.get(vertex).copied().flatten()
    }

    /// Returns `true` when `vertex` is the right child of its parent.
    #[must_use]
    pub fn is_right_child(&self, vertex: usize) -> bool {
        self.parent(vertex)
            .is_some_and(|parent| self.labels[parent] == self.labels[vertex])
    }

    /// Consumes the value, returning the tree.
    #[must_use]
    pub fn into_tree(self) -> Tree {
        self.tree
    }
}

/// Generates a random binary tree on `vertex_count` vertices rooted at `0`.
///
/// Labels satisfy `label[0] = 0` and `label[i] = next(0, label[i - 1] + 1)`.
/// A stack of open ancestors starts as `[0]`; each vertex `i` either extends
/// the top when its label is larger, or pops every ancestor with a larger
/// label and attaches to the new top. Edges are emitted as `(parent, i)`.
///
/// # Errors
/// Returns [`crate::TreeError::EmptyTree`] when `vertex_count == 0`, and
/// [`crate::TreeError::InvariantViolation`] if the ancestor stack drains.
pub fn rand_binary_inversion_table<R: RandomSource + ?Sized>(
    vertex_count: usize,
    rng: &mut R,
) -> Result<InversionTree> {
    require_vertices(vertex_count)?;
    let mut labels = vec![0_usize; vertex_count];
    for vertex in 1..vertex_count {
        labels[vertex] = rng.next(0, labels[vertex - 1] + 1);
    }

    let mut tree = Tree::with_capacity(vertex_count);
    let mut parents = vec![None; vertex_count];
    let mut stack = vec![0_usize];
    for vertex in 1..vertex_count {
        while stack
            .last()
            .is_some_and(|&top| labels[top] > labels[vertex])
        {
            stack.pop();
        }
        let Some(&parent) = stack.last() else {
            return Err(invariant_violation(
                "binary_inversion_table",
                "the root stays on the ancestor stack",
            ));
        };
        tree.push_edge(parent, vertex);
        parents[vertex] = Some(parent);
        stack.push(vertex);
    }

    Ok(InversionTree {
        tree,
        labels,
        parents,
    })
}

/// Generates a random full binary tree with `internal` internal vertices.
///
/// The tree has `2 * internal + 1` vertices rooted at `0`; every internal
/// vertex has exactly two children and the first edge leaving a parent is
/// its left child. `internal = 0` yields the single-vertex tree.
///
/// # Errors
/// Returns [`crate::TreeError::InvariantViolation`] when the rotated word is
/// not a valid Dyck word, which would indicate a defect in the rotation.
///
/// # Examples
/// ```
/// use treegen_core::{SeededSource, rand_binary_dyck};
///
/// let tree = rand_binary_dyck(4, &mut SeededSource::new(1)).expect("valid word");
/// assert_eq!(tree.vertex_count(), 9);
/// let degrees = tree.degrees();
/// assert!(degrees[1..].iter().all(|&d| d == 1 || d == 3));
/// ```
pub fn rand_binary_dyck<R: RandomSource + ?Sized>(internal: usize, rng: &mut R) -> Result<Tree> {
    if internal == 0 {
        return Ok(Tree::singleton());
    }

    let length = 2 * internal + 1;
    // `true` marks an internal vertex, `false` a leaf.
    let mut word: Vec<bool> = (0..length).map(|i| i % 2 == 1).collect();
    shuffle(rng, &mut word);

    // The start of the unique valid rotation follows the last minimum of the
    // running leaf-minus-internal balance.
    let mut balance = 0_isize;
    let mut best = 1_isize;
    let mut start = 0;
    for (index, &is_internal) in word.iter().enumerate() {
        balance += if is_internal { -1 } else { 1 };
        if balance <= best {
            best = balance;
            start = index;
        }
    }
    if !word[start] {
        return Err(invariant_violation(
            "binary_dyck",
            "the rotation starts at an internal symbol",
        ));
    }

    let mut tree = Tree::with_capacity(length);
    let mut children = vec![0_u8; length];
    let mut stack = vec![0_usize];
    for vertex in 1..length {
        let Some(&parent) = stack.last() else {
            return Err(invariant_violation(
                "binary_dyck",
                "an open parent exists for every symbol",
            ));
        };
        tree.push_edge(parent, vertex);
        children[parent] += 1;
        if word[(start + length - vertex) % length] {
            stack.push(vertex);
        }
        while stack.last().is_some_and(|&top| children[top] == 2) {
            stack.pop();
        }
    }
    if !stack.is_empty() {
        return Err(invariant_violation(
            "binary_dyck",
            "every internal vertex receives two children",
        ));
    }
    Ok(tree)
}
