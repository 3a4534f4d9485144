//! Conversion of unrooted edge sets into rooted parent arrays.

use std::fmt;

use crate::{
    error::{Result, TreeError},
    tree::{Edge, check_vertex},
};

/// Selects how vertices are numbered in a [`ParentArray`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Labeling {
    /// Keep the original vertex ids; only the root has no parent.
    #[default]
    Identity,
    /// Renumber vertices by depth-first preorder so the root becomes `0` and
    /// every other vertex `i` has `parent(i) < i`.
    Preorder,
}

/// A rooted tree stored as one optional parent per vertex.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParentArray {
    parents: Vec<Option<usize>>,
    root: usize,
    labeling: Labeling,
}

impl ParentArray {
    /// Returns the parent of `vertex`, or `None` for the root and for ids
    /// outside the array.
    #[must_use]
    pub fn parent(&self, vertex: usize) -> Option<usize> {
        self.parents.get(vertex).copied().flatten()
    }

    /// Returns the root id in this array's labeling.
    #[must_use]
    #[rustfmt::skip]
    pub fn root(&self) -> usize { self.root }

    /// Returns the labeling the array was produced with.
    #[must_use]
    #[rustfmt::skip]
    pub fn labeling(&self) -> Labeling { self.labeling }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Returns `true` when the array holds no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Returns the parents as a slice indexed by vertex.
    #[must_use]
    pub fn as_slice(&self) -> &[Option<usize>] {
        &self.parents
    }

    /// Returns the parents with the root encoded as `-1`.
    ///
    /// Parent ids are below [`len`](Self::len), which a `Vec` bounds by
    /// `isize::MAX`, so every id fits in an `i64`. An id beyond `i64::MAX`
    /// could only come from a corrupted array and saturates rather than
    /// wrapping negative.
    ///
    /// # Examples
    /// ```
    /// use treegen_core::{Labeling, Tree};
    ///
    /// let tree = Tree::from_edges(3, [(0, 1), (1, 2)]).expect("path is a tree");
    /// let rooted = tree.to_rooted(1, Labeling::Identity).expect("root is in range");
    /// assert_eq!(rooted.to_signed(), vec![1, -1, 1]);
    /// ```
    #[must_use]
    pub fn to_signed(&self) -> Vec<i64> {
        self.parents
            .iter()
            .map(|parent| parent.map_or(-1, |p| i64::try_from(p).unwrap_or(i64::MAX)))
            .collect()
    }

    /// Returns the tree edges as `(parent, child)` pairs in vertex order.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        self.parents
            .iter()
            .enumerate()
            .filter_map(|(child, parent)| parent.map(|p| Edge::new(p, child)))
            .collect()
    }
}

impl fmt::Display for ParentArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, parent) in self.to_signed().into_iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{parent}")?;
        }
        Ok(())
    }
}

/// Roots the tree described by `edges` at `root`.
///
/// Neighbours are visited in edge insertion order using an explicit stack, so
/// the preorder matches the recursive formulation without its depth limit on
/// path-like trees. Callers wanting unbiased child order should relabel the
/// tree first.
///
/// With [`Labeling::Identity`] the result is indexed by original vertex id and
/// `parent(root)` is `None`. With [`Labeling::Preorder`] the result is indexed
/// by preorder rank and satisfies `parent(i) < i` for every `i > 0`.
///
/// # Errors
/// Returns [`TreeError::EmptyTree`] when `vertex_count == 0`,
/// [`TreeError::VertexOutOfRange`] when `root` or an endpoint is not a vertex,
/// [`TreeError::EdgeCountMismatch`] when there are not `vertex_count - 1`
/// edges, [`TreeError::CycleDetected`] when the traversal reaches a vertex
/// twice, and [`TreeError::Disconnected`] when it does not reach every vertex.
///
/// # Examples
/// ```
/// use treegen_core::{Edge, Labeling, convert_to_rooted};
///
/// let edges = [Edge::new(2, 0), Edge::new(0, 1)];
/// let rooted = convert_to_rooted(3, &edges, 2, Labeling::Preorder)
///     .expect("edges form a tree");
/// assert_eq!(rooted.as_slice(), &[None, Some(0), Some(1)]);
/// ```
pub fn convert_to_rooted(
    vertex_count: usize,
    edges: &[Edge],
    root: usize,
    labeling: Labeling,
) -> Result<ParentArray> {
    if vertex_count == 0 {
        return Err(TreeError::EmptyTree);
    }
    check_vertex(root, vertex_count)?;
    let expected = vertex_count - 1;
    if edges.len() != expected {
        return Err(TreeError::EdgeCountMismatch {
            expected,
            actual: edges.len(),
        });
    }

    let adjacency = build_adjacency(vertex_count, edges)?;
    let mut rank: Vec<Option<usize>> = vec![None; vertex_count];
    let mut parents = vec![None; vertex_count];
    let mut visited = 0;
    let mut stack = vec![(root, None)];

    while let Some((vertex, parent)) = stack.pop() {
        if rank[vertex].is_some() {
            return Err(TreeError::CycleDetected {
                left: parent.unwrap_or(vertex),
                right: vertex,
            });
        }
        rank[vertex] = Some(visited);

        if let Some(parent) = parent {
            match labeling {
                Labeling::Identity => parents[vertex] = Some(parent),
                Labeling::Preorder => parents[visited] = rank[parent],
            }
        }
        visited += 1;

        for &neighbour in adjacency[vertex].iter().rev() {
            if Some(neighbour) != parent {
                stack.push((neighbour, Some(vertex)));
            }
        }
    }

    if visited != vertex_count {
        return Err(TreeError::Disconnected {
            reached: visited,
            vertex_count,
        });
    }

    let root = match labeling {
        Labeling::Identity => root,
        Labeling::Preorder => 0,
    };
    Ok(ParentArray {
        parents,
        root,
        labeling,
    })
}

fn build_adjacency(vertex_count: usize, edges: &[Edge]) -> Result<Vec<Vec<usize>>> {
    let mut adjacency = vec![Vec::new(); vertex_count];
    for edge in edges {
        check_vertex(edge.source(), vertex_count)?;
        check_vertex(edge.target(), vertex_count)?;
        if edge.source() == edge.target() {
            return Err(TreeError::SelfLoop {
                vertex: edge.source(),
            });
        }
        adjacency[edge.source()].push(edge.target());
        adjacency[edge.target()].push(edge.source());
    }
    Ok(adjacency)
}
