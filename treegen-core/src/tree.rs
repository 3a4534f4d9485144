//! Edge-list tree representation.
//!
//! A [`Tree`] is a vertex count plus an ordered list of undirected edges.
//! Every public way of obtaining or mutating a tree leaves it with exactly
//! `n - 1` edges forming a single connected, acyclic component. Generators
//! build trees through crate-private constructors that skip validation
//! because their construction already guarantees the invariant.

use tracing::instrument;

use crate::{
    error::{Result, TreeError},
    random::{RandomSource, shuffle},
    rooted::{Labeling, ParentArray, convert_to_rooted},
    union_find::DisjointSet,
};

/// An undirected edge stored in emission order.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Edge {
    source: usize,
    target: usize,
}

impl Edge {
    /// Creates an edge from `source` to `target`.
    #[must_use]
    pub const fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }

    /// Returns the first endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the second endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge with its endpoints swapped.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.target, self.source)
    }

    /// Returns the endpoints ordered as `(min, max)`.
    #[must_use]
    pub fn canonical(self) -> (usize, usize) {
        (self.source.min(self.target), self.source.max(self.target))
    }
}

impl From<(usize, usize)> for Edge {
    fn from((source, target): (usize, usize)) -> Self {
        Self::new(source, target)
    }
}

/// How [`Tree::relabel`] treats the stored orientation of each edge.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Orientation {
    /// Keep `(source, target)` in the order the generator emitted them.
    Keep,
    /// Swap each edge's endpoints with probability one half.
    #[default]
    Shuffle,
}

/// A labelled tree stored as an edge list.
///
/// # Examples
/// ```
/// use treegen_core::{Edge, Tree};
///
/// let tree = Tree::from_edges(3, [(0, 1), (1, 2)]).expect("path is a tree");
/// assert_eq!(tree.vertex_count(), 3);
/// assert_eq!(tree.edges(), &[Edge::new(0, 1), Edge::new(1, 2)]);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tree {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl Tree {
    /// Returns the tree with one vertex and no edges.
    #[must_use]
    pub fn singleton() -> Self {
        Self::with_capacity(1)
    }

    /// Builds a tree from caller-supplied edges, validating every invariant.
    ///
    /// # Errors
    /// Returns [`TreeError::EmptyTree`] when `vertex_count == 0`,
    /// [`TreeError::VertexOutOfRange`] or [`TreeError::SelfLoop`] for a
    /// malformed edge, [`TreeError::EdgeCountMismatch`] when there are not
    /// exactly `vertex_count - 1` edges, and [`TreeError::CycleDetected`]
    /// when an edge joins two already connected vertices.
    pub fn from_edges<I, E>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        if vertex_count == 0 {
            return Err(TreeError::EmptyTree);
        }
        let edges: Vec<Edge> = edges.into_iter().map(Into::into).collect();
        validate_tree_edges(vertex_count, &edges)?;
        Ok(Self {
            vertex_count,
            edges,
        })
    }

    /// Starts an edgeless tree under construction; callers must add exactly
    /// `vertex_count - 1` connecting edges before handing it out.
    pub(crate) fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::with_capacity(vertex_count.saturating_sub(1)),
        }
    }

    pub(crate) fn push_edge(&mut self, source: usize, target: usize) {
        debug_assert!(source < self.vertex_count && target < self.vertex_count);
        debug_assert_ne!(source, target);
        self.edges.push(Edge::new(source, target));
    }

    pub(crate) fn extend_vertices(&mut self, extra: usize) {
        self.vertex_count += extra;
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the edges in emission order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Consumes the tree, returning its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }

    /// Returns the degree of every vertex.
    #[must_use]
    pub fn degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.vertex_count];
        for edge in &self.edges {
            degrees[edge.source] += 1;
            degrees[edge.target] += 1;
        }
        degrees
    }

    /// Returns the edges as canonical `(min, max)` pairs, sorted.
    ///
    /// Two trees over the same labels are equal as undirected graphs exactly
    /// when their canonical edge lists are equal.
    #[must_use]
    pub fn canonical_edges(&self) -> Vec<(usize, usize)> {
        let mut pairs: Vec<_> = self.edges.iter().map(|edge| edge.canonical()).collect();
        pairs.sort_unstable();
        pairs
    }

    /// Applies a uniformly random permutation to the vertex labels.
    ///
    /// The permutation is the identity shuffled with [`shuffle`]; with
    /// [`Orientation::Shuffle`] every edge is then swapped on a coin flip.
    /// Relabeling destroys the positional bias generators leave behind (for
    /// example "vertex 0 is the root" or "parents precede children").
    pub fn relabel<R: RandomSource + ?Sized>(&mut self, rng: &mut R, orientation: Orientation) {
        let mut label: Vec<usize> = (0..self.vertex_count).collect();
        shuffle(rng, &mut label);
        for edge in &mut self.edges {
            let mut relabelled = Edge::new(label[edge.source], label[edge.target]);
            if orientation == Orientation::Shuffle && rng.coin() {
                relabelled = relabelled.reversed();
            }
            *edge = relabelled;
        }
    }

    /// Converts the tree into a parent array rooted at `root`.
    ///
    /// See [`convert_to_rooted`] for the labeling modes.
    ///
    /// # Errors
    /// Returns [`TreeError::VertexOutOfRange`] when `root` is not a vertex.
    #[instrument(
        name = "tree.to_rooted",
        level = "debug",
        err,
        skip(self),
        fields(vertex_count = self.vertex_count),
    )]
    pub fn to_rooted(&self, root: usize, labeling: Labeling) -> Result<ParentArray> {
        convert_to_rooted(self.vertex_count, &self.edges, root, labeling)
    }

    pub(crate) fn check_vertex(&self, vertex: usize) -> Result<()> {
        check_vertex(vertex, self.vertex_count)
    }
}

pub(crate) fn check_vertex(vertex: usize, vertex_count: usize) -> Result<()> {
    if vertex < vertex_count {
        Ok(())
    } else {
        Err(TreeError::VertexOutOfRange {
            vertex,
            vertex_count,
        })
    }
}

fn validate_tree_edges(vertex_count: usize, edges: &[Edge]) -> Result<()> {
    let expected = vertex_count - 1;
    for edge in edges {
        check_vertex(edge.source, vertex_count)?;
        check_vertex(edge.target, vertex_count)?;
        if edge.source == edge.target {
            return Err(TreeError::SelfLoop {
                vertex: edge.source,
            });
        }
    }
    if edges.len() != expected {
        return Err(TreeError::EdgeCountMismatch {
            expected,
            actual: edges.len(),
        });
    }

    let mut components = DisjointSet::new(vertex_count);
    for edge in edges {
        if !components.union(edge.source, edge.target) {
            return Err(TreeError::CycleDetected {
                left: edge.source,
                right: edge.target,
            });
        }
    }
    debug_assert_eq!(components.components(), 1);
    Ok(())
}
