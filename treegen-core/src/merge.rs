//! Merging two trees into one: `link` bridges them with a new edge, `glue`
//! identifies one vertex of each.
//!
//! Both operations mutate the left-hand tree in place and only read the
//! right-hand tree. The right-hand vertices are renumbered into the space
//! after the left-hand ones, so the right-hand tree's own ids must not be
//! used to address the merged result.

use crate::{error::Result, tree::Tree};

impl Tree {
    /// Appends `other` and joins vertex `u` of `self` to vertex `v` of
    /// `other` with one new edge.
    ///
    /// Vertex `w` of `other` becomes `w + self.vertex_count()`. The bridge is
    /// emitted last as `(u, v + self.vertex_count())`.
    ///
    /// # Errors
    /// Returns [`crate::TreeError::VertexOutOfRange`] when `u` or `v` is not a
    /// vertex of its tree; `self` is left unchanged.
    ///
    /// # Examples
    /// ```
    /// use treegen_core::{Edge, Tree};
    ///
    /// let mut left = Tree::from_edges(2, [(0, 1)]).expect("edge");
    /// let right = Tree::from_edges(2, [(1, 0)]).expect("edge");
    /// left.link(1, &right, 0).expect("indices are in range");
    /// assert_eq!(left.vertex_count(), 4);
    /// assert_eq!(
    ///     left.edges(),
    ///     &[Edge::new(0, 1), Edge::new(3, 2), Edge::new(1, 2)],
    /// );
    /// ```
    pub fn link(&mut self, u: usize, other: &Self, v: usize) -> Result<()> {
        self.check_vertex(u)?;
        other.check_vertex(v)?;
        let offset = self.vertex_count();
        self.extend_vertices(other.vertex_count());
        for edge in other.edges() {
            self.push_edge(edge.source() + offset, edge.target() + offset);
        }
        self.push_edge(u, v + offset);
        Ok(())
    }

    /// Appends `other` with its vertex `v` merged into vertex `u` of `self`.
    ///
    /// Vertex `w` of `other` maps to `u` when `w == v`, to
    /// `w + self.vertex_count() - 1` when `w > v`, and to
    /// `w + self.vertex_count()` otherwise, so the merged tree has
    /// `self.vertex_count() + other.vertex_count() - 1` vertices and no new
    /// edge.
    ///
    /// # Errors
    /// Returns [`crate::TreeError::VertexOutOfRange`] when `u` or `v` is not a
    /// vertex of its tree; `self` is left unchanged.
    ///
    /// # Examples
    /// ```
    /// use treegen_core::{Edge, Tree};
    ///
    /// let mut left = Tree::from_edges(2, [(0, 1)]).expect("edge");
    /// let right = Tree::from_edges(3, [(0, 1), (1, 2)]).expect("path");
    /// left.glue(0, &right, 1).expect("indices are in range");
    /// assert_eq!(left.vertex_count(), 4);
    /// assert_eq!(
    ///     left.edges(),
    ///     &[Edge::new(0, 1), Edge::new(2, 0), Edge::new(0, 3)],
    /// );
    /// ```
    pub fn glue(&mut self, u: usize, other: &Self, v: usize) -> Result<()> {
        self.check_vertex(u)?;
        other.check_vertex(v)?;
        let offset = self.vertex_count();
        let remap = |w: usize| match w.cmp(&v) {
            std::cmp::Ordering::Equal => u,
            std::cmp::Ordering::Greater => w + offset - 1,
            std::cmp::Ordering::Less => w + offset,
        };
        self.extend_vertices(other.vertex_count() - 1);
        for edge in other.edges() {
            self.push_edge(remap(edge.source()), remap(edge.target()));
        }
        Ok(())
    }
}
