use crate::{error::Result, random::RandomSource, tree::Tree};

use super::require_vertices;

/// Generates a tree by attaching each vertex `i` to an earlier vertex.
///
/// The parent of `i` is `wnext(0, i - 1, elongation)`: positive elongation
/// favours recent vertices and stretches the tree towards a path, negative
/// elongation favours early vertices and flattens it towards a star, and
/// zero gives the uniform random recursive tree. Edges are emitted as
/// `(parent, i)`.
///
/// # Errors
/// Returns [`crate::TreeError::EmptyTree`] when `vertex_count == 0`.
pub fn rand_with_prim<R: RandomSource + ?Sized>(
    vertex_count: usize,
    elongation: i64,
    rng: &mut R,
) -> Result<Tree> {
    require_vertices(vertex_count)?;
    let mut tree = Tree::with_capacity(vertex_count);
    for vertex in 1..vertex_count {
        let parent = rng.wnext(0, vertex - 1, elongation);
        tree.push_edge(parent, vertex);
    }
    Ok(tree)
}
