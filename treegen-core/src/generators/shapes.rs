//! Parameterised tree shapes: caterpillars, skew trees, bounded-width paths,
//! k-ary trees and wheels.

use crate::{error::Result, random::RandomSource, tree::Tree};

use super::{require_parameter, require_vertices};

/// Generates a caterpillar: a spine `0 - 1 - ... - (spine - 1)` with every
/// other vertex hanging off a spine vertex other than `0`.
///
/// Leaves attach as `(i, next(1, spine - 1))`, so vertex `0` keeps degree
/// one while the far end of the spine may take leaves. One and two vertices
/// are returned directly without checking `spine`.
///
/// # Errors
/// Returns [`crate::TreeError::EmptyTree`] when `vertex_count == 0` and
/// [`crate::TreeError::InvalidParameter`] unless `3 <= spine <= vertex_count`.
pub fn rand_caterpillar<R: RandomSource + ?Sized>(
    vertex_count: usize,
    spine: usize,
    rng: &mut R,
) -> Result<Tree> {
    check_caterpillar(vertex_count, spine)?;
    if vertex_count <= 2 {
        return Ok(path_prefix(vertex_count, vertex_count));
    }

    let mut tree = path_prefix(vertex_count, spine);
    for vertex in spine..vertex_count {
        tree.push_edge(vertex, rng.next(1, spine - 1));
    }
    Ok(tree)
}

/// Generates a tree containing the path `0 - 1 - ... - (path - 1)`, with the
/// remaining vertices attached uniformly to any earlier vertex.
///
/// # Errors
/// Returns [`crate::TreeError::EmptyTree`] when `vertex_count == 0` and
/// [`crate::TreeError::InvalidParameter`] unless `1 <= path <= vertex_count`.
pub fn rand_skew_tree<R: RandomSource + ?Sized>(
    vertex_count: usize,
    path: usize,
    rng: &mut R,
) -> Result<Tree> {
    check_skew_tree(vertex_count, path)?;

    let mut tree = path_prefix(vertex_count, path);
    for vertex in path..vertex_count {
        tree.push_edge(rng.next(0, vertex - 1), vertex);
    }
    Ok(tree)
}

/// Generates a tree where vertex `i` attaches to one of the `width` vertices
/// preceding it; `width = 1` is the path `0 - 1 - ... - (n - 1)`.
///
/// # Errors
/// Returns [`crate::TreeError::EmptyTree`] when `vertex_count == 0` and
/// [`crate::TreeError::InvalidParameter`] when `width == 0`.
pub fn rand_path<R: RandomSource + ?Sized>(
    vertex_count: usize,
    width: usize,
    rng: &mut R,
) -> Result<Tree> {
    check_path(vertex_count, width)?;

    let mut tree = Tree::with_capacity(vertex_count);
    for vertex in 1..vertex_count {
        tree.push_edge(rng.next(vertex.saturating_sub(width), vertex - 1), vertex);
    }
    Ok(tree)
}

/// Generates a deterministic `k`-ary tree.
///
/// Vertex `i` attaches to `min(i / k, i - 1)`, emitted as `(i, parent)`. The
/// clamp only matters for `k = 1`, where it yields a path; otherwise vertex
/// `0` has up to `k - 1` children and every later vertex up to `k`.
///
/// # Errors
/// Returns [`crate::TreeError::EmptyTree`] when `vertex_count == 0` and
/// [`crate::TreeError::InvalidParameter`] when `k == 0`.
///
/// # Examples
/// ```
/// use treegen_core::rand_kary;
///
/// let tree = rand_kary(7, 2).expect("k >= 1");
/// assert_eq!(
///     tree.canonical_edges(),
///     vec![(0, 1), (1, 2), (1, 3), (2, 4), (2, 5), (3, 6)],
/// );
/// ```
pub fn rand_kary(vertex_count: usize, k: usize) -> Result<Tree> {
    check_kary(vertex_count, k)?;

    let mut tree = Tree::with_capacity(vertex_count);
    for vertex in 1..vertex_count {
        tree.push_edge(vertex, (vertex / k).min(vertex - 1));
    }
    Ok(tree)
}

/// Generates a wheel: vertices `1..=spokes` hang off the hub `0` and every
/// later vertex `i` extends the spoke of `i - spokes`.
///
/// # Errors
/// Returns [`crate::TreeError::EmptyTree`] when `vertex_count == 0` and
/// [`crate::TreeError::InvalidParameter`] when `spokes == 0`.
pub fn rand_wheel(vertex_count: usize, spokes: usize) -> Result<Tree> {
    check_wheel(vertex_count, spokes)?;

    let mut tree = Tree::with_capacity(vertex_count);
    for vertex in 1..vertex_count {
        let parent = if vertex <= spokes { 0 } else { vertex - spokes };
        tree.push_edge(parent, vertex);
    }
    Ok(tree)
}

pub(crate) fn check_caterpillar(vertex_count: usize, spine: usize) -> Result<()> {
    require_vertices(vertex_count)?;
    if vertex_count <= 2 {
        return Ok(());
    }
    require_parameter(spine >= 3, "caterpillar", "spine", ">= 3", spine)?;
    require_parameter(
        spine <= vertex_count,
        "caterpillar",
        "spine",
        "<= vertex_count",
        spine,
    )
}

pub(crate) fn check_skew_tree(vertex_count: usize, path: usize) -> Result<()> {
    require_vertices(vertex_count)?;
    require_parameter(path >= 1, "skew_tree", "path", ">= 1", path)?;
    require_parameter(
        path <= vertex_count,
        "skew_tree",
        "path",
        "<= vertex_count",
        path,
    )
}

pub(crate) fn check_path(vertex_count: usize, width: usize) -> Result<()> {
    require_vertices(vertex_count)?;
    require_parameter(width >= 1, "path", "width", ">= 1", width)
}

pub(crate) fn check_kary(vertex_count: usize, k: usize) -> Result<()> {
    require_vertices(vertex_count)?;
    require_parameter(k >= 1, "kary", "k", ">= 1", k)
}

pub(crate) fn check_wheel(vertex_count: usize, spokes: usize) -> Result<()> {
    require_vertices(vertex_count)?;
    require_parameter(spokes >= 1, "wheel", "spokes", ">= 1", spokes)
}

/// Starts a tree on `vertex_count` vertices holding the path over the first
/// `length` of them.
fn path_prefix(vertex_count: usize, length: usize) -> Tree {
    let mut tree = Tree::with_capacity(vertex_count);
    for vertex in 1..length {
        tree.push_edge(vertex - 1, vertex);
    }
    tree
}

#[cfg(test)]
mod tests;
