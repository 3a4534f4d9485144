use std::num::NonZeroUsize;

use tracing::debug;

use crate::{
    error::{Result, TreeError},
    random::RandomSource,
    tree::Tree,
    union_find::DisjointSet,
};

use super::require_vertices;

/// Generates a tree by joining random vertex pairs that are not yet
/// connected.
///
/// Each attempt draws `a = next(0, n - 1)` and an offset
/// `wnext(1, n - 1, elongation)`, taking `b = (a + offset) mod n`. Pairs in
/// different components are accepted and emitted with their endpoints
/// swapped on a coin flip; pairs already connected are redrawn. With
/// `elongation = 1` the expected diameter is about `sqrt(n)`; large values
/// favour neighbouring labels and yield much longer trees.
///
/// The rejection loop has no upper bound. Use
/// [`rand_with_kruskal_bounded`] to cap it.
///
/// # Errors
/// Returns [`TreeError::EmptyTree`] when `vertex_count == 0`.
pub fn rand_with_kruskal<R: RandomSource + ?Sized>(
    vertex_count: usize,
    elongation: i64,
    rng: &mut R,
) -> Result<Tree> {
    rand_with_kruskal_bounded(vertex_count, elongation, None, rng)
}

/// Runs [`rand_with_kruskal`] with an optional cap on the number of drawn
/// pairs, counting accepted and rejected attempts alike.
///
/// # Errors
/// Returns [`TreeError::EmptyTree`] when `vertex_count == 0` and
/// [`TreeError::AttemptLimitExceeded`] when `attempt_limit` pairs were drawn
/// without completing the tree.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use treegen_core::{ScriptedSource, TreeError, rand_with_kruskal_bounded};
///
/// // The script proposes the pair (0, 1) on every attempt.
/// let limit = NonZeroUsize::new(4);
/// let err = rand_with_kruskal_bounded(3, 0, limit, &mut ScriptedSource::new([0]))
///     .expect_err("the script keeps proposing the same pair");
/// assert!(matches!(err, TreeError::AttemptLimitExceeded { accepted: 1, .. }));
/// ```
pub fn rand_with_kruskal_bounded<R: RandomSource + ?Sized>(
    vertex_count: usize,
    elongation: i64,
    attempt_limit: Option<NonZeroUsize>,
    rng: &mut R,
) -> Result<Tree> {
    require_vertices(vertex_count)?;
    let required = vertex_count - 1;
    let mut components = DisjointSet::new(vertex_count);
    let mut tree = Tree::with_capacity(vertex_count);
    let mut rejected = 0_usize;

    while tree.edges().len() < required {
        let attempts = tree.edges().len() + rejected;
        if let Some(limit) = attempt_limit.filter(|limit| attempts >= limit.get()) {
            debug!(
                vertex_count,
                accepted = tree.edges().len(),
                rejected,
                "kruskal attempt limit reached"
            );
            return Err(TreeError::AttemptLimitExceeded {
                limit: limit.get(),
                accepted: tree.edges().len(),
                required,
            });
        }

        let a = rng.next(0, vertex_count - 1);
        let b = (a + rng.wnext(1, vertex_count - 1, elongation)) % vertex_count;
        if !components.union(a, b) {
            rejected += 1;
            continue;
        }
        if rng.coin() {
            tree.push_edge(b, a);
        } else {
            tree.push_edge(a, b);
        }
    }

    debug!(
        vertex_count,
        accepted = required,
        rejected,
        "kruskal generation finished"
    );
    Ok(tree)
}
