use crate::{error::Result, random::RandomSource, tree::Tree};

use super::require_vertices;

/// Generates a uniformly random labelled tree on `vertex_count` vertices.
///
/// Draws `n - 2` labels from `[0, n)` and decodes them as a Prüfer sequence;
/// one and two vertices are handled directly without drawing.
///
/// # Errors
/// Returns [`crate::TreeError::EmptyTree`] when `vertex_count == 0`.
///
/// # Examples
/// ```
/// use treegen_core::{ScriptedSource, rand_with_prufer};
///
/// let tree = rand_with_prufer(4, &mut ScriptedSource::new([1, 1])).expect("n >= 1");
/// assert_eq!(tree.canonical_edges(), vec![(0, 1), (1, 2), (1, 3)]);
/// ```
pub fn rand_with_prufer<R: RandomSource + ?Sized>(
    vertex_count: usize,
    rng: &mut R,
) -> Result<Tree> {
    require_vertices(vertex_count)?;
    match vertex_count {
        1 => Ok(Tree::singleton()),
        2 => {
            let mut tree = Tree::with_capacity(2);
            tree.push_edge(0, 1);
            Ok(tree)
        }
        n => {
            let sequence: Vec<usize> = (0..n - 2).map(|_| rng.next(0, n - 1)).collect();
            Tree::from_prufer(&sequence)
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::{Edge, ScriptedSource, SeededSource, test_utils::assert_spanning_tree};

    #[test]
    fn scripted_draws_decode_to_the_expected_star() {
        let mut rng = ScriptedSource::new([1, 1]);
        let tree = rand_with_prufer(4, &mut rng).expect("n >= 1");
        assert_eq!(
            tree.edges(),
            &[Edge::new(1, 0), Edge::new(1, 2), Edge::new(1, 3)]
        );
        assert_eq!(rng.draws(), 2);
    }

    #[rstest]
    #[case(1, 0)]
    #[case(2, 1)]
    fn small_trees_draw_nothing(#[case] n: usize, #[case] edges: usize) {
        let mut rng = ScriptedSource::new([0]);
        let tree = rand_with_prufer(n, &mut rng).expect("n >= 1");
        assert_eq!(tree.edges().len(), edges);
        assert_eq!(rng.draws(), 0);
    }

    #[rstest]
    #[case(3)]
    #[case(64)]
    #[case(1_000)]
    fn seeded_trees_span_every_vertex(#[case] n: usize) {
        let tree = rand_with_prufer(n, &mut SeededSource::new(n as u64)).expect("n >= 1");
        assert_spanning_tree(&tree);
    }
}
