use rstest::rstest;

use super::*;
use crate::{
    Edge, ScriptedSource, SeededSource, TreeError, TreeErrorCode,
    test_utils::assert_spanning_tree,
};

fn pairs(tree: &Tree) -> Vec<(usize, usize)> {
    tree.edges()
        .iter()
        .map(|edge| (edge.source(), edge.target()))
        .collect()
}

#[test]
fn caterpillar_leaves_follow_the_script() {
    let mut rng = ScriptedSource::new([0, 1]);
    let tree = rand_caterpillar(6, 4, &mut rng).expect("valid spine");
    assert_eq!(
        pairs(&tree),
        vec![(0, 1), (1, 2), (2, 3), (4, 1), (5, 2)]
    );
}

#[test]
fn caterpillar_far_spine_end_takes_leaves() {
    let mut rng = ScriptedSource::new([2]);
    let tree = rand_caterpillar(5, 4, &mut rng).expect("valid spine");
    assert_eq!(tree.edges().last(), Some(&Edge::new(4, 3)));
    assert_eq!(rng.draws(), 1);
}

#[test]
fn caterpillar_with_three_spine_vertices_splits_leaves() {
    let tree = rand_caterpillar(10, 3, &mut SeededSource::new(4)).expect("valid spine");
    assert_spanning_tree(&tree);
    let degrees = tree.degrees();
    assert_eq!(degrees[0], 1);
    assert_eq!(degrees[1] + degrees[2], 2 + 1 + 7);
}

#[rstest]
#[case(3)]
#[case(5)]
#[case(40)]
fn caterpillar_leaves_avoid_the_first_spine_vertex(#[case] spine: usize) {
    let tree = rand_caterpillar(40, spine, &mut SeededSource::new(8)).expect("valid spine");
    assert_spanning_tree(&tree);
    assert_eq!(tree.degrees()[0], 1);
    for edge in &tree.edges()[spine - 1..] {
        assert!(edge.source() >= spine);
        assert!((1..spine).contains(&edge.target()), "leaf attached to {}", edge.target());
    }
}

#[rstest]
#[case(1, vec![])]
#[case(2, vec![(0, 1)])]
fn caterpillar_base_cases_ignore_the_spine(
    #[case] n: usize,
    #[case] expected: Vec<(usize, usize)>,
) {
    let tree = rand_caterpillar(n, 0, &mut SeededSource::new(0)).expect("base case");
    assert_eq!(tree.vertex_count(), n);
    assert_eq!(pairs(&tree), expected);
}

#[test]
fn skew_tree_keeps_its_long_path() {
    let tree = rand_skew_tree(30, 12, &mut SeededSource::new(2)).expect("valid path");
    assert_spanning_tree(&tree);
    let expected: Vec<Edge> = (1..12).map(|i| Edge::new(i - 1, i)).collect();
    assert_eq!(&tree.edges()[..11], expected.as_slice());
    assert!(tree.edges()[11..].iter().all(|edge| edge.source() < edge.target()));
}

#[test]
fn skew_tree_with_full_path_draws_nothing() {
    let mut rng = ScriptedSource::new([0]);
    let tree = rand_skew_tree(5, 5, &mut rng).expect("valid path");
    assert_eq!(pairs(&tree), vec![(0, 1), (1, 2), (2, 3), (3, 4)]);
    assert_eq!(rng.draws(), 0);
}

#[test]
fn unit_width_path_is_a_path() {
    let tree = rand_path(6, 1, &mut SeededSource::new(1)).expect("width >= 1");
    assert_eq!(
        pairs(&tree),
        vec![(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)]
    );
}

#[rstest]
#[case(2)]
#[case(3)]
#[case(100)]
fn bounded_width_parents_stay_in_the_window(#[case] width: usize) {
    let tree = rand_path(80, width, &mut SeededSource::new(6)).expect("width >= 1");
    assert_spanning_tree(&tree);
    for edge in tree.edges() {
        let (parent, child) = (edge.source(), edge.target());
        assert!(parent < child && child - parent <= width, "{edge:?}");
    }
}

#[test]
fn binary_kary_matches_the_known_layout() {
    let tree = rand_kary(7, 2).expect("k >= 1");
    assert_eq!(
        pairs(&tree),
        vec![(1, 0), (2, 1), (3, 1), (4, 2), (5, 2), (6, 3)]
    );
}

#[rstest]
#[case::unary(1)]
#[case::ternary(3)]
#[case::wider_than_the_tree(50)]
fn kary_trees_are_spanning(#[case] k: usize) {
    let tree = rand_kary(20, k).expect("k >= 1");
    assert_spanning_tree(&tree);
    assert!(tree.degrees().iter().all(|&d| d <= k + 1));
}

#[test]
fn wheel_layout() {
    let tree = rand_wheel(7, 3).expect("spokes >= 1");
    assert_eq!(
        pairs(&tree),
        vec![(0, 1), (0, 2), (0, 3), (1, 4), (2, 5), (3, 6)]
    );
}

#[rstest]
#[case::caterpillar_short_spine(rand_caterpillar(5, 2, &mut SeededSource::new(0)), "spine")]
#[case::caterpillar_long_spine(rand_caterpillar(5, 6, &mut SeededSource::new(0)), "spine")]
#[case::skew_empty_path(rand_skew_tree(5, 0, &mut SeededSource::new(0)), "path")]
#[case::skew_long_path(rand_skew_tree(5, 6, &mut SeededSource::new(0)), "path")]
#[case::zero_width(rand_path(5, 0, &mut SeededSource::new(0)), "width")]
#[case::zero_arity(rand_kary(5, 0), "k")]
#[case::no_spokes(rand_wheel(5, 0), "spokes")]
fn invalid_shape_parameters_are_rejected(
    #[case] result: Result<Tree>,
    #[case] expected_parameter: &str,
) {
    let err = result.expect_err("parameter must be rejected");
    assert_eq!(err.code(), TreeErrorCode::InvalidParameter);
    let TreeError::InvalidParameter { parameter, .. } = err else {
        panic!("unexpected error: {err:?}");
    };
    assert_eq!(parameter, expected_parameter);
}

#[rstest]
#[case(rand_caterpillar(0, 3, &mut SeededSource::new(0)))]
#[case(rand_skew_tree(0, 1, &mut SeededSource::new(0)))]
#[case(rand_path(0, 1, &mut SeededSource::new(0)))]
#[case(rand_kary(0, 2))]
#[case(rand_wheel(0, 2))]
fn zero_vertices_are_rejected(#[case] result: Result<Tree>) {
    assert_eq!(result, Err(TreeError::EmptyTree));
}
