//! Unit tests for configured generation.

use std::num::NonZeroUsize;

use proptest::prelude::*;
use rstest::rstest;

use crate::{
    Labeling, Orientation, ScriptedSource, SeededSource, Tree, TreeError, TreeGeneratorBuilder,
    TreeShape, rand_kary,
    test_utils::{assert_spanning_tree, suite_proptest_config},
};

fn all_shapes() -> Vec<TreeShape> {
    vec![
        TreeShape::Prufer,
        TreeShape::Prim { elongation: 2 },
        TreeShape::Kruskal { elongation: 1 },
        TreeShape::BinaryInversionTable,
        TreeShape::BinaryDyck,
        TreeShape::Caterpillar { spine: 3 },
        TreeShape::Skew { path: 2 },
        TreeShape::Path { width: 2 },
        TreeShape::Kary { k: 2 },
        TreeShape::Wheel { spokes: 2 },
    ]
}

#[test]
fn deterministic_shapes_consume_no_draws_without_relabel() {
    let generator = TreeGeneratorBuilder::new()
        .with_vertex_count(9)
        .with_shape(TreeShape::Wheel { spokes: 4 })
        .build()
        .expect("configuration is valid");
    let mut rng = ScriptedSource::new([3, 1]);
    generator.generate(&mut rng).expect("generation succeeds");
    assert_eq!(rng.draws(), 0);
}

#[test]
fn relabel_is_applied_after_generation() {
    let generator = TreeGeneratorBuilder::new()
        .with_vertex_count(7)
        .with_shape(TreeShape::Kary { k: 2 })
        .with_relabel(Orientation::Keep)
        .build()
        .expect("configuration is valid");

    let generated = generator
        .generate(&mut ScriptedSource::new([4, 0, 2]))
        .expect("generation succeeds");

    let mut expected = rand_kary(7, 2).expect("k >= 1");
    expected.relabel(&mut ScriptedSource::new([4, 0, 2]), Orientation::Keep);
    assert_eq!(generated, expected);
}

#[test]
fn dyck_shape_uses_the_configured_vertex_count() {
    let generator = TreeGeneratorBuilder::new()
        .with_vertex_count(11)
        .with_shape(TreeShape::BinaryDyck)
        .build()
        .expect("odd count");
    let tree = generator
        .generate(&mut SeededSource::new(3))
        .expect("generation succeeds");
    assert_eq!(tree.vertex_count(), 11);
    assert_spanning_tree(&tree);
}

#[test]
fn kruskal_limit_is_forwarded() {
    let generator = TreeGeneratorBuilder::new()
        .with_vertex_count(3)
        .with_shape(TreeShape::Kruskal { elongation: 0 })
        .with_kruskal_attempt_limit(NonZeroUsize::MIN)
        .build()
        .expect("configuration is valid");
    let err = generator
        .generate(&mut ScriptedSource::new([0]))
        .expect_err("one draw cannot build two edges");
    assert_eq!(
        err,
        TreeError::AttemptLimitExceeded {
            limit: 1,
            accepted: 1,
            required: 2,
        }
    );
}

#[test]
fn rooted_generation_checks_the_root_before_drawing() {
    let generator = TreeGeneratorBuilder::new()
        .with_vertex_count(4)
        .build()
        .expect("configuration is valid");
    let mut rng = ScriptedSource::new([0]);
    let err = generator
        .generate_rooted(&mut rng, 4, Labeling::Identity)
        .expect_err("root is not a vertex");
    assert_eq!(
        err,
        TreeError::VertexOutOfRange {
            vertex: 4,
            vertex_count: 4
        }
    );
    assert_eq!(rng.draws(), 0);
}

#[rstest]
#[case(Labeling::Identity, 2)]
#[case(Labeling::Preorder, 0)]
fn rooted_generation_places_the_root(#[case] labeling: Labeling, #[case] expected_root: usize) {
    let generator = TreeGeneratorBuilder::new()
        .with_vertex_count(25)
        .with_shape(TreeShape::Skew { path: 5 })
        .with_relabel(Orientation::Shuffle)
        .build()
        .expect("configuration is valid");
    let rooted = generator
        .generate_rooted(&mut SeededSource::new(12), 2, labeling)
        .expect("generation succeeds");
    assert_eq!(rooted.root(), expected_root);
    assert_eq!(rooted.parent(expected_root), None);
    assert_eq!(rooted.edges().len(), 24);
}

proptest! {
    #![proptest_config(suite_proptest_config(48))]

    #[test]
    fn every_shape_yields_a_spanning_tree(
        half in 0_usize..60,
        shape_index in 0_usize..10,
        relabel in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let shape = all_shapes()[shape_index];
        // Odd counts from 3 upward satisfy every shape's constraints above.
        let vertex_count = 2 * half + 3;
        let builder = TreeGeneratorBuilder::new()
            .with_vertex_count(vertex_count)
            .with_shape(shape);
        let builder = if relabel {
            builder.with_relabel(Orientation::Shuffle)
        } else {
            builder
        };
        let generator = builder.build().expect("configuration is valid");
        let tree: Tree = generator
            .generate(&mut SeededSource::new(seed))
            .expect("generation succeeds");
        prop_assert_eq!(tree.vertex_count(), vertex_count);
        prop_assert_eq!(tree.edges().len(), vertex_count - 1);
        assert_spanning_tree(&tree);
    }
}
