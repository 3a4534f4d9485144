//! Generator configurations shared by the benchmarks.

use treegen_core::{Result, SeededSource, Tree, TreeGenerator, TreeGeneratorBuilder, TreeShape};

/// Seed used for every benchmark input so runs are comparable.
pub const BENCH_SEED: u64 = 0x5eed_7ee5;

/// Returns one representative configuration per shape family for
/// `vertex_count` vertices.
///
/// Shape parameters scale with the tree so that the larger sizes exercise the
/// same structure as the smaller ones.
#[must_use]
pub fn representative_shapes(vertex_count: usize) -> Vec<TreeShape> {
    let spine = (vertex_count / 4).max(3).min(vertex_count);
    vec![
        TreeShape::Prufer,
        TreeShape::Prim { elongation: 0 },
        TreeShape::Prim { elongation: 8 },
        TreeShape::Kruskal { elongation: 0 },
        TreeShape::BinaryInversionTable,
        TreeShape::Caterpillar { spine },
        TreeShape::Skew {
            path: vertex_count.div_ceil(2),
        },
        TreeShape::Path { width: 4 },
        TreeShape::Kary { k: 4 },
        TreeShape::Wheel {
            spokes: vertex_count.div_ceil(8).max(1),
        },
    ]
}

/// Builds a generator for `shape` over `vertex_count` vertices.
///
/// # Errors
/// Returns the builder's validation error when the shape does not fit the
/// vertex count.
pub fn generator_for(shape: TreeShape, vertex_count: usize) -> Result<TreeGenerator> {
    TreeGeneratorBuilder::new()
        .with_vertex_count(vertex_count)
        .with_shape(shape)
        .build()
}

/// Generates the uniform random tree used as input by the operation
/// benchmarks.
///
/// # Errors
/// Returns [`treegen_core::TreeError::EmptyTree`] when `vertex_count` is zero.
pub fn sample_tree(vertex_count: usize) -> Result<Tree> {
    generator_for(TreeShape::Prufer, vertex_count)?.generate(&mut SeededSource::new(BENCH_SEED))
}
