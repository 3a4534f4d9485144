//! Configured tree generation.
//!
//! Provides [`TreeGenerator`], the validated product of
//! [`TreeGeneratorBuilder`](crate::TreeGeneratorBuilder), which dispatches to
//! the selected generator and applies the optional relabel.

use std::num::NonZeroUsize;

use tracing::{debug, instrument};

use crate::{
    builder::TreeShape,
    error::Result,
    generators::{
        rand_binary_dyck, rand_binary_inversion_table, rand_caterpillar, rand_kary, rand_path,
        rand_skew_tree, rand_wheel, rand_with_kruskal_bounded, rand_with_prim, rand_with_prufer,
    },
    random::RandomSource,
    rooted::{Labeling, ParentArray},
    tree::{Orientation, Tree},
};

/// Generates trees of one validated configuration.
///
/// # Examples
/// ```
/// use treegen_core::{Labeling, SeededSource, TreeGeneratorBuilder, TreeShape};
///
/// let generator = TreeGeneratorBuilder::new()
///     .with_vertex_count(7)
///     .with_shape(TreeShape::Kary { k: 2 })
///     .build()
///     .expect("configuration is valid");
/// let rooted = generator
///     .generate_rooted(&mut SeededSource::new(0), 0, Labeling::Preorder)
///     .expect("generation succeeds");
/// assert_eq!(rooted.len(), 7);
/// assert_eq!(rooted.parent(0), None);
/// ```
#[derive(Clone, Debug)]
pub struct TreeGenerator {
    vertex_count: usize,
    shape: TreeShape,
    relabel: Option<Orientation>,
    kruskal_attempt_limit: Option<NonZeroUsize>,
}

impl TreeGenerator {
    pub(crate) fn new(
        vertex_count: usize,
        shape: TreeShape,
        relabel: Option<Orientation>,
        kruskal_attempt_limit: Option<NonZeroUsize>,
    ) -> Self {
        Self {
            vertex_count,
            shape,
            relabel,
            kruskal_attempt_limit,
        }
    }

    /// Returns the number of vertices in every generated tree.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the configured shape.
    #[must_use]
    #[rustfmt::skip]
    pub fn shape(&self) -> TreeShape { self.shape }

    /// Returns the relabeling policy applied after generation.
    #[must_use]
    #[rustfmt::skip]
    pub fn relabel(&self) -> Option<Orientation> { self.relabel }

    /// Returns the attempt limit passed to the Kruskal-style generator.
    #[must_use]
    #[rustfmt::skip]
    pub fn kruskal_attempt_limit(&self) -> Option<NonZeroUsize> { self.kruskal_attempt_limit }

    /// Generates one tree, drawing every random choice from `rng`.
    ///
    /// # Errors
    /// Returns [`crate::TreeError::AttemptLimitExceeded`] when a configured
    /// Kruskal limit runs out and [`crate::TreeError::InvariantViolation`]
    /// if a generator detects an internal defect. Parameter errors are
    /// rejected earlier by the builder.
    #[instrument(
        name = "treegen.generate",
        err,
        skip(self, rng),
        fields(
            vertex_count = self.vertex_count,
            shape = %self.shape,
            relabel = ?self.relabel,
        ),
    )]
    pub fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Tree> {
        let n = self.vertex_count;
        let mut tree = match self.shape {
            TreeShape::Prufer => rand_with_prufer(n, rng)?,
            TreeShape::Prim { elongation } => rand_with_prim(n, elongation, rng)?,
            TreeShape::Kruskal { elongation } => {
                rand_with_kruskal_bounded(n, elongation, self.kruskal_attempt_limit, rng)?
            }
            TreeShape::BinaryInversionTable => rand_binary_inversion_table(n, rng)?.into_tree(),
            TreeShape::BinaryDyck => rand_binary_dyck(n / 2, rng)?,
            TreeShape::Caterpillar { spine } => rand_caterpillar(n, spine, rng)?,
            TreeShape::Skew { path } => rand_skew_tree(n, path, rng)?,
            TreeShape::Path { width } => rand_path(n, width, rng)?,
            TreeShape::Kary { k } => rand_kary(n, k)?,
            TreeShape::Wheel { spokes } => rand_wheel(n, spokes)?,
        };
        if let Some(orientation) = self.relabel {
            tree.relabel(rng, orientation);
        }
        debug!(edges = tree.edges().len(), "tree generated");
        Ok(tree)
    }

    /// Generates one tree and roots it at `root`.
    ///
    /// # Errors
    /// Returns the errors of [`TreeGenerator::generate`], and
    /// [`crate::TreeError::VertexOutOfRange`] when `root` is not a vertex.
    #[instrument(
        name = "treegen.generate_rooted",
        err,
        skip(self, rng),
        fields(vertex_count = self.vertex_count),
    )]
    pub fn generate_rooted<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        root: usize,
        labeling: Labeling,
    ) -> Result<ParentArray> {
        crate::tree::check_vertex(root, self.vertex_count)?;
        self.generate(rng)?.to_rooted(root, labeling)
    }
}

#[cfg(test)]
mod tests;
