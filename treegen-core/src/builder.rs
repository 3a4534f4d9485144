//! Builder for configuring [`TreeGenerator`] instances.
//!
//! The builder collects the vertex count, the shape and its parameters, the
//! relabeling policy and the Kruskal attempt limit, then validates all of
//! them in [`TreeGeneratorBuilder::build`] so generation never fails on a
//! parameter the caller could have checked up front.

use std::{fmt, num::NonZeroUsize};

use crate::{
    error::Result,
    generator::TreeGenerator,
    generators::{
        check_caterpillar, check_kary, check_path, check_skew_tree, check_wheel,
        require_parameter, require_vertices,
    },
    tree::Orientation,
};

/// Selects the generator a [`TreeGenerator`] runs, together with its shape
/// parameters.
///
/// # Examples
/// ```
/// use treegen_core::TreeShape;
///
/// let shape = TreeShape::Caterpillar { spine: 5 };
/// assert_eq!(shape.name(), "caterpillar");
/// assert_eq!(TreeShape::default(), TreeShape::Prufer);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum TreeShape {
    /// Uniform labelled tree via a random Prüfer sequence.
    #[default]
    Prufer,
    /// Prim-style attachment to a weighted earlier vertex.
    Prim {
        /// Bias passed to the weighted parent draw.
        elongation: i64,
    },
    /// Kruskal-style joining of random vertex pairs.
    Kruskal {
        /// Bias passed to the weighted offset draw.
        elongation: i64,
    },
    /// Binary tree from a random inversion table.
    BinaryInversionTable,
    /// Full binary tree from a random Dyck word; needs an odd vertex count.
    BinaryDyck,
    /// Spine with leaves hanging off its interior.
    Caterpillar {
        /// Number of spine vertices.
        spine: usize,
    },
    /// Long path with the remaining vertices attached at random.
    Skew {
        /// Number of vertices on the guaranteed path.
        path: usize,
    },
    /// Each vertex attaches to one of the preceding `width` vertices.
    Path {
        /// Size of the attachment window.
        width: usize,
    },
    /// Deterministic `k`-ary tree.
    Kary {
        /// Maximum number of children per vertex.
        k: usize,
    },
    /// Hub with `spokes` paths radiating from it.
    Wheel {
        /// Number of paths leaving the hub.
        spokes: usize,
    },
}

impl TreeShape {
    /// Returns a stable lowercase name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Prufer => "prufer",
            Self::Prim { .. } => "prim",
            Self::Kruskal { .. } => "kruskal",
            Self::BinaryInversionTable => "binary_inversion_table",
            Self::BinaryDyck => "binary_dyck",
            Self::Caterpillar { .. } => "caterpillar",
            Self::Skew { .. } => "skew_tree",
            Self::Path { .. } => "path",
            Self::Kary { .. } => "kary",
            Self::Wheel { .. } => "wheel",
        }
    }

    /// Returns `true` when the shape consumes no randomness.
    #[must_use]
    pub const fn is_deterministic(self) -> bool {
        matches!(self, Self::Kary { .. } | Self::Wheel { .. })
    }
}

impl fmt::Display for TreeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configures and constructs [`TreeGenerator`] instances.
///
/// Defaults to a single vertex, the [`TreeShape::Prufer`] shape, no
/// relabeling and no Kruskal attempt limit.
///
/// # Examples
/// ```
/// use treegen_core::{Orientation, SeededSource, TreeGeneratorBuilder, TreeShape};
///
/// let generator = TreeGeneratorBuilder::new()
///     .with_vertex_count(16)
///     .with_shape(TreeShape::Prim { elongation: 3 })
///     .with_relabel(Orientation::Shuffle)
///     .build()
///     .expect("configuration is valid");
/// let tree = generator
///     .generate(&mut SeededSource::new(42))
///     .expect("generation succeeds");
/// assert_eq!(tree.edges().len(), 15);
/// ```
#[derive(Clone, Debug)]
pub struct TreeGeneratorBuilder {
    vertex_count: usize,
    shape: TreeShape,
    relabel: Option<Orientation>,
    kruskal_attempt_limit: Option<NonZeroUsize>,
}

impl Default for TreeGeneratorBuilder {
    fn default() -> Self {
        Self {
            vertex_count: 1,
            shape: TreeShape::Prufer,
            relabel: None,
            kruskal_attempt_limit: None,
        }
    }
}

impl TreeGeneratorBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use treegen_core::{TreeGeneratorBuilder, TreeShape};
    ///
    /// let builder = TreeGeneratorBuilder::new();
    /// assert_eq!(builder.vertex_count(), 1);
    /// assert_eq!(builder.shape(), TreeShape::Prufer);
    /// assert_eq!(builder.relabel(), None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of vertices to generate.
    #[must_use]
    pub fn with_vertex_count(mut self, vertex_count: usize) -> Self {
        self.vertex_count = vertex_count;
        self
    }

    /// Returns the configured vertex count.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Selects the generator and its parameters.
    #[must_use]
    pub fn with_shape(mut self, shape: TreeShape) -> Self {
        self.shape = shape;
        self
    }

    /// Returns the configured shape.
    #[must_use]
    #[rustfmt::skip]
    pub fn shape(&self) -> TreeShape { self.shape }

    /// Relabels every generated tree with a random permutation, treating
    /// edge orientation as `orientation` specifies.
    #[must_use]
    pub fn with_relabel(mut self, orientation: Orientation) -> Self {
        self.relabel = Some(orientation);
        self
    }

    /// Returns generated trees with the labels the generator assigned.
    #[must_use]
    pub fn without_relabel(mut self) -> Self {
        self.relabel = None;
        self
    }

    /// Returns the configured relabeling policy, if any.
    #[must_use]
    #[rustfmt::skip]
    pub fn relabel(&self) -> Option<Orientation> { self.relabel }

    /// Caps the number of pairs the Kruskal-style generator may draw.
    ///
    /// Only [`TreeShape::Kruskal`] consults the limit.
    #[must_use]
    pub fn with_kruskal_attempt_limit(mut self, limit: NonZeroUsize) -> Self {
        self.kruskal_attempt_limit = Some(limit);
        self
    }

    /// Returns the configured Kruskal attempt limit, if any.
    #[must_use]
    #[rustfmt::skip]
    pub fn kruskal_attempt_limit(&self) -> Option<NonZeroUsize> { self.kruskal_attempt_limit }

    /// Validates the configuration and constructs a [`TreeGenerator`].
    ///
    /// # Errors
    /// Returns [`crate::TreeError::EmptyTree`] when the vertex count is zero
    /// and [`crate::TreeError::InvalidParameter`] when a shape parameter is
    /// outside its domain, including an even vertex count for
    /// [`TreeShape::BinaryDyck`].
    ///
    /// # Examples
    /// ```
    /// use treegen_core::{TreeErrorCode, TreeGeneratorBuilder, TreeShape};
    ///
    /// let err = TreeGeneratorBuilder::new()
    ///     .with_vertex_count(8)
    ///     .with_shape(TreeShape::BinaryDyck)
    ///     .build()
    ///     .expect_err("full binary trees have an odd vertex count");
    /// assert_eq!(err.code(), TreeErrorCode::InvalidParameter);
    /// ```
    pub fn build(self) -> Result<TreeGenerator> {
        validate_shape(self.vertex_count, self.shape)?;
        Ok(TreeGenerator::new(
            self.vertex_count,
            self.shape,
            self.relabel,
            self.kruskal_attempt_limit,
        ))
    }
}

fn validate_shape(vertex_count: usize, shape: TreeShape) -> Result<()> {
    match shape {
        TreeShape::Prufer
        | TreeShape::Prim { .. }
        | TreeShape::Kruskal { .. }
        | TreeShape::BinaryInversionTable => require_vertices(vertex_count),
        TreeShape::BinaryDyck => {
            require_vertices(vertex_count)?;
            require_parameter(
                vertex_count % 2 == 1,
                "binary_dyck",
                "vertex_count",
                "odd",
                vertex_count,
            )
        }
        TreeShape::Caterpillar { spine } => check_caterpillar(vertex_count, spine),
        TreeShape::Skew { path } => check_skew_tree(vertex_count, path),
        TreeShape::Path { width } => check_path(vertex_count, width),
        TreeShape::Kary { k } => check_kary(vertex_count, k),
        TreeShape::Wheel { spokes } => check_wheel(vertex_count, spokes),
    }
}
