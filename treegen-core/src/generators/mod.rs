//! Random tree generators.
//!
//! Every generator takes the vertex count first and the random source last,
//! returns a [`Tree`](crate::Tree) with exactly `n - 1` edges, and reports
//! parameter violations as [`TreeError`] before drawing any randomness.

mod binary;
mod kruskal;
mod prim;
mod prufer;
mod shapes;

pub use binary::{InversionTree, rand_binary_dyck, rand_binary_inversion_table};
pub use kruskal::{rand_with_kruskal, rand_with_kruskal_bounded};
pub use prim::rand_with_prim;
pub use prufer::rand_with_prufer;
pub use shapes::{rand_caterpillar, rand_kary, rand_path, rand_skew_tree, rand_wheel};
pub(crate) use shapes::{check_caterpillar, check_kary, check_path, check_skew_tree, check_wheel};

use tracing::error;

use crate::error::{Result, TreeError};

/// Rejects a zero vertex count.
pub(crate) fn require_vertices(vertex_count: usize) -> Result<()> {
    if vertex_count == 0 {
        Err(TreeError::EmptyTree)
    } else {
        Ok(())
    }
}

/// Returns [`TreeError::InvalidParameter`] unless `holds`.
pub(crate) fn require_parameter(
    holds: bool,
    generator: &'static str,
    parameter: &'static str,
    constraint: &'static str,
    got: usize,
) -> Result<()> {
    if holds {
        Ok(())
    } else {
        Err(TreeError::InvalidParameter {
            generator,
            parameter,
            constraint,
            got,
        })
    }
}

/// Logs and builds an internal invariant failure.
pub(crate) fn invariant_violation(algorithm: &'static str, invariant: &'static str) -> TreeError {
    error!(algorithm, invariant, "tree generator invariant violated");
    TreeError::InvariantViolation {
        algorithm,
        invariant,
    }
}
