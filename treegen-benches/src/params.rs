//! Benchmark parameter types.
//!
//! Each struct renders as a compact Criterion parameter label.

use std::fmt;

use treegen_core::TreeShape;

/// Parameters for a tree generation benchmark run.
#[derive(Clone, Debug)]
pub struct GeneratorBenchParams {
    /// Shape family being generated.
    pub shape: TreeShape,
    /// Number of vertices in the generated tree.
    pub vertex_count: usize,
}

impl fmt::Display for GeneratorBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},n={}", self.shape, self.vertex_count)
    }
}

/// Parameters for a benchmark over an existing tree.
#[derive(Clone, Debug)]
pub struct OperationBenchParams {
    /// Number of vertices in the input tree.
    pub vertex_count: usize,
}

impl fmt::Display for OperationBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.vertex_count)
    }
}
