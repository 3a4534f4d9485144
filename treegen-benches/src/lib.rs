//! Benchmark support crate for treegen.
//!
//! Provides the parameter types and fixture builders shared by the Criterion
//! benchmarks for tree generation and tree operations.

pub mod fixtures;
pub mod params;
