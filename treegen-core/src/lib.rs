//! Treegen core library.
//!
//! Random labelled-tree generators for test-data pipelines, together with the
//! tree operations they need: Prüfer encoding and decoding, linking and
//! gluing trees, random relabeling and conversion to rooted parent arrays.
//!
//! Every random choice is drawn from a caller-supplied [`RandomSource`], so a
//! tree is reproducible from its seed or fully scripted in tests.
//!
//! # Examples
//! ```
//! use treegen_core::{Labeling, Orientation, SeededSource, rand_with_prufer};
//!
//! let mut rng = SeededSource::new(7);
//! let mut tree = rand_with_prufer(10, &mut rng).expect("n >= 1");
//! tree.relabel(&mut rng, Orientation::Shuffle);
//! let rooted = tree.to_rooted(0, Labeling::Preorder).expect("root is a vertex");
//! assert!((1..10).all(|v| rooted.parent(v).is_some_and(|p| p < v)));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod error;
mod generator;
mod generators;
mod merge;
mod prufer;
mod random;
mod rooted;
#[cfg(test)]
mod test_utils;
mod tree;
mod union_find;

pub use crate::{
    builder::{TreeGeneratorBuilder, TreeShape},
    error::{Result, TreeError, TreeErrorCode},
    generator::TreeGenerator,
    generators::{
        InversionTree, rand_binary_dyck, rand_binary_inversion_table, rand_caterpillar, rand_kary,
        rand_path, rand_skew_tree, rand_wheel, rand_with_kruskal, rand_with_kruskal_bounded,
        rand_with_prim, rand_with_prufer,
    },
    random::{RandomSource, ScriptedSource, SeededSource, WNEXT_EXACT_LIMIT, shuffle},
    rooted::{Labeling, ParentArray, convert_to_rooted},
    tree::{Edge, Orientation, Tree},
};
