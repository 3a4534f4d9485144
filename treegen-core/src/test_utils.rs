//! Shared test utilities for `treegen-core`.

use proptest::test_runner::Config as ProptestConfig;
use treegen_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::tree::Tree;

/// Builds a standard proptest configuration from the shared CI profile.
///
/// Every property suite in the crate reads `PROGTEST_CASES` and
/// `TREEGEN_PBT_FORK` through this helper.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Asserts that `tree` satisfies the spanning-tree invariant using the
/// independent oracle from `treegen-test-support`.
#[track_caller]
pub(crate) fn assert_spanning_tree(tree: &Tree) {
    let pairs: Vec<(usize, usize)> = tree
        .edges()
        .iter()
        .map(|edge| (edge.source(), edge.target()))
        .collect();
    if let Err(defect) = treegen_test_support::tree_oracle::check_spanning_tree(
        tree.vertex_count(),
        &pairs,
    ) {
        panic!("not a spanning tree on {} vertices: {defect}", tree.vertex_count());
    }
}
