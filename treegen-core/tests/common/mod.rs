use treegen_core::Tree;
use treegen_test_support::tree_oracle::check_spanning_tree;

/// Returns the edges of `tree` as `(source, target)` pairs in emission order.
#[must_use]
pub fn edge_pairs(tree: &Tree) -> Vec<(usize, usize)> {
    tree.edges()
        .iter()
        .map(|edge| (edge.source(), edge.target()))
        .collect()
}

/// Panics unless `tree` is a spanning tree according to the independent
/// oracle.
#[track_caller]
pub fn assert_spanning_tree(tree: &Tree) {
    if let Err(defect) = check_spanning_tree(tree.vertex_count(), &edge_pairs(tree)) {
        panic!(
            "expected a spanning tree on {} vertices: {defect}",
            tree.vertex_count()
        );
    }
}
