use super::init_test_logging;
use crate::{BinaryTree, TreeNode};
use proptest::prelude::*;

fn floor_log2(n: usize) -> isize {
    63 - (n as u64).leading_zeros() as isize
}

/// With level order insertion, the value inserted in position `i` (1-based) sits
/// where a binary heap stores index `i`: children of `i` are `2i` and `2i + 1`
fn assert_complete<T>(node: Option<&TreeNode<T>>, index: usize, len: usize) {
    match node {
        Some(node) => {
            assert!(index <= len, "node at index {} beyond len {}", index, len);
            assert_complete(node.left(), 2 * index, len);
            assert_complete(node.right(), 2 * index + 1, len);
        }
        None => assert!(index > len, "missing node at index {} (len {})", index, len),
    }
}

/// Recursive reference walks over the heap layout of `values`
fn reference_order(values: &[i16], index: usize, order: &str, out: &mut Vec<i16>) {
    if index > values.len() {
        return;
    }
    let value = values[index - 1];
    if order == "pre" {
        out.push(value);
    }
    reference_order(values, 2 * index, order, out);
    if order == "in" {
        out.push(value);
    }
    reference_order(values, 2 * index + 1, order, out);
    if order == "post" {
        out.push(value);
    }
}

fn reference(values: &[i16], order: &str) -> Vec<i16> {
    let mut out = Vec::with_capacity(values.len());
    reference_order(values, 1, order, &mut out);
    out
}

proptest! {
    #[test]
    fn size_and_level_order(values in proptest::collection::vec(any::<i16>(), 0..200)) {
        let tree: BinaryTree<_> = values.iter().cloned().collect();
        prop_assert_eq!(tree.len(), values.len());
        prop_assert_eq!(tree.is_empty(), values.is_empty());
        prop_assert_eq!(tree.bfs(), values.clone());
        assert_complete(tree.root(), 1, values.len());
    }

    #[test]
    fn height_is_floor_log2(len in 0usize..600) {
        let tree: BinaryTree<_> = (0..len).collect();
        let expected = if len == 0 { -1 } else { floor_log2(len) };
        prop_assert_eq!(tree.height(), expected);
    }

    #[test]
    fn depth_first_matches_recursion(values in proptest::collection::vec(any::<i16>(), 0..200)) {
        let tree: BinaryTree<_> = values.iter().cloned().collect();
        prop_assert_eq!(tree.dfs_pre_order(), reference(&values, "pre"));
        prop_assert_eq!(tree.dfs_in_order(), reference(&values, "in"));
        prop_assert_eq!(tree.dfs_post_order(), reference(&values, "post"));
    }

    #[test]
    fn search_and_depth_agree_with_bfs(
        values in proptest::collection::vec(0i16..50, 0..100),
        target in 0i16..60,
    ) {
        init_test_logging();
        let tree: BinaryTree<_> = values.iter().cloned().collect();
        let bfs = tree.bfs();
        prop_assert_eq!(tree.search(&target), bfs.contains(&target));

        let expected = match bfs.iter().position(|v| *v == target) {
            Some(position) => floor_log2(position + 1),
            None => -1,
        };
        prop_assert_eq!(tree.depth(&target), expected);
        prop_assert_eq!(tree.depth(&target) == -1, !tree.search(&target));
    }
}

#[test]
fn large_tree_walks() {
    let len = 4_000;
    let tree: BinaryTree<_> = (0..len).collect();
    assert_eq!(tree.iter_pre_order().count(), len);
    assert_eq!(tree.iter_in_order().count(), len);
    assert_eq!(tree.iter_post_order().count(), len);
    assert_eq!(tree.height(), floor_log2(len));
    assert_eq!(tree.depth(&(len - 1)), floor_log2(len));
}
