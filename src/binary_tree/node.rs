use super::Link;
use crate::queue::Queue;
use std::cmp;

#[derive(Clone, Debug)]
pub struct TreeNode<T> {
    pub(super) value: T,
    pub(super) left: Link<T>,
    pub(super) right: Link<T>,
}

impl<T> TreeNode<T> {
    pub(super) fn new(value: T) -> Self {
        TreeNode {
            value,
            left: None,
            right: None,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn left(&self) -> Option<&TreeNode<T>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&TreeNode<T>> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Present children, left first
    pub(super) fn children(&self) -> impl Iterator<Item = &TreeNode<T>> {
        self.left().into_iter().chain(self.right())
    }

    /// Number of edges on the longest path down to a leaf. A leaf has height 0
    pub fn height(&self) -> isize {
        1 + cmp::max(height_of(self.left()), height_of(self.right()))
    }

    /// Attach `leaf` at the first free child slot found in level order below this node,
    /// left slots before right ones. Return the level (relative to this node) where it landed
    pub(super) fn attach(&mut self, leaf: Box<TreeNode<T>>) -> usize {
        let mut pending: Queue<(&mut TreeNode<T>, usize)> = Queue::new();
        pending.enqueue((self, 0));

        while let Some((node, level)) = pending.dequeue() {
            if node.left.is_none() {
                node.left = Some(leaf);
                return level + 1;
            }
            if node.right.is_none() {
                node.right = Some(leaf);
                return level + 1;
            }
            if let (Some(left), Some(right)) = (node.left.as_deref_mut(), node.right.as_deref_mut())
            {
                pending.enqueue((left, level + 1));
                pending.enqueue((right, level + 1));
            }
        }

        unreachable!("no free slot found below a finite tree")
    }
}

/// Height of an optional subtree, where an absent one counts as -1
fn height_of<T>(node: Option<&TreeNode<T>>) -> isize {
    node.map_or(-1, TreeNode::height)
}
