use super::{BinaryTree, TreeNode};
use crate::queue::Queue;
use std::iter::FusedIterator;

/// Queue the tree root, if any, as the starting point of a breadth-first walk
fn start_queue<T>(tree: &BinaryTree<T>) -> Queue<&TreeNode<T>> {
    let mut pending = Queue::new();
    if let Some(root) = tree.root() {
        pending.enqueue(root);
    }
    pending
}

/// Breadth-first iterator: root first, then each level from left to right
pub struct LevelOrder<'a, T> {
    pending: Queue<&'a TreeNode<T>>,
    len: usize,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(super) fn new(tree: &'a BinaryTree<T>) -> Self {
        LevelOrder {
            pending: start_queue(tree),
            len: tree.len(),
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.dequeue()?;
        for child in node.children() {
            self.pending.enqueue(child);
        }
        self.len -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> ExactSizeIterator for LevelOrder<'a, T> {}
impl<'a, T> FusedIterator for LevelOrder<'a, T> {}

/// Breadth-first iterator that drains one whole level at a time.
/// Each item holds the values of a level, from left to right
pub struct Levels<'a, T> {
    pending: Queue<&'a TreeNode<T>>,
}

impl<'a, T> Levels<'a, T> {
    pub(super) fn new(tree: &'a BinaryTree<T>) -> Self {
        Levels {
            pending: start_queue(tree),
        }
    }

    /// Number of nodes already discovered for the next level
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl<'a, T> Iterator for Levels<'a, T> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending.is_empty() {
            return None;
        }

        let width = self.pending.len();
        let mut level = Vec::with_capacity(width);
        for _ in 0..width {
            if let Some(node) = self.pending.dequeue() {
                level.push(&node.value);
                for child in node.children() {
                    self.pending.enqueue(child);
                }
            }
        }
        Some(level)
    }
}

impl<'a, T> FusedIterator for Levels<'a, T> {}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DepthFirstOrder {
    /// Node, then left subtree, then right subtree
    PreOrder,
    /// Left subtree, then node, then right subtree
    InOrder,
    /// Left subtree, then right subtree, then node
    PostOrder,
}

/// What remains to be done for a node in the depth-first walk
#[derive(Copy, Clone)]
enum Visit {
    Enter,
    LeftDone,
    RightDone,
}

struct Frame<'a, T> {
    node: &'a TreeNode<T>,
    visit: Visit,
}

impl<'a, T> Frame<'a, T> {
    fn enter(node: &'a TreeNode<T>) -> Self {
        Frame {
            node,
            visit: Visit::Enter,
        }
    }
}

/// Depth-first iterator. Recursion is replaced by an explicit stack of frames,
/// so arbitrarily deep trees can be walked
pub struct DepthFirst<'a, T> {
    order: DepthFirstOrder,
    /// Path from the root to the current node
    stack: Vec<Frame<'a, T>>,
    len: usize,
}

impl<'a, T> DepthFirst<'a, T> {
    pub(super) fn new(tree: &'a BinaryTree<T>, order: DepthFirstOrder) -> Self {
        DepthFirst {
            order,
            stack: tree.root().map(Frame::enter).into_iter().collect(),
            len: tree.len(),
        }
    }

    pub fn order(&self) -> DepthFirstOrder {
        self.order
    }
}

impl<'a, T> Iterator for DepthFirst<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.last_mut() {
            let node = frame.node;
            // Advance the frame, descend if needed and decide whether the node is due now
            let emit = match frame.visit {
                Visit::Enter => {
                    frame.visit = Visit::LeftDone;
                    if let Some(left) = node.left() {
                        self.stack.push(Frame::enter(left));
                    }
                    self.order == DepthFirstOrder::PreOrder
                }
                Visit::LeftDone => {
                    frame.visit = Visit::RightDone;
                    if let Some(right) = node.right() {
                        self.stack.push(Frame::enter(right));
                    }
                    self.order == DepthFirstOrder::InOrder
                }
                Visit::RightDone => {
                    self.stack.pop();
                    self.order == DepthFirstOrder::PostOrder
                }
            };

            if emit {
                self.len -= 1;
                return Some(&node.value);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> ExactSizeIterator for DepthFirst<'a, T> {}
impl<'a, T> FusedIterator for DepthFirst<'a, T> {}
