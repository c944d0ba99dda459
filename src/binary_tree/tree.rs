use super::format::{LevelFormat, TreeDisplay};
use super::node::TreeNode;
use super::traversal::{DepthFirst, DepthFirstOrder, LevelOrder, Levels};
use super::Link;
use std::fmt;
use tracing::{debug, trace};

/// A binary tree filled in level order.
///
/// This is not a search tree: values are never compared for ordering. Each new value
/// takes the first free slot in level order (left before right), so the tree is always
/// complete and its height is `floor(log2(len))`
#[derive(Clone, Debug)]
pub struct BinaryTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> BinaryTree<T> {
    pub fn new() -> Self {
        BinaryTree { root: None, len: 0 }
    }

    /// Return the total number of values in the tree
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drop every node
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    pub fn root(&self) -> Option<&TreeNode<T>> {
        self.root.as_deref()
    }

    /// Insert a new value at the first free slot in level order
    pub fn insert(&mut self, value: T) {
        let leaf = Box::new(TreeNode::new(value));
        if let Some(root) = self.root.as_deref_mut() {
            let level = root.attach(leaf);
            trace!(level, len = self.len + 1, "attached node");
        } else {
            self.root = Some(leaf);
            trace!("attached root");
        }
        self.len += 1;
    }

    /// Return whether some node holds a value equal to `value`
    pub fn search(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter_level_order().any(|v| v == value)
    }

    /// Values in level order
    pub fn bfs(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter_level_order().cloned().collect()
    }

    /// Values in pre-order: node, left subtree, right subtree
    pub fn dfs_pre_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter_pre_order().cloned().collect()
    }

    /// Values in in-order: left subtree, node, right subtree
    pub fn dfs_in_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter_in_order().cloned().collect()
    }

    /// Values in post-order: left subtree, right subtree, node
    pub fn dfs_post_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter_post_order().cloned().collect()
    }

    /// Number of edges from the root to the deepest leaf: -1 for an empty tree and
    /// 0 for a tree with a single node
    pub fn height(&self) -> isize {
        self.root().map_or(-1, TreeNode::height)
    }

    /// Level (the root is at level 0) of the first node holding `value` in level order,
    /// or -1 if there is no such node
    pub fn depth(&self, value: &T) -> isize
    where
        T: PartialEq,
    {
        self.level_of(value).map_or(-1, |level| level as isize)
    }

    /// Same as `depth`, without the sentinel
    pub fn level_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.levels()
            .position(|level| level.iter().any(|v| *v == value))
    }

    /// Print every level on its own line to the standard output
    pub fn print_tree(&self)
    where
        T: fmt::Display,
    {
        debug!(len = self.len, height = self.height(), "printing tree");
        print!("{}", self);
    }

    /// Render the levels with a custom layout
    pub fn display_with(&self, format: LevelFormat) -> TreeDisplay<T> {
        TreeDisplay::new(self, format)
    }

    pub fn iter_level_order(&self) -> LevelOrder<T> {
        LevelOrder::new(self)
    }

    /// Iterate over the levels, each one as a vector of values from left to right
    pub fn levels(&self) -> Levels<T> {
        Levels::new(self)
    }

    pub fn iter_depth_first(&self, order: DepthFirstOrder) -> DepthFirst<T> {
        DepthFirst::new(self, order)
    }

    pub fn iter_pre_order(&self) -> DepthFirst<T> {
        self.iter_depth_first(DepthFirstOrder::PreOrder)
    }

    pub fn iter_in_order(&self) -> DepthFirst<T> {
        self.iter_depth_first(DepthFirstOrder::InOrder)
    }

    pub fn iter_post_order(&self) -> DepthFirst<T> {
        self.iter_depth_first(DepthFirstOrder::PostOrder)
    }
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::iter::FromIterator<T> for BinaryTree<T> {
    /// Create a tree inserting the values in iteration order
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinaryTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for BinaryTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: fmt::Display> fmt::Display for BinaryTree<T> {
    /// Same layout as `print_tree`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(LevelFormat::default()), f)
    }
}
