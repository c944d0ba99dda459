mod format;
mod node;
mod traversal;
mod tree;

pub use format::{LevelFormat, TreeDisplay};
pub use node::TreeNode;
pub use traversal::{DepthFirst, DepthFirstOrder, LevelOrder, Levels};
pub use tree::BinaryTree;

// Each child slot exclusively owns its subtree
type Link<T> = Option<Box<TreeNode<T>>>;
