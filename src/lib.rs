//! Generic linked data structures: a singly linked list, a queue, a stack and a
//! binary tree filled in level order.
//!
//! None of these structures synchronize internally. Wrap them in a lock to share
//! them between threads.

#[cfg(test)]
mod tests;

pub mod binary_tree;

pub mod error;

pub mod linked_list;

pub mod queue;

pub mod stack;

#[cfg(feature = "value-generator")]
pub mod value_generator;

pub use binary_tree::{BinaryTree, LevelFormat, TreeNode};
pub use error::{Error, Result};
pub use linked_list::LinkedList;
pub use queue::Queue;
pub use stack::Stack;
