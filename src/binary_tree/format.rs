use super::BinaryTree;
use std::fmt;

/// Layout of the level-by-level tree dump
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelFormat {
    /// Written between two values of the same level
    pub delimiter: String,
    /// Spaces per indentation step. A level is indented by one step for every two
    /// nodes already discovered in the level below it
    pub indent: usize,
    /// Single line written for an empty tree
    pub empty: String,
}

impl Default for LevelFormat {
    fn default() -> Self {
        LevelFormat {
            delimiter: "   ".to_string(),
            indent: 3,
            empty: "Tree is empty".to_string(),
        }
    }
}

/// Display adapter returned by `BinaryTree::display_with`
pub struct TreeDisplay<'a, T> {
    tree: &'a BinaryTree<T>,
    format: LevelFormat,
}

impl<'a, T> TreeDisplay<'a, T> {
    pub(super) fn new(tree: &'a BinaryTree<T>, format: LevelFormat) -> Self {
        TreeDisplay { tree, format }
    }
}

impl<'a, T: fmt::Display> fmt::Display for TreeDisplay<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tree.is_empty() {
            return writeln!(f, "{}", self.format.empty);
        }

        let mut levels = self.tree.levels();
        while let Some(level) = levels.next() {
            let padding = self.format.indent * (levels.pending() / 2);
            write!(f, "{:width$}", "", width = padding)?;
            for (i, value) in level.iter().enumerate() {
                if i > 0 {
                    f.write_str(&self.format.delimiter)?;
                }
                write!(f, "{}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
