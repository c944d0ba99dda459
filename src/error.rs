use thiserror::Error;

/// Failures of the positional `LinkedList` operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("list is empty")]
    Empty,

    #[error("index {index} is out of bounds (size: {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
