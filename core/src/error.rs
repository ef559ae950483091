use thiserror::Error;

/// Rejected input. Always recovered locally with no state change.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("path must not be empty")]
    EmptyPath,

    #[error("already bookmarked: {0}")]
    DuplicatePath(String),

    #[error("list name must not be empty")]
    EmptyName,

    #[error("list name is reserved: {0}")]
    ReservedName(String),

    #[error("invalid list name: {0}")]
    InvalidName(String),

    #[error("index {index} out of range (list has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("source and destination are both {0}")]
    SamePosition(usize),
}
