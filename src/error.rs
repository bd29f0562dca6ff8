use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A table needs at least one bucket.
    #[error("invalid capacity {0}: a table needs at least one bucket")]
    InvalidCapacity(usize),

    /// A ranked lookup must ask for at least one suggestion.
    #[error("invalid suggestion limit {0}: must be at least 1")]
    InvalidLimit(usize),

    /// Reading from a word source failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Rejection reasons for raw user input handed to `query::sanitize`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("empty query")]
    Empty,

    #[error("invalid character {ch:?} at position {position}: only ASCII letters are allowed")]
    InvalidChar { ch: char, position: usize },
}
