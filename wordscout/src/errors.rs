use thiserror::Error;

/// Result type for grid construction and configuration loading
pub type GridResult<T> = Result<T, GridError>;

/// Errors that can occur while building a word matrix.
///
/// Construction is the only fallible operation in the crate: `find` treats
/// every malformed input as "no match" and returns an empty result instead
/// of failing. An `InvalidGrid` message is the space-joined concatenation of
/// every violation found, so callers can detect each failure reason by
/// substring containment:
///
/// ```rust,ignore
/// match WordMatrix::new(rows) {
///     Ok(matrix) => // Search it,
///     Err(e) if e.to_string().contains("too many rows") => // Oversized,
///     Err(e) => // Other structural problem
/// }
/// ```
#[derive(Error, Debug)]
pub enum GridError {
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl GridError {
    pub fn invalid_grid(msg: impl Into<String>) -> Self {
        Self::InvalidGrid(msg.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
