/// Convenience result type used across xform2d.
pub type XformResult<T> = Result<T, XformError>;

/// Top-level error taxonomy for transform construction and application.
#[derive(thiserror::Error, Debug)]
pub enum XformError {
    /// Malformed caller input: wrong-length slice or empty operation queue.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation index outside the builder's queue.
    #[error("index {index} out of range for queue of length {len}")]
    OutOfRange {
        /// Requested operation index.
        index: usize,
        /// Queue length at the time of the call.
        len: usize,
    },

    /// The matrix has a zero determinant and no inverse exists.
    #[error("singular matrix: determinant is zero")]
    SingularMatrix,

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl XformError {
    /// Build an [`XformError::InvalidArgument`] value.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
