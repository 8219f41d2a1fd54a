/// Convenience result type used across the crate.
pub type GgmResult<T> = Result<T, GgmError>;

/// Top-level error taxonomy used by the public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GgmError {
    /// Matrix input whose rows do not form a square grid.
    #[error("invalid shape: {0}")]
    InvalidShape(String),

    /// Zero-dimensional input handed to an operation that needs at least one node.
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// Invalid user-provided scene or parameter data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GgmError {
    /// Build a [`GgmError::InvalidShape`] value.
    pub fn invalid_shape(msg: impl Into<String>) -> Self {
        Self::InvalidShape(msg.into())
    }

    /// Build a [`GgmError::EmptyInput`] value.
    pub fn empty_input(msg: impl Into<String>) -> Self {
        Self::EmptyInput(msg.into())
    }

    /// Build a [`GgmError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GgmError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
