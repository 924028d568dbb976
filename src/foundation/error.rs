/// Convenience result type used across chessmotion.
pub type ChessmotionResult<T> = Result<T, ChessmotionError>;

/// Top-level error taxonomy used by library APIs.
///
/// Only input that makes a whole run meaningless is an error. Per-move problems are
/// reported as [`crate::Diagnostic`] values on the compiled timeline instead.
#[derive(thiserror::Error, Debug)]
pub enum ChessmotionError {
    /// Malformed FEN piece-placement field.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// Invalid user-provided settings or document data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChessmotionError {
    /// Build a [`ChessmotionError::InvalidFen`] value.
    pub fn invalid_fen(msg: impl Into<String>) -> Self {
        Self::InvalidFen(msg.into())
    }

    /// Build a [`ChessmotionError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ChessmotionError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
