/// Convenience result type used across wobble.
pub type WobbleResult<T> = Result<T, WobbleError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum WobbleError {
    /// Invalid user-provided options or input data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Glyph images could not be found or prepared.
    #[error("asset error: {0}")]
    Asset(String),

    /// Errors while composing or post-processing a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while writing frames to an output file.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WobbleError {
    /// Build a [`WobbleError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`WobbleError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`WobbleError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`WobbleError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
