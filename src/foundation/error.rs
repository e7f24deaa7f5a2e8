/// Convenience result type used across the crate.
pub type AnnotateResult<T> = Result<T, AnnotateError>;

/// Error taxonomy for annotation APIs.
///
/// Only [`AnnotateError::InvalidInput`], [`AnnotateError::Config`] and [`AnnotateError::Serde`]
/// ever reach callers of [`crate::FrameAnnotator::render`]. Font and outline failures are
/// recovered inside the renderer and reported through `tracing`.
#[derive(thiserror::Error, Debug)]
pub enum AnnotateError {
    /// Malformed image batch (wrong rank, channel count or frame dimensions).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Render configuration outside of its accepted ranges.
    #[error("config error: {0}")]
    Config(String),

    /// A font candidate could not be found or parsed.
    #[error("font unavailable: {0}")]
    FontUnavailable(String),

    /// The resolved font cannot be drawn with an outline stroke.
    #[error("outline unsupported: {0}")]
    OutlineUnsupported(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AnnotateError {
    /// Build an [`AnnotateError::InvalidInput`] value.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Build an [`AnnotateError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build an [`AnnotateError::FontUnavailable`] value.
    pub fn font_unavailable(msg: impl Into<String>) -> Self {
        Self::FontUnavailable(msg.into())
    }

    /// Build an [`AnnotateError::OutlineUnsupported`] value.
    pub fn outline_unsupported(msg: impl Into<String>) -> Self {
        Self::OutlineUnsupported(msg.into())
    }

    /// Build an [`AnnotateError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
