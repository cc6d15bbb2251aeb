/// Convenience result alias used by the checked surface layer.
pub type BlitResult<T> = Result<T, BlitError>;

/// Errors reported by the checked framebuffer and batch entry points.
///
/// The engine itself (`PixelOps`) never fails; these only surface where a
/// caller hands us sizes, coordinates or configuration that we can validate.
#[derive(thiserror::Error, Debug)]
pub enum BlitError {
    /// Invalid configuration or buffer geometry.
    #[error("validation error: {0}")]
    Validation(String),

    /// A span or coordinate falls outside the framebuffer.
    #[error("bounds error: {0}")]
    Bounds(String),

    /// PNG encoding / image conversion failure.
    #[error("image error: {0}")]
    Image(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BlitError {
    /// Build a [`BlitError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BlitError::Bounds`].
    pub fn bounds(msg: impl Into<String>) -> Self {
        Self::Bounds(msg.into())
    }
}

impl From<image::ImageError> for BlitError {
    fn from(e: image::ImageError) -> Self {
        Self::Image(e.to_string())
    }
}

impl From<serde_json::Error> for BlitError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
