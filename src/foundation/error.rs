/// Convenience result type used across arbooth.
pub type BoothResult<T> = Result<T, BoothError>;

/// Top-level error taxonomy used by the compositing pipeline.
#[derive(thiserror::Error, Debug)]
pub enum BoothError {
    /// A pixel source or buffer reported zero, negative, or oversized dimensions.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// An asynchronously loaded resource (logo, font) is not available yet.
    #[error("resource not ready: {0}")]
    ResourceNotReady(String),

    /// The composited buffer could not be serialized.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// The camera collaborator failed to start or switch.
    #[error("device error: {0}")]
    Device(String),

    /// Invalid user-provided configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BoothError {
    /// Build a [`BoothError::InvalidDimensions`] value.
    pub fn invalid_dimensions(msg: impl Into<String>) -> Self {
        Self::InvalidDimensions(msg.into())
    }

    /// Build a [`BoothError::ResourceNotReady`] value.
    pub fn not_ready(msg: impl Into<String>) -> Self {
        Self::ResourceNotReady(msg.into())
    }

    /// Build a [`BoothError::Encoding`] value.
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    /// Build a [`BoothError::Device`] value.
    pub fn device(msg: impl Into<String>) -> Self {
        Self::Device(msg.into())
    }

    /// Build a [`BoothError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BoothError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
