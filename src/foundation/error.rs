use crate::foundation::ids::MediaId;

/// Convenience result type used across the engine.
pub type TimelineResult<T> = Result<T, TimelineError>;

/// Error taxonomy for core operations.
///
/// None of these are fatal: a failed operation leaves the session exactly as it
/// was before the call.
#[derive(thiserror::Error, Debug)]
pub enum TimelineError {
    /// Rejected geometry, time-range, form or configuration input.
    #[error("validation error: {0}")]
    Validation(String),

    /// The referenced media id is not (or no longer) in the composition.
    #[error("media not found: {0}")]
    NotFound(MediaId),

    /// Errors when serializing or deserializing session data.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TimelineError {
    /// Build a [`TimelineError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TimelineError::NotFound`] value.
    pub fn not_found(id: MediaId) -> Self {
        Self::NotFound(id)
    }

    /// Build a [`TimelineError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Whether this error is a [`TimelineError::Validation`].
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Whether this error is a [`TimelineError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<serde_json::Error> for TimelineError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
