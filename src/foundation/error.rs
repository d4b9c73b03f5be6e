/// Convenience result type used across gridreel.
pub type GridreelResult<T> = Result<T, GridreelError>;

/// Top-level error taxonomy used by composition APIs.
///
/// Per-asset problems (a missing image file, an absent click sound) are never
/// errors: the affected element degrades to a placeholder or the audio event
/// is omitted, and composition continues. Only structural configuration
/// problems abort a call.
#[derive(thiserror::Error, Debug)]
pub enum GridreelError {
    /// A fixed layout was requested with an incompatible item count.
    #[error("layout error: {0}")]
    Layout(String),

    /// Invalid user-provided composition data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GridreelError {
    /// Build a [`GridreelError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`GridreelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
