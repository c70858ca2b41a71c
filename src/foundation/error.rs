/// Result alias used across the crate.
pub type KeysplineResult<T> = Result<T, KeysplineError>;

/// Errors produced while constructing or sampling curves and animations.
#[derive(thiserror::Error, Debug)]
pub enum KeysplineError {
    /// Invalid curve or timing configuration (empty points, bad durations).
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid keyframe animation configuration reported by the builder.
    #[error("animation error: {0}")]
    Animation(String),

    /// Internal consistency failure; indicates a defect, not a caller mistake.
    #[error("internal error: {0}")]
    Internal(String),

    /// Any other error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KeysplineError {
    /// Build a [`KeysplineError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`KeysplineError::Animation`].
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`KeysplineError::Internal`].
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
