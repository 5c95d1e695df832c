//! Error types for the core crate.

/// A required input was missing where the caller contract demands one.
///
/// Only the address classifiers produce this error. Every other classifier in
/// the toolkit answers an empty input with a verdict instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The named input was empty.
    #[error("required input is empty: {0}")]
    EmptyInput(&'static str),
}

/// Core error type for configuration and infrastructure setup.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A configuration value could not be interpreted.
    #[error("configuration error: {0}")]
    Config(String),

    /// An input failed a caller contract.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Internal error with context.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Convenience result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
