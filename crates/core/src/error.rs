//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic domain failures. Anything that is a
/// diagnostic rather than a failure (e.g. the unrecognized-item notice) is
/// reported through `tracing`, not through this type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An item attribute failed construction-time validation.
    #[error("invalid attribute: {0}")]
    InvalidAttribute(String),

    /// Applying the daily rules to one item failed. Isolated per item by
    /// the batch engine; never aborts the batch.
    #[error("update failed: {0}")]
    UpdateFailure(String),
}

impl DomainError {
    pub fn invalid_attribute(msg: impl Into<String>) -> Self {
        Self::InvalidAttribute(msg.into())
    }

    pub fn update_failure(msg: impl Into<String>) -> Self {
        Self::UpdateFailure(msg.into())
    }
}
