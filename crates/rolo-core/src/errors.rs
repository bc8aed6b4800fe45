//! Cross-cutting error types for Rolodex.
//!
//! Storage errors (`DatabaseError`) and configuration errors (`ConfigError`)
//! live in their own crates. The `rolo` binary converges everything into
//! `anyhow::Error`.

use thiserror::Error;

/// Errors that can be raised by any Rolodex crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Input failed validation (length, format).
    #[error("Validation error: {field}: {reason}")]
    Validation { field: String, reason: String },

    /// The acting user lacks the role required for an operation.
    #[error("Forbidden: {0}")]
    Forbidden(String),
}

impl CoreError {
    pub fn not_found(entity_type: &str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }

    pub(crate) fn validation(field: &str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
