//! Error types for the engines

use thiserror::Error;

/// Result type alias using our EngineError
pub type Result<T> = std::result::Result<T, EngineError>;

/// Main error type for engine operations
#[derive(Error, Debug)]
pub enum EngineError {
    /// Referenced record does not exist
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Malformed or out-of-range input, rejected before any mutation
    #[error("Validation error: {0}")]
    Validation(String),

    /// A price source failed or timed out
    #[error("Price source {source_name} unavailable: {reason}")]
    SourceUnavailable { source_name: String, reason: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON serialization/deserialization errors
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Filesystem errors while reading record snapshots
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl EngineError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn source_unavailable(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// Hard stops abort the call; a degraded source only lowers confidence
    pub fn is_hard_stop(&self) -> bool {
        !matches!(self, Self::SourceUnavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = EngineError::not_found("inventory item", "42");
        assert_eq!(err.to_string(), "inventory item not found: 42");
        assert!(err.is_hard_stop());
    }

    #[test]
    fn test_source_unavailable_is_not_hard_stop() {
        let err = EngineError::source_unavailable("retail", "timed out after 2000ms");
        assert!(!err.is_hard_stop());
        assert!(err.to_string().contains("retail"));
    }
}
