//! Typed errors for the classification library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur in the classification pipeline.
///
/// Every error is terminal for the current request: nothing is retried
/// internally, and each kind maps to a single HTTP status class at the
/// boundary (see [`ClassificationError::is_client_error`]).
#[derive(Debug, Error)]
pub enum ClassificationError {
    /// Input content too short to classify meaningfully
    #[error("email content must have at least {min} characters")]
    TooShortInput { min: usize },

    /// File format outside the allow-list
    #[error("unsupported file format: {extension} (allowed: .txt, .pdf)")]
    UnsupportedFormat { extension: String },

    /// Uploaded document could not be parsed
    #[error("failed to parse PDF document: {0}")]
    DocumentParse(String),

    /// Missing or invalid service configuration
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Completion provider failed (transport, auth, quota)
    #[error("completion service error: {0}")]
    CompletionService(String),

    /// Model output is not valid JSON after fence unwrapping
    #[error("model response is not valid JSON: {0}")]
    MalformedResponse(String),

    /// Model output is valid JSON but missing required fields
    #[error("model response violates the expected schema: {0}")]
    SchemaViolation(String),
}

impl ClassificationError {
    /// Whether the error is correctable by the caller (HTTP 400 class).
    ///
    /// Everything else is a configuration, provider, or parse problem
    /// (HTTP 500 class).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::TooShortInput { .. } | Self::UnsupportedFormat { .. } | Self::DocumentParse(_)
        )
    }
}

/// Result type alias for classification operations.
pub type Result<T> = std::result::Result<T, ClassificationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_are_the_400_class() {
        assert!(ClassificationError::TooShortInput { min: 25 }.is_client_error());
        assert!(ClassificationError::UnsupportedFormat {
            extension: ".docx".into()
        }
        .is_client_error());
        assert!(ClassificationError::DocumentParse("bad xref".into()).is_client_error());
    }

    #[test]
    fn test_provider_errors_are_the_500_class() {
        assert!(!ClassificationError::Configuration("no key".into()).is_client_error());
        assert!(!ClassificationError::CompletionService("quota".into()).is_client_error());
        assert!(!ClassificationError::MalformedResponse("eof".into()).is_client_error());
        assert!(!ClassificationError::SchemaViolation("missing field".into()).is_client_error());
    }
}
