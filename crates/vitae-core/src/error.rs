//! Error types for vitae operations.

use thiserror::Error;

/// Result type alias for vitae operations.
pub type VitaeResult<T> = Result<T, VitaeError>;

/// Main error type for vitae operations outside the parsing core.
///
/// Document parsing has its own error taxonomy in `vitae-extractors`;
/// this type covers configuration and the LLM-facing layer.
#[derive(Error, Debug)]
pub enum VitaeError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// LLM operation failed.
    #[error("LLM error: {message}")]
    Llm {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// LLM returned content that could not be interpreted.
    #[error("Invalid LLM response: {0}")]
    InvalidResponse(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl VitaeError {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create an LLM error without a source.
    pub fn llm(message: impl Into<String>) -> Self {
        Self::Llm {
            message: message.into(),
            source: None,
        }
    }

    /// Create an invalid response error.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_error_display() {
        let err = VitaeError::llm("model unavailable");
        assert!(err.to_string().contains("model unavailable"));
    }

    #[test]
    fn test_configuration_error_display() {
        let err = VitaeError::configuration("missing API key");
        assert_eq!(err.to_string(), "Configuration error: missing API key");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: VitaeError = io.into();
        assert!(matches!(err, VitaeError::Io(_)));
    }
}
