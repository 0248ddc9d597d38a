//! Parsing error types.

use thiserror::Error;

use crate::format::DocumentFormat;

/// Errors that can occur while parsing a resume document.
///
/// Field and skill extraction never appear here: a missing name, email,
/// phone, or skill is an absent value, not an error.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Declared filename does not end in a supported extension.
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    /// The document bytes could not be read by the format's extractor.
    #[error("Corrupt {format} document: {message}")]
    CorruptDocument {
        format: DocumentFormat,
        message: String,
    },

    /// IO error while reading the uploaded file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Task join error from spawn_blocking.
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl ParseError {
    /// Create a corrupt document error for the given format.
    pub fn corrupt(format: DocumentFormat, message: impl Into<String>) -> Self {
        Self::CorruptDocument {
            format,
            message: message.into(),
        }
    }
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_display() {
        let err = ParseError::UnsupportedFormat("resume.txt".to_string());
        assert_eq!(err.to_string(), "Unsupported file type: resume.txt");
    }

    #[test]
    fn test_corrupt_document_display() {
        let err = ParseError::corrupt(DocumentFormat::Pdf, "bad xref table");
        assert!(err.to_string().contains("pdf"));
        assert!(err.to_string().contains("bad xref table"));
    }
}
