//! Document format dispatch.

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, ParseResult};

/// Supported resume document formats.
///
/// A closed enumeration: format is decided by the declared filename's
/// extension, never by content sniffing, and anything outside this set
/// fails fast with [`ParseError::UnsupportedFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    /// PDF document.
    Pdf,
    /// Microsoft Word document (OOXML).
    Docx,
}

impl DocumentFormat {
    /// Determine the format from a declared filename (case-insensitive).
    pub fn from_filename(filename: &str) -> ParseResult<Self> {
        let lower = filename.to_lowercase();
        if lower.ends_with(".pdf") {
            Ok(Self::Pdf)
        } else if lower.ends_with(".docx") {
            Ok(Self::Docx)
        } else {
            Err(ParseError::UnsupportedFormat(filename.to_string()))
        }
    }

    /// Canonical file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}
