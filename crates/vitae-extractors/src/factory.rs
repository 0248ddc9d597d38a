//! Factory for creating extractors.

use std::sync::Arc;

use crate::error::{ParseError, ParseResult};
use crate::format::DocumentFormat;
use crate::Extractor;

#[cfg(feature = "pdf")]
use crate::PdfExtractor;

#[cfg(feature = "docx")]
use crate::DocxExtractor;

/// Factory for creating document text extractors.
pub struct ExtractorFactory;

impl ExtractorFactory {
    /// Create a PDF extractor.
    #[cfg(feature = "pdf")]
    pub fn pdf() -> Arc<dyn Extractor> {
        Arc::new(PdfExtractor::new())
    }

    /// Create a DOCX extractor.
    #[cfg(feature = "docx")]
    pub fn docx() -> Arc<dyn Extractor> {
        Arc::new(DocxExtractor::new())
    }

    /// Create the extractor for a given document format.
    ///
    /// Fails if the corresponding feature is compiled out.
    #[allow(unreachable_patterns)]
    pub fn for_format(format: DocumentFormat) -> ParseResult<Arc<dyn Extractor>> {
        match format {
            #[cfg(feature = "pdf")]
            DocumentFormat::Pdf => Ok(Self::pdf()),

            #[cfg(feature = "docx")]
            DocumentFormat::Docx => Ok(Self::docx()),

            other => Err(ParseError::UnsupportedFormat(other.extension().to_string())),
        }
    }

    /// Get all available extractors.
    pub fn all() -> Vec<Arc<dyn Extractor>> {
        let mut extractors: Vec<Arc<dyn Extractor>> = Vec::new();

        #[cfg(feature = "pdf")]
        extractors.push(Self::pdf());

        #[cfg(feature = "docx")]
        extractors.push(Self::docx());

        extractors
    }
}
