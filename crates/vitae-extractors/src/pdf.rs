//! PDF text extraction using pdf-extract.

use async_trait::async_trait;

use crate::error::{ParseError, ParseResult};
use crate::format::DocumentFormat;
use crate::Extractor;

/// PDF text extractor using the pdf-extract library.
///
/// Extracts text per page in page order and joins pages with newlines,
/// wrapping the synchronous pdf-extract call in spawn_blocking to avoid
/// blocking the async runtime. No OCR and no layout awareness: an
/// image-only PDF yields empty text rather than an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract text synchronously (called within spawn_blocking).
    fn extract_sync(content: Vec<u8>) -> ParseResult<String> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(&content)
            .map_err(|e| ParseError::corrupt(DocumentFormat::Pdf, e.to_string()))?;
        Ok(pages.join("\n"))
    }
}

#[async_trait]
impl Extractor for PdfExtractor {
    async fn extract(&self, content: &[u8]) -> ParseResult<String> {
        let content = content.to_vec();
        tokio::task::spawn_blocking(move || Self::extract_sync(content)).await?
    }

    fn format(&self) -> DocumentFormat {
        DocumentFormat::Pdf
    }

    fn name(&self) -> &str {
        "pdf-extract"
    }
}
