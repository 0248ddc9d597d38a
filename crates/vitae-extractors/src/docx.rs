//! DOCX text extraction using docx-rs.

use async_trait::async_trait;
use docx_rs::{DocumentChild, ParagraphChild, RunChild};

use crate::error::{ParseError, ParseResult};
use crate::format::DocumentFormat;
use crate::Extractor;

/// DOCX text extractor using the docx-rs library.
///
/// Extracts paragraph text in document order, skipping paragraphs whose
/// trimmed text is empty, and joins paragraphs with newlines. Tables,
/// images, headers, and footers are ignored. Wraps the synchronous
/// docx-rs parse in spawn_blocking to avoid blocking the async runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxExtractor;

impl DocxExtractor {
    /// Create a new DOCX extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract text synchronously (called within spawn_blocking).
    fn extract_sync(content: Vec<u8>) -> ParseResult<String> {
        let docx = docx_rs::read_docx(&content)
            .map_err(|e| ParseError::corrupt(DocumentFormat::Docx, e.to_string()))?;

        let mut paragraphs: Vec<String> = Vec::new();
        for child in docx.document.children {
            if let DocumentChild::Paragraph(p) = child {
                let text = Self::paragraph_text(&p);
                if !text.trim().is_empty() {
                    paragraphs.push(text);
                }
            }
        }

        Ok(paragraphs.join("\n"))
    }

    /// Extract text from a paragraph, including hyperlink runs.
    fn paragraph_text(p: &docx_rs::Paragraph) -> String {
        let mut text = String::new();

        for child in &p.children {
            match child {
                ParagraphChild::Run(r) => {
                    for run_child in &r.children {
                        match run_child {
                            RunChild::Text(t) => text.push_str(&t.text),
                            RunChild::Tab(_) => text.push('\t'),
                            RunChild::Break(_) => text.push('\n'),
                            _ => {}
                        }
                    }
                }
                ParagraphChild::Hyperlink(h) => {
                    for child in &h.children {
                        if let ParagraphChild::Run(r) = child {
                            for run_child in &r.children {
                                if let RunChild::Text(t) = run_child {
                                    text.push_str(&t.text);
                                }
                            }
                        }
                    }
                }
                _ => {}
            }
        }

        text
    }
}

#[async_trait]
impl Extractor for DocxExtractor {
    async fn extract(&self, content: &[u8]) -> ParseResult<String> {
        let content = content.to_vec();
        tokio::task::spawn_blocking(move || Self::extract_sync(content)).await?
    }

    fn format(&self) -> DocumentFormat {
        DocumentFormat::Docx
    }

    fn name(&self) -> &str {
        "docx-rs"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_docx_extractor_metadata() {
        let extractor = DocxExtractor::new();
        assert_eq!(extractor.format(), DocumentFormat::Docx);
        assert_eq!(extractor.name(), "docx-rs");
    }

    #[tokio::test]
    async fn test_docx_extractor_rejects_empty_bytes() {
        let extractor = DocxExtractor::new();
        let result = extractor.extract(&[]).await;
        assert!(matches!(
            result,
            Err(ParseError::CorruptDocument {
                format: DocumentFormat::Docx,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_docx_extractor_rejects_garbage() {
        let extractor = DocxExtractor::new();
        assert!(extractor.extract(b"not a zip archive").await.is_err());
    }
}
