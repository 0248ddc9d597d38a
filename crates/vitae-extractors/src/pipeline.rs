//! End-to-end parse pipeline: format detection, byte extraction, field
//! heuristics, skill matching, record assembly.

use std::path::Path;
use std::sync::Arc;

use crate::factory::ExtractorFactory;
use crate::fields::extract_fields;
use crate::format::DocumentFormat;
use crate::record::{ParsedDocument, SNIPPET_MAX_CHARS};
use crate::skills::{default_vocabulary, SkillVocabulary};
use crate::ParseResult;

/// Orchestrates one parse from an on-disk file to a [`ParsedDocument`].
///
/// Format is decided from the caller-supplied filename, never from the
/// path or the bytes, so a mislabeled file fails inside its extractor
/// rather than being sniffed into another format.
#[derive(Clone)]
pub struct ParsePipeline {
    vocabulary: Arc<SkillVocabulary>,
    snippet_max_chars: usize,
}

impl Default for ParsePipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl ParsePipeline {
    /// Pipeline with the bundled vocabulary and default snippet cap.
    pub fn new() -> Self {
        Self {
            vocabulary: default_vocabulary(),
            snippet_max_chars: SNIPPET_MAX_CHARS,
        }
    }

    /// Pipeline with a caller-supplied vocabulary.
    pub fn with_vocabulary(vocabulary: Arc<SkillVocabulary>) -> Self {
        Self {
            vocabulary,
            snippet_max_chars: SNIPPET_MAX_CHARS,
        }
    }

    /// Override the snippet cap, counted in characters.
    pub fn snippet_max_chars(mut self, max: usize) -> Self {
        self.snippet_max_chars = max;
        self
    }

    /// Parse a document file, returning the full extracted text alongside
    /// the assembled record.
    ///
    /// `filename` is the user-facing name whose extension selects the
    /// format; `path` is where the bytes actually live. An unsupported
    /// extension fails before any file I/O happens.
    pub async fn parse_file(
        &self,
        path: impl AsRef<Path>,
        filename: &str,
    ) -> ParseResult<(String, ParsedDocument)> {
        let format = DocumentFormat::from_filename(filename)?;
        let extractor = ExtractorFactory::for_format(format)?;

        let content = tokio::fs::read(path.as_ref()).await?;
        tracing::debug!(
            filename,
            %format,
            bytes = content.len(),
            extractor = extractor.name(),
            "extracting document text"
        );

        let raw_text = extractor.extract(&content).await?;
        let fields = extract_fields(&raw_text);
        let skills = self.vocabulary.extract(&raw_text);

        tracing::debug!(
            filename,
            chars = raw_text.chars().count(),
            skills = skills.len(),
            has_name = fields.name.is_some(),
            has_email = fields.email.is_some(),
            has_phone = fields.phone.is_some(),
            "document parsed"
        );

        let record = ParsedDocument::assemble_with_limit(
            &raw_text,
            fields,
            skills,
            self.snippet_max_chars,
        );
        Ok((raw_text, record))
    }
}

/// Parse a resume file with the default pipeline.
pub async fn parse_resume_file(
    path: impl AsRef<Path>,
    filename: &str,
) -> ParseResult<(String, ParsedDocument)> {
    ParsePipeline::new().parse_file(path, filename).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    #[tokio::test]
    async fn test_unsupported_extension_fails_before_io() {
        // The path does not exist; an Io error here would mean format
        // detection ran after the read.
        let result = parse_resume_file("/nonexistent/resume.txt", "resume.txt").await;
        assert!(matches!(result, Err(ParseError::UnsupportedFormat(_))));
    }

    #[cfg(feature = "pdf")]
    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let result = parse_resume_file("/nonexistent/resume.pdf", "resume.pdf").await;
        assert!(matches!(result, Err(ParseError::Io(_))));
    }

    #[tokio::test]
    async fn test_custom_vocabulary_and_snippet_cap() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.docx");
        // Build the file with docx-rs so the parse exercises a real
        // document, not a fixture blob.
        #[cfg(feature = "docx")]
        {
            use docx_rs::{Docx, Paragraph, Run};
            use std::io::Cursor;

            let mut buf = Cursor::new(Vec::new());
            Docx::new()
                .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Jane Doe")))
                .add_paragraph(
                    Paragraph::new().add_run(Run::new().add_text("Rust and Python daily")),
                )
                .build()
                .pack(&mut buf)
                .unwrap();
            tokio::fs::write(&path, buf.into_inner()).await.unwrap();

            let vocabulary = Arc::new(SkillVocabulary::from_terms(["rust", "python"]));
            let pipeline = ParsePipeline::with_vocabulary(vocabulary).snippet_max_chars(8);
            let (raw_text, record) = pipeline.parse_file(&path, "note.docx").await.unwrap();

            assert!(raw_text.contains("Rust and Python"));
            assert_eq!(record.name.as_deref(), Some("Jane Doe"));
            assert_eq!(record.skills, vec!["rust", "python"]);
            assert_eq!(record.raw_text_snippet, "Jane Doe");
        }
    }
}
