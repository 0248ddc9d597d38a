//! vitae-extractors - resume document parsing and attribute extraction.
//!
//! Turns an uploaded resume file into a [`ParsedDocument`]: raw text is
//! pulled out of the document (PDF or DOCX), then contact fields and
//! skills are extracted with simple heuristics and assembled into one
//! structured record.
//!
//! # Features
//!
//! - `pdf` (default) - PDF text extraction via pdf-extract
//! - `docx` (default) - DOCX text extraction via docx-rs
//!
//! # Example
//!
//! ```ignore
//! use vitae_extractors::parse_resume_file;
//!
//! let (raw_text, parsed) = parse_resume_file("uploads/a1b2.pdf", "resume.pdf").await?;
//! println!("{:?} {:?}", parsed.name, parsed.skills);
//! ```
//!
//! Field and skill extraction are best-effort: a miss is an absent value,
//! never an error. Only an unsupported filename extension or an unreadable
//! document fails the parse.

mod error;
mod factory;
mod fields;
mod format;
mod pipeline;
mod record;
mod skills;

#[cfg(feature = "pdf")]
mod pdf;

#[cfg(feature = "docx")]
mod docx;

pub use error::{ParseError, ParseResult};
pub use factory::ExtractorFactory;
pub use fields::{extract_fields, ContactFields};
pub use format::DocumentFormat;
pub use pipeline::{parse_resume_file, ParsePipeline};
pub use record::{ParsedDocument, SNIPPET_MAX_CHARS};
pub use skills::{default_vocabulary, extract_skills, SkillVocabulary};

#[cfg(feature = "pdf")]
pub use pdf::PdfExtractor;

#[cfg(feature = "docx")]
pub use docx::DocxExtractor;

use async_trait::async_trait;

/// Core Extractor trait - all document text extractors implement this.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Extract raw text from document bytes.
    async fn extract(&self, content: &[u8]) -> ParseResult<String>;

    /// The document format this extractor handles.
    fn format(&self) -> DocumentFormat;

    /// Human-readable name for this extractor.
    fn name(&self) -> &str;
}
