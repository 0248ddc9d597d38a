//! Assembled parse result for one document.

use serde::{Deserialize, Serialize};

use crate::fields::ContactFields;

/// Default cap, in characters, for the stored raw text snippet.
pub const SNIPPET_MAX_CHARS: usize = 500;

/// The structured record produced by parsing one resume document.
///
/// Pure assembly of upstream outputs; no field is recomputed here. The
/// snippet is a character-bounded prefix of the extracted text, kept for
/// preview display so the full text never needs to be stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDocument {
    /// Candidate name, when the heuristics found one.
    pub name: Option<String>,
    /// First email-shaped match in the text.
    pub email: Option<String>,
    /// First phone-shaped match in the text.
    pub phone: Option<String>,
    /// Matched vocabulary terms, duplicate-free, in vocabulary order.
    pub skills: Vec<String>,
    /// Prefix of the raw extracted text, truncated on a character
    /// boundary.
    pub raw_text_snippet: String,
}

impl ParsedDocument {
    /// Assemble a record from extracted text, contact fields, and matched
    /// skills, using the default snippet cap.
    pub fn assemble(raw_text: &str, fields: ContactFields, skills: Vec<String>) -> Self {
        Self::assemble_with_limit(raw_text, fields, skills, SNIPPET_MAX_CHARS)
    }

    /// Assemble with an explicit snippet cap, counted in characters.
    pub fn assemble_with_limit(
        raw_text: &str,
        fields: ContactFields,
        skills: Vec<String>,
        snippet_max_chars: usize,
    ) -> Self {
        Self {
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            skills,
            raw_text_snippet: truncate_chars(raw_text, snippet_max_chars).to_string(),
        }
    }
}

/// Prefix of `text` holding at most `max` characters. Counts chars, not
/// bytes, so multibyte text is never split mid-character.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
