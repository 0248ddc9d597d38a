//! Contact-field heuristics over raw resume text.
//!
//! These are best-effort pattern rules, not guarantees. The name heuristic
//! in particular will misfire on resumes whose first lines are headers,
//! titles, or addresses; that is a documented limitation of the approach.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// First email-shaped token anywhere in the text. No TLD validation at
/// this layer; stricter validation belongs to the signup flow, not here.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w.\-]+@[\w.\-]+").expect("email regex compiles"));

/// Optional leading `+` followed by a contiguous run of 10-15 digits.
/// Separators are not normalized: a dash or space inside the number breaks
/// the run and the match is shorter or absent, first-match-wins.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?\d{10,15}").expect("phone regex compiles"));

/// Contact fields extracted from raw resume text. All optional: a miss is
/// normal operation, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    /// Candidate name, from the first "name-shaped" line.
    pub name: Option<String>,
    /// First email-shaped match in the text.
    pub email: Option<String>,
    /// First contiguous phone-number match in the text.
    pub phone: Option<String>,
}

/// Extract candidate name, email, and phone from raw text.
pub fn extract_fields(raw_text: &str) -> ContactFields {
    ContactFields {
        name: extract_name(raw_text),
        email: EMAIL_RE.find(raw_text).map(|m| m.as_str().to_string()),
        phone: PHONE_RE.find(raw_text).map(|m| m.as_str().to_string()),
    }
}

/// Attempt to extract the candidate name from the first two non-empty
/// lines.
///
/// A line qualifies when it splits into 2-4 whitespace tokens and every
/// token is purely alphabetic once periods are removed. On the first line
/// commas are removed as well (so "Doe, Jane M." can qualify); the second
/// line gets no comma allowance.
fn extract_name(raw_text: &str) -> Option<String> {
    let lines: Vec<&str> = raw_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let first = lines.first()?;
    if line_looks_like_name(first, true) {
        return Some((*first).to_string());
    }

    let second = lines.get(1)?;
    if line_looks_like_name(second, false) {
        return Some((*second).to_string());
    }

    None
}

fn line_looks_like_name(line: &str, strip_commas: bool) -> bool {
    let words: Vec<&str> = line.split_whitespace().collect();
    if !(2..=4).contains(&words.len()) {
        return false;
    }
    words
        .iter()
        .all(|word| alphabetic_after_strip(word, strip_commas))
}

/// True when the token is non-empty and entirely alphabetic after removing
/// periods (and commas, when allowed).
fn alphabetic_after_strip(word: &str, strip_commas: bool) -> bool {
    let cleaned: String = word
        .chars()
        .filter(|c| *c != '.' && !(strip_commas && *c == ','))
        .collect();
    !cleaned.is_empty() && cleaned.chars().all(char::is_alphabetic)
}
