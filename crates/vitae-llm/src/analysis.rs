//! Structured analysis results and lenient response parsing.

use serde::{Deserialize, Serialize};

use vitae_core::error::{VitaeError, VitaeResult};

/// Per-category scores from the analysis rubric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    #[serde(default)]
    pub format: u32,
    #[serde(default)]
    pub contact: u32,
    #[serde(default)]
    pub summary: u32,
    #[serde(default)]
    pub experience: u32,
    #[serde(default)]
    pub skills: u32,
    #[serde(default)]
    pub education: u32,
    #[serde(default)]
    pub keywords: u32,
}

/// The structured resume analysis returned by the model.
///
/// All list fields default to empty and scalar extras are optional, so a
/// model that drops a key still deserializes instead of failing the whole
/// analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub score: u32,
    #[serde(default)]
    pub score_breakdown: ScoreBreakdown,
    #[serde(default)]
    pub deductions_applied: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub suggested_roles: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub recommended_courses_or_certs: Vec<String>,
    #[serde(default)]
    pub concise_advice: Vec<String>,
    #[serde(default)]
    pub ats_compatibility: Option<String>,
    #[serde(default)]
    pub quantifiable_achievements_count: Option<u32>,
    #[serde(default)]
    pub keyword_density: Option<String>,
    #[serde(default)]
    pub overall_assessment: Option<String>,
}

/// Parse the model's analysis answer into a [`ResumeAnalysis`].
///
/// Models sometimes ignore the no-markdown instruction, so this strips a
/// leading ```` ```json ```` or ```` ``` ```` fence and a trailing fence
/// before parsing. If that still fails, it retries on the outermost
/// `{...}` span, which salvages answers wrapped in prose.
pub fn parse_analysis_response(raw: &str) -> VitaeResult<ResumeAnalysis> {
    let cleaned = strip_code_fences(raw);

    if let Ok(analysis) = serde_json::from_str(cleaned) {
        return Ok(analysis);
    }

    if let Some(candidate) = outermost_json_object(cleaned) {
        if let Ok(analysis) = serde_json::from_str(candidate) {
            return Ok(analysis);
        }
    }

    Err(VitaeError::invalid_response(format!(
        "analysis response is not valid JSON: {}",
        head(cleaned, 200)
    )))
}

fn strip_code_fences(raw: &str) -> &str {
    let mut s = raw.trim();
    if let Some(rest) = s.strip_prefix("```json") {
        s = rest;
    } else if let Some(rest) = s.strip_prefix("```") {
        s = rest;
    }
    if let Some(rest) = s.strip_suffix("```") {
        s = rest;
    }
    s.trim()
}

/// The span from the first `{` to the last `}`, when both exist in order.
fn outermost_json_object(s: &str) -> Option<&str> {
    let start = s.find('{')?;
    let end = s.rfind('}')?;
    (end >= start).then(|| &s[start..=end])
}

fn head(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{"score": 62, "strengths": ["clear layout"]}"#;

    #[test]
    fn test_parses_bare_json() {
        let analysis = parse_analysis_response(MINIMAL).unwrap();
        assert_eq!(analysis.score, 62);
        assert_eq!(analysis.strengths, vec!["clear layout"]);
        assert!(analysis.weaknesses.is_empty());
    }

    #[test]
    fn test_strips_json_fence() {
        let raw = format!("```json\n{}\n```", MINIMAL);
        let analysis = parse_analysis_response(&raw).unwrap();
        assert_eq!(analysis.score, 62);
    }

    #[test]
    fn test_strips_plain_fence() {
        let raw = format!("```\n{}\n```", MINIMAL);
        let analysis = parse_analysis_response(&raw).unwrap();
        assert_eq!(analysis.score, 62);
    }

    #[test]
    fn test_extracts_object_from_surrounding_prose() {
        let raw = format!("Here is the analysis you asked for:\n{}\nHope this helps!", MINIMAL);
        let analysis = parse_analysis_response(&raw).unwrap();
        assert_eq!(analysis.score, 62);
    }

    #[test]
    fn test_rejects_non_json() {
        let result = parse_analysis_response("I cannot analyze this resume.");
        assert!(matches!(result, Err(VitaeError::InvalidResponse(_))));
    }

    #[test]
    fn test_breakdown_and_optionals() {
        let raw = r#"{
            "score": 71,
            "score_breakdown": {"format": 16, "contact": 8, "summary": 7,
                                "experience": 18, "skills": 11,
                                "education": 6, "keywords": 5},
            "ats_compatibility": "Good - standard sections",
            "quantifiable_achievements_count": 4
        }"#;
        let analysis = parse_analysis_response(raw).unwrap();
        assert_eq!(analysis.score_breakdown.experience, 18);
        assert_eq!(analysis.quantifiable_achievements_count, Some(4));
        assert_eq!(
            analysis.ats_compatibility.as_deref(),
            Some("Good - standard sections")
        );
        assert_eq!(analysis.keyword_density, None);
    }

    #[test]
    fn test_round_trips() {
        let analysis = parse_analysis_response(MINIMAL).unwrap();
        let json = serde_json::to_string(&analysis).unwrap();
        let back: ResumeAnalysis = serde_json::from_str(&json).unwrap();
        assert_eq!(analysis, back);
    }
}
