//! High-level resume advice over a pluggable LLM provider.

use std::sync::Arc;

use vitae_core::error::{VitaeError, VitaeResult};
use vitae_core::traits::{GenerationOptions, Llm};
use vitae_core::types::Message;
use vitae_extractors::ParsedDocument;

use crate::analysis::{parse_analysis_response, ResumeAnalysis};
use crate::prompts::{analysis_prompt, cover_letter_prompt};

const ANALYSIS_TEMPERATURE: f32 = 0.2;
const ANALYSIS_MAX_TOKENS: u32 = 1000;

const COVER_LETTER_TEMPERATURE: f32 = 0.7;
const COVER_LETTER_MAX_TOKENS: u32 = 800;

const DEFAULT_TONE: &str = "professional";

/// Produces resume analyses and cover letters through an [`Llm`].
///
/// Analysis runs cold (low temperature, JSON output expected); cover
/// letters run warm for varied prose. Both use a single user message, so
/// any chat-completions provider works.
pub struct ResumeAdvisor {
    llm: Arc<dyn Llm>,
}

impl ResumeAdvisor {
    /// Create an advisor over the given provider.
    pub fn new(llm: Arc<dyn Llm>) -> Self {
        Self { llm }
    }

    /// Analyze a resume, returning the structured rubric result.
    pub async fn analyze(
        &self,
        raw_text: &str,
        record: &ParsedDocument,
    ) -> VitaeResult<ResumeAnalysis> {
        let prompt = analysis_prompt(raw_text, record);
        tracing::debug!(
            model = self.llm.model_name(),
            prompt_chars = prompt.chars().count(),
            "requesting resume analysis"
        );

        let response = self
            .llm
            .generate(
                &[Message::user(prompt)],
                Some(GenerationOptions {
                    temperature: Some(ANALYSIS_TEMPERATURE),
                    max_tokens: Some(ANALYSIS_MAX_TOKENS),
                }),
            )
            .await?;

        let analysis = parse_analysis_response(response.content_or_empty())?;
        tracing::debug!(score = analysis.score, "resume analysis parsed");
        Ok(analysis)
    }

    /// Generate a cover letter for a job title, in the given tone
    /// (defaults to "professional" when `None`).
    pub async fn cover_letter(
        &self,
        raw_text: &str,
        record: &ParsedDocument,
        job_title: &str,
        tone: Option<&str>,
    ) -> VitaeResult<String> {
        let tone = tone.unwrap_or(DEFAULT_TONE);
        let prompt = cover_letter_prompt(raw_text, record, job_title, tone);
        tracing::debug!(
            model = self.llm.model_name(),
            job_title,
            tone,
            "requesting cover letter"
        );

        let response = self
            .llm
            .generate(
                &[Message::user(prompt)],
                Some(GenerationOptions {
                    temperature: Some(COVER_LETTER_TEMPERATURE),
                    max_tokens: Some(COVER_LETTER_MAX_TOKENS),
                }),
            )
            .await?;

        match response.content {
            Some(letter) if !letter.trim().is_empty() => Ok(letter),
            _ => Err(VitaeError::invalid_response(
                "cover letter response was empty",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use vitae_core::traits::LlmResponse;

    /// Canned provider that records the options it was called with.
    struct CannedLlm {
        reply: String,
        seen_options: Mutex<Option<GenerationOptions>>,
    }

    impl CannedLlm {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                seen_options: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl Llm for CannedLlm {
        async fn generate(
            &self,
            _messages: &[Message],
            options: Option<GenerationOptions>,
        ) -> VitaeResult<LlmResponse> {
            *self.seen_options.lock().unwrap() = options;
            Ok(LlmResponse {
                content: Some(self.reply.clone()),
                usage: None,
            })
        }

        fn model_name(&self) -> &str {
            "canned"
        }
    }

    fn sample_record() -> ParsedDocument {
        ParsedDocument {
            name: Some("Jane Doe".to_string()),
            email: Some("jane@example.com".to_string()),
            phone: None,
            skills: vec!["python".to_string()],
            raw_text_snippet: String::new(),
        }
    }

    #[tokio::test]
    async fn test_analyze_parses_canned_json() {
        let llm = Arc::new(CannedLlm::new(
            r#"```json
{"score": 58, "weaknesses": ["no metrics"]}
```"#,
        ));
        let advisor = ResumeAdvisor::new(llm.clone());

        let analysis = advisor
            .analyze("Jane Doe\nresume body", &sample_record())
            .await
            .unwrap();
        assert_eq!(analysis.score, 58);
        assert_eq!(analysis.weaknesses, vec!["no metrics"]);

        let options = llm.seen_options.lock().unwrap().clone().unwrap();
        assert_eq!(options.temperature, Some(ANALYSIS_TEMPERATURE));
        assert_eq!(options.max_tokens, Some(ANALYSIS_MAX_TOKENS));
    }

    #[tokio::test]
    async fn test_analyze_rejects_garbage_reply() {
        let llm = Arc::new(CannedLlm::new("sorry, no"));
        let advisor = ResumeAdvisor::new(llm);
        let result = advisor.analyze("text", &sample_record()).await;
        assert!(matches!(result, Err(VitaeError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_cover_letter_uses_warm_options_and_default_tone() {
        let llm = Arc::new(CannedLlm::new("Dear Hiring Manager, ..."));
        let advisor = ResumeAdvisor::new(llm.clone());

        let letter = advisor
            .cover_letter("text", &sample_record(), "Engineer", None)
            .await
            .unwrap();
        assert!(letter.starts_with("Dear Hiring Manager"));

        let options = llm.seen_options.lock().unwrap().clone().unwrap();
        assert_eq!(options.temperature, Some(COVER_LETTER_TEMPERATURE));
        assert_eq!(options.max_tokens, Some(COVER_LETTER_MAX_TOKENS));
    }

    #[tokio::test]
    async fn test_cover_letter_rejects_empty_reply() {
        let llm = Arc::new(CannedLlm::new("   "));
        let advisor = ResumeAdvisor::new(llm);
        let result = advisor
            .cover_letter("text", &sample_record(), "Engineer", Some("friendly"))
            .await;
        assert!(matches!(result, Err(VitaeError::InvalidResponse(_))));
    }
}
