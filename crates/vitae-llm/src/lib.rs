//! vitae-llm - LLM-backed resume advice for vitae.
//!
//! This crate turns parsed resume data into prompts, sends them through a
//! pluggable [`Llm`] provider, and parses the model's answers back into
//! structured results.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use vitae_llm::{OpenAiLlm, ResumeAdvisor};
//! use vitae_core::LlmConfig;
//!
//! let llm = Arc::new(OpenAiLlm::new(LlmConfig::default())?);
//! let advisor = ResumeAdvisor::new(llm);
//! let analysis = advisor.analyze(&raw_text, &record).await?;
//! ```

mod advisor;
mod analysis;
mod openai;
mod prompts;

pub use advisor::ResumeAdvisor;
pub use analysis::{parse_analysis_response, ResumeAnalysis, ScoreBreakdown};
pub use openai::OpenAiLlm;
pub use prompts::{analysis_prompt, cover_letter_prompt};

// Re-export core types for convenience
pub use vitae_core::{GenerationOptions, Llm, LlmConfig, LlmResponse};
