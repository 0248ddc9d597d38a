//! vitae-core - shared types, errors, and configuration for the vitae
//! workspace.
//!
//! This crate holds the pieces the other vitae crates build on: the
//! [`VitaeError`] hierarchy, the [`Llm`] provider trait with its
//! request/response types, and the [`AppConfig`] configuration loader.

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::{AppConfig, ParseConfig};
pub use error::{VitaeError, VitaeResult};
pub use traits::{GenerationOptions, Llm, LlmConfig, LlmResponse, TokenUsage};
pub use types::{Message, MessageRole};
