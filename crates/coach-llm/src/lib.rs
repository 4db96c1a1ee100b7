//! coach-llm - Upstream completion client for the Silent Coach service

pub mod openai;
pub mod provider;

pub use openai::OpenAIProvider;
pub use provider::{CompletionError, CompletionProvider, Result};
