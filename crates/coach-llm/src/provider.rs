use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("completion returned no content")]
    Empty,
}

pub type Result<T> = std::result::Result<T, CompletionError>;

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Request a single chat completion
    ///
    /// # Arguments
    /// * `system_prompt` - System instruction
    /// * `user_text` - User message
    /// * `max_output_tokens` - Output token budget
    async fn complete(
        &self,
        system_prompt: &str,
        user_text: &str,
        max_output_tokens: u32,
    ) -> Result<String>;
}
