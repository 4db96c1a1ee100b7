use std::sync::Arc;

use coach_core::ResponseMode;
use coach_llm::{CompletionProvider, OpenAIProvider};

pub struct AppState {
    /// None when no API key was configured at startup; coach requests then
    /// fail fast with a configuration error instead of calling upstream.
    pub llm: Option<Arc<dyn CompletionProvider>>,
    pub mode: ResponseMode,
}

impl AppState {
    pub fn new_with_config(
        api_key: Option<String>,
        base_url: String,
        model: String,
        mode: ResponseMode,
    ) -> Self {
        let llm: Option<Arc<dyn CompletionProvider>> = match api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
        {
            Some(key) => {
                log::info!(
                    "Creating completion provider with base URL: {} and model: {}",
                    base_url,
                    model
                );
                Some(Arc::new(
                    OpenAIProvider::new(key)
                        .with_base_url(base_url)
                        .with_model(model),
                ))
            }
            None => {
                log::warn!(
                    "OPENAI_API_KEY is not set; coach requests will fail until it is configured"
                );
                None
            }
        };

        Self { llm, mode }
    }

    /// State backed by an already-built provider, used by tests.
    pub fn with_provider(llm: Arc<dyn CompletionProvider>, mode: ResponseMode) -> Self {
        Self {
            llm: Some(llm),
            mode,
        }
    }
}
