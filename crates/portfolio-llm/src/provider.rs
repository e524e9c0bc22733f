use crate::types::CompletionOutput;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LLMError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("Authentication error: {0}")]
    Auth(String),
}

pub type Result<T> = std::result::Result<T, LLMError>;

/// A text-completion service: one prompt in, one completion out.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generate a completion for `prompt`.
    ///
    /// Transport, quota and API failures are returned as errors; a response
    /// that arrives but carries no usable text is reported through
    /// [`CompletionOutput`] rather than failing.
    async fn generate(&self, prompt: &str) -> Result<CompletionOutput>;

    /// Model identifier requests are sent to.
    fn model(&self) -> &str;

    /// List available models
    async fn list_models(&self) -> Result<Vec<String>> {
        Ok(vec![])
    }
}
