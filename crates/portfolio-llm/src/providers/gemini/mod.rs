//! Google Gemini provider implementation.

mod protocol;

pub use protocol::{GenerateContentRequest, GenerateContentResponse, ListModelsResponse};

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::provider::{CompletionProvider, LLMError, Result};
use crate::types::CompletionOutput;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "models/gemini-flash-lite-latest";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Google Gemini API provider.
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider with an API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Set a custom base URL (e.g., for proxies or alternative endpoints).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the model name, with or without the `models/` prefix.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Bound every request to `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.client = Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    fn model_path(&self) -> String {
        if self.model.starts_with("models/") {
            self.model.clone()
        } else {
            format!("models/{}", self.model)
        }
    }

    fn generate_url(&self) -> String {
        format!("{}/{}:generateContent", self.base_url, self.model_path())
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let text = response.text().await?;

        if status == 401 || status == 403 {
            return Err(LLMError::Auth(format!(
                "Gemini authentication failed: {}. Please check your API key.",
                text
            )));
        }

        Err(LLMError::Api(format!(
            "Gemini API error: HTTP {}: {}",
            status, text
        )))
    }
}

#[async_trait]
impl CompletionProvider for GeminiProvider {
    async fn generate(&self, prompt: &str) -> Result<CompletionOutput> {
        let request = GenerateContentRequest::from_prompt(prompt);

        log::debug!(
            "Gemini request to {} ({} prompt chars)",
            self.model_path(),
            prompt.len()
        );

        let response = self
            .client
            .post(self.generate_url())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let body: GenerateContentResponse = serde_json::from_str(&response.text().await?)?;

        if let Some(reason) = body.block_reason() {
            return Err(LLMError::Api(format!("Prompt blocked by Gemini: {}", reason)));
        }

        Ok(body.into_output())
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn list_models(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self
                .client
                .get(format!("{}/models", self.base_url))
                .header(API_KEY_HEADER, &self.api_key);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }

            let response = Self::check_status(request.send().await?).await?;
            let page: ListModelsResponse = serde_json::from_str(&response.text().await?)?;
            names.extend(page.models.into_iter().map(|model| model.name));

            match page.next_page_token.filter(|token| !token.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        Ok(names)
    }
}
