use crate::error::{FaqChatbotError, Result};
use crate::llm::types::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig};
use log::debug;
use reqwest::Client;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Thin wrapper over the Gemini `generateContent` endpoint. One synchronous
/// call per turn; no retry, no timeout, no rate limiting.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: GEMINI_BASE_URL.to_string(),
        }
    }

    /// Redirect requests to a different endpoint (used by tests to point at a
    /// mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Perform one generation call and return the model's text, trimmed of
    /// leading and trailing whitespace.
    pub async fn generate_content(
        &self,
        model: &str,
        contents: Vec<Content>,
        config: GenerationConfig,
    ) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        );
        let payload = GenerateContentRequest {
            contents,
            generation_config: config,
        };

        debug!("Requesting generation from model '{}'", model);
        let res = self.client.post(&url).json(&payload).send().await?;
        let status = res.status();

        if !status.is_success() {
            let err_text = res.text().await?;
            return Err(FaqChatbotError::Generation(format!(
                "Gemini API error (status {}): {}",
                status, err_text
            )));
        }

        let body: GenerateContentResponse = res.json().await?;

        let candidate = body
            .candidates
            .and_then(|candidates| candidates.into_iter().next())
            .ok_or_else(|| FaqChatbotError::Generation("no candidates returned".to_string()))?;

        let part = candidate
            .content
            .parts
            .into_iter()
            .next()
            .ok_or_else(|| FaqChatbotError::Generation("no parts in content".to_string()))?;

        Ok(part.text.trim().to_string())
    }
}
