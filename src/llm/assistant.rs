use crate::error::Result;
use crate::llm::client::GeminiClient;
use crate::llm::prompts::build_prompt;
use crate::llm::types::GenerationConfig;

/// Model used unless the caller overrides it.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Answers user questions by assembling the fixed prompt and performing a
/// single generation call per question.
pub struct FaqAssistant {
    client: GeminiClient,
    model: String,
}

impl FaqAssistant {
    pub fn new(client: GeminiClient) -> Self {
        Self {
            client,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Ask a question and return the generated answer, or a typed error if
    /// the external call fails. Callers wanting the legacy degraded-string
    /// behavior go through [`crate::session::ChatSession::exchange`].
    pub async fn ask(&self, question: &str) -> Result<String> {
        let contents = build_prompt(question);
        self.client
            .generate_content(&self.model, contents, GenerationConfig::default())
            .await
    }
}
