//! OpenAI-compatible adapter for the assisted plan rewrite.
//!
//! Supports OpenAI API, Azure OpenAI, and local Ollama instances.
//! Implements `TextGenerationPort` with plain-text completions.

use crate::domain::DomainError;
use crate::ports::TextGenerationPort;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// OpenAI-compatible text-generation adapter.
///
/// Can be configured to work with:
/// - OpenAI API (api.openai.com)
/// - Azure OpenAI
/// - Ollama (localhost)
/// - Any OpenAI-compatible API
pub struct OpenAiAdapter {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl OpenAiAdapter {
    /// Create a new OpenAI adapter.
    ///
    /// # Arguments
    /// * `api_url` - API endpoint (e.g., "https://api.openai.com/v1/chat/completions")
    /// * `api_key` - API key (can be empty for local Ollama)
    /// * `model` - Model name (e.g., "gpt-4o-mini", "llama3.2")
    pub fn new(api_url: String, api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
            model,
        }
    }

    fn system_prompt() -> &'static str {
        "You are a certified fitness coach and nutritionist writing practical, budget-aware \
         workout and diet plans for students. Write plain text only: no markdown, no HTML, \
         no tables. Keep section headers in capital letters on their own line."
    }

    fn build_request(&self, prompt: &str, max_tokens: u32) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: Self::system_prompt().to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
            temperature: 0.7,
            max_tokens,
        }
    }

    /// Strip a surrounding markdown code fence, if the model added one.
    fn strip_code_fence(raw_text: &str) -> String {
        let trimmed = raw_text.trim();
        if let Some(rest) = trimmed.strip_prefix("```") {
            // Drop an optional language tag on the opening fence line.
            let body = rest.split_once('\n').map(|(_, b)| b).unwrap_or("");
            let body = body.strip_suffix("```").unwrap_or(body);
            return body.trim().to_string();
        }
        trimmed.to_string()
    }
}

/// OpenAI API request structure.
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// OpenAI API response structure.
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait::async_trait]
impl TextGenerationPort for OpenAiAdapter {
    async fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String, DomainError> {
        info!(
            model = %self.model,
            prompt_len = prompt.len(),
            max_tokens,
            "sending plan rewrite request"
        );

        let request = self.build_request(prompt, max_tokens);

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::GenerationUnavailable(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "AI API returned error");
            return Err(DomainError::GenerationUnavailable(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            DomainError::GenerationUnavailable(format!("Failed to parse API response: {}", e))
        })?;

        let raw_content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| {
                DomainError::GenerationUnavailable("No response choices returned".to_string())
            })?;

        let text = Self::strip_code_fence(&raw_content);
        debug!(raw_len = raw_content.len(), text_len = text.len(), "received AI response");

        if text.is_empty() {
            return Err(DomainError::GenerationUnavailable(
                "Model returned an empty plan".to_string(),
            ));
        }

        info!(words = text.split_whitespace().count(), "plan rewrite complete");
        Ok(text)
    }
}
