//! Groq-backed completion provider.

use async_trait::async_trait;
use groq_client::{ChatRequest, GroqClient, GroqError, Message};

use crate::error::{ClassificationError, Result};
use crate::llm::CompletionProvider;

/// Persona establishing the assistant as a corporate email specialist.
const SYSTEM_PERSONA: &str = "Você é um especialista em classificação de emails corporativos.";

/// Low temperature biases toward consistent, machine-parseable output.
const TEMPERATURE: f32 = 0.3;

/// Enough for the JSON payload plus the suggested reply.
const MAX_TOKENS: u32 = 500;

/// Completion provider backed by the Groq chat completion API.
#[derive(Clone)]
pub struct GroqCompletion {
    client: GroqClient,
    model: String,
}

impl GroqCompletion {
    /// Create a provider for the given credential and model identifier.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: GroqClient::new(api_key),
            model: model.into(),
        }
    }

    /// The model identifier requests are sent under.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionProvider for GroqCompletion {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest::new(&self.model)
            .message(Message::system(SYSTEM_PERSONA))
            .message(Message::user(prompt))
            .temperature(TEMPERATURE)
            .max_tokens(MAX_TOKENS);

        let response = self.client.chat_completion(request).await.map_err(|e| match e {
            GroqError::Config(msg) => ClassificationError::Configuration(msg),
            other => ClassificationError::CompletionService(other.to_string()),
        })?;

        Ok(response.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_credential_fails_fast_as_configuration() {
        let provider = GroqCompletion::new("", "llama-3.1-8b-instant");

        let err = provider.complete("qualquer prompt").await.unwrap_err();
        assert!(matches!(err, ClassificationError::Configuration(_)));
    }

    #[test]
    fn test_model_accessor() {
        let provider = GroqCompletion::new("gsk-test", "llama-3.1-8b-instant");
        assert_eq!(provider.model(), "llama-3.1-8b-instant");
    }
}
