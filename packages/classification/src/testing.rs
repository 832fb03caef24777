//! Testing utilities including a mock completion provider.
//!
//! Useful for testing the pipeline (and applications built on it) without
//! making real LLM calls.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::{ClassificationError, Result};
use crate::llm::CompletionProvider;

/// Default canned verdict returned when no response is configured.
const DEFAULT_RESPONSE: &str = r#"{
    "categoria": "Produtivo",
    "confianca": "Alta",
    "resposta_sugerida": "Recebemos sua solicitação e retornaremos em breve.",
    "analise": "O email solicita uma ação da equipe."
}"#;

/// A mock completion provider for testing.
///
/// Returns a configurable canned response and records every prompt it
/// receives, so tests can assert both on call counts (e.g. the
/// reject-before-calling property) and on the exact rendered prompt.
#[derive(Default)]
pub struct MockCompletion {
    response: Option<String>,
    error: Mutex<Option<ClassificationError>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockCompletion {
    /// Create a mock that answers with a valid default verdict.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the raw completion text to return.
    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.response = Some(response.into());
        self
    }

    /// Fail the next `complete` call with the given error.
    pub fn with_error(self, error: ClassificationError) -> Self {
        *self.error.lock().unwrap() = Some(error);
        self
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// Number of `complete` calls made.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionProvider for MockCompletion {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(error) = self.error.lock().unwrap().take() {
            return Err(error);
        }

        Ok(self
            .response
            .clone()
            .unwrap_or_else(|| DEFAULT_RESPONSE.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_prompts() {
        let mock = MockCompletion::new();

        mock.complete("first").await.unwrap();
        mock.complete("second").await.unwrap();

        assert_eq!(mock.call_count(), 2);
        assert_eq!(mock.prompts(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_mock_error_fires_once() {
        let mock = MockCompletion::new()
            .with_error(ClassificationError::CompletionService("down".into()));

        assert!(mock.complete("a").await.is_err());
        assert!(mock.complete("b").await.is_ok());
    }
}
