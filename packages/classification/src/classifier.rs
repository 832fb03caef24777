//! The classification orchestrator.
//!
//! Composes the pipeline in strict sequence: length gate, prompt
//! construction, completion call, response parsing, timestamp. Any failure
//! short-circuits the remaining steps; nothing loops back.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::error::{ClassificationError, Result};
use crate::llm::CompletionProvider;
use crate::parser::parse_classification;
use crate::prompt::build_prompt;
use crate::types::Classification;

/// Minimum trimmed length for classifiable content.
///
/// Enforced before any external call is made, uniformly for direct text and
/// file-derived text; this bounds cost and keeps near-empty content away
/// from the completion service.
pub const MIN_CONTENT_CHARS: usize = 25;

/// Orchestrates one classification per call. Stateless between requests;
/// the only await point is the completion call.
pub struct Classifier {
    completion: Arc<dyn CompletionProvider>,
}

impl Classifier {
    /// Create a classifier over the given completion backend.
    pub fn new(completion: Arc<dyn CompletionProvider>) -> Self {
        Self { completion }
    }

    /// Classify email content and draft a suggested reply.
    ///
    /// The returned [`Classification`] always has all five fields populated;
    /// partial results are never produced. The timestamp is captured after
    /// the completion call returns, not before.
    pub async fn classify(&self, content: &str) -> Result<Classification> {
        let trimmed = content.trim();
        if trimmed.chars().count() < MIN_CONTENT_CHARS {
            return Err(ClassificationError::TooShortInput {
                min: MIN_CONTENT_CHARS,
            });
        }

        debug!(chars = trimmed.chars().count(), "classifying email content");

        let prompt = build_prompt(content);
        let raw = self.completion.complete(&prompt).await?;
        let verdict = parse_classification(&raw)?;

        Ok(Classification {
            category: verdict.category,
            confidence: verdict.confidence,
            suggested_reply: verdict.suggested_reply,
            rationale: verdict.rationale,
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockCompletion;

    fn classifier_with(mock: &Arc<MockCompletion>) -> Classifier {
        Classifier::new(mock.clone() as Arc<dyn CompletionProvider>)
    }

    #[tokio::test]
    async fn test_short_content_is_rejected_before_any_call() {
        let mock = Arc::new(MockCompletion::new());
        let classifier = classifier_with(&mock);

        let err = classifier.classify("curto demais").await.unwrap_err();

        assert!(matches!(
            err,
            ClassificationError::TooShortInput { min: MIN_CONTENT_CHARS }
        ));
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_whitespace_padding_does_not_satisfy_the_gate() {
        let mock = Arc::new(MockCompletion::new());
        let classifier = classifier_with(&mock);

        let padded = format!("   oi   {}", " ".repeat(40));
        assert!(classifier.classify(&padded).await.is_err());
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_successful_classification_is_fully_populated() {
        let mock = Arc::new(MockCompletion::new());
        let classifier = classifier_with(&mock);

        let result = classifier
            .classify("Olá, estou com problemas para acessar o sistema desde ontem.")
            .await
            .unwrap();

        assert!(!result.category.is_empty());
        assert!(!result.confidence.is_empty());
        assert!(!result.suggested_reply.is_empty());
        assert!(!result.rationale.is_empty());
        assert!(chrono::DateTime::parse_from_rfc3339(&result.timestamp).is_ok());
    }

    #[tokio::test]
    async fn test_completion_failure_short_circuits() {
        let mock = Arc::new(MockCompletion::new().with_error(
            ClassificationError::CompletionService("quota exceeded".into()),
        ));
        let classifier = classifier_with(&mock);

        let err = classifier
            .classify("Olá, estou com problemas para acessar o sistema desde ontem.")
            .await
            .unwrap_err();

        assert!(matches!(err, ClassificationError::CompletionService(_)));
    }
}
