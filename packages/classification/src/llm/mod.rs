//! Completion provider seam.
//!
//! The orchestrator talks to the external LLM through this trait so tests
//! can inject a mock and never touch the network.

use async_trait::async_trait;

use crate::error::Result;

#[cfg(feature = "groq")]
pub mod groq;

#[cfg(feature = "groq")]
pub use groq::GroqCompletion;

/// A chat-completion backend.
///
/// Implementations wrap a specific provider and own its persona message and
/// sampling configuration. One call is one round trip: no retries, no
/// streaming, no timeout beyond the provider default.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send the rendered prompt and return the raw completion text.
    async fn complete(&self, prompt: &str) -> Result<String>;
}
