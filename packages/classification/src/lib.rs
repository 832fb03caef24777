//! Email Classification Pipeline
//!
//! Turns an email's content (raw text or an uploaded file) into a typed
//! classification by delegating the semantic judgment to an external LLM
//! completion service, and strictly parsing its unstructured output.
//!
//! Data flows strictly forward:
//!
//! bytes/text → extractor → prompt builder → completion provider → parser →
//! typed [`Classification`]
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use classification::{Classifier, GroqCompletion};
//!
//! let completion = GroqCompletion::new(api_key, "llama-3.1-8b-instant");
//! let classifier = Classifier::new(Arc::new(completion));
//!
//! let result = classifier.classify(email_text).await?;
//! println!("{} ({})", result.category, result.confidence);
//! ```
//!
//! # Modules
//!
//! - [`extract`] - Upload decoding (plain text, PDF)
//! - [`prompt`] - The few-shot classification prompt
//! - [`llm`] - Completion provider seam (Groq behind the `groq` feature)
//! - [`parser`] - Fence unwrapping and JSON validation of model output
//! - [`classifier`] - The orchestrator
//! - [`testing`] - Mock completion provider for tests

pub mod classifier;
pub mod error;
pub mod extract;
pub mod llm;
pub mod parser;
pub mod prompt;
pub mod testing;
pub mod types;

// Re-export core types at crate root
pub use classifier::{Classifier, MIN_CONTENT_CHARS};
pub use error::{ClassificationError, Result};
pub use extract::{extract_text, SourceFormat};
pub use llm::CompletionProvider;
pub use parser::{parse_classification, strip_code_fence};
pub use prompt::{build_prompt, CLASSIFY_PROMPT};
pub use types::{Category, Classification, Confidence, ModelVerdict};

#[cfg(feature = "groq")]
pub use llm::GroqCompletion;

// Re-export testing utilities
pub use testing::MockCompletion;
