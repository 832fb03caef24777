//! Parsing of raw completion text into a typed verdict.
//!
//! Models routinely wrap JSON in markdown code fences or prepend chatter, so
//! parsing is a deliberate unwrap-then-parse-then-validate pipeline instead
//! of a single blind deserialize. Format drift degrades to a typed error.

use crate::error::{ClassificationError, Result};
use crate::types::ModelVerdict;

/// Strip an optional markdown code fence from raw model output.
///
/// Handles the common formatting habits:
/// 1. a `json`-tagged fence: takes the text between ```` ```json ```` and
///    the next ```` ``` ````;
/// 2. a plain fence: takes the text between the first and second ```` ``` ````;
/// 3. no fence: the whole trimmed text.
///
/// An unterminated fence yields the remainder; the subsequent JSON parse
/// reports the malformation.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();

    let rest = if let Some(rest) = trimmed.strip_prefix("```json") {
        rest
    } else if let Some(rest) = trimmed.strip_prefix("```") {
        rest
    } else {
        return trimmed;
    };

    match rest.find("```") {
        Some(end) => rest[..end].trim(),
        None => rest.trim(),
    }
}

/// Parse raw completion text into a [`ModelVerdict`].
///
/// Invalid JSON after unwrapping is a [`ClassificationError::MalformedResponse`];
/// valid JSON missing a required field (or with a non-string field) is a
/// [`ClassificationError::SchemaViolation`]. The `categoria` / `confianca`
/// values are passed through verbatim, without re-validation against the
/// enumerations.
pub fn parse_classification(raw: &str) -> Result<ModelVerdict> {
    let payload = strip_code_fence(raw);

    let value: serde_json::Value = serde_json::from_str(payload)
        .map_err(|e| ClassificationError::MalformedResponse(e.to_string()))?;

    serde_json::from_value(value).map_err(|e| ClassificationError::SchemaViolation(e.to_string()))
}
