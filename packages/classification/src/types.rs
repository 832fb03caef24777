//! Data types for the classification pipeline.

use serde::{Deserialize, Serialize};

/// The binary classification taxonomy.
///
/// `Produtivo` marks emails that require a specific action from the company;
/// `Improdutivo` marks emails that require none, including off-topic content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Produtivo,
    Improdutivo,
}

impl Category {
    /// The exact label the model is instructed to emit.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Produtivo => "Produtivo",
            Self::Improdutivo => "Improdutivo",
        }
    }
}

/// Confidence level attached to a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    Alta,
    #[serde(rename = "Média")]
    Media,
    Baixa,
}

impl Confidence {
    /// The exact label the model is instructed to emit.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alta => "Alta",
            Self::Media => "Média",
            Self::Baixa => "Baixa",
        }
    }
}

/// The finalized result of one classification request.
///
/// Serializes with the Portuguese wire names the API exposes. `category` and
/// `confidence` carry the model's labels verbatim: the pipeline validates
/// presence and type but deliberately does not re-validate the values
/// against [`Category`] / [`Confidence`], so provider drift surfaces to the
/// caller instead of failing the request.
#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    #[serde(rename = "categoria")]
    pub category: String,

    #[serde(rename = "confianca")]
    pub confidence: String,

    #[serde(rename = "resposta_sugerida")]
    pub suggested_reply: String,

    #[serde(rename = "analise")]
    pub rationale: String,

    /// ISO-8601, stamped locally when the result is finalized
    pub timestamp: String,
}

/// The shape the model is asked to produce: four required string fields.
///
/// Intermediate only; the orchestrator turns it into a [`Classification`]
/// by stamping a timestamp.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelVerdict {
    #[serde(rename = "categoria")]
    pub category: String,

    #[serde(rename = "confianca")]
    pub confidence: String,

    #[serde(rename = "resposta_sugerida")]
    pub suggested_reply: String,

    #[serde(rename = "analise")]
    pub rationale: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::Produtivo.as_str(), "Produtivo");
        assert_eq!(Category::Improdutivo.as_str(), "Improdutivo");
    }

    #[test]
    fn test_confidence_labels_include_the_accent() {
        assert_eq!(Confidence::Media.as_str(), "Média");
        assert_eq!(
            serde_json::to_string(&Confidence::Media).unwrap(),
            "\"Média\""
        );
    }

    #[test]
    fn test_classification_serializes_with_wire_names() {
        let classification = Classification {
            category: "Produtivo".into(),
            confidence: "Alta".into(),
            suggested_reply: "Recebemos sua solicitação.".into(),
            rationale: "Pede suporte.".into(),
            timestamp: "2024-01-01T00:00:00+00:00".into(),
        };

        let json = serde_json::to_value(&classification).unwrap();
        assert_eq!(json["categoria"], "Produtivo");
        assert_eq!(json["confianca"], "Alta");
        assert_eq!(json["resposta_sugerida"], "Recebemos sua solicitação.");
        assert_eq!(json["analise"], "Pede suporte.");
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn test_verdict_deserializes_from_wire_names() {
        let verdict: ModelVerdict = serde_json::from_str(
            r#"{
                "categoria": "Improdutivo",
                "confianca": "Baixa",
                "resposta_sugerida": "Agradecemos o contato!",
                "analise": "Apenas um agradecimento."
            }"#,
        )
        .unwrap();

        assert_eq!(verdict.category, "Improdutivo");
        assert_eq!(verdict.confidence, "Baixa");
    }
}
