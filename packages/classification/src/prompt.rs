//! The classification prompt.
//!
//! Few-shot prompting is the only mechanism steering the model: the template
//! fixes the role, the taxonomy, two worked examples, and the JSON output
//! contract. There is no structured-output enforcement at the transport
//! level, so the parser treats everything that comes back as untrusted text.

/// Prompt template for classifying an email and drafting a reply.
///
/// Static except for the single `{email}` interpolation point.
pub const CLASSIFY_PROMPT: &str = r#"Você é um assistente de IA especializado em classificação de emails para uma empresa do setor financeiro.

Sua tarefa é analisar o email abaixo e:
1. Classificar como "Produtivo" ou "Improdutivo"
2. Gerar uma resposta automática apropriada
3. Fornecer uma breve análise da decisão

DEFINIÇÕES:
- Produtivo: Emails que requerem ação específica (solicitações de suporte, atualizações de casos, dúvidas sobre sistemas, documentos importantes)
- Improdutivo: Emails que não necessitam ação imediata (felicitações, agradecimentos genéricos, mensagens sociais) ou Emails aleatórios que não possuam ligação ou contexto com a empresa

EXEMPLOS:
Email:
"Olá, estou com problemas para acessar o sistema desde ontem. Poderiam verificar?"

Resposta:
{
  "categoria": "Produtivo",
  "confianca": "Alta",
  "resposta_sugerida": "Recebemos sua solicitação e nossa equipe de suporte já está analisando o problema. Em breve retornaremos com uma solução.",
  "analise": "O email relata um problema técnico e solicita suporte, exigindo ação imediata da empresa."
}

Email:
"Bom dia! Gostaria de agradecer pelo excelente atendimento que recebi esta semana, Abraço!"

Resposta:
{
  "categoria": "Improdutivo",
  "confianca": "Alta",
  "resposta_sugerida": "Agradecemos muito pelo seu feedback! Ficamos felizes em saber da sua experiência positiva com nosso atendimento.",
  "analise": "O email é apenas um elogio e não requer nenhuma ação específica."
}

AGORA, ANALISE O EMAIL A SEGUIR:
---
{email}
---

Responda APENAS com um JSON válido no seguinte formato:
{
    "categoria": "Produtivo" ou "Improdutivo",
    "confianca": "Alta", "Média" ou "Baixa",
    "resposta_sugerida": "texto da resposta automática sugerida",
    "analise": "breve explicação da classificação (1-2 frases)"
}

Diretrizes para respostas:
- Produtivo: Resposta profissional informando que a solicitação foi recebida e será processada
- Improdutivo: Resposta cordial e breve agradecendo o contato
- Use tom profissional mas amigável
- Seja conciso
"#;

/// Render the classification prompt for one email.
pub fn build_prompt(email_content: &str) -> String {
    CLASSIFY_PROMPT.replace("{email}", email_content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_is_interpolated_between_delimiters() {
        let prompt = build_prompt("Preciso de ajuda com meu boleto.");

        assert!(prompt.contains("---\nPreciso de ajuda com meu boleto.\n---"));
        assert!(!prompt.contains("{email}"));
    }

    #[test]
    fn test_prompt_is_pure() {
        let a = build_prompt("mesmo conteúdo");
        let b = build_prompt("mesmo conteúdo");
        assert_eq!(a, b);
    }

    #[test]
    fn test_template_carries_the_contract() {
        let prompt = build_prompt("qualquer email");

        // Taxonomy, both worked examples and the output-format instruction
        assert!(prompt.contains("\"Produtivo\" ou \"Improdutivo\""));
        assert!(prompt.contains("problemas para acessar o sistema"));
        assert!(prompt.contains("agradecer pelo excelente atendimento"));
        assert!(prompt.contains("Responda APENAS com um JSON válido"));
    }

    #[test]
    fn test_single_interpolation_point() {
        assert_eq!(CLASSIFY_PROMPT.matches("{email}").count(), 1);
    }
}
