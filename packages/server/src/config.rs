use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Default model: Groq's instant-response Llama variant.
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub groq_model: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// The provider credential is required: a missing `GROQ_API_KEY` is
    /// fatal at startup, not deferred to the first request.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            groq_api_key: env::var("GROQ_API_KEY").context("GROQ_API_KEY must be set")?,
            groq_model: env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "10000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
        })
    }
}
