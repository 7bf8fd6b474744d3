use anyhow::{Context, Result};

use crate::llm_client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_base_url: String,
    /// Executable invoked as `<bin> input.html output.pdf`.
    pub pdf_renderer_bin: String,
    /// `*` or a list of allowed origins.
    pub cors_origins: Vec<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            openai_api_key: require_env("OPENAI_API_KEY")?,
            openai_model: optional_env("OPENAI_MODEL", DEFAULT_MODEL),
            openai_base_url: optional_env("OPENAI_BASE_URL", DEFAULT_BASE_URL),
            pdf_renderer_bin: optional_env("PDF_RENDERER_BIN", "weasyprint"),
            cors_origins: parse_origins(&optional_env("CORS_ORIGINS", "*")),
            port: optional_env("PORT", "8000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG", "info"),
        })
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(|o| o.trim().to_string())
        .filter(|o| !o.is_empty())
        .collect();
    if origins.is_empty() {
        vec!["*".to_string()]
    } else {
        origins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_splits_and_trims() {
        assert_eq!(
            parse_origins("http://localhost:3000, https://app.example.com"),
            vec!["http://localhost:3000", "https://app.example.com"]
        );
    }

    #[test]
    fn test_parse_origins_empty_means_any() {
        assert_eq!(parse_origins(" , "), vec!["*"]);
    }

    #[test]
    fn test_allows_any_origin() {
        let config = Config {
            database_url: String::new(),
            openai_api_key: String::new(),
            openai_model: DEFAULT_MODEL.to_string(),
            openai_base_url: DEFAULT_BASE_URL.to_string(),
            pdf_renderer_bin: "weasyprint".to_string(),
            cors_origins: parse_origins("*"),
            port: 8000,
            rust_log: "info".to_string(),
        };
        assert!(config.allows_any_origin());
    }
}
