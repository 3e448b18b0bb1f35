use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_API_URL;

/// Application configuration loaded from environment variables.
///
/// The Anthropic key is optional at startup: without it the server still boots,
/// and every generation request fails with a configuration error instead.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: Option<String>,
    pub anthropic_api_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            anthropic_api_url: optional_env("ANTHROPIC_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Blank values count as unset so `ANTHROPIC_API_KEY=` in a .env file
/// behaves the same as leaving the key out.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_env_treats_blank_as_unset() {
        std::env::set_var("THESIS_DRAFTER_TEST_BLANK", "   ");
        assert_eq!(optional_env("THESIS_DRAFTER_TEST_BLANK"), None);
    }

    #[test]
    fn test_optional_env_trims_value() {
        std::env::set_var("THESIS_DRAFTER_TEST_KEY", " sk-test \n");
        assert_eq!(
            optional_env("THESIS_DRAFTER_TEST_KEY").as_deref(),
            Some("sk-test")
        );
    }

    #[test]
    fn test_optional_env_missing() {
        assert_eq!(optional_env("THESIS_DRAFTER_TEST_DEFINITELY_UNSET"), None);
    }
}
