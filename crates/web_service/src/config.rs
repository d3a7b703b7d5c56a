//! Configuration management for web service
//!
//! Supports loading configuration from environment variables with fallback to defaults.

use std::str::FromStr;
use std::time::Duration;

use note_core::env_file::API_KEY_VAR;
use note_core::settings::{
    DEFAULT_MODEL, MAX_TOKENS_ARTICLE, MAX_TOKENS_CLEANUP, MAX_TOKENS_CONSISTENCY,
    MAX_TOKENS_SUMMARY,
};
use note_core::GenerationSettings;
use note_llm::AnthropicProvider;

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    parse_or(std::env::var(name).ok(), default)
}

/// Load GenerationSettings from environment variables
///
/// Environment variables:
/// - `CLAUDE_MODEL`: Model id (default: claude-sonnet-4-20250514)
/// - `MAX_TOKENS_ARTICLE`: Budget for article output (default: 4096)
/// - `MAX_TOKENS_SUMMARY`: Budget for summary output (default: 2048)
/// - `MAX_TOKENS_CLEANUP`: Budget for cleanup output (default: 4096)
/// - `MAX_TOKENS_CONSISTENCY`: Budget for consistency reports (default: 2048)
pub fn load_generation_settings() -> GenerationSettings {
    GenerationSettings {
        model: std::env::var("CLAUDE_MODEL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        max_tokens_article: env_or("MAX_TOKENS_ARTICLE", MAX_TOKENS_ARTICLE),
        max_tokens_summary: env_or("MAX_TOKENS_SUMMARY", MAX_TOKENS_SUMMARY),
        max_tokens_cleanup: env_or("MAX_TOKENS_CLEANUP", MAX_TOKENS_CLEANUP),
        max_tokens_consistency: env_or("MAX_TOKENS_CONSISTENCY", MAX_TOKENS_CONSISTENCY),
    }
}

/// Initial API key from `ANTHROPIC_API_KEY`, empty when unset.
pub fn load_api_key() -> String {
    std::env::var(API_KEY_VAR).unwrap_or_default()
}

/// Build the Anthropic provider
///
/// Environment variables:
/// - `ANTHROPIC_BASE_URL`: API base URL (default: https://api.anthropic.com/v1)
/// - `ANTHROPIC_TIMEOUT_SECS`: Request timeout; reqwest's default when unset
pub fn build_provider() -> Result<AnthropicProvider, String> {
    let mut builder = reqwest::Client::builder();
    if let Some(secs) = std::env::var("ANTHROPIC_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
    {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let client = builder
        .build()
        .map_err(|e| format!("Failed to build HTTP client: {e}"))?;

    let mut provider = AnthropicProvider::new().with_client(client);
    if let Ok(base_url) = std::env::var("ANTHROPIC_BASE_URL") {
        if !base_url.trim().is_empty() {
            provider = provider.with_base_url(base_url.trim());
        }
    }
    Ok(provider)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_settings_have_sensible_defaults() {
        let settings = load_generation_settings();
        assert!(!settings.model.is_empty());
        assert!(settings.max_tokens_article > 0);
        assert!(settings.max_tokens_summary > 0);
        assert!(settings.max_tokens_cleanup > 0);
        assert!(settings.max_tokens_consistency > 0);
    }

    #[test]
    fn test_unparsable_values_fall_back() {
        assert_eq!(parse_or(Some("abc".to_string()), 4096u32), 4096);
        assert_eq!(parse_or(None, 2048u32), 2048);
        assert_eq!(parse_or(Some(" 1024 ".to_string()), 2048u32), 1024);
    }
}
