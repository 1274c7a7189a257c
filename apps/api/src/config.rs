use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::llm_client::DEFAULT_MODEL;

/// Application configuration loaded from environment variables.
/// Every variable has a default; `ANTHROPIC_API_KEY` is optional and its
/// absence turns off name inference and generation.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub anthropic_api_key: Option<String>,
    pub name_inference_timeout: Duration,
    pub max_upload_bytes: usize,
    pub generation: GenerationConfig,
}

/// Settings handed to the generation step on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub model: String,
    pub cover_letter_min_words: usize,
    pub cover_letter_max_words: usize,
    pub email_min_words: usize,
    pub email_max_words: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            cover_letter_min_words: 200,
            cover_letter_max_words: 300,
            email_min_words: 100,
            email_max_words: 150,
        }
    }
}

impl GenerationConfig {
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            bail!("LLM_MODEL must not be empty");
        }
        if self.cover_letter_min_words >= self.cover_letter_max_words {
            bail!(
                "COVER_LETTER_MIN_WORDS ({}) must be below COVER_LETTER_MAX_WORDS ({})",
                self.cover_letter_min_words,
                self.cover_letter_max_words
            );
        }
        if self.email_min_words >= self.email_max_words {
            bail!(
                "EMAIL_MIN_WORDS ({}) must be below EMAIL_MAX_WORDS ({})",
                self.email_min_words,
                self.email_max_words
            );
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            anthropic_api_key: None,
            name_inference_timeout: Duration::from_secs(10),
            max_upload_bytes: 10 * 1024 * 1024,
            generation: GenerationConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let gen_defaults = GenerationConfig::default();

        let generation = GenerationConfig {
            model: std::env::var("LLM_MODEL").unwrap_or(gen_defaults.model),
            cover_letter_min_words: env_or("COVER_LETTER_MIN_WORDS", gen_defaults.cover_letter_min_words)?,
            cover_letter_max_words: env_or("COVER_LETTER_MAX_WORDS", gen_defaults.cover_letter_max_words)?,
            email_min_words: env_or("EMAIL_MIN_WORDS", gen_defaults.email_min_words)?,
            email_max_words: env_or("EMAIL_MAX_WORDS", gen_defaults.email_max_words)?,
        };
        generation.validate()?;

        let upload_mb: usize = env_or("MAX_UPLOAD_MB", defaults.max_upload_bytes / (1024 * 1024))?;
        let timeout_secs: u64 = env_or(
            "NAME_INFERENCE_TIMEOUT_SECS",
            defaults.name_inference_timeout.as_secs(),
        )?;

        Ok(Config {
            port: env_or("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            name_inference_timeout: Duration::from_secs(timeout_secs),
            max_upload_bytes: upload_mb * 1024 * 1024,
            generation,
        })
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    parse_or(key, std::env::var(key).ok(), default)
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) => value
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{value}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_defaults_are_valid() {
        let config = GenerationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.cover_letter_min_words, 200);
        assert_eq!(config.email_max_words, 150);
    }

    #[test]
    fn test_inverted_word_targets_rejected() {
        let config = GenerationConfig {
            email_min_words: 150,
            email_max_words: 100,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GenerationConfig {
            cover_letter_min_words: 300,
            cover_letter_max_words: 300,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_model_rejected() {
        let config = GenerationConfig {
            model: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_or() {
        assert_eq!(parse_or::<u16>("PORT", None, 8080).unwrap(), 8080);
        assert_eq!(parse_or::<u16>("PORT", Some(" 3000 ".to_string()), 8080).unwrap(), 3000);
        let err = parse_or::<u16>("PORT", Some("http".to_string()), 8080).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
