use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use thiserror::Error;

/// Default X API host. The recent search endpoint lives under `/2/`.
pub const DEFAULT_API_URL: &str = "https://api.twitter.com";

/// Default request timeout for the search call, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration problems that stop a run before any network activity.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error(
        "TWITTER_BEARER_TOKEN not set. Add it to your .env file.\n\
         See .env.example for the required variables."
    )]
    MissingToken,
}

/// Central configuration loaded from environment variables.
///
/// The bearer token comes from the environment (never hardcoded). The .env
/// file is loaded at startup via dotenvy, before `load` is called.
#[derive(Debug, Clone)]
pub struct Config {
    /// App-only bearer token for the X API v2.
    pub bearer_token: String,
    /// Base URL of the X API (defaults to https://api.twitter.com).
    pub api_url: String,
    /// Timeout applied to the search request.
    pub timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A missing token is not an error here; call `require_token` before
    /// building a search client.
    pub fn load() -> Result<Self> {
        let timeout = parse_timeout(env::var("MURMUR_TIMEOUT_SECS").ok().as_deref())?;

        Ok(Self {
            bearer_token: env::var("TWITTER_BEARER_TOKEN").unwrap_or_default(),
            api_url: env::var("TWITTER_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            timeout,
        })
    }

    /// Return the bearer token, or fail if it is missing or blank.
    pub fn require_token(&self) -> Result<&str, ConfigError> {
        let token = self.bearer_token.trim();
        if token.is_empty() {
            return Err(ConfigError::MissingToken);
        }
        Ok(token)
    }
}

/// Parse MURMUR_TIMEOUT_SECS. Unset means the default; zero is rejected.
fn parse_timeout(raw: Option<&str>) -> Result<Duration> {
    let Some(raw) = raw else {
        return Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    };

    let secs = raw
        .trim()
        .parse::<u64>()
        .with_context(|| format!("MURMUR_TIMEOUT_SECS is not a number: {raw:?}"))?;

    if secs == 0 {
        anyhow::bail!("MURMUR_TIMEOUT_SECS is 0. The search timeout must be at least 1 second.");
    }

    Ok(Duration::from_secs(secs))
}
