// src/config.rs
use std::{fmt, time::Duration};

use axum::http::HeaderValue;

use crate::error::ConfigError;

pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

pub const MODEL: &str = "gpt-4";
pub const MAX_TOKENS: u32 = 100;
pub const TEMPERATURE: f32 = 0.7;

/// Everything the outbound completions call needs.
#[derive(Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout: Duration,
}

impl ProviderConfig {
    /// Provider settings with the fixed model and sampling values.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            model: MODEL.to_string(),
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Origins allowed to make credentialed cross-origin calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CorsOrigins {
    /// `*` in the list: every origin is accepted and echoed back.
    Any,
    List(Vec<HeaderValue>),
}

#[derive(Clone, Debug)]
pub struct Config {
    /// IP literal or hostname, resolved when binding.
    pub host: String,
    pub port: u16,
    pub cors_origins: CorsOrigins,
    pub provider: ProviderConfig,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// | Variable                | Default                     |
    /// |-------------------------|-----------------------------|
    /// | `OPENAI_API_KEY`        | required                    |
    /// | `CORS_ORIGINS`          | `http://localhost:3000`     |
    /// | `HOST`                  | `0.0.0.0`                   |
    /// | `PORT`                  | `8000`                      |
    /// | `OPENAI_BASE_URL`       | `https://api.openai.com/v1` |
    /// | `PROVIDER_TIMEOUT_SECS` | `60`                        |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENAI_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingCredential("OPENAI_API_KEY"))?;

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host.trim().to_string();
        if host.is_empty() || host.contains(char::is_whitespace) {
            return Err(ConfigError::InvalidHost(host));
        }

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        let timeout = match lookup("PROVIDER_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let origins = lookup("CORS_ORIGINS").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());
        let cors_origins = parse_origins(&origins)?;

        let base_url = lookup("OPENAI_BASE_URL")
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let mut provider = ProviderConfig::new(api_key, base_url.trim().trim_end_matches('/'));
        provider.timeout = timeout;

        Ok(Self {
            host,
            port,
            cors_origins,
            provider,
        })
    }

    /// Address in a form `TcpListener::bind` resolves, hostnames included.
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

/// Splits a comma separated origin list. Blank entries are skipped and a `*`
/// entry anywhere opens the list to every origin.
pub fn parse_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    let entries: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .collect();

    if entries.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    entries
        .into_iter()
        .map(|o| HeaderValue::from_str(o).map_err(|_| ConfigError::InvalidOrigin(o.to_string())))
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}
