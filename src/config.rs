//! Configuration management for the Contatos MCP Server.
//!
//! Connection settings for the contact store are read from environment
//! variables (optionally seeded from a `.env` file) and handed to the client at
//! startup.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Base URL of the public Contato API; the token is appended as a path segment.
pub const DEFAULT_API_BASE_URL: &str = "https://api.box3.work/api/Contato";

/// Configuration for the Contatos MCP Server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Contato API base URL (default: `DEFAULT_API_BASE_URL`)
    pub api_base_url: String,

    /// Access token, sent as the last path segment of every request
    pub api_token: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `CONTATOS_API_TOKEN`: access token for the contact store
    ///
    /// Optional environment variables:
    /// - `CONTATOS_API_BASE_URL`: base URL (default: `https://api.box3.work/api/Contato`)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout, which carries MCP traffic
        let _ = dotenvy::dotenv();

        let api_base_url =
            env::var("CONTATOS_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        let api_token = env::var("CONTATOS_API_TOKEN")
            .map_err(|_| ConfigError::MissingVar("CONTATOS_API_TOKEN".to_string()))?;

        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "CONTATOS_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        if api_token.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTATOS_API_TOKEN".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        if api_token.contains('/') {
            return Err(ConfigError::InvalidValue {
                var: "CONTATOS_API_TOKEN".to_string(),
                reason: "Must be a single path segment".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;

        Ok(Config {
            api_base_url,
            api_token: api_token.trim().to_string(),
            request_timeout,
        })
    }

    /// The collection URL, `{base}/{token}`.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            self.api_token
        )
    }

    /// Parse an environment variable as a positive u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => match val.trim().parse::<u64>() {
                Ok(n) if n > 0 => Ok(n),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a positive number, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_token: String::new(),
            request_timeout: 10,
        }
    }
}
