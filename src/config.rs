//! Client configuration
//!
//! [`ClientConfig`] holds the account credentials, the API domains, HTTP
//! behaviour and the webhook callback address. It can be loaded from YAML,
//! from a file, or from the environment.

use crate::auth::Credentials;
use crate::error::{Error, Result, ResultExt};
use crate::http::{HttpClientConfig, RateLimiterConfig};
use crate::types::BackoffType;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable holding the account SID
pub const ENV_ACCOUNT_SID: &str = "TWILIO_ACCOUNT_SID";

/// Environment variable holding the auth token
pub const ENV_AUTH_TOKEN: &str = "TWILIO_AUTH_TOKEN";

// ============================================================================
// Top-Level Client Config
// ============================================================================

/// Complete client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Account SID (`AC...`)
    #[serde(default)]
    pub account_sid: String,

    /// Auth token for the account
    #[serde(default)]
    pub auth_token: String,

    /// Core REST API
    #[serde(default = "default_api")]
    pub api: ApiConfig,

    /// Task-router API
    #[serde(default = "default_taskrouter")]
    pub taskrouter: ApiConfig,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Webhook callback server settings
    #[serde(default)]
    pub webhook: WebhookConfig,
}

impl ClientConfig {
    /// Config with the given credentials and defaults for everything else
    pub fn new(account_sid: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
            api: default_api(),
            taskrouter: default_taskrouter(),
            http: HttpConfig::default(),
            webhook: WebhookConfig::default(),
        }
    }

    /// Parse a YAML document
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: ClientConfig = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load a YAML config file; blank credentials are filled from the
    /// environment
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config file {}: {e}", path.display()))
        })?;
        let mut config = Self::from_yaml(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        config.fill_from(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Defaults with credentials from `TWILIO_ACCOUNT_SID` / `TWILIO_AUTH_TOKEN`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults with credentials read through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new("", "");
        config.fill_from(lookup);
        config.validate()?;
        Ok(config)
    }

    /// Fill blank credentials through `lookup`
    fn fill_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.account_sid.is_empty() {
            self.account_sid = lookup(ENV_ACCOUNT_SID).unwrap_or_default();
        }
        if self.auth_token.is_empty() {
            self.auth_token = lookup(ENV_AUTH_TOKEN).unwrap_or_default();
        }
    }

    /// Check that the config is usable
    pub fn validate(&self) -> Result<()> {
        if self.account_sid.trim().is_empty() {
            return Err(Error::missing_field("account_sid"));
        }
        if self.auth_token.trim().is_empty() {
            return Err(Error::missing_field("auth_token"));
        }
        self.api.validate("api")?;
        self.taskrouter.validate("taskrouter")?;
        if self.webhook.port == 0 {
            return Err(Error::InvalidConfigValue {
                field: "webhook.port".to_string(),
                message: "must be non-zero".to_string(),
            });
        }
        Ok(())
    }

    /// Credentials for HTTP basic authentication
    pub fn credentials(&self) -> Result<Credentials> {
        Credentials::new(self.account_sid.as_str(), self.auth_token.as_str())
    }

    /// HTTP client settings derived from this config
    pub fn http_client_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .timeout(Duration::from_secs(self.http.timeout_seconds))
            .max_retries(self.http.max_retries)
            .backoff(
                self.http.retry_backoff.backoff_type,
                Duration::from_millis(self.http.retry_backoff.initial_ms),
                Duration::from_millis(self.http.retry_backoff.max_ms),
            );

        builder = match &self.http.rate_limit {
            Some(rate_limit) => builder.rate_limit(rate_limit.clone()),
            None => builder.no_rate_limit(),
        };

        builder.build()
    }
}

// ============================================================================
// API Domains
// ============================================================================

/// Domain and version of one API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL, e.g. `https://api.twilio.com`
    pub domain: String,

    /// Version path segment, e.g. `2010-04-01`
    pub version: String,
}

impl ApiConfig {
    fn validate(&self, field: &str) -> Result<()> {
        url::Url::parse(&self.domain).map_err(|e| Error::InvalidConfigValue {
            field: format!("{field}.domain"),
            message: e.to_string(),
        })?;
        if self.version.trim().is_empty() {
            return Err(Error::missing_field(format!("{field}.version")));
        }
        Ok(())
    }
}

fn default_api() -> ApiConfig {
    ApiConfig {
        domain: "https://api.twilio.com".to_string(),
        version: "2010-04-01".to_string(),
    }
}

fn default_taskrouter() -> ApiConfig {
    ApiConfig {
        domain: "https://taskrouter.twilio.com".to_string(),
        version: "v1".to_string(),
    }
}

// ============================================================================
// HTTP Config
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Maximum number of retries for idempotent requests
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Retry backoff configuration
    #[serde(default)]
    pub retry_backoff: BackoffConfig,

    /// Client-side rate limit; `null` disables it
    #[serde(default = "default_rate_limit")]
    pub rate_limit: Option<RateLimiterConfig>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            max_retries: default_max_retries(),
            retry_backoff: BackoffConfig::default(),
            rate_limit: default_rate_limit(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_rate_limit() -> Option<RateLimiterConfig> {
    Some(RateLimiterConfig::default())
}

/// Backoff configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackoffConfig {
    /// Type of backoff
    #[serde(rename = "type", default)]
    pub backoff_type: BackoffType,

    /// Initial delay in milliseconds
    #[serde(default = "default_initial_ms")]
    pub initial_ms: u64,

    /// Maximum delay in milliseconds
    #[serde(default = "default_max_ms")]
    pub max_ms: u64,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            backoff_type: BackoffType::Exponential,
            initial_ms: default_initial_ms(),
            max_ms: default_max_ms(),
        }
    }
}

fn default_initial_ms() -> u64 {
    100
}

fn default_max_ms() -> u64 {
    60000
}

// ============================================================================
// Webhook Config
// ============================================================================

/// Where the callback server listens and how the API reaches it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// Public hostname written into callback URLs
    #[serde(default = "default_hostname")]
    pub hostname: String,

    /// Port the server binds and advertises
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            hostname: default_hostname(),
            port: default_port(),
        }
    }
}

fn default_hostname() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    31337
}
