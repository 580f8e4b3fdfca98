use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::common::{ConfigError, ConfigResult};

pub const CANDIDATE_ID_VAR: &str = "CANDIDATE_ID";
pub const API_URL_VAR: &str = "API_URL";

#[derive(Debug, Clone, Serialize)]
pub struct Config {
    pub candidate_id: String,
    pub api_url: String,
    pub request_timeout_secs: Option<u64>,
    pub retry: RetryConfig,
    pub replay: ReplayConfig,
}

/// On-disk shape: required keys stay optional here so absence can be told apart from emptiness.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    candidate_id: Option<String>,
    api_url: Option<String>,
    request_timeout_secs: Option<u64>,
    #[serde(default)]
    retry: RetryConfig,
    #[serde(default)]
    replay: ReplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Total attempts per creation request while rate limited.
    pub max_retries: u32,
    pub initial_delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    pub pacing_ms: u64,
    pub policy: ReplayPolicy,
}

/// What the replay driver does when a creation request fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplayPolicy {
    #[default]
    HaltOnError,
    /// Log non-retryable failures and move on. Retry exhaustion still halts.
    ContinueOnError,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 5,
            initial_delay_ms: 1000,
        }
    }
}

impl RetryConfig {
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            pacing_ms: 500,
            policy: ReplayPolicy::HaltOnError,
        }
    }
}

impl ReplayConfig {
    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.pacing_ms)
    }
}

impl Config {
    pub fn new(candidate_id: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            candidate_id: candidate_id.into(),
            api_url: api_url.into(),
            request_timeout_secs: None,
            retry: RetryConfig::default(),
            replay: ReplayConfig::default(),
        }
    }

    /// Reads `CANDIDATE_ID` and `API_URL` from the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let candidate_id = required(&lookup, CANDIDATE_ID_VAR)?;
        let api_url = required(&lookup, API_URL_VAR)?;
        let config = Self::new(candidate_id, api_url);
        config.validate()?;
        Ok(config)
    }

    pub async fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        let config = Config {
            candidate_id: require(file.candidate_id, "candidate_id")?,
            api_url: require(file.api_url, "api_url")?,
            request_timeout_secs: file.request_timeout_secs,
            retry: file.retry,
            replay: file.replay,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.candidate_id.is_empty() {
            return Err(ConfigError::Empty { name: CANDIDATE_ID_VAR.to_string() });
        }
        if self.api_url.is_empty() {
            return Err(ConfigError::Empty { name: API_URL_VAR.to_string() });
        }
        if self.retry.max_retries == 0 {
            return Err(ConfigError::Invalid {
                reason: "retry.max_retries must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

fn required<F>(lookup: &F, name: &str) -> ConfigResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    require(lookup(name), name)
}

fn require(value: Option<String>, name: &str) -> ConfigResult<String> {
    match value {
        None => Err(ConfigError::Missing { name: name.to_string() }),
        Some(v) if v.is_empty() => Err(ConfigError::Empty { name: name.to_string() }),
        Some(v) => Ok(v),
    }
}
