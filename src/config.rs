// src/config.rs
use crate::auth::resolve_api_key;
use crate::endpoint::normalize_endpoint;
use crate::error::ConfigError;
use crate::git;

// =============================================================================
// KEYS AND DEFAULTS
// =============================================================================

pub const CONFIG_ENDPOINT: &str = "ai-commit.endpoint";
pub const CONFIG_MODEL: &str = "ai-commit.model";
pub const CONFIG_API_KEY: &str = "ai-commit.apiKey";
pub const CONFIG_MAX_DIFF_BYTES: &str = "ai-commit.maxDiffBytes";
pub const CONFIG_TIMEOUT_SECONDS: &str = "ai-commit.timeoutSeconds";

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-5-nano";
pub const DEFAULT_MAX_DIFF_BYTES: usize = 200_000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// CONFIG
// =============================================================================

/// Raw settings as read from git config, defaults applied. One read per
/// invocation; nothing here touches the network.
#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub model: String,
    /// Key reference, not the key: may be `$NAME`, `git-credentials`, the
    /// key itself, or empty.
    pub api_key: String,
    /// 0 means unlimited.
    pub max_diff_bytes: usize,
    pub timeout_secs: u64,
}

impl Config {
    /// Read from the effective git config (system + global + local).
    pub fn from_git() -> Self {
        Self::from_getter(git::config_get)
    }

    /// Read through an injected getter. The parsing rules live here, the
    /// lookup does not, so tests feed closures instead of repositories.
    pub fn from_getter(mut getter: impl FnMut(&str) -> Option<String>) -> Self {
        let mut config = Config {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: String::new(),
            max_diff_bytes: DEFAULT_MAX_DIFF_BYTES,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        };

        // A blank endpoint keeps the default; a blank model deliberately
        // does not, so a cleared model surfaces as a configuration error.
        if let Some(value) = getter(CONFIG_ENDPOINT) {
            if !value.trim().is_empty() {
                config.endpoint = value.trim().to_string();
            }
        }
        if let Some(value) = getter(CONFIG_MODEL) {
            config.model = value.trim().to_string();
        }
        if let Some(value) = getter(CONFIG_API_KEY) {
            config.api_key = value.trim().to_string();
        }
        if let Some(value) = getter(CONFIG_MAX_DIFF_BYTES) {
            if let Ok(n) = value.trim().parse::<i64>() {
                config.max_diff_bytes = if n <= 0 { 0 } else { n as usize };
            }
        }
        if let Some(value) = getter(CONFIG_TIMEOUT_SECONDS) {
            if let Ok(n) = value.trim().parse::<i64>() {
                if n > 0 {
                    config.timeout_secs = n as u64;
                }
            }
        }

        config
    }

    /// Validate, canonicalize the endpoint and resolve the key reference.
    /// Runs once, before the client is built.
    pub fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::Missing {
                key: CONFIG_ENDPOINT,
            });
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::Missing { key: CONFIG_MODEL });
        }

        let endpoint = normalize_endpoint(&self.endpoint)?;
        let api_key = resolve_api_key(&self.api_key, &endpoint)?;
        log::debug!("resolved endpoint {endpoint} (model {})", self.model);

        Ok(ResolvedConfig {
            endpoint,
            model: self.model.clone(),
            api_key,
            max_diff_bytes: self.max_diff_bytes,
            timeout_secs: self.timeout_secs,
        })
    }
}

/// Settings ready for use: endpoint canonicalized to the full
/// chat-completions URL, key reference replaced by the key itself.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: String,
    pub max_diff_bytes: usize,
    pub timeout_secs: u64,
}
