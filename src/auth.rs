// src/auth.rs
use url::Url;

use crate::error::ConfigError;
use crate::git;

/// `ai-commit.apiKey` value that routes the lookup through the OS credential
/// helper chain.
const CREDENTIAL_SENTINEL: &str = "git-credentials";

// =============================================================================
// KEY SOURCE
// =============================================================================

/// How a raw `ai-commit.apiKey` value is interpreted. Decided once, up
/// front; everything downstream matches on the variant instead of re-sniffing
/// the string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKeySource {
    /// Nothing configured. Local providers accept unauthenticated requests.
    Empty,
    /// `$NAME`: the key lives in the named environment variable.
    EnvVar(String),
    /// `git-credentials` (any case): the key lives in the credential store.
    CredentialHelper,
    /// Anything else is the key itself.
    Literal(String),
}

impl ApiKeySource {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(ApiKeySource::Empty);
        }
        if let Some(name) = raw.strip_prefix('$') {
            if name.is_empty() {
                return Err(ConfigError::InvalidKeyReference);
            }
            return Ok(ApiKeySource::EnvVar(name.to_string()));
        }
        if raw.eq_ignore_ascii_case(CREDENTIAL_SENTINEL) {
            return Ok(ApiKeySource::CredentialHelper);
        }
        Ok(ApiKeySource::Literal(raw.to_string()))
    }
}

// =============================================================================
// RESOLUTION
// =============================================================================

/// Resolve the configured key reference into the secret itself.
///
/// `endpoint` is consulted only for the credential-helper case, where its
/// scheme and host select which stored credential to read. The resolved
/// value goes straight to the caller and is never logged.
pub fn resolve_api_key(raw: &str, endpoint: &str) -> Result<String, ConfigError> {
    match ApiKeySource::parse(raw)? {
        ApiKeySource::Empty => Ok(String::new()),
        ApiKeySource::EnvVar(name) => match std::env::var(&name) {
            Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
            _ => Err(ConfigError::MissingEnvironmentVariable { name }),
        },
        ApiKeySource::CredentialHelper => {
            let (protocol, host) = credential_target(endpoint)?;
            let stored = git::fill_credential(&protocol, &host)
                .map_err(|e| ConfigError::CredentialHelper(e.to_string()))?;
            match stored {
                Some(secret) if !secret.trim().is_empty() => Ok(secret.trim().to_string()),
                _ => Err(ConfigError::CredentialNotFound { protocol, host }),
            }
        }
        ApiKeySource::Literal(value) => Ok(value),
    }
}

/// The `(protocol, host)` pair handed to the credential helper. A port is
/// folded into the host part, matching git's own credential matching rules.
/// Checked before anything is spawned.
pub fn credential_target(endpoint: &str) -> Result<(String, String), ConfigError> {
    let invalid = || ConfigError::InvalidCredentialEndpoint {
        endpoint: endpoint.to_string(),
    };
    let url = Url::parse(endpoint).map_err(|_| invalid())?;
    let host = url.host_str().ok_or_else(invalid)?;
    let host = match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    };
    Ok((url.scheme().to_string(), host))
}
