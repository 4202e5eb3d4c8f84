// src/error.rs
use thiserror::Error;

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Failures reading `ai-commit.*` settings or resolving the API key.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing git config: {key} (set it with: git config {key} <value>)")]
    Missing { key: &'static str },

    #[error("invalid endpoint URL {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("invalid API key reference: \"$\" must be followed by an environment variable name")]
    InvalidKeyReference,

    #[error("environment variable {name} is unset or empty")]
    MissingEnvironmentVariable { name: String },

    #[error(
        "no stored credential for {protocol}://{host}; add one with:\n  \
         printf 'protocol={protocol}\\nhost={host}\\nusername=api-key\\npassword=YOUR_KEY\\n\\n' \
         | git credential approve"
    )]
    CredentialNotFound { protocol: String, host: String },

    #[error("endpoint {endpoint:?} has no usable scheme and host for a credential lookup")]
    InvalidCredentialEndpoint { endpoint: String },

    #[error("git credential helper failed: {0}")]
    CredentialHelper(String),
}

// =============================================================================
// GIT
// =============================================================================

/// Failures shelling out to git.
#[derive(Debug, Error)]
pub enum GitError {
    #[error("failed to run git {args}")]
    Spawn {
        args: String,
        #[source]
        source: std::io::Error,
    },

    #[error("git {args} failed: {stderr}")]
    CommandFailed { args: String, stderr: String },

    #[error("git diff --cached failed: {stderr}")]
    DiffUnavailable { stderr: String },
}

// =============================================================================
// COMPLETION CLIENT
// =============================================================================

/// Failures talking to the chat-completions endpoint.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed")]
    Network(#[source] reqwest::Error),

    #[error("request timed out after {seconds}s (raise ai-commit.timeoutSeconds to wait longer)")]
    Timeout { seconds: u64 },

    #[error("API error (HTTP {status}): {message}")]
    HttpStatus { status: u16, message: String },

    #[error("API error: {message}")]
    Api { message: String },

    #[error("malformed API response (body starts: {preview:?})")]
    MalformedResponse {
        #[source]
        source: serde_json::Error,
        preview: String,
    },

    #[error("API response contained no choices")]
    NoChoices,

    #[error("LLM returned empty commit message")]
    EmptyMessage,
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_names_the_key_and_the_fix() {
        let err = ConfigError::Missing {
            key: "ai-commit.model",
        };
        let text = err.to_string();
        assert!(text.contains("ai-commit.model"));
        assert!(text.contains("git config"));
    }

    #[test]
    fn credential_not_found_names_the_queried_pair() {
        let err = ConfigError::CredentialNotFound {
            protocol: "https".into(),
            host: "api.openai.com".into(),
        };
        let text = err.to_string();
        assert!(text.contains("https://api.openai.com"));
        assert!(text.contains("git credential approve"));
        assert!(text.contains(crate::git::CREDENTIAL_USERNAME));
    }

    #[test]
    fn http_status_error_carries_the_code() {
        let err = ClientError::HttpStatus {
            status: 401,
            message: "Invalid API key".into(),
        };
        assert!(err.to_string().contains("401"));
        assert!(err.to_string().contains("Invalid API key"));
    }

    #[test]
    fn timeout_is_distinguishable_from_network() {
        let err = ClientError::Timeout { seconds: 30 };
        assert!(err.to_string().contains("timed out after 30s"));
    }
}
