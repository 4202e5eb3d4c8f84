// src/endpoint.rs
use url::Url;

use crate::error::ConfigError;

const API_VERSION_SEGMENT: &str = "v1";

/// Canonicalize a configured endpoint into a full chat-completions URL.
///
/// Accepts anything from a bare host to an already-complete URL and always
/// lands on `<scheme>://<host>[:port]/<prefix>/v1/chat/completions`:
/// the query string is dropped, an existing `/chat/completions` suffix is
/// stripped before reprocessing, empty path segments are collapsed, and `/v1`
/// is appended unless it is already the final segment. Running the result
/// through again changes nothing.
///
/// Empty input passes through as empty; whether an endpoint is required at
/// all is decided by the caller.
pub fn normalize_endpoint(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(String::new());
    }

    let mut url = Url::parse(trimmed).map_err(|e| ConfigError::InvalidEndpoint {
        endpoint: trimmed.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidEndpoint {
            endpoint: trimmed.to_string(),
            reason: "not a base URL".to_string(),
        });
    }

    url.set_query(None);
    url.set_fragment(None);

    let mut segments: Vec<String> = url
        .path_segments()
        .map(|parts| {
            parts
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    if segments.len() >= 2
        && segments[segments.len() - 2] == "chat"
        && segments[segments.len() - 1] == "completions"
    {
        segments.truncate(segments.len() - 2);
    }
    if segments.last().map(String::as_str) != Some(API_VERSION_SEGMENT) {
        segments.push(API_VERSION_SEGMENT.to_string());
    }
    segments.push("chat".to_string());
    segments.push("completions".to_string());

    url.set_path(&segments.join("/"));
    Ok(url.to_string())
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: &str = "https://api.openai.com/v1/chat/completions";

    #[test]
    fn bare_host_gets_full_path() {
        assert_eq!(normalize_endpoint("https://api.openai.com").unwrap(), CANONICAL);
    }

    #[test]
    fn trailing_slash_is_dropped() {
        assert_eq!(normalize_endpoint("https://api.openai.com/").unwrap(), CANONICAL);
    }

    #[test]
    fn v1_base_gets_chat_completions() {
        assert_eq!(normalize_endpoint("https://api.openai.com/v1").unwrap(), CANONICAL);
    }

    #[test]
    fn v1_with_trailing_slash() {
        assert_eq!(normalize_endpoint("https://api.openai.com/v1/").unwrap(), CANONICAL);
    }

    #[test]
    fn already_complete_url_is_unchanged() {
        assert_eq!(normalize_endpoint(CANONICAL).unwrap(), CANONICAL);
    }

    #[test]
    fn normalize_is_idempotent() {
        let inputs = [
            "https://api.openai.com",
            "https://api.openai.com/v1/",
            "https://gw.example.com/openai/v1",
            "http://localhost:11434",
            "https://api.example.com/v1/chat/completions/",
        ];
        for input in inputs {
            let once = normalize_endpoint(input).unwrap();
            let twice = normalize_endpoint(&once).unwrap();
            assert_eq!(once, twice, "re-normalizing {input} changed the result");
        }
    }

    #[test]
    fn existing_path_prefix_is_preserved() {
        assert_eq!(
            normalize_endpoint("https://gw.example.com/openai/v1").unwrap(),
            "https://gw.example.com/openai/v1/chat/completions"
        );
    }

    #[test]
    fn prefix_without_v1_gains_one() {
        assert_eq!(
            normalize_endpoint("https://gw.example.com/openai").unwrap(),
            "https://gw.example.com/openai/v1/chat/completions"
        );
    }

    #[test]
    fn port_is_preserved() {
        assert_eq!(
            normalize_endpoint("http://localhost:11434/v1").unwrap(),
            "http://localhost:11434/v1/chat/completions"
        );
    }

    #[test]
    fn query_string_is_stripped() {
        assert_eq!(
            normalize_endpoint("https://api.openai.com/v1?api-version=2024-02-01").unwrap(),
            CANONICAL
        );
    }

    #[test]
    fn chat_completions_suffix_with_trailing_slash() {
        assert_eq!(
            normalize_endpoint("https://api.openai.com/v1/chat/completions/").unwrap(),
            CANONICAL
        );
    }

    #[test]
    fn doubled_slashes_are_collapsed() {
        assert_eq!(
            normalize_endpoint("https://api.openai.com//v1//chat/completions").unwrap(),
            CANONICAL
        );
    }

    #[test]
    fn empty_input_passes_through() {
        assert_eq!(normalize_endpoint("").unwrap(), "");
        assert_eq!(normalize_endpoint("   ").unwrap(), "");
    }

    #[test]
    fn unparseable_input_is_rejected() {
        let err = normalize_endpoint("not a url").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEndpoint { .. }));
        assert!(err.to_string().contains("not a url"));
    }

    #[test]
    fn opaque_url_is_rejected() {
        let err = normalize_endpoint("mailto:ops@example.com").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEndpoint { .. }));
    }
}
