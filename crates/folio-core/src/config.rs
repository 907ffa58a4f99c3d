//! Runtime configuration for the contributions fetch.

use serde::{Deserialize, Serialize};

/// GitHub GraphQL endpoint.
pub const DEFAULT_GITHUB_ENDPOINT: &str = "https://api.github.com/graphql";
/// Account whose contribution calendar is shown.
pub const DEFAULT_GITHUB_LOGIN: &str = "utkarsh240";

/// Where and how to query contributions.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubConfig {
    pub login: String,
    pub endpoint: String,
    /// Bearer token; `None` means the live fetch is skipped.
    #[serde(default, skip_serializing)]
    pub token: Option<String>,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            login: DEFAULT_GITHUB_LOGIN.to_string(),
            endpoint: DEFAULT_GITHUB_ENDPOINT.to_string(),
            token: None,
        }
    }
}

// Keeps the token out of logs.
impl std::fmt::Debug for GithubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubConfig")
            .field("login", &self.login)
            .field("endpoint", &self.endpoint)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl GithubConfig {
    /// Default login and endpoint with the given token. Empty or
    /// whitespace-only tokens count as absent.
    pub fn with_token(token: Option<&str>) -> Self {
        Self {
            token: normalize_token(token),
            ..Self::default()
        }
    }

    pub fn login(mut self, login: impl Into<String>) -> Self {
        self.login = login.into();
        self
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// The usable token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

fn normalize_token(token: Option<&str>) -> Option<String> {
    token
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GithubConfig::default();
        assert_eq!(config.login, "utkarsh240");
        assert_eq!(config.endpoint, DEFAULT_GITHUB_ENDPOINT);
        assert!(config.token().is_none());
    }

    #[test]
    fn test_blank_token_is_absent() {
        assert!(GithubConfig::with_token(Some("")).token().is_none());
        assert!(GithubConfig::with_token(Some("   ")).token().is_none());
        assert!(GithubConfig::with_token(None).token().is_none());
        assert_eq!(
            GithubConfig::with_token(Some(" ghp_abc ")).token(),
            Some("ghp_abc")
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = GithubConfig::with_token(Some("secret")).login("someone");
        let printed = format!("{config:?}");
        assert!(!printed.contains("secret"));
        assert!(printed.contains("someone"));
    }
}
