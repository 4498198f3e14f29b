//! Application configuration from environment variables.
//!
//! Load configuration using `ApiConfig::from_env()` after calling `dotenvy::dotenv()`.
//! The server resolves it at runtime and ships it to the browser with the
//! rendered page. A bundle started without a server-rendered page has no
//! process environment and falls back to the value captured at build time.

use serde::{Deserialize, Serialize};

/// Name of the variable holding the backend base URL
pub const API_BASE_URL_VAR: &str = "API_BASE_URL";

/// Configuration errors. These are not retryable: the process has to be
/// restarted (or the bundle rebuilt) with the right settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "API_BASE_URL is not defined. Create a .env file based on .env.example and set the backend URL."
    )]
    MissingApiBaseUrl,
}

/// API client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Backend base URL
    /// Example: http://localhost:5000
    pub api_base_url: Option<String>,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::resolve(
            std::env::var(API_BASE_URL_VAR).ok(),
            option_env!("API_BASE_URL"),
        )
    }

    /// Pick the runtime value, else the build-time one. Blank values count as unset.
    fn resolve(runtime: Option<String>, build_time: Option<&str>) -> Self {
        let usable = |url: &String| !url.trim().is_empty();
        let api_base_url = runtime
            .filter(usable)
            .or_else(|| build_time.map(str::to_string).filter(usable));

        Self { api_base_url }
    }

    /// Configuration pointing at an explicit backend
    pub fn with_base_url(url: impl Into<String>) -> Self {
        Self {
            api_base_url: Some(url.into()),
        }
    }

    /// Check if the API base URL is configured
    pub fn has_api_base_url(&self) -> bool {
        self.api_base_url.is_some()
    }

    /// Base URL with any trailing slash removed
    pub fn api_base_url(&self) -> Result<&str, ConfigError> {
        self.api_base_url
            .as_deref()
            .map(|url| url.strip_suffix('/').unwrap_or(url))
            .ok_or(ConfigError::MissingApiBaseUrl)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_url_present() {
        let config = ApiConfig::with_base_url("http://localhost:5000");

        assert!(config.has_api_base_url());
        assert_eq!(config.api_base_url(), Ok("http://localhost:5000"));
    }

    #[test]
    fn test_api_base_url_strips_trailing_slash() {
        let config = ApiConfig::with_base_url("http://localhost:5000/");

        assert_eq!(config.api_base_url(), Ok("http://localhost:5000"));
    }

    #[test]
    fn test_api_base_url_missing() {
        let config = ApiConfig { api_base_url: None };

        assert!(!config.has_api_base_url());
        assert_eq!(config.api_base_url(), Err(ConfigError::MissingApiBaseUrl));
    }

    #[test]
    fn test_missing_base_url_message_names_variable() {
        let message = ConfigError::MissingApiBaseUrl.to_string();

        assert!(message.contains("API_BASE_URL"));
        assert!(message.contains(".env"));
    }

    #[test]
    fn test_resolve_prefers_runtime_value() {
        let config = ApiConfig::resolve(
            Some("http://runtime:5000".to_string()),
            Some("http://compiled:5000"),
        );

        assert_eq!(config.api_base_url(), Ok("http://runtime:5000"));
    }

    #[test]
    fn test_resolve_falls_back_to_build_time_value() {
        let unset = ApiConfig::resolve(None, Some("http://compiled:5000"));
        let blank = ApiConfig::resolve(Some("  ".to_string()), Some("http://compiled:5000"));

        assert_eq!(unset.api_base_url(), Ok("http://compiled:5000"));
        assert_eq!(blank.api_base_url(), Ok("http://compiled:5000"));
    }

    #[test]
    fn test_resolve_without_any_value() {
        assert!(!ApiConfig::resolve(None, None).has_api_base_url());
        assert!(!ApiConfig::resolve(Some(String::new()), Some(" ")).has_api_base_url());
    }

    #[test]
    fn test_config_survives_serialization() {
        // The server hands its config to the browser as JSON
        let config = ApiConfig::with_base_url("http://localhost:5000");

        let json = serde_json::to_string(&config).unwrap();
        let restored: ApiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, config);
    }
}
