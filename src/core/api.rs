//! Generic JSON API client
//!
//! Wraps `reqwest` with the conventions the backend expects:
//! - absolute URLs built from the configured base URL
//! - JSON `Accept`/`Content-Type` headers, overridable per request
//! - non-2xx responses turned into a single readable message, including
//!   problem-details titles and per-field validation errors
//! - empty bodies reported as [`ApiResponse::NoContent`]
//! - no HTTP caching; browser builds issue every fetch with `cache: no-store`

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::config::{ApiConfig, ConfigError};

/// API client error types
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-success HTTP status, with the composed human readable message
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Network request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Invalid request header: {0}")]
    InvalidHeader(String),

    #[error("API returned no content")]
    NoContent,

    #[error("API returned a body that is not valid JSON: {0}")]
    UnexpectedBody(String),
}

impl ApiError {
    /// HTTP status code, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Outcome of a successful (2xx) call
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    /// The body was empty
    NoContent,
    /// The body parsed as `T`
    Json(T),
    /// The body was not valid JSON for `T`; passed through untouched
    Raw(String),
}

impl<T: DeserializeOwned> ApiResponse<T> {
    fn from_body(body: String) -> Self {
        if body.is_empty() {
            return ApiResponse::NoContent;
        }

        match serde_json::from_str::<T>(&body) {
            Ok(value) => ApiResponse::Json(value),
            Err(e) => {
                leptos::logging::warn!(
                    "API response is not valid JSON, passing raw text through: {}",
                    e
                );
                ApiResponse::Raw(body)
            }
        }
    }
}

impl<T> ApiResponse<T> {
    /// Require a parsed JSON body
    pub fn into_json(self) -> Result<T, ApiError> {
        match self {
            ApiResponse::Json(value) => Ok(value),
            ApiResponse::NoContent => Err(ApiError::NoContent),
            ApiResponse::Raw(body) => Err(ApiError::UnexpectedBody(body)),
        }
    }

    pub fn is_no_content(&self) -> bool {
        matches!(self, ApiResponse::NoContent)
    }
}

/// HTTP cache behaviour for a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheMode {
    /// Never read from or write to the HTTP cache
    #[default]
    NoStore,
    /// Leave caching to the transport
    Default,
}

/// Per-request options: method, extra headers and an already encoded body
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub cache: CacheMode,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: Vec::new(),
            body: None,
            cache: CacheMode::NoStore,
        }
    }
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    /// POST with `payload` encoded as JSON
    pub fn post_json<B: Serialize>(payload: &B) -> Result<Self, ApiError> {
        Ok(Self {
            method: Method::POST,
            body: Some(serde_json::to_string(payload)?),
            ..Self::default()
        })
    }

    /// Add a header; it replaces the default header of the same name
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Default JSON headers overlaid with the caller's headers
    fn merged_headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| ApiError::InvalidHeader(name.clone()))?;
            let value =
                HeaderValue::from_str(value).map_err(|_| ApiError::InvalidHeader(name.to_string()))?;
            headers.insert(name, value);
        }

        Ok(headers)
    }
}

/// JSON API client bound to one backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client, failing if no base URL is configured
    pub fn new(config: &ApiConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: config.api_base_url()?.to_string(),
            http: reqwest::Client::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Issue a request and decode the response
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse<T>, ApiError> {
        let url = self.url_for(path);
        let headers = options.merged_headers()?;

        tracing::debug!("API request: {} {}", options.method, url);

        let mut request = self.http.request(options.method, &url).headers(headers);
        if let Some(body) = options.body {
            request = request.body(body);
        }
        // The native client keeps no HTTP cache; only the browser fetch needs telling
        #[cfg(target_arch = "wasm32")]
        let request = match options.cache {
            CacheMode::NoStore => request.fetch_cache_no_store(),
            CacheMode::Default => request,
        };

        let response = request.send().await?;
        let status = response.status();
        // Read once; the body stream cannot be consumed twice
        let body = response.text().await?;

        if !status.is_success() {
            // reqwest does not expose the server's reason phrase, so the
            // standard phrase for the code stands in for `statusText`
            let message = compose_error_message(
                status.as_u16(),
                status.canonical_reason().unwrap_or(""),
                &body,
            );
            tracing::debug!("API error response from {}: {}", url, message);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(ApiResponse::from_body(body))
    }

    /// GET `path` and require a JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.fetch(path, RequestOptions::get()).await?.into_json()
    }

    /// POST `payload` as JSON and require a JSON body
    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        payload: &B,
    ) -> Result<T, ApiError> {
        self.fetch(path, RequestOptions::post_json(payload)?)
            .await?
            .into_json()
    }
}

/// Build the message for a non-success response.
///
/// The first line is always the status line. If the body is JSON, the
/// problem-details title (`title`, else `error`, else `message`) and every
/// entry of the `errors` map follow, one per line.
pub fn compose_error_message(status: u16, status_text: &str, body: &str) -> String {
    let mut message = format!("API call failed with status {}: {}", status, status_text);

    let Ok(parsed) = serde_json::from_str::<Value>(body) else {
        return message;
    };

    let title = ["title", "error", "message"]
        .iter()
        .find_map(|key| parsed.get(*key).filter(|value| !value.is_null()));
    if let Some(title) = title.filter(|value| is_truthy(value)) {
        message.push('\n');
        message.push_str(&display_value(title));
    }

    let flattened = flatten_errors(parsed.get("errors")).join("\n");
    if !flattened.is_empty() {
        message.push('\n');
        message.push_str(&flattened);
    }

    message
}

/// Validation messages from an `errors` map (or list), one level flattened
fn flatten_errors(errors: Option<&Value>) -> Vec<String> {
    let entries: Vec<&Value> = match errors {
        Some(Value::Object(map)) => map.values().collect(),
        Some(Value::Array(items)) => items.iter().collect(),
        _ => return Vec::new(),
    };

    entries
        .into_iter()
        .flat_map(|entry| match entry {
            Value::Array(items) => items.iter().collect::<Vec<_>>(),
            other => vec![other],
        })
        .map(display_value)
        .collect()
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(display_value).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}
