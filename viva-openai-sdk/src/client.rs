//! OpenAI API client

use crate::chat::{ChatCompletion, ChatCompletionParams};
use crate::error::{ApiErrorResponse, OpenAiError};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use std::collections::HashMap;
use std::time::Duration;

/// Default API base URL
const DEFAULT_API_BASE: &str = "https://api.openai.com";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

// ============================================================================
// Raw Response Types
// ============================================================================

/// Raw HTTP response metadata for debugging
///
/// Provides access to response headers, status code, and request ID for
/// troubleshooting against OpenAI support.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,

    /// Response headers
    pub headers: HashMap<String, String>,

    /// OpenAI request ID (from the `x-request-id` header)
    pub request_id: Option<String>,

    /// Rate limit information
    pub rate_limit: Option<RateLimitInfo>,
}

impl RawResponse {
    /// Create from reqwest response (reads headers only)
    fn from_response(response: &reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(k, v)| {
                v.to_str()
                    .ok()
                    .map(|v| (k.as_str().to_string(), v.to_string()))
            })
            .collect();

        let request_id = headers.get("x-request-id").cloned();

        let rate_limit = RateLimitInfo::from_headers(&headers);

        Self {
            status,
            headers,
            request_id,
            rate_limit,
        }
    }

    /// Get a specific header value
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }
}

/// Rate limit information from the `x-ratelimit-*` response headers
#[derive(Debug, Clone)]
pub struct RateLimitInfo {
    /// Requests allowed in the current window
    pub requests_limit: Option<u32>,

    /// Requests remaining in the current window
    pub requests_remaining: Option<u32>,

    /// Time until the request limit resets (e.g., "1s", "6m0s")
    pub requests_reset: Option<String>,

    /// Tokens allowed in the current window
    pub tokens_limit: Option<u32>,

    /// Tokens remaining in the current window
    pub tokens_remaining: Option<u32>,

    /// Time until the token limit resets
    pub tokens_reset: Option<String>,
}

impl RateLimitInfo {
    fn from_headers(headers: &HashMap<String, String>) -> Option<Self> {
        let has_rate_limit_headers = headers.keys().any(|k| k.starts_with("x-ratelimit-"));

        if !has_rate_limit_headers {
            return None;
        }

        Some(Self {
            requests_limit: headers
                .get("x-ratelimit-limit-requests")
                .and_then(|s| s.parse().ok()),
            requests_remaining: headers
                .get("x-ratelimit-remaining-requests")
                .and_then(|s| s.parse().ok()),
            requests_reset: headers.get("x-ratelimit-reset-requests").cloned(),
            tokens_limit: headers
                .get("x-ratelimit-limit-tokens")
                .and_then(|s| s.parse().ok()),
            tokens_remaining: headers
                .get("x-ratelimit-remaining-tokens")
                .and_then(|s| s.parse().ok()),
            tokens_reset: headers.get("x-ratelimit-reset-tokens").cloned(),
        })
    }
}

/// A response with both parsed data and raw HTTP metadata
///
/// Use this when you need access to headers, the request ID, or rate limit
/// figures alongside the parsed response.
#[derive(Debug, Clone)]
pub struct Response<T> {
    /// The parsed response data
    pub data: T,

    /// Raw HTTP response metadata
    pub raw: RawResponse,
}

impl<T> Response<T> {
    /// Get the parsed data
    pub fn into_data(self) -> T {
        self.data
    }

    /// Get the request ID for debugging
    pub fn request_id(&self) -> Option<&str> {
        self.raw.request_id.as_deref()
    }

    /// Get rate limit information
    pub fn rate_limit(&self) -> Option<&RateLimitInfo> {
        self.raw.rate_limit.as_ref()
    }
}

// ============================================================================
// Client
// ============================================================================

/// OpenAI API client
#[derive(Clone)]
pub struct OpenAi {
    client: reqwest::Client,
    api_key: String,
    api_base: String,
}

impl std::fmt::Debug for OpenAi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAi")
            .field("api_base", &self.api_base)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl OpenAi {
    /// Create a new client with an explicit API key
    pub fn new(api_key: impl Into<String>) -> Result<Self, OpenAiError> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a new client from the OPENAI_API_KEY environment variable
    pub fn from_env() -> Result<Self, OpenAiError> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            OpenAiError::Configuration("OPENAI_API_KEY environment variable not set".to_string())
        })?;
        Self::new(api_key)
    }

    /// Create a builder for more advanced configuration
    pub fn builder() -> OpenAiBuilder {
        OpenAiBuilder::new()
    }

    /// Get a handle to the chat completions API
    pub fn chat(&self) -> Chat<'_> {
        Chat { client: self }
    }

    /// Execute a single POST request
    ///
    /// One request goes out per call. Failures of any kind (transport,
    /// non-2xx status, unparseable body) surface as errors to the caller;
    /// there is no retry loop.
    async fn execute<T, B>(
        &self,
        url: &str,
        body: &B,
        headers: HeaderMap,
    ) -> Result<Response<T>, OpenAiError>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        let response = self
            .client
            .post(url)
            .headers(headers)
            .json(body)
            .send()
            .await
            .map_err(OpenAiError::from_reqwest_error)?;

        let raw = RawResponse::from_response(&response);
        let status = response.status();

        if status.is_success() {
            let data = response.json::<T>().await.map_err(|e| {
                OpenAiError::InvalidResponse(format!("Failed to parse response: {}", e))
            })?;
            return Ok(Response { data, raw });
        }

        let status_code = status.as_u16();
        let error_body = response.text().await.unwrap_or_default();
        Err(parse_error_response(&error_body, status_code))
    }
}

/// Builder for OpenAi client configuration
///
/// Create with [`OpenAi::builder()`] and configure using the fluent API.
/// The `api_key` is required; call [`Self::build()`] to create the client.
pub struct OpenAiBuilder {
    api_key: Option<String>,
    api_base: Option<String>,
    timeout: Option<Duration>,
}

impl OpenAiBuilder {
    /// Create a new builder
    fn new() -> Self {
        Self {
            api_key: None,
            api_base: None,
            timeout: None,
        }
    }

    /// Set the API key
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set a custom API base URL
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<OpenAi, OpenAiError> {
        let api_key = self
            .api_key
            .ok_or_else(|| OpenAiError::Configuration("API key is required".to_string()))?;

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                OpenAiError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(OpenAi {
            client,
            api_key,
            api_base: self
                .api_base
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        })
    }
}

// ============================================================================
// Chat Completions API
// ============================================================================

/// Chat completions API handle
pub struct Chat<'a> {
    client: &'a OpenAi,
}

impl<'a> Chat<'a> {
    /// Create a chat completion
    ///
    /// Returns the parsed [`ChatCompletion`] response.
    ///
    /// # When to use
    ///
    /// Use this method for most cases where you just need the model response.
    /// For debugging or rate limit tracking, use
    /// [`Self::create_with_metadata`] instead.
    pub async fn create(
        &self,
        params: ChatCompletionParams,
    ) -> Result<ChatCompletion, OpenAiError> {
        self.create_with_metadata(params).await.map(|r| r.data)
    }

    /// Create a chat completion with full response metadata
    ///
    /// Returns a [`Response<ChatCompletion>`] that includes:
    /// - The parsed completion (`.data`)
    /// - Request ID for debugging (`.request_id()`)
    /// - Rate limit info (`.rate_limit()`)
    /// - Raw headers (`.raw.headers`)
    pub async fn create_with_metadata(
        &self,
        params: ChatCompletionParams,
    ) -> Result<Response<ChatCompletion>, OpenAiError> {
        let url = format!("{}/v1/chat/completions", self.client.api_base);
        let headers = build_headers(&self.client.api_key)?;

        self.client.execute(&url, &params, headers).await
    }
}

// ============================================================================
// Shared Helpers
// ============================================================================

fn build_headers(api_key: &str) -> Result<HeaderMap, OpenAiError> {
    let mut headers = HeaderMap::new();

    let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key))
        .map_err(|e| OpenAiError::Configuration(format!("Invalid API key: {}", e)))?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);

    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Ok(headers)
}

fn parse_error_response(body: &str, status_code: u16) -> OpenAiError {
    // Try to parse as the OpenAI error envelope
    if let Ok(error_response) = serde_json::from_str::<ApiErrorResponse>(body) {
        return OpenAiError::from_api_error(&error_response.error, status_code);
    }

    // Fallback to generic error based on status code
    let msg = if body.is_empty() {
        format!("HTTP {}", status_code)
    } else {
        body.to_string()
    };

    match status_code {
        401 => OpenAiError::Authentication(msg),
        429 => OpenAiError::RateLimited(msg),
        500..=599 => OpenAiError::ServiceUnavailable(msg),
        400 | 404 => OpenAiError::InvalidRequest(msg),
        _ => OpenAiError::Other(msg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_api_key() {
        let result = OpenAi::builder().build();
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), OpenAiError::Configuration(_)));
    }

    #[test]
    fn test_builder_with_api_key() {
        let client = OpenAi::builder().api_key("test-key").build().unwrap();
        assert_eq!(client.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_builder_custom_base() {
        let client = OpenAi::builder()
            .api_key("test-key")
            .api_base("https://custom.api.com")
            .build()
            .unwrap();
        assert_eq!(client.api_base, "https://custom.api.com");
    }

    #[test]
    fn test_builder_timeout() {
        // The timeout lands inside the reqwest client where it can't be
        // inspected; just check the builder accepts it
        let client = OpenAi::builder()
            .api_key("test-key")
            .timeout(Duration::from_secs(30))
            .build();
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_new() {
        let client = OpenAi::new("test-key");
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_debug_redacts_api_key() {
        let client = OpenAi::new("super-secret-key").unwrap();
        let debug_str = format!("{:?}", client);
        assert!(debug_str.contains("[REDACTED]"));
        assert!(!debug_str.contains("super-secret-key"));
    }

    #[test]
    fn test_client_chat_handle() {
        let client = OpenAi::new("test-key").unwrap();
        let _chat = client.chat();
        // Just verify we can get the chat handle without panic
    }

    #[test]
    fn test_build_headers_bearer_auth() {
        let headers = build_headers("sk-test").unwrap();
        assert_eq!(
            headers.get(AUTHORIZATION).unwrap().to_str().unwrap(),
            "Bearer sk-test"
        );
        assert_eq!(
            headers.get(CONTENT_TYPE).unwrap().to_str().unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_rate_limit_info_parsing() {
        let headers: HashMap<String, String> = vec![
            ("x-ratelimit-limit-requests".to_string(), "500".to_string()),
            (
                "x-ratelimit-remaining-requests".to_string(),
                "499".to_string(),
            ),
            ("x-ratelimit-limit-tokens".to_string(), "200000".to_string()),
            (
                "x-ratelimit-remaining-tokens".to_string(),
                "199000".to_string(),
            ),
            ("x-ratelimit-reset-requests".to_string(), "120ms".to_string()),
        ]
        .into_iter()
        .collect();

        let info = RateLimitInfo::from_headers(&headers).unwrap();
        assert_eq!(info.requests_limit, Some(500));
        assert_eq!(info.requests_remaining, Some(499));
        assert_eq!(info.tokens_limit, Some(200000));
        assert_eq!(info.tokens_remaining, Some(199000));
        assert_eq!(info.requests_reset, Some("120ms".to_string()));
    }

    #[test]
    fn test_rate_limit_info_no_headers() {
        let headers: HashMap<String, String> = HashMap::new();
        let info = RateLimitInfo::from_headers(&headers);
        assert!(info.is_none());
    }

    #[test]
    fn test_rate_limit_info_invalid_numbers() {
        let headers: HashMap<String, String> = vec![(
            "x-ratelimit-limit-requests".to_string(),
            "not_a_number".to_string(),
        )]
        .into_iter()
        .collect();

        let info = RateLimitInfo::from_headers(&headers).unwrap();
        assert!(info.requests_limit.is_none()); // Parse fails, returns None
    }

    #[test]
    fn test_raw_response_header() {
        let mut headers = HashMap::new();
        headers.insert("x-custom-header".to_string(), "custom-value".to_string());

        let raw = RawResponse {
            status: 200,
            headers,
            request_id: None,
            rate_limit: None,
        };

        assert_eq!(raw.header("x-custom-header"), Some("custom-value"));
        assert!(raw.header("non-existent").is_none());
    }

    #[test]
    fn test_response_into_data() {
        let response = Response {
            data: "test data".to_string(),
            raw: RawResponse {
                status: 200,
                headers: HashMap::new(),
                request_id: None,
                rate_limit: None,
            },
        };
        assert_eq!(response.into_data(), "test data");
    }

    #[test]
    fn test_response_request_id() {
        let response = Response {
            data: (),
            raw: RawResponse {
                status: 200,
                headers: HashMap::new(),
                request_id: Some("req_abc123".to_string()),
                rate_limit: None,
            },
        };
        assert_eq!(response.request_id(), Some("req_abc123"));
    }

    #[test]
    fn test_parse_error_response_fallback_status() {
        let err = parse_error_response("", 401);
        assert!(matches!(err, OpenAiError::Authentication(_)));

        let err = parse_error_response("gateway exploded", 502);
        assert!(matches!(err, OpenAiError::ServiceUnavailable(_)));

        let err = parse_error_response("", 404);
        assert!(matches!(err, OpenAiError::InvalidRequest(_)));
    }
}
