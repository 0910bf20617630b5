//! The HTTP transport capability consumed by the harness.
//!
//! Everything above this seam is transport-agnostic: the typed clients
//! build [`HttpRequest`] values and hand them to whatever [`HttpClient`]
//! they were given. Each request is attempted exactly once; retries and
//! timeout policy belong to the implementation or the calling scenario,
//! not to this trait.

use async_trait::async_trait;
use lifecycle_harness_core::LifecycleError;

/// HTTP method of a harness request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// GET request with query parameters
    Get,
    /// POST request with form-encoded parameters
    Post,
}

/// One request against a Publisher or Store endpoint.
///
/// Parameters travel as query parameters for GET and as a form-encoded
/// body for POST, matching the platform's ajax endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// HTTP method
    pub method: HttpMethod,
    /// Path relative to the client's base URL, e.g. "/publisher/site/blocks/item-add/ajax/add.jag"
    pub path: String,
    /// Request parameters in insertion order
    pub params: Vec<(String, String)>,
}

impl HttpRequest {
    /// Build a GET request for `path`.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            params: Vec::new(),
        }
    }

    /// Build a POST request for `path`.
    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.into(),
            params: Vec::new(),
        }
    }

    /// Append one request parameter.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Look up a parameter by key, for assertions in tests.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Response of one harness request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: String,
}

impl HttpResponse {
    /// Build a response from its status and body.
    #[must_use]
    pub const fn new(status: u16, body: String) -> Self {
        Self { status, body }
    }
}

/// Synchronous-in-spirit HTTP capability: one call, one response.
///
/// Implementations must surface network-level failures as
/// [`LifecycleError::Transport`] and must not retry; ordering across calls
/// is achieved purely by the caller awaiting each invocation before
/// issuing the next.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issue `request` and return the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Transport`] when the request could not be
    /// delivered or the response could not be read. Non-2xx statuses are
    /// NOT errors at this layer; callers inspect [`HttpResponse::status`].
    async fn invoke(&self, request: HttpRequest) -> Result<HttpResponse, LifecycleError>;
}
