//! Production HTTP transport backed by `reqwest`.

use crate::http::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use async_trait::async_trait;
use lifecycle_harness_core::LifecycleError;
use reqwest::Client;

/// `reqwest`-backed [`HttpClient`] bound to one service base URL.
///
/// Authentication is out of scope here: an external login step produces a
/// session cookie (or token header) and hands it to this client, which
/// attaches it to every request.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Client,
    base_url: String,
    session_cookie: Option<String>,
}

impl ReqwestHttpClient {
    /// Create a client for the service rooted at `base_url`.
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            session_cookie: None,
        }
    }

    /// Attach the session cookie obtained by an external login step.
    #[must_use]
    pub fn with_session_cookie(mut self, cookie: String) -> Self {
        self.session_cookie = Some(cookie);
        self
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn invoke(&self, request: HttpRequest) -> Result<HttpResponse, LifecycleError> {
        let url = self.url_for(&request.path);

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&url).query(&request.params),
            HttpMethod::Post => self.client.post(&url).form(&request.params),
        };

        if let Some(cookie) = &self.session_cookie {
            builder = builder.header(reqwest::header::COOKIE, cookie);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| LifecycleError::Transport {
                detail: format!("request to {url} failed: {e}"),
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| LifecycleError::Transport {
                detail: format!("reading response body from {url} failed: {e}"),
            })?;

        Ok(HttpResponse::new(status, body))
    }
}
