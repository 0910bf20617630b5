//! # Lifecycle Harness Testing
//!
//! Test doubles and helpers for exercising the harness without a live
//! platform:
//!
//! - [`MockHttpClient`]: a scripted [`HttpClient`] that replays canned
//!   responses in FIFO order and records every request it sees
//! - [`bodies`]: builders for the platform's ad-hoc JSON response bodies
//! - [`init_test_tracing`]: opt-in log output for debugging test runs
//!
//! ## Example
//!
//! ```
//! use lifecycle_harness_client::{HttpClient, HttpRequest};
//! use lifecycle_harness_testing::{bodies, MockHttpClient};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mock = MockHttpClient::new();
//! mock.enqueue_response(200, bodies::error_body(false));
//!
//! let response = mock
//!     .invoke(HttpRequest::post("/publisher/x").with_param("action", "addAPI"))
//!     .await;
//! assert!(response.is_ok());
//! assert_eq!(mock.recorded_requests().len(), 1);
//! # }
//! ```

use async_trait::async_trait;
use lifecycle_harness_client::{HttpClient, HttpRequest, HttpResponse};
use lifecycle_harness_core::{LifecycleError, LifecycleState};
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

/// Scripted HTTP transport double.
///
/// Responses are replayed in the order they were enqueued; when the script
/// runs dry, `invoke` returns a [`LifecycleError::Transport`] naming the
/// unexpected request instead of panicking, so fail-fast assertions stay
/// readable.
#[derive(Debug, Default)]
pub struct MockHttpClient {
    script: Mutex<VecDeque<Result<HttpResponse, LifecycleError>>>,
    recorded: Mutex<Vec<HttpRequest>>,
}

impl MockHttpClient {
    /// Create a mock with an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a canned response.
    pub fn enqueue_response(&self, status: u16, body: String) {
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Ok(HttpResponse::new(status, body)));
    }

    /// Enqueue a transport failure.
    pub fn enqueue_transport_failure(&self, detail: impl Into<String>) {
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Err(LifecycleError::Transport {
                detail: detail.into(),
            }));
    }

    /// Every request invoked so far, in order.
    #[must_use]
    pub fn recorded_requests(&self) -> Vec<HttpRequest> {
        self.recorded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of canned responses not yet consumed.
    #[must_use]
    pub fn remaining_responses(&self) -> usize {
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn invoke(&self, request: HttpRequest) -> Result<HttpResponse, LifecycleError> {
        let scripted = self
            .script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();

        self.recorded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());

        scripted.unwrap_or_else(|| {
            Err(LifecycleError::Transport {
                detail: format!(
                    "mock script exhausted; unexpected request to {}",
                    request.path
                ),
            })
        })
    }
}

/// Builders for the platform's response bodies.
pub mod bodies {
    use super::LifecycleState;
    use serde_json::json;

    /// A minimal body carrying only the error flag.
    #[must_use]
    pub fn error_body(error: bool) -> String {
        json!({ "error": error }).to_string()
    }

    /// An error-flag body using the platform's string encoding.
    #[must_use]
    pub fn error_body_string_encoded(error: bool) -> String {
        json!({ "error": if error { "true" } else { "false" } }).to_string()
    }

    /// A lifecycle-change body with the given `(old, new, epoch_millis)` events.
    #[must_use]
    pub fn lcs_body(events: &[(LifecycleState, LifecycleState, i64)]) -> String {
        let entries: Vec<_> = events
            .iter()
            .map(|(old, new, ts)| {
                json!({
                    "oldStatus": old.as_str(),
                    "newStatus": new.as_str(),
                    "date": ts,
                })
            })
            .collect();
        json!({ "error": false, "lcs": entries }).to_string()
    }

    /// An empty-history body, as returned for an artifact with no transitions.
    #[must_use]
    pub fn empty_lcs_body() -> String {
        json!({ "error": false, "lcs": [] }).to_string()
    }
}

/// Install a fmt subscriber honoring `RUST_LOG` for test debugging.
///
/// Safe to call from several tests; only the first call wins.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}
