//! Typed client for the Publisher service's lifecycle endpoints.

use crate::http::{HttpClient, HttpRequest, HttpResponse};
use crate::requests::ApiCreationRequest;
use lifecycle_harness_core::{ApiIdentity, LifecycleError, LifecycleState};
use std::sync::Arc;

const ADD_API_PATH: &str = "/publisher/site/blocks/item-add/ajax/add.jag";
const REMOVE_API_PATH: &str = "/publisher/site/blocks/item-add/ajax/remove.jag";
const LIFECYCLE_PATH: &str = "/publisher/site/blocks/life-cycles/ajax/life-cycles.jag";
const COPY_API_PATH: &str = "/publisher/site/blocks/overview/ajax/overview.jag";

/// Client for the Publisher's API management endpoints.
///
/// Thin request assembly over the [`HttpClient`] capability; success and
/// error-flag interpretation happen in the sequencer, not here.
#[derive(Clone)]
pub struct PublisherClient {
    http: Arc<dyn HttpClient>,
}

impl PublisherClient {
    /// Create a Publisher client over the given transport.
    #[must_use]
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self { http }
    }

    /// Create a new API artifact.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Transport`] when the call cannot be delivered.
    pub async fn add_api(
        &self,
        request: &ApiCreationRequest,
    ) -> Result<HttpResponse, LifecycleError> {
        tracing::debug!(api = %request.identity(), "Creating API");

        let mut http_request = HttpRequest::post(ADD_API_PATH)
            .with_param("action", "addAPI")
            .with_param("name", &request.name)
            .with_param("context", &request.context)
            .with_param("version", &request.version)
            .with_param("provider", &request.provider)
            .with_param("endpoint", &request.endpoint_url)
            .with_param("visibility", &request.visibility)
            .with_param("tiersCollection", request.tiers.join(","));
        if let Some(description) = &request.description {
            http_request = http_request.with_param("description", description);
        }

        self.http.invoke(http_request).await
    }

    /// Move an API to `target` state.
    ///
    /// The response body carries the artifact's full `lcs` change history.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Transport`] when the call cannot be delivered.
    pub async fn change_lifecycle_status(
        &self,
        identity: &ApiIdentity,
        target: LifecycleState,
        require_resubscription: bool,
    ) -> Result<HttpResponse, LifecycleError> {
        tracing::debug!(api = %identity, target = %target, "Changing lifecycle status");

        let request = HttpRequest::post(LIFECYCLE_PATH)
            .with_param("action", "updateStatus")
            .with_param("name", &identity.name)
            .with_param("version", &identity.version)
            .with_param("provider", &identity.provider)
            .with_param("status", target.as_str())
            .with_param("publishToGateway", "true")
            .with_param(
                "requireResubscription",
                if require_resubscription { "true" } else { "false" },
            );

        self.http.invoke(request).await
    }

    /// Copy `source` to a new version, forking an independent artifact.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Transport`] when the call cannot be delivered.
    pub async fn copy_api(
        &self,
        source: &ApiIdentity,
        new_version: &str,
    ) -> Result<HttpResponse, LifecycleError> {
        tracing::debug!(api = %source, new_version, "Copying API to new version");

        let request = HttpRequest::post(COPY_API_PATH)
            .with_param("action", "createNewAPI")
            .with_param("provider", &source.provider)
            .with_param("apiName", &source.name)
            .with_param("version", &source.version)
            .with_param("newVersion", new_version);

        self.http.invoke(request).await
    }

    /// Delete an API artifact.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Transport`] when the call cannot be delivered.
    pub async fn delete_api(&self, identity: &ApiIdentity) -> Result<HttpResponse, LifecycleError> {
        tracing::debug!(api = %identity, "Deleting API");

        let request = HttpRequest::post(REMOVE_API_PATH)
            .with_param("action", "removeAPI")
            .with_param("name", &identity.name)
            .with_param("version", &identity.version)
            .with_param("provider", &identity.provider);

        self.http.invoke(request).await
    }
}
