//! Typed client for the Store service's application and subscription endpoints.

use crate::http::{HttpClient, HttpRequest, HttpResponse};
use crate::requests::SubscriptionRequest;
use lifecycle_harness_core::LifecycleError;
use std::sync::Arc;

const APPLICATION_PATH: &str =
    "/store/site/blocks/application/application-add/ajax/application-add.jag";
const SUBSCRIPTION_PATH: &str =
    "/store/site/blocks/subscription/subscription-add/ajax/subscription-add.jag";

/// Client for the Store endpoints the harness needs: just enough
/// application and subscription surface to observe lifecycle behavior.
#[derive(Clone)]
pub struct StoreClient {
    http: Arc<dyn HttpClient>,
}

impl StoreClient {
    /// Create a Store client over the given transport.
    #[must_use]
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self { http }
    }

    /// Register an application that APIs can be subscribed to.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Transport`] when the call cannot be delivered.
    pub async fn add_application(
        &self,
        application_name: &str,
        tier: &str,
    ) -> Result<HttpResponse, LifecycleError> {
        tracing::debug!(application = application_name, tier, "Adding application");

        let request = HttpRequest::post(APPLICATION_PATH)
            .with_param("action", "addApplication")
            .with_param("application", application_name)
            .with_param("tier", tier);

        self.http.invoke(request).await
    }

    /// Remove an application and its subscriptions.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Transport`] when the call cannot be delivered.
    pub async fn remove_application(
        &self,
        application_name: &str,
    ) -> Result<HttpResponse, LifecycleError> {
        tracing::debug!(application = application_name, "Removing application");

        let request = HttpRequest::post(APPLICATION_PATH)
            .with_param("action", "removeApplication")
            .with_param("application", application_name);

        self.http.invoke(request).await
    }

    /// Subscribe an application to an API.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Transport`] when the call cannot be delivered.
    pub async fn subscribe(
        &self,
        subscription: &SubscriptionRequest,
    ) -> Result<HttpResponse, LifecycleError> {
        tracing::debug!(
            api = %subscription.identity,
            application = %subscription.application_name,
            "Subscribing application to API"
        );

        let mut request = HttpRequest::post(SUBSCRIPTION_PATH)
            .with_param("action", "addAPISubscription")
            .with_param("name", &subscription.identity.name)
            .with_param("version", &subscription.identity.version)
            .with_param("provider", &subscription.identity.provider)
            .with_param("applicationName", &subscription.application_name);
        if let Some(tier) = &subscription.tier {
            request = request.with_param("tier", tier);
        }

        self.http.invoke(request).await
    }
}
