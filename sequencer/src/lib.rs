//! # Lifecycle Harness Sequencer
//!
//! Composite lifecycle operations over the Publisher and Store clients,
//! each a fixed sequence of REST calls with fail-fast semantics: any
//! step's failure aborts the sequence and surfaces a
//! [`LifecycleError`] carrying the step name, identity, HTTP status and
//! raw body.
//!
//! The sequencer is a strict state machine driver:
//!
//! ```text
//! CREATED --publish--> PUBLISHED --deprecate--> DEPRECATED --retire--> RETIRED
//!                         |
//!                         +--block--> BLOCKED
//! ```
//!
//! A copy forks a new, independent machine instance at CREATED that shares
//! provider and name with its source but no further state.
//!
//! All operations are sequential awaits on one logical thread of control:
//! no locking, no retries, exactly one HTTP attempt per step. Concurrent
//! operations on the same identity are undefined behavior of the platform
//! and are not guarded against here.

use lifecycle_harness_client::{
    ApiCreationRequest, HttpResponse, PublisherClient, StoreClient, SubscriptionRequest,
};
use lifecycle_harness_core::{
    parser, verifier::verify_transition, ApiIdentity, HarnessConfig, LifecycleError,
    LifecycleOperationResult, LifecycleState,
};

/// Drives composite lifecycle operations with fail-fast step checking.
#[derive(Clone)]
pub struct LifecycleSequencer {
    publisher: PublisherClient,
    store: StoreClient,
    config: HarnessConfig,
}

impl LifecycleSequencer {
    /// Create a sequencer over the given clients and configuration.
    #[must_use]
    pub const fn new(publisher: PublisherClient, store: StoreClient, config: HarnessConfig) -> Self {
        Self {
            publisher,
            store,
            config,
        }
    }

    /// The configuration this sequencer was built with.
    #[must_use]
    pub const fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Evaluate one step's response into a [`LifecycleOperationResult`].
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::MalformedResponse`] when the body carries
    /// no readable error flag.
    fn evaluate(&self, response: &HttpResponse) -> Result<LifecycleOperationResult, LifecycleError> {
        let error_flag = parser::parse_error_flag(&response.body)?;
        Ok(LifecycleOperationResult::new(
            response.status,
            error_flag,
            response.body.clone(),
            self.config.ok_status,
        ))
    }

    /// Require HTTP OK and a clear error flag, else fail the named step.
    fn require_success(
        &self,
        step: &str,
        identity: &ApiIdentity,
        response: &HttpResponse,
    ) -> Result<(), LifecycleError> {
        let result = self.evaluate(response)?;
        if result.succeeded {
            Ok(())
        } else {
            Err(LifecycleError::Operation {
                step: step.to_string(),
                identity: identity.clone(),
                status: result.http_status,
                body: result.raw_body,
            })
        }
    }

    /// Publish an API: a single lifecycle status change to PUBLISHED.
    ///
    /// Returns the raw response so the caller can inspect the transition
    /// history it carries.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Transport`] when the call cannot be
    /// delivered.
    pub async fn publish(
        &self,
        identity: &ApiIdentity,
        require_resubscription: bool,
    ) -> Result<HttpResponse, LifecycleError> {
        self.publisher
            .change_lifecycle_status(identity, LifecycleState::Published, require_resubscription)
            .await
    }

    /// Create an API and publish it, verifying the CREATED→PUBLISHED
    /// transition in the returned history.
    ///
    /// # Errors
    ///
    /// Fails fast with [`LifecycleError::Operation`] when creation returns
    /// a non-OK status or error flag, or when publishing does not verify as
    /// CREATED→PUBLISHED; [`LifecycleError::MalformedResponse`] and
    /// [`LifecycleError::Transport`] propagate from the individual steps.
    pub async fn create_and_publish(
        &self,
        request: &ApiCreationRequest,
        require_resubscription: bool,
    ) -> Result<(), LifecycleError> {
        let identity = request.identity();

        let create_response = self.publisher.add_api(request).await?;
        self.require_success("API Creation", &identity, &create_response)?;
        tracing::info!(api = %identity, "API Created");

        let publish_response = self.publish(&identity, require_resubscription).await?;
        // A non-OK status comes with a fault body, not an lcs history; report
        // the failing step instead of a parse error
        if publish_response.status != self.config.ok_status {
            return Err(LifecycleError::Operation {
                step: "API Publishing".to_string(),
                identity,
                status: publish_response.status,
                body: publish_response.body,
            });
        }
        let history = parser::parse_history(&publish_response.body)?;
        if !verify_transition(
            &history,
            LifecycleState::Created,
            LifecycleState::Published,
        ) {
            return Err(LifecycleError::Operation {
                step: "API Publishing".to_string(),
                identity,
                status: publish_response.status,
                body: publish_response.body,
            });
        }
        tracing::info!(api = %identity, "API Published");
        Ok(())
    }

    /// Copy an API to a new version, forking an independent artifact.
    ///
    /// The source identity stays addressable afterward; the returned
    /// identity shares provider and name but nothing else.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Operation`] when the copy call returns a
    /// non-OK status or error flag.
    pub async fn copy(
        &self,
        source: &ApiIdentity,
        new_version: &str,
    ) -> Result<ApiIdentity, LifecycleError> {
        let copy_response = self.publisher.copy_api(source, new_version).await?;
        self.require_success("API Copy", source, &copy_response)?;

        let copied = source.with_version(new_version);
        tracing::info!(api = %copied, "API Copied");
        Ok(copied)
    }

    /// Copy an API and publish the copy.
    ///
    /// Unlike [`create_and_publish`](Self::create_and_publish), the publish
    /// step here is not verified against the CREATED→PUBLISHED history;
    /// only transport failures abort it. Callers wanting the stricter check
    /// can verify the returned identity's history themselves.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Operation`] when the copy step fails and
    /// [`LifecycleError::Transport`] when either call cannot be delivered.
    pub async fn copy_and_publish(
        &self,
        source: &ApiIdentity,
        new_version: &str,
        require_resubscription: bool,
    ) -> Result<ApiIdentity, LifecycleError> {
        let copied = self.copy(source, new_version).await?;
        self.publish(&copied, require_resubscription).await?;
        Ok(copied)
    }

    /// Subscribe an application to an API on the configured default tier.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Subscription`] when the Store rejects the
    /// subscription.
    pub async fn subscribe(
        &self,
        identity: &ApiIdentity,
        application_name: &str,
    ) -> Result<(), LifecycleError> {
        let subscription = SubscriptionRequest::new(identity.clone(), application_name)
            .with_tier(self.config.tier_unlimited.as_str());
        let response = self.store.subscribe(&subscription).await?;

        let result = self.evaluate(&response)?;
        if !result.succeeded {
            return Err(LifecycleError::Subscription {
                identity: identity.clone(),
                status: result.http_status,
                body: result.raw_body,
            });
        }
        tracing::info!(api = %identity, application = application_name, "API Subscribed");
        Ok(())
    }

    /// Create, publish (without requiring resubscription) and subscribe.
    ///
    /// # Errors
    ///
    /// Propagates the first failing step's error unchanged.
    pub async fn create_publish_and_subscribe(
        &self,
        request: &ApiCreationRequest,
        application_name: &str,
    ) -> Result<(), LifecycleError> {
        self.create_and_publish(request, false).await?;
        self.subscribe(&request.identity(), application_name).await
    }

    /// Issue a lifecycle change to `target` and verify the latest recorded
    /// transition is `expected_old` → `target`.
    async fn change_state_verified(
        &self,
        step: &str,
        identity: &ApiIdentity,
        expected_old: LifecycleState,
        target: LifecycleState,
    ) -> Result<(), LifecycleError> {
        let response = self
            .publisher
            .change_lifecycle_status(identity, target, false)
            .await?;

        if response.status != self.config.ok_status {
            return Err(LifecycleError::Operation {
                step: step.to_string(),
                identity: identity.clone(),
                status: response.status,
                body: response.body,
            });
        }
        let history = parser::parse_history(&response.body)?;
        if !verify_transition(&history, expected_old, target) {
            return Err(LifecycleError::Operation {
                step: step.to_string(),
                identity: identity.clone(),
                status: response.status,
                body: response.body,
            });
        }
        tracing::info!(api = %identity, state = %target, "API lifecycle state changed");
        Ok(())
    }

    /// Deprecate a published API, verifying PUBLISHED→DEPRECATED.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Operation`] when the transition cannot be
    /// verified, e.g. when the API was never published.
    pub async fn deprecate(&self, identity: &ApiIdentity) -> Result<(), LifecycleError> {
        self.change_state_verified(
            "API Deprecation",
            identity,
            LifecycleState::Published,
            LifecycleState::Deprecated,
        )
        .await
    }

    /// Block a published API, verifying PUBLISHED→BLOCKED.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Operation`] when the transition cannot be
    /// verified.
    pub async fn block(&self, identity: &ApiIdentity) -> Result<(), LifecycleError> {
        self.change_state_verified(
            "API Blocking",
            identity,
            LifecycleState::Published,
            LifecycleState::Blocked,
        )
        .await
    }

    /// Retire a deprecated API, verifying DEPRECATED→RETIRED.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Operation`] when the transition cannot be
    /// verified.
    pub async fn retire(&self, identity: &ApiIdentity) -> Result<(), LifecycleError> {
        self.change_state_verified(
            "API Retirement",
            identity,
            LifecycleState::Deprecated,
            LifecycleState::Retired,
        )
        .await
    }

    /// Delete an API.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Deletion`] when the Publisher rejects the
    /// deletion.
    pub async fn delete(&self, identity: &ApiIdentity) -> Result<(), LifecycleError> {
        let response = self.publisher.delete_api(identity).await?;

        let result = self.evaluate(&response)?;
        if !result.succeeded {
            return Err(LifecycleError::Deletion {
                identity: identity.clone(),
                status: result.http_status,
                body: result.raw_body,
            });
        }
        tracing::info!(api = %identity, "API Deleted");
        Ok(())
    }

    /// Delete an API during teardown, logging failures instead of
    /// propagating them so the primary test failure is not masked.
    pub async fn delete_best_effort(&self, identity: &ApiIdentity) {
        if let Err(error) = self.delete(identity).await {
            tracing::warn!(api = %identity, %error, "Best-effort API deletion failed");
        }
    }
}
