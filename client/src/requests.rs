//! Request beans for API creation and subscription.

use lifecycle_harness_core::ApiIdentity;

/// Everything the Publisher needs to create a new API artifact.
///
/// Required fields go through [`ApiCreationRequest::new`]; the rest default
/// to the platform's conventions and can be overridden builder-style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiCreationRequest {
    /// API name
    pub name: String,
    /// Gateway context path, e.g. "/weather"
    pub context: String,
    /// Version string of the new artifact
    pub version: String,
    /// Providing user
    pub provider: String,
    /// Backend endpoint the gateway proxies to
    pub endpoint_url: String,
    /// Store visibility, "public" unless overridden
    pub visibility: String,
    /// Subscription tiers offered, comma-joined on the wire
    pub tiers: Vec<String>,
    /// Optional description shown in the Store
    pub description: Option<String>,
}

impl ApiCreationRequest {
    /// Create a request with the required fields and platform defaults.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        context: impl Into<String>,
        version: impl Into<String>,
        provider: impl Into<String>,
        endpoint_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            context: context.into(),
            version: version.into(),
            provider: provider.into(),
            endpoint_url: endpoint_url.into(),
            visibility: "public".to_string(),
            tiers: vec!["Unlimited".to_string()],
            description: None,
        }
    }

    /// Override the offered subscription tiers.
    #[must_use]
    pub fn with_tiers(mut self, tiers: Vec<String>) -> Self {
        self.tiers = tiers;
        self
    }

    /// Override the Store visibility.
    #[must_use]
    pub fn with_visibility(mut self, visibility: impl Into<String>) -> Self {
        self.visibility = visibility.into();
        self
    }

    /// Set the Store description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The identity the artifact will have once created.
    #[must_use]
    pub fn identity(&self) -> ApiIdentity {
        ApiIdentity::new(&self.provider, &self.name, &self.version)
    }
}

/// A Store subscription request binding an application to an API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionRequest {
    /// Identity of the API being subscribed to
    pub identity: ApiIdentity,
    /// Name of the subscribing application
    pub application_name: String,
    /// Subscription tier, platform default when `None`
    pub tier: Option<String>,
}

impl SubscriptionRequest {
    /// Subscribe `application_name` to the API at `identity`.
    #[must_use]
    pub fn new(identity: ApiIdentity, application_name: impl Into<String>) -> Self {
        Self {
            identity,
            application_name: application_name.into(),
            tier: None,
        }
    }

    /// Request a specific subscription tier.
    #[must_use]
    pub fn with_tier(mut self, tier: impl Into<String>) -> Self {
        self.tier = Some(tier.into());
        self
    }
}
