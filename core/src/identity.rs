//! Identity of one versioned API artifact.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The composite key identifying one versioned API artifact.
///
/// Two identities with different `version` are distinct artifacts even when
/// provider and name match; copying an API forks a new identity that shares
/// provider and name but nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApiIdentity {
    /// Provider (owning user) of the API
    pub provider: String,
    /// API name
    pub name: String,
    /// API version string, e.g. "1.0.0"
    pub version: String,
}

impl ApiIdentity {
    /// Create an identity from its three components.
    pub fn new(
        provider: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            provider: provider.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    /// The identity of a copy of this API at `version`.
    ///
    /// The copy shares provider and name with the source but is an
    /// independent artifact with its own lifecycle history.
    #[must_use]
    pub fn with_version(&self, version: impl Into<String>) -> Self {
        Self {
            provider: self.provider.clone(),
            name: self.name.clone(),
            version: version.into(),
        }
    }
}

impl fmt::Display for ApiIdentity {
    /// Diagnostic key:value rendering used in error messages and logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "API Name: {} API Version: {} API Provider: {}",
            self.name, self.version, self.provider
        )
    }
}
