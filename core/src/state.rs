//! Lifecycle states of a managed API artifact.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The lifecycle state of one versioned API artifact.
///
/// The platform identifies states by uppercase string labels on the wire;
/// this enum round-trips those labels exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LifecycleState {
    /// Newly created, not yet visible to consumers
    Created,
    /// Exposed as a prototype without full publication
    Prototyped,
    /// Published and subscribable
    Published,
    /// Temporarily blocked from invocation
    Blocked,
    /// Superseded by a newer version; existing subscriptions keep working
    Deprecated,
    /// Permanently removed from the store
    Retired,
}

impl LifecycleState {
    /// The canonical wire label for this state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::Prototyped => "PROTOTYPED",
            Self::Published => "PUBLISHED",
            Self::Blocked => "BLOCKED",
            Self::Deprecated => "DEPRECATED",
            Self::Retired => "RETIRED",
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LifecycleState {
    type Err = crate::LifecycleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CREATED" => Ok(Self::Created),
            "PROTOTYPED" => Ok(Self::Prototyped),
            "PUBLISHED" => Ok(Self::Published),
            "BLOCKED" => Ok(Self::Blocked),
            "DEPRECATED" => Ok(Self::Deprecated),
            "RETIRED" => Ok(Self::Retired),
            other => Err(crate::LifecycleError::MalformedResponse {
                detail: format!("unknown lifecycle state label: {other}"),
            }),
        }
    }
}
