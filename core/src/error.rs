//! Error types for the lifecycle harness.

use crate::identity::ApiIdentity;
use thiserror::Error;

/// Errors that can occur while driving or verifying lifecycle operations.
///
/// Every variant carries enough context (identity, step name, raw response)
/// to diagnose a failure without re-running the scenario.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// Response body was not valid JSON or violated the expected schema
    #[error("Malformed response: {detail}")]
    MalformedResponse {
        /// What was wrong with the body
        detail: String,
    },

    /// A step of a composite operation returned a non-OK status or an error flag
    #[error("Error in {step}. {identity} Response Code: {status} Response Data: {body}")]
    Operation {
        /// Name of the failing step, e.g. "API Creation"
        step: String,
        /// Identity the step was acting on
        identity: ApiIdentity,
        /// HTTP status code of the failing response
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Network or transport-level failure; calls are attempted exactly once
    #[error("Transport failure: {detail}")]
    Transport {
        /// Underlying transport error description
        detail: String,
    },

    /// Subscribing an application to an API failed
    #[error("Error in API Subscribe. {identity} Response Code: {status} Response Data: {body}")]
    Subscription {
        /// Identity of the API being subscribed to
        identity: ApiIdentity,
        /// HTTP status code of the failing response
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Deleting an API failed
    #[error("Error in API Deletion. {identity} Response Code: {status} Response Data: {body}")]
    Deletion {
        /// Identity of the API being deleted
        identity: ApiIdentity,
        /// HTTP status code of the failing response
        status: u16,
        /// Raw response body
        body: String,
    },
}
