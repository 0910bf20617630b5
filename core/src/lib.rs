//! # Lifecycle Harness Core
//!
//! Core data model and verification logic for the API lifecycle harness.
//!
//! This crate provides the transport-agnostic pieces shared by the REST
//! clients and the action sequencer:
//!
//! - **`LifecycleState`**: The states an API artifact moves through
//! - **`ApiIdentity`**: The (provider, name, version) key of one artifact
//! - **`StateChangeHistory`**: Lifecycle transition events as returned by the platform
//! - **Response parsing**: Extracting the error flag and transition history from raw bodies
//! - **Transition verification**: Checking that the latest recorded transition matches
//! - **`LifecycleError`**: The error taxonomy for every harness operation
//!
//! ## Design Principles
//!
//! - No I/O here: everything operates on already-fetched response bodies
//! - Verification never fails on well-formed input, only parsing can
//! - Configuration is an explicit value, not static state
//!
//! ## Example
//!
//! ```
//! use lifecycle_harness_core::{
//!     parser, verifier::verify_transition, LifecycleState,
//! };
//!
//! # fn main() -> Result<(), lifecycle_harness_core::LifecycleError> {
//! let body = r#"{"lcs": [{"oldStatus": "CREATED", "newStatus": "PUBLISHED", "date": 1699999999000}]}"#;
//! let history = parser::parse_history(body)?;
//! assert!(verify_transition(
//!     &history,
//!     LifecycleState::Created,
//!     LifecycleState::Published,
//! ));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod history;
pub mod identity;
pub mod parser;
pub mod result;
pub mod state;
pub mod verifier;

pub use config::HarnessConfig;
pub use error::LifecycleError;
pub use history::{StateChangeHistory, StateTransitionEvent};
pub use identity::ApiIdentity;
pub use result::LifecycleOperationResult;
pub use state::LifecycleState;
