//! # Lifecycle Harness Client
//!
//! HTTP transport capability and typed REST clients for the Publisher and
//! Store services of an API-management platform.
//!
//! The transport seam is the [`HttpClient`] trait: the sequencer and the
//! typed clients only ever see that capability, so a scripted test double
//! can stand in for the real service. [`ReqwestHttpClient`] is the
//! production implementation; it assumes authentication was established by
//! an external login step and simply carries the resulting headers.
//!
//! ## Example
//!
//! ```no_run
//! use lifecycle_harness_client::{PublisherClient, ReqwestHttpClient};
//! use lifecycle_harness_core::ApiIdentity;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let http = ReqwestHttpClient::new("https://localhost:9443".to_string())
//!         .with_session_cookie("JSESSIONID=abc123".to_string());
//!     let publisher = PublisherClient::new(Arc::new(http));
//!
//!     let identity = ApiIdentity::new("admin", "WeatherAPI", "1.0.0");
//!     let response = publisher.delete_api(&identity).await?;
//!     println!("delete returned {}", response.status);
//!     Ok(())
//! }
//! ```

pub mod http;
pub mod publisher;
pub mod requests;
pub mod reqwest_client;
pub mod store;

// Re-export main types for convenience
pub use http::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
pub use publisher::PublisherClient;
pub use requests::{ApiCreationRequest, SubscriptionRequest};
pub use reqwest_client::ReqwestHttpClient;
pub use store::StoreClient;
