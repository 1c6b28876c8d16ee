#![allow(clippy::missing_errors_doc)] // Every public fallible function returns ClientResult

//! # StepUp Client Library
//!
//! Authenticated client for the StepUp peer-feedback and ranking API.
//!
//! ## Module Organization
//!
//! - [`api_clients`] - The operation facade and its HTTP implementation
//! - [`endpoint`] - Endpoint descriptors and pure request construction
//! - [`auth`] - Bearer token providers
//! - [`transport`] - Pluggable HTTP transport (reqwest by default)
//! - [`models`] - Typed request and response payloads
//! - [`config`] - Host selection and client settings
//! - [`error`] - Structured error handling
//! - [`logging`] - Optional `tracing` subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use stepup_client::{ApiClient, ApiClientFacade, ClientConfig, StaticTokenProvider};
//!
//! # async fn example() -> stepup_client::ClientResult<()> {
//! let client = ApiClient::from_config(
//!     &ClientConfig::default(),
//!     Arc::new(StaticTokenProvider::new("token")),
//! )?;
//!
//! let me = client.user_information().await?;
//! if !me.is_registered() {
//!     client.register_user("location-id", "area-id").await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod api_clients;
pub mod auth;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod logging;
pub mod models;
pub mod transport;

// Re-export commonly used types for convenience
pub use api_clients::{ApiClient, ApiClientFacade};
pub use auth::{EnvTokenProvider, SecureToken, StaticTokenProvider, TokenError, TokenProvider};
pub use config::{ApiEnvironment, ClientConfig};
pub use endpoint::{Endpoint, HttpBody, HttpMethod, RequestBuilder, RequestSpec, UrlParameters};
pub use error::{ClientError, ClientResult};
pub use transport::{ReqwestTransport, Transport, TransportResponse};
