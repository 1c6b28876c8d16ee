//! API Client Modules
//!
//! The public operation set of the StepUp API ([`ApiClientFacade`]) and its
//! token-gated HTTP implementation ([`ApiClient`]).

pub mod facade;
pub mod stepup_client;

pub use facade::ApiClientFacade;
pub use stepup_client::ApiClient;
