//! Federated `AuthN` SDK
//!
//! This crate provides the public API for the `federated_authn` module:
//!
//! - [`Authenticator`] - Public API trait for consumers
//! - [`ProviderDirectory`], [`TokenExchangeClientFactory`], [`TokenExchangeClient`],
//!   [`UserResolver`], [`AuthenticationCompleter`] - Collaborator contracts
//! - [`FederatedCredential`] - Authorization-code assertion for an external provider
//! - [`AuthenticatedPrincipal`] - Result of a completed federated login
//! - [`FederatedAuthError`] - Error taxonomy
//! - [`context`] - Request-scoped origin and tenant
//!
//! ## Usage
//!
//! ```ignore
//! use federated_authn_sdk::{AuthenticationOutcome, Authenticator, FederatedCredential};
//!
//! let credential = FederatedCredential::new("654321", "test-oauth")?
//!     .with_redirect_url("https://app.example.com/login/callback");
//!
//! match authn.authenticate(&credential).await? {
//!     AuthenticationOutcome::Authenticated(principal) => { /* logged in */ }
//!     AuthenticationOutcome::NotHandled => { /* try the next authenticator */ }
//! }
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod constants;
pub mod context;
pub mod credential;
pub mod error;
pub mod models;
pub mod plugin_api;

// Re-export main types at crate root
pub use api::{AuthenticationOutcome, Authenticator};
pub use credential::{Authentication, CredentialError, FederatedCredential};
pub use error::{
    BoxError, FederatedAuthError, ProviderDirectoryError, TokenExchangeError, UserResolutionError,
};
pub use models::{
    AuthenticatedPrincipal, ExchangeResult, GrantType, LocalUser, ProviderConfig, TenantId,
    TokenRequest,
};
pub use plugin_api::{
    AuthenticationCompleter, ProviderDirectory, TokenExchangeClient, TokenExchangeClientFactory,
    UserResolver,
};
