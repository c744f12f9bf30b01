//! Federated `AuthN` Module
//!
//! Authenticates users who completed an authorization-code flow at an
//! external identity provider. The provider is selected by the origin carried
//! on the credential, the code is exchanged for tokens, and a local principal
//! is derived from the returned token.
//!
//! Provides an [`Authenticator`](federated_authn_sdk::Authenticator) built by
//! [`module::FederatedAuthnModule`] for consumption by other modules.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;
pub mod infra;
pub mod module;

pub use module::{Collaborators, FederatedAuthnModule};
