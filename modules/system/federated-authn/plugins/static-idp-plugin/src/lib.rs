#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static identity-provider plugin
//!
//! A [`ProviderDirectory`](federated_authn_sdk::ProviderDirectory) backed by
//! provider entries from configuration. Meant for development and tests;
//! entries are keyed by `(origin, tenant_id)`.
//!
//! ## Configuration
//!
//! ```yaml
//! modules:
//!   static_idp_plugin:
//!     config:
//!       providers:
//!         - origin: "test-oauth"
//!           name: "Test OAuth"
//!           auth_url: "http://auth.url"
//!           token_url: "http://token.url"
//!           client_id: "relying-party"
//!           client_secret: "secret"
//!           scopes: ["openid"]
//!         - origin: "github"
//!           tenant_id: "aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaaa"
//!           token_url: "https://github.com/login/oauth/access_token"
//!           client_id: "gh-client"
//!           client_secret: "gh-secret"
//! ```

pub mod config;
pub mod domain;
pub mod module;

pub use module::StaticIdpPlugin;
