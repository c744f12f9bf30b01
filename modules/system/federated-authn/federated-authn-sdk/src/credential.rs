//! Authentication requests presented to an [`Authenticator`](crate::Authenticator).

use std::any::Any;
use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::constants::USER_AUTHORITIES;

/// Common supertype of everything that can be handed to an authenticator.
///
/// Authenticators inspect the concrete type through [`Authentication::as_any`]
/// and decline requests they do not understand.
pub trait Authentication: fmt::Debug + Send + Sync {
    /// Identity asserted by the request.
    fn principal(&self) -> &str;

    /// Proof backing the assertion, if the request carries one.
    fn credentials(&self) -> Option<&SecretString>;

    /// Display name of the request.
    fn name(&self) -> &str;

    /// Authorities granted by the request.
    fn authorities(&self) -> &[&str];

    /// Whether the request has already been authenticated.
    fn is_authenticated(&self) -> bool;

    /// Access to the concrete request type.
    fn as_any(&self) -> &dyn Any;
}

/// Errors raised when a federated credential is constructed from invalid input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("authorization code must not be empty")]
    EmptyCode,

    #[error("origin must not be empty")]
    EmptyOrigin,
}

/// Assertion that a user completed an authorization-code flow at an external
/// identity provider.
///
/// Immutable once built. It never reports itself as authenticated: the
/// authenticated form is the [`AuthenticatedPrincipal`](crate::AuthenticatedPrincipal)
/// produced once the code has been exchanged.
#[derive(Debug)]
pub struct FederatedCredential {
    code: SecretString,
    origin: String,
    redirect_url: Option<String>,
}

impl FederatedCredential {
    /// Create a credential for `code` issued by the provider registered as `origin`.
    ///
    /// # Errors
    ///
    /// - `EmptyCode` if `code` is empty
    /// - `EmptyOrigin` if `origin` is empty
    pub fn new(code: impl Into<String>, origin: impl Into<String>) -> Result<Self, CredentialError> {
        let code = code.into();
        let origin = origin.into();

        if code.is_empty() {
            return Err(CredentialError::EmptyCode);
        }
        if origin.is_empty() {
            return Err(CredentialError::EmptyOrigin);
        }

        Ok(Self {
            code: SecretString::from(code),
            origin,
            redirect_url: None,
        })
    }

    /// Attach the redirect URI used during the authorization-code flow.
    #[must_use]
    pub fn with_redirect_url(mut self, redirect_url: impl Into<String>) -> Self {
        self.redirect_url = Some(redirect_url.into());
        self
    }

    #[must_use]
    pub fn code(&self) -> &SecretString {
        &self.code
    }

    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    #[must_use]
    pub fn redirect_url(&self) -> Option<&str> {
        self.redirect_url.as_deref()
    }
}

impl Authentication for FederatedCredential {
    fn principal(&self) -> &str {
        self.code.expose_secret()
    }

    fn credentials(&self) -> Option<&SecretString> {
        Some(&self.code)
    }

    fn name(&self) -> &str {
        self.code.expose_secret()
    }

    fn authorities(&self) -> &[&str] {
        USER_AUTHORITIES
    }

    fn is_authenticated(&self) -> bool {
        false
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::constants::AUTHENTICATED_USER_AUTHORITY;

    #[test]
    fn facets_expose_the_code() {
        let credential = FederatedCredential::new("654321", "test-oauth").unwrap();

        assert_eq!(credential.principal(), "654321");
        assert_eq!(credential.name(), "654321");
        assert_eq!(
            credential.credentials().map(ExposeSecret::expose_secret),
            Some("654321"),
        );
        assert_eq!(credential.origin(), "test-oauth");
        assert!(credential.redirect_url().is_none());
    }

    #[test]
    fn is_never_authenticated() {
        let credential = FederatedCredential::new("654321", "test-oauth").unwrap();

        assert!(!credential.is_authenticated());
    }

    #[test]
    fn carries_end_user_authority() {
        let credential = FederatedCredential::new("654321", "test-oauth").unwrap();

        assert_eq!(credential.authorities(), &[AUTHENTICATED_USER_AUTHORITY]);
    }

    #[test]
    fn keeps_redirect_url() {
        let credential = FederatedCredential::new("654321", "test-oauth")
            .unwrap()
            .with_redirect_url("https://app.example.com/callback");

        assert_eq!(
            credential.redirect_url(),
            Some("https://app.example.com/callback")
        );
    }

    #[test]
    fn rejects_empty_code() {
        let err = FederatedCredential::new("", "test-oauth").unwrap_err();
        assert_eq!(err, CredentialError::EmptyCode);
    }

    #[test]
    fn rejects_empty_origin() {
        let err = FederatedCredential::new("654321", "").unwrap_err();
        assert_eq!(err, CredentialError::EmptyOrigin);
    }

    #[test]
    fn debug_redacts_code() {
        let credential = FederatedCredential::new("super-secret-code", "test-oauth").unwrap();

        let rendered = format!("{credential:?}");
        assert!(!rendered.contains("super-secret-code"));
        assert!(rendered.contains("test-oauth"));
    }

    #[test]
    fn downcasts_through_as_any() {
        let credential = FederatedCredential::new("654321", "test-oauth").unwrap();
        let request: &dyn Authentication = &credential;

        assert!(request.as_any().downcast_ref::<FederatedCredential>().is_some());
    }
}
