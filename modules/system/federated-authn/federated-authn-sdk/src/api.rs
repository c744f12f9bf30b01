//! Public API trait for the federated `AuthN` module.
//!
//! Consumers hand an authentication request to an [`Authenticator`]. Several
//! authenticators can be tried in sequence over the same request: one that
//! does not understand the request type answers
//! [`AuthenticationOutcome::NotHandled`] instead of failing.

use async_trait::async_trait;

use crate::credential::Authentication;
use crate::error::FederatedAuthError;
use crate::models::AuthenticatedPrincipal;

/// Result of presenting a request to an authenticator.
#[derive(Debug)]
pub enum AuthenticationOutcome {
    /// The request was handled and the user is authenticated.
    Authenticated(AuthenticatedPrincipal),
    /// The authenticator does not apply to this request type.
    NotHandled,
}

impl AuthenticationOutcome {
    /// The principal, if the request was handled.
    #[must_use]
    pub fn principal(&self) -> Option<&AuthenticatedPrincipal> {
        match self {
            Self::Authenticated(principal) => Some(principal),
            Self::NotHandled => None,
        }
    }

    #[must_use]
    pub fn into_principal(self) -> Option<AuthenticatedPrincipal> {
        match self {
            Self::Authenticated(principal) => Some(principal),
            Self::NotHandled => None,
        }
    }

    #[must_use]
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Public API trait for authenticators.
///
/// ```ignore
/// let credential = FederatedCredential::new(code, origin)?;
/// let outcome = authn.authenticate(&credential).await?;
/// ```
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Authenticate `request`.
    ///
    /// # Errors
    ///
    /// - `ProviderNotFound` if the origin has no usable provider configuration
    /// - `OAuthExchangeFailed` if the provider returned no usable token
    /// - `Exchange` for failures of the exchange client, unchanged
    /// - `UserResolution` / `UserNotResolved` if no local user could be derived
    /// - `Internal` for unexpected errors
    async fn authenticate(
        &self,
        request: &dyn Authentication,
    ) -> Result<AuthenticationOutcome, FederatedAuthError>;
}
