//! Error types for the federated `AuthN` module.

use std::time::Duration;

use thiserror::Error;

use crate::models::TenantId;

/// Boxed cause attached to an error.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur when authenticating through an external provider.
///
/// Every variant means the login is rejected; the kinds exist for
/// diagnostics, not for different end-user messaging.
#[derive(Debug, Error)]
pub enum FederatedAuthError {
    /// The origin has no usable, well-formed provider configuration in the
    /// current tenant.
    #[error("provider not found: {message}")]
    ProviderNotFound {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// The provider answered but returned neither an ID token nor an access token.
    #[error("oauth exchange failed: {0}")]
    OAuthExchangeFailed(String),

    /// The exchange client failed. Passed through unchanged.
    #[error(transparent)]
    Exchange(#[from] TokenExchangeError),

    /// A user-resolution hook rejected the returned token.
    #[error("user resolution failed: {0}")]
    UserResolution(#[from] UserResolutionError),

    /// No local user could be derived from the returned token.
    #[error("no local user resolved for origin '{origin}'")]
    UserNotResolved { origin: String },

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Failures reported by a [`ProviderDirectory`](crate::ProviderDirectory).
#[derive(Debug, Error)]
pub enum ProviderDirectoryError {
    #[error("no identity provider '{origin}' registered in tenant {tenant_id}")]
    NotFound { origin: String, tenant_id: TenantId },

    #[error("provider directory unavailable: {0}")]
    Unavailable(String),
}

/// Failures reported by a [`TokenExchangeClient`](crate::TokenExchangeClient).
#[derive(Debug, Error)]
pub enum TokenExchangeError {
    /// The token endpoint could not be reached or the response was unreadable.
    #[error("token endpoint transport error: {0}")]
    Transport(String),

    /// The provider rejected the request (RFC 6749 section 5.2 error response).
    #[error("provider rejected token request: {error}")]
    Rejected {
        error: String,
        description: Option<String>,
    },

    /// The exchange did not finish within the configured limit.
    #[error("token exchange timed out after {0:?}")]
    Timeout(Duration),
}

/// Failures reported by a [`UserResolver`](crate::UserResolver).
#[derive(Debug, Error)]
pub enum UserResolutionError {
    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("{0}")]
    Internal(String),
}
