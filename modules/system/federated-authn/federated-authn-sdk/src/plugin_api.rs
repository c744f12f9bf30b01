//! Collaborator contracts consumed by the federated `AuthN` manager.
//!
//! Embedding systems implement these traits and hand them to the module:
//! provider storage, the HTTP token client, token-to-user mapping and the
//! final principal construction all live outside this module.
//!
//! Implementations invoked during a login can read the origin being
//! processed with [`current_origin`](crate::context::current_origin).

use std::sync::Arc;

use async_trait::async_trait;
use secrecy::SecretString;

use crate::credential::FederatedCredential;
use crate::error::{
    FederatedAuthError, ProviderDirectoryError, TokenExchangeError, UserResolutionError,
};
use crate::models::{
    AuthenticatedPrincipal, ExchangeResult, LocalUser, ProviderConfig, TenantId, TokenRequest,
};

/// Lookup of identity-provider configuration.
#[async_trait]
pub trait ProviderDirectory: Send + Sync {
    /// Find the provider registered as `origin` in `tenant_id`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no such provider is registered
    /// - `Unavailable` if the backing store cannot be queried
    async fn lookup(
        &self,
        origin: &str,
        tenant_id: TenantId,
    ) -> Result<ProviderConfig, ProviderDirectoryError>;
}

/// Performs the code-for-token exchange with one provider.
#[async_trait]
pub trait TokenExchangeClient: Send + Sync {
    /// Send `request` to the provider's token endpoint.
    ///
    /// # Errors
    ///
    /// Transport failures, provider rejections and timeouts.
    async fn exchange(&self, request: TokenRequest) -> Result<ExchangeResult, TokenExchangeError>;
}

/// Builds the exchange client for a provider.
///
/// Lets deployments customize transport per provider (proxies, TLS roots,
/// client authentication method) without the manager knowing about it.
pub trait TokenExchangeClientFactory: Send + Sync {
    fn build(&self, provider: &ProviderConfig) -> Arc<dyn TokenExchangeClient>;
}

/// Derives a local user from provider tokens.
///
/// Both hooks answer "no user" unless overridden.
#[async_trait]
pub trait UserResolver: Send + Sync {
    /// Resolve the user an ID token was issued for.
    ///
    /// # Errors
    ///
    /// `InvalidToken` if the token fails validation.
    async fn user_from_id_token(
        &self,
        _provider: &ProviderConfig,
        _id_token: &SecretString,
    ) -> Result<Option<LocalUser>, UserResolutionError> {
        Ok(None)
    }

    /// Resolve the user an access token was issued for.
    ///
    /// # Errors
    ///
    /// `InvalidToken` if the token fails validation.
    async fn user_from_access_token(
        &self,
        _provider: &ProviderConfig,
        _access_token: &SecretString,
    ) -> Result<Option<LocalUser>, UserResolutionError> {
        Ok(None)
    }
}

/// Turns a resolved user into the principal handed back to the caller.
#[async_trait]
pub trait AuthenticationCompleter: Send + Sync {
    /// Build the principal for a login of `credential` that resolved `user`.
    ///
    /// # Errors
    ///
    /// Implementation-defined; the error is returned to the caller unchanged.
    async fn complete(
        &self,
        credential: &FederatedCredential,
        user: Option<LocalUser>,
    ) -> Result<AuthenticatedPrincipal, FederatedAuthError>;
}
