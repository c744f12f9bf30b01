//! Domain service for the federated `AuthN` module.

use std::sync::Arc;
use std::time::Duration;

use federated_authn_sdk::context;
use federated_authn_sdk::{
    Authentication, AuthenticatedPrincipal, AuthenticationCompleter, AuthenticationOutcome,
    ExchangeResult, FederatedCredential, GrantType, LocalUser, ProviderConfig, ProviderDirectory,
    TokenExchangeClient, TokenExchangeClientFactory, TokenExchangeError, TokenRequest,
    UserResolver,
};
use tracing::{debug, info};

use super::error::DomainError;

/// Federated `AuthN` service.
///
/// Exchanges the authorization code carried by a [`FederatedCredential`]
/// with the provider registered for its origin and turns the returned token
/// into an [`AuthenticatedPrincipal`].
pub struct Service {
    directory: Arc<dyn ProviderDirectory>,
    clients: Arc<dyn TokenExchangeClientFactory>,
    resolver: Arc<dyn UserResolver>,
    completer: Arc<dyn AuthenticationCompleter>,
    exchange_timeout: Option<Duration>,
    forward_redirect_uri: bool,
}

impl Service {
    #[must_use]
    pub fn new(
        directory: Arc<dyn ProviderDirectory>,
        clients: Arc<dyn TokenExchangeClientFactory>,
        resolver: Arc<dyn UserResolver>,
        completer: Arc<dyn AuthenticationCompleter>,
    ) -> Self {
        Self {
            directory,
            clients,
            resolver,
            completer,
            exchange_timeout: None,
            forward_redirect_uri: true,
        }
    }

    /// Bound every exchange by `timeout`.
    #[must_use]
    pub fn with_exchange_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.exchange_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_forward_redirect_uri(mut self, forward: bool) -> Self {
        self.forward_redirect_uri = forward;
        self
    }

    /// Origin of the login in progress on the current task, or `"local"`.
    #[must_use]
    pub fn current_origin(&self) -> String {
        context::current_origin()
    }

    /// Authenticate a request.
    ///
    /// Requests other than [`FederatedCredential`] are declined with
    /// [`AuthenticationOutcome::NotHandled`]. For federated credentials the
    /// origin is scoped to this call and released on every exit path.
    ///
    /// # Errors
    ///
    /// - `ProviderNotFound` / `InvalidProviderConfig` if the origin cannot be used
    /// - `NoTokenReturned` if the provider returned neither token
    /// - `Exchange` for exchange client failures
    /// - `UserResolution` / `Completion` for failures deriving the principal
    pub async fn authenticate(
        &self,
        request: &dyn Authentication,
    ) -> Result<AuthenticationOutcome, DomainError> {
        let Some(credential) = request.as_any().downcast_ref::<FederatedCredential>() else {
            debug!(
                authenticated = request.is_authenticated(),
                "Unable to process authentication request"
            );
            return Ok(AuthenticationOutcome::NotHandled);
        };

        let principal =
            context::scope_origin(credential.origin(), self.authenticate_federated(credential))
                .await?;

        Ok(AuthenticationOutcome::Authenticated(principal))
    }

    #[tracing::instrument(skip_all, fields(origin = %credential.origin(), tenant_id))]
    async fn authenticate_federated(
        &self,
        credential: &FederatedCredential,
    ) -> Result<AuthenticatedPrincipal, DomainError> {
        let tenant_id = context::current_tenant();
        tracing::Span::current().record("tenant_id", tracing::field::display(tenant_id));

        let provider = self.directory.lookup(credential.origin(), tenant_id).await?;
        let request = self.token_request(credential, &provider)?;

        let client = self.clients.build(&provider);
        let result = self.exchange(client.as_ref(), request).await?;

        let user = self.resolve_user(&provider, &result).await?;
        debug!(resolved = user.is_some(), "Derived local user from provider token");

        let principal = self
            .completer
            .complete(credential, user)
            .await
            .map_err(DomainError::Completion)?;

        info!(username = %principal.user().username, "Federated login completed");
        Ok(principal)
    }

    fn token_request(
        &self,
        credential: &FederatedCredential,
        provider: &ProviderConfig,
    ) -> Result<TokenRequest, DomainError> {
        let endpoint =
            provider
                .token_endpoint()
                .map_err(|e| DomainError::InvalidProviderConfig {
                    origin: provider.origin.clone(),
                    reason: format!("invalid token endpoint '{}'", provider.token_url),
                    source: e,
                })?;

        let redirect_uri = if self.forward_redirect_uri {
            credential.redirect_url().map(str::to_owned)
        } else {
            None
        };

        Ok(TokenRequest {
            endpoint,
            grant_type: GrantType::AuthorizationCode,
            authorization_code: credential.code().clone(),
            client_id: provider.client_id.clone(),
            client_secret: provider.client_secret.clone(),
            redirect_uri,
            scopes: provider.scopes.clone(),
        })
    }

    async fn exchange(
        &self,
        client: &dyn TokenExchangeClient,
        request: TokenRequest,
    ) -> Result<ExchangeResult, TokenExchangeError> {
        debug!(endpoint = %request.endpoint, "Exchanging authorization code");

        match self.exchange_timeout {
            Some(limit) => tokio::time::timeout(limit, client.exchange(request))
                .await
                .map_err(|_| TokenExchangeError::Timeout(limit))?,
            None => client.exchange(request).await,
        }
    }

    async fn resolve_user(
        &self,
        provider: &ProviderConfig,
        result: &ExchangeResult,
    ) -> Result<Option<LocalUser>, DomainError> {
        if let Some(id_token) = result.id_token() {
            Ok(self.resolver.user_from_id_token(provider, id_token).await?)
        } else if let Some(access_token) = result.access_token() {
            Ok(self
                .resolver
                .user_from_access_token(provider, access_token)
                .await?)
        } else {
            Err(DomainError::NoTokenReturned {
                origin: context::current_origin(),
                tenant_id: provider.tenant_id,
            })
        }
    }
}
