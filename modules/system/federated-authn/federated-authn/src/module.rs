//! Federated `AuthN` module.

use std::sync::{Arc, OnceLock};

use federated_authn_sdk::{
    AuthenticationCompleter, Authenticator, ProviderDirectory, TokenExchangeClientFactory,
    UserResolver,
};
use tracing::info;

use crate::config::FederatedAuthnConfig;
use crate::domain::{FederatedAuthnLocalClient, PrincipalCompleter, Service, UnresolvedUsers};

/// External collaborators the module is wired with.
///
/// `directory` and `clients` are required. A `resolver` is required for any
/// login to succeed: without one no user is ever derived from a token and
/// every federated login fails with `UserNotResolved`. Without a `completer`
/// the resolved user is wrapped by [`PrincipalCompleter`].
pub struct Collaborators {
    pub directory: Arc<dyn ProviderDirectory>,
    pub clients: Arc<dyn TokenExchangeClientFactory>,
    pub resolver: Option<Arc<dyn UserResolver>>,
    pub completer: Option<Arc<dyn AuthenticationCompleter>>,
}

impl Collaborators {
    #[must_use]
    pub fn new(
        directory: Arc<dyn ProviderDirectory>,
        clients: Arc<dyn TokenExchangeClientFactory>,
    ) -> Self {
        Self {
            directory,
            clients,
            resolver: None,
            completer: None,
        }
    }

    #[must_use]
    pub fn with_resolver(mut self, resolver: Arc<dyn UserResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    #[must_use]
    pub fn with_completer(mut self, completer: Arc<dyn AuthenticationCompleter>) -> Self {
        self.completer = Some(completer);
        self
    }
}

/// Federated `AuthN` module.
///
/// `init()` validates the configuration, builds the service and hands back
/// the [`Authenticator`] other modules consume. It may run once.
#[derive(Default)]
pub struct FederatedAuthnModule {
    service: OnceLock<Arc<Service>>,
}

impl FederatedAuthnModule {
    /// Build the service and return the client for it.
    ///
    /// # Errors
    ///
    /// - `exchange_timeout` is not a valid non-zero duration
    /// - the module was already initialized
    #[tracing::instrument(skip_all)]
    pub fn init(
        &self,
        cfg: &FederatedAuthnConfig,
        deps: Collaborators,
    ) -> anyhow::Result<Arc<FederatedAuthnLocalClient>> {
        let exchange_timeout = cfg.exchange_timeout()?;
        info!(
            exchange_timeout = ?exchange_timeout,
            forward_redirect_uri = cfg.forward_redirect_uri,
            custom_resolver = deps.resolver.is_some(),
            custom_completer = deps.completer.is_some(),
            "Initializing federated_authn"
        );

        let resolver = deps
            .resolver
            .unwrap_or_else(|| Arc::new(UnresolvedUsers));
        let completer = deps
            .completer
            .unwrap_or_else(|| Arc::new(PrincipalCompleter));

        let svc = Arc::new(
            Service::new(deps.directory, deps.clients, resolver, completer)
                .with_exchange_timeout(exchange_timeout)
                .with_forward_redirect_uri(cfg.forward_redirect_uri),
        );

        self.service
            .set(Arc::clone(&svc))
            .map_err(|_| anyhow::anyhow!("Service already initialized"))?;

        Ok(Arc::new(FederatedAuthnLocalClient::new(svc)))
    }

    /// Same as [`Self::init`], erased to the public API trait.
    ///
    /// # Errors
    ///
    /// See [`Self::init`].
    pub fn init_authenticator(
        &self,
        cfg: &FederatedAuthnConfig,
        deps: Collaborators,
    ) -> anyhow::Result<Arc<dyn Authenticator>> {
        let client: Arc<dyn Authenticator> = self.init(cfg, deps)?;
        Ok(client)
    }

    /// The service, once [`Self::init`] succeeded.
    #[must_use]
    pub fn service(&self) -> Option<Arc<Service>> {
        self.service.get().cloned()
    }
}
