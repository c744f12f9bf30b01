//! Adapter for exchange clients that block on network I/O.
//!
//! The blocking call runs on Tokio's blocking pool so that it never stalls
//! the async workers. The origin and tenant scopes of the calling task are
//! re-entered on the worker thread for the duration of the call.

use std::sync::Arc;

use async_trait::async_trait;
use federated_authn_sdk::context;
use federated_authn_sdk::{ExchangeResult, TokenExchangeClient, TokenExchangeError, TokenRequest};

/// Exchange client performing the token request synchronously.
pub trait BlockingTokenExchangeClient: Send + Sync + 'static {
    /// Send `request` to the provider's token endpoint, blocking the thread.
    ///
    /// # Errors
    ///
    /// Transport failures and provider rejections.
    fn exchange_blocking(
        &self,
        request: TokenRequest,
    ) -> Result<ExchangeResult, TokenExchangeError>;
}

/// Runs a [`BlockingTokenExchangeClient`] on the blocking pool.
pub struct SpawnBlockingExchange<C> {
    inner: Arc<C>,
}

impl<C> SpawnBlockingExchange<C> {
    #[must_use]
    pub fn new(inner: Arc<C>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<C> TokenExchangeClient for SpawnBlockingExchange<C>
where
    C: BlockingTokenExchangeClient,
{
    async fn exchange(&self, request: TokenRequest) -> Result<ExchangeResult, TokenExchangeError> {
        let inner = Arc::clone(&self.inner);
        let origin = context::current_origin();
        let tenant_id = context::current_tenant();

        tokio::task::spawn_blocking(move || {
            context::sync_scope_origin(origin, || {
                context::sync_scope_tenant(tenant_id, || inner.exchange_blocking(request))
            })
        })
        .await
        .map_err(|e| TokenExchangeError::Transport(format!("blocking exchange task failed: {e}")))?
    }
}
