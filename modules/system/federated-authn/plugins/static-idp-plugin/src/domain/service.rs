//! Service implementation for the static identity-provider plugin.

use std::collections::HashMap;

use federated_authn_sdk::{ProviderConfig, TenantId};
use tracing::warn;

use crate::config::StaticIdpPluginConfig;

/// Static provider directory.
///
/// Providers are partitioned by tenant: the same origin may be registered
/// in several tenants with different settings.
#[derive(Debug)]
pub struct Service {
    providers: HashMap<(String, TenantId), ProviderConfig>,
}

impl Service {
    /// Create a service from plugin configuration.
    ///
    /// A duplicate `(origin, tenant_id)` replaces the earlier entry.
    #[must_use]
    pub fn from_config(cfg: &StaticIdpPluginConfig) -> Self {
        let mut providers = HashMap::with_capacity(cfg.providers.len());

        for entry in &cfg.providers {
            let key = (entry.origin.clone(), entry.tenant_id);
            if providers
                .insert(key, entry.to_provider_config())
                .is_some()
            {
                warn!(
                    origin = %entry.origin,
                    tenant_id = %entry.tenant_id,
                    "Duplicate provider registration, keeping the last entry"
                );
            }
        }

        Self { providers }
    }

    /// Provider registered for `origin` in `tenant_id`.
    #[must_use]
    pub fn find(&self, origin: &str, tenant_id: TenantId) -> Option<&ProviderConfig> {
        self.providers.get(&(origin.to_owned(), tenant_id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
