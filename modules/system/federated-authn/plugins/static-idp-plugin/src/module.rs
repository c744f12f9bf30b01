//! Static identity-provider plugin module.

use std::sync::{Arc, OnceLock};

use federated_authn_sdk::ProviderDirectory;
use tracing::info;

use crate::config::StaticIdpPluginConfig;
use crate::domain::Service;

/// Static identity-provider plugin module.
///
/// Serves provider configurations from its own config as a
/// [`ProviderDirectory`].
#[derive(Default)]
pub struct StaticIdpPlugin {
    service: OnceLock<Arc<Service>>,
}

impl StaticIdpPlugin {
    /// Build the directory from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the plugin was already initialized.
    pub fn init(&self, cfg: &StaticIdpPluginConfig) -> anyhow::Result<Arc<dyn ProviderDirectory>> {
        info!("Initializing static_idp_plugin");

        let service = Arc::new(Service::from_config(cfg));
        info!(
            configured = cfg.providers.len(),
            registered = service.len(),
            "Loaded provider configuration"
        );

        self.service
            .set(service.clone())
            .map_err(|_| anyhow::anyhow!("Service already initialized"))?;

        let api: Arc<dyn ProviderDirectory> = service;
        Ok(api)
    }

    /// The directory, once [`Self::init`] succeeded.
    #[must_use]
    pub fn service(&self) -> Option<Arc<Service>> {
        self.service.get().cloned()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn second_init_fails() {
        let plugin = StaticIdpPlugin::default();
        let cfg = StaticIdpPluginConfig::default();

        assert!(plugin.init(&cfg).is_ok());
        let Err(err) = plugin.init(&cfg) else {
            panic!("second init must fail");
        };
        assert!(err.to_string().contains("already initialized"));
    }

    #[test]
    fn service_available_after_init() {
        let plugin = StaticIdpPlugin::default();
        assert!(plugin.service().is_none());

        plugin.init(&StaticIdpPluginConfig::default()).unwrap();
        assert!(plugin.service().unwrap().is_empty());
    }
}
