//! Client implementation for the static identity-provider plugin.
//!
//! Implements `ProviderDirectory` using the domain service.

use async_trait::async_trait;
use federated_authn_sdk::{ProviderConfig, ProviderDirectory, ProviderDirectoryError, TenantId};

use super::service::Service;

#[async_trait]
impl ProviderDirectory for Service {
    async fn lookup(
        &self,
        origin: &str,
        tenant_id: TenantId,
    ) -> Result<ProviderConfig, ProviderDirectoryError> {
        self.find(origin, tenant_id)
            .cloned()
            .ok_or_else(|| ProviderDirectoryError::NotFound {
                origin: origin.to_owned(),
                tenant_id,
            })
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use federated_authn_sdk::constants::DEFAULT_TENANT_ID;
    use uuid::Uuid;

    use super::*;
    use crate::config::StaticIdpPluginConfig;

    fn service() -> Service {
        let cfg: StaticIdpPluginConfig = serde_json::from_value(serde_json::json!({
            "providers": [{
                "origin": "test-oauth",
                "auth_url": "http://auth.url",
                "token_url": "http://token.url",
                "client_id": "relying-party",
                "client_secret": "secret"
            }]
        }))
        .unwrap();
        Service::from_config(&cfg)
    }

    #[tokio::test]
    async fn directory_trait_returns_registered_provider() {
        let service = service();
        let directory: &dyn ProviderDirectory = &service;

        let provider = directory
            .lookup("test-oauth", DEFAULT_TENANT_ID)
            .await
            .unwrap();
        assert_eq!(provider.origin, "test-oauth");
        assert_eq!(provider.auth_url.as_deref(), Some("http://auth.url"));
    }

    #[tokio::test]
    async fn directory_trait_unknown_origin_not_found() {
        let service = service();
        let directory: &dyn ProviderDirectory = &service;

        let result = directory.lookup("unknown", DEFAULT_TENANT_ID).await;
        match result.unwrap_err() {
            ProviderDirectoryError::NotFound { origin, tenant_id } => {
                assert_eq!(origin, "unknown");
                assert_eq!(tenant_id, DEFAULT_TENANT_ID);
            }
            other => panic!("Expected NotFound, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn directory_trait_other_tenant_not_found() {
        let service = service();
        let directory: &dyn ProviderDirectory = &service;

        let result = directory.lookup("test-oauth", Uuid::new_v4()).await;
        assert!(matches!(result, Err(ProviderDirectoryError::NotFound { .. })));
    }
}
