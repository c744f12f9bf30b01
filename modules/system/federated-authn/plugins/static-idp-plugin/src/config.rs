//! Configuration for the static identity-provider plugin.

use federated_authn_sdk::constants::DEFAULT_TENANT_ID;
use federated_authn_sdk::{ProviderConfig, TenantId};
use secrecy::SecretString;
use serde::Deserialize;

/// Plugin configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticIdpPluginConfig {
    /// Registered providers. A later entry replaces an earlier one with the
    /// same origin and tenant.
    pub providers: Vec<ProviderEntry>,
}

/// One identity provider registration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderEntry {
    pub origin: String,

    /// Tenant the provider belongs to.
    #[serde(default = "default_tenant_id")]
    pub tenant_id: TenantId,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub auth_url: Option<String>,

    /// Token endpoint. Stored as given; validated at login time.
    pub token_url: String,

    pub client_id: String,

    pub client_secret: String,

    #[serde(default)]
    pub scopes: Vec<String>,

    #[serde(default)]
    pub issuer: Option<String>,
}

fn default_tenant_id() -> TenantId {
    DEFAULT_TENANT_ID
}

impl ProviderEntry {
    #[must_use]
    pub fn to_provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            origin: self.origin.clone(),
            tenant_id: self.tenant_id,
            name: self.name.clone(),
            auth_url: self.auth_url.clone(),
            token_url: self.token_url.clone(),
            client_id: self.client_id.clone(),
            client_secret: SecretString::from(self.client_secret.clone()),
            scopes: self.scopes.clone(),
            issuer: self.issuer.clone(),
        }
    }
}
