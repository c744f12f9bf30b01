//! Domain models for the federated `AuthN` module.

use std::any::Any;

use secrecy::{ExposeSecret, SecretString};
use time::OffsetDateTime;
use url::Url;
use uuid::Uuid;

use crate::credential::Authentication;

/// Tenant identifier under which provider configurations are partitioned.
pub type TenantId = Uuid;

/// External identity provider registered for an origin within a tenant.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Origin key the provider is registered under.
    pub origin: String,
    pub tenant_id: TenantId,
    /// Human-readable provider name.
    pub name: Option<String>,
    /// Authorization endpoint the user agent was sent to.
    pub auth_url: Option<String>,
    /// Token endpoint, as stored. Validated when a login is attempted.
    pub token_url: String,
    /// Client identifier this deployment is registered with at the provider.
    pub client_id: String,
    pub client_secret: SecretString,
    /// Scopes requested from the provider.
    pub scopes: Vec<String>,
    /// Expected token issuer, for resolvers that validate it.
    pub issuer: Option<String>,
}

impl ProviderConfig {
    /// Parse the stored token URL into an endpoint.
    ///
    /// # Errors
    ///
    /// Returns the parse failure if `token_url` is not an absolute URL.
    pub fn token_endpoint(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.token_url)
    }
}

/// OAuth 2.0 grant used for an exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum GrantType {
    /// Trade an authorization code for tokens.
    AuthorizationCode,
}

impl GrantType {
    /// Wire value of the `grant_type` parameter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AuthorizationCode => "authorization_code",
        }
    }
}

/// Token request sent to a provider's token endpoint.
#[derive(Debug, Clone)]
pub struct TokenRequest {
    pub endpoint: Url,
    pub grant_type: GrantType,
    pub authorization_code: SecretString,
    pub client_id: String,
    pub client_secret: SecretString,
    /// Redirect URI from the original authorization request.
    pub redirect_uri: Option<String>,
    pub scopes: Vec<String>,
}

/// Tokens returned by a provider.
#[derive(Debug, Clone, Default)]
pub struct ExchangeResult {
    pub id_token: Option<SecretString>,
    pub access_token: Option<SecretString>,
    pub token_type: Option<String>,
    /// Access token lifetime in seconds.
    pub expires_in: Option<u64>,
    pub scope: Option<String>,
}

impl ExchangeResult {
    /// The ID token, if the provider returned a non-empty one.
    #[must_use]
    pub fn id_token(&self) -> Option<&SecretString> {
        non_empty(self.id_token.as_ref())
    }

    /// The access token, if the provider returned a non-empty one.
    #[must_use]
    pub fn access_token(&self) -> Option<&SecretString> {
        non_empty(self.access_token.as_ref())
    }

    #[must_use]
    pub fn has_id_token(&self) -> bool {
        self.id_token().is_some()
    }

    #[must_use]
    pub fn has_access_token(&self) -> bool {
        self.access_token().is_some()
    }
}

fn non_empty(token: Option<&SecretString>) -> Option<&SecretString> {
    token.filter(|t| !t.expose_secret().is_empty())
}

/// Local user derived from a provider token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalUser {
    pub id: Uuid,
    pub username: String,
    pub email: Option<String>,
    /// Origin the user authenticated through.
    pub origin: String,
    /// Subject identifier assigned by the external provider.
    pub external_id: Option<String>,
    pub tenant_id: TenantId,
}

/// Outcome of a completed federated login.
#[derive(Debug, Clone)]
pub struct AuthenticatedPrincipal {
    user: LocalUser,
    origin: String,
    tenant_id: TenantId,
    authorities: Vec<&'static str>,
    authenticated_at: OffsetDateTime,
}

impl AuthenticatedPrincipal {
    #[must_use]
    pub fn new(
        user: LocalUser,
        origin: impl Into<String>,
        tenant_id: TenantId,
        authorities: Vec<&'static str>,
    ) -> Self {
        Self {
            user,
            origin: origin.into(),
            tenant_id,
            authorities,
            authenticated_at: OffsetDateTime::now_utc(),
        }
    }

    #[must_use]
    pub fn user(&self) -> &LocalUser {
        &self.user
    }

    /// Origin of the provider that authenticated the user.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    #[must_use]
    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    #[must_use]
    pub fn authenticated_at(&self) -> OffsetDateTime {
        self.authenticated_at
    }
}

impl Authentication for AuthenticatedPrincipal {
    fn principal(&self) -> &str {
        &self.user.username
    }

    fn credentials(&self) -> Option<&SecretString> {
        None
    }

    fn name(&self) -> &str {
        &self.user.username
    }

    fn authorities(&self) -> &[&str] {
        &self.authorities
    }

    fn is_authenticated(&self) -> bool {
        true
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
