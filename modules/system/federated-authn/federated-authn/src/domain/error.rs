//! Domain errors for the federated `AuthN` module.

use federated_authn_sdk::{
    FederatedAuthError, ProviderDirectoryError, TenantId, TokenExchangeError, UserResolutionError,
};

/// Internal domain errors.
#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    #[error("identity provider '{origin}' not found in tenant {tenant_id}")]
    ProviderNotFound {
        origin: String,
        tenant_id: TenantId,
        #[source]
        source: ProviderDirectoryError,
    },

    #[error("invalid configuration for identity provider '{origin}': {reason}")]
    InvalidProviderConfig {
        origin: String,
        reason: String,
        #[source]
        source: url::ParseError,
    },

    #[error("provider directory unavailable: {0}")]
    DirectoryUnavailable(String),

    #[error("no token returned by provider origin:{origin} tenant:{tenant_id}")]
    NoTokenReturned { origin: String, tenant_id: TenantId },

    #[error(transparent)]
    Exchange(#[from] TokenExchangeError),

    #[error(transparent)]
    UserResolution(#[from] UserResolutionError),

    #[error(transparent)]
    Completion(FederatedAuthError),
}

impl From<ProviderDirectoryError> for DomainError {
    fn from(e: ProviderDirectoryError) -> Self {
        match e {
            ProviderDirectoryError::NotFound { origin, tenant_id } => Self::ProviderNotFound {
                origin: origin.clone(),
                tenant_id,
                source: ProviderDirectoryError::NotFound { origin, tenant_id },
            },
            ProviderDirectoryError::Unavailable(msg) => Self::DirectoryUnavailable(msg),
        }
    }
}

impl From<DomainError> for FederatedAuthError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::ProviderNotFound { source, .. } => Self::ProviderNotFound {
                message: source.to_string(),
                source: Some(Box::new(source)),
            },
            DomainError::InvalidProviderConfig { origin, reason, source } => {
                Self::ProviderNotFound {
                    message: format!("invalid configuration for '{origin}': {reason}"),
                    source: Some(Box::new(source)),
                }
            }
            DomainError::NoTokenReturned { origin, tenant_id } => Self::OAuthExchangeFailed(
                format!("unable to fetch token from provider origin:{origin} tenant:{tenant_id}"),
            ),
            DomainError::Exchange(e) => Self::Exchange(e),
            DomainError::UserResolution(e) => Self::UserResolution(e),
            DomainError::Completion(e) => e,
            DomainError::DirectoryUnavailable(reason) => Self::Internal(reason),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::error::Error as _;

    use federated_authn_sdk::constants::DEFAULT_TENANT_ID;

    use super::*;

    #[test]
    fn missing_provider_maps_to_provider_not_found_with_cause() {
        let domain: DomainError = ProviderDirectoryError::NotFound {
            origin: "unknown".to_owned(),
            tenant_id: DEFAULT_TENANT_ID,
        }
        .into();

        let err = FederatedAuthError::from(domain);
        match &err {
            FederatedAuthError::ProviderNotFound { message, .. } => {
                assert!(message.contains("unknown"));
            }
            other => panic!("Expected ProviderNotFound, got: {other:?}"),
        }
        assert!(err.source().is_some());
    }

    #[test]
    fn malformed_endpoint_maps_to_provider_not_found_with_cause() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let domain = DomainError::InvalidProviderConfig {
            origin: "broken".to_owned(),
            reason: "invalid token endpoint".to_owned(),
            source: parse_err,
        };

        let err = FederatedAuthError::from(domain);
        assert!(matches!(err, FederatedAuthError::ProviderNotFound { .. }));
        let cause = err.source().unwrap();
        assert!(cause.downcast_ref::<url::ParseError>().is_some());
    }

    #[test]
    fn exchange_errors_pass_through_unchanged() {
        let domain = DomainError::from(TokenExchangeError::Transport("connection reset".to_owned()));

        match FederatedAuthError::from(domain) {
            FederatedAuthError::Exchange(TokenExchangeError::Transport(msg)) => {
                assert_eq!(msg, "connection reset");
            }
            other => panic!("Expected Exchange(Transport), got: {other:?}"),
        }
    }

    #[test]
    fn directory_outage_maps_to_internal() {
        let domain = DomainError::from(ProviderDirectoryError::Unavailable("db down".to_owned()));

        assert!(matches!(
            FederatedAuthError::from(domain),
            FederatedAuthError::Internal(msg) if msg == "db down"
        ));
    }

    #[test]
    fn missing_tokens_map_to_exchange_failed() {
        let domain = DomainError::NoTokenReturned {
            origin: "test-oauth".to_owned(),
            tenant_id: DEFAULT_TENANT_ID,
        };

        assert!(matches!(
            FederatedAuthError::from(domain),
            FederatedAuthError::OAuthExchangeFailed(msg) if msg.contains("test-oauth")
        ));
    }
}
