//! Local (in-process) client for the federated `AuthN` module.

use std::sync::Arc;

use async_trait::async_trait;
use federated_authn_sdk::{
    Authentication, AuthenticationOutcome, Authenticator, FederatedAuthError,
};

use super::{DomainError, Service};

/// Local client wrapping the service.
///
/// Handed out by the module during `init()`.
pub struct FederatedAuthnLocalClient {
    svc: Arc<Service>,
}

impl FederatedAuthnLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }

    /// Origin of the login in progress on the current task, or `"local"`.
    #[must_use]
    pub fn current_origin(&self) -> String {
        self.svc.current_origin()
    }
}

fn log_and_convert(op: &str, e: DomainError) -> FederatedAuthError {
    tracing::warn!(operation = op, error = %e, "federated_authn call failed");
    e.into()
}

#[async_trait]
impl Authenticator for FederatedAuthnLocalClient {
    async fn authenticate(
        &self,
        request: &dyn Authentication,
    ) -> Result<AuthenticationOutcome, FederatedAuthError> {
        self.svc
            .authenticate(request)
            .await
            .map_err(|e| log_and_convert("authenticate", e))
    }
}
