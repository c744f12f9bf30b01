//! Ordered dispatch over several authenticators.

use std::sync::Arc;

use async_trait::async_trait;
use federated_authn_sdk::{
    Authentication, AuthenticationOutcome, Authenticator, FederatedAuthError,
};

/// Tries each authenticator in turn.
///
/// The first one that handles the request decides the outcome, including
/// failures. A request no authenticator handles yields `NotHandled`.
#[derive(Default)]
pub struct AuthenticatorChain {
    authenticators: Vec<Arc<dyn Authenticator>>,
}

impl AuthenticatorChain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, authenticator: Arc<dyn Authenticator>) -> Self {
        self.authenticators.push(authenticator);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.authenticators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.authenticators.is_empty()
    }
}

#[async_trait]
impl Authenticator for AuthenticatorChain {
    async fn authenticate(
        &self,
        request: &dyn Authentication,
    ) -> Result<AuthenticationOutcome, FederatedAuthError> {
        for authenticator in &self.authenticators {
            match authenticator.authenticate(request).await? {
                AuthenticationOutcome::NotHandled => {}
                handled @ AuthenticationOutcome::Authenticated(_) => return Ok(handled),
            }
        }

        tracing::debug!(
            authenticators = self.authenticators.len(),
            "No authenticator handled the request"
        );
        Ok(AuthenticationOutcome::NotHandled)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use federated_authn_sdk::constants::{AUTHENTICATED_USER_AUTHORITY, DEFAULT_TENANT_ID};
    use federated_authn_sdk::{AuthenticatedPrincipal, FederatedCredential, LocalUser};
    use uuid::Uuid;

    use super::*;

    enum Behavior {
        Decline,
        Accept(&'static str),
        Fail,
    }

    struct Stub {
        behavior: Behavior,
        calls: AtomicUsize,
    }

    impl Stub {
        fn new(behavior: Behavior) -> Arc<Self> {
            Arc::new(Self {
                behavior,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl Authenticator for Stub {
        async fn authenticate(
            &self,
            _request: &dyn Authentication,
        ) -> Result<AuthenticationOutcome, FederatedAuthError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.behavior {
                Behavior::Decline => Ok(AuthenticationOutcome::NotHandled),
                Behavior::Accept(username) => {
                    let user = LocalUser {
                        id: Uuid::new_v4(),
                        username: username.to_owned(),
                        email: None,
                        origin: "stub".to_owned(),
                        external_id: None,
                        tenant_id: DEFAULT_TENANT_ID,
                    };
                    Ok(AuthenticationOutcome::Authenticated(
                        AuthenticatedPrincipal::new(
                            user,
                            "stub",
                            DEFAULT_TENANT_ID,
                            vec![AUTHENTICATED_USER_AUTHORITY],
                        ),
                    ))
                }
                Behavior::Fail => Err(FederatedAuthError::Internal("boom".to_owned())),
            }
        }
    }

    fn credential() -> FederatedCredential {
        FederatedCredential::new("654321", "test-oauth").unwrap()
    }

    #[tokio::test]
    async fn first_handling_authenticator_wins() {
        let declining = Stub::new(Behavior::Decline);
        let first = Stub::new(Behavior::Accept("first"));
        let second = Stub::new(Behavior::Accept("second"));

        let chain = AuthenticatorChain::new()
            .with(declining.clone())
            .with(first.clone())
            .with(second.clone());

        let outcome = chain.authenticate(&credential()).await.unwrap();

        assert_eq!(outcome.principal().unwrap().name(), "first");
        assert_eq!(declining.calls.load(Ordering::SeqCst), 1);
        assert_eq!(first.calls.load(Ordering::SeqCst), 1);
        assert_eq!(second.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn errors_stop_the_chain() {
        let failing = Stub::new(Behavior::Fail);
        let accepting = Stub::new(Behavior::Accept("late"));

        let chain = AuthenticatorChain::new()
            .with(failing)
            .with(accepting.clone());

        let result = chain.authenticate(&credential()).await;

        assert!(matches!(result, Err(FederatedAuthError::Internal(_))));
        assert_eq!(accepting.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn nobody_handling_yields_not_handled() {
        let chain = AuthenticatorChain::new()
            .with(Stub::new(Behavior::Decline))
            .with(Stub::new(Behavior::Decline));

        let outcome = chain.authenticate(&credential()).await.unwrap();

        assert!(!outcome.is_handled());
        assert_eq!(chain.len(), 2);
    }

    #[tokio::test]
    async fn empty_chain_yields_not_handled() {
        let chain = AuthenticatorChain::new();

        let outcome = chain.authenticate(&credential()).await.unwrap();

        assert!(!outcome.is_handled());
        assert!(chain.is_empty());
    }
}
