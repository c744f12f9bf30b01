//! Default principal construction.

use async_trait::async_trait;
use federated_authn_sdk::constants::AUTHENTICATED_USER_AUTHORITY;
use federated_authn_sdk::context;
use federated_authn_sdk::{
    AuthenticatedPrincipal, AuthenticationCompleter, FederatedAuthError, FederatedCredential,
    LocalUser,
};

/// Completer that wraps the resolved user into an [`AuthenticatedPrincipal`]
/// carrying the end-user authority.
///
/// The principal's tenant is the tenant the login was resolved in.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrincipalCompleter;

#[async_trait]
impl AuthenticationCompleter for PrincipalCompleter {
    async fn complete(
        &self,
        credential: &FederatedCredential,
        user: Option<LocalUser>,
    ) -> Result<AuthenticatedPrincipal, FederatedAuthError> {
        let user = user.ok_or_else(|| FederatedAuthError::UserNotResolved {
            origin: credential.origin().to_owned(),
        })?;

        Ok(AuthenticatedPrincipal::new(
            user,
            credential.origin(),
            context::current_tenant(),
            vec![AUTHENTICATED_USER_AUTHORITY],
        ))
    }
}
