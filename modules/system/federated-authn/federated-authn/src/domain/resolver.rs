//! Default user resolution.

use federated_authn_sdk::UserResolver;

/// User resolver that derives no user from any token.
///
/// Used until the embedding system supplies a resolver that understands its
/// providers' tokens; logins then fail at completion with `UserNotResolved`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnresolvedUsers;

impl UserResolver for UnresolvedUsers {}
