use uuid::Uuid;

/// Origin reported when no federated login is in progress.
pub const ORIGIN_LOCAL: &str = "local";

/// Tenant used when no tenant scope has been entered.
pub const DEFAULT_TENANT_ID: Uuid = Uuid::from_u128(0x0000_0000_df51_5b42_9538_d2b5_6b7e_e953);

/// Authority granted to every end user authenticated through an external provider.
pub const AUTHENTICATED_USER_AUTHORITY: &str = "user";

/// Authority set carried by a federated credential before authentication.
pub const USER_AUTHORITIES: &[&str] = &[AUTHENTICATED_USER_AUTHORITY];
