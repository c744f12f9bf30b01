//! Request-scoped ambient context for federated authentication.
//!
//! The origin being processed and the tenant it is resolved in are carried as
//! Tokio task-locals. A scope is bound to the future (or closure) it wraps:
//! every poll of that future sees the value, nothing outside it does, and the
//! previous value is restored when the future completes, fails, or is dropped.
//!
//! Interleaved futures on the same task each see their own value, so two
//! concurrent logins never observe each other's origin.
//!
//! Spawned tasks and blocking-pool threads do not inherit a scope; re-enter it
//! there with [`scope_origin`] / [`sync_scope_origin`].

use std::future::Future;

use tokio::task::futures::TaskLocalFuture;

use crate::constants::{DEFAULT_TENANT_ID, ORIGIN_LOCAL};
use crate::models::TenantId;

tokio::task_local! {
    static CURRENT_ORIGIN: String;
    static CURRENT_TENANT: TenantId;
}

/// Origin of the federated login in progress, or [`ORIGIN_LOCAL`] outside one.
#[must_use]
pub fn current_origin() -> String {
    CURRENT_ORIGIN
        .try_with(Clone::clone)
        .unwrap_or_else(|_| ORIGIN_LOCAL.to_owned())
}

/// Run `fut` with `origin` as the current origin.
pub fn scope_origin<F>(origin: impl Into<String>, fut: F) -> TaskLocalFuture<String, F>
where
    F: Future,
{
    CURRENT_ORIGIN.scope(origin.into(), fut)
}

/// Run the closure `f` with `origin` as the current origin.
pub fn sync_scope_origin<F, R>(origin: impl Into<String>, f: F) -> R
where
    F: FnOnce() -> R,
{
    CURRENT_ORIGIN.sync_scope(origin.into(), f)
}

/// Tenant the current request is resolved in, or [`DEFAULT_TENANT_ID`].
#[must_use]
pub fn current_tenant() -> TenantId {
    CURRENT_TENANT
        .try_with(|tenant_id| *tenant_id)
        .unwrap_or(DEFAULT_TENANT_ID)
}

/// Run `fut` with `tenant_id` as the current tenant.
pub fn scope_tenant<F>(tenant_id: TenantId, fut: F) -> TaskLocalFuture<TenantId, F>
where
    F: Future,
{
    CURRENT_TENANT.scope(tenant_id, fut)
}

/// Run the closure `f` with `tenant_id` as the current tenant.
pub fn sync_scope_tenant<F, R>(tenant_id: TenantId, f: F) -> R
where
    F: FnOnce() -> R,
{
    CURRENT_TENANT.sync_scope(tenant_id, f)
}
