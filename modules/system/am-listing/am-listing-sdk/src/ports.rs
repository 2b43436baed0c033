//! Collaborators the listing engine depends on.
//!
//! Storage-backed modules implement these traits; the engine only sees the
//! traits. Every method receives the request's [`SecurityContext`] so
//! implementations can honour its cancellation token.

use async_trait::async_trait;
use iam_security::SecurityContext;
use uuid::Uuid;

use crate::error::AmListingError;
use crate::models::{RegisteredService, RoleSummary};
use crate::permission::Permission;

/// Services registered with IAM.
#[async_trait]
pub trait ServiceRegistry: Send + Sync {
    /// All registered services, in registration order.
    ///
    /// # Errors
    ///
    /// `Adapter` on backing-store failure.
    async fn list(&self, ctx: &SecurityContext) -> Result<Vec<RegisteredService>, AmListingError>;

    /// Service owning the `permission_name` namespace.
    ///
    /// # Errors
    ///
    /// - `ServiceNotFound` when no service uses that permission name
    /// - `Adapter` on backing-store failure
    async fn with_permission_name(
        &self,
        ctx: &SecurityContext,
        permission_name: &str,
    ) -> Result<RegisteredService, AmListingError>;
}

/// Role lookup used to drill into role actions.
#[async_trait]
pub trait RoleDirectory: Send + Sync {
    /// Roles whose name starts with `prefix`, at most `limit` of them.
    ///
    /// # Errors
    ///
    /// `Adapter` on backing-store failure.
    async fn with_name_prefix(
        &self,
        ctx: &SecurityContext,
        prefix: &str,
        limit: usize,
    ) -> Result<Vec<RoleSummary>, AmListingError>;
}

/// Current holdings of a principal.
#[async_trait]
pub trait HoldingsChecker: Send + Sync {
    /// For each permission, whether `principal_id` holds it directly or through
    /// a covering grant. The result has the length and order of `permissions`.
    ///
    /// # Errors
    ///
    /// `Adapter` on backing-store failure.
    async fn has_permissions(
        &self,
        ctx: &SecurityContext,
        principal_id: Uuid,
        permissions: &[Permission],
    ) -> Result<Vec<bool>, AmListingError>;
}
