//! Port implementations for the static AM plugin.

use am_listing_sdk::{
    AmListingError, HoldingsChecker, Permission, RegisteredService, RoleDirectory, RoleSummary,
    ServiceRegistry,
};
use async_trait::async_trait;
use iam_security::SecurityContext;
use uuid::Uuid;

use super::service::Service;

#[async_trait]
impl ServiceRegistry for Service {
    async fn list(&self, _ctx: &SecurityContext) -> Result<Vec<RegisteredService>, AmListingError> {
        Ok(self.services().to_vec())
    }

    async fn with_permission_name(
        &self,
        _ctx: &SecurityContext,
        permission_name: &str,
    ) -> Result<RegisteredService, AmListingError> {
        self.service(permission_name)
            .cloned()
            .ok_or_else(|| AmListingError::service_not_found(permission_name))
    }
}

#[async_trait]
impl RoleDirectory for Service {
    async fn with_name_prefix(
        &self,
        _ctx: &SecurityContext,
        prefix: &str,
        limit: usize,
    ) -> Result<Vec<RoleSummary>, AmListingError> {
        Ok(self.roles_with_prefix(prefix, limit))
    }
}

#[async_trait]
impl HoldingsChecker for Service {
    async fn has_permissions(
        &self,
        _ctx: &SecurityContext,
        principal_id: Uuid,
        permissions: &[Permission],
    ) -> Result<Vec<bool>, AmListingError> {
        Ok(self.holds(principal_id, permissions))
    }
}
