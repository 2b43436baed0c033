//! In-memory store behind the static AM plugin.

use std::collections::HashMap;

use am_listing_sdk::{Permission, PermissionError, RegisteredService, RoleSummary};
use uuid::Uuid;

use crate::config::StaticAmPluginConfig;

/// Static registry, role directory and grant table.
///
/// A principal holds a permission when one of its grants covers it; grants
/// themselves are validated when the plugin starts.
#[derive(Debug, Default)]
pub struct Service {
    services: Vec<RegisteredService>,
    roles: Vec<RoleSummary>,
    grants: HashMap<Uuid, Vec<Permission>>,
}

impl Service {
    /// # Errors
    ///
    /// Fails on the first grant that is not a valid permission.
    pub fn new(cfg: StaticAmPluginConfig) -> Result<Self, PermissionError> {
        let grants = cfg
            .grants
            .into_iter()
            .map(|(principal, granted)| {
                let parsed = granted
                    .iter()
                    .map(|p| Permission::parse(p))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok((principal, parsed))
            })
            .collect::<Result<HashMap<_, _>, PermissionError>>()?;

        Ok(Self {
            services: cfg.services,
            roles: cfg.roles,
            grants,
        })
    }

    #[must_use]
    pub fn services(&self) -> &[RegisteredService] {
        &self.services
    }

    #[must_use]
    pub fn service(&self, permission_name: &str) -> Option<&RegisteredService> {
        self.services
            .iter()
            .find(|s| s.permission_name == permission_name)
    }

    /// Roles whose name starts with `prefix`, in configuration order.
    #[must_use]
    pub fn roles_with_prefix(&self, prefix: &str, limit: usize) -> Vec<RoleSummary> {
        self.roles
            .iter()
            .filter(|r| r.name.starts_with(prefix))
            .take(limit)
            .cloned()
            .collect()
    }

    /// For each permission, whether `principal` holds a covering grant.
    #[must_use]
    pub fn holds(&self, principal: Uuid, permissions: &[Permission]) -> Vec<bool> {
        let granted = self.grants.get(&principal).map_or(&[][..], Vec::as_slice);
        permissions
            .iter()
            .map(|wanted| granted.iter().any(|g| g.covers(wanted)))
            .collect()
    }
}
