//! Configuration for the static AM plugin.

use std::collections::HashMap;

use am_listing_sdk::{RegisteredService, RoleSummary};
use serde::Deserialize;
use uuid::Uuid;

/// Plugin configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticAmPluginConfig {
    /// Registered services, in registration order.
    pub services: Vec<RegisteredService>,

    /// Roles available to role lookups.
    pub roles: Vec<RoleSummary>,

    /// Permissions held by each principal, in canonical string form.
    pub grants: HashMap<Uuid, Vec<String>>,
}
