use std::sync::Arc;

use am_listing_sdk::{AmEntry, PATH_SEPARATOR, Phase, RoleDirectory};
use async_trait::async_trait;
use iam_security::SecurityContext;
use tracing::debug;

use super::{NamespaceResolver, cancellable};
use crate::domain::catalog::{ActionCatalog, addresses_single_role};
use crate::domain::error::DomainError;

/// Resolver for IAM's own actions and resources.
///
/// `action-prefix` lists matching catalog actions; `action::resource-prefix`
/// lists the resources the action can target.
pub struct SelfNamespace {
    roles: Arc<dyn RoleDirectory>,
    role_lookup_limit: usize,
}

impl SelfNamespace {
    #[must_use]
    pub fn new(roles: Arc<dyn RoleDirectory>, role_lookup_limit: usize) -> Self {
        Self {
            roles,
            role_lookup_limit,
        }
    }

    fn list_actions(action_prefix: &str) -> Vec<AmEntry> {
        ActionCatalog::all_actions()
            .filter(|action| action.starts_with(action_prefix))
            .map(AmEntry::branch)
            .collect()
    }

    async fn list_resources(
        &self,
        ctx: &SecurityContext,
        service: &str,
        action: &str,
        resource_prefix: &str,
    ) -> Result<Vec<AmEntry>, DomainError> {
        if !addresses_single_role(action) {
            debug!(
                action,
                catalog = ?ActionCatalog::of(action),
                "no resources below action"
            );
            return Ok(Vec::new());
        }

        let roles = cancellable(
            ctx,
            Phase::RoleLookup,
            self.roles
                .with_name_prefix(ctx, resource_prefix, self.role_lookup_limit),
        )
        .await?;

        // Role ids may already carry the namespace path of the action.
        let qualified = format!("{service}{PATH_SEPARATOR}{action}{PATH_SEPARATOR}");
        Ok(roles
            .into_iter()
            .map(|role| {
                let id = role.id.strip_prefix(&qualified).unwrap_or(&role.id);
                AmEntry::leaf(id, role.name)
            })
            .collect())
    }
}

#[async_trait]
impl NamespaceResolver for SelfNamespace {
    async fn list(
        &self,
        ctx: &SecurityContext,
        service: &str,
        rest: &str,
    ) -> Result<Vec<AmEntry>, DomainError> {
        let Some((action, resource_prefix)) = rest.split_once(PATH_SEPARATOR) else {
            return Ok(Self::list_actions(rest));
        };

        let entries = self
            .list_resources(ctx, service, action, resource_prefix)
            .await?;
        Ok(entries.into_iter().map(|e| e.under(action)).collect())
    }
}
