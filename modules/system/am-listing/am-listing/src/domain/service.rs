//! AM listing engine.

use std::sync::Arc;

use am_listing_sdk::{
    AmEntry, HoldingsChecker, PATH_SEPARATOR, Phase, RoleDirectory, ServiceRegistry,
};
use iam_security::SecurityContext;
use tracing::{debug, warn};

use super::error::DomainError;
use super::namespace;
use super::ports::RemoteAmFetcher;
use super::resolver::{NamespaceResolver, RemoteNamespace, SelfNamespace, cancellable};
use crate::config::AmListingConfig;

/// Storage-backed collaborators of the engine.
#[derive(Clone)]
pub struct Collaborators {
    pub registry: Arc<dyn ServiceRegistry>,
    pub roles: Arc<dyn RoleDirectory>,
    pub holdings: Arc<dyn HoldingsChecker>,
}

/// AM listing service.
///
/// Holds no per-request state: the principal and the cancellation scope come
/// with every call, so one instance serves all requests.
pub struct Service {
    self_namespace: String,
    registry: Arc<dyn ServiceRegistry>,
    holdings: Arc<dyn HoldingsChecker>,
    local: Arc<dyn NamespaceResolver>,
    remote: Arc<dyn NamespaceResolver>,
}

impl Service {
    #[must_use]
    pub fn new(
        config: &AmListingConfig,
        collaborators: Collaborators,
        fetcher: Arc<dyn RemoteAmFetcher>,
    ) -> Self {
        let Collaborators {
            registry,
            roles,
            holdings,
        } = collaborators;
        Self {
            self_namespace: config.self_namespace.clone(),
            local: Arc::new(SelfNamespace::new(roles, config.role_lookup_limit)),
            remote: Arc::new(RemoteNamespace::new(registry.clone(), fetcher)),
            registry,
            holdings,
        }
    }

    /// Children of `prefix`, with the holdings of `ctx.subject_id()` on
    /// complete entries.
    ///
    /// # Errors
    ///
    /// - `InvalidPermission` when a complete entry does not map to a permission
    /// - `ServiceNotFound` for an unknown service segment
    /// - any collaborator failure, tagged with its phase
    #[tracing::instrument(skip_all, fields(principal = %ctx.subject_id(), prefix = %prefix))]
    pub async fn list(
        &self,
        ctx: &SecurityContext,
        prefix: &str,
    ) -> Result<Vec<AmEntry>, DomainError> {
        let mut entries = self.list_children(ctx, prefix).await?;
        if let Some(wildcard) = namespace::wildcard_for(prefix, &entries) {
            entries.insert(0, wildcard);
        }
        self.annotate_holdings(ctx, &mut entries).await?;
        debug!(count = entries.len(), "listed namespace");
        Ok(entries)
    }

    async fn list_children(
        &self,
        ctx: &SecurityContext,
        prefix: &str,
    ) -> Result<Vec<AmEntry>, DomainError> {
        let Some((service, rest)) = prefix.split_once(PATH_SEPARATOR) else {
            debug!("listing services");
            return self.list_services(ctx, prefix).await;
        };

        let resolver = if service == self.self_namespace {
            debug!(service, "resolving self namespace");
            &self.local
        } else {
            debug!(service, "resolving remote namespace");
            &self.remote
        };
        let entries = resolver.list(ctx, service, rest).await?;
        Ok(entries.into_iter().map(|e| e.under(service)).collect())
    }

    async fn list_services(
        &self,
        ctx: &SecurityContext,
        name_prefix: &str,
    ) -> Result<Vec<AmEntry>, DomainError> {
        let services = cancellable(ctx, Phase::Registry, self.registry.list(ctx)).await?;
        let reachable = services.iter().filter(|s| {
            let name = s.permission_name.as_str();
            let ok = !name.is_empty()
                && name != self.self_namespace
                && !name.contains(PATH_SEPARATOR);
            if !ok {
                warn!(service = %s.name, permission_name = name, "skipping unreachable service");
            }
            ok
        });

        Ok(std::iter::once(self.self_namespace.as_str())
            .chain(reachable.map(|s| s.permission_name.as_str()))
            .filter(|name| name.starts_with(name_prefix))
            .map(AmEntry::branch)
            .collect())
    }

    async fn annotate_holdings(
        &self,
        ctx: &SecurityContext,
        entries: &mut [AmEntry],
    ) -> Result<(), DomainError> {
        let complete: Vec<usize> = entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.complete)
            .map(|(i, _)| i)
            .collect();
        if complete.is_empty() {
            return Ok(());
        }

        let mut permissions = Vec::with_capacity(complete.len() * 2);
        for &i in &complete {
            let (lender, owner) = namespace::paired_permissions(&entries[i].prefix)?;
            permissions.push(lender);
            permissions.push(owner);
        }

        let held = cancellable(
            ctx,
            Phase::HoldingsCheck,
            self.holdings
                .has_permissions(ctx, ctx.subject_id(), &permissions),
        )
        .await?;
        if held.len() != permissions.len() {
            return Err(DomainError::HoldingsMismatch {
                expected: permissions.len(),
                got: held.len(),
            });
        }

        for (&i, pair) in complete.iter().zip(held.chunks_exact(2)) {
            entries[i].lender = pair[0];
            entries[i].owner = pair[1];
        }
        Ok(())
    }
}
