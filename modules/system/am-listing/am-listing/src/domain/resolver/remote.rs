use std::sync::Arc;

use am_listing_sdk::{AmEntry, Phase, ServiceRegistry};
use async_trait::async_trait;
use iam_security::SecurityContext;
use tracing::debug;

use super::{NamespaceResolver, cancellable};
use crate::domain::error::DomainError;
use crate::domain::ports::RemoteAmFetcher;

/// Resolver delegating to the AM endpoint of the service owning the namespace.
///
/// Entries come back as the service computed them; nothing is retried.
pub struct RemoteNamespace {
    registry: Arc<dyn ServiceRegistry>,
    fetcher: Arc<dyn RemoteAmFetcher>,
}

impl RemoteNamespace {
    #[must_use]
    pub fn new(registry: Arc<dyn ServiceRegistry>, fetcher: Arc<dyn RemoteAmFetcher>) -> Self {
        Self { registry, fetcher }
    }
}

#[async_trait]
impl NamespaceResolver for RemoteNamespace {
    async fn list(
        &self,
        ctx: &SecurityContext,
        service: &str,
        rest: &str,
    ) -> Result<Vec<AmEntry>, DomainError> {
        let registered = cancellable(
            ctx,
            Phase::Registry,
            self.registry.with_permission_name(ctx, service),
        )
        .await?;
        debug!(service, am_url = %registered.am_url, "delegating listing to service");

        cancellable(
            ctx,
            Phase::RemoteAm,
            self.fetcher.fetch(ctx, &registered.am_url, rest),
        )
        .await
    }
}
