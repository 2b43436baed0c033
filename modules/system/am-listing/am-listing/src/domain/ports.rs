use am_listing_sdk::AmEntry;
use async_trait::async_trait;
use iam_security::SecurityContext;

use super::error::DomainError;

/// Output port for the AM endpoint of a federated service.
#[async_trait]
pub trait RemoteAmFetcher: Send + Sync {
    /// Entries the service at `am_url` lists for `prefix`, relative to the
    /// service's own namespace.
    async fn fetch(
        &self,
        ctx: &SecurityContext,
        am_url: &str,
        prefix: &str,
    ) -> Result<Vec<AmEntry>, DomainError>;
}
