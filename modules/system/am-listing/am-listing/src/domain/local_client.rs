//! Local (in-process) client for the AM listing engine.

use std::sync::Arc;

use am_listing_sdk::{AmEntry, AmListingClient, AmListingError};
use async_trait::async_trait;
use iam_security::SecurityContext;

use super::{DomainError, Service};

/// Local client wrapping the service.
pub struct AmListingLocalClient {
    svc: Arc<Service>,
}

impl AmListingLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }
}

fn log_and_convert(op: &str, e: DomainError) -> AmListingError {
    tracing::error!(operation = op, error = %e, "am_listing call failed");
    e.into()
}

#[async_trait]
impl AmListingClient for AmListingLocalClient {
    async fn list(
        &self,
        ctx: &SecurityContext,
        prefix: &str,
    ) -> Result<Vec<AmEntry>, AmListingError> {
        self.svc
            .list(ctx, prefix)
            .await
            .map_err(|e| log_and_convert("list", e))
    }
}
