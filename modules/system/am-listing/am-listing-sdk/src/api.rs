//! Public API trait for the AM listing engine.

use async_trait::async_trait;
use iam_security::SecurityContext;

use crate::error::AmListingError;
use crate::models::AmEntry;

/// Incremental browse over the permission namespace.
///
/// ```ignore
/// let am: Arc<dyn AmListingClient> = AmListingModule::init(cfg, collaborators)?;
///
/// // Services
/// let roots = am.list(&ctx, "").await?;
/// // Actions of IAM itself
/// let actions = am.list(&ctx, "self::").await?;
/// ```
#[async_trait]
pub trait AmListingClient: Send + Sync {
    /// List the children of `prefix`, one namespace level down.
    ///
    /// Complete entries carry the holdings of `ctx.subject_id()`. The call
    /// honours `ctx.cancellation_token()`.
    ///
    /// # Errors
    ///
    /// - `Validation` when a complete entry does not map to a valid permission
    /// - `ServiceNotFound` for an unknown service segment
    /// - `Adapter` when a collaborator fails
    /// - `Cancelled` when the request was cancelled
    async fn list(
        &self,
        ctx: &SecurityContext,
        prefix: &str,
    ) -> Result<Vec<AmEntry>, AmListingError>;
}
