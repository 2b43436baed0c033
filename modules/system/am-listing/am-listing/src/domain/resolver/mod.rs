//! Resolvers for the subtree below a service segment.
//!
//! The engine only sees [`NamespaceResolver`]; whether a service is answered
//! locally or over HTTP is decided by which resolver it picks.

use std::future::Future;

use am_listing_sdk::{AmEntry, Phase};
use async_trait::async_trait;
use iam_security::SecurityContext;

use super::error::{DomainError, PhaseFailure};

mod remote;
mod self_namespace;

pub use remote::RemoteNamespace;
pub use self_namespace::SelfNamespace;

/// Lists the children of `service::rest`.
#[async_trait]
pub trait NamespaceResolver: Send + Sync {
    /// Entries below `service::rest`, with prefixes relative to `service`.
    async fn list(
        &self,
        ctx: &SecurityContext,
        service: &str,
        rest: &str,
    ) -> Result<Vec<AmEntry>, DomainError>;
}

/// Run a collaborator call, giving up as soon as the request is cancelled.
///
/// Port failures are reported against `phase`.
pub(crate) async fn cancellable<T, E, F>(
    ctx: &SecurityContext,
    phase: Phase,
    call: F,
) -> Result<T, DomainError>
where
    F: Future<Output = Result<T, E>>,
    E: PhaseFailure,
{
    tokio::select! {
        biased;
        () = ctx.cancellation_token().cancelled() => {
            tracing::debug!(%phase, "request cancelled");
            Err(DomainError::Cancelled { phase })
        }
        result = call => result.map_err(|e| e.in_phase(phase)),
    }
}
