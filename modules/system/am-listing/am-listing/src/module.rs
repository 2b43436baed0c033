//! AM listing module.

use std::sync::{Arc, OnceLock};

use am_listing_sdk::AmListingClient;
use anyhow::Context;
use tracing::info;

use crate::config::AmListingConfig;
use crate::domain::{AmListingLocalClient, Collaborators, Service};
use crate::infra::HttpRemoteAmClient;

/// AM listing module.
///
/// Wires the listing engine to its storage-backed collaborators and to the
/// HTTP client used for federated namespaces. Initialised once; the returned
/// client is shared by every request.
pub struct AmListingModule {
    client: OnceLock<Arc<dyn AmListingClient>>,
}

impl Default for AmListingModule {
    fn default() -> Self {
        Self {
            client: OnceLock::new(),
        }
    }
}

impl AmListingModule {
    pub const MODULE_NAME: &'static str = "am-listing";

    /// # Errors
    ///
    /// Fails on invalid configuration, when the HTTP client cannot be built,
    /// or when the module was already initialised.
    #[tracing::instrument(skip_all, fields(self_namespace = %cfg.self_namespace))]
    pub fn init(
        &self,
        cfg: &AmListingConfig,
        collaborators: Collaborators,
    ) -> anyhow::Result<Arc<dyn AmListingClient>> {
        info!("Initializing {} module", Self::MODULE_NAME);
        cfg.validate()?;

        let fetcher = HttpRemoteAmClient::new(&cfg.remote)
            .context("failed to build AM endpoint HTTP client")?;
        let svc = Arc::new(Service::new(cfg, collaborators, Arc::new(fetcher)));
        let api: Arc<dyn AmListingClient> = Arc::new(AmListingLocalClient::new(svc));

        self.client
            .set(api.clone())
            .map_err(|_| anyhow::anyhow!("{} module already initialized", Self::MODULE_NAME))?;

        info!("{} module initialized successfully", Self::MODULE_NAME);
        Ok(api)
    }

    /// Client registered by [`Self::init`], if it ran.
    #[must_use]
    pub fn client(&self) -> Option<Arc<dyn AmListingClient>> {
        self.client.get().cloned()
    }
}
