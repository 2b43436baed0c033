//! Static AM plugin module.

use std::sync::{Arc, OnceLock};

use tracing::info;

use crate::config::StaticAmPluginConfig;
use crate::domain::Service;

/// Static AM plugin module.
///
/// The initialised [`Service`] implements every collaborator port of the
/// listing engine.
pub struct StaticAmPlugin {
    service: OnceLock<Arc<Service>>,
}

impl Default for StaticAmPlugin {
    fn default() -> Self {
        Self {
            service: OnceLock::new(),
        }
    }
}

impl StaticAmPlugin {
    /// # Errors
    ///
    /// Fails when a configured grant is not a valid permission or the plugin
    /// was already initialised.
    pub fn init(&self, cfg: StaticAmPluginConfig) -> anyhow::Result<Arc<Service>> {
        info!("Initializing static_am_plugin");
        info!(
            services = cfg.services.len(),
            roles = cfg.roles.len(),
            principals = cfg.grants.len(),
            "Loaded plugin configuration"
        );

        let service = Arc::new(Service::new(cfg)?);
        self.service
            .set(service.clone())
            .map_err(|_| anyhow::anyhow!("static_am_plugin already initialized"))?;

        info!("static_am_plugin initialized successfully");
        Ok(service)
    }
}
