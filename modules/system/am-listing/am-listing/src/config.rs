//! Configuration for the AM listing module.
//!
//! Values are layered: built-in defaults, then an optional YAML file, then
//! environment variables prefixed with `AM_LISTING__` (nested keys separated
//! by `__`, e.g. `AM_LISTING__REMOTE__FORWARD_BEARER_TOKEN=false`).

use std::path::Path;

use anyhow::{Context, bail};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

use am_listing_sdk::PATH_SEPARATOR;

/// Environment prefix for overrides.
pub const ENV_PREFIX: &str = "AM_LISTING__";

/// Module configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AmListingConfig {
    /// Top-level segment answered locally from the action catalog.
    pub self_namespace: String,

    /// Maximum number of roles returned when drilling into a role action.
    pub role_lookup_limit: usize,

    /// Outbound calls to federated AM endpoints.
    pub remote: RemoteAmConfig,
}

impl Default for AmListingConfig {
    fn default() -> Self {
        Self {
            self_namespace: "self".to_owned(),
            role_lookup_limit: 10,
            remote: RemoteAmConfig::default(),
        }
    }
}

/// HTTP client settings for federated AM endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RemoteAmConfig {
    pub user_agent: String,

    /// Pass the caller's bearer token on to the remote service.
    pub forward_bearer_token: bool,
}

impl Default for RemoteAmConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("am-listing/", env!("CARGO_PKG_VERSION")).to_owned(),
            forward_bearer_token: true,
        }
    }
}

impl AmListingConfig {
    /// Layered figment: defaults, then `path` when given, then the environment.
    #[must_use]
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load and validate configuration.
    ///
    /// # Errors
    ///
    /// Fails when a source cannot be parsed or the result does not validate.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        Self::from_figment(&Self::figment(path))
    }

    /// Extract and validate configuration from an already assembled figment.
    ///
    /// # Errors
    ///
    /// Fails when extraction or validation fails.
    pub fn from_figment(figment: &Figment) -> anyhow::Result<Self> {
        let config: Self = figment
            .extract()
            .context("failed to read am-listing configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Fails when the self namespace is empty or contains the path separator,
    /// or when the role lookup limit is zero.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.self_namespace.is_empty() {
            bail!("self_namespace must not be empty");
        }
        if self.self_namespace.contains(PATH_SEPARATOR) {
            bail!(
                "self_namespace '{}' must be a single segment",
                self.self_namespace
            );
        }
        if self.role_lookup_limit == 0 {
            bail!("role_lookup_limit must be positive");
        }
        Ok(())
    }
}
