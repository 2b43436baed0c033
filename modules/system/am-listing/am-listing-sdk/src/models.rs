//! Domain models for the `am_listing` module.

use serde::{Deserialize, Serialize};

use crate::permission::PATH_SEPARATOR;

/// One node of the browsable permission namespace.
///
/// When `complete` is `true` the prefix identifies a checkable permission and
/// `lender` / `owner` report what the querying principal currently holds.
/// Otherwise the entry is a branch to expand further and both flags are `false`.
///
/// This is also the element type of the JSON array a federated service returns
/// from its AM endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmEntry {
    pub prefix: String,
    /// Human-readable name of the node, when it has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default)]
    pub complete: bool,
    #[serde(default)]
    pub lender: bool,
    #[serde(default)]
    pub owner: bool,
}

impl AmEntry {
    /// Intermediate namespace node.
    pub fn branch(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::default()
        }
    }

    /// Checkable leaf with a display name; holdings are filled in later.
    pub fn leaf(prefix: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            alias: Some(alias.into()),
            complete: true,
            ..Self::default()
        }
    }

    /// Put `parent::` in front of the prefix.
    #[must_use]
    pub fn under(mut self, parent: &str) -> Self {
        self.prefix = format!("{parent}{PATH_SEPARATOR}{}", self.prefix);
        self
    }
}

/// A service registered with IAM that owns a permission sub-namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredService {
    pub name: String,
    /// First segment of every permission prefix of this service.
    pub permission_name: String,
    /// Endpoint answering `GET <am_url>?prefix=...` with a JSON array of [`AmEntry`].
    pub am_url: String,
}

/// Role as returned by a name-prefix lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSummary {
    pub id: String,
    pub name: String,
}
