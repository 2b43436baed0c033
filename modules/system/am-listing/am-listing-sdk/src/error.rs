//! Error types for the `am_listing` module.

use std::fmt;

use thiserror::Error;

/// Structural errors of a permission string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PermissionError {
    #[error(
        "incomplete permission: found {parts} part(s), expected format: \
         OwnershipLevel::Action::Service::{{ResourceHierarchy}}"
    )]
    Incomplete { parts: usize },

    #[error("ownership level must be RO or RL, got '{token}'")]
    InvalidOwnershipLevel { token: String },

    #[error("permission part {index} is empty")]
    EmptyPart { index: usize },
}

/// Collaborator call during which a listing failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Registry,
    RoleLookup,
    HoldingsCheck,
    RemoteAm,
}

impl Phase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Registry => "registry",
            Self::RoleLookup => "role_lookup",
            Self::HoldingsCheck => "holdings_check",
            Self::RemoteAm => "remote_am",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by the listing API and by the ports it consumes.
///
/// Every failure is per request; nothing here is retried by the engine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AmListingError {
    /// A derived or supplied permission string is malformed.
    #[error("invalid permission: {0}")]
    Validation(#[from] PermissionError),

    /// No registered service uses this permission name.
    #[error("unknown service '{name}'")]
    ServiceNotFound { name: String },

    /// A collaborator failed.
    #[error("{phase} failed: {message}")]
    Adapter { phase: Phase, message: String },

    /// The request was cancelled while waiting on a collaborator.
    #[error("request cancelled during {phase}")]
    Cancelled { phase: Phase },

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AmListingError {
    pub fn adapter(phase: Phase, message: impl Into<String>) -> Self {
        Self::Adapter {
            phase,
            message: message.into(),
        }
    }

    pub fn service_not_found(name: impl Into<String>) -> Self {
        Self::ServiceNotFound { name: name.into() }
    }
}
