//! Domain errors for the AM listing engine.

use am_listing_sdk::{AmListingError, Phase, PermissionError};

/// Internal domain errors.
#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    #[error("invalid permission: {0}")]
    InvalidPermission(#[from] PermissionError),

    #[error("unknown service '{name}'")]
    ServiceNotFound { name: String },

    #[error("{phase} failed: {message}")]
    Adapter { phase: Phase, message: String },

    #[error("invalid AM url '{url}': {reason}")]
    InvalidAmUrl { url: String, reason: String },

    #[error("AM endpoint {url} answered with status {status}")]
    RemoteStatus { url: String, status: u16 },

    #[error("holdings checker returned {got} answers for {expected} permissions")]
    HoldingsMismatch { expected: usize, got: usize },

    #[error("request cancelled during {phase}")]
    Cancelled { phase: Phase },

    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn adapter(phase: Phase, message: impl Into<String>) -> Self {
        Self::Adapter {
            phase,
            message: message.into(),
        }
    }
}

/// Failure of a collaborator call, attributed to the phase that issued it.
pub(crate) trait PhaseFailure {
    fn in_phase(self, phase: Phase) -> DomainError;
}

impl PhaseFailure for AmListingError {
    fn in_phase(self, phase: Phase) -> DomainError {
        match self {
            Self::ServiceNotFound { name } => DomainError::ServiceNotFound { name },
            Self::Cancelled { .. } => DomainError::Cancelled { phase },
            Self::Adapter { message, .. } => DomainError::Adapter { phase, message },
            other => DomainError::adapter(phase, other.to_string()),
        }
    }
}

/// Engine-side ports already report precise domain errors.
impl PhaseFailure for DomainError {
    fn in_phase(self, _phase: Phase) -> DomainError {
        self
    }
}

impl From<AmListingError> for DomainError {
    fn from(e: AmListingError) -> Self {
        match e {
            AmListingError::Validation(e) => Self::InvalidPermission(e),
            AmListingError::ServiceNotFound { name } => Self::ServiceNotFound { name },
            AmListingError::Adapter { phase, message } => Self::Adapter { phase, message },
            AmListingError::Cancelled { phase } => Self::Cancelled { phase },
            AmListingError::Internal(msg) => Self::Internal(msg),
        }
    }
}

impl From<DomainError> for AmListingError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidPermission(e) => Self::Validation(e),
            DomainError::ServiceNotFound { name } => Self::ServiceNotFound { name },
            DomainError::Adapter { phase, message } => Self::Adapter { phase, message },
            e @ (DomainError::InvalidAmUrl { .. } | DomainError::RemoteStatus { .. }) => {
                Self::adapter(Phase::RemoteAm, e.to_string())
            }
            e @ DomainError::HoldingsMismatch { .. } => {
                Self::adapter(Phase::HoldingsCheck, e.to_string())
            }
            DomainError::Cancelled { phase } => Self::Cancelled { phase },
            DomainError::Internal(msg) => Self::Internal(msg),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn remote_failures_surface_as_remote_am_adapter_errors() {
        let err: AmListingError = DomainError::RemoteStatus {
            url: "http://maestro/am".to_owned(),
            status: 503,
        }
        .into();

        assert_eq!(
            err,
            AmListingError::adapter(
                Phase::RemoteAm,
                "AM endpoint http://maestro/am answered with status 503"
            )
        );
    }

    #[test]
    fn service_not_found_survives_the_round_trip() {
        let domain: DomainError = AmListingError::service_not_found("maestro").into();
        let sdk: AmListingError = domain.into();

        assert_eq!(sdk, AmListingError::service_not_found("maestro"));
    }

    #[test]
    fn port_failures_are_attributed_to_the_calling_phase() {
        let err = AmListingError::Internal("db down".to_owned()).in_phase(Phase::RoleLookup);
        assert!(matches!(
            err,
            DomainError::Adapter { phase: Phase::RoleLookup, ref message } if message == "internal error: db down"
        ));

        let err = AmListingError::adapter(Phase::Registry, "timeout").in_phase(Phase::HoldingsCheck);
        assert!(matches!(
            err,
            DomainError::Adapter { phase: Phase::HoldingsCheck, ref message } if message == "timeout"
        ));

        let err = AmListingError::from(PermissionError::Incomplete { parts: 2 })
            .in_phase(Phase::HoldingsCheck);
        assert!(matches!(
            err,
            DomainError::Adapter {
                phase: Phase::HoldingsCheck,
                ..
            }
        ));
    }

    #[test]
    fn not_found_and_cancellation_keep_their_kind() {
        assert!(matches!(
            AmListingError::service_not_found("maestro").in_phase(Phase::Registry),
            DomainError::ServiceNotFound { ref name } if name == "maestro"
        ));
        assert!(matches!(
            AmListingError::Cancelled {
                phase: Phase::Registry
            }
            .in_phase(Phase::RoleLookup),
            DomainError::Cancelled {
                phase: Phase::RoleLookup
            }
        ));
    }

    #[test]
    fn domain_errors_pass_through_unchanged() {
        let err = DomainError::RemoteStatus {
            url: "http://maestro/am".to_owned(),
            status: 502,
        }
        .in_phase(Phase::RemoteAm);
        assert!(matches!(err, DomainError::RemoteStatus { status: 502, .. }));
    }

    #[test]
    fn validation_errors_stay_validation_errors() {
        let err: AmListingError =
            DomainError::from(PermissionError::Incomplete { parts: 3 }).into();
        assert!(matches!(err, AmListingError::Validation(_)));
    }
}
