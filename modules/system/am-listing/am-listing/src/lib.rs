//! AM listing module
//!
//! Browses the federated permission namespace one level at a time. The `self`
//! namespace is answered from IAM's own action catalog and roles; any other
//! top-level segment is delegated to the AM endpoint of the registered service
//! owning it. Complete entries carry the caller's current holdings.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;
pub mod infra;
pub mod module;

pub use config::{AmListingConfig, RemoteAmConfig};
pub use domain::Collaborators;
pub use module::AmListingModule;
