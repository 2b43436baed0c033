#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! AM Listing SDK
//!
//! This crate provides the public API for the `am_listing` module:
//!
//! - [`Permission`], [`OwnershipLevel`], [`ResourceHierarchy`] - Canonical permission grammar
//! - [`AmEntry`] - One node of the browsable permission namespace
//! - [`AmListingClient`] - Public API trait for consumers
//! - [`ServiceRegistry`], [`RoleDirectory`], [`HoldingsChecker`] - Ports the engine consumes
//! - [`AmListingError`], [`PermissionError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use am_listing_sdk::AmListingClient;
//!
//! let entries = am.list(&ctx, "self::EditRole::").await?;
//! for entry in entries.iter().filter(|e| e.complete) {
//!     println!("{} lender={} owner={}", entry.prefix, entry.lender, entry.owner);
//! }
//! ```

pub mod api;
pub mod error;
pub mod models;
pub mod permission;
pub mod ports;

// Re-export main types at crate root
pub use api::AmListingClient;
pub use error::{AmListingError, Phase, PermissionError};
pub use models::{AmEntry, RegisteredService, RoleSummary};
pub use permission::{
    Action, OwnershipLevel, PATH_SEPARATOR, Permission, ResourceHierarchy, Service, WILDCARD,
};
pub use ports::{HoldingsChecker, RoleDirectory, ServiceRegistry};
