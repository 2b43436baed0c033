#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static AM Plugin
//!
//! In-memory service registry, role directory and holdings checker for the
//! `am_listing` module, for development and testing.
//!
//! A principal holds a permission when one of its configured grants covers
//! it: `RO` covers both levels, `RL` only `RL`; action and service must match;
//! a `*` segment matches one segment and a trailing `*` any non-empty rest.
//!
//! ## Configuration
//!
//! ```yaml
//! modules:
//!   static_am_plugin:
//!     config:
//!       services:
//!         - name: Maestro
//!           permission_name: maestro
//!           am_url: http://maestro.local/am
//!       roles:
//!         - id: r-1
//!           name: Admins
//!       grants:
//!         11111111-1111-1111-1111-111111111111:
//!           - RO::EditRole::self::*
//! ```

pub mod config;
pub mod domain;
pub mod module;

pub use module::StaticAmPlugin;
