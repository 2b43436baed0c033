#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Request-scoped security context shared by IAM modules.

pub mod context;

pub use context::{SecurityContext, SecurityContextBuilder};
