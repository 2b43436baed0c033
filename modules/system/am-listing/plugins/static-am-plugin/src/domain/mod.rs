//! Domain layer for the static AM plugin.

mod client;
pub mod service;

pub use service::Service;
