//! Domain layer for the AM listing engine.

pub mod catalog;
pub mod error;
pub mod local_client;
pub mod namespace;
pub mod ports;
pub mod resolver;
pub mod service;


pub use error::DomainError;
pub use local_client::AmListingLocalClient;
pub use service::{Collaborators, Service};
