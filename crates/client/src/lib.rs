//! `storefront-client`
//!
//! **Responsibility:** data access for the storefront.
//!
//! This crate provides:
//! - The `CatalogGateway` seam over the backend's `/products` REST resource
//! - An HTTP implementation (`reqwest`) and an in-memory double
//! - Sentinel helpers collapsing typed failures to empty/absent/false
//! - Client configuration and the admin gate
//!
//! The backend stays the authority on product data; nothing here caches.

pub mod config;
pub mod dto;
pub mod error;
pub mod gateway;
pub mod http;
pub mod memory;
pub mod sentinel;
pub mod session;

pub use config::{AuthMode, ClientConfig, ConfigError};
pub use error::{GatewayError, GatewayResult};
pub use gateway::CatalogGateway;
pub use http::HttpCatalogGateway;
pub use memory::{GatewayCall, InMemoryGateway};
pub use session::{AdminGate, AdminSession, BearerGate, Credential, GateError, StaticCodeGate};
