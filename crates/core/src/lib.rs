//! `storefront-core` — shared catalog building blocks.
//!
//! Identifiers and the domain error model (no IO, no HTTP).

pub mod error;
pub mod id;

pub use error::DomainError;
pub use id::ProductId;
