//! Shared types for the CoinsPaid API v2
//!
//! This crate provides the core type definitions used across the client
//! crates. It has minimal dependencies and can be used independently.
//!
//! # Key Types
//!
//! - [`Endpoint`] - Path and expected success status of an API operation
//! - [`Params`] - Insertion-ordered request parameters and their canonical JSON
//! - [`Request`] - An endpoint paired with its parameters
//! - [`ErrorMap`] - Field to message map decoded from error responses
//! - [`Currency`], [`Account`], [`ExchangeQuote`], ... - Response payloads

pub mod endpoint;
pub mod enums;
pub mod errors;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use endpoint::*;
pub use enums::*;
pub use errors::*;
pub use models::*;
pub use params::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
