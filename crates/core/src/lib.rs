//! Verde Core - Shared types library.
//!
//! This crate provides common types used across all Verde Market components:
//! - `client` - Typed API client for the shop backend
//! - `cli` - Command-line shopping client
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no credential storage. This keeps it lightweight and allows it
//! to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and statuses
//! - [`models`] - Entity records exchanged with the backend
//! - [`cart`] - Cart total aggregation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod models;
pub mod types;

pub use cart::cart_total;
pub use models::*;
pub use types::*;
