//! Per-resource service methods on [`ShopClient`](crate::ShopClient).
//!
//! Each method is a thin typed wrapper: exactly one HTTP call to a fixed
//! path, response body deserialized into a `verde-core` entity. Failures
//! propagate unchanged; nothing here retries, caches, or validates beyond
//! the argument types.

pub mod addresses;
pub mod auth;
pub mod cart;
pub mod orders;
pub mod payments;
pub mod products;
