//! Verde Client - Typed REST client for the Verde Market backend.
//!
//! # Architecture
//!
//! - One shared [`ShopClient`] over `reqwest`, configured with a single
//!   base endpoint - the backend is the source of truth, NO local sync
//! - A persisted auth token is read from the [`TokenStore`] before every
//!   request and attached as `Authorization: JWT <token>` when present
//! - Each service method issues exactly one HTTP call and deserializes the
//!   body into a `verde-core` entity; no retries, no caching, no client-side
//!   validation beyond the typed arguments
//!
//! # Example
//!
//! ```rust,ignore
//! use verde_client::{ClientConfig, ShopClient, TokenStore};
//! use verde_core::{Email, PaymentMethod};
//!
//! let config = ClientConfig::from_env()?;
//! let client = ShopClient::new(&config, TokenStore::file(config.token_path.clone()));
//!
//! // Log in; the returned token is persisted for later requests
//! let session = client.login(&Email::parse("jo@example.com")?, "hunter2!").await?;
//!
//! // Browse and shop
//! let products = client.products().await?;
//! client.add_to_cart(products[0].id, 2).await?;
//!
//! // Two-phase checkout: create the order, then pay it
//! let receipt = client.checkout(PaymentMethod::Card).await?;
//! println!("order {} paid", receipt.order.id);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod cart;
mod checkout;
mod client;
pub mod config;
mod error;
mod services;
mod token;

pub use cart::CartView;
pub use checkout::{CheckoutError, CheckoutReceipt};
pub use client::ShopClient;
pub use config::{ClientConfig, ConfigError};
pub use error::ApiError;
pub use services::auth::AuthSession;
pub use token::{TokenStore, TokenStoreError};
