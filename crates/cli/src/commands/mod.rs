//! Command implementations.

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod shop;

use verde_client::{ClientConfig, ShopClient, TokenStore};

/// Build the shared API client from the environment.
pub fn client() -> Result<ShopClient, Box<dyn std::error::Error>> {
    let config = ClientConfig::from_env()?;
    let tokens = TokenStore::file(config.token_path.clone());
    Ok(ShopClient::new(&config, tokens))
}
