//! Integration tests for the Verde Market client.
//!
//! Every test runs the real [`ShopClient`] against an `httpmock` server
//! standing in for the backend, so the wire shapes asserted here are the
//! exact bytes the client sends and accepts.
//!
//! # Test Categories
//!
//! - `auth` - Credential persistence and the Authorization header contract
//! - `addresses` - Address create/list round trip
//! - `cart` - Cart listing, mutation, and refetch-after-mutate
//! - `checkout` - Two-phase order+payment workflow and its failure states

#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use httpmock::MockServer;
use serde_json::{Value, json};
use url::Url;
use verde_client::{ClientConfig, ShopClient, TokenStore};

/// A mock backend plus a client pointed at it.
pub struct TestContext {
    pub server: MockServer,
    pub client: ShopClient,
}

impl TestContext {
    /// Start a mock server and wire a client with a volatile token store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_token_store(TokenStore::in_memory())
    }

    /// Same context but with a pre-seeded token.
    pub async fn authenticated(token: &str) -> Self {
        let ctx = Self::new();
        ctx.client.token_store().set(token).await.unwrap();
        ctx
    }

    /// A context whose client uses the given token store.
    #[must_use]
    pub fn with_token_store(tokens: TokenStore) -> Self {
        let server = MockServer::start();
        let base_url = Url::parse(&server.url("/api/v1")).unwrap();
        let config = ClientConfig::new(base_url, PathBuf::from("unused-in-tests"));
        let client = ShopClient::new(&config, tokens);
        Self { server, client }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Backend-shaped category fixture.
#[must_use]
pub fn category_json() -> Value {
    json!({
        "id": 1,
        "name": "Groceries",
        "created_at": "2026-01-10T09:00:00Z",
        "updated_at": "2026-01-10T09:00:00Z"
    })
}

/// Backend-shaped product fixture.
#[must_use]
pub fn product_json(id: i32, price: f64) -> Value {
    json!({
        "id": id,
        "name": format!("Product {id}"),
        "description": "A test product.",
        "price": price,
        "photo_url": format!("https://cdn.example.com/{id}.jpg"),
        "category": category_json(),
        "created_at": "2026-01-11T10:30:00Z",
        "updated_at": "2026-01-11T10:30:00Z"
    })
}

/// Backend-shaped cart item fixture.
#[must_use]
pub fn cart_item_json(product_id: i32, price: f64, quantity: u32) -> Value {
    json!({
        "product": product_json(product_id, price),
        "quantity": quantity
    })
}

/// Backend-shaped user fixture.
#[must_use]
pub fn user_json() -> Value {
    json!({
        "id": 1,
        "email": "jo@example.com",
        "first_name": "Jo",
        "last_name": "Woods"
    })
}

/// Backend-shaped order fixture with the given server-computed total.
#[must_use]
pub fn order_json(id: i32, total_price: f64) -> Value {
    json!({
        "id": id,
        "purchaser": user_json(),
        "total_price": total_price,
        "status": 0,
        "products": [product_json(7, total_price)],
        "created_at": "2026-02-01T12:00:00Z",
        "updated_at": "2026-02-01T12:00:00Z"
    })
}

/// Backend-shaped payment fixture referencing `order`.
#[must_use]
pub fn payment_json(id: i32, order: &Value, method: u8) -> Value {
    json!({
        "id": id,
        "order": order,
        "amount": order["total_price"],
        "payment_method": method,
        "created_at": "2026-02-01T12:00:05Z",
        "updated_at": "2026-02-01T12:00:05Z"
    })
}

/// Backend-shaped address fixture.
#[must_use]
pub fn address_json(id: i32, city: &str, street_name: &str, zip_code: &str) -> Value {
    json!({
        "id": id,
        "city": city,
        "street_name": street_name,
        "zip_code": zip_code,
        "created_at": "2026-02-01T12:00:00Z",
        "updated_at": "2026-02-01T12:00:00Z"
    })
}
