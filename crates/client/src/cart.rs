//! Client-side view of the server cart.
//!
//! [`CartView`] makes the mobile app's implicit reload-after-mutate
//! pattern an explicit contract: every mutation invalidates the held
//! collection and refetches it before returning. The total is recomputed
//! from the current items on every call, never cached.

use verde_core::{CartItem, Price, ProductId, cart_total};

use crate::client::ShopClient;
use crate::error::ApiError;

/// The last-fetched cart contents plus the mutations that keep them fresh.
#[derive(Debug)]
pub struct CartView {
    client: ShopClient,
    items: Vec<CartItem>,
}

impl CartView {
    /// Fetch the current cart and wrap it in a view.
    ///
    /// # Errors
    ///
    /// Propagates any HTTP or decode failure unchanged.
    pub async fn load(client: ShopClient) -> Result<Self, ApiError> {
        let items = client.cart_items().await?;
        Ok(Self { client, items })
    }

    /// The items as of the last fetch.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Sum of `price * quantity` over the held items; zero when empty.
    #[must_use]
    pub fn total(&self) -> Price {
        cart_total(&self.items)
    }

    /// Refetch the cart, replacing the held collection.
    ///
    /// # Errors
    ///
    /// Propagates any HTTP or decode failure unchanged; the held items
    /// are left untouched on failure.
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        self.items = self.client.cart_items().await?;
        Ok(())
    }

    /// Add a product, then refetch.
    ///
    /// # Errors
    ///
    /// Propagates any HTTP failure unchanged.
    pub async fn add(&mut self, product_id: ProductId, quantity: u32) -> Result<(), ApiError> {
        self.client.add_to_cart(product_id, quantity).await?;
        self.refresh().await
    }

    /// Remove a product's membership, then refetch.
    ///
    /// # Errors
    ///
    /// Propagates any HTTP failure unchanged.
    pub async fn remove(&mut self, product_id: ProductId) -> Result<(), ApiError> {
        self.client.remove_from_cart(product_id).await?;
        self.refresh().await
    }
}
