//! Cart membership operations.
//!
//! The cart itself lives server-side, one per authenticated user. Removing
//! an item deletes the membership record, never the product.

use serde::Serialize;
use tracing::instrument;
use verde_core::{CartItem, ProductId};

use crate::client::ShopClient;
use crate::error::ApiError;

#[derive(Serialize)]
struct AddToCartRequest {
    product_id: ProductId,
    quantity: u32,
}

impl ShopClient {
    /// List the current cart contents.
    ///
    /// # Errors
    ///
    /// Propagates any HTTP or decode failure unchanged.
    #[instrument(skip(self))]
    pub async fn cart_items(&self) -> Result<Vec<CartItem>, ApiError> {
        self.get_json("/cart/").await
    }

    /// Add `quantity` of a product to the cart.
    ///
    /// # Errors
    ///
    /// Propagates any HTTP failure unchanged.
    #[instrument(skip(self))]
    pub async fn add_to_cart(&self, product_id: ProductId, quantity: u32) -> Result<(), ApiError> {
        self.post_unit(
            "/cart/add",
            &AddToCartRequest {
                product_id,
                quantity,
            },
        )
        .await
    }

    /// Remove a product's membership from the cart.
    ///
    /// # Errors
    ///
    /// Propagates any HTTP failure unchanged.
    #[instrument(skip(self))]
    pub async fn remove_from_cart(&self, product_id: ProductId) -> Result<(), ApiError> {
        self.delete(&format!("/cart/remove/{product_id}")).await
    }
}
