//! Order creation.

use tracing::instrument;
use verde_core::Order;

use crate::client::ShopClient;
use crate::error::ApiError;

impl ShopClient {
    /// Create an order from the current server-side cart state.
    ///
    /// The request carries no body: the backend derives the line items and
    /// total from the authenticated user's cart. That coupling is a backend
    /// contract assumption, not something this client can verify.
    ///
    /// # Errors
    ///
    /// Propagates any HTTP or decode failure unchanged.
    #[instrument(skip(self))]
    pub async fn create_order(&self) -> Result<Order, ApiError> {
        self.post_empty("/orders/create").await
    }
}
