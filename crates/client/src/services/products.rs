//! Product browsing.

use tracing::instrument;
use verde_core::Product;

use crate::client::ShopClient;
use crate::error::ApiError;

impl ShopClient {
    /// List every product in the catalog.
    ///
    /// # Errors
    ///
    /// Propagates any HTTP or decode failure unchanged.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_json("/products/").await
    }
}
