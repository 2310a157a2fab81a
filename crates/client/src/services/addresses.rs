//! Delivery addresses of the authenticated user.

use serde::Serialize;
use tracing::instrument;
use verde_core::Address;

use crate::client::ShopClient;
use crate::error::ApiError;

#[derive(Serialize)]
struct CreateAddressRequest<'a> {
    city: &'a str,
    street_name: &'a str,
    zip_code: &'a str,
}

impl ShopClient {
    /// List the user's delivery addresses.
    ///
    /// # Errors
    ///
    /// Propagates any HTTP or decode failure unchanged.
    #[instrument(skip(self))]
    pub async fn addresses(&self) -> Result<Vec<Address>, ApiError> {
        self.get_json("/addresses/").await
    }

    /// Create a new delivery address; id and timestamps are assigned
    /// server-side.
    ///
    /// # Errors
    ///
    /// Propagates any HTTP or decode failure unchanged.
    #[instrument(skip(self))]
    pub async fn create_address(
        &self,
        city: &str,
        street_name: &str,
        zip_code: &str,
    ) -> Result<Address, ApiError> {
        self.post_json(
            "/addresses/create",
            &CreateAddressRequest {
                city,
                street_name,
                zip_code,
            },
        )
        .await
    }
}
