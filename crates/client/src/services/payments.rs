//! Payment creation.

use serde::Serialize;
use tracing::instrument;
use verde_core::{OrderId, Payment, PaymentMethod, Price};

use crate::client::ShopClient;
use crate::error::ApiError;

#[derive(Serialize)]
struct CreatePaymentRequest {
    order_id: OrderId,
    amount: Price,
    payment_method: PaymentMethod,
}

impl ShopClient {
    /// Create a payment settling `order_id` for `amount`.
    ///
    /// One payment per order in this flow; the amount should equal the
    /// order's server-computed `total_price`.
    ///
    /// # Errors
    ///
    /// Propagates any HTTP or decode failure unchanged.
    #[instrument(skip(self))]
    pub async fn create_payment(
        &self,
        order_id: OrderId,
        amount: Price,
        payment_method: PaymentMethod,
    ) -> Result<Payment, ApiError> {
        self.post_json(
            "/payments/create",
            &CreatePaymentRequest {
                order_id,
                amount,
                payment_method,
            },
        )
        .await
    }
}
