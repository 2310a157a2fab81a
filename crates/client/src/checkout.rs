//! Two-phase checkout workflow.
//!
//! Checkout is sequential, not atomic: the order is created first, then a
//! payment referencing it. There is no compensating action - if the
//! payment call fails the order already exists server-side with nothing
//! settling it. That state is surfaced as
//! [`CheckoutError::OrderCreatedNoPayment`] carrying the order reference,
//! so callers never lose track of what was created. No step is retried.

use thiserror::Error;
use tracing::{instrument, warn};
use verde_core::{Order, Payment, PaymentMethod};

use crate::client::ShopClient;
use crate::error::ApiError;

/// A completed checkout: the order and the payment settling it.
#[derive(Debug, Clone)]
pub struct CheckoutReceipt {
    pub order: Order,
    pub payment: Payment,
}

/// Failure states of the two-phase checkout.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Step 1 failed; nothing was created.
    #[error("order was not created: {0}")]
    OrderNotCreated(#[source] ApiError),

    /// Step 1 succeeded but step 2 failed: an order exists with no
    /// payment. The order is carried so the caller keeps the reference.
    #[error("order {id} was created but payment failed: {source}", id = .order.id)]
    OrderCreatedNoPayment {
        /// The order left without a payment.
        order: Box<Order>,
        /// The payment failure.
        source: ApiError,
    },
}

impl ShopClient {
    /// Create an order from the current cart, then pay it.
    ///
    /// The payment amount is the order's server-computed `total_price`;
    /// the payment call is only issued after order creation resolves.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::OrderNotCreated`] if step 1 fails,
    /// [`CheckoutError::OrderCreatedNoPayment`] if step 2 fails.
    #[instrument(skip(self))]
    pub async fn checkout(
        &self,
        payment_method: PaymentMethod,
    ) -> Result<CheckoutReceipt, CheckoutError> {
        let order = self
            .create_order()
            .await
            .map_err(CheckoutError::OrderNotCreated)?;

        match self
            .create_payment(order.id, order.total_price, payment_method)
            .await
        {
            Ok(payment) => Ok(CheckoutReceipt { order, payment }),
            Err(source) => {
                warn!(
                    order = %order.id,
                    error = %source,
                    "payment failed after order creation, order left unpaid"
                );
                Err(CheckoutError::OrderCreatedNoPayment {
                    order: Box::new(order),
                    source,
                })
            }
        }
    }
}
