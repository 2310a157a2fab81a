//! `verde checkout` - create an order from the cart and pay it.

use verde_client::CheckoutError;
use verde_core::PaymentMethod;

use super::client;

pub async fn run(method: PaymentMethod) -> Result<(), Box<dyn std::error::Error>> {
    match client()?.checkout(method).await {
        Ok(receipt) => {
            println!(
                "Order #{} placed: {} ({} items), paid {} by {}.",
                receipt.order.id,
                receipt.order.status,
                receipt.order.products.len(),
                receipt.payment.amount,
                receipt.payment.payment_method
            );
            Ok(())
        }
        // The unpaid order must stay visible to the user, so this is not
        // reported as a bare failure.
        Err(CheckoutError::OrderCreatedNoPayment { order, source }) => {
            println!(
                "Order #{} was created but the payment did not go through ({source}).",
                order.id
            );
            println!("The order is waiting unpaid; pay it again from your order history.");
            Err(source.into())
        }
        Err(err) => Err(err.into()),
    }
}
