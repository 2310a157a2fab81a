//! Two-phase checkout: order creation, payment body, and failure states.

#![allow(clippy::unwrap_used)]

use httpmock::prelude::*;
use serde_json::json;
use verde_client::CheckoutError;
use verde_core::{OrderId, OrderStatus, PaymentMethod};
use verde_integration_tests::{TestContext, order_json, payment_json};

#[tokio::test]
async fn checkout_pays_the_server_computed_total() {
    let ctx = TestContext::authenticated("tok").await;
    let order = order_json(12, 42.50);

    let create_order = ctx.server.mock(|when, then| {
        when.method(POST).path("/api/v1/orders/create");
        then.status(201).json_body(order.clone());
    });
    // The client must forward the order id and total verbatim, card = 1
    let create_payment = ctx.server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/payments/create")
            .json_body(json!({"order_id": 12, "amount": 42.5, "payment_method": 1}));
        then.status(201).json_body(payment_json(3, &order, 1));
    });

    let receipt = ctx.client.checkout(PaymentMethod::Card).await.unwrap();

    create_order.assert();
    create_payment.assert();
    assert_eq!(receipt.order.id, OrderId::new(12));
    assert_eq!(receipt.order.status, OrderStatus::Pending);
    assert_eq!(receipt.payment.amount, receipt.order.total_price);
    assert_eq!(receipt.payment.payment_method, PaymentMethod::Card);
}

#[tokio::test]
async fn cash_checkout_sends_method_code_zero() {
    let ctx = TestContext::authenticated("tok").await;
    let order = order_json(4, 10.00);

    ctx.server.mock(|when, then| {
        when.method(POST).path("/api/v1/orders/create");
        then.status(201).json_body(order.clone());
    });
    let create_payment = ctx.server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/payments/create")
            .json_body(json!({"order_id": 4, "amount": 10.0, "payment_method": 0}));
        then.status(201).json_body(payment_json(9, &order, 0));
    });

    ctx.client.checkout(PaymentMethod::Cash).await.unwrap();

    create_payment.assert();
}

#[tokio::test]
async fn failed_order_creation_makes_no_payment_call() {
    let ctx = TestContext::authenticated("tok").await;
    let create_order = ctx.server.mock(|when, then| {
        when.method(POST).path("/api/v1/orders/create");
        then.status(500).body("no cart");
    });
    let create_payment = ctx.server.mock(|when, then| {
        when.method(POST).path("/api/v1/payments/create");
        then.status(201);
    });

    let err = ctx.client.checkout(PaymentMethod::Card).await.unwrap_err();

    assert!(matches!(err, CheckoutError::OrderNotCreated(_)));
    create_order.assert();
    assert_eq!(create_payment.hits(), 0);
}

#[tokio::test]
async fn failed_payment_surfaces_the_unpaid_order_without_retry() {
    let ctx = TestContext::authenticated("tok").await;
    let create_order = ctx.server.mock(|when, then| {
        when.method(POST).path("/api/v1/orders/create");
        then.status(201).json_body(order_json(12, 42.50));
    });
    let create_payment = ctx.server.mock(|when, then| {
        when.method(POST).path("/api/v1/payments/create");
        then.status(500).body("gateway unavailable");
    });

    let err = ctx.client.checkout(PaymentMethod::Card).await.unwrap_err();

    match err {
        CheckoutError::OrderCreatedNoPayment { order, source } => {
            // The order reference is not lost
            assert_eq!(order.id, OrderId::new(12));
            assert!(source.is_status());
        }
        other => panic!("expected OrderCreatedNoPayment, got {other}"),
    }

    // Exactly one attempt each: no automatic retry or compensation
    assert_eq!(create_order.hits(), 1);
    assert_eq!(create_payment.hits(), 1);
}
