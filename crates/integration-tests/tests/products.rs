//! Product catalog listing.

#![allow(clippy::unwrap_used)]

use httpmock::prelude::*;
use serde_json::json;
use verde_core::{CategoryId, ProductId};
use verde_integration_tests::{TestContext, product_json};

#[tokio::test]
async fn products_decode_into_typed_entities() {
    let ctx = TestContext::authenticated("tok").await;
    ctx.server.mock(|when, then| {
        when.method(GET).path("/api/v1/products/");
        then.status(200)
            .json_body(json!([product_json(7, 12.50), product_json(9, 3.00)]));
    });

    let products = ctx.client.products().await.unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, ProductId::new(7));
    assert_eq!(products[0].price.to_string(), "12.50");
    assert_eq!(products[0].category.id, CategoryId::new(1));
    assert_eq!(products[1].name, "Product 9");
}

#[tokio::test]
async fn non_success_status_is_surfaced_unchanged() {
    let ctx = TestContext::authenticated("tok").await;
    ctx.server.mock(|when, then| {
        when.method(GET).path("/api/v1/products/");
        then.status(503).body("maintenance");
    });

    let err = ctx.client.products().await.unwrap_err();
    assert!(err.is_status());
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let ctx = TestContext::authenticated("tok").await;
    ctx.server.mock(|when, then| {
        when.method(GET).path("/api/v1/products/");
        then.status(200).body("not json");
    });

    let err = ctx.client.products().await.unwrap_err();
    assert!(matches!(err, verde_client::ApiError::Parse(_)));
}
