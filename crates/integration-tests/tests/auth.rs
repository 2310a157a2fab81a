//! Credential persistence and the Authorization header contract.
//!
//! The client must attach `Authorization: JWT <token>` to every request
//! once a token is persisted, and must send nothing (and not fail) when
//! the slot is empty.

#![allow(clippy::unwrap_used)]

use httpmock::prelude::*;
use secrecy::ExposeSecret;
use serde_json::json;
use verde_client::TokenStore;
use verde_core::Email;
use verde_integration_tests::{TestContext, user_json};

#[tokio::test]
async fn login_persists_token_and_returns_user() {
    let ctx = TestContext::new();
    let login = ctx.server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/auths/users/login")
            .json_body(json!({"email": "jo@example.com", "password": "hunter2!"}));
        then.status(200)
            .json_body(json!({"token": "tok-1", "user": user_json()}));
    });

    let email = Email::parse("jo@example.com").unwrap();
    let session = ctx.client.login(&email, "hunter2!").await.unwrap();

    login.assert();
    assert_eq!(session.token, "tok-1");
    assert_eq!(session.user.first_name, "Jo");

    let stored = ctx.client.token_store().get().await.unwrap().unwrap();
    assert_eq!(stored.expose_secret(), "tok-1");
}

#[tokio::test]
async fn register_persists_token() {
    let ctx = TestContext::new();
    let register = ctx.server.mock(|when, then| {
        when.method(POST).path("/api/v1/auths/users/register").json_body(json!({
            "email": "jo@example.com",
            "first_name": "Jo",
            "last_name": "Woods",
            "password": "hunter2!"
        }));
        then.status(200)
            .json_body(json!({"token": "tok-new", "user": user_json()}));
    });

    let email = Email::parse("jo@example.com").unwrap();
    ctx.client
        .register(&email, "Jo", "Woods", "hunter2!")
        .await
        .unwrap();

    register.assert();
    let stored = ctx.client.token_store().get().await.unwrap().unwrap();
    assert_eq!(stored.expose_secret(), "tok-new");
}

#[tokio::test]
async fn persisted_token_is_sent_on_every_request() {
    let ctx = TestContext::authenticated("persisted-token").await;
    let products = ctx.server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/products/")
            .header("authorization", "JWT persisted-token");
        then.status(200).json_body(json!([]));
    });

    ctx.client.products().await.unwrap();
    ctx.client.products().await.unwrap();

    assert_eq!(products.hits(), 2);
}

#[tokio::test]
async fn new_login_overwrites_the_sent_token() {
    let ctx = TestContext::authenticated("old-token").await;
    ctx.server.mock(|when, then| {
        when.method(POST).path("/api/v1/auths/users/login");
        then.status(200)
            .json_body(json!({"token": "new-token", "user": user_json()}));
    });
    let with_new_token = ctx.server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/products/")
            .header("authorization", "JWT new-token");
        then.status(200).json_body(json!([]));
    });

    let email = Email::parse("jo@example.com").unwrap();
    ctx.client.login(&email, "pw").await.unwrap();
    ctx.client.products().await.unwrap();

    with_new_token.assert();
}

#[tokio::test]
async fn missing_token_sends_no_authorization_header() {
    let ctx = TestContext::new();
    // Never matches a request without the header, regardless of mock order
    let with_header = ctx.server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/products/")
            .header_exists("authorization");
        then.status(500);
    });
    let without_header = ctx.server.mock(|when, then| {
        when.method(GET).path("/api/v1/products/");
        then.status(200).json_body(json!([]));
    });

    let products = ctx.client.products().await.unwrap();

    assert!(products.is_empty());
    assert_eq!(with_header.hits(), 0);
    assert_eq!(without_header.hits(), 1);
}

#[tokio::test]
async fn failed_credential_read_still_sends_unauthenticated() {
    // A directory in the slot position makes every token read fail;
    // the client must downgrade to an unauthenticated request, not
    // short-circuit the call
    let ctx = TestContext::with_token_store(TokenStore::file(std::env::temp_dir()));
    let with_header = ctx.server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/products/")
            .header_exists("authorization");
        then.status(500);
    });
    let without_header = ctx.server.mock(|when, then| {
        when.method(GET).path("/api/v1/products/");
        then.status(200).json_body(json!([]));
    });

    let products = ctx.client.products().await.unwrap();

    assert!(products.is_empty());
    assert_eq!(with_header.hits(), 0);
    assert_eq!(without_header.hits(), 1);
}

#[tokio::test]
async fn logout_clears_the_slot_without_a_network_call() {
    let ctx = TestContext::authenticated("tok").await;

    ctx.client.logout().await.unwrap();

    assert!(ctx.client.token_store().get().await.unwrap().is_none());
}
