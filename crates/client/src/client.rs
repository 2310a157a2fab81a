//! Shared HTTP transport for every service call.
//!
//! One `reqwest::Client` behind an `Arc`, configured with a single base
//! endpoint. Before each request the [`TokenStore`] is consulted once: a
//! present token is attached as `Authorization: JWT <token>`, an absent
//! token (or a failed storage read) sends the request unauthenticated -
//! the transport never short-circuits on the credential check. No retry,
//! no timeout policy, no response caching.

use std::sync::Arc;

use reqwest::header;
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ApiError, BODY_SNIPPET_LEN};
use crate::token::TokenStore;

/// Client for the Verde Market REST API.
///
/// Cheap to clone; clones share the transport and the credential slot.
/// Service methods are grouped per resource in the `services` modules,
/// all as methods on this one struct.
#[derive(Clone)]
pub struct ShopClient {
    inner: Arc<ShopClientInner>,
}

struct ShopClientInner {
    http: reqwest::Client,
    base_url: String,
    tokens: TokenStore,
}

impl ShopClient {
    /// Create a new API client over `config.base_url`.
    #[must_use]
    pub fn new(config: &ClientConfig, tokens: TokenStore) -> Self {
        let base_url = config.base_url.as_str().trim_end_matches('/').to_owned();
        Self {
            inner: Arc::new(ShopClientInner {
                http: reqwest::Client::new(),
                base_url,
                tokens,
            }),
        }
    }

    /// The credential slot this client reads before every request.
    #[must_use]
    pub fn token_store(&self) -> &TokenStore {
        &self.inner.tokens
    }

    /// Join a request path onto the base endpoint.
    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    /// Attach the persisted credential, if one can be read.
    ///
    /// A storage failure downgrades to an unauthenticated request; the
    /// backend decides whether that is acceptable for the endpoint.
    async fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.inner.tokens.get().await {
            Ok(Some(token)) => request.header(
                header::AUTHORIZATION,
                format!("JWT {}", token.expose_secret()),
            ),
            Ok(None) => request,
            Err(err) => {
                debug!(error = %err, "credential read failed, sending unauthenticated");
                request
            }
        }
    }

    /// Send a request and return the response body on a 2xx status.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<String, ApiError> {
        let response = self.authorize(request).await.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(BODY_SNIPPET_LEN).collect::<String>(),
                "shop API returned non-success status"
            );
            return Err(ApiError::status(status, &body));
        }

        Ok(body)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.send(self.inner.http.get(self.endpoint(path))).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .send(self.inner.http.post(self.endpoint(path)).json(body))
            .await?;
        Ok(serde_json::from_str(&response)?)
    }

    /// POST with a body, discarding whatever the server answers.
    pub(crate) async fn post_unit<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        self.send(self.inner.http.post(self.endpoint(path)).json(body))
            .await?;
        Ok(())
    }

    /// POST with an empty body; the server derives everything server-side.
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.send(self.inner.http.post(self.endpoint(path))).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.inner.http.delete(self.endpoint(path)))
            .await?;
        Ok(())
    }
}

impl std::fmt::Debug for ShopClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopClient")
            .field("base_url", &self.inner.base_url)
            .field("tokens", &self.inner.tokens)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use url::Url;

    fn client(base: &str) -> ShopClient {
        let config = ClientConfig::new(Url::parse(base).unwrap(), PathBuf::from("unused"));
        ShopClient::new(&config, TokenStore::in_memory())
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let client = client("http://localhost:8000/api/v1");
        assert_eq!(
            client.endpoint("/products/"),
            "http://localhost:8000/api/v1/products/"
        );
    }

    #[test]
    fn test_endpoint_trims_trailing_slash_on_base() {
        let client = client("http://localhost:8000/api/v1/");
        assert_eq!(
            client.endpoint("/cart/remove/7"),
            "http://localhost:8000/api/v1/cart/remove/7"
        );
    }
}
