//! Authentication: login, register, logout.
//!
//! Login and register return a token alongside the user record; the token
//! is persisted into the [`TokenStore`](crate::TokenStore) before the call
//! returns, so every subsequent request is authenticated. Logout is purely
//! client-side: it clears the slot and issues no network call (the backend
//! holds no session state beyond the JWT itself).

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use verde_core::{Email, User};

use crate::client::ShopClient;
use crate::error::ApiError;

/// A successful login or register response.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    /// Opaque bearer token; also persisted in the client's token store.
    pub token: String,
    /// The authenticated user.
    pub user: User,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    email: &'a str,
    first_name: &'a str,
    last_name: &'a str,
    password: &'a str,
}

impl ShopClient {
    /// Log in with email and password.
    ///
    /// On success the returned token overwrites the credential slot.
    ///
    /// # Errors
    ///
    /// Propagates the HTTP failure unchanged, or
    /// [`ApiError::Storage`] if the token cannot be persisted.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &Email, password: &str) -> Result<AuthSession, ApiError> {
        let session: AuthSession = self
            .post_json(
                "/auths/users/login",
                &LoginRequest {
                    email: email.as_str(),
                    password,
                },
            )
            .await?;

        self.token_store().set(&session.token).await?;
        debug!(user = %session.user.id, "logged in");
        Ok(session)
    }

    /// Register a new account.
    ///
    /// On success the returned token overwrites the credential slot.
    ///
    /// # Errors
    ///
    /// Propagates the HTTP failure unchanged, or
    /// [`ApiError::Storage`] if the token cannot be persisted.
    #[instrument(skip(self, password))]
    pub async fn register(
        &self,
        email: &Email,
        first_name: &str,
        last_name: &str,
        password: &str,
    ) -> Result<AuthSession, ApiError> {
        let session: AuthSession = self
            .post_json(
                "/auths/users/register",
                &RegisterRequest {
                    email: email.as_str(),
                    first_name,
                    last_name,
                    password,
                },
            )
            .await?;

        self.token_store().set(&session.token).await?;
        debug!(user = %session.user.id, "registered");
        Ok(session)
    }

    /// Log out by clearing the credential slot. No network call.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] if the slot cannot be cleared.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.token_store().clear().await?;
        debug!("logged out");
        Ok(())
    }
}
