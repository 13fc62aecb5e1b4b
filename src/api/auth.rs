//! Authentication calls. The login endpoint is OAuth2 form-encoded and
//! expects the email under the `username` field; registration is JSON.

use crate::api::error::ApiError;
use crate::api::http::ApiClient;
use crate::types::auth::{TokenResponse, UserProfile};
use log::info;
use serde_json::json;

impl ApiClient {
    /// `POST /auth/login`. On success the returned token is stored in the
    /// session, making subsequent protected calls possible.
    pub(crate) async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let token: TokenResponse = self
            .post_form("/auth/login", &[("username", email), ("password", password)])
            .await?;
        self.session().store_token(token.access_token.clone());
        info!("Authenticated as {}", email);
        Ok(token)
    }

    /// `POST /auth/register`. Does not log in; call [`ApiClient::login`]
    /// afterwards.
    pub(crate) async fn register(&self, email: &str, password: &str) -> Result<UserProfile, ApiError> {
        self.post_json_public(
            "/auth/register",
            &json!({ "email": email, "password": password }),
        )
        .await
    }

    /// `GET /auth/me`.
    pub(crate) async fn me(&self) -> Result<UserProfile, ApiError> {
        self.get_json("/auth/me", &[]).await
    }
}
