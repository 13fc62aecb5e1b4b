//! Request plumbing shared by every backend call.

use crate::api::error::ApiError;
use crate::api::session::Session;
use log::{debug, warn};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Owns the HTTP client, the backend base URL and the session. Protected
/// calls attach the bearer token and translate a 401 into a session expiry.
pub(crate) struct ApiClient {
    base_url: String,
    http: Client,
    session: Arc<Session>,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>, session: Arc<Session>) -> ApiClient {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        ApiClient {
            base_url,
            http: Client::new(),
            session,
        }
    }

    pub(crate) fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET` a protected endpoint and decode the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        let req = self.http.get(&url).query(query);
        self.send(req, url, true).await
    }

    /// `POST` a JSON body to a protected endpoint and decode the response.
    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        let req = self.http.post(&url).json(body);
        self.send(req, url, true).await
    }

    /// `POST` a JSON body to a public endpoint (registration).
    pub(crate) async fn post_json_public<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        let req = self.http.post(&url).json(body);
        self.send(req, url, false).await
    }

    /// `POST` a form-encoded body to a public endpoint (login).
    pub(crate) async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        let req = self.http.post(&url).form(form);
        self.send(req, url, false).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        mut req: RequestBuilder,
        url: String,
        protected: bool,
    ) -> Result<T, ApiError> {
        if protected {
            match self.session.token() {
                Some(token) => req = req.bearer_auth(token),
                None => return Err(ApiError::NoSession),
            }
        }
        debug!("Requesting {}", url);

        let response = req
            .send()
            .await
            .map_err(|e| ApiError::Request(url.clone(), e))?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            warn!("Backend rejected credentials for {}; expiring session", url);
            self.session.expire();
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            warn!("HTTP error for {}: {}", url, status);
            return Err(ApiError::Status { url, status });
        }

        response.json::<T>().await.map_err(|e| ApiError::Decode(url, e))
    }
}
