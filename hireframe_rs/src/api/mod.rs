//! Service layer: per-resource wrappers over the Xano HTTP API.
//!
//! One [`ApiClient`] is shared by every resource module. Requests carry
//! `Content-Type: application/json` and, when the session has a token,
//! `Authorization: Bearer <token>`. Responses normalize to
//! [`ApiError`](crate::error::ApiError): the backend's own message text when
//! the body has one, a per-resource fallback when it does not, and the
//! generic network message for anything transport- or parse-shaped.

mod auth;
mod job_post;
mod organization;
mod roles;
mod team;
mod user;

pub use auth::AuthToken;

use std::sync::Mutex;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

/// HTTP client for the hosted backend.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Mutex<Option<String>>,
}

impl ApiClient {
    /// Client with no bearer token (pre-login calls).
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url,
            token: Mutex::new(None),
        }
    }

    /// Client that authenticates with the given token from the start.
    pub fn with_token(config: ApiConfig, token: Option<String>) -> Self {
        let client = Self::new(config);
        client.set_token(token);
        client
    }

    /// Swap the bearer token (login, logout).
    pub fn set_token(&self, token: Option<String>) {
        *self.token.lock().expect("token lock") = token;
    }

    fn token(&self) -> Option<String> {
        self.token.lock().expect("token lock").clone()
    }

    /// Start a request with the standard headers attached.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!(%method, path, "dispatching api request");
        let mut builder = self
            .http
            .request(method, format!("{}{}", self.base_url, path))
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = self.token() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Send and decode a JSON response, normalizing every failure shape.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        fallback: &str,
    ) -> ApiResult<T> {
        let response = request.send().await.map_err(|err| {
            warn!(%err, "transport failure");
            ApiError::Network
        })?;

        if response.status().is_success() {
            response.json::<T>().await.map_err(|err| {
                warn!(%err, "unparseable success body");
                ApiError::Network
            })
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let message = error_message(&body).unwrap_or_else(|| fallback.to_string());
            warn!(%status, %message, "api error");
            Err(ApiError::Remote(message))
        }
    }

    /// Send a request whose response body is irrelevant (deletes).
    async fn execute_unit(&self, request: RequestBuilder, fallback: &str) -> ApiResult<()> {
        let response = request.send().await.map_err(|err| {
            warn!(%err, "transport failure");
            ApiError::Network
        })?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let message = error_message(&body).unwrap_or_else(|| fallback.to_string());
            warn!(%status, %message, "api error");
            Err(ApiError::Remote(message))
        }
    }
}

/// Pull a human-usable message out of an error body. The backend is expected
/// (but not guaranteed) to send JSON with one of `message`/`error`/`detail`.
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    for key in ["message", "error", "detail"] {
        if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
            if !text.trim().is_empty() {
                return Some(text.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_message_then_error_then_detail() {
        assert_eq!(
            error_message(r#"{"message": "Missing required fields"}"#).as_deref(),
            Some("Missing required fields")
        );
        assert_eq!(
            error_message(r#"{"error": "bad input", "detail": "ignored"}"#).as_deref(),
            Some("bad input")
        );
        assert_eq!(
            error_message(r#"{"detail": "row not found"}"#).as_deref(),
            Some("row not found")
        );
    }

    #[test]
    fn error_message_rejects_unusable_bodies() {
        assert_eq!(error_message("<html>502</html>"), None);
        assert_eq!(error_message(r#"{"code": 42}"#), None);
        assert_eq!(error_message(r#"{"message": "   "}"#), None);
        assert_eq!(error_message(""), None);
    }
}
