//! User update calls, including the PATCH→PUT fallback.
//!
//! The backend sometimes rejects partial PATCH bodies on user rows with a
//! "missing required fields" style error. When that happens the call is
//! replayed once as a PUT carrying a best-effort full payload: the cached
//! user with the intended patch laid over it. Fragile by construction (it
//! keys off the error text), so the replay is logged.

use reqwest::Method;

use crate::error::{ApiError, ApiResult};
use crate::model::{User, UserPatch};

use super::ApiClient;

impl ApiClient {
    /// `PATCH /user/{id}`, replayed as `PUT /user/{id}` on a
    /// missing-fields rejection.
    pub async fn update_user_by_id(
        &self,
        id: i64,
        patch: &UserPatch,
        cached: Option<&User>,
    ) -> ApiResult<User> {
        self.update_with_put_fallback(&format!("/user/{id}"), patch, cached, "Failed to update user")
            .await
    }

    /// `PATCH /auth/me`, replayed as `PUT /auth/me` on a missing-fields
    /// rejection.
    pub async fn update_me(&self, patch: &UserPatch, cached: Option<&User>) -> ApiResult<User> {
        self.update_with_put_fallback("/auth/me", patch, cached, "Failed to update profile")
            .await
    }

    async fn update_with_put_fallback(
        &self,
        path: &str,
        patch: &UserPatch,
        cached: Option<&User>,
        fallback: &str,
    ) -> ApiResult<User> {
        let first = self
            .execute(self.request(Method::PATCH, path).json(patch), fallback)
            .await;

        match first {
            Err(ApiError::Remote(message)) if message.to_lowercase().contains("missing") => {
                tracing::warn!(path, %message, "PATCH rejected, replaying as PUT");
                let full = match cached {
                    Some(user) => patch.merged_with(user),
                    None => patch.merged_with(&User::default()),
                };
                self.execute(self.request(Method::PUT, path).json(&full), fallback)
                    .await
            }
            other => other,
        }
    }
}
