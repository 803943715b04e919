//! Login and signup: plain POST-and-redirect flows, no protocol beyond the
//! backend's token response.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::model::User;

use super::ApiClient;

/// Token envelope returned by `POST /auth/login` and `POST /auth/signup`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthToken {
    #[serde(rename = "authToken")]
    pub auth_token: String,
}

#[derive(Serialize)]
struct LoginPayload<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignupPayload<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

impl ApiClient {
    /// `POST /auth/login`.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<AuthToken> {
        self.execute(
            self.request(Method::POST, "/auth/login")
                .json(&LoginPayload { email, password }),
            "Login failed",
        )
        .await
    }

    /// `POST /auth/signup`.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> ApiResult<AuthToken> {
        self.execute(
            self.request(Method::POST, "/auth/signup")
                .json(&SignupPayload { name, email, password }),
            "Signup failed",
        )
        .await
    }

    /// `GET /auth/me`: the signed-in user, cached in the session afterwards.
    pub async fn me(&self) -> ApiResult<User> {
        self.execute(self.request(Method::GET, "/auth/me"), "Failed to load profile")
            .await
    }
}
