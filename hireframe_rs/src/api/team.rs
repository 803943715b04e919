//! Team resource calls.

use reqwest::Method;

use crate::error::ApiResult;
use crate::model::{NewTeam, Team, TeamPatch};

use super::ApiClient;

impl ApiClient {
    /// `POST /team`.
    pub async fn create_team(&self, payload: &NewTeam) -> ApiResult<Team> {
        self.execute(
            self.request(Method::POST, "/team").json(payload),
            "Failed to create team",
        )
        .await
    }

    /// `GET /team/{id}`.
    pub async fn get_team(&self, id: i64) -> ApiResult<Team> {
        self.execute(
            self.request(Method::GET, &format!("/team/{id}")),
            "Failed to load team",
        )
        .await
    }

    /// `PATCH /team/{id}`.
    pub async fn update_team(&self, id: i64, patch: &TeamPatch) -> ApiResult<Team> {
        self.execute(
            self.request(Method::PATCH, &format!("/team/{id}")).json(patch),
            "Failed to update team",
        )
        .await
    }
}
