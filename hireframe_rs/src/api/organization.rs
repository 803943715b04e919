//! Organization resource calls.

use reqwest::Method;

use crate::error::{ApiError, ApiResult};
use crate::model::{NewOrganization, Organization};

use super::ApiClient;

impl ApiClient {
    /// `POST /organization`. A payload without a name is rejected here,
    /// before any request goes out.
    pub async fn create_organization(&self, payload: &NewOrganization) -> ApiResult<Organization> {
        if payload.name.trim().is_empty() {
            return Err(ApiError::Validation("Organization name is required".into()));
        }
        self.execute(
            self.request(Method::POST, "/organization").json(payload),
            "Failed to create organization",
        )
        .await
    }

    /// `GET /organization`.
    pub async fn list_organizations(&self) -> ApiResult<Vec<Organization>> {
        self.execute(
            self.request(Method::GET, "/organization"),
            "Failed to load organizations",
        )
        .await
    }

    /// `GET /organization/{id}`.
    pub async fn get_organization(&self, id: i64) -> ApiResult<Organization> {
        self.execute(
            self.request(Method::GET, &format!("/organization/{id}")),
            "Failed to load organization",
        )
        .await
    }

    /// `PUT /organization/{id}` with a full replacement payload.
    pub async fn update_organization(
        &self,
        id: i64,
        payload: &NewOrganization,
    ) -> ApiResult<Organization> {
        if payload.name.trim().is_empty() {
            return Err(ApiError::Validation("Organization name is required".into()));
        }
        self.execute(
            self.request(Method::PUT, &format!("/organization/{id}")).json(payload),
            "Failed to update organization",
        )
        .await
    }

    /// `DELETE /organization/{id}`.
    pub async fn delete_organization(&self, id: i64) -> ApiResult<()> {
        self.execute_unit(
            self.request(Method::DELETE, &format!("/organization/{id}")),
            "Failed to delete organization",
        )
        .await
    }
}
