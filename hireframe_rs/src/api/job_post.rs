//! Job-post resource calls.

use reqwest::Method;

use crate::error::ApiResult;
use crate::model::{JobPost, JobPostPatch, NewJobPost};

use super::ApiClient;

impl ApiClient {
    /// `POST /job_post`.
    pub async fn create_job_post(&self, payload: &NewJobPost) -> ApiResult<JobPost> {
        self.execute(
            self.request(Method::POST, "/job_post").json(payload),
            "Failed to create job post",
        )
        .await
    }

    /// `PATCH /job_post/{id}`.
    pub async fn update_job_post(&self, id: i64, patch: &JobPostPatch) -> ApiResult<JobPost> {
        self.execute(
            self.request(Method::PATCH, &format!("/job_post/{id}")).json(patch),
            "Failed to update job post",
        )
        .await
    }

    /// `GET /job_post?team_id=...`.
    pub async fn job_posts_by_team(&self, team_id: i64) -> ApiResult<Vec<JobPost>> {
        self.execute(
            self.request(Method::GET, &format!("/job_post?team_id={team_id}")),
            "Failed to load job posts",
        )
        .await
    }
}
